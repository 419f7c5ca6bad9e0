//! Per-lane boolean selectors.

use std::fmt;
use std::ops;

use crate::error::{slice_too_short, Result};

/// A lane selector for an `N`-lane vector.
///
/// Masked operations only touch the lanes whose flag is `true`; every other
/// lane keeps the value it had before the operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Mask<const N: usize> {
    lanes: [bool; N],
}

impl<const N: usize> Mask<N> {
    /// Number of lanes.
    pub const LANES: usize = N;

    #[inline(always)]
    pub const fn new(lanes: [bool; N]) -> Self {
        Self { lanes }
    }

    /// Sets every lane to `value`.
    #[inline(always)]
    pub const fn splat(value: bool) -> Self {
        Self { lanes: [value; N] }
    }

    /// Activates the first `count` lanes (all of them if `count >= N`).
    ///
    /// This is the tail mask for processing the remainder of a slice.
    #[inline(always)]
    pub fn first_n(count: usize) -> Self {
        Self {
            lanes: std::array::from_fn(|i| i < count),
        }
    }

    /// Copies the first `N` flags of `slice`.
    pub fn from_slice(slice: &[bool]) -> Result<Self> {
        if slice.len() < N {
            return Err(slice_too_short(N, slice.len()));
        }
        let mut lanes = [false; N];
        lanes.copy_from_slice(&slice[..N]);
        Ok(Self { lanes })
    }

    #[inline(always)]
    pub const fn to_array(&self) -> [bool; N] {
        self.lanes
    }

    /// Flag of `lane`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= N`.
    #[inline(always)]
    pub fn get(&self, lane: usize) -> bool {
        self.lanes[lane]
    }

    /// # Safety
    ///
    /// `lane` must be less than `N`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, lane: usize) -> bool {
        debug_assert!(lane < N, "lane {lane} out of range for {N} lanes");
        unsafe { *self.lanes.get_unchecked(lane) }
    }

    /// # Panics
    ///
    /// Panics if `lane >= N`.
    #[inline(always)]
    pub fn set(&mut self, lane: usize, value: bool) {
        self.lanes[lane] = value;
    }

    #[inline(always)]
    pub fn land(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a & b)
    }

    #[inline(always)]
    pub fn lor(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a | b)
    }

    #[inline(always)]
    pub fn lxor(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a ^ b)
    }

    /// `!self & other`.
    #[inline(always)]
    pub fn landnot(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| !a & b)
    }

    #[inline(always)]
    pub fn lnot(&self) -> Self {
        Self {
            lanes: self.lanes.map(|a| !a),
        }
    }

    /// True if every lane is set.
    #[inline(always)]
    pub fn hland(&self) -> bool {
        self.lanes.iter().all(|&a| a)
    }

    /// True if any lane is set.
    #[inline(always)]
    pub fn hlor(&self) -> bool {
        self.lanes.iter().any(|&a| a)
    }

    /// Parity of the set lanes.
    #[inline(always)]
    pub fn hlxor(&self) -> bool {
        self.lanes.iter().fold(false, |acc, &a| acc ^ a)
    }

    /// Number of set lanes.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.lanes.iter().filter(|&&a| a).count()
    }

    #[inline(always)]
    fn zip_map(&self, other: &Self, f: impl Fn(bool, bool) -> bool) -> Self {
        Self {
            lanes: std::array::from_fn(|i| f(self.lanes[i], other.lanes[i])),
        }
    }
}

impl<const N: usize> Default for Mask<N> {
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<const N: usize> From<[bool; N]> for Mask<N> {
    fn from(lanes: [bool; N]) -> Self {
        Self::new(lanes)
    }
}

impl<const N: usize> From<Mask<N>> for [bool; N] {
    fn from(mask: Mask<N>) -> Self {
        mask.lanes
    }
}

impl<const N: usize> ops::Index<usize> for Mask<N> {
    type Output = bool;

    #[inline(always)]
    fn index(&self, lane: usize) -> &bool {
        &self.lanes[lane]
    }
}

impl<const N: usize> ops::BitAnd for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        self.land(&rhs)
    }
}

impl<const N: usize> ops::BitOr for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        self.lor(&rhs)
    }
}

impl<const N: usize> ops::BitXor for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        self.lxor(&rhs)
    }
}

impl<const N: usize> ops::Not for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        self.lnot()
    }
}

impl<const N: usize> fmt::Display for Mask<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, lane) in self.lanes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u8::from(*lane))?;
        }
        write!(f, "]")
    }
}
