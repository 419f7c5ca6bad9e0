//! Scalar-emulation vector engine.
//!
//! [`Vector<T, N>`] stores its lanes in a plain `[T; N]` and implements every
//! operation family of [`crate::simd::traits`] with loops over that array. It
//! is the implementation used wherever no hardware type exists for a
//! (type, width) pair, and the reference every hardware type is tested
//! against.
//!
//! # Usage
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! let a = Vector::<i32, 8>::from_array([1, 2, 3, 4, 5, 6, 7, 8]);
//! let b = Vector::<i32, 8>::from_array([8, 7, 6, 5, 4, 3, 2, 1]);
//! assert_eq!(a.add(&b).hadd(), 72);
//!
//! let odd = Mask::new([false, true, false, true, false, true, false, true]);
//! let c = a.mul_scalar_masked(&odd, 10);
//! assert_eq!(c.to_array(), [1, 20, 3, 40, 5, 60, 7, 80]);
//! ```

mod arith;
mod convert;
mod logic;
mod ops;
mod pack;

pub use convert::{Narrow, ToFloat, ToInt, ToSigned, ToUint, ToUnsigned, Widen};

use std::fmt;

use crate::simd::element::SimdElement;
use crate::simd::traits::SimdVector;
use crate::simd::MAX_SIMD_SIZE;

/// Alignment for a vector of `bytes` bytes: the next power of two, but never
/// less than the widest hardware register on the target.
pub(crate) const fn alignment_for(bytes: usize) -> usize {
    let natural = bytes.next_power_of_two();
    if natural > MAX_SIMD_SIZE {
        natural
    } else {
        MAX_SIMD_SIZE
    }
}

/// `N` lanes of `T`, emulated with scalar loops.
///
/// A plain value type: `Copy`, no heap, no interior mutability. Construct it
/// with one of the named factories, never through an implicit conversion:
///
/// - [`zero`](SimdVector::zero) and [`splat`](SimdVector::splat) for
///   broadcasts,
/// - [`from_array`](SimdVector::from_array) for one value per lane,
/// - [`load`](SimdVector::load) for raw memory,
/// - [`pack`](crate::simd::traits::SimdPack::pack) for two halves.
///
/// The storage is `[T; N]` with `T`'s alignment. Aligned loads and stores
/// require [`SimdVector::ALIGNMENT`], which is at least the target's widest
/// register, so the same buffers work for a hardware-backed type.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Vector<T, const N: usize> {
    lanes: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// Borrows the lanes.
    #[inline(always)]
    pub const fn as_array(&self) -> &[T; N] {
        &self.lanes
    }

    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.lanes
    }
}

impl<T: SimdElement, const N: usize> Vector<T, N> {
    /// Builds a vector whose lane `i` is `f(i)`.
    #[inline(always)]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            lanes: std::array::from_fn(f),
        }
    }

    #[inline(always)]
    pub(crate) fn zip_map(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self::from_fn(|i| f(self.lanes[i], rhs.lanes[i]))
    }
}

impl<T: SimdElement, const N: usize> SimdVector<N> for Vector<T, N> {
    type Scalar = T;

    const ALIGNMENT: usize = alignment_for(N * std::mem::size_of::<T>());

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self { lanes: [value; N] }
    }

    #[inline(always)]
    fn from_array(lanes: [T; N]) -> Self {
        Self { lanes }
    }

    #[inline(always)]
    fn to_array(&self) -> [T; N] {
        self.lanes
    }

    #[inline(always)]
    fn extract(&self, lane: usize) -> T {
        self.lanes[lane]
    }

    #[inline(always)]
    fn insert(&mut self, lane: usize, value: T) {
        self.lanes[lane] = value;
    }

    #[inline(always)]
    unsafe fn extract_unchecked(&self, lane: usize) -> T {
        debug_assert!(lane < N, "lane {lane} out of range for {N} lanes");
        unsafe { *self.lanes.get_unchecked(lane) }
    }

    #[inline(always)]
    unsafe fn insert_unchecked(&mut self, lane: usize, value: T) {
        debug_assert!(lane < N, "lane {lane} out of range for {N} lanes");
        unsafe { *self.lanes.get_unchecked_mut(lane) = value };
    }
}

impl<T: SimdElement, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: SimdElement, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(lanes: [T; N]) -> Self {
        Self { lanes }
    }
}

impl<T: SimdElement, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self {
        vector.lanes
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, lane) in self.lanes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", lane)?;
        }
        write!(f, "]")
    }
}
