//! Lane permutation selectors.

use std::fmt;

use crate::error::{Result, SimdError};

/// An index selector for an `N`-lane vector: output lane `i` takes source
/// lane `indices[i]`.
///
/// Indices are validated on construction, so applying a swizzle can never
/// read outside the source vector. Lanes may be repeated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Swizzle<const N: usize> {
    indices: [usize; N],
}

impl<const N: usize> Swizzle<N> {
    /// Builds a selector, rejecting any index `>= N`.
    pub fn new(indices: [usize; N]) -> Result<Self> {
        if let Some(lane) = indices.iter().position(|&index| index >= N) {
            return Err(SimdError::InvalidSwizzle {
                lane,
                index: indices[lane],
                lanes: N,
            });
        }
        Ok(Self { indices })
    }

    /// Keeps every lane in place.
    pub fn identity() -> Self {
        Self {
            indices: std::array::from_fn(|i| i),
        }
    }

    /// Reverses lane order.
    pub fn reverse() -> Self {
        Self {
            indices: std::array::from_fn(|i| N - 1 - i),
        }
    }

    /// Output lane `i` takes source lane `(i + by) % N`.
    pub fn rotate_left(by: usize) -> Self {
        Self {
            indices: std::array::from_fn(|i| (i + by % N) % N),
        }
    }

    /// Replicates `lane` into every output lane.
    pub fn broadcast(lane: usize) -> Result<Self> {
        Self::new([lane; N])
    }

    /// Source lane for output lane `lane`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= N`.
    #[inline(always)]
    pub fn index(&self, lane: usize) -> usize {
        self.indices[lane]
    }

    #[inline(always)]
    pub fn to_array(&self) -> [usize; N] {
        self.indices
    }

    /// Applies the selector to a plain array.
    #[inline(always)]
    pub fn apply<T: Copy>(&self, source: &[T; N]) -> [T; N] {
        std::array::from_fn(|i| source[self.indices[i]])
    }
}

impl<const N: usize> TryFrom<[usize; N]> for Swizzle<N> {
    type Error = SimdError;

    fn try_from(indices: [usize; N]) -> Result<Self> {
        Self::new(indices)
    }
}

impl<const N: usize> fmt::Display for Swizzle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.indices)
    }
}
