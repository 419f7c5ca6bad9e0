//! Checked wrappers over the fast-path operations.
//!
//! The fast path trusts its caller: an out-of-range lane panics, a bad
//! pointer or gather index is undefined behavior, an integer division by zero
//! panics. The traits here validate those preconditions first and report a
//! violation as a [`SimdError`] instead. They are blanket-implemented for
//! every vector type, so importing the trait is all it takes.
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! let v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
//! assert_eq!(v.try_extract(3), Ok(4));
//! assert!(v.try_extract(4).is_err());
//!
//! let data = [0.5f32; 3];
//! assert!(Vector::<f32, 4>::try_from_slice(&data).is_err());
//! ```

use num::Zero;
use tracing::debug;

use crate::error::{lane_out_of_range, slice_too_short, Result, SimdError};
use crate::simd::element::IntElement;
use crate::simd::traits::{LaneIndices, SimdArith, SimdGather, SimdVector};
use crate::simd::Mask;

/// Checked lane access and memory transfer.
pub trait SimdChecked<const N: usize>: SimdVector<N> {
    /// [`extract`](SimdVector::extract), or
    /// [`SimdError::LaneOutOfRange`] for `lane >= N`.
    fn try_extract(&self, lane: usize) -> Result<Self::Scalar> {
        if lane >= N {
            debug!(lane, lanes = N, "Rejected lane extraction");
            return Err(lane_out_of_range(lane, N));
        }
        Ok(unsafe { self.extract_unchecked(lane) })
    }

    fn try_insert(&mut self, lane: usize, value: Self::Scalar) -> Result<()> {
        if lane >= N {
            debug!(lane, lanes = N, "Rejected lane insertion");
            return Err(lane_out_of_range(lane, N));
        }
        unsafe { self.insert_unchecked(lane, value) };
        Ok(())
    }

    /// Loads the first `N` elements of `slice`.
    fn try_from_slice(slice: &[Self::Scalar]) -> Result<Self> {
        if slice.len() < N {
            debug!(required = N, actual = slice.len(), "Slice too short for load");
            return Err(slice_too_short(N, slice.len()));
        }
        Ok(unsafe { Self::load(slice.as_ptr()) })
    }

    /// Like [`try_from_slice`](Self::try_from_slice), additionally requiring
    /// the slice to start on an [`ALIGNMENT`](SimdVector::ALIGNMENT)
    /// boundary.
    fn try_load_aligned(slice: &[Self::Scalar]) -> Result<Self> {
        if slice.len() < N {
            debug!(required = N, actual = slice.len(), "Slice too short for aligned load");
            return Err(slice_too_short(N, slice.len()));
        }
        check_alignment(slice.as_ptr() as usize, Self::ALIGNMENT)?;
        Ok(unsafe { Self::load_aligned(slice.as_ptr()) })
    }

    /// Stores the lanes into the first `N` elements of `slice`.
    fn try_store_into(&self, slice: &mut [Self::Scalar]) -> Result<()> {
        if slice.len() < N {
            debug!(required = N, actual = slice.len(), "Slice too short for store");
            return Err(slice_too_short(N, slice.len()));
        }
        unsafe { self.store(slice.as_mut_ptr()) };
        Ok(())
    }
}

impl<V: SimdVector<N>, const N: usize> SimdChecked<N> for V {}

/// Gather and scatter against a slice, with every index bounds-checked
/// before any element is touched.
pub trait SimdCheckedGather<const N: usize>: SimdGather<N> {
    fn try_gather<I: LaneIndices<N>>(base: &[Self::Scalar], indices: &I) -> Result<Self> {
        check_indices(&Mask::splat(true), base.len(), indices)?;
        Ok(unsafe { Self::gather(base.as_ptr(), indices) })
    }

    /// Only active lanes' indices are checked and read.
    fn try_gather_masked<I: LaneIndices<N>>(
        &self,
        mask: &Mask<N>,
        base: &[Self::Scalar],
        indices: &I,
    ) -> Result<Self> {
        check_indices(mask, base.len(), indices)?;
        Ok(unsafe { self.gather_masked(mask, base.as_ptr(), indices) })
    }

    /// On error nothing is written.
    fn try_scatter<I: LaneIndices<N>>(&self, base: &mut [Self::Scalar], indices: &I) -> Result<()> {
        check_indices(&Mask::splat(true), base.len(), indices)?;
        unsafe { self.scatter(base.as_mut_ptr(), indices) };
        Ok(())
    }

    fn try_scatter_masked<I: LaneIndices<N>>(
        &self,
        mask: &Mask<N>,
        base: &mut [Self::Scalar],
        indices: &I,
    ) -> Result<()> {
        check_indices(mask, base.len(), indices)?;
        unsafe { self.scatter_masked(mask, base.as_mut_ptr(), indices) };
        Ok(())
    }
}

impl<V: SimdGather<N>, const N: usize> SimdCheckedGather<N> for V {}

/// Integer division that reports a zero divisor instead of panicking.
pub trait SimdCheckedDiv<const N: usize>: SimdArith<N>
where
    Self::Scalar: IntElement,
{
    fn try_div(&self, rhs: &Self) -> Result<Self> {
        check_divisors(&Mask::splat(true), &rhs.to_array())?;
        Ok(self.div(rhs))
    }

    /// Only active lanes need a non-zero divisor.
    fn try_div_masked(&self, mask: &Mask<N>, rhs: &Self) -> Result<Self> {
        check_divisors(mask, &rhs.to_array())?;
        Ok(self.div_masked(mask, rhs))
    }

    fn try_div_scalar(&self, rhs: Self::Scalar) -> Result<Self> {
        if rhs.is_zero() {
            debug!("Rejected division by a zero scalar");
            return Err(SimdError::DivisionByZero { lane: 0 });
        }
        Ok(self.div_scalar(rhs))
    }

    fn try_div_scalar_masked(&self, mask: &Mask<N>, rhs: Self::Scalar) -> Result<Self> {
        if rhs.is_zero() {
            if let Some(lane) = (0..N).find(|&lane| mask.get(lane)) {
                debug!(lane, "Rejected division by a zero scalar");
                return Err(SimdError::DivisionByZero { lane });
            }
        }
        Ok(self.div_scalar_masked(mask, rhs))
    }
}

impl<V, const N: usize> SimdCheckedDiv<N> for V
where
    V: SimdArith<N>,
    V::Scalar: IntElement,
{
}

fn check_alignment(address: usize, alignment: usize) -> Result<()> {
    if address % alignment != 0 {
        debug!(address, alignment, "Rejected misaligned pointer");
        return Err(SimdError::Misaligned { address, alignment });
    }
    Ok(())
}

fn check_indices<I: LaneIndices<N>, const N: usize>(
    mask: &Mask<N>,
    len: usize,
    indices: &I,
) -> Result<()> {
    for lane in (0..N).filter(|&lane| mask.get(lane)) {
        let index = indices.lane_index(lane);
        if index >= len {
            debug!(lane, index, len, "Rejected out of bounds gather/scatter index");
            return Err(SimdError::IndexOutOfBounds { lane, index, len });
        }
    }
    Ok(())
}

fn check_divisors<T: IntElement, const N: usize>(mask: &Mask<N>, divisors: &[T; N]) -> Result<()> {
    for lane in (0..N).filter(|&lane| mask.get(lane)) {
        if divisors[lane].is_zero() {
            debug!(lane, "Rejected division by zero");
            return Err(SimdError::DivisionByZero { lane });
        }
    }
    Ok(())
}
