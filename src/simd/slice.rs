//! Element-wise operations over whole slices.
//!
//! [`SimdSliceOps`] walks slices of any length in blocks of [`BULK_LANES`]
//! lanes. Complete blocks go through unaligned vector loads and stores; the
//! final partial block uses a [`Mask::first_n`] tail mask with masked loads
//! and stores, so no element past the end of a slice is ever touched.
//!
//! Each operation comes in three flavors:
//!
//! | method | strategy |
//! |---|---|
//! | `scalar_*` | plain iterator loop, the reference result |
//! | `simd_*` | single-threaded vector blocks |
//! | `par_simd_*` | rayon over [`PARALLEL_CHUNK_SIZE`] chunks, vector blocks within each |
//!
//! The parallel flavor only fans out above [`PARALLEL_SIZE_THRESHOLD`]
//! elements and runs the single-threaded path below it.
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! let a: Vec<i32> = (0..100).collect();
//! let b: Vec<i32> = (0..100).rev().collect();
//! let c = a.simd_add(&b).unwrap();
//! assert!(c.iter().all(|&x| x == 99));
//! assert_eq!(a.simd_sum(), 4950);
//! assert!(a.simd_add(&b[1..]).is_err());
//! ```

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{length_mismatch, Result};
use crate::simd::element::SimdElement;
use crate::simd::traits::{SimdArith, SimdFused, SimdReduce, SimdVector};
use crate::simd::{Mask, Vector};

/// Lanes per block.
pub const BULK_LANES: usize = 8;

/// Minimum slice length for which the `par_simd_*` methods spread work over
/// the rayon pool.
pub const PARALLEL_SIZE_THRESHOLD: usize = 1 << 16;

/// Elements handed to one rayon task. A multiple of [`BULK_LANES`], so only
/// the last chunk has a tail.
pub const PARALLEL_CHUNK_SIZE: usize = 1 << 14;

type Bulk<T> = Vector<T, BULK_LANES>;
type BinaryOp<T> = fn(&Bulk<T>, &Bulk<T>) -> Bulk<T>;

/// Slice-level arithmetic, reductions and dot products.
pub trait SimdSliceOps<T> {
    /// `self[i] + rhs[i]` for every `i`.
    ///
    /// # Errors
    ///
    /// [`SimdError::LengthMismatch`](crate::error::SimdError::LengthMismatch)
    /// if the slices differ in length.
    fn simd_add(&self, rhs: &[T]) -> Result<Vec<T>>;
    fn par_simd_add(&self, rhs: &[T]) -> Result<Vec<T>>;
    fn scalar_add(&self, rhs: &[T]) -> Result<Vec<T>>;

    fn simd_sub(&self, rhs: &[T]) -> Result<Vec<T>>;
    fn par_simd_sub(&self, rhs: &[T]) -> Result<Vec<T>>;
    fn scalar_sub(&self, rhs: &[T]) -> Result<Vec<T>>;

    fn simd_mul(&self, rhs: &[T]) -> Result<Vec<T>>;
    fn par_simd_mul(&self, rhs: &[T]) -> Result<Vec<T>>;
    fn scalar_mul(&self, rhs: &[T]) -> Result<Vec<T>>;

    /// Sum of all elements. Float sums are accumulated per lane and then
    /// folded, so they can differ from [`scalar_sum`](Self::scalar_sum) in
    /// the last bits.
    fn simd_sum(&self) -> T;
    fn par_simd_sum(&self) -> T;
    fn scalar_sum(&self) -> T;

    /// `sum(self[i] * rhs[i])`.
    fn simd_dot(&self, rhs: &[T]) -> Result<T>;
    fn par_simd_dot(&self, rhs: &[T]) -> Result<T>;
}

impl<T: SimdElement> SimdSliceOps<T> for [T] {
    fn simd_add(&self, rhs: &[T]) -> Result<Vec<T>> {
        simd_zip(self, rhs, <Bulk<T> as SimdArith<BULK_LANES>>::add)
    }

    fn par_simd_add(&self, rhs: &[T]) -> Result<Vec<T>> {
        par_simd_zip(self, rhs, <Bulk<T> as SimdArith<BULK_LANES>>::add)
    }

    fn scalar_add(&self, rhs: &[T]) -> Result<Vec<T>> {
        scalar_zip(self, rhs, T::lane_add)
    }

    fn simd_sub(&self, rhs: &[T]) -> Result<Vec<T>> {
        simd_zip(self, rhs, <Bulk<T> as SimdArith<BULK_LANES>>::sub)
    }

    fn par_simd_sub(&self, rhs: &[T]) -> Result<Vec<T>> {
        par_simd_zip(self, rhs, <Bulk<T> as SimdArith<BULK_LANES>>::sub)
    }

    fn scalar_sub(&self, rhs: &[T]) -> Result<Vec<T>> {
        scalar_zip(self, rhs, T::lane_sub)
    }

    fn simd_mul(&self, rhs: &[T]) -> Result<Vec<T>> {
        simd_zip(self, rhs, <Bulk<T> as SimdArith<BULK_LANES>>::mul)
    }

    fn par_simd_mul(&self, rhs: &[T]) -> Result<Vec<T>> {
        par_simd_zip(self, rhs, <Bulk<T> as SimdArith<BULK_LANES>>::mul)
    }

    fn scalar_mul(&self, rhs: &[T]) -> Result<Vec<T>> {
        scalar_zip(self, rhs, T::lane_mul)
    }

    fn simd_sum(&self) -> T {
        sum_block(self)
    }

    fn par_simd_sum(&self) -> T {
        if self.len() < PARALLEL_SIZE_THRESHOLD {
            return sum_block(self);
        }
        trace!(len = self.len(), chunk = PARALLEL_CHUNK_SIZE, "Parallel sum");
        self.par_chunks(PARALLEL_CHUNK_SIZE)
            .map(sum_block)
            .reduce(T::zero, T::lane_add)
    }

    fn scalar_sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc.lane_add(x))
    }

    fn simd_dot(&self, rhs: &[T]) -> Result<T> {
        check_lengths(self, rhs)?;
        Ok(dot_block(self, rhs))
    }

    fn par_simd_dot(&self, rhs: &[T]) -> Result<T> {
        check_lengths(self, rhs)?;
        if self.len() < PARALLEL_SIZE_THRESHOLD {
            return Ok(dot_block(self, rhs));
        }
        trace!(len = self.len(), chunk = PARALLEL_CHUNK_SIZE, "Parallel dot product");
        Ok(self
            .par_chunks(PARALLEL_CHUNK_SIZE)
            .zip(rhs.par_chunks(PARALLEL_CHUNK_SIZE))
            .map(|(a, b)| dot_block(a, b))
            .reduce(T::zero, T::lane_add))
    }
}

fn check_lengths<T>(a: &[T], b: &[T]) -> Result<()> {
    if a.len() != b.len() {
        debug!(left = a.len(), right = b.len(), "Rejected slices of different lengths");
        return Err(length_mismatch(a.len(), b.len()));
    }
    Ok(())
}

fn scalar_zip<T: SimdElement>(a: &[T], b: &[T], op: fn(T, T) -> T) -> Result<Vec<T>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| op(x, y)).collect())
}

fn simd_zip<T: SimdElement>(a: &[T], b: &[T], op: BinaryOp<T>) -> Result<Vec<T>> {
    check_lengths(a, b)?;
    let mut c = vec![T::zero(); a.len()];
    zip_block(a, b, &mut c, op);
    Ok(c)
}

fn par_simd_zip<T: SimdElement>(a: &[T], b: &[T], op: BinaryOp<T>) -> Result<Vec<T>> {
    check_lengths(a, b)?;
    let mut c = vec![T::zero(); a.len()];

    if a.len() < PARALLEL_SIZE_THRESHOLD {
        zip_block(a, b, &mut c, op);
        return Ok(c);
    }

    trace!(len = a.len(), chunk = PARALLEL_CHUNK_SIZE, "Parallel element-wise op");
    c.par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(a.par_chunks(PARALLEL_CHUNK_SIZE))
        .zip(b.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|((c_chunk, a_chunk), b_chunk)| zip_block(a_chunk, b_chunk, c_chunk, op));

    Ok(c)
}

/// Loads `block.len() < BULK_LANES` elements into the low lanes of a zero
/// vector.
#[inline(always)]
fn load_tail<T: SimdElement>(block: &[T]) -> (Bulk<T>, Mask<BULK_LANES>) {
    debug_assert!(block.len() < BULK_LANES);
    let mask = Mask::first_n(block.len());
    // SAFETY: the mask covers exactly `block.len()` lanes.
    let v = unsafe { Bulk::zero().load_masked(&mask, block.as_ptr()) };
    (v, mask)
}

/// `a`, `b` and `c` have equal lengths.
fn zip_block<T: SimdElement>(a: &[T], b: &[T], c: &mut [T], op: BinaryOp<T>) {
    let mut a_blocks = a.chunks_exact(BULK_LANES);
    let mut b_blocks = b.chunks_exact(BULK_LANES);
    let mut c_blocks = c.chunks_exact_mut(BULK_LANES);

    for ((a_block, b_block), c_block) in a_blocks.by_ref().zip(b_blocks.by_ref()).zip(c_blocks.by_ref()) {
        // SAFETY: every block holds exactly BULK_LANES elements.
        unsafe {
            let x = Bulk::load(a_block.as_ptr());
            let y = Bulk::load(b_block.as_ptr());
            op(&x, &y).store(c_block.as_mut_ptr());
        }
    }

    let a_tail = a_blocks.remainder();
    if !a_tail.is_empty() {
        let (x, mask) = load_tail(a_tail);
        let (y, _) = load_tail(b_blocks.remainder());
        let c_tail = c_blocks.into_remainder();
        // SAFETY: `c_tail` has as many elements as the mask has active lanes.
        unsafe { op(&x, &y).store_masked(&mask, c_tail.as_mut_ptr()) };
    }
}

fn sum_block<T: SimdElement>(a: &[T]) -> T {
    let mut blocks = a.chunks_exact(BULK_LANES);
    let mut acc = Bulk::<T>::zero();

    for block in blocks.by_ref() {
        // SAFETY: every block holds exactly BULK_LANES elements.
        acc = acc.add(&unsafe { Bulk::load(block.as_ptr()) });
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        acc = acc.add(&load_tail(tail).0);
    }

    acc.hadd()
}

fn dot_block<T: SimdElement>(a: &[T], b: &[T]) -> T {
    let mut a_blocks = a.chunks_exact(BULK_LANES);
    let mut b_blocks = b.chunks_exact(BULK_LANES);
    let mut acc = Bulk::<T>::zero();

    for (a_block, b_block) in a_blocks.by_ref().zip(b_blocks.by_ref()) {
        // SAFETY: every block holds exactly BULK_LANES elements.
        let (x, y) = unsafe { (Bulk::load(a_block.as_ptr()), Bulk::load(b_block.as_ptr())) };
        acc = x.fmuladd(&y, &acc);
    }

    let a_tail = a_blocks.remainder();
    if !a_tail.is_empty() {
        let (x, _) = load_tail(a_tail);
        let (y, _) = load_tail(b_blocks.remainder());
        acc = x.fmuladd(&y, &acc);
    }

    acc.hadd()
}
