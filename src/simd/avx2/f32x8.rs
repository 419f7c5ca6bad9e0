//! AVX2 8-lane f32 SIMD vector implementation.
//!
//! This module provides `F32x8`, a SIMD vector type that wraps Intel's AVX2 `__m256`
//! intrinsic to perform vectorized operations on 8 single-precision floating-point
//! values simultaneously using 256-bit AVX2 instructions.
//!
//! `F32x8` implements the same operation traits as [`Vector<f32, 8>`], and the two
//! convert into each other with `From`. Every lane-wise operation produces exactly the
//! lanes the emulated vector produces; see [Equivalence](#equivalence) for the two
//! documented exceptions.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel processors with AVX2 support (Haswell and later)
//! - **Target Architecture**: x86_64 (and x86 with SSE compatibility)
//! - **Compilation**: Only compiled when the build script detects AVX2 on the host
//!
//! # Supported Operations
//!
//! ## Loading and Storing
//! - `load()`, `load_aligned()` - `_mm256_loadu_ps` / `_mm256_load_ps`
//! - `load_masked()`, `store_masked()` - `_mm256_maskload_ps` / `_mm256_maskstore_ps`
//! - `store()`, `store_aligned()` - `_mm256_storeu_ps` / `_mm256_store_ps`
//!
//! ## Arithmetic and Comparison
//! - `add()`, `sub()`, `mul()`, `div()` and their masked and scalar forms
//! - `neg()`, `abs()` through sign-bit manipulation
//! - `cmpeq()` ... `cmple()` through `_mm256_cmp_ps`, returned as [`Mask<8>`]
//!
//! ## Mathematical Functions
//! - `sqrt()`, `rcp()`, `floor()`, `ceil()`, `trunc()`, `round()`
//! - `isnan()`, `isinf()`, `isfin()`
//! - `fmuladd()`, `fmulsub()` (fused when compiled with the `fma` target feature)
//!
//! # Equivalence
//!
//! - **Reductions**: `hadd()` and `hmul()` combine lanes pairwise instead of left to
//!   right, so float results can differ from the emulation in the last bits.
//! - **Fused operations**: with the `fma` target feature, `fmuladd()` and `fmulsub()`
//!   round once and can differ from the emulation's separately rounded result.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::simd::element::SimdElement;
use crate::simd::emu::alignment_for;
use crate::simd::traits::{
    fold_active, SimdArith, SimdCompare, SimdFloatMath, SimdFused, SimdGather, SimdNeg,
    SimdReduce, SimdVector,
};
use crate::simd::{Mask, Vector};

/// Number of f32 elements that fit in an AVX2 256-bit vector.
///
/// AVX2 vectors can contain 8 single-precision floating-point values
/// (8 × 32 bits = 256 bits).
pub const LANE_COUNT: usize = 8;

/// AVX2 SIMD vector containing 8 packed f32 values.
///
/// This structure provides efficient vectorized operations on 8 single-precision
/// floating-point numbers using AVX2 instructions.
///
/// # Memory Alignment
///
/// `load_aligned` and `store_aligned` require [`SimdVector::ALIGNMENT`] bytes, the
/// same alignment `Vector<f32, 8>` requires, so a buffer prepared for one works for
/// the other.
///
/// # Usage
///
/// ```rust
/// # #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
/// # {
/// use lanewise::prelude::*;
/// use lanewise::simd::avx2::F32x8;
///
/// let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let vector = unsafe { F32x8::load(data.as_ptr()) };
///
/// // Compute square root of all elements simultaneously
/// let roots = vector.sqrt();
/// assert_eq!(roots.extract(3), 2.0);
///
/// // Move to the emulated type and back
/// let emulated: Vector<f32, 8> = vector.into();
/// assert_eq!(F32x8::from(emulated), vector);
/// # }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct F32x8 {
    /// AVX2 256-bit vector register containing 8 packed f32 values
    pub elements: __m256,
}

/// Tree reduction of a `__m256` with a 128-bit binary intrinsic.
///
/// Folds the high half onto the low half, then the upper pair onto the lower pair,
/// then lane 1 onto lane 0.
macro_rules! reduce_m256 {
    ($v:expr, $op:ident) => {{
        let v = $v;
        let quad = $op(_mm256_castps256_ps128(v), _mm256_extractf128_ps(v, 1));
        let pair = $op(quad, _mm_movehl_ps(quad, quad));
        let single = $op(pair, _mm_shuffle_ps(pair, pair, 0b01));
        _mm_cvtss_f32(single)
    }};
}

impl F32x8 {
    #[inline(always)]
    fn from_m256(elements: __m256) -> Self {
        Self { elements }
    }

    /// Expands a [`Mask<8>`] to the all-ones / all-zeros lane form the masked
    /// intrinsics expect.
    #[inline(always)]
    fn mask_bits(mask: &Mask<LANE_COUNT>) -> __m256i {
        let lanes = mask.to_array().map(|active| -(active as i32));
        unsafe { _mm256_loadu_si256(lanes.as_ptr().cast::<__m256i>()) }
    }

    /// Collapses a compare result to a [`Mask<8>`] through the lane sign bits.
    #[inline(always)]
    fn mask_from_bits(bits: __m256) -> Mask<LANE_COUNT> {
        let signs = unsafe { _mm256_movemask_ps(bits) };
        Mask::new(std::array::from_fn(|i| (signs >> i) & 1 == 1))
    }

    /// Vector of `-0.0`: only the sign bit set in every lane.
    #[inline(always)]
    fn sign_bits() -> __m256 {
        unsafe { _mm256_set1_ps(-0.0) }
    }
}

impl SimdVector<LANE_COUNT> for F32x8 {
    type Scalar = f32;

    const ALIGNMENT: usize = alignment_for(LANE_COUNT * std::mem::size_of::<f32>());

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::from_m256(unsafe { _mm256_set1_ps(value) })
    }

    #[inline(always)]
    fn from_array(lanes: [f32; LANE_COUNT]) -> Self {
        Self::from_m256(unsafe { _mm256_loadu_ps(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn to_array(&self) -> [f32; LANE_COUNT] {
        let mut lanes = [0.0f32; LANE_COUNT];
        unsafe { _mm256_storeu_ps(lanes.as_mut_ptr(), self.elements) };
        lanes
    }

    #[inline(always)]
    fn zero() -> Self {
        Self::from_m256(unsafe { _mm256_setzero_ps() })
    }

    /// Loads 8 elements from unaligned memory.
    ///
    /// Works with any memory alignment. Uses the `_mm256_loadu_ps` intrinsic.
    ///
    /// # Safety
    ///
    /// Pointer must point to at least 8 valid f32 values.
    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        Self::from_m256(unsafe { _mm256_loadu_ps(ptr) })
    }

    /// Loads 8 elements from aligned memory with `_mm256_load_ps`.
    ///
    /// # Safety
    ///
    /// Pointer must be aligned to [`Self::ALIGNMENT`] bytes and point to at least
    /// 8 valid f32 values.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(
            (ptr as usize) % Self::ALIGNMENT == 0,
            "Pointer must be {}-byte aligned",
            Self::ALIGNMENT
        );
        Self::from_m256(unsafe { _mm256_load_ps(ptr) })
    }

    /// Stores 8 elements to unaligned memory with `_mm256_storeu_ps`.
    ///
    /// # Safety
    ///
    /// Pointer must point to at least 8 valid f32 memory locations.
    #[inline(always)]
    unsafe fn store(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        unsafe { _mm256_storeu_ps(ptr, self.elements) }
    }

    /// Stores 8 elements to aligned memory with `_mm256_store_ps`.
    ///
    /// # Safety
    ///
    /// Pointer must be aligned to [`Self::ALIGNMENT`] bytes and point to at least
    /// 8 valid f32 memory locations.
    #[inline(always)]
    unsafe fn store_aligned(&self, ptr: *mut f32) {
        debug_assert!(
            (ptr as usize) % Self::ALIGNMENT == 0,
            "Pointer must be {}-byte aligned",
            Self::ALIGNMENT
        );
        unsafe { _mm256_store_ps(ptr, self.elements) }
    }

    /// Replaces the active lanes with elements read from `ptr`.
    ///
    /// `_mm256_maskload_ps` never touches memory behind an inactive lane, so the
    /// pointer only has to be valid for the active ones.
    ///
    /// # Safety
    ///
    /// `ptr.add(lane)` must be valid for reads for every active lane.
    #[inline(always)]
    unsafe fn load_masked(&self, mask: &Mask<LANE_COUNT>, ptr: *const f32) -> Self {
        let bits = Self::mask_bits(mask);
        unsafe {
            let loaded = _mm256_maskload_ps(ptr, bits);
            Self::from_m256(_mm256_blendv_ps(self.elements, loaded, _mm256_castsi256_ps(bits)))
        }
    }

    /// Writes only the active lanes with `_mm256_maskstore_ps`.
    ///
    /// # Safety
    ///
    /// `ptr.add(lane)` must be valid for writes for every active lane.
    #[inline(always)]
    unsafe fn store_masked(&self, mask: &Mask<LANE_COUNT>, ptr: *mut f32) {
        unsafe { _mm256_maskstore_ps(ptr, Self::mask_bits(mask), self.elements) }
    }

    /// Lane select through `_mm256_blendv_ps`.
    #[inline(always)]
    fn blend(&self, mask: &Mask<LANE_COUNT>, other: &Self) -> Self {
        unsafe {
            let bits = _mm256_castsi256_ps(Self::mask_bits(mask));
            Self::from_m256(_mm256_blendv_ps(self.elements, other.elements, bits))
        }
    }
}

impl SimdArith<LANE_COUNT> for F32x8 {
    #[inline(always)]
    fn add(&self, rhs: &Self) -> Self {
        Self::from_m256(unsafe { _mm256_add_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn sub(&self, rhs: &Self) -> Self {
        Self::from_m256(unsafe { _mm256_sub_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn mul(&self, rhs: &Self) -> Self {
        Self::from_m256(unsafe { _mm256_mul_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn div(&self, rhs: &Self) -> Self {
        Self::from_m256(unsafe { _mm256_div_ps(self.elements, rhs.elements) })
    }
}

impl SimdNeg<LANE_COUNT> for F32x8 {
    /// Flips the sign bit of every lane.
    #[inline(always)]
    fn neg(&self) -> Self {
        Self::from_m256(unsafe { _mm256_xor_ps(self.elements, Self::sign_bits()) })
    }

    /// Clears the sign bit of every lane.
    #[inline(always)]
    fn abs(&self) -> Self {
        Self::from_m256(unsafe { _mm256_andnot_ps(Self::sign_bits(), self.elements) })
    }
}

impl SimdCompare<LANE_COUNT> for F32x8 {
    #[inline(always)]
    fn cmpeq(&self, rhs: &Self) -> Mask<LANE_COUNT> {
        Self::mask_from_bits(unsafe { _mm256_cmp_ps(self.elements, rhs.elements, _CMP_EQ_OQ) })
    }

    #[inline(always)]
    fn cmpgt(&self, rhs: &Self) -> Mask<LANE_COUNT> {
        Self::mask_from_bits(unsafe { _mm256_cmp_ps(self.elements, rhs.elements, _CMP_GT_OQ) })
    }

    #[inline(always)]
    fn cmplt(&self, rhs: &Self) -> Mask<LANE_COUNT> {
        Self::mask_from_bits(unsafe { _mm256_cmp_ps(self.elements, rhs.elements, _CMP_LT_OQ) })
    }

    /// Unordered: a NaN lane is unequal to everything.
    #[inline(always)]
    fn cmpne(&self, rhs: &Self) -> Mask<LANE_COUNT> {
        Self::mask_from_bits(unsafe { _mm256_cmp_ps(self.elements, rhs.elements, _CMP_NEQ_UQ) })
    }

    #[inline(always)]
    fn cmpge(&self, rhs: &Self) -> Mask<LANE_COUNT> {
        Self::mask_from_bits(unsafe { _mm256_cmp_ps(self.elements, rhs.elements, _CMP_GE_OQ) })
    }

    #[inline(always)]
    fn cmple(&self, rhs: &Self) -> Mask<LANE_COUNT> {
        Self::mask_from_bits(unsafe { _mm256_cmp_ps(self.elements, rhs.elements, _CMP_LE_OQ) })
    }
}

impl SimdReduce<LANE_COUNT> for F32x8 {
    #[inline(always)]
    fn hadd(&self) -> f32 {
        unsafe { reduce_m256!(self.elements, _mm_add_ps) }
    }

    #[inline(always)]
    fn hmul(&self) -> f32 {
        unsafe { reduce_m256!(self.elements, _mm_mul_ps) }
    }

    // Max and min are exact, so only NaN lanes can make the tree order visible;
    // those go through the lane-order fold.
    #[inline(always)]
    fn hmax(&self) -> f32 {
        if self.isnan().hlor() {
            return fold_active(self.to_array(), &Mask::splat(true), f32::LOWEST, f32::lane_max);
        }
        unsafe { reduce_m256!(self.elements, _mm_max_ps) }
    }

    #[inline(always)]
    fn hmin(&self) -> f32 {
        if self.isnan().hlor() {
            return fold_active(self.to_array(), &Mask::splat(true), f32::HIGHEST, f32::lane_min);
        }
        unsafe { reduce_m256!(self.elements, _mm_min_ps) }
    }
}

impl SimdFused<LANE_COUNT> for F32x8 {
    #[cfg(target_feature = "fma")]
    #[inline(always)]
    fn fmuladd(&self, b: &Self, c: &Self) -> Self {
        Self::from_m256(unsafe { _mm256_fmadd_ps(self.elements, b.elements, c.elements) })
    }

    #[cfg(target_feature = "fma")]
    #[inline(always)]
    fn fmulsub(&self, b: &Self, c: &Self) -> Self {
        Self::from_m256(unsafe { _mm256_fmsub_ps(self.elements, b.elements, c.elements) })
    }
}

impl SimdGather<LANE_COUNT> for F32x8 {}

impl SimdFloatMath<LANE_COUNT> for F32x8 {
    #[inline(always)]
    fn sqrt(&self) -> Self {
        Self::from_m256(unsafe { _mm256_sqrt_ps(self.elements) })
    }

    /// Exact `1 / x` with `_mm256_div_ps`; `_mm256_rcp_ps` is only a 12-bit
    /// approximation.
    #[inline(always)]
    fn rcp(&self) -> Self {
        Self::from_m256(unsafe { _mm256_div_ps(_mm256_set1_ps(1.0), self.elements) })
    }

    #[inline(always)]
    fn floor(&self) -> Self {
        Self::from_m256(unsafe { _mm256_floor_ps(self.elements) })
    }

    #[inline(always)]
    fn ceil(&self) -> Self {
        Self::from_m256(unsafe { _mm256_ceil_ps(self.elements) })
    }

    #[inline(always)]
    fn trunc(&self) -> Self {
        Self::from_m256(unsafe {
            _mm256_round_ps(self.elements, _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC)
        })
    }

    /// Half-way cases round away from zero, unlike `_MM_FROUND_TO_NEAREST_INT`
    /// which rounds them to even. The result keeps the input's sign, so
    /// `round(-0.4)` is `-0.0`.
    #[inline(always)]
    fn round(&self) -> Self {
        unsafe {
            let sign = _mm256_and_ps(self.elements, Self::sign_bits());
            let truncated = self.trunc().elements;
            let fraction = _mm256_andnot_ps(
                Self::sign_bits(),
                _mm256_sub_ps(self.elements, truncated),
            );
            let needs_step = _mm256_cmp_ps(fraction, _mm256_set1_ps(0.5), _CMP_GE_OQ);
            let unit = _mm256_or_ps(sign, _mm256_set1_ps(1.0));
            let rounded = _mm256_add_ps(truncated, _mm256_and_ps(needs_step, unit));
            Self::from_m256(_mm256_or_ps(rounded, sign))
        }
    }

    #[inline(always)]
    fn isnan(&self) -> Mask<LANE_COUNT> {
        Self::mask_from_bits(unsafe { _mm256_cmp_ps(self.elements, self.elements, _CMP_UNORD_Q) })
    }

    #[inline(always)]
    fn isinf(&self) -> Mask<LANE_COUNT> {
        self.abs().cmpeq_scalar(f32::INFINITY)
    }

    #[inline(always)]
    fn isfin(&self) -> Mask<LANE_COUNT> {
        self.abs().cmplt_scalar(f32::INFINITY)
    }
}

impl PartialEq for F32x8 {
    /// Lane-wise IEEE equality of all lanes.
    fn eq(&self, other: &Self) -> bool {
        self.cmpe(other)
    }
}

impl Default for F32x8 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[f32; LANE_COUNT]> for F32x8 {
    fn from(lanes: [f32; LANE_COUNT]) -> Self {
        Self::from_array(lanes)
    }
}

impl From<Vector<f32, LANE_COUNT>> for F32x8 {
    fn from(vector: Vector<f32, LANE_COUNT>) -> Self {
        Self::from_array(vector.to_array())
    }
}

impl From<F32x8> for Vector<f32, LANE_COUNT> {
    fn from(vector: F32x8) -> Self {
        Vector::from_array(vector.to_array())
    }
}

impl fmt::Display for F32x8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Vector::from_array(self.to_array()), f)
    }
}

/// Element-wise addition through `_mm256_add_ps`.
impl Add for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        SimdArith::add(&self, &rhs)
    }
}

/// Element-wise subtraction through `_mm256_sub_ps`.
impl Sub for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        SimdArith::sub(&self, &rhs)
    }
}

/// Element-wise multiplication through `_mm256_mul_ps`.
impl Mul for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        SimdArith::mul(&self, &rhs)
    }
}

/// Element-wise division through `_mm256_div_ps`.
impl Div for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        SimdArith::div(&self, &rhs)
    }
}

impl Neg for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        SimdNeg::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::alloc::{alloc, dealloc, Layout};

    /// Helper function to create aligned memory for testing
    #[inline(always)]
    fn alloc_aligned(size: usize, align: usize) -> *mut f32 {
        let layout = Layout::from_size_align(size * std::mem::size_of::<f32>(), align).unwrap();
        unsafe { alloc(layout) as *mut f32 }
    }

    /// Helper function to deallocate aligned memory for testing
    #[inline(always)]
    fn dealloc_aligned(ptr: *mut f32, size: usize, align: usize) {
        let layout = Layout::from_size_align(size * std::mem::size_of::<f32>(), align).unwrap();
        unsafe { dealloc(ptr as *mut u8, layout) };
    }

    fn sample() -> F32x8 {
        F32x8::from_array([1.0, -2.0, 3.5, -4.25, 0.0, 6.0, -7.5, 8.0])
    }

    mod simd_load_tests {
        use super::*;

        #[test]
        fn test_from_array_round_trip() {
            let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
            assert_eq!(F32x8::from_array(data).to_array(), data);
        }

        #[test]
        fn test_load_aligned() {
            let align = F32x8::ALIGNMENT;
            let ptr = alloc_aligned(8, align);
            unsafe {
                for i in 0..8 {
                    *ptr.add(i) = i as f32 * 0.5;
                }
                let vec = F32x8::load_aligned(ptr);
                assert_eq!(vec.to_array(), [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5]);
            }
            dealloc_aligned(ptr, 8, align);
        }

        #[test]
        fn test_load_unaligned() {
            let data: Vec<f32> = (0..9).map(|i| i as f32).collect();
            let vec = unsafe { F32x8::load(data.as_ptr().add(1)) };
            assert_eq!(vec.extract(0), 1.0);
            assert_eq!(vec.extract(7), 8.0);
        }

        #[test]
        fn test_load_masked_keeps_inactive_lanes() {
            let data = [10.0f32, 20.0, 30.0];
            let vec = unsafe { F32x8::splat(-1.0).load_masked(&Mask::first_n(3), data.as_ptr()) };
            assert_eq!(vec.to_array(), [10.0, 20.0, 30.0, -1.0, -1.0, -1.0, -1.0, -1.0]);
        }
    }

    mod simd_store_tests {
        use super::*;

        #[test]
        fn test_store_aligned() {
            let align = F32x8::ALIGNMENT;
            let ptr = alloc_aligned(8, align);
            unsafe {
                sample().store_aligned(ptr);
                for (i, expected) in sample().to_array().into_iter().enumerate() {
                    assert_eq!(*ptr.add(i), expected);
                }
            }
            dealloc_aligned(ptr, 8, align);
        }

        #[test]
        fn test_store_masked_writes_active_lanes_only() {
            let mut out = [0.0f32; 8];
            let mask = Mask::new([true, false, true, false, false, false, false, true]);
            unsafe { sample().store_masked(&mask, out.as_mut_ptr()) };
            assert_eq!(out, [1.0, 0.0, 3.5, 0.0, 0.0, 0.0, 0.0, 8.0]);
        }
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_matches_emulation() {
            let a = sample();
            let b = F32x8::splat(2.0);
            let ea: Vector<f32, 8> = a.into();
            let eb: Vector<f32, 8> = b.into();

            assert_eq!(Vector::from(a + b), SimdArith::add(&ea, &eb));
            assert_eq!(Vector::from(a - b), SimdArith::sub(&ea, &eb));
            assert_eq!(Vector::from(a * b), SimdArith::mul(&ea, &eb));
            assert_eq!(Vector::from(a / b), SimdArith::div(&ea, &eb));
        }

        #[test]
        fn test_neg_and_abs() {
            let v = sample();
            assert_eq!(
                (-v).to_array(),
                [-1.0, 2.0, -3.5, 4.25, -0.0, -6.0, 7.5, -8.0]
            );
            assert_eq!(v.abs().to_array(), [1.0, 2.0, 3.5, 4.25, 0.0, 6.0, 7.5, 8.0]);
        }

        #[test]
        fn test_masked_add() {
            let mask = Mask::first_n(2);
            let r = sample().add_scalar_masked(&mask, 10.0);
            assert_eq!(r.to_array(), [11.0, 8.0, 3.5, -4.25, 0.0, 6.0, -7.5, 8.0]);
        }
    }

    mod compare_tests {
        use super::*;

        #[test]
        fn test_masks_match_emulation() {
            let a = F32x8::from_array([1.0, f32::NAN, 3.0, 4.0, -0.0, 6.0, 7.0, 8.0]);
            let b = F32x8::from_array([1.0, f32::NAN, 2.0, 5.0, 0.0, 6.5, 7.0, -8.0]);
            let ea: Vector<f32, 8> = a.into();
            let eb: Vector<f32, 8> = b.into();

            assert_eq!(a.cmpeq(&b), ea.cmpeq(&eb));
            assert_eq!(a.cmpne(&b), ea.cmpne(&eb));
            assert_eq!(a.cmpgt(&b), ea.cmpgt(&eb));
            assert_eq!(a.cmplt(&b), ea.cmplt(&eb));
            assert_eq!(a.cmpge(&b), ea.cmpge(&eb));
            assert_eq!(a.cmple(&b), ea.cmple(&eb));
        }
    }

    mod reduction_tests {
        use super::*;

        #[test]
        fn test_reductions() {
            let v = F32x8::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
            assert_eq!(v.hadd(), 36.0);
            assert_eq!(v.hmul(), 40320.0);
            assert_eq!(v.hmax(), 8.0);
            assert_eq!(v.hmin(), 1.0);
            assert_eq!(v.imax(), 7);
        }

        #[test]
        fn test_masked_reductions_use_identities() {
            let v = sample();
            let none = Mask::splat(false);
            assert_eq!(v.hadd_masked(&none), 0.0);
            assert_eq!(v.hmul_masked(&none), 1.0);
            assert_eq!(v.hmax_masked(&none), f32::NEG_INFINITY);
            assert_eq!(v.hmin_masked(&none), f32::INFINITY);
        }

        #[test]
        fn test_infinite_lanes_match_emulation() {
            let low = F32x8::splat(f32::NEG_INFINITY);
            let high = F32x8::splat(f32::INFINITY);
            let e_low: Vector<f32, 8> = low.into();
            let e_high: Vector<f32, 8> = high.into();

            assert_eq!(low.hmax(), f32::NEG_INFINITY);
            assert_eq!(low.hmax(), e_low.hmax());
            assert_eq!(high.hmin(), f32::INFINITY);
            assert_eq!(high.hmin(), e_high.hmin());
        }

        #[test]
        fn test_all_nan_lanes_reduce_to_nan() {
            let v = F32x8::splat(f32::NAN);
            assert!(v.hmax().is_nan());
            assert!(v.hmin().is_nan());
        }

        #[test]
        fn test_nan_lane_max_follows_lane_order() {
            let v = F32x8::from_array([f32::NAN, 1.0, 9.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
            let e: Vector<f32, 8> = v.into();
            assert_eq!(v.hmax(), e.hmax());
            assert_eq!(v.hmin(), e.hmin());
        }
    }

    mod float_math_tests {
        use super::*;

        #[test]
        fn test_rounding_matches_emulation() {
            let v = F32x8::from_array([-2.5, -1.5, -0.5, 0.49999997, 0.5, 1.5, 2.5, 8388609.0]);
            let e: Vector<f32, 8> = v.into();

            assert_eq!(Vector::from(v.floor()), e.floor());
            assert_eq!(Vector::from(v.ceil()), e.ceil());
            assert_eq!(Vector::from(v.trunc()), e.trunc());
            assert_eq!(Vector::from(v.round()), e.round());
        }

        #[test]
        fn test_round_keeps_sign_of_zero() {
            let v = F32x8::from_array([-0.4, -0.0, 0.4, 0.0, -0.49999997, -1.4, 1.4, -0.5]);
            let e: Vector<f32, 8> = v.into();
            let bits = v.round().to_array().map(f32::to_bits);
            let expected = e.round().to_array().map(f32::to_bits);
            assert_eq!(bits, expected);
            assert_eq!(bits[0], (-0.0f32).to_bits());
        }

        #[test]
        fn test_sqrt_and_rcp() {
            let v = F32x8::from_array([1.0, 4.0, 9.0, 16.0, 0.25, 64.0, 100.0, 2.0]);
            let e: Vector<f32, 8> = v.into();
            assert_eq!(Vector::from(v.sqrt()), e.sqrt());
            assert_eq!(Vector::from(v.rcp()), e.rcp());
        }

        #[test]
        fn test_classification() {
            let v = F32x8::from_array([
                f32::NAN,
                f32::INFINITY,
                f32::NEG_INFINITY,
                0.0,
                -1.0,
                f32::MAX,
                f32::MIN_POSITIVE,
                -f32::NAN,
            ]);
            let e: Vector<f32, 8> = v.into();
            assert_eq!(v.isnan(), e.isnan());
            assert_eq!(v.isinf(), e.isinf());
            assert_eq!(v.isfin(), e.isfin());
        }
    }
}
