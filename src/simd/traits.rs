//! The operation contract shared by every vector type.
//!
//! Each family is a trait. A backend supplies the unmasked vector form of an
//! operation; the masked, scalar-operand and in-place masked forms are
//! default methods built on [`SimdVector::blend`] and [`SimdVector::splat`].
//! The defaults that loop over [`SimdVector::to_array`] are the reference
//! semantics: a hardware backend that overrides one must produce the same
//! lanes.
//!
//! | shape | signature |
//! |---|---|
//! | vector | `op(&self, &Self) -> Self` |
//! | masked | `op_masked(&self, &Mask<N>, &Self) -> Self` |
//! | scalar | `op_scalar(&self, T) -> Self` |
//! | masked scalar | `op_scalar_masked(&self, &Mask<N>, T) -> Self` |
//! | in place | `op_assign_masked(&mut self, &Mask<N>, &Self)` |

use num::{Float, One, Zero};

use crate::simd::element::{FloatElement, IntElement, SignedElement, SimdElement};
use crate::simd::emu::Vector;
use crate::simd::{Mask, Swizzle};

macro_rules! binary_family {
    (
        $(#[$meta:meta])*
        $op:ident, $masked:ident, $scalar:ident, $scalar_masked:ident, $assign_masked:ident
    ) => {
        $(#[$meta])*
        fn $op(&self, rhs: &Self) -> Self;

        #[doc = concat!("[`", stringify!($op), "`](Self::", stringify!($op), ") on the lanes set in `mask`; other lanes keep `self`.")]
        #[inline(always)]
        fn $masked(&self, mask: &Mask<N>, rhs: &Self) -> Self {
            self.blend(mask, &self.$op(rhs))
        }

        #[doc = concat!("[`", stringify!($op), "`](Self::", stringify!($op), ") with `rhs` broadcast to every lane.")]
        #[inline(always)]
        fn $scalar(&self, rhs: Self::Scalar) -> Self {
            self.$op(&Self::splat(rhs))
        }

        #[doc = concat!("[`", stringify!($masked), "`](Self::", stringify!($masked), ") with `rhs` broadcast to every lane.")]
        #[inline(always)]
        fn $scalar_masked(&self, mask: &Mask<N>, rhs: Self::Scalar) -> Self {
            self.$masked(mask, &Self::splat(rhs))
        }

        #[doc = concat!("In-place [`", stringify!($masked), "`](Self::", stringify!($masked), ").")]
        #[inline(always)]
        fn $assign_masked(&mut self, mask: &Mask<N>, rhs: &Self) {
            *self = self.$masked(mask, rhs);
        }
    };
}

macro_rules! unary_family {
    ($(#[$meta:meta])* $op:ident, $masked:ident, $lane:expr) => {
        $(#[$meta])*
        #[inline(always)]
        fn $op(&self) -> Self {
            self.map_lanes($lane)
        }

        #[doc = concat!("[`", stringify!($op), "`](Self::", stringify!($op), ") on the lanes set in `mask`.")]
        #[inline(always)]
        fn $masked(&self, mask: &Mask<N>) -> Self {
            self.blend(mask, &self.$op())
        }
    };
}

/// Lane index sources for gather and scatter.
pub trait LaneIndices<const N: usize> {
    /// Element index carried by `lane`.
    fn lane_index(&self, lane: usize) -> usize;
}

impl<const N: usize> LaneIndices<N> for [usize; N] {
    #[inline(always)]
    fn lane_index(&self, lane: usize) -> usize {
        self[lane]
    }
}

impl<const N: usize> LaneIndices<N> for [u32; N] {
    #[inline(always)]
    fn lane_index(&self, lane: usize) -> usize {
        self[lane] as usize
    }
}

impl<const N: usize> LaneIndices<N> for Vector<u32, N> {
    #[inline(always)]
    fn lane_index(&self, lane: usize) -> usize {
        self.as_array()[lane] as usize
    }
}

impl<const N: usize> LaneIndices<N> for Vector<u64, N> {
    #[inline(always)]
    fn lane_index(&self, lane: usize) -> usize {
        self.as_array()[lane] as usize
    }
}

/// Construction, memory access, lane access, blend and swizzle.
///
/// Implementors provide [`splat`](Self::splat),
/// [`from_array`](Self::from_array) and [`to_array`](Self::to_array);
/// everything else has a lane-loop default.
pub trait SimdVector<const N: usize>: Copy {
    /// Lane type.
    type Scalar: SimdElement;

    /// Alignment in bytes required by [`load_aligned`](Self::load_aligned)
    /// and [`store_aligned`](Self::store_aligned).
    const ALIGNMENT: usize;

    /// Number of lanes.
    const LANES: usize = N;

    /// Broadcasts `value` to every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// Builds a vector from one value per lane.
    fn from_array(lanes: [Self::Scalar; N]) -> Self;

    fn to_array(&self) -> [Self::Scalar; N];

    /// All lanes zero.
    #[inline(always)]
    fn zero() -> Self {
        Self::splat(Self::Scalar::zero())
    }

    /// Reads `N` contiguous elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `N` elements. No alignment beyond
    /// byte alignment is required.
    #[inline(always)]
    unsafe fn load(ptr: *const Self::Scalar) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        Self::from_array(unsafe { ptr.cast::<[Self::Scalar; N]>().read_unaligned() })
    }

    /// Like [`load`](Self::load) for a pointer aligned to
    /// [`ALIGNMENT`](Self::ALIGNMENT).
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `N` elements and aligned to
    /// `Self::ALIGNMENT` bytes.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const Self::Scalar) -> Self {
        debug_assert!(
            (ptr as usize) % Self::ALIGNMENT == 0,
            "Pointer must be {}-byte aligned",
            Self::ALIGNMENT
        );
        unsafe { Self::load(ptr) }
    }

    /// Writes the `N` lanes to contiguous memory starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `N` elements.
    #[inline(always)]
    unsafe fn store(&self, ptr: *mut Self::Scalar) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        unsafe { ptr.cast::<[Self::Scalar; N]>().write_unaligned(self.to_array()) }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for writes of `N` elements and aligned to
    /// `Self::ALIGNMENT` bytes.
    #[inline(always)]
    unsafe fn store_aligned(&self, ptr: *mut Self::Scalar) {
        debug_assert!(
            (ptr as usize) % Self::ALIGNMENT == 0,
            "Pointer must be {}-byte aligned",
            Self::ALIGNMENT
        );
        unsafe { self.store(ptr) }
    }

    /// Replaces the lanes set in `mask` with elements read from `ptr`.
    /// Inactive lanes are neither read nor changed.
    ///
    /// # Safety
    ///
    /// `ptr.add(lane)` must be valid for reads for every active lane.
    #[inline(always)]
    unsafe fn load_masked(&self, mask: &Mask<N>, ptr: *const Self::Scalar) -> Self {
        let mut lanes = self.to_array();
        for (lane, value) in lanes.iter_mut().enumerate() {
            if mask.get(lane) {
                *value = unsafe { ptr.add(lane).read_unaligned() };
            }
        }
        Self::from_array(lanes)
    }

    /// Writes only the lanes set in `mask`.
    ///
    /// # Safety
    ///
    /// `ptr.add(lane)` must be valid for writes for every active lane.
    #[inline(always)]
    unsafe fn store_masked(&self, mask: &Mask<N>, ptr: *mut Self::Scalar) {
        for (lane, value) in self.to_array().into_iter().enumerate() {
            if mask.get(lane) {
                unsafe { ptr.add(lane).write_unaligned(value) };
            }
        }
    }

    /// Value of `lane`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= N`.
    #[inline(always)]
    fn extract(&self, lane: usize) -> Self::Scalar {
        self.to_array()[lane]
    }

    /// # Panics
    ///
    /// Panics if `lane >= N`.
    #[inline(always)]
    fn insert(&mut self, lane: usize, value: Self::Scalar) {
        let mut lanes = self.to_array();
        lanes[lane] = value;
        *self = Self::from_array(lanes);
    }

    /// # Safety
    ///
    /// `lane` must be less than `N`.
    #[inline(always)]
    unsafe fn extract_unchecked(&self, lane: usize) -> Self::Scalar {
        debug_assert!(lane < N, "lane {lane} out of range for {N} lanes");
        unsafe { *self.to_array().get_unchecked(lane) }
    }

    /// # Safety
    ///
    /// `lane` must be less than `N`.
    #[inline(always)]
    unsafe fn insert_unchecked(&mut self, lane: usize, value: Self::Scalar) {
        debug_assert!(lane < N, "lane {lane} out of range for {N} lanes");
        let mut lanes = self.to_array();
        unsafe { *lanes.get_unchecked_mut(lane) = value };
        *self = Self::from_array(lanes);
    }

    /// Lane `i` of the result is `other[i]` where `mask[i]` is set and
    /// `self[i]` elsewhere.
    #[inline(always)]
    fn blend(&self, mask: &Mask<N>, other: &Self) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        Self::from_array(std::array::from_fn(|i| if mask.get(i) { b[i] } else { a[i] }))
    }

    #[inline(always)]
    fn blend_scalar(&self, mask: &Mask<N>, value: Self::Scalar) -> Self {
        self.blend(mask, &Self::splat(value))
    }

    /// Reorders or replicates lanes: output lane `i` is `self[swizzle[i]]`.
    #[inline(always)]
    fn swizzle(&self, swizzle: &Swizzle<N>) -> Self {
        Self::from_array(swizzle.apply(&self.to_array()))
    }

    #[inline(always)]
    fn swizzle_masked(&self, mask: &Mask<N>, swizzle: &Swizzle<N>) -> Self {
        self.blend(mask, &self.swizzle(swizzle))
    }

    /// Applies `f` to every lane.
    #[inline(always)]
    fn map_lanes(&self, f: impl Fn(Self::Scalar) -> Self::Scalar) -> Self {
        Self::from_array(self.to_array().map(f))
    }

    /// Evaluates `f` on every lane.
    #[inline(always)]
    fn test_lanes(&self, f: impl Fn(Self::Scalar) -> bool) -> Mask<N> {
        Mask::new(self.to_array().map(f))
    }
}

/// Lane-wise `+ - * /`.
///
/// Integer lanes wrap on overflow. Integer division by zero panics, in
/// masked form only for active lanes.
pub trait SimdArith<const N: usize>: SimdVector<N> {
    binary_family!(add, add_masked, add_scalar, add_scalar_masked, add_assign_masked);
    binary_family!(sub, sub_masked, sub_scalar, sub_scalar_masked, sub_assign_masked);
    binary_family!(mul, mul_masked, mul_scalar, mul_scalar_masked, mul_assign_masked);
    binary_family!(div, div_masked, div_scalar, div_scalar_masked, div_assign_masked);
}

/// Negation and absolute value for signed and float lanes.
pub trait SimdNeg<const N: usize>: SimdArith<N>
where
    Self::Scalar: SignedElement,
{
    unary_family!(neg, neg_masked, SignedElement::lane_neg);
    unary_family!(
        /// Integer `MIN` maps to itself.
        abs,
        abs_masked,
        SignedElement::lane_abs
    );
}

/// Saturating integer arithmetic: results clamp to the lane type's range.
pub trait SimdSaturating<const N: usize>: SimdVector<N>
where
    Self::Scalar: IntElement,
{
    binary_family!(sadd, sadd_masked, sadd_scalar, sadd_scalar_masked, sadd_assign_masked);
    binary_family!(ssub, ssub_masked, ssub_scalar, ssub_scalar_masked, ssub_assign_masked);
}

/// Bitwise logic, shifts and their horizontal reductions on integer lanes.
///
/// Shift counts of at least the lane width are defined: left shifts and
/// unsigned right shifts give zero, signed right shifts give the sign fill.
pub trait SimdBitwise<const N: usize>: SimdVector<N>
where
    Self::Scalar: IntElement,
{
    binary_family!(band, band_masked, band_scalar, band_scalar_masked, band_assign_masked);
    binary_family!(bor, bor_masked, bor_scalar, bor_scalar_masked, bor_assign_masked);
    binary_family!(bxor, bxor_masked, bxor_scalar, bxor_scalar_masked, bxor_assign_masked);
    unary_family!(bnot, bnot_masked, |x: Self::Scalar| !x);

    /// Shifts every lane left by `count` bits.
    #[inline(always)]
    fn lsh(&self, count: u32) -> Self {
        self.map_lanes(|x| x.lane_shl(count))
    }

    #[inline(always)]
    fn lsh_masked(&self, mask: &Mask<N>, count: u32) -> Self {
        self.blend(mask, &self.lsh(count))
    }

    /// Shifts every lane right by `count` bits, arithmetic for signed lanes.
    #[inline(always)]
    fn rsh(&self, count: u32) -> Self {
        self.map_lanes(|x| x.lane_shr(count))
    }

    #[inline(always)]
    fn rsh_masked(&self, mask: &Mask<N>, count: u32) -> Self {
        self.blend(mask, &self.rsh(count))
    }

    /// Shifts lane `i` left by `counts[i]` bits.
    #[inline(always)]
    fn lsh_lanes(&self, counts: &Vector<u32, N>) -> Self {
        let lanes = self.to_array();
        let counts = counts.as_array();
        Self::from_array(std::array::from_fn(|i| lanes[i].lane_shl(counts[i])))
    }

    /// Shifts lane `i` right by `counts[i]` bits.
    #[inline(always)]
    fn rsh_lanes(&self, counts: &Vector<u32, N>) -> Self {
        let lanes = self.to_array();
        let counts = counts.as_array();
        Self::from_array(std::array::from_fn(|i| lanes[i].lane_shr(counts[i])))
    }

    /// AND of all lanes.
    #[inline(always)]
    fn hband(&self) -> Self::Scalar {
        self.to_array()
            .into_iter()
            .fold(Self::Scalar::ALL_ONES, |acc, x| acc & x)
    }

    /// AND of the active lanes; all bits set if none is active.
    #[inline(always)]
    fn hband_masked(&self, mask: &Mask<N>) -> Self::Scalar {
        self.blend_scalar(&mask.lnot(), Self::Scalar::ALL_ONES).hband()
    }

    #[inline(always)]
    fn hbor(&self) -> Self::Scalar {
        self.to_array()
            .into_iter()
            .fold(Self::Scalar::zero(), |acc, x| acc | x)
    }

    #[inline(always)]
    fn hbor_masked(&self, mask: &Mask<N>) -> Self::Scalar {
        self.blend_scalar(&mask.lnot(), Self::Scalar::zero()).hbor()
    }

    #[inline(always)]
    fn hbxor(&self) -> Self::Scalar {
        self.to_array()
            .into_iter()
            .fold(Self::Scalar::zero(), |acc, x| acc ^ x)
    }

    #[inline(always)]
    fn hbxor_masked(&self, mask: &Mask<N>) -> Self::Scalar {
        self.blend_scalar(&mask.lnot(), Self::Scalar::zero()).hbxor()
    }
}

/// Lane-wise comparisons producing masks.
///
/// Float lanes compare per IEEE 754: a NaN lane is unequal to everything and
/// neither greater nor less than anything.
pub trait SimdCompare<const N: usize>: SimdVector<N> {
    fn cmpeq(&self, rhs: &Self) -> Mask<N>;
    fn cmpgt(&self, rhs: &Self) -> Mask<N>;
    fn cmplt(&self, rhs: &Self) -> Mask<N>;

    #[inline(always)]
    fn cmpne(&self, rhs: &Self) -> Mask<N> {
        self.cmpeq(rhs).lnot()
    }

    #[inline(always)]
    fn cmpge(&self, rhs: &Self) -> Mask<N> {
        self.cmpgt(rhs).lor(&self.cmpeq(rhs))
    }

    #[inline(always)]
    fn cmple(&self, rhs: &Self) -> Mask<N> {
        self.cmplt(rhs).lor(&self.cmpeq(rhs))
    }

    #[inline(always)]
    fn cmpeq_scalar(&self, rhs: Self::Scalar) -> Mask<N> {
        self.cmpeq(&Self::splat(rhs))
    }

    #[inline(always)]
    fn cmpne_scalar(&self, rhs: Self::Scalar) -> Mask<N> {
        self.cmpne(&Self::splat(rhs))
    }

    #[inline(always)]
    fn cmpgt_scalar(&self, rhs: Self::Scalar) -> Mask<N> {
        self.cmpgt(&Self::splat(rhs))
    }

    #[inline(always)]
    fn cmplt_scalar(&self, rhs: Self::Scalar) -> Mask<N> {
        self.cmplt(&Self::splat(rhs))
    }

    #[inline(always)]
    fn cmpge_scalar(&self, rhs: Self::Scalar) -> Mask<N> {
        self.cmpge(&Self::splat(rhs))
    }

    #[inline(always)]
    fn cmple_scalar(&self, rhs: Self::Scalar) -> Mask<N> {
        self.cmple(&Self::splat(rhs))
    }

    /// True if every lane equals the corresponding lane of `rhs`.
    #[inline(always)]
    fn cmpe(&self, rhs: &Self) -> bool {
        self.cmpeq(rhs).hland()
    }

    /// True if every lane equals `rhs`.
    #[inline(always)]
    fn cmpes(&self, rhs: Self::Scalar) -> bool {
        self.cmpeq_scalar(rhs).hland()
    }

    /// True if no two lanes compare equal.
    fn unique(&self) -> bool {
        let lanes = self.to_array();
        for i in 0..N {
            for j in (i + 1)..N {
                if lanes[i] == lanes[j] {
                    return false;
                }
            }
        }
        true
    }
}

/// Horizontal reductions over all lanes.
///
/// Masked forms substitute the reduction's identity for inactive lanes:
/// 0 for `hadd`, 1 for `hmul`, the lowest value for `hmax` and the highest
/// for `hmin` (negative and positive infinity for floats). `hmax` and `hmin`
/// start from the first lane, so their result is always one of the lanes.
pub trait SimdReduce<const N: usize>: SimdVector<N> {
    /// Sum of all lanes, folded left to right.
    #[inline(always)]
    fn hadd(&self) -> Self::Scalar {
        self.to_array()
            .into_iter()
            .fold(Self::Scalar::zero(), SimdElement::lane_add)
    }

    #[inline(always)]
    fn hadd_masked(&self, mask: &Mask<N>) -> Self::Scalar {
        self.blend_scalar(&mask.lnot(), Self::Scalar::zero()).hadd()
    }

    #[inline(always)]
    fn hmul(&self) -> Self::Scalar {
        self.to_array()
            .into_iter()
            .fold(Self::Scalar::one(), SimdElement::lane_mul)
    }

    #[inline(always)]
    fn hmul_masked(&self, mask: &Mask<N>) -> Self::Scalar {
        self.blend_scalar(&mask.lnot(), Self::Scalar::one()).hmul()
    }

    /// A NaN lane only wins when it is the first lane.
    #[inline(always)]
    fn hmax(&self) -> Self::Scalar {
        self.hmax_masked(&Mask::splat(true))
    }

    /// Maximum of the active lanes, starting from the first active one.
    #[inline(always)]
    fn hmax_masked(&self, mask: &Mask<N>) -> Self::Scalar {
        fold_active(
            self.to_array(),
            mask,
            Self::Scalar::LOWEST,
            SimdElement::lane_max,
        )
    }

    #[inline(always)]
    fn hmin(&self) -> Self::Scalar {
        self.hmin_masked(&Mask::splat(true))
    }

    #[inline(always)]
    fn hmin_masked(&self, mask: &Mask<N>) -> Self::Scalar {
        fold_active(
            self.to_array(),
            mask,
            Self::Scalar::HIGHEST,
            SimdElement::lane_min,
        )
    }

    /// Lowest lane index holding the maximum.
    #[inline(always)]
    fn imax(&self) -> usize {
        self.imax_masked(&Mask::splat(true)).unwrap_or(0)
    }

    /// Lowest active lane index holding the maximum of the active lanes, or
    /// `None` when no lane is active.
    fn imax_masked(&self, mask: &Mask<N>) -> Option<usize> {
        let lanes = self.to_array();
        let mut best: Option<usize> = None;
        for (lane, &value) in lanes.iter().enumerate() {
            if !mask.get(lane) {
                continue;
            }
            match best {
                Some(index) if !(value > lanes[index]) => {}
                _ => best = Some(lane),
            }
        }
        best
    }

    /// Lowest lane index holding the minimum.
    #[inline(always)]
    fn imin(&self) -> usize {
        self.imin_masked(&Mask::splat(true)).unwrap_or(0)
    }

    fn imin_masked(&self, mask: &Mask<N>) -> Option<usize> {
        let lanes = self.to_array();
        let mut best: Option<usize> = None;
        for (lane, &value) in lanes.iter().enumerate() {
            if !mask.get(lane) {
                continue;
            }
            match best {
                Some(index) if !(value < lanes[index]) => {}
                _ => best = Some(lane),
            }
        }
        best
    }
}

/// Folds the active lanes in order, seeded with the first active lane;
/// `identity` when none is active.
pub(crate) fn fold_active<T: SimdElement, const N: usize>(
    lanes: [T; N],
    mask: &Mask<N>,
    identity: T,
    f: impl Fn(T, T) -> T,
) -> T {
    let mut active = lanes
        .into_iter()
        .enumerate()
        .filter(|&(lane, _)| mask.get(lane))
        .map(|(_, value)| value);
    match active.next() {
        Some(first) => active.fold(first, f),
        None => identity,
    }
}

/// Fused arithmetic on three operands.
///
/// The defaults round after each step. A backend may use a true fused
/// multiply-add for float lanes, which rounds once and can differ from the
/// default in the last bit.
pub trait SimdFused<const N: usize>: SimdArith<N> {
    /// `self * b + c`
    #[inline(always)]
    fn fmuladd(&self, b: &Self, c: &Self) -> Self {
        self.mul(b).add(c)
    }

    /// `self * b - c`
    #[inline(always)]
    fn fmulsub(&self, b: &Self, c: &Self) -> Self {
        self.mul(b).sub(c)
    }

    /// `(self + b) * c`
    #[inline(always)]
    fn faddmul(&self, b: &Self, c: &Self) -> Self {
        self.add(b).mul(c)
    }

    /// `(self - b) * c`
    #[inline(always)]
    fn fsubmul(&self, b: &Self, c: &Self) -> Self {
        self.sub(b).mul(c)
    }

    #[inline(always)]
    fn fmuladd_masked(&self, mask: &Mask<N>, b: &Self, c: &Self) -> Self {
        self.blend(mask, &self.fmuladd(b, c))
    }

    #[inline(always)]
    fn fmulsub_masked(&self, mask: &Mask<N>, b: &Self, c: &Self) -> Self {
        self.blend(mask, &self.fmulsub(b, c))
    }

    #[inline(always)]
    fn faddmul_masked(&self, mask: &Mask<N>, b: &Self, c: &Self) -> Self {
        self.blend(mask, &self.faddmul(b, c))
    }

    #[inline(always)]
    fn fsubmul_masked(&self, mask: &Mask<N>, b: &Self, c: &Self) -> Self {
        self.blend(mask, &self.fsubmul(b, c))
    }
}

/// Indexed loads and stores through raw pointers.
///
/// Indices come from any [`LaneIndices`] source: `[usize; N]`, `[u32; N]`,
/// `Vector<u32, N>` or `Vector<u64, N>`. See
/// [`SimdCheckedGather`](crate::simd::checked::SimdCheckedGather) for the
/// bounds-checked variants over slices.
pub trait SimdGather<const N: usize>: SimdVector<N> {
    /// Lane `i` reads `*base.add(indices[i])`.
    ///
    /// # Safety
    ///
    /// `base.add(indices[i])` must be valid for reads for every lane.
    #[inline(always)]
    unsafe fn gather<I: LaneIndices<N>>(base: *const Self::Scalar, indices: &I) -> Self {
        Self::from_array(std::array::from_fn(|lane| unsafe {
            *base.add(indices.lane_index(lane))
        }))
    }

    /// Gathers only the active lanes; inactive lanes keep `self`.
    ///
    /// # Safety
    ///
    /// `base.add(indices[i])` must be valid for reads for every active lane.
    #[inline(always)]
    unsafe fn gather_masked<I: LaneIndices<N>>(
        &self,
        mask: &Mask<N>,
        base: *const Self::Scalar,
        indices: &I,
    ) -> Self {
        let mut lanes = self.to_array();
        for (lane, value) in lanes.iter_mut().enumerate() {
            if mask.get(lane) {
                *value = unsafe { *base.add(indices.lane_index(lane)) };
            }
        }
        Self::from_array(lanes)
    }

    /// Lane `i` is written to `*base.add(indices[i])`, in lane order, so a
    /// repeated index keeps the highest lane's value.
    ///
    /// # Safety
    ///
    /// `base.add(indices[i])` must be valid for writes for every lane.
    #[inline(always)]
    unsafe fn scatter<I: LaneIndices<N>>(&self, base: *mut Self::Scalar, indices: &I) {
        for (lane, value) in self.to_array().into_iter().enumerate() {
            unsafe { *base.add(indices.lane_index(lane)) = value };
        }
    }

    /// # Safety
    ///
    /// `base.add(indices[i])` must be valid for writes for every active lane.
    #[inline(always)]
    unsafe fn scatter_masked<I: LaneIndices<N>>(
        &self,
        mask: &Mask<N>,
        base: *mut Self::Scalar,
        indices: &I,
    ) {
        for (lane, value) in self.to_array().into_iter().enumerate() {
            if mask.get(lane) {
                unsafe { *base.add(indices.lane_index(lane)) = value };
            }
        }
    }
}

/// Rounding, roots and classification for float lanes.
pub trait SimdFloatMath<const N: usize>: SimdArith<N>
where
    Self::Scalar: FloatElement,
{
    unary_family!(sqrt, sqrt_masked, |x: Self::Scalar| x.sqrt());
    unary_family!(
        /// `1 / x`, exact.
        rcp,
        rcp_masked,
        |x: Self::Scalar| x.recip()
    );
    unary_family!(floor, floor_masked, |x: Self::Scalar| x.floor());
    unary_family!(ceil, ceil_masked, |x: Self::Scalar| x.ceil());
    unary_family!(
        /// Rounds toward zero.
        trunc,
        trunc_masked,
        |x: Self::Scalar| x.trunc()
    );
    unary_family!(
        /// Rounds half-way cases away from zero.
        round,
        round_masked,
        |x: Self::Scalar| x.round()
    );

    #[inline(always)]
    fn isnan(&self) -> Mask<N> {
        self.test_lanes(|x| x.is_nan())
    }

    #[inline(always)]
    fn isinf(&self) -> Mask<N> {
        self.test_lanes(|x| x.is_infinite())
    }

    /// Neither NaN nor infinite.
    #[inline(always)]
    fn isfin(&self) -> Mask<N> {
        self.test_lanes(|x| x.is_finite())
    }
}

/// Splitting a vector into halves and joining two halves.
///
/// Implemented for the power-of-two lane counts from 2 to 128, the widths in
/// the alias table; a one-lane vector has no halves.
pub trait SimdPack<const N: usize>: SimdVector<N> {
    /// A vector of `N / 2` lanes of the same scalar.
    type Half: Copy;

    /// Concatenates `lo` (lanes `0..N/2`) and `hi` (lanes `N/2..N`).
    fn pack(lo: &Self::Half, hi: &Self::Half) -> Self;

    /// Replaces the low half.
    fn packlo(&mut self, lo: &Self::Half);

    /// Replaces the high half.
    fn packhi(&mut self, hi: &Self::Half);

    fn unpacklo(&self) -> Self::Half;

    fn unpackhi(&self) -> Self::Half;

    #[inline(always)]
    fn unpack(&self) -> (Self::Half, Self::Half) {
        (self.unpacklo(), self.unpackhi())
    }
}
