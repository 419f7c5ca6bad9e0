//! Scalar element types that can fill a vector lane.
//!
//! Every per-lane behavior the engine relies on is pinned down here, so the
//! vector code never depends on build-mode overflow checks:
//!
//! - integer `+ - *` wrap, like hardware lanes do;
//! - integer division by zero panics, `MIN / -1` wraps to `MIN`;
//! - shifts by a count of at least the bit width yield zero (`lsh`, unsigned
//!   `rsh`) or the sign fill (signed `rsh`), matching AVX2 variable shifts.

use std::fmt;

use num::{Float, One, PrimInt, Zero};

/// A scalar type usable as a vector lane.
pub trait SimdElement:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static + Zero + One
{
    /// Smallest value, the identity of a horizontal max. Negative infinity
    /// for floats.
    const LOWEST: Self;
    /// Largest value, the identity of a horizontal min. Positive infinity
    /// for floats.
    const HIGHEST: Self;
    /// Width of the type in bits.
    const BITS: u32;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
    fn lane_div(self, rhs: Self) -> Self;

    /// Returns `rhs` only if it compares strictly greater, so NaN never wins
    /// over an earlier lane.
    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        if rhs > self {
            rhs
        } else {
            self
        }
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        if rhs < self {
            rhs
        } else {
            self
        }
    }
}

/// Integer lanes: bitwise, shift and saturating operations.
pub trait IntElement: SimdElement + PrimInt {
    /// Every bit set, the identity of a horizontal AND.
    const ALL_ONES: Self;

    fn lane_sadd(self, rhs: Self) -> Self;
    fn lane_ssub(self, rhs: Self) -> Self;
    fn lane_shl(self, count: u32) -> Self;
    fn lane_shr(self, count: u32) -> Self;
}

/// Lanes with a sign: signed integers and floats.
pub trait SignedElement: SimdElement {
    fn lane_neg(self) -> Self;
    fn lane_abs(self) -> Self;
}

/// Floating-point lanes.
pub trait FloatElement: SignedElement + Float {}

macro_rules! impl_int_element {
    ($($t:ty),*) => {
        $(
            impl SimdElement for $t {
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn lane_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn lane_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline(always)]
                fn lane_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline(always)]
                fn lane_div(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_element {
    ($($t:ty),*) => {
        impl_int_element!($($t),*);

        $(
            impl IntElement for $t {
                const ALL_ONES: Self = <$t>::MAX;

                #[inline(always)]
                fn lane_sadd(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }

                #[inline(always)]
                fn lane_ssub(self, rhs: Self) -> Self {
                    self.saturating_sub(rhs)
                }

                #[inline(always)]
                fn lane_shl(self, count: u32) -> Self {
                    self.checked_shl(count).unwrap_or(0)
                }

                #[inline(always)]
                fn lane_shr(self, count: u32) -> Self {
                    self.checked_shr(count).unwrap_or(0)
                }
            }
        )*
    };
}

macro_rules! impl_signed_element {
    ($($t:ty),*) => {
        impl_int_element!($($t),*);

        $(
            impl IntElement for $t {
                const ALL_ONES: Self = -1;

                #[inline(always)]
                fn lane_sadd(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }

                #[inline(always)]
                fn lane_ssub(self, rhs: Self) -> Self {
                    self.saturating_sub(rhs)
                }

                #[inline(always)]
                fn lane_shl(self, count: u32) -> Self {
                    self.checked_shl(count).unwrap_or(0)
                }

                #[inline(always)]
                fn lane_shr(self, count: u32) -> Self {
                    // Arithmetic shift: past the width only the sign remains.
                    self.checked_shr(count)
                        .unwrap_or(if self < 0 { -1 } else { 0 })
                }
            }

            impl SignedElement for $t {
                #[inline(always)]
                fn lane_neg(self) -> Self {
                    self.wrapping_neg()
                }

                #[inline(always)]
                fn lane_abs(self) -> Self {
                    self.wrapping_abs()
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty => $bits:expr),*) => {
        $(
            impl SimdElement for $t {
                const LOWEST: Self = <$t>::NEG_INFINITY;
                const HIGHEST: Self = <$t>::INFINITY;
                const BITS: u32 = $bits;

                #[inline(always)]
                fn lane_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn lane_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline(always)]
                fn lane_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline(always)]
                fn lane_div(self, rhs: Self) -> Self {
                    self / rhs
                }
            }

            impl SignedElement for $t {
                #[inline(always)]
                fn lane_neg(self) -> Self {
                    -self
                }

                #[inline(always)]
                fn lane_abs(self) -> Self {
                    <$t>::abs(self)
                }
            }

            impl FloatElement for $t {}
        )*
    };
}

impl_unsigned_element!(u8, u16, u32, u64);
impl_signed_element!(i8, i16, i32, i64);
impl_float_element!(f32 => 32, f64 => 64);
