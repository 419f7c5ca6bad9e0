//! Lane type conversions.
//!
//! Each conversion is an element-level trait naming the target type, plus a
//! `Vector` method that maps it over every lane. Lane count never changes.
//!
//! | method | lanes | behavior |
//! |---|---|---|
//! | `widen` | `i8 -> i16`, `u32 -> u64`, `f32 -> f64`, ... | exact |
//! | `narrow` | `i16 -> i8`, `u64 -> u32`, `f64 -> f32`, ... | keeps the low bits; floats round |
//! | `to_unsigned` / `to_signed` | same width | bit reinterpretation |
//! | `to_float` | `i32 -> f32`, `u64 -> f64`, ... | nearest representable |
//! | `to_int` / `to_uint` | `f32 -> i32`, `f64 -> u64`, ... | truncates, saturates, NaN gives 0 |

use crate::simd::element::SimdElement;

use super::Vector;

/// Element conversion to the next wider type of the same kind.
pub trait Widen: SimdElement {
    type Wide: SimdElement;

    fn lane_widen(self) -> Self::Wide;
}

/// Element conversion to the next narrower type of the same kind.
pub trait Narrow: SimdElement {
    type Narrowed: SimdElement;

    fn lane_narrow(self) -> Self::Narrowed;
}

/// Same-width reinterpretation of a signed integer as unsigned.
pub trait ToUnsigned: SimdElement {
    type Unsigned: SimdElement;

    fn lane_to_unsigned(self) -> Self::Unsigned;
}

/// Same-width reinterpretation of an unsigned integer as signed.
pub trait ToSigned: SimdElement {
    type Signed: SimdElement;

    fn lane_to_signed(self) -> Self::Signed;
}

/// Integer to float of the same width.
pub trait ToFloat: SimdElement {
    type Float: SimdElement;

    fn lane_to_float(self) -> Self::Float;
}

/// Float to signed integer of the same width.
pub trait ToInt: SimdElement {
    type Int: SimdElement;

    fn lane_to_int(self) -> Self::Int;
}

/// Float to unsigned integer of the same width.
pub trait ToUint: SimdElement {
    type Uint: SimdElement;

    fn lane_to_uint(self) -> Self::Uint;
}

macro_rules! impl_cast {
    ($trait:ident, $assoc:ident, $method:ident: $($from:ty => $to:ty),* $(,)?) => {
        $(
            impl $trait for $from {
                type $assoc = $to;

                #[inline(always)]
                fn $method(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

impl_cast!(Widen, Wide, lane_widen:
    i8 => i16, i16 => i32, i32 => i64,
    u8 => u16, u16 => u32, u32 => u64,
    f32 => f64,
);

impl_cast!(Narrow, Narrowed, lane_narrow:
    i16 => i8, i32 => i16, i64 => i32,
    u16 => u8, u32 => u16, u64 => u32,
    f64 => f32,
);

impl_cast!(ToUnsigned, Unsigned, lane_to_unsigned:
    i8 => u8, i16 => u16, i32 => u32, i64 => u64,
);

impl_cast!(ToSigned, Signed, lane_to_signed:
    u8 => i8, u16 => i16, u32 => i32, u64 => i64,
);

impl_cast!(ToFloat, Float, lane_to_float:
    i32 => f32, u32 => f32, i64 => f64, u64 => f64,
);

impl_cast!(ToInt, Int, lane_to_int: f32 => i32, f64 => i64);

impl_cast!(ToUint, Uint, lane_to_uint: f32 => u32, f64 => u64);

impl<T: SimdElement, const N: usize> Vector<T, N> {
    #[inline(always)]
    pub fn widen(&self) -> Vector<T::Wide, N>
    where
        T: Widen,
    {
        Vector {
            lanes: self.lanes.map(T::lane_widen),
        }
    }

    #[inline(always)]
    pub fn narrow(&self) -> Vector<T::Narrowed, N>
    where
        T: Narrow,
    {
        Vector {
            lanes: self.lanes.map(T::lane_narrow),
        }
    }

    #[inline(always)]
    pub fn to_unsigned(&self) -> Vector<T::Unsigned, N>
    where
        T: ToUnsigned,
    {
        Vector {
            lanes: self.lanes.map(T::lane_to_unsigned),
        }
    }

    #[inline(always)]
    pub fn to_signed(&self) -> Vector<T::Signed, N>
    where
        T: ToSigned,
    {
        Vector {
            lanes: self.lanes.map(T::lane_to_signed),
        }
    }

    #[inline(always)]
    pub fn to_float(&self) -> Vector<T::Float, N>
    where
        T: ToFloat,
    {
        Vector {
            lanes: self.lanes.map(T::lane_to_float),
        }
    }

    #[inline(always)]
    pub fn to_int(&self) -> Vector<T::Int, N>
    where
        T: ToInt,
    {
        Vector {
            lanes: self.lanes.map(T::lane_to_int),
        }
    }

    #[inline(always)]
    pub fn to_uint(&self) -> Vector<T::Uint, N>
    where
        T: ToUint,
    {
        Vector {
            lanes: self.lanes.map(T::lane_to_uint),
        }
    }
}
