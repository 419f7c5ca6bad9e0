//! Short names for the common (type, width) pairs.
//!
//! Every element type gets an alias per lane count up to 1024 bits of
//! vector; mask aliases cover every lane count that appears.

use crate::simd::{Mask, Vector};

macro_rules! vector_aliases {
    ($t:ty => $($name:ident = $lanes:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($lanes), "` lanes of `", stringify!($t), "`.")]
            pub type $name = Vector<$t, $lanes>;
        )*
    };
}

vector_aliases!(i8 => I8x1 = 1, I8x2 = 2, I8x4 = 4, I8x8 = 8, I8x16 = 16, I8x32 = 32, I8x64 = 64, I8x128 = 128);
vector_aliases!(u8 => U8x1 = 1, U8x2 = 2, U8x4 = 4, U8x8 = 8, U8x16 = 16, U8x32 = 32, U8x64 = 64, U8x128 = 128);
vector_aliases!(i16 => I16x1 = 1, I16x2 = 2, I16x4 = 4, I16x8 = 8, I16x16 = 16, I16x32 = 32, I16x64 = 64);
vector_aliases!(u16 => U16x1 = 1, U16x2 = 2, U16x4 = 4, U16x8 = 8, U16x16 = 16, U16x32 = 32, U16x64 = 64);
vector_aliases!(i32 => I32x1 = 1, I32x2 = 2, I32x4 = 4, I32x8 = 8, I32x16 = 16, I32x32 = 32);
vector_aliases!(u32 => U32x1 = 1, U32x2 = 2, U32x4 = 4, U32x8 = 8, U32x16 = 16, U32x32 = 32);
vector_aliases!(f32 => F32x1 = 1, F32x2 = 2, F32x4 = 4, F32x8 = 8, F32x16 = 16, F32x32 = 32);
vector_aliases!(i64 => I64x1 = 1, I64x2 = 2, I64x4 = 4, I64x8 = 8, I64x16 = 16);
vector_aliases!(u64 => U64x1 = 1, U64x2 = 2, U64x4 = 4, U64x8 = 8, U64x16 = 16);
vector_aliases!(f64 => F64x1 = 1, F64x2 = 2, F64x4 = 4, F64x8 = 8, F64x16 = 16);

macro_rules! mask_aliases {
    ($($name:ident = $lanes:literal),* $(,)?) => {
        $(
            #[doc = concat!("Mask for ", stringify!($lanes), "-lane vectors.")]
            pub type $name = Mask<$lanes>;
        )*
    };
}

mask_aliases!(
    Mask1 = 1,
    Mask2 = 2,
    Mask4 = 4,
    Mask8 = 8,
    Mask16 = 16,
    Mask32 = 32,
    Mask64 = 64,
    Mask128 = 128,
);
