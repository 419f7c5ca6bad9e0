//! Everything needed to call vector operations with method syntax.
//!
//! ```rust
//! use lanewise::prelude::*;
//! ```

pub use crate::error::SimdError;
pub use crate::simd::aliases::*;
pub use crate::simd::checked::{SimdChecked, SimdCheckedDiv, SimdCheckedGather};
pub use crate::simd::element::{FloatElement, IntElement, SignedElement, SimdElement};
pub use crate::simd::emu::{Narrow, ToFloat, ToInt, ToSigned, ToUint, ToUnsigned, Widen};
pub use crate::simd::slice::SimdSliceOps;
pub use crate::simd::traits::{
    LaneIndices, SimdArith, SimdBitwise, SimdCompare, SimdFloatMath, SimdFused, SimdGather,
    SimdNeg, SimdPack, SimdReduce, SimdSaturating, SimdVector,
};
pub use crate::simd::{Mask, Swizzle, Vector};
