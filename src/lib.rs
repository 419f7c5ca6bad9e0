//! Portable fixed-width SIMD vectors.
//!
//! `lanewise` gives every (element type, lane count) pair the same vector
//! API. [`Vector<T, N>`](simd::Vector) implements it with scalar loops for
//! any `N`; on x86 hosts with AVX2 the `simd::avx2` types implement the
//! same traits with intrinsics and agree with the emulation lane for lane.
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! let a = I32x8::from_array([1, 2, 3, 4, 5, 6, 7, 8]);
//! let b = I32x8::from_array([8, 7, 6, 5, 4, 3, 2, 1]);
//! assert_eq!((a + b).hadd(), 72);
//!
//! let big = a.cmpgt_scalar(4);
//! assert_eq!(a.blend_scalar(&big, 0).to_array(), [1, 2, 3, 4, 0, 0, 0, 0]);
//! ```

pub mod error;
pub mod prelude;
pub mod simd;

pub use error::{Result, SimdError};
pub use simd::{Mask, Swizzle, Vector};
