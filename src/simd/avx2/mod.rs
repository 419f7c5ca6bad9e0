//! AVX2 SIMD implementations for 256-bit vector operations.
//!
//! This module contains vector types backed by Intel's Advanced Vector Extensions 2
//! (AVX2) registers. Each type implements the same operation traits as the emulated
//! [`Vector`](crate::simd::Vector) of the same element type and width, converts to and
//! from it, and produces the same lanes.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: The build script detects AVX2 on the build host
//!
//! # Available Types
//!
//! - [`F32x8`]: 256-bit vector containing 8 packed single-precision floating-point values
//!
//! # Conditional Compilation
//!
//! This module is only compiled when the build script emits the `avx2` cfg flag. The
//! `emulation-only` feature suppresses the flag, leaving only the emulated vectors.

pub mod f32x8;

pub use f32x8::F32x8;
