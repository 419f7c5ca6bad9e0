//! Fixed-width vectors with a complete, uniform operation contract.
//!
//! - [`traits`] defines the operation families every vector type implements.
//! - [`emu`] provides [`Vector<T, N>`], the scalar-emulation engine usable at
//!   any lane count.
//! - `avx2` (x86 with AVX2 only) provides hardware types that implement the
//!   same traits and must agree with the emulated ones lane for lane.
//! - [`checked`] wraps the operations whose preconditions would otherwise
//!   panic or be undefined behavior.
//! - [`slice`] drives vectors over arbitrary-length slices.

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
pub mod avx2;

pub mod aliases;
pub mod checked;
pub mod element;
pub mod emu;
pub mod mask;
pub mod slice;
pub mod swizzle;
pub mod traits;

pub use emu::Vector;
pub use mask::Mask;
pub use swizzle::Swizzle;

/// Size in bytes of the widest vector register the target was compiled for,
/// or 0 when no vector extension is enabled.
pub const MAX_SIMD_SIZE: usize = if cfg!(all(target_arch = "x86_64", target_feature = "avx512f")) {
    64
} else if cfg!(all(target_arch = "x86_64", target_feature = "avx")) {
    32
} else if cfg!(any(
    all(target_arch = "x86_64", target_feature = "sse"),
    all(target_arch = "aarch64", target_feature = "neon")
)) {
    16
} else {
    0
};
