#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Core trait definition
pub mod traits;

// Backend implementations
pub mod backends;

pub use traits::SimdVector;

pub use backends::scalar::ScalarVector;

// Only re-export the AVX2 type when both the feature is enabled AND we're
// targeting x86/x86_64
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::avx2::Avx2Vector;

/// Default SIMD vector type based on enabled feature
///
/// This type alias resolves to the backend selected at compile time:
/// - no feature (default): `ScalarVector<f32>` (1 lane)
/// - `avx2` feature: `Avx2Vector` (8 lanes, x86-64)
#[cfg(not(feature = "avx2"))]
pub type DefaultSimdVector = ScalarVector<f32>;

/// Default SIMD vector type (AVX2 backend for x86-64)
#[cfg(all(feature = "avx2", target_arch = "x86_64"))]
pub type DefaultSimdVector = Avx2Vector;

#[cfg(all(feature = "avx2", not(any(target_arch = "x86", target_arch = "x86_64"))))]
compile_error!("The avx2 feature requires an x86/x86_64 target.");
