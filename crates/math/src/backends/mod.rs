//! SIMD backend implementations
//!
//! Platform-specific implementations selected at compile time via cargo
//! features. Only one backend is active per build.

// Scalar backend (always available, reference implementation)
pub mod scalar;

// AVX2 backend (feature-gated, x86/x86_64 only)
#[cfg(feature = "avx2")]
pub mod avx2;
