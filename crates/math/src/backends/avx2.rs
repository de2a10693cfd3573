//! AVX2 backend implementation (x86-64)
//!
//! 8-lane (256-bit) f32 operations using AVX2 instructions, including
//! hardware gathers (`vgatherdps`) for table lookups. Requires an x86-64
//! CPU with AVX2 support (Intel Haswell 2013+, AMD Excavator 2015+).
//!
//! **Note**: This implementation assumes AVX2 is available when the `avx2`
//! feature is enabled. Runtime CPU detection is not performed - use feature
//! flags at compile time only.

// This backend only compiles on x86/x86_64 targets
#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

use crate::traits::SimdVector;

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;

/// AVX2 vector wrapper (8 lanes of f32)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2Vector(__m256);

impl SimdVector for Avx2Vector {
    type Scalar = f32;

    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { Avx2Vector(_mm256_set1_ps(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 load");
        unsafe { Avx2Vector(_mm256_loadu_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 store");
        unsafe { _mm256_storeu_ps(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn gather(table: &[Self::Scalar], indices: &[u32]) -> Self {
        assert!(
            indices.len() >= Self::LANES,
            "Index slice too short for AVX2 gather"
        );
        debug_assert!(indices[..Self::LANES]
            .iter()
            .all(|&i| (i as usize) < table.len()));
        // Safety: every index is a valid table offset (caller contract,
        // checked above in debug builds), so each lane of vgatherdps reads
        // in-bounds.
        unsafe {
            let vindex = _mm256_loadu_si256(indices.as_ptr() as *const __m256i);
            Avx2Vector(_mm256_i32gather_ps::<4>(table.as_ptr(), vindex))
        }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_add_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_sub_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_mul_ps(self.0, rhs.0)) }
    }
}
