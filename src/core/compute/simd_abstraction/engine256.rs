//! 256-bit SIMD engine (AVX2)
//!
//! This module provides the AVX2 implementation of the `SimdEngine` trait on
//! x86_64. It offers 8 lanes of i32, mapping directly to `_mm256_*`
//! intrinsics.
//!
//! Highlights
//! - Byte-widening loads pull 8 symbols with a single 64-bit load and expand
//!   them with `_mm256_cvtepu8_epi32`.
//! - The lane-reversed load uses a cross-lane `permutevar8x32` with a fixed
//!   descending index vector.
//! - All functions are `unsafe` and annotated with
//!   `#[target_feature(enable = "avx2")]`. Callers must ensure AVX2 is
//!   available (the crate's runtime dispatch does this for you).

#[cfg(target_arch = "x86_64")]
use super::SimdEngine;
#[cfg(target_arch = "x86_64")]
use super::types::{read_bytes, simd_arch};

#[cfg(target_arch = "x86_64")]
/// 256-bit SIMD engine (AVX2 on x86_64)
///
/// Provides 8-way parallelism for 32-bit operations.
/// Requires AVX2 CPU support (Intel Haswell 2013+ or AMD Excavator 2015+).
#[derive(Clone, Copy, Debug, Default)]
pub struct SimdEngine256;

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_op_in_unsafe_fn)]
impl SimdEngine for SimdEngine256 {
    const WIDTH_32: usize = 8; // 256 bits ÷ 32 bits = 8 lanes

    type Vec32 = simd_arch::__m256i;

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn set1_epi32(a: i32) -> Self::Vec32 {
        simd_arch::_mm256_set1_epi32(a)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn loadu_epi32(p: *const i32) -> Self::Vec32 {
        simd_arch::_mm256_loadu_si256(p as *const simd_arch::__m256i)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn storeu_epi32(p: *mut i32, a: Self::Vec32) {
        simd_arch::_mm256_storeu_si256(p as *mut simd_arch::__m256i, a)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load_u8_epi32(p: *const u8) -> Self::Vec32 {
        let packed = i64::from_le_bytes(read_bytes::<8>(p));
        simd_arch::_mm256_cvtepu8_epi32(simd_arch::_mm_cvtsi64_si128(packed))
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load_u8_rev_epi32(p: *const u8) -> Self::Vec32 {
        let reverse = simd_arch::_mm256_set_epi32(0, 1, 2, 3, 4, 5, 6, 7);
        simd_arch::_mm256_permutevar8x32_epi32(Self::load_u8_epi32(p), reverse)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn add_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        simd_arch::_mm256_add_epi32(a, b)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn min_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        simd_arch::_mm256_min_epi32(a, b)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn cmpeq_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        simd_arch::_mm256_cmpeq_epi32(a, b)
    }
}
