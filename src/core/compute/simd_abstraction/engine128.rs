//! 128-bit SIMD engine (SSE4.1 / NEON)
//!
//! Four i32 lanes per vector. On x86_64 this needs SSE4.1 for
//! `_mm_min_epi32` and `_mm_cvtepu8_epi32`; the crate's runtime detection
//! only selects it when that feature is present. On aarch64 it maps onto
//! NEON, which is part of the baseline ISA.

use super::SimdEngine;
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use super::types::{Vec128x32, read_bytes, simd_arch};

/// 128-bit SIMD backend implementing `SimdEngine` for four i32 lanes.
///
/// Only available on x86_64 (SSE4.1) and aarch64 (NEON); other targets use
/// `SimdEnginePortable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimdEngine128;

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_op_in_unsafe_fn)]
impl SimdEngine for SimdEngine128 {
    const WIDTH_32: usize = 4;

    type Vec32 = Vec128x32;

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn set1_epi32(a: i32) -> Self::Vec32 {
        simd_arch::_mm_set1_epi32(a)
    }

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn loadu_epi32(p: *const i32) -> Self::Vec32 {
        simd_arch::_mm_loadu_si128(p as *const Vec128x32)
    }

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn storeu_epi32(p: *mut i32, a: Self::Vec32) {
        simd_arch::_mm_storeu_si128(p as *mut Vec128x32, a)
    }

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn load_u8_epi32(p: *const u8) -> Self::Vec32 {
        let packed = i32::from_le_bytes(read_bytes::<4>(p));
        simd_arch::_mm_cvtepu8_epi32(simd_arch::_mm_cvtsi32_si128(packed))
    }

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn load_u8_rev_epi32(p: *const u8) -> Self::Vec32 {
        // 0x1B selects lanes [3, 2, 1, 0]
        simd_arch::_mm_shuffle_epi32(Self::load_u8_epi32(p), 0x1B)
    }

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn add_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        simd_arch::_mm_add_epi32(a, b)
    }

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn min_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        simd_arch::_mm_min_epi32(a, b)
    }

    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn cmpeq_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        simd_arch::_mm_cmpeq_epi32(a, b)
    }
}

#[cfg(target_arch = "aarch64")]
#[allow(unsafe_op_in_unsafe_fn)]
impl SimdEngine for SimdEngine128 {
    const WIDTH_32: usize = 4;

    type Vec32 = Vec128x32;

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn set1_epi32(a: i32) -> Self::Vec32 {
        simd_arch::vdupq_n_s32(a)
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn loadu_epi32(p: *const i32) -> Self::Vec32 {
        simd_arch::vld1q_s32(p)
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn storeu_epi32(p: *mut i32, a: Self::Vec32) {
        simd_arch::vst1q_s32(p, a)
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn load_u8_epi32(p: *const u8) -> Self::Vec32 {
        let lanes = read_bytes::<4>(p).map(i32::from);
        simd_arch::vld1q_s32(lanes.as_ptr())
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn load_u8_rev_epi32(p: *const u8) -> Self::Vec32 {
        let mut bytes = read_bytes::<4>(p);
        bytes.reverse();
        let lanes = bytes.map(i32::from);
        simd_arch::vld1q_s32(lanes.as_ptr())
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn add_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        simd_arch::vaddq_s32(a, b)
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn min_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        simd_arch::vminq_s32(a, b)
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn cmpeq_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        simd_arch::vreinterpretq_s32_u32(simd_arch::vceqq_s32(a, b))
    }
}
