//! Portable 4-lane engine
//!
//! Implements `SimdEngine` over a plain `[i32; 4]`. It carries no CPU
//! feature requirements, so the anti-diagonal kernel can run (and be tested)
//! on any target. The compiler is usually able to auto-vectorize these loops.

use super::SimdEngine;
use super::types::read_bytes;

const LANES: usize = 4;

/// Architecture-neutral SIMD backend with four i32 lanes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimdEnginePortable;

#[inline(always)]
fn lanewise(a: [i32; LANES], b: [i32; LANES], f: impl Fn(i32, i32) -> i32) -> [i32; LANES] {
    [f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])]
}

impl SimdEngine for SimdEnginePortable {
    const WIDTH_32: usize = LANES;

    type Vec32 = [i32; LANES];

    #[inline(always)]
    unsafe fn set1_epi32(a: i32) -> Self::Vec32 {
        [a; LANES]
    }

    #[inline(always)]
    unsafe fn loadu_epi32(p: *const i32) -> Self::Vec32 {
        std::ptr::read_unaligned(p as *const [i32; LANES])
    }

    #[inline(always)]
    unsafe fn storeu_epi32(p: *mut i32, a: Self::Vec32) {
        std::ptr::write_unaligned(p as *mut [i32; LANES], a)
    }

    #[inline(always)]
    unsafe fn load_u8_epi32(p: *const u8) -> Self::Vec32 {
        let bytes: [u8; LANES] = read_bytes(p);
        bytes.map(i32::from)
    }

    #[inline(always)]
    unsafe fn load_u8_rev_epi32(p: *const u8) -> Self::Vec32 {
        let mut bytes: [u8; LANES] = read_bytes(p);
        bytes.reverse();
        bytes.map(i32::from)
    }

    #[inline(always)]
    unsafe fn add_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        lanewise(a, b, i32::wrapping_add)
    }

    #[inline(always)]
    unsafe fn min_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        lanewise(a, b, i32::min)
    }

    #[inline(always)]
    unsafe fn cmpeq_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32 {
        lanewise(a, b, |x, y| if x == y { -1 } else { 0 })
    }
}
