//! SIMD type aliases and architecture bindings
//!
//! A tiny portability layer so the engines can refer to `simd_arch` and the
//! 128-bit lane vector uniformly on x86_64 and aarch64.
//!
//! - On x86_64 we re-export `std::arch::x86_64` as `simd_arch`; the 128-bit
//!   engine works on the native `__m128i`.
//! - On aarch64 we re-export `std::arch::aarch64` as `simd_arch`; the 128-bit
//!   engine works on `int32x4_t` directly, so no wrapper type is needed.

#[cfg(target_arch = "x86_64")]
pub use std::arch::x86_64 as simd_arch;

#[cfg(target_arch = "aarch64")]
pub use std::arch::aarch64 as simd_arch;

/// 128-bit vector of four i32 lanes (SSE4.1).
#[allow(non_camel_case_types)]
#[cfg(target_arch = "x86_64")]
pub type Vec128x32 = simd_arch::__m128i;

/// 128-bit vector of four i32 lanes (NEON).
#[allow(non_camel_case_types)]
#[cfg(target_arch = "aarch64")]
pub type Vec128x32 = simd_arch::int32x4_t;

/// Read `N` bytes starting at `p` into an array without alignment requirements.
///
/// Safety: `p` must be valid for reads of `N` bytes.
#[inline(always)]
pub unsafe fn read_bytes<const N: usize>(p: *const u8) -> [u8; N] {
    std::ptr::read_unaligned(p as *const [u8; N])
}
