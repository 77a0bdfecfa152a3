//! SIMD abstraction layer
//!
//! This module exposes a single, portable surface area for the handful of
//! lane operations the anti-diagonal tile kernel needs. It hides ISA
//! differences between x86_64 (SSE4.1/AVX2) and aarch64 (NEON) behind the
//! `SimdEngine` trait, while preserving zero-cost calls to architecture
//! intrinsics.
//!
//! The edit-distance recurrence only ever needs four things per lane:
//! broadcast, add, min and an equality mask, plus unaligned loads/stores of
//! DP values and byte-widening loads of the input sequences. The trait is
//! kept to exactly that surface.
//!
//! ## Engines and widths
//!
//! All engines operate on 32-bit signed lanes, because DP values are bounded
//! by `2n` and routinely exceed the i16 range:
//! - `SimdEnginePortable`: 4 lanes held in a plain array (any architecture)
//! - `SimdEngine128`: 128-bit vectors, 4 lanes (SSE4.1 on x86_64; NEON on aarch64)
//! - `SimdEngine256`: 256-bit vectors, 8 lanes (AVX2 on x86_64)
//!
//! ## Runtime dispatch pattern
//!
//! 1) Detect features once: `detect_optimal_simd_engine()`
//! 2) Keep the result in the lightweight `SimdEngineType` enum
//! 3) Dispatch: `match engine { .. }` selects a `#[target_feature]` wrapper
//!    around the generic kernel (see `core::distance::simd_kernel`)
//!
//! ## Safety model
//!
//! All trait functions are `unsafe` because they may require specific CPU
//! features and dereference raw pointers. Callers must ensure the chosen
//! engine matches the CPU (handled by runtime detection) and that every
//! pointer is valid for `WIDTH_32` elements.

pub mod engine128;
pub mod engine256;
pub mod portable;
pub mod simd;
pub mod types;

pub use engine128::SimdEngine128;
#[cfg(target_arch = "x86_64")]
pub use engine256::SimdEngine256;
pub use portable::SimdEnginePortable;
pub use simd::{SimdEngineType, detect_optimal_simd_engine, simd_engine_description};

/// Trait for a SIMD engine over 32-bit signed lanes.
pub trait SimdEngine: Sized + Copy {
    /// Number of 32-bit lanes in the engine's native vector type.
    const WIDTH_32: usize;

    /// Architecture-specific vector of `WIDTH_32` i32 lanes.
    type Vec32: Copy;

    // ===== Creation =====
    /// Broadcast a scalar i32 into all lanes.
    unsafe fn set1_epi32(a: i32) -> Self::Vec32;

    // ===== Memory Operations =====
    /// Load `WIDTH_32` i32 values from an unaligned pointer.
    unsafe fn loadu_epi32(p: *const i32) -> Self::Vec32;
    /// Store `WIDTH_32` i32 values to an unaligned pointer.
    unsafe fn storeu_epi32(p: *mut i32, a: Self::Vec32);
    /// Load `WIDTH_32` bytes and zero-extend each into its own lane.
    /// Lane `l` receives `p[l]`.
    unsafe fn load_u8_epi32(p: *const u8) -> Self::Vec32;
    /// Load `WIDTH_32` bytes, zero-extend, and reverse lane order.
    /// Lane `l` receives `p[WIDTH_32 - 1 - l]`.
    unsafe fn load_u8_rev_epi32(p: *const u8) -> Self::Vec32;

    // ===== 32-bit Integer Arithmetic =====
    /// Per-lane wrapping add.
    unsafe fn add_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32;
    /// Per-lane signed min.
    unsafe fn min_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32;

    // ===== Comparison Operations =====
    /// Compare equal; each lane is all-ones (-1) when equal, 0 otherwise.
    unsafe fn cmpeq_epi32(a: Self::Vec32, b: Self::Vec32) -> Self::Vec32;

    // ===== Composite Operations =====
    /// Per-lane min of three vectors.
    #[inline(always)]
    unsafe fn min3_epi32(a: Self::Vec32, b: Self::Vec32, c: Self::Vec32) -> Self::Vec32 {
        Self::min_epi32(Self::min_epi32(a, b), c)
    }

    /// Substitution cost per lane: 0 where the symbols match, 1 otherwise.
    ///
    /// The equality mask is -1 on a match, so adding one yields the cost.
    #[inline(always)]
    unsafe fn mismatch_cost_epi32(
        a: Self::Vec32,
        b: Self::Vec32,
        one: Self::Vec32,
    ) -> Self::Vec32 {
        Self::add_epi32(Self::cmpeq_epi32(a, b), one)
    }
}
