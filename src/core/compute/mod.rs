//! Compute backends for the tile kernels.
//!
//! Only CPU SIMD is implemented; engine selection lives in
//! `simd_abstraction::simd`.

pub mod simd_abstraction;

pub use simd_abstraction::{SimdEngineType, detect_optimal_simd_engine, simd_engine_description};
