//! Module for runtime SIMD engine detection and management.
//!
//! This module detects the optimal SIMD engine available on the CPU at
//! runtime and exposes associated metadata like human-readable descriptions
//! and the lane batch the anti-diagonal kernel processes per step.

use std::fmt;
use std::str::FromStr;

/// Available SIMD engine types based on CPU capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimdEngineType {
    /// Plain-array 4-lane engine - always available
    Portable,
    /// 128-bit SIMD (SSE4.1/NEON)
    Engine128,
    /// 256-bit SIMD (AVX2) - x86_64 only
    #[cfg(target_arch = "x86_64")]
    Engine256,
}

impl SimdEngineType {
    /// Number of i32 lanes in one vector of this engine.
    pub const fn lanes(self) -> usize {
        match self {
            SimdEngineType::Portable | SimdEngineType::Engine128 => 4,
            #[cfg(target_arch = "x86_64")]
            SimdEngineType::Engine256 => 8,
        }
    }

    /// Cells computed per vector step of the tile kernel (two vector groups).
    pub const fn batch_lanes(self) -> usize {
        2 * self.lanes()
    }

    /// Whether the running CPU can execute this engine.
    pub fn is_supported(self) -> bool {
        match self {
            SimdEngineType::Portable => true,
            SimdEngineType::Engine128 => {
                #[cfg(target_arch = "x86_64")]
                {
                    is_x86_feature_detected!("sse4.1")
                }
                #[cfg(target_arch = "aarch64")]
                {
                    true
                }
                #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
                {
                    false
                }
            }
            #[cfg(target_arch = "x86_64")]
            SimdEngineType::Engine256 => is_x86_feature_detected!("avx2"),
        }
    }
}

impl fmt::Display for SimdEngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(simd_engine_description(*self))
    }
}

impl FromStr for SimdEngineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "portable" | "scalar" => Ok(SimdEngineType::Portable),
            "128" | "sse" | "sse4.1" | "neon" => Ok(SimdEngineType::Engine128),
            #[cfg(target_arch = "x86_64")]
            "256" | "avx2" => Ok(SimdEngineType::Engine256),
            other => Err(format!("Unknown SIMD engine: {}", other)),
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| v == "1").unwrap_or(false)
}

/// Detects the optimal SIMD engine based on CPU features
///
/// Environment variable overrides for testing/debugging:
/// - `FERROUS_WAVEFRONT_FORCE_PORTABLE=1`: Force the portable 4-lane engine
/// - `FERROUS_WAVEFRONT_FORCE_SSE=1`: Force the 128-bit engine (skip AVX2)
pub fn detect_optimal_simd_engine() -> SimdEngineType {
    if env_flag("FERROUS_WAVEFRONT_FORCE_PORTABLE") {
        log::info!("FERROUS_WAVEFRONT_FORCE_PORTABLE=1: Using portable engine");
        return SimdEngineType::Portable;
    }

    #[cfg(target_arch = "x86_64")]
    {
        let force_sse = env_flag("FERROUS_WAVEFRONT_FORCE_SSE");
        if force_sse {
            log::info!("FERROUS_WAVEFRONT_FORCE_SSE=1: Using SSE4.1 (128-bit) engine");
        }

        if !force_sse && is_x86_feature_detected!("avx2") {
            return SimdEngineType::Engine256;
        }

        if is_x86_feature_detected!("sse4.1") {
            return SimdEngineType::Engine128;
        }

        SimdEngineType::Portable
    }

    #[cfg(target_arch = "aarch64")]
    {
        // aarch64 always has NEON
        SimdEngineType::Engine128
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        SimdEngineType::Portable
    }
}

/// Returns a human-readable description of the SIMD engine
pub fn simd_engine_description(engine: SimdEngineType) -> &'static str {
    match engine {
        SimdEngineType::Portable => "Portable (4 x i32 lanes, no intrinsics)",
        SimdEngineType::Engine128 => {
            #[cfg(target_arch = "x86_64")]
            {
                "SSE4.1 (128-bit, 4 x i32 lanes)"
            }
            #[cfg(not(target_arch = "x86_64"))]
            {
                "NEON (128-bit, 4 x i32 lanes)"
            }
        }
        #[cfg(target_arch = "x86_64")]
        SimdEngineType::Engine256 => "AVX2 (256-bit, 8 x i32 lanes)",
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test runtime SIMD engine detection
    #[test]
    fn test_simd_engine_detection() {
        let engine = detect_optimal_simd_engine();
        println!("Detected SIMD engine: {:?} ({})", engine, engine);

        assert!(engine.is_supported());

        #[cfg(target_arch = "x86_64")]
        {
            let forced = std::env::var("FERROUS_WAVEFRONT_FORCE_PORTABLE").is_ok()
                || std::env::var("FERROUS_WAVEFRONT_FORCE_SSE").is_ok();
            if !forced {
                if is_x86_feature_detected!("avx2") {
                    assert_eq!(engine, SimdEngineType::Engine256);
                } else if is_x86_feature_detected!("sse4.1") {
                    assert_eq!(engine, SimdEngineType::Engine128);
                }
            }
        }
    }

    #[test]
    fn test_batch_lanes_double_vector_width() {
        assert_eq!(SimdEngineType::Portable.batch_lanes(), 8);
        assert_eq!(SimdEngineType::Engine128.batch_lanes(), 8);
        #[cfg(target_arch = "x86_64")]
        assert_eq!(SimdEngineType::Engine256.batch_lanes(), 16);
    }

    #[test]
    fn test_parse_engine_names() {
        assert_eq!("portable".parse::<SimdEngineType>(), Ok(SimdEngineType::Portable));
        assert_eq!("SSE".parse::<SimdEngineType>(), Ok(SimdEngineType::Engine128));
        #[cfg(target_arch = "x86_64")]
        assert_eq!("avx2".parse::<SimdEngineType>(), Ok(SimdEngineType::Engine256));
        assert!("avx9000".parse::<SimdEngineType>().is_err());
    }
}
