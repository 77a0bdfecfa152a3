// src/distance_opt.rs
//
// Options controlling a wavefront edit-distance computation

use crate::core::compute::SimdEngineType;
use crate::defaults;
use crate::error::{EditDistanceError, Result};

/// Which tile kernel the workers run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelChoice {
    /// Row-by-row kernel with two rolling rows.
    Scalar,
    /// Anti-diagonal kernel batched across SIMD lanes.
    #[default]
    Simd,
}

impl std::str::FromStr for KernelChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scalar" => Ok(KernelChoice::Scalar),
            "simd" => Ok(KernelChoice::Simd),
            other => Err(format!("Unknown kernel: {} (expected scalar or simd)", other)),
        }
    }
}

/// Options for the wavefront driver
#[derive(Debug, Clone)]
pub struct DistanceOpt {
    pub block_size: usize,               // Tile edge length B
    pub n_threads: usize,                // Workers per wave
    pub kernel: KernelChoice,            // Tile kernel used by every worker
    pub engine: Option<SimdEngineType>,  // None = detect at runtime
}

impl Default for DistanceOpt {
    fn default() -> Self {
        Self {
            block_size: defaults::BLOCK_SIZE,
            n_threads: 1,
            kernel: KernelChoice::Simd,
            engine: None,
        }
    }
}

impl DistanceOpt {
    /// Options with the given worker count and everything else defaulted.
    pub fn with_threads(n_threads: usize) -> Self {
        Self {
            n_threads,
            ..Self::default()
        }
    }

    pub fn kernel(mut self, kernel: KernelChoice) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn engine(mut self, engine: SimdEngineType) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Reject option combinations the driver cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.n_threads < 1 {
            return Err(EditDistanceError::InvalidConfig(format!(
                "thread count must be at least 1 (got {})",
                self.n_threads
            )));
        }
        if self.block_size < 1 {
            return Err(EditDistanceError::InvalidConfig(
                "block size must be at least 1".to_string(),
            ));
        }
        if let Some(engine) = self.engine {
            if !engine.is_supported() {
                return Err(EditDistanceError::UnsupportedEngine(engine));
            }
        }
        Ok(())
    }
}

/// Thread count used when the caller does not pick one.
///
/// Uses every logical CPU, capped at `MAX_DEFAULT_THREADS`; beyond that the
/// per-wave join overhead outweighs the extra tiles in flight.
pub fn default_thread_count() -> usize {
    let detected = num_cpus::get();
    if detected < 1 {
        defaults::FALLBACK_THREADS
    } else if detected > defaults::MAX_DEFAULT_THREADS {
        log::warn!(
            "Detected {} logical CPUs, capping workers at {}",
            detected,
            defaults::MAX_DEFAULT_THREADS
        );
        defaults::MAX_DEFAULT_THREADS
    } else {
        detected
    }
}
