pub mod core;
pub mod defaults;
pub mod distance_opt;
pub mod error;
pub mod sequence;

pub use crate::core::compute::{SimdEngineType, detect_optimal_simd_engine};
pub use crate::core::distance::{
    WavefrontAligner, compute_edit_distance, naive_edit_distance, parallel_edit_distance,
    simd_edit_distance, tiled_edit_distance,
};
pub use distance_opt::{DistanceOpt, KernelChoice, default_thread_count};
pub use error::{EditDistanceError, Result};
pub use sequence::{Equalize, SequencePair, equalize_lengths, random_sequence};
