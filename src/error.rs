//! Error type shared by every edit-distance entry point.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditDistanceError {
    /// The two sequences passed to the core differ in length.
    #[error("Sequences must have equal length (got {a_len} and {b_len})")]
    LengthMismatch { a_len: usize, b_len: usize },

    /// DP values are stored as i32 and are bounded by twice the length.
    #[error("Sequence length {len} exceeds the supported maximum of {max}")]
    SequenceTooLong { len: usize, max: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// One of the shared boundary buffers could not be allocated.
    #[error("Failed to allocate {buffer} boundary buffer of {elements} elements: {source}")]
    BoundaryAlloc {
        buffer: &'static str,
        elements: usize,
        #[source]
        source: TryReserveError,
    },

    /// A worker could not allocate its private tile scratch buffer.
    #[error("Worker {worker} failed to allocate {elements} scratch elements: {source}")]
    ScratchAlloc {
        worker: usize,
        elements: usize,
        #[source]
        source: TryReserveError,
    },

    /// The requested SIMD engine cannot run on this CPU.
    #[error("SIMD engine {0} is not supported on this CPU")]
    UnsupportedEngine(crate::core::compute::SimdEngineType),

    #[error("Failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, EditDistanceError>;
