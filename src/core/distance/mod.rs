//! Blocked wavefront edit distance.
//!
//! The `(n + 1) x (n + 1)` DP grid is never materialized. It is cut into
//! `B x B` tiles; only tile edges live in the shared `BoundaryState`, and
//! each worker keeps its tile interior in private scratch. Tiles on one
//! anti-diagonal of the block grid form a wave and run in parallel.

pub mod boundary;
pub mod reference;
pub mod scalar_kernel;
pub mod scheduler;
pub mod simd_kernel;
pub mod tile;
pub mod wavefront;
pub mod workspace;

pub use boundary::{BoundaryState, ROW_SLOTS, RowSlot};
pub use reference::{naive_edit_distance, tiled_edit_distance};
pub use scheduler::WaveSchedule;
pub use tile::{Tile, num_blocks};
pub use wavefront::{
    TileKernel, WavefrontAligner, compute_edit_distance, parallel_edit_distance,
    simd_edit_distance,
};
