//! Worker-private scratch buffers for the tile kernels
//!
//! Each worker owns one `TileScratch` for the whole computation. Buffers
//! start empty and grow on the first tile that needs them, so workers that
//! are never assigned a tile never allocate. Growth uses `try_reserve_exact`
//! so an allocation failure surfaces as `ScratchAlloc` instead of aborting
//! the process.

use crate::error::{EditDistanceError, Result};

/// Elements needed by the row-by-row kernel for one of its two rows.
#[inline]
pub fn row_scratch_len(width: usize) -> usize {
    width.saturating_add(1)
}

/// Elements needed by the anti-diagonal kernel for a `height x width` tile.
///
/// One line of `height + 1` cells per diagonal `k = 0 ..= height + width`.
/// For a full `B x B` tile this is just under `2 * (B + 1)^2`.
#[inline]
pub fn diagonal_scratch_len(height: usize, width: usize) -> usize {
    height
        .saturating_add(width)
        .saturating_add(1)
        .saturating_mul(height.saturating_add(1))
}

/// Reusable buffers owned by a single worker.
#[derive(Debug, Default)]
pub struct TileScratch {
    worker: usize,
    prev_row: Vec<i32>,
    cur_row: Vec<i32>,
    diagonals: Vec<i32>,
}

fn try_grow(buf: &mut Vec<i32>, elements: usize, worker: usize) -> Result<()> {
    if buf.len() < elements {
        buf.try_reserve_exact(elements - buf.len())
            .map_err(|source| EditDistanceError::ScratchAlloc {
                worker,
                elements,
                source,
            })?;
        buf.resize(elements, 0);
    }
    Ok(())
}

impl TileScratch {
    /// Empty scratch for `worker`; nothing is allocated yet.
    pub fn new(worker: usize) -> Self {
        Self {
            worker,
            ..Self::default()
        }
    }

    #[inline]
    pub fn worker(&self) -> usize {
        self.worker
    }

    /// Two rows of at least `width + 1` cells for the scalar kernel.
    pub fn ensure_rows(&mut self, width: usize) -> Result<(&mut [i32], &mut [i32])> {
        let elements = row_scratch_len(width);
        try_grow(&mut self.prev_row, elements, self.worker)?;
        try_grow(&mut self.cur_row, elements, self.worker)?;
        Ok((
            &mut self.prev_row[..elements],
            &mut self.cur_row[..elements],
        ))
    }

    /// Diagonal-major buffer for the SIMD kernel.
    pub fn ensure_diagonals(&mut self, height: usize, width: usize) -> Result<&mut [i32]> {
        let elements = diagonal_scratch_len(height, width);
        try_grow(&mut self.diagonals, elements, self.worker)?;
        Ok(&mut self.diagonals[..elements])
    }

    /// Total cells currently held, across all buffers.
    pub fn allocated_cells(&self) -> usize {
        self.prev_row.len() + self.cur_row.len() + self.diagonals.len()
    }
}
