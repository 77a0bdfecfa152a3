//! Shared boundary state for the tiled DP grid.
//!
//! Only tile edges are ever materialized:
//! - three row-edge buffers of length `n + 1`, rotated by block row modulo 3;
//! - one column-edge buffer of length `n + 1`, updated in place.
//!
//! A tile at block row `r` reads row slot `(r + 2) % 3` and writes slot
//! `r % 3`. Three slots are needed because a write at wave `w` would
//! otherwise land in the buffer a wave `w - 2` tile in a neighbouring block
//! row still has to be read from.
//!
//! Every cell is an `AtomicI32` accessed with `Relaxed` ordering. Tiles that
//! run concurrently touch disjoint ranges (see `scheduler::check_wave`), and
//! the per-wave join provides the happens-before edge between waves, so no
//! lock is ever taken.

use std::sync::atomic::{AtomicI32, Ordering};

use crate::error::{EditDistanceError, Result};

/// Number of rotating row-edge buffers.
pub const ROW_SLOTS: usize = 3;

/// Index of one of the rotating row-edge buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowSlot(usize);

impl RowSlot {
    /// Slot written by tiles in `block_row`.
    #[inline]
    pub const fn write_for(block_row: usize) -> Self {
        RowSlot(block_row % ROW_SLOTS)
    }

    /// Slot read by tiles in `block_row` (the one written by `block_row - 1`).
    #[inline]
    pub const fn read_for(block_row: usize) -> Self {
        RowSlot((block_row + ROW_SLOTS - 1) % ROW_SLOTS)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Row and column edges of the DP grid shared by all workers.
#[derive(Debug)]
pub struct BoundaryState {
    rows: [Box<[AtomicI32]>; ROW_SLOTS],
    cols: Box<[AtomicI32]>,
    len: usize,
}

/// Allocate `len + 1` cells seeded with `0..=len`, the DP base case.
fn try_identity_buffer(buffer: &'static str, len: usize) -> Result<Box<[AtomicI32]>> {
    let elements = len + 1;
    let mut cells: Vec<AtomicI32> = Vec::new();
    cells
        .try_reserve_exact(elements)
        .map_err(|source| EditDistanceError::BoundaryAlloc {
            buffer,
            elements,
            source,
        })?;
    cells.extend((0..elements).map(|i| AtomicI32::new(i as i32)));
    Ok(cells.into_boxed_slice())
}

impl BoundaryState {
    /// Allocate all four edge buffers for sequences of length `len`.
    ///
    /// Fails with `BoundaryAlloc` if any buffer cannot be reserved; buffers
    /// already allocated are dropped on the way out.
    pub fn try_new(len: usize) -> Result<Self> {
        let rows = [
            try_identity_buffer("row", len)?,
            try_identity_buffer("row", len)?,
            try_identity_buffer("row", len)?,
        ];
        let cols = try_identity_buffer("column", len)?;
        log::debug!(
            "Allocated boundary state: {} row slots + 1 column buffer of {} cells",
            ROW_SLOTS,
            len + 1
        );
        Ok(Self { rows, cols, len })
    }

    /// Sequence length `n` this state was sized for.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `D[row][col]` for the grid row most recently written to `slot`.
    #[inline]
    pub fn read_row(&self, slot: RowSlot, col: usize) -> i32 {
        self.rows[slot.index()][col].load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_row(&self, slot: RowSlot, col: usize, value: i32) {
        self.rows[slot.index()][col].store(value, Ordering::Relaxed);
    }

    /// `D[row][col]` for the grid column most recently written at `row`.
    #[inline]
    pub fn read_col(&self, row: usize) -> i32 {
        self.cols[row].load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_col(&self, row: usize, value: i32) {
        self.cols[row].store(value, Ordering::Relaxed);
    }

    /// Bottom-right cell `D[n][n]`, valid once every wave has completed.
    pub fn final_distance(&self, num_blocks: usize) -> i32 {
        debug_assert!(num_blocks > 0);
        self.read_row(RowSlot::write_for(num_blocks - 1), self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_rotate_mod_three() {
        assert_eq!(RowSlot::write_for(0).index(), 0);
        assert_eq!(RowSlot::write_for(4).index(), 1);
        assert_eq!(RowSlot::read_for(0).index(), 2);
        assert_eq!(RowSlot::read_for(1).index(), 0);
        assert_eq!(RowSlot::read_for(5).index(), 1);
        for r in 1..10 {
            assert_eq!(RowSlot::read_for(r), RowSlot::write_for(r - 1));
        }
    }

    #[test]
    fn test_new_state_holds_base_case() {
        let state = BoundaryState::try_new(10).unwrap();
        assert_eq!(state.len(), 10);
        for slot in 0..ROW_SLOTS {
            for col in 0..=10 {
                assert_eq!(state.read_row(RowSlot(slot), col), col as i32);
            }
        }
        for row in 0..=10 {
            assert_eq!(state.read_col(row), row as i32);
        }
    }

    #[test]
    fn test_writes_are_slot_local() {
        let state = BoundaryState::try_new(4).unwrap();
        state.write_row(RowSlot::write_for(1), 3, 42);
        assert_eq!(state.read_row(RowSlot::write_for(1), 3), 42);
        assert_eq!(state.read_row(RowSlot::write_for(0), 3), 3);
        assert_eq!(state.read_row(RowSlot::write_for(2), 3), 3);

        state.write_col(2, 7);
        assert_eq!(state.read_col(2), 7);
        assert_eq!(state.final_distance(2), 4);
    }
}
