//! Wave scheduling: which tiles run together, and on which worker.
//!
//! Wave `w` is the anti-diagonal of the block grid, tiles `(r, w - r)`.
//! A tile depends only on tiles with a smaller `r + c`, so every tile of a
//! wave can run at once once the previous wave has finished.
//!
//! Tiles are dealt round-robin in increasing `r`: tile number `t` of the
//! wave goes to worker `t % n_threads`. Tile cost is near-uniform, so this
//! balances load better than contiguous chunks would.

use std::ops::{Range, RangeInclusive};

use super::boundary::RowSlot;
use super::tile::{Tile, num_blocks};

/// Static description of the wave structure for one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSchedule {
    len: usize,
    block_size: usize,
    num_blocks: usize,
}

impl WaveSchedule {
    pub fn new(len: usize, block_size: usize) -> Self {
        assert!(block_size > 0, "block size must be non-zero");
        Self {
            len,
            block_size,
            num_blocks: num_blocks(len, block_size),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.num_blocks
    }

    /// `2N - 1` waves for an `N x N` block grid.
    #[inline]
    pub fn num_waves(&self) -> usize {
        (2 * self.num_blocks).saturating_sub(1)
    }

    /// Block rows that have a tile on `wave`.
    pub fn block_rows(&self, wave: usize) -> RangeInclusive<usize> {
        let n = self.num_blocks;
        debug_assert!(wave < self.num_waves());
        let row_min = (wave + 1).saturating_sub(n);
        let row_max = wave.min(n - 1);
        row_min..=row_max
    }

    /// All tiles of `wave`, in increasing block row.
    pub fn tiles_in_wave(&self, wave: usize) -> impl Iterator<Item = Tile> + '_ {
        self.block_rows(wave)
            .map(move |r| Tile::new(r, wave - r, self.block_size, self.len))
    }

    /// Tiles of `wave` assigned to `worker` out of `n_threads`.
    pub fn tiles_for_worker(
        &self,
        wave: usize,
        worker: usize,
        n_threads: usize,
    ) -> impl Iterator<Item = Tile> + '_ {
        debug_assert!(n_threads > 0 && worker < n_threads);
        self.tiles_in_wave(wave)
            .enumerate()
            .filter(move |(tile_number, _)| tile_number % n_threads == worker)
            .map(|(_, tile)| tile)
    }

    /// Verify that the tiles of `wave` can run concurrently without locks.
    ///
    /// Checks, for every pair of tiles in the wave:
    /// - their grid row ranges are disjoint (column buffer is shared in place);
    /// - writes to the same row slot cover disjoint columns;
    /// - no tile writes a row slot cell another tile reads, corner included.
    pub fn check_wave(&self, wave: usize) -> Result<(), String> {
        let tiles: Vec<Tile> = self.tiles_in_wave(wave).collect();
        for (x, first) in tiles.iter().enumerate() {
            for second in &tiles[x + 1..] {
                if overlaps(&first.rows(), &second.rows()) {
                    return Err(format!(
                        "wave {}: tiles {:?} and {:?} share column-buffer rows",
                        wave, first, second
                    ));
                }
                for (writer, other) in [(first, second), (second, first)] {
                    if row_slot_conflict(writer.write_slot(), writer.cols(), other) {
                        return Err(format!(
                            "wave {}: tile {:?} writes row-slot cells used by {:?}",
                            wave, writer, other
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

#[inline]
fn overlaps(x: &Range<usize>, y: &Range<usize>) -> bool {
    x.start < y.end && y.start < x.end
}

/// Whether a write of `cols` into `slot` touches anything `other` reads or writes.
fn row_slot_conflict(slot: RowSlot, cols: Range<usize>, other: &Tile) -> bool {
    let write_hit = other.write_slot() == slot && overlaps(&cols, &other.cols());
    // Reads include the corner cell at col_offset
    let read_range = other.col_offset..other.col_offset + other.width + 1;
    let read_hit = other.read_slot() == slot && overlaps(&cols, &read_range);
    write_hit || read_hit
}
