//! Row-by-row tile kernel.
//!
//! Walks a tile top-left to bottom-right with two rolling rows. Used on its
//! own by the scalar-kernel driver and the tiled reference, and as the
//! baseline the anti-diagonal kernel is checked against.

use crate::sequence::SequencePair;

use super::boundary::BoundaryState;
use super::tile::Tile;

/// One DP cell: `min(up + 1, left + 1, diag + cost)`.
#[inline(always)]
pub fn edit_cell(up: i32, left: i32, diag: i32, cost: i32) -> i32 {
    (up + 1).min(left + 1).min(diag + cost)
}

/// Compute every cell of `tile` and publish its right and bottom edges.
///
/// `prev` and `cur` must each hold at least `tile.width + 1` cells. The
/// column buffer is read and overwritten one row at a time over the tile's
/// own row range; the bottom row goes to the tile's write slot. Returns the
/// bottom-right cell.
pub fn process_tile_scalar(
    tile: &Tile,
    seqs: &SequencePair<'_>,
    boundary: &BoundaryState,
    prev: &mut [i32],
    cur: &mut [i32],
) -> i32 {
    let width = tile.width;
    debug_assert!(prev.len() > width && cur.len() > width);

    let mut prev = prev;
    let mut cur = cur;

    let read_slot = tile.read_slot();
    for j in 1..=width {
        prev[j] = boundary.read_row(read_slot, tile.col_offset + j);
    }
    prev[0] = tile.corner_seed(boundary);

    let b_cols = &seqs.b()[tile.col_offset..tile.col_offset + width];

    for global_row in tile.rows() {
        let a_sym = seqs.a()[global_row - 1];
        cur[0] = boundary.read_col(global_row);

        for j in 1..=width {
            let cost = (a_sym != b_cols[j - 1]) as i32;
            cur[j] = edit_cell(prev[j], cur[j - 1], prev[j - 1], cost);
        }

        boundary.write_col(global_row, cur[width]);
        std::mem::swap(&mut prev, &mut cur);
    }

    // After the final swap `prev` holds the tile's bottom row
    let write_slot = tile.write_slot();
    for j in 1..=width {
        boundary.write_row(write_slot, tile.col_offset + j, prev[j]);
    }

    prev[width]
}
