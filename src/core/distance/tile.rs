//! Tile geometry: the fixed-size sub-blocks the DP grid is cut into.

use std::ops::Range;

use super::boundary::{BoundaryState, RowSlot};

/// Number of block rows (and block columns) for sequences of length `len`.
#[inline]
pub fn num_blocks(len: usize, block_size: usize) -> usize {
    len.div_ceil(block_size)
}

/// One `height x width` block of the virtual DP grid at block `(r, c)`.
///
/// Covers grid rows `row_offset + 1 ..= row_offset + height` and columns
/// `col_offset + 1 ..= col_offset + width`. Tiles on the last block row or
/// column are shrunk to the remaining length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub block_row: usize,
    pub block_col: usize,
    pub row_offset: usize,
    pub col_offset: usize,
    pub height: usize,
    pub width: usize,
}

impl Tile {
    pub fn new(block_row: usize, block_col: usize, block_size: usize, len: usize) -> Self {
        let row_offset = block_row * block_size;
        let col_offset = block_col * block_size;
        debug_assert!(row_offset < len && col_offset < len);
        Self {
            block_row,
            block_col,
            row_offset,
            col_offset,
            height: block_size.min(len - row_offset),
            width: block_size.min(len - col_offset),
        }
    }

    /// Row-edge slot holding the grid row just above this tile.
    #[inline]
    pub fn read_slot(&self) -> RowSlot {
        RowSlot::read_for(self.block_row)
    }

    /// Row-edge slot receiving this tile's bottom row.
    #[inline]
    pub fn write_slot(&self) -> RowSlot {
        RowSlot::write_for(self.block_row)
    }

    /// Global grid rows computed by this tile.
    #[inline]
    pub fn rows(&self) -> Range<usize> {
        self.row_offset + 1..self.row_offset + self.height + 1
    }

    /// Global grid columns computed by this tile.
    #[inline]
    pub fn cols(&self) -> Range<usize> {
        self.col_offset + 1..self.col_offset + self.width + 1
    }

    /// `D[row_offset][col_offset]`, the cell diagonally up-left of the tile.
    ///
    /// On the grid's left and top edges this is the base case itself; inside
    /// the grid it is the bottom-right value of tile `(r - 1, c - 1)`, which
    /// sits at `col_offset` in this tile's read slot.
    #[inline]
    pub fn corner_seed(&self, boundary: &BoundaryState) -> i32 {
        if self.col_offset == 0 {
            self.row_offset as i32
        } else if self.row_offset == 0 {
            self.col_offset as i32
        } else {
            boundary.read_row(self.read_slot(), self.col_offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_blocks_rounds_up() {
        assert_eq!(num_blocks(0, 512), 0);
        assert_eq!(num_blocks(1, 512), 1);
        assert_eq!(num_blocks(512, 512), 1);
        assert_eq!(num_blocks(513, 512), 2);
        assert_eq!(num_blocks(2048, 512), 4);
    }

    #[test]
    fn test_edge_tiles_shrink() {
        let tile = Tile::new(1, 2, 512, 1100);
        assert_eq!(tile.row_offset, 512);
        assert_eq!(tile.col_offset, 1024);
        assert_eq!(tile.height, 512);
        assert_eq!(tile.width, 76);
        assert_eq!(tile.rows(), 513..1025);
        assert_eq!(tile.cols(), 1025..1101);
    }

    #[test]
    fn test_corner_seed_on_grid_edges() {
        let boundary = BoundaryState::try_new(40).unwrap();
        assert_eq!(Tile::new(0, 0, 8, 40).corner_seed(&boundary), 0);
        assert_eq!(Tile::new(3, 0, 8, 40).corner_seed(&boundary), 24);
        assert_eq!(Tile::new(0, 2, 8, 40).corner_seed(&boundary), 16);

        let inner = Tile::new(2, 3, 8, 40);
        boundary.write_row(inner.read_slot(), inner.col_offset, 99);
        assert_eq!(inner.corner_seed(&boundary), 99);
    }
}
