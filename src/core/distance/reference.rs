//! Sequential reference implementations used to validate the parallel driver.

use crate::error::{EditDistanceError, Result};
use crate::sequence::SequencePair;

use super::boundary::BoundaryState;
use super::scalar_kernel::{edit_cell, process_tile_scalar};
use super::tile::{Tile, num_blocks};
use super::workspace::TileScratch;

/// Full-matrix-free Levenshtein distance with two rolling rows.
///
/// O(n^2) time, O(n) space. No tiling, no threads.
pub fn naive_edit_distance(a: &[u8], b: &[u8]) -> Result<u32> {
    let seqs = SequencePair::new(a, b)?;
    let n = seqs.len();

    let mut prev: Vec<i32> = (0..=n as i32).collect();
    let mut cur = vec![0i32; n + 1];

    for i in 1..=n {
        cur[0] = i as i32;
        let a_sym = a[i - 1];
        for j in 1..=n {
            let cost = (a_sym != b[j - 1]) as i32;
            cur[j] = edit_cell(prev[j], cur[j - 1], prev[j - 1], cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    Ok(prev[n] as u32)
}

/// Tiled distance computed one tile at a time in row-major block order.
///
/// Shares the boundary layout and row kernel with the parallel driver, so a
/// mismatch against `naive_edit_distance` isolates tiling bugs from
/// scheduling bugs.
pub fn tiled_edit_distance(a: &[u8], b: &[u8], block_size: usize) -> Result<u32> {
    if block_size < 1 {
        return Err(EditDistanceError::InvalidConfig(
            "block size must be at least 1".to_string(),
        ));
    }
    let seqs = SequencePair::new(a, b)?;
    if seqs.is_empty() {
        return Ok(0);
    }

    let n = seqs.len();
    let blocks = num_blocks(n, block_size);
    let boundary = BoundaryState::try_new(n)?;
    let mut scratch = TileScratch::new(0);

    for r in 0..blocks {
        for c in 0..blocks {
            let tile = Tile::new(r, c, block_size, n);
            let (prev, cur) = scratch.ensure_rows(tile.width)?;
            process_tile_scalar(&tile, &seqs, &boundary, prev, cur);
        }
    }

    Ok(boundary.final_distance(blocks) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_known_values() {
        assert_eq!(naive_edit_distance(b"", b"").unwrap(), 0);
        assert_eq!(naive_edit_distance(b"HELLO", b"HELLO").unwrap(), 0);
        assert_eq!(naive_edit_distance(b"HELLO", b"HELLA").unwrap(), 1);
        assert_eq!(naive_edit_distance(b"ABC", b"XYZ").unwrap(), 3);
        assert_eq!(naive_edit_distance(b"KITTEN", b"SITTIN").unwrap(), 2);
        assert_eq!(naive_edit_distance(b"FLAW", b"LAWN").unwrap(), 2);
    }

    #[test]
    fn test_naive_rejects_mismatch() {
        assert!(naive_edit_distance(b"AB", b"A").is_err());
    }

    #[test]
    fn test_tiled_matches_naive_across_block_sizes() {
        let a = b"THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        let b = b"THEQUACKBROWNFIXJUMPEDOVERTHELAZYDG";
        let expected = naive_edit_distance(a, b).unwrap();
        for block in [1, 2, 3, 5, 8, 16, 35, 64] {
            assert_eq!(
                tiled_edit_distance(a, b, block).unwrap(),
                expected,
                "block size {}",
                block
            );
        }
    }

    #[test]
    fn test_tiled_rejects_zero_block() {
        assert!(matches!(
            tiled_edit_distance(b"AB", b"AB", 0),
            Err(EditDistanceError::InvalidConfig(_))
        ));
    }
}
