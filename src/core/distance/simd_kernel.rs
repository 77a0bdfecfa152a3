//! Anti-diagonal tile kernel batched across SIMD lanes.
//!
//! Cells on one anti-diagonal `k = i + j` depend only on diagonals `k - 1`
//! and `k - 2`, so every cell of a diagonal can be computed at once. The
//! tile is stored diagonal-major: line `k` holds the cells `(i, k - i)`
//! indexed by row `i`, with stride `height + 1`.
//!
//! For row `i` on diagonal `k` the three neighbours live at:
//! - left `(i, j - 1)`: line `k - 1`, index `i`
//! - top  `(i - 1, j)`: line `k - 1`, index `i - 1`
//! - diag `(i - 1, j - 1)`: line `k - 2`, index `i - 1`
//!
//! so a run of consecutive rows maps to three contiguous unaligned loads.
//! Along a diagonal the row index walks `a` forwards while the column index
//! walks `b` backwards; the `b` window is therefore loaded lane-reversed.
//!
//! Each diagonal is processed in batches of two vector groups while a full
//! batch fits in the valid row range, then the remainder falls back to the
//! scalar recurrence, cell by cell.

use crate::core::compute::simd_abstraction::{SimdEngine, SimdEnginePortable, SimdEngineType};
use crate::sequence::SequencePair;

use super::boundary::BoundaryState;
use super::scalar_kernel::edit_cell;
use super::tile::Tile;
use super::workspace::diagonal_scratch_len;

/// Generic anti-diagonal kernel.
///
/// Safety: `E` must be supported by the running CPU and `buf` must hold at
/// least `diagonal_scratch_len(tile.height, tile.width)` cells.
#[inline(always)]
unsafe fn diagonal_tile<E: SimdEngine>(
    tile: &Tile,
    seqs: &SequencePair<'_>,
    boundary: &BoundaryState,
    buf: &mut [i32],
) -> i32 {
    let (height, width) = (tile.height, tile.width);
    let stride = height + 1;
    let idx = |k: usize, i: usize| k * stride + i;
    assert!(buf.len() >= diagonal_scratch_len(height, width));

    let a = seqs.a();
    let b = seqs.b();
    debug_assert!(tile.row_offset + height <= a.len());
    debug_assert!(tile.col_offset + width <= b.len());

    // Seed the left column (i, 0) on line i, and the top row (0, j) on line j
    for i in 1..=height {
        buf[idx(i, i)] = boundary.read_col(tile.row_offset + i);
    }
    let read_slot = tile.read_slot();
    for j in 1..=width {
        buf[idx(j, 0)] = boundary.read_row(read_slot, tile.col_offset + j);
    }
    buf[idx(0, 0)] = tile.corner_seed(boundary);

    let lanes = E::WIDTH_32;
    let batch = 2 * lanes;
    let one = E::set1_epi32(1);

    for k in 2..=height + width {
        let min_i = k.saturating_sub(width).max(1);
        let max_i = (k - 1).min(height);

        let (done, rest) = buf.split_at_mut(k * stride);
        let prev = &done[(k - 1) * stride..];
        let prev2 = &done[(k - 2) * stride..(k - 1) * stride];
        let cur = &mut rest[..stride];

        let mut i = min_i;
        while i + batch <= max_i + 1 {
            let j = k - i;
            // Every lane sits at column >= 1, so the b window starts inside the tile
            debug_assert!(j >= batch);

            let a_ptr = a.as_ptr().add(tile.row_offset + i - 1);
            let b_ptr = b.as_ptr().add(tile.col_offset + j - batch);

            for group in 0..2 {
                let off = group * lanes;
                let left = E::loadu_epi32(prev.as_ptr().add(i + off));
                let top = E::loadu_epi32(prev.as_ptr().add(i - 1 + off));
                let diag = E::loadu_epi32(prev2.as_ptr().add(i - 1 + off));

                let va = E::load_u8_epi32(a_ptr.add(off));
                let vb = E::load_u8_rev_epi32(b_ptr.add(batch - lanes - off));
                let cost = E::mismatch_cost_epi32(va, vb, one);

                let res = E::min3_epi32(
                    E::add_epi32(left, one),
                    E::add_epi32(top, one),
                    E::add_epi32(diag, cost),
                );
                E::storeu_epi32(cur.as_mut_ptr().add(i + off), res);
            }
            i += batch;
        }

        for i in i..=max_i {
            let j = k - i;
            let cost = (a[tile.row_offset + i - 1] != b[tile.col_offset + j - 1]) as i32;
            cur[i] = edit_cell(prev[i - 1], prev[i], prev2[i - 1], cost);
        }
    }

    // Bottom edge (height, j) sits on line height + j; right edge (i, width) on line i + width
    let write_slot = tile.write_slot();
    for j in 1..=width {
        boundary.write_row(write_slot, tile.col_offset + j, buf[idx(height + j, height)]);
    }
    for i in 1..=height {
        boundary.write_col(tile.row_offset + i, buf[idx(i + width, i)]);
    }

    buf[idx(height + width, height)]
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn diagonal_tile_avx2(
    tile: &Tile,
    seqs: &SequencePair<'_>,
    boundary: &BoundaryState,
    buf: &mut [i32],
) -> i32 {
    use crate::core::compute::simd_abstraction::SimdEngine256;
    diagonal_tile::<SimdEngine256>(tile, seqs, boundary, buf)
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse4.1")]
unsafe fn diagonal_tile_sse41(
    tile: &Tile,
    seqs: &SequencePair<'_>,
    boundary: &BoundaryState,
    buf: &mut [i32],
) -> i32 {
    use crate::core::compute::simd_abstraction::SimdEngine128;
    diagonal_tile::<SimdEngine128>(tile, seqs, boundary, buf)
}

#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
unsafe fn diagonal_tile_neon(
    tile: &Tile,
    seqs: &SequencePair<'_>,
    boundary: &BoundaryState,
    buf: &mut [i32],
) -> i32 {
    use crate::core::compute::simd_abstraction::SimdEngine128;
    diagonal_tile::<SimdEngine128>(tile, seqs, boundary, buf)
}

/// Compute `tile` with the anti-diagonal kernel on the given engine.
///
/// `buf` must hold at least `diagonal_scratch_len(tile.height, tile.width)`
/// cells. Returns the bottom-right cell.
///
/// # Panics
/// If `engine` is not supported by the running CPU, or `buf` is too small.
pub fn process_tile_simd(
    engine: SimdEngineType,
    tile: &Tile,
    seqs: &SequencePair<'_>,
    boundary: &BoundaryState,
    buf: &mut [i32],
) -> i32 {
    assert!(
        engine.is_supported(),
        "SIMD engine {:?} not supported on this CPU",
        engine
    );
    // Safety: engine support was checked above; diagonal_tile checks buf length
    unsafe {
        match engine {
            SimdEngineType::Portable => {
                diagonal_tile::<SimdEnginePortable>(tile, seqs, boundary, buf)
            }
            #[cfg(target_arch = "x86_64")]
            SimdEngineType::Engine128 => diagonal_tile_sse41(tile, seqs, boundary, buf),
            #[cfg(target_arch = "aarch64")]
            SimdEngineType::Engine128 => diagonal_tile_neon(tile, seqs, boundary, buf),
            #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
            SimdEngineType::Engine128 => {
                unreachable!("Engine128 is never supported on this architecture")
            }
            #[cfg(target_arch = "x86_64")]
            SimdEngineType::Engine256 => diagonal_tile_avx2(tile, seqs, boundary, buf),
        }
    }
}
