// tests/workspace_alloc.rs
// Worker scratch is reused across tiles of the same shape, and allocation
// failures surface as errors rather than a wrong distance.

use ferrous_wavefront::EditDistanceError;
use ferrous_wavefront::core::distance::wavefront::{WorkerReport, collect_wave};
use ferrous_wavefront::core::distance::workspace::{TileScratch, diagonal_scratch_len};

#[test]
fn diagonal_buffer_reused_for_same_shape() {
    let mut scratch = TileScratch::new(0);
    let p0 = scratch.ensure_diagonals(512, 512).unwrap().as_ptr();
    let p1 = scratch.ensure_diagonals(512, 512).unwrap().as_ptr();
    assert_eq!(p0, p1, "diagonal buffer pointer changed between identical tiles");
    assert_eq!(scratch.allocated_cells(), diagonal_scratch_len(512, 512));
}

#[test]
fn row_buffers_reused_for_same_width() {
    let mut scratch = TileScratch::new(0);
    let (prev, cur) = scratch.ensure_rows(512).unwrap();
    let (p0, c0) = (prev.as_ptr(), cur.as_ptr());
    let (prev, cur) = scratch.ensure_rows(512).unwrap();
    assert_eq!(p0, prev.as_ptr());
    assert_eq!(c0, cur.as_ptr());
}

#[test]
fn scratch_failure_aborts_the_wave() {
    let mut failing = TileScratch::new(2);
    let err = failing.ensure_diagonals(usize::MAX / 4, 16).unwrap_err();

    let reports = vec![
        Ok(WorkerReport { worker: 0, tiles: 1 }),
        Ok(WorkerReport { worker: 1, tiles: 1 }),
        Err(err),
    ];
    match collect_wave(7, reports) {
        Err(EditDistanceError::ScratchAlloc { worker, .. }) => assert_eq!(worker, 2),
        other => panic!("expected ScratchAlloc from worker 2, got {:?}", other),
    }
}
