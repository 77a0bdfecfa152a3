// tests/scheduler_invariants.rs
// Wave structure: full coverage, single ownership, no intra-wave conflicts.

use std::collections::HashSet;

use ferrous_wavefront::core::distance::WaveSchedule;

#[test]
fn every_tile_runs_exactly_once() {
    for (len, block, threads) in [(2048, 512, 4), (1000, 64, 3), (97, 5, 8), (1, 512, 2)] {
        let schedule = WaveSchedule::new(len, block);
        let n = schedule.num_blocks();
        let mut seen = HashSet::new();

        for wave in 0..schedule.num_waves() {
            for worker in 0..threads {
                for tile in schedule.tiles_for_worker(wave, worker, threads) {
                    assert_eq!(tile.block_row + tile.block_col, wave);
                    assert!(
                        seen.insert((tile.block_row, tile.block_col)),
                        "tile ({}, {}) scheduled twice",
                        tile.block_row,
                        tile.block_col
                    );
                }
            }
        }
        assert_eq!(seen.len(), n * n, "len {} block {}", len, block);
    }
}

#[test]
fn tiles_cover_the_grid_without_overlap() {
    let schedule = WaveSchedule::new(1100, 512);
    let mut covered = 0usize;
    for wave in 0..schedule.num_waves() {
        for tile in schedule.tiles_in_wave(wave) {
            covered += tile.height * tile.width;
        }
    }
    assert_eq!(covered, 1100 * 1100);
}

#[test]
fn waves_are_conflict_free() {
    for (len, block) in [(2048, 512), (5000, 64), (333, 10)] {
        let schedule = WaveSchedule::new(len, block);
        for wave in 0..schedule.num_waves() {
            if let Err(msg) = schedule.check_wave(wave) {
                panic!("len {} block {}: {}", len, block, msg);
            }
        }
    }
}

#[test]
fn round_robin_balances_within_one_tile() {
    let schedule = WaveSchedule::new(5000, 64);
    let threads = 6;
    for wave in 0..schedule.num_waves() {
        let counts: Vec<usize> = (0..threads)
            .map(|w| schedule.tiles_for_worker(wave, w, threads).count())
            .collect();
        let max = *counts.iter().max().unwrap();
        let min = *counts.iter().min().unwrap();
        assert!(max - min <= 1, "wave {}: {:?}", wave, counts);
    }
}
