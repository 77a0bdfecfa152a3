//! Wavefront driver: runs the tile grid wave by wave on a rayon pool.
//!
//! Per computation:
//! 1. Init: validate the pair, allocate the boundary state, create one empty
//!    scratch per worker.
//! 2. Dispatch: for each wave every worker runs its round-robin share of the
//!    wave's tiles.
//! 3. Barrier: the pool join at the end of each wave. All boundary writes of
//!    wave `w` are visible to every reader in wave `w + 1`.
//! 4. Finalize: read `D[n][n]` from the last block row's slot.
//!
//! A worker that fails (scratch allocation) reports an error; the driver
//! stops after that wave and returns the first error instead of a distance.

use rayon::prelude::*;

use crate::core::compute::{SimdEngineType, detect_optimal_simd_engine};
use crate::distance_opt::{DistanceOpt, KernelChoice};
use crate::error::Result;
use crate::sequence::SequencePair;

use super::boundary::BoundaryState;
use super::scalar_kernel::process_tile_scalar;
use super::scheduler::WaveSchedule;
use super::simd_kernel::process_tile_simd;
use super::workspace::TileScratch;

/// Kernel resolved for a computation; the SIMD engine is fixed up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKernel {
    Scalar,
    Simd(SimdEngineType),
}

impl TileKernel {
    /// Resolve the configured kernel, detecting the engine if none was forced.
    pub fn from_opt(opt: &DistanceOpt) -> Self {
        match opt.kernel {
            KernelChoice::Scalar => TileKernel::Scalar,
            KernelChoice::Simd => {
                TileKernel::Simd(opt.engine.unwrap_or_else(detect_optimal_simd_engine))
            }
        }
    }
}

impl std::fmt::Display for TileKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileKernel::Scalar => f.write_str("scalar"),
            TileKernel::Simd(engine) => write!(f, "simd ({})", engine),
        }
    }
}

/// Everything a worker needs to run its share of one wave.
pub struct WaveTask<'a> {
    pub wave: usize,
    pub n_threads: usize,
    pub schedule: &'a WaveSchedule,
    pub seqs: &'a SequencePair<'a>,
    pub boundary: &'a BoundaryState,
    pub kernel: TileKernel,
}

/// What one worker did during one wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker: usize,
    pub tiles: usize,
}

/// Run every tile of `task.wave` assigned to `scratch.worker()`.
pub fn run_worker(task: &WaveTask<'_>, scratch: &mut TileScratch) -> Result<WorkerReport> {
    let worker = scratch.worker();
    let mut tiles = 0;

    for tile in task
        .schedule
        .tiles_for_worker(task.wave, worker, task.n_threads)
    {
        match task.kernel {
            TileKernel::Scalar => {
                let (prev, cur) = scratch.ensure_rows(tile.width)?;
                process_tile_scalar(&tile, task.seqs, task.boundary, prev, cur);
            }
            TileKernel::Simd(engine) => {
                let buf = scratch.ensure_diagonals(tile.height, tile.width)?;
                process_tile_simd(engine, &tile, task.seqs, task.boundary, buf);
            }
        }
        tiles += 1;
    }

    Ok(WorkerReport { worker, tiles })
}

/// Fold the per-worker results of one wave.
///
/// Returns the number of tiles computed, or the first worker error.
pub fn collect_wave(wave: usize, reports: Vec<Result<WorkerReport>>) -> Result<usize> {
    let mut tiles = 0;
    for report in reports {
        match report {
            Ok(report) => tiles += report.tiles,
            Err(e) => {
                log::error!("Wave {}: worker failed, aborting: {}", wave, e);
                return Err(e);
            }
        }
    }
    Ok(tiles)
}

/// Reusable wavefront edit-distance engine.
///
/// Holds a persistent worker pool sized by `DistanceOpt::n_threads`, so
/// repeated calls do not respawn threads.
pub struct WavefrontAligner {
    opt: DistanceOpt,
    kernel: TileKernel,
    pool: rayon::ThreadPool,
}

impl WavefrontAligner {
    pub fn new(opt: DistanceOpt) -> Result<Self> {
        opt.validate()?;
        let kernel = TileKernel::from_opt(&opt);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(opt.n_threads)
            .thread_name(|i| format!("wavefront-{}", i))
            .build()?;

        log::debug!(
            "Wavefront aligner: {} workers, block size {}, kernel {}",
            opt.n_threads,
            opt.block_size,
            kernel
        );

        Ok(Self { opt, kernel, pool })
    }

    #[inline]
    pub fn options(&self) -> &DistanceOpt {
        &self.opt
    }

    #[inline]
    pub fn kernel(&self) -> TileKernel {
        self.kernel
    }

    /// Levenshtein distance between two equal-length sequences.
    pub fn distance(&self, a: &[u8], b: &[u8]) -> Result<u32> {
        let seqs = SequencePair::new(a, b)?;
        if seqs.is_empty() {
            return Ok(0);
        }

        let n_threads = self.opt.n_threads;
        let schedule = WaveSchedule::new(seqs.len(), self.opt.block_size);
        let boundary = BoundaryState::try_new(seqs.len())?;
        let mut scratches: Vec<TileScratch> = (0..n_threads).map(TileScratch::new).collect();

        log::debug!(
            "Computing distance: n={}, {}x{} tiles, {} waves",
            seqs.len(),
            schedule.num_blocks(),
            schedule.num_blocks(),
            schedule.num_waves()
        );

        let mut total_tiles = 0usize;
        for wave in 0..schedule.num_waves() {
            debug_assert!(
                schedule.check_wave(wave).is_ok(),
                "{:?}",
                schedule.check_wave(wave)
            );

            let task = WaveTask {
                wave,
                n_threads,
                schedule: &schedule,
                seqs: &seqs,
                boundary: &boundary,
                kernel: self.kernel,
            };

            let reports: Vec<Result<WorkerReport>> = self.pool.install(|| {
                scratches
                    .par_iter_mut()
                    .map(|scratch| run_worker(&task, scratch))
                    .collect()
            });

            let tiles = collect_wave(wave, reports)?;
            log::trace!("Wave {}: {} tiles", wave, tiles);
            total_tiles += tiles;
        }

        debug_assert_eq!(total_tiles, schedule.num_blocks() * schedule.num_blocks());

        let distance = boundary.final_distance(schedule.num_blocks());
        debug_assert!(distance >= 0);
        Ok(distance as u32)
    }
}

/// Wavefront distance with the SIMD kernel and `n_threads` workers.
///
/// Builds a fresh pool per call; use `WavefrontAligner` for repeated calls.
pub fn compute_edit_distance(a: &[u8], b: &[u8], n_threads: usize) -> Result<u32> {
    let opt = DistanceOpt::with_threads(n_threads);
    opt.validate()?;
    let seqs = SequencePair::new(a, b)?;
    if seqs.is_empty() {
        return Ok(0);
    }
    WavefrontAligner::new(opt)?.distance(a, b)
}

/// Wavefront distance with the SIMD kernel on a specific engine.
pub fn simd_edit_distance(
    a: &[u8],
    b: &[u8],
    n_threads: usize,
    engine: SimdEngineType,
) -> Result<u32> {
    let opt = DistanceOpt::with_threads(n_threads)
        .kernel(KernelChoice::Simd)
        .engine(engine);
    WavefrontAligner::new(opt)?.distance(a, b)
}

/// Wavefront distance with the row-by-row kernel.
pub fn parallel_edit_distance(a: &[u8], b: &[u8], n_threads: usize) -> Result<u32> {
    let opt = DistanceOpt::with_threads(n_threads).kernel(KernelChoice::Scalar);
    WavefrontAligner::new(opt)?.distance(a, b)
}
