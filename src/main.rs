use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

use ferrous_wavefront::core::compute::simd_engine_description;
use ferrous_wavefront::defaults;
use ferrous_wavefront::{
    DistanceOpt, Equalize, KernelChoice, SimdEngineType, WavefrontAligner, default_thread_count,
    equalize_lengths, naive_edit_distance, random_sequence, tiled_edit_distance,
};

#[derive(Parser)]
#[command(name = "ferrous-wavefront")]
#[command(about = "Parallel blocked wavefront Levenshtein distance for equal-length sequences", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two random A-Z sequences
    Random {
        /// Length of each sequence
        #[arg(short = 'n', long, value_name = "INT", default_value_t = defaults::RANDOM_SEQUENCE_LEN)]
        length: usize,

        /// RNG seed (default: from system entropy)
        #[arg(short = 's', long, value_name = "INT")]
        seed: Option<u64>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Compare two sequences given on the command line
    Pair {
        /// First sequence
        #[arg(value_name = "A")]
        a: String,

        /// Second sequence; the longer of the two is truncated
        #[arg(value_name = "B")]
        b: String,

        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Number of worker threads (default: logical CPUs, at most 16)
    #[arg(short = 't', long, value_name = "INT")]
    threads: Option<usize>,

    /// Tile kernel for the wavefront run: scalar or simd
    #[arg(short = 'k', long, value_name = "KERNEL", default_value = "simd")]
    kernel: KernelChoice,

    /// Force a SIMD engine: portable, sse, neon or avx2 (default: detect)
    #[arg(short = 'e', long, value_name = "ENGINE")]
    engine: Option<SimdEngineType>,

    /// Tile edge length
    #[arg(short = 'b', long, value_name = "INT", default_value_t = defaults::BLOCK_SIZE)]
    block_size: usize,

    /// Skip the O(n^2) sequential references
    #[arg(long)]
    skip_reference: bool,

    /// Verbose level: 1=error, 2=warning, 3=message, 4=debug, 5+=trace
    #[arg(short = 'v', long, value_name = "INT", default_value_t = defaults::VERBOSITY)]
    verbosity: i32,
}

/// One timed implementation run.
struct Timed {
    name: &'static str,
    distance: u32,
    seconds: f64,
}

fn timed(name: &'static str, f: impl FnOnce() -> ferrous_wavefront::Result<u32>) -> Result<Timed> {
    log::info!("Running {}...", name);
    let start = Instant::now();
    let distance = f().with_context(|| format!("{} failed", name))?;
    Ok(Timed {
        name,
        distance,
        seconds: start.elapsed().as_secs_f64(),
    })
}

fn init_logger(verbosity: i32) {
    let log_level = match verbosity {
        v if v <= 1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(a: &[u8], b: &[u8], args: &RunArgs) -> Result<()> {
    let n_threads = args.threads.unwrap_or_else(default_thread_count);
    if n_threads < 1 {
        bail!("--threads must be at least 1");
    }
    log::info!(
        "Detected {} logical processor(s). Using {} thread(s)",
        num_cpus::get(),
        n_threads
    );

    let mut opt = DistanceOpt::with_threads(n_threads)
        .kernel(args.kernel)
        .block_size(args.block_size);
    if let Some(engine) = args.engine {
        opt = opt.engine(engine);
    }

    let simd = WavefrontAligner::new(opt.clone()).context("Failed to set up wavefront run")?;
    let scalar = WavefrontAligner::new(opt.clone().kernel(KernelChoice::Scalar))
        .context("Failed to set up scalar wavefront run")?;
    if let ferrous_wavefront::core::distance::TileKernel::Simd(engine) = simd.kernel() {
        log::info!("Using SIMD engine: {}", simd_engine_description(engine));
    }

    let mut results = Vec::new();
    if !args.skip_reference {
        results.push(timed("naive", || naive_edit_distance(a, b))?);
        results.push(timed("tiled", || tiled_edit_distance(a, b, args.block_size))?);
    }
    results.push(timed("parallel", || scalar.distance(a, b))?);
    results.push(timed("wavefront", || simd.distance(a, b))?);

    println!();
    for r in &results {
        println!("{:>10} distance: {}", r.name, r.distance);
    }
    let first = results[0].distance;
    let agree = results.iter().all(|r| r.distance == first);
    if agree {
        println!("Results are the same!");
    } else {
        println!("Results are not the same!");
    }

    println!();
    for r in &results {
        println!("{:>10} runtime: {:.3} s", r.name, r.seconds);
    }

    if !agree {
        bail!("implementations disagree");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Random { length, seed, run: args } => {
            init_logger(args.verbosity);

            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let a = random_sequence(&mut rng, length, defaults::RANDOM_ALPHABET);
            let b = random_sequence(&mut rng, length, defaults::RANDOM_ALPHABET);
            log::info!("Random sequences (A-Z) of length {} generated", length);

            run(&a, &b, &args)
        }

        Commands::Pair { a, b, run: args } => {
            init_logger(args.verbosity);

            if a.len() != b.len() {
                log::warn!(
                    "Sequences must be of equal length ({} vs {}); truncating the longer one",
                    a.len(),
                    b.len()
                );
            }
            let (a, b) = equalize_lengths(a.as_bytes(), b.as_bytes(), Equalize::Truncate);
            log::info!("Custom sequences loaded (length: {})", a.len());

            run(&a, &b, &args)
        }
    }
}
