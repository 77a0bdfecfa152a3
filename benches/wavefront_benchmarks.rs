use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ferrous_wavefront::{
    DistanceOpt, KernelChoice, SimdEngineType, WavefrontAligner, naive_edit_distance,
    random_sequence,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_pair(len: usize, seed: u64) -> (Vec<u8>, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = random_sequence(&mut rng, len, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    let b = random_sequence(&mut rng, len, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    (a, b)
}

fn available_engines() -> Vec<SimdEngineType> {
    let mut engines = vec![SimdEngineType::Portable];
    if SimdEngineType::Engine128.is_supported() {
        engines.push(SimdEngineType::Engine128);
    }
    #[cfg(target_arch = "x86_64")]
    if SimdEngineType::Engine256.is_supported() {
        engines.push(SimdEngineType::Engine256);
    }
    engines
}

fn bench_kernels(c: &mut Criterion) {
    let len = 4096;
    let (a, b) = random_pair(len, 1);
    let mut group = c.benchmark_group("kernel_comparison");
    group.throughput(Throughput::Elements((len * len) as u64));
    group.sample_size(20);

    group.bench_function("naive", |bench| {
        bench.iter(|| naive_edit_distance(black_box(&a), black_box(&b)).unwrap())
    });

    let scalar =
        WavefrontAligner::new(DistanceOpt::with_threads(1).kernel(KernelChoice::Scalar)).unwrap();
    group.bench_function("wavefront_scalar_1t", |bench| {
        bench.iter(|| scalar.distance(black_box(&a), black_box(&b)).unwrap())
    });

    for engine in available_engines() {
        let aligner = WavefrontAligner::new(DistanceOpt::with_threads(1).engine(engine)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("wavefront_simd_1t", engine),
            &engine,
            |bench, _| bench.iter(|| aligner.distance(black_box(&a), black_box(&b)).unwrap()),
        );
    }

    group.finish();
}

fn bench_thread_scaling(c: &mut Criterion) {
    let len = 16_384;
    let (a, b) = random_pair(len, 2);
    let mut group = c.benchmark_group("thread_scaling");
    group.throughput(Throughput::Elements((len * len) as u64));
    group.sample_size(10);

    for threads in [1usize, 2, 4, 8] {
        let aligner = WavefrontAligner::new(DistanceOpt::with_threads(threads)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |bench, _| {
            bench.iter(|| aligner.distance(black_box(&a), black_box(&b)).unwrap())
        });
    }

    group.finish();
}

fn bench_block_size(c: &mut Criterion) {
    let len = 8192;
    let (a, b) = random_pair(len, 3);
    let mut group = c.benchmark_group("block_size");
    group.throughput(Throughput::Elements((len * len) as u64));
    group.sample_size(10);

    for block in [128usize, 256, 512, 1024] {
        let aligner =
            WavefrontAligner::new(DistanceOpt::with_threads(4).block_size(block)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(block), &block, |bench, _| {
            bench.iter(|| aligner.distance(black_box(&a), black_box(&b)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernels, bench_thread_scaling, bench_block_size);
criterion_main!(benches);
