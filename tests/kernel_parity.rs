// tests/kernel_parity.rs
// Every engine and kernel must produce the same distance as the naive reference,
// including tile shapes that leave a scalar remainder on every diagonal.

use ferrous_wavefront::{
    DistanceOpt, KernelChoice, SimdEngineType, WavefrontAligner, naive_edit_distance,
    random_sequence, simd_edit_distance,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

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

#[test]
fn engines_match_naive_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0xED17);
    for round in 0..6 {
        let len = rng.gen_range(1..=900);
        let a = random_sequence(&mut rng, len, b"ACGT");
        let b = random_sequence(&mut rng, len, b"ACGT");
        let expected = naive_edit_distance(&a, &b).unwrap();

        for engine in available_engines() {
            let got = simd_edit_distance(&a, &b, 3, engine).unwrap();
            assert_eq!(got, expected, "round {} len {} engine {:?}", round, len, engine);
        }
    }
}

#[test]
fn odd_block_sizes_match_naive() {
    // Block sizes below, at and just past one and two vector batches
    let mut rng = StdRng::seed_from_u64(0xB10C);
    let a = random_sequence(&mut rng, 301, b"AB");
    let b = random_sequence(&mut rng, 301, b"AB");
    let expected = naive_edit_distance(&a, &b).unwrap();

    for engine in available_engines() {
        for block in [1, 3, 7, 8, 9, 15, 16, 17, 33, 100] {
            for kernel in [KernelChoice::Scalar, KernelChoice::Simd] {
                let opt = DistanceOpt::with_threads(2)
                    .block_size(block)
                    .kernel(kernel)
                    .engine(engine);
                let aligner = WavefrontAligner::new(opt).unwrap();
                assert_eq!(
                    aligner.distance(&a, &b).unwrap(),
                    expected,
                    "block {} kernel {:?} engine {:?}",
                    block,
                    kernel,
                    engine
                );
            }
        }
    }
}

#[test]
fn full_byte_range_symbols() {
    let mut rng = StdRng::seed_from_u64(0xFF);
    let a: Vec<u8> = (0..600).map(|_| rng.gen::<u8>()).collect();
    let mut b = a.clone();
    for _ in 0..40 {
        let i = rng.gen_range(0..b.len());
        b[i] = b[i].wrapping_add(128);
    }
    let expected = naive_edit_distance(&a, &b).unwrap();
    for engine in available_engines() {
        assert_eq!(simd_edit_distance(&a, &b, 2, engine).unwrap(), expected);
    }
}
