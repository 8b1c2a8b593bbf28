//! Benchmarks for Lights Out board generation.
//!
//! This benchmark suite measures the performance of board generation using
//! `BoardGenerator` at the default 5x5 size and at a larger 25x25 size.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple
//! cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af6`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9`
//! - **`seed_2`**: `1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use lightsout_generator::{BoardGenerator, BoardSeed};

const SEEDS: [&str; 3] = ["c1d44bd6afaf8af6", "a2b3c4d5e6f7a8b9", "1234567890abcdef"];

fn bench_generator_default(c: &mut Criterion) {
    let generator = BoardGenerator::default();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = BoardSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_default", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_large(c: &mut Criterion) {
    let generator = BoardGenerator::new(25, 25, 0.25).unwrap();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = BoardSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_large", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets = bench_generator_default, bench_generator_large
);
criterion_main!(benches);
