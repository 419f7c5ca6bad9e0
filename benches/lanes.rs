//! Lane Engine Benchmarks
//!
//! Compares the slice operations built on emulated vectors against a plain scalar
//! loop and ndarray, and measures single-vector reductions at several widths.
//!
//! # Benchmark Categories
//!
//! ## 1. **Element-wise addition**
//! - Scalar reference loop (baseline)
//! - Vector blocks with masked tail
//! - Rayon-parallel vector blocks (large sizes only)
//! - ndarray reference
//!
//! ## 2. **Dot product**
//! - Vector blocks with fused multiply-add against ndarray `dot`
//!
//! ## 3. **Horizontal reductions**
//! - `hadd`, `hmax` and masked `hadd` on 4, 8 and 16 lane vectors

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanewise::prelude::*;
use lanewise::simd::slice::PARALLEL_SIZE_THRESHOLD;

// ================================================================================================
// BENCHMARK CONFIGURATION
// ================================================================================================

/// Slice lengths from L1-resident to main-memory bound (f32 = 4 bytes).
const VECTOR_SIZES: &[usize] = &[
    1_024,     // 4 KiB
    16_384,    // 64 KiB
    262_144,   // 1 MiB
    4_194_304, // 16 MiB
];

// ================================================================================================
// TEST DATA GENERATION
// ================================================================================================

/// Reproducible inputs in [0, 1).
fn generate_test_data(len: usize) -> (Vec<f32>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(42);

    let a: Vec<f32> = (0..len).map(|_| rng.random::<f32>()).collect();
    let b: Vec<f32> = (0..len).map(|_| rng.random::<f32>()).collect();

    (a, b)
}

fn format_size(elements: usize) -> String {
    let bytes = elements * std::mem::size_of::<f32>();

    if bytes >= 1_048_576 {
        format!("{:.1}_MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1}_KiB", bytes as f64 / 1024.0)
    } else {
        format!("{}_B", bytes)
    }
}

// ================================================================================================
// BENCHMARK IMPLEMENTATIONS
// ================================================================================================

fn benchmark_addition(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Addition_{}", format_size(size)));
        group.throughput(Throughput::Bytes(
            (size * std::mem::size_of::<f32>() * 2) as u64,
        ));

        let (a_vec, b_vec) = generate_test_data(size);
        let a_slice = a_vec.as_slice();
        let b_slice = b_vec.as_slice();

        group.bench_with_input(
            BenchmarkId::new("scalar", size),
            &(a_slice, b_slice),
            |b, (a, b_data)| b.iter(|| black_box(a.scalar_add(black_box(*b_data)))),
        );

        group.bench_with_input(
            BenchmarkId::new("simd", size),
            &(a_slice, b_slice),
            |b, (a, b_data)| b.iter(|| black_box(a.simd_add(black_box(*b_data)))),
        );

        if size >= PARALLEL_SIZE_THRESHOLD {
            group.bench_with_input(
                BenchmarkId::new("parallel_simd", size),
                &(a_slice, b_slice),
                |b, (a, b_data)| b.iter(|| black_box(a.par_simd_add(black_box(*b_data)))),
            );
        }

        let a_ndarray = Array1::from_vec(a_vec.clone());
        let b_ndarray = Array1::from_vec(b_vec.clone());
        group.bench_with_input(
            BenchmarkId::new("ndarray", size),
            &(&a_ndarray, &b_ndarray),
            |b, (a, b_data)| b.iter(|| black_box(*a + *b_data)),
        );

        group.finish();
    }
}

fn benchmark_dot(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Dot_{}", format_size(size)));
        group.throughput(Throughput::Elements(size as u64));

        let (a_vec, b_vec) = generate_test_data(size);

        group.bench_function(BenchmarkId::new("simd", size), |b| {
            b.iter(|| black_box(a_vec.simd_dot(black_box(&b_vec))))
        });

        if size >= PARALLEL_SIZE_THRESHOLD {
            group.bench_function(BenchmarkId::new("parallel_simd", size), |b| {
                b.iter(|| black_box(a_vec.par_simd_dot(black_box(&b_vec))))
            });
        }

        let a_ndarray = Array1::from_vec(a_vec.clone());
        let b_ndarray = Array1::from_vec(b_vec.clone());
        group.bench_function(BenchmarkId::new("ndarray", size), |b| {
            b.iter(|| black_box(a_ndarray.dot(black_box(&b_ndarray))))
        });

        group.finish();
    }
}

macro_rules! bench_reductions {
    ($group:expr, $ty:ty, $lanes:literal) => {{
        let v = <$ty>::from_fn(|i| (i as f32 * 0.37).sin());
        let m = Mask::<$lanes>::from_slice(&[true, false].repeat($lanes / 2))
            .unwrap_or_else(|_| Mask::splat(true));

        $group.bench_function(BenchmarkId::new("hadd", $lanes), |b| {
            b.iter(|| black_box(black_box(v).hadd()))
        });
        $group.bench_function(BenchmarkId::new("hmax", $lanes), |b| {
            b.iter(|| black_box(black_box(v).hmax()))
        });
        $group.bench_function(BenchmarkId::new("hadd_masked", $lanes), |b| {
            b.iter(|| black_box(black_box(v).hadd_masked(black_box(&m))))
        });
    }};
}

fn benchmark_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reductions");
    bench_reductions!(group, F32x4, 4);
    bench_reductions!(group, F32x8, 8);
    bench_reductions!(group, F32x16, 16);
    group.finish();
}

criterion_group!(
    benches,
    benchmark_addition,
    benchmark_dot,
    benchmark_reductions
);
criterion_main!(benches);
