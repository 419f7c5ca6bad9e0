//! Slice-level operations checked against the scalar reference loops.

use lanewise::prelude::*;
use lanewise::simd::slice::{BULK_LANES, PARALLEL_SIZE_THRESHOLD};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_f32(rng: &mut StdRng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.random_range(-10.0..10.0)).collect()
}

fn random_i64(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(-1000..1000)).collect()
}

fn assert_close(a: f32, b: f32, tolerance: f32) {
    let scale = a.abs().max(b.abs()).max(1.0);
    assert!(
        (a - b).abs() <= tolerance * scale,
        "{} and {} differ by more than {}",
        a,
        b,
        tolerance * scale
    );
}

#[test]
fn test_elementwise_ops_match_scalar_for_awkward_lengths() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in [0, 1, BULK_LANES - 1, BULK_LANES, BULK_LANES + 1, 1000, 1027] {
        let a = random_f32(&mut rng, len);
        let b = random_f32(&mut rng, len);

        assert_eq!(a.simd_add(&b).unwrap(), a.scalar_add(&b).unwrap(), "add, len {}", len);
        assert_eq!(a.simd_sub(&b).unwrap(), a.scalar_sub(&b).unwrap(), "sub, len {}", len);
        assert_eq!(a.simd_mul(&b).unwrap(), a.scalar_mul(&b).unwrap(), "mul, len {}", len);
    }
}

#[test]
fn test_parallel_ops_match_sequential_above_threshold() {
    let mut rng = StdRng::seed_from_u64(7);
    let len = PARALLEL_SIZE_THRESHOLD * 2 + 13;
    let a = random_i64(&mut rng, len);
    let b = random_i64(&mut rng, len);

    assert_eq!(a.par_simd_add(&b).unwrap(), a.scalar_add(&b).unwrap());
    assert_eq!(a.par_simd_sub(&b).unwrap(), a.scalar_sub(&b).unwrap());
    assert_eq!(a.par_simd_mul(&b).unwrap(), a.scalar_mul(&b).unwrap());
    assert_eq!(a.par_simd_sum(), a.scalar_sum());
    assert_eq!(a.par_simd_dot(&b).unwrap(), a.simd_dot(&b).unwrap());
}

#[test]
fn test_integer_sums_are_exact() {
    let a: Vec<u32> = (1..=1001).collect();
    assert_eq!(a.simd_sum(), 501_501);
    assert_eq!(a.par_simd_sum(), 501_501);

    let b = vec![2u32; a.len()];
    assert_eq!(a.simd_dot(&b).unwrap(), 1_003_002);
}

#[test]
fn test_float_reductions_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(1234);
    let a = random_f32(&mut rng, 4099);
    let b = random_f32(&mut rng, 4099);

    assert_close(a.simd_sum(), a.scalar_sum(), 1e-4);

    let reference: f32 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
    assert_close(a.simd_dot(&b).unwrap(), reference, 1e-4);
}

#[test]
fn test_length_mismatch_is_reported() {
    let a = vec![1.0f64; 10];
    let b = vec![1.0f64; 9];

    let expected = Err(SimdError::LengthMismatch { left: 10, right: 9 });
    assert_eq!(a.simd_add(&b), expected);
    assert_eq!(a.par_simd_mul(&b), expected);
    assert_eq!(a.scalar_sub(&b), expected);
    assert_eq!(
        a.simd_dot(&b),
        Err(SimdError::LengthMismatch { left: 10, right: 9 })
    );
}

#[test]
fn test_empty_slices() {
    let empty: [i16; 0] = [];
    assert_eq!(empty.simd_add(&empty).unwrap(), Vec::<i16>::new());
    assert_eq!(empty.simd_sum(), 0);
    assert_eq!(empty.simd_dot(&empty).unwrap(), 0);
}
