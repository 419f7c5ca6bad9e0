//! The `try_*` tier: every precondition failure comes back as a `SimdError`.

use lanewise::prelude::*;

#[test]
fn test_lane_access() {
    let mut v = U32x4::from_array([1, 2, 3, 4]);

    assert_eq!(v.try_extract(3), Ok(4));
    assert_eq!(
        v.try_extract(4),
        Err(SimdError::LaneOutOfRange { lane: 4, lanes: 4 })
    );

    v.try_insert(0, 10).unwrap();
    assert_eq!(v.extract(0), 10);
    assert!(v.try_insert(9, 0).is_err());
    assert_eq!(v.to_array(), [10, 2, 3, 4]);
}

#[test]
fn test_slice_loads_and_stores() {
    let data: Vec<f64> = (0..6).map(|i| i as f64).collect();

    let v = F64x4::try_from_slice(&data[2..]).unwrap();
    assert_eq!(v.to_array(), [2.0, 3.0, 4.0, 5.0]);
    assert_eq!(
        F64x4::try_from_slice(&data[3..]),
        Err(SimdError::SliceTooShort {
            required: 4,
            actual: 3
        })
    );

    let mut out = vec![0.0; 5];
    v.try_store_into(&mut out).unwrap();
    assert_eq!(out, vec![2.0, 3.0, 4.0, 5.0, 0.0]);
    assert!(v.try_store_into(&mut out[..2]).is_err());
}

#[test]
fn test_aligned_load_reports_misalignment() {
    let backing = vec![0u64; 8];
    let base = backing.as_ptr() as usize;
    let alignment = U64x2::ALIGNMENT;
    let skip = (alignment - base % alignment) % alignment / std::mem::size_of::<u64>();

    assert!(U64x2::try_load_aligned(&backing[skip..]).is_ok());

    match U64x2::try_load_aligned(&backing[skip + 1..]) {
        Err(SimdError::Misaligned { alignment: a, .. }) => assert_eq!(a, alignment),
        other => panic!("expected a misalignment error, got {:?}", other),
    }
}

#[test]
fn test_gather_scatter_bounds() {
    let table = [10i32, 20, 30, 40, 50];

    let v = I32x4::try_gather(&table, &[4usize, 0, 2, 2]).unwrap();
    assert_eq!(v.to_array(), [50, 10, 30, 30]);

    assert_eq!(
        I32x4::try_gather(&table, &[0u32, 1, 5, 2]),
        Err(SimdError::IndexOutOfBounds {
            lane: 2,
            index: 5,
            len: 5
        })
    );

    let mut out = [0i32; 5];
    let err = v.try_scatter(&mut out, &[0usize, 1, 2, 99]);
    assert!(err.is_err());
    assert_eq!(out, [0; 5]);
}

#[test]
fn test_masked_gather_scatter_only_checks_active_lanes() {
    let table = [1.0f32, 2.0, 3.0];
    let indices = U32x4::from_array([2, 100, 0, 100]);
    let m = Mask::new([true, false, true, false]);

    let v = F32x4::splat(-1.0)
        .try_gather_masked(&m, &table, &indices)
        .unwrap();
    assert_eq!(v.to_array(), [3.0, -1.0, 1.0, -1.0]);

    let mut out = [0.0f32; 3];
    v.try_scatter_masked(&m, &mut out, &indices).unwrap();
    assert_eq!(out, [1.0, 0.0, 3.0]);
}

#[test]
fn test_scatter_duplicate_index_keeps_highest_lane() {
    let v = U8x4::from_array([1, 2, 3, 4]);
    let mut out = [0u8; 2];
    v.try_scatter(&mut out, &[1usize, 0, 1, 0]).unwrap();
    assert_eq!(out, [4, 3]);
}

#[test]
fn test_checked_division() {
    let a = I32x4::from_array([10, -9, 8, 7]);
    let b = I32x4::from_array([2, 3, 0, 7]);

    assert_eq!(a.try_div(&b), Err(SimdError::DivisionByZero { lane: 2 }));

    let m = Mask::new([true, true, false, true]);
    assert_eq!(a.try_div_masked(&m, &b).unwrap().to_array(), [5, -3, 8, 1]);

    assert!(a.try_div_scalar(0).is_err());
    assert_eq!(a.try_div_scalar(-1).unwrap().to_array(), [-10, 9, -8, -7]);

    let none = Mask::splat(false);
    assert_eq!(a.try_div_scalar_masked(&none, 0), Ok(a));
    assert_eq!(
        a.try_div_scalar_masked(&Mask::new([false, true, true, false]), 0),
        Err(SimdError::DivisionByZero { lane: 1 })
    );
}

#[test]
fn test_swizzle_construction_is_checked() {
    assert!(Swizzle::<4>::new([0, 1, 2, 3]).is_ok());
    assert_eq!(
        Swizzle::<4>::new([0, 4, 2, 3]),
        Err(SimdError::InvalidSwizzle {
            lane: 1,
            index: 4,
            lanes: 4
        })
    );
    assert!(Swizzle::<8>::broadcast(8).is_err());

    let rotate = Swizzle::<4>::rotate_left(1);
    let v = I32x4::from_array([1, 2, 3, 4]);
    assert_eq!(v.swizzle(&rotate).to_array(), [2, 3, 4, 1]);
}

#[test]
fn test_errors_display() {
    let err = SimdError::LengthMismatch { left: 3, right: 4 };
    assert!(err.to_string().contains('3'));
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(!boxed.to_string().is_empty());
}
