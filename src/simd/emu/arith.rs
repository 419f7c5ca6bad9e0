//! Arithmetic families of the emulated vector.

use crate::simd::element::{FloatElement, IntElement, SignedElement, SimdElement};
use crate::simd::traits::{SimdArith, SimdFloatMath, SimdFused, SimdNeg, SimdSaturating};
use crate::simd::Mask;

use super::Vector;

impl<T: SimdElement, const N: usize> SimdArith<N> for Vector<T, N> {
    #[inline(always)]
    fn add(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, T::lane_add)
    }

    #[inline(always)]
    fn sub(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, T::lane_sub)
    }

    #[inline(always)]
    fn mul(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, T::lane_mul)
    }

    #[inline(always)]
    fn div(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, T::lane_div)
    }

    // Inactive lanes are never divided, so a zero divisor there is harmless.
    #[inline(always)]
    fn div_masked(&self, mask: &Mask<N>, rhs: &Self) -> Self {
        Self::from_fn(|i| {
            if mask.get(i) {
                self.lanes[i].lane_div(rhs.lanes[i])
            } else {
                self.lanes[i]
            }
        })
    }
}

impl<T: SignedElement, const N: usize> SimdNeg<N> for Vector<T, N> {}

impl<T: IntElement, const N: usize> SimdSaturating<N> for Vector<T, N> {
    #[inline(always)]
    fn sadd(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, T::lane_sadd)
    }

    #[inline(always)]
    fn ssub(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, T::lane_ssub)
    }
}

impl<T: SimdElement, const N: usize> SimdFused<N> for Vector<T, N> {}

impl<T: FloatElement, const N: usize> SimdFloatMath<N> for Vector<T, N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::traits::SimdVector;

    mod arith_tests {
        use super::*;

        #[test]
        fn test_lanewise_arithmetic() {
            let a = Vector::<i32, 4>::from_array([10, 20, 30, 40]);
            let b = Vector::<i32, 4>::from_array([1, 2, 3, 4]);

            assert_eq!(a.add(&b).to_array(), [11, 22, 33, 44]);
            assert_eq!(a.sub(&b).to_array(), [9, 18, 27, 36]);
            assert_eq!(a.mul(&b).to_array(), [10, 40, 90, 160]);
            assert_eq!(a.div(&b).to_array(), [10, 10, 10, 10]);
        }

        #[test]
        fn test_integer_lanes_wrap() {
            let v = Vector::<u8, 4>::splat(250);
            assert_eq!(v.add_scalar(10).to_array(), [4; 4]);
        }

        #[test]
        fn test_masked_variants_keep_inactive_lanes() {
            let a = Vector::<f32, 4>::from_array([1.0, 2.0, 3.0, 4.0]);
            let mask = Mask::new([true, false, false, true]);

            assert_eq!(a.add_scalar_masked(&mask, 0.5).to_array(), [1.5, 2.0, 3.0, 4.5]);
            assert_eq!(a.mul_masked(&mask, &a).to_array(), [1.0, 2.0, 3.0, 16.0]);
        }

        #[test]
        fn test_assign_masked() {
            let mut a = Vector::<i16, 4>::splat(5);
            a.sub_assign_masked(&Mask::first_n(1), &Vector::splat(5));
            assert_eq!(a.to_array(), [0, 5, 5, 5]);
        }

        #[test]
        fn test_masked_division_skips_zero_divisors() {
            let a = Vector::<i32, 4>::from_array([8, 9, 10, 11]);
            let b = Vector::<i32, 4>::from_array([2, 0, 5, 0]);
            let mask = Mask::new([true, false, true, false]);

            assert_eq!(a.div_masked(&mask, &b).to_array(), [4, 9, 2, 11]);
        }

        #[test]
        #[should_panic]
        fn test_integer_division_by_zero_panics() {
            let a = Vector::<i32, 2>::splat(1);
            let _ = a.div(&Vector::zero());
        }

        #[test]
        fn test_float_division_by_zero_is_ieee() {
            let a = Vector::<f64, 2>::from_array([1.0, 0.0]);
            let q = a.div_scalar(0.0);
            assert_eq!(q.extract(0), f64::INFINITY);
            assert!(q.extract(1).is_nan());
        }
    }

    mod signed_tests {
        use super::*;

        #[test]
        fn test_neg_and_abs() {
            let v = Vector::<i8, 4>::from_array([-3, 0, 7, i8::MIN]);
            assert_eq!(v.neg().to_array(), [3, 0, -7, i8::MIN]);
            assert_eq!(v.abs().to_array(), [3, 0, 7, i8::MIN]);
            assert_eq!(v.abs_masked(&Mask::first_n(1)).to_array(), [3, 0, 7, i8::MIN]);
        }
    }

    mod saturating_tests {
        use super::*;

        #[test]
        fn test_sadd_clamps_at_max() {
            let v = Vector::<i32, 8>::splat(i32::MAX);
            assert_eq!(v.sadd(&Vector::splat(1)).to_array(), [i32::MAX; 8]);
        }

        #[test]
        fn test_ssub_clamps_at_min() {
            let v = Vector::<u16, 4>::from_array([0, 1, 2, 3]);
            assert_eq!(v.ssub_scalar(2).to_array(), [0, 0, 0, 1]);
        }

        #[test]
        fn test_masked_saturation() {
            let v = Vector::<i8, 2>::splat(120);
            let r = v.sadd_scalar_masked(&Mask::new([false, true]), 100);
            assert_eq!(r.to_array(), [120, i8::MAX]);
        }
    }

    mod fused_tests {
        use super::*;

        #[test]
        fn test_fused_forms() {
            let a = Vector::<i32, 2>::from_array([2, 3]);
            let b = Vector::<i32, 2>::from_array([4, 5]);
            let c = Vector::<i32, 2>::from_array([1, 1]);

            assert_eq!(a.fmuladd(&b, &c).to_array(), [9, 16]);
            assert_eq!(a.fmulsub(&b, &c).to_array(), [7, 14]);
            assert_eq!(a.faddmul(&b, &c).to_array(), [6, 8]);
            assert_eq!(a.fsubmul(&b, &c).to_array(), [-2, -2]);
            assert_eq!(
                a.fmuladd_masked(&Mask::new([false, true]), &b, &c).to_array(),
                [2, 16]
            );
        }
    }

    mod float_math_tests {
        use super::*;

        #[test]
        fn test_rounding_family() {
            let v = Vector::<f32, 4>::from_array([-1.5, -0.5, 0.5, 2.7]);
            assert_eq!(v.floor().to_array(), [-2.0, -1.0, 0.0, 2.0]);
            assert_eq!(v.ceil().to_array(), [-1.0, -0.0, 1.0, 3.0]);
            assert_eq!(v.trunc().to_array(), [-1.0, -0.0, 0.0, 2.0]);
            assert_eq!(v.round().to_array(), [-2.0, -1.0, 1.0, 3.0]);
        }

        #[test]
        fn test_sqrt_and_rcp() {
            let v = Vector::<f64, 2>::from_array([4.0, 0.25]);
            assert_eq!(v.sqrt().to_array(), [2.0, 0.5]);
            assert_eq!(v.rcp().to_array(), [0.25, 4.0]);
            assert_eq!(v.sqrt_masked(&Mask::first_n(1)).to_array(), [2.0, 0.25]);
        }

        #[test]
        fn test_classification() {
            let v = Vector::<f32, 4>::from_array([f32::NAN, f32::INFINITY, -1.0, f32::NEG_INFINITY]);
            assert_eq!(v.isnan().to_array(), [true, false, false, false]);
            assert_eq!(v.isinf().to_array(), [false, true, false, true]);
            assert_eq!(v.isfin().to_array(), [false, false, true, false]);
        }
    }
}
