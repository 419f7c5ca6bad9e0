//! Bitwise, comparison, reduction and gather/scatter families of the
//! emulated vector.

use crate::simd::element::{IntElement, SimdElement};
use crate::simd::traits::{fold_active, SimdBitwise, SimdCompare, SimdGather, SimdReduce};
use crate::simd::Mask;

use super::Vector;

impl<T: SimdElement, const N: usize> Vector<T, N> {
    #[inline(always)]
    fn zip_test(&self, rhs: &Self, f: impl Fn(T, T) -> bool) -> Mask<N> {
        Mask::new(std::array::from_fn(|i| f(self.lanes[i], rhs.lanes[i])))
    }
}

impl<T: IntElement, const N: usize> SimdBitwise<N> for Vector<T, N> {
    #[inline(always)]
    fn band(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, |a, b| a & b)
    }

    #[inline(always)]
    fn bor(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, |a, b| a | b)
    }

    #[inline(always)]
    fn bxor(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, |a, b| a ^ b)
    }
}

impl<T: SimdElement, const N: usize> SimdCompare<N> for Vector<T, N> {
    #[inline(always)]
    fn cmpeq(&self, rhs: &Self) -> Mask<N> {
        self.zip_test(rhs, |a, b| a == b)
    }

    #[inline(always)]
    fn cmpgt(&self, rhs: &Self) -> Mask<N> {
        self.zip_test(rhs, |a, b| a > b)
    }

    #[inline(always)]
    fn cmplt(&self, rhs: &Self) -> Mask<N> {
        self.zip_test(rhs, |a, b| a < b)
    }

    #[inline(always)]
    fn cmpne(&self, rhs: &Self) -> Mask<N> {
        self.zip_test(rhs, |a, b| a != b)
    }

    #[inline(always)]
    fn cmpge(&self, rhs: &Self) -> Mask<N> {
        self.zip_test(rhs, |a, b| a >= b)
    }

    #[inline(always)]
    fn cmple(&self, rhs: &Self) -> Mask<N> {
        self.zip_test(rhs, |a, b| a <= b)
    }
}

impl<T: SimdElement, const N: usize> SimdReduce<N> for Vector<T, N> {
    #[inline(always)]
    fn hadd(&self) -> T {
        self.lanes.iter().fold(T::zero(), |acc, &x| acc.lane_add(x))
    }

    #[inline(always)]
    fn hmul(&self) -> T {
        self.lanes.iter().fold(T::one(), |acc, &x| acc.lane_mul(x))
    }

    #[inline(always)]
    fn hmax(&self) -> T {
        fold_active(self.lanes, &Mask::splat(true), T::LOWEST, T::lane_max)
    }

    #[inline(always)]
    fn hmin(&self) -> T {
        fold_active(self.lanes, &Mask::splat(true), T::HIGHEST, T::lane_min)
    }
}

impl<T: SimdElement, const N: usize> SimdGather<N> for Vector<T, N> {}
