//! Operator overloads for the emulated vector.
//!
//! Operators delegate to the named trait methods, so `a + b` and `a.add(&b)`
//! always agree. A scalar right-hand operand is broadcast to every lane.

use std::ops;

use crate::simd::element::{IntElement, SignedElement, SimdElement};
use crate::simd::traits::{SimdArith, SimdBitwise, SimdNeg};

use super::Vector;

macro_rules! impl_binary_op {
    ($bound:ident, $family:ident, $op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident) => {
        impl<T: $bound, const N: usize> ops::$op_trait for Vector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $op(self, rhs: Self) -> Self {
                <Self as $family<N>>::$op(&self, &rhs)
            }
        }

        impl<T: $bound, const N: usize> ops::$assign_trait for Vector<T, N> {
            #[inline(always)]
            fn $assign(&mut self, rhs: Self) {
                *self = <Self as $family<N>>::$op(self, &rhs);
            }
        }
    };
}

impl_binary_op!(SimdElement, SimdArith, Add, add, AddAssign, add_assign);
impl_binary_op!(SimdElement, SimdArith, Sub, sub, SubAssign, sub_assign);
impl_binary_op!(SimdElement, SimdArith, Mul, mul, MulAssign, mul_assign);
impl_binary_op!(SimdElement, SimdArith, Div, div, DivAssign, div_assign);

macro_rules! impl_bitwise_op {
    ($op_trait:ident, $op:ident, $method:ident, $assign_trait:ident, $assign:ident) => {
        impl<T: IntElement, const N: usize> ops::$op_trait for Vector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $op(self, rhs: Self) -> Self {
                <Self as SimdBitwise<N>>::$method(&self, &rhs)
            }
        }

        impl<T: IntElement, const N: usize> ops::$assign_trait for Vector<T, N> {
            #[inline(always)]
            fn $assign(&mut self, rhs: Self) {
                *self = <Self as SimdBitwise<N>>::$method(self, &rhs);
            }
        }
    };
}

impl_bitwise_op!(BitAnd, bitand, band, BitAndAssign, bitand_assign);
impl_bitwise_op!(BitOr, bitor, bor, BitOrAssign, bitor_assign);
impl_bitwise_op!(BitXor, bitxor, bxor, BitXorAssign, bitxor_assign);

impl<T: SignedElement, const N: usize> ops::Neg for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        <Self as SimdNeg<N>>::neg(&self)
    }
}

impl<T: IntElement, const N: usize> ops::Not for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        self.bnot()
    }
}

impl<T: IntElement, const N: usize> ops::Shl<u32> for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        self.lsh(count)
    }
}

impl<T: IntElement, const N: usize> ops::Shr<u32> for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        self.rsh(count)
    }
}

impl<T: IntElement, const N: usize> ops::ShlAssign<u32> for Vector<T, N> {
    #[inline(always)]
    fn shl_assign(&mut self, count: u32) {
        *self = self.lsh(count);
    }
}

impl<T: IntElement, const N: usize> ops::ShrAssign<u32> for Vector<T, N> {
    #[inline(always)]
    fn shr_assign(&mut self, count: u32) {
        *self = self.rsh(count);
    }
}

// Scalar operands are implemented per lane type: a blanket `Add<T>` would
// overlap with `Add<Vector<T, N>>` in coherence checking.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> ops::Add<$t> for Vector<$t, N> {
                type Output = Self;

                #[inline(always)]
                fn add(self, rhs: $t) -> Self {
                    self.add_scalar(rhs)
                }
            }

            impl<const N: usize> ops::Sub<$t> for Vector<$t, N> {
                type Output = Self;

                #[inline(always)]
                fn sub(self, rhs: $t) -> Self {
                    self.sub_scalar(rhs)
                }
            }

            impl<const N: usize> ops::Mul<$t> for Vector<$t, N> {
                type Output = Self;

                #[inline(always)]
                fn mul(self, rhs: $t) -> Self {
                    self.mul_scalar(rhs)
                }
            }

            impl<const N: usize> ops::Div<$t> for Vector<$t, N> {
                type Output = Self;

                #[inline(always)]
                fn div(self, rhs: $t) -> Self {
                    self.div_scalar(rhs)
                }
            }

            impl<const N: usize> ops::AddAssign<$t> for Vector<$t, N> {
                #[inline(always)]
                fn add_assign(&mut self, rhs: $t) {
                    *self = self.add_scalar(rhs);
                }
            }

            impl<const N: usize> ops::SubAssign<$t> for Vector<$t, N> {
                #[inline(always)]
                fn sub_assign(&mut self, rhs: $t) {
                    *self = self.sub_scalar(rhs);
                }
            }

            impl<const N: usize> ops::MulAssign<$t> for Vector<$t, N> {
                #[inline(always)]
                fn mul_assign(&mut self, rhs: $t) {
                    *self = self.mul_scalar(rhs);
                }
            }

            impl<const N: usize> ops::DivAssign<$t> for Vector<$t, N> {
                #[inline(always)]
                fn div_assign(&mut self, rhs: $t) {
                    *self = self.div_scalar(rhs);
                }
            }
        )*
    };
}

impl_scalar_ops!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<T, const N: usize> ops::Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, lane: usize) -> &T {
        &self.lanes[lane]
    }
}

impl<T, const N: usize> ops::IndexMut<usize> for Vector<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, lane: usize) -> &mut T {
        &mut self.lanes[lane]
    }
}
