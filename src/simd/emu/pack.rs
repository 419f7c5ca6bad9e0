//! Half splitting and joining for power-of-two lane counts from 2 to 128.

use crate::simd::element::SimdElement;
use crate::simd::traits::SimdPack;

use super::Vector;

macro_rules! impl_pack {
    ($(($lanes:literal, $half:literal)),* $(,)?) => {
        $(
            impl<T: SimdElement> SimdPack<$lanes> for Vector<T, $lanes> {
                type Half = Vector<T, $half>;

                #[inline(always)]
                fn pack(lo: &Self::Half, hi: &Self::Half) -> Self {
                    Self::from_fn(|i| {
                        if i < $half {
                            lo.lanes[i]
                        } else {
                            hi.lanes[i - $half]
                        }
                    })
                }

                #[inline(always)]
                fn packlo(&mut self, lo: &Self::Half) {
                    self.lanes[..$half].copy_from_slice(&lo.lanes);
                }

                #[inline(always)]
                fn packhi(&mut self, hi: &Self::Half) {
                    self.lanes[$half..].copy_from_slice(&hi.lanes);
                }

                #[inline(always)]
                fn unpacklo(&self) -> Self::Half {
                    Vector::from_fn(|i| self.lanes[i])
                }

                #[inline(always)]
                fn unpackhi(&self) -> Self::Half {
                    Vector::from_fn(|i| self.lanes[i + $half])
                }
            }
        )*
    };
}

impl_pack!(
    (2, 1),
    (4, 2),
    (8, 4),
    (16, 8),
    (32, 16),
    (64, 32),
    (128, 64),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::traits::SimdVector;

    #[test]
    fn test_pack_concatenates_halves() {
        let lo = Vector::<i32, 2>::from_array([1, 2]);
        let hi = Vector::<i32, 2>::from_array([3, 4]);
        assert_eq!(Vector::<i32, 4>::pack(&lo, &hi).to_array(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_unpack_splits_halves() {
        let v = Vector::<u8, 8>::from_fn(|i| i as u8 * 10);
        let (lo, hi) = v.unpack();
        assert_eq!(lo.to_array(), [0, 10, 20, 30]);
        assert_eq!(hi.to_array(), [40, 50, 60, 70]);
        assert_eq!(Vector::<u8, 8>::pack(&lo, &hi), v);
    }

    #[test]
    fn test_packlo_and_packhi_replace_one_half() {
        let mut v = Vector::<f32, 4>::splat(0.0);
        v.packlo(&Vector::splat(1.0));
        assert_eq!(v.to_array(), [1.0, 1.0, 0.0, 0.0]);
        v.packhi(&Vector::from_array([7.0, 8.0]));
        assert_eq!(v.to_array(), [1.0, 1.0, 7.0, 8.0]);
    }

    #[test]
    fn test_widest_pack() {
        let v = Vector::<u16, 128>::from_fn(|i| i as u16);
        assert_eq!(v.unpackhi().extract(0), 64);
        assert_eq!(v.unpacklo().extract(63), 63);
    }
}
