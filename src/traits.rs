use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric element types that support basic arithmetic operations.
///
/// Unlike some other linear algebra libraries, this does not require [`ops::Neg`], so that
/// unsigned integers can be used as vector elements.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions needed to compute angles.
pub trait Trig {
    /// Computes the four-quadrant arctangent of `self` (`y`) and `other` (`x`), in radians.
    fn atan2(self, other: Self) -> Self;
}

/// Real (floating-point) element types.
///
/// Lengths, angles and unit vectors are always computed in a [`Real`] type, even when the vector
/// elements are integers (see [`IntoReal`][crate::IntoReal]).
pub trait Real: Number + Sqrt + Trig + ops::Neg<Output = Self> {}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: u8, u16, u32, u64, i8, i16, i32, i64);
zero_one!(0.0, 1.0: f32, f64);

macro_rules! real {
    ($($types:ty),+) => {
        $(
            impl Sqrt for $types {
                #[inline]
                fn sqrt(self) -> Self {
                    <$types>::sqrt(self)
                }
            }

            impl Trig for $types {
                #[inline]
                fn atan2(self, other: Self) -> Self {
                    <$types>::atan2(self, other)
                }
            }

            impl Real for $types {}
        )+
    };
}
real!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<T: Number>(values: &[T]) -> T {
        values.iter().fold(T::ZERO, |acc, &v| acc + v)
    }

    #[test]
    fn identities() {
        assert_eq!(sum::<u8>(&[1, 2, 3]), 6);
        assert_eq!(sum::<i16>(&[]), 0);
        assert_eq!(sum(&[0.5f32, 0.25]), 0.75);
        assert_eq!(f64::ONE * 7.0, 7.0);
        assert_eq!(i64::ONE + i64::ZERO, 1);
    }

    #[test]
    fn real_fns() {
        assert_eq!(Sqrt::sqrt(16.0f32), 4.0);
        assert_eq!(Trig::atan2(0.0f64, 1.0), 0.0);
        assert_eq!(Trig::atan2(1.0f32, 0.0), std::f32::consts::FRAC_PI_2);
    }
}
