//! Element type promotion.
//!
//! Binary operations on vectors and matrices may mix element types. The element type of the result
//! is determined by a fixed promotion table, implemented as the [`Promote`] trait:
//!
//! - Identical types promote to themselves (`i16` and `i16` give `i16`).
//! - An integer combined with a floating-point type gives that floating-point type (`i32` and
//!   `f32` give `f32`, `i64` and `f64` give `f64`).
//! - `f32` combined with `f64` gives `f64`.
//! - Two signed or two unsigned integers give the wider of the two.
//! - A signed integer combined with a strictly narrower unsigned integer gives the signed type
//!   (`i32` and `u16` give `i32`).
//!
//! Any other combination (for example `i32` with `u32`) has no promotion, and operations mixing
//! them do not compile.
//!
//! Dot and cross products additionally [`Widen`] the promoted type before multiplying, so the
//! products of 8- and 16-bit integers are accumulated in `i32`.
//!
//! ```
//! # use math3d::*;
//! let sum: Vec2f = vec2(1i32, 2) + vec2(0.5f32, 0.25);
//! assert_eq!(sum, vec2(1.5, 2.25));
//! ```
//!
//! ```compile_fail
//! # use math3d::*;
//! let _ = vec2(1i32, 2) + vec2(1u32, 2);
//! ```

use crate::{engine::Elementwise, traits::Number, Real, Vector};

/// Determines the element type produced by an arithmetic operation between `Self` and `Rhs`.
///
/// See the [module documentation](self) for the full table.
pub trait Promote<Rhs>: Sized {
    /// The promoted type.
    type Output;

    /// Converts the left-hand operand to the promoted type.
    fn promote(self) -> Self::Output;

    /// Converts the right-hand operand to the promoted type.
    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

/// The type that `T` and `U` are promoted to in an arithmetic operation.
pub type Promoted<T, U> = <T as Promote<U>>::Output;

/// Multiplication and division by a scalar that preserves the type of `Self`.
///
/// The operation is carried out in the promoted type, and the result is converted back to `Self`
/// with `as` semantics (truncating floats, wrapping integers). This is what keeps `vector * scalar`
/// at the vector's element type regardless of the type of the scalar.
pub trait Scale<S>: Sized {
    fn scale_mul(self, scalar: S) -> Self;
    fn scale_div(self, scalar: S) -> Self;
}

/// Explicit numeric conversion with `as` semantics.
///
/// This is never applied implicitly; see [`Vector::cast`].
pub trait Cast<U> {
    fn cast(self) -> U;
}

/// Maps an element type to the floating-point type used for lengths and angles.
///
/// Floating-point types map to themselves, all integer types map to [`f64`].
pub trait IntoReal {
    type Real: Real;

    fn into_real(self) -> Self::Real;
}

/// The real type associated with `T`.
pub type RealOf<T> = <T as IntoReal>::Real;

/// Maps an element type to the type that products of it are accumulated in.
///
/// Integers narrower than 32 bits widen to [`i32`], so that dot and cross products of small
/// vectors do not overflow. Every other type maps to itself.
pub trait Widen: Copy {
    type Wide: Scalar;

    fn widen(self) -> Self::Wide;
}

/// The accumulator type associated with `T`.
pub type Widened<T> = <T as Widen>::Wide;

/// Primitive numeric types that can be stored in a [`Vector`].
///
/// This bundles the per-type arithmetic traits so that generic code only needs a single bound.
pub trait Scalar:
    Number + Elementwise + IntoReal + Widen + Promote<Self, Output = Self> + Scale<Self>
{
}

/// Rows promote structurally: a row vector of `L` combined with a row vector of `R` gives a row
/// vector of `Promoted<L, R>`. This is what lets matrices promote like vectors do.
impl<L, R, const N: usize> Promote<Vector<R, N>> for Vector<L, N>
where
    L: Promote<R>,
{
    type Output = Vector<L::Output, N>;

    #[inline]
    fn promote(self) -> Self::Output {
        self.map(L::promote)
    }

    #[inline]
    fn promote_rhs(rhs: Vector<R, N>) -> Self::Output {
        rhs.map(L::promote_rhs)
    }
}

/// Scaling a row vector scales each of its elements.
impl<T, S, const N: usize> Scale<S> for Vector<T, N>
where
    T: Scale<S>,
    S: Copy,
{
    #[inline]
    fn scale_mul(self, scalar: S) -> Self {
        self.map(|elem| elem.scale_mul(scalar))
    }

    #[inline]
    fn scale_div(self, scalar: S) -> Self {
        self.map(|elem| elem.scale_div(scalar))
    }
}

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }

            impl Scale<$rhs> for $lhs {
                #[inline]
                fn scale_mul(self, scalar: $rhs) -> Self {
                    (self as $out * scalar as $out) as $lhs
                }

                #[inline]
                fn scale_div(self, scalar: $rhs) -> Self {
                    (self as $out / scalar as $out) as $lhs
                }
            }
        )+
    };
}

/// Emits the rule for both operand orders.
macro_rules! promote_commutative {
    ($($a:ty, $b:ty => $out:ty;)+) => {
        promote! {
            $(
                $a, $b => $out;
                $b, $a => $out;
            )+
        }
    };
}

promote! {
    i8, i8 => i8;
    i16, i16 => i16;
    i32, i32 => i32;
    i64, i64 => i64;
    u8, u8 => u8;
    u16, u16 => u16;
    u32, u32 => u32;
    u64, u64 => u64;
    f32, f32 => f32;
    f64, f64 => f64;
}

promote_commutative! {
    i8, f32 => f32;
    i16, f32 => f32;
    i32, f32 => f32;
    i64, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;

    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;

    f32, f64 => f64;

    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i16, i32 => i32;
    i16, i64 => i64;
    i32, i64 => i64;

    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u16, u32 => u32;
    u16, u64 => u64;
    u32, u64 => u64;

    i16, u8 => i16;
    i32, u8 => i32;
    i32, u16 => i32;
    i64, u8 => i64;
    i64, u16 => i64;
    i64, u32 => i64;
}

macro_rules! cast_to {
    ($to:ty: $($from:ty),+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}

cast_to!(i8: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
cast_to!(i16: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
cast_to!(i32: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
cast_to!(i64: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
cast_to!(u8: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
cast_to!(u16: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
cast_to!(u32: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
cast_to!(u64: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
cast_to!(f32: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
cast_to!(f64: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! into_real {
    ($real:ty: $($types:ty),+) => {
        $(
            impl IntoReal for $types {
                type Real = $real;

                #[inline]
                fn into_real(self) -> $real {
                    self as $real
                }
            }
        )+
    };
}

into_real!(f32: f32);
into_real!(f64: f64, i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! widen {
    ($wide:ty: $($types:ty),+) => {
        $(
            impl Widen for $types {
                type Wide = $wide;

                #[inline]
                fn widen(self) -> $wide {
                    self as $wide
                }
            }
        )+
    };
}

widen!(i32: i8, i16, u8, u16, i32);
widen!(i64: i64);
widen!(u32: u32);
widen!(u64: u64);
widen!(f32: f32);
widen!(f64: f64);

macro_rules! scalar {
    ($($types:ty),+) => {
        $(
            impl Scalar for $types {}
        )+
    };
}

scalar!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn promoted<T: Promote<U>, U>() -> TypeId
    where
        T::Output: 'static,
    {
        TypeId::of::<T::Output>()
    }

    #[test]
    fn table() {
        assert_eq!(promoted::<i32, f32>(), TypeId::of::<f32>());
        assert_eq!(promoted::<f32, i32>(), TypeId::of::<f32>());
        assert_eq!(promoted::<i16, f64>(), TypeId::of::<f64>());
        assert_eq!(promoted::<f32, f64>(), TypeId::of::<f64>());
        assert_eq!(promoted::<i16, i32>(), TypeId::of::<i32>());
        assert_eq!(promoted::<i16, i16>(), TypeId::of::<i16>());
        assert_eq!(promoted::<u8, u32>(), TypeId::of::<u32>());
        assert_eq!(promoted::<u16, i64>(), TypeId::of::<i64>());
        assert_eq!(
            promoted::<Vector<i32, 3>, Vector<f64, 3>>(),
            TypeId::of::<Vector<f64, 3>>()
        );
    }

    #[test]
    fn scale_keeps_own_type() {
        assert_eq!(7i32.scale_mul(0.5f32), 3);
        assert_eq!(7i32.scale_div(2.0f64), 3);
        assert_eq!(1.5f32.scale_mul(2i16), 3.0);
        assert_eq!(9u8.scale_div(3u8), 3);
    }

    #[test]
    fn cast() {
        assert_eq!(Cast::<i32>::cast(2.9f32), 2);
        assert_eq!(Cast::<f64>::cast(-3i16), -3.0);
        assert_eq!(Cast::<u8>::cast(300i32), 44);
    }

    #[test]
    fn widen() {
        assert_eq!(200i16.widen() * 200i16.widen(), 40_000);
        assert_eq!(255u8.widen(), 255i32);
        assert_eq!(TypeId::of::<Widened<u16>>(), TypeId::of::<i32>());
        assert_eq!(TypeId::of::<Widened<u32>>(), TypeId::of::<u32>());
        assert_eq!(TypeId::of::<Widened<f32>>(), TypeId::of::<f32>());
    }

    #[test]
    fn real() {
        assert_eq!(4i32.into_real(), 4.0f64);
        assert_eq!(TypeId::of::<RealOf<u16>>(), TypeId::of::<f64>());
        assert_eq!(TypeId::of::<RealOf<f32>>(), TypeId::of::<f32>());
    }
}
