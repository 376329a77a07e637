//! Geometric quantities derived from vectors: products, lengths, and angles.
//!
//! Everything here is built on the [`engine`][crate::engine] reductions and on index-based access,
//! so the free functions work for every supported dimension unless noted otherwise. The cross
//! product and the angle between two vectors are only defined for 2D and 3D vectors.

use crate::{
    engine::{self, zip_rows, Elementwise, Multiply},
    promote::{IntoReal, Promote, Promoted, RealOf, Scalar, Widen, Widened},
    traits::{Sqrt, Trig, Zero},
    Vector,
};

/// Computes the dot product of `a` and `b`.
///
/// The elements are promoted before they are multiplied, and narrow integers are [`Widen`]ed, so
/// the dot product of two `Vec2<i16>` is an `i32`.
///
/// # Examples
///
/// ```
/// # use math3d::*;
/// assert_eq!(dot_product(vec3(1i32, 3, -5), vec3(4i32, -2, -1)), 3);
/// assert_eq!(dot_product(vec2(1i32, 2), vec2(0.5f32, 0.25)), 1.0);
/// assert_eq!(dot_product(vec2(200i16, 0), vec2(200i16, 0)), 40_000i32);
/// ```
pub fn dot_product<T, U, const N: usize>(
    a: Vector<T, N>,
    b: Vector<U, N>,
) -> Widened<Promoted<T, U>>
where
    T: Promote<U>,
    Promoted<T, U>: Widen,
{
    engine::dot_rows(a, b)
}

/// Computes the squared length of `v`, the dot product of `v` with itself.
pub fn length_squared<T: Scalar, const N: usize>(v: Vector<T, N>) -> Widened<T> {
    dot_product(v, v)
}

/// Computes the length of `v`.
///
/// The result is always a floating-point value, even for integer vectors. The squares are summed
/// in that floating-point type, so this never overflows.
///
/// # Examples
///
/// ```
/// # use math3d::*;
/// assert_eq!(length(vec2(3i16, 4)), 5.0);
/// assert_eq!(length(vec2(i16::MAX, 0)), 32767.0);
/// assert_eq!(length(vec3(2.0f32, 0.0, 0.0)), 2.0f32);
/// ```
pub fn length<T: Scalar, const N: usize>(v: Vector<T, N>) -> RealOf<T> {
    v.into_array()
        .into_iter()
        .map(T::into_real)
        .fold(<RealOf<T> as Zero>::ZERO, |acc, e| acc + e * e)
        .sqrt()
}

/// Scales `v` so that its length is 1.
///
/// Dividing by a length of zero is not special-cased: the unit of a zero vector has `NaN` rows.
///
/// # Examples
///
/// ```
/// # use math3d::*;
/// assert_eq!(unit(vec2(0i32, -3)), vec2(0.0f64, -1.0));
/// assert!(unit(Vec3f::ZERO).x.is_nan());
/// ```
pub fn unit<T: Scalar, const N: usize>(v: Vector<T, N>) -> Vector<RealOf<T>, N> {
    let len = length(v);
    v.map(|elem| elem.into_real() / len)
}

/// Computes the element-wise (Hadamard) product of `a` and `b`, with promotion.
///
/// This is intentionally not available as the `*` operator, which always means scaling.
///
/// # Examples
///
/// ```
/// # use math3d::*;
/// let v = componentwise_product(vec3(1i32, 2, 3), vec3(2.0f64, 0.5, -1.0));
/// assert_eq!(v, vec3(2.0f64, 1.0, -3.0));
/// ```
pub fn componentwise_product<T, U, const N: usize>(
    a: Vector<T, N>,
    b: Vector<U, N>,
) -> Vector<Promoted<T, U>, N>
where
    T: Promote<U>,
    Promoted<T, U>: Elementwise,
{
    zip_rows::<Multiply, _, _, N>(a, b)
}

/// The cross product, for vectors where it is defined.
///
/// For 2D vectors this is the scalar `a.x * b.y - a.y * b.x` (the signed area of the parallelogram
/// spanned by the vectors). For 3D vectors it is the vector perpendicular to both operands. Like the
/// dot product, the result is computed in the [`Widened`] promoted type.
pub trait Cross<Rhs = Self> {
    type Output;

    fn cross(self, rhs: Rhs) -> Self::Output;
}

impl<T, U> Cross<Vector<U, 2>> for Vector<T, 2>
where
    T: Promote<U>,
    Promoted<T, U>: Widen,
{
    type Output = Widened<Promoted<T, U>>;

    fn cross(self, rhs: Vector<U, 2>) -> Self::Output {
        let [ax, ay] = self.into_array().map(|e| e.promote().widen());
        let [bx, by] = rhs.into_array().map(|e| T::promote_rhs(e).widen());
        ax * by - ay * bx
    }
}

impl<T, U> Cross<Vector<U, 3>> for Vector<T, 3>
where
    T: Promote<U>,
    Promoted<T, U>: Widen,
{
    type Output = Vector<Widened<Promoted<T, U>>, 3>;

    fn cross(self, rhs: Vector<U, 3>) -> Self::Output {
        let [ax, ay, az] = self.into_array().map(|e| e.promote().widen());
        let [bx, by, bz] = rhs.into_array().map(|e| T::promote_rhs(e).widen());
        Vector::new([
            ay * bz - az * by, //
            az * bx - ax * bz,
            ax * by - ay * bx,
        ])
    }
}

/// Computes the cross product of `a` and `b`.
///
/// Only 2D vectors (giving a scalar) and 3D vectors (giving a vector) have a cross product.
///
/// # Examples
///
/// ```
/// # use math3d::*;
/// assert_eq!(cross_product(Vec3i::X, Vec3i::Y), Vec3i::Z);
/// assert_eq!(cross_product(vec2(1i32, 0), vec2(0.0f32, 2.0)), 2.0);
/// ```
///
/// ```compile_fail
/// # use math3d::*;
/// cross_product(Vec4f::X, Vec4f::Y);
/// ```
pub fn cross_product<A, B>(a: A, b: B) -> A::Output
where
    A: Cross<B>,
{
    A::cross(a, b)
}

/// The angle between two vectors, in radians, for vectors where it is defined.
pub trait Angle<Rhs = Self> {
    type Output;

    fn angle(self, rhs: Rhs) -> Self::Output;
}

/// The signed angle from `self` to `rhs`, in `[-π, π]`.
impl<T, U> Angle<Vector<U, 2>> for Vector<T, 2>
where
    T: Promote<U> + Copy,
    U: Copy,
    Promoted<T, U>: Scalar,
{
    type Output = RealOf<Widened<Promoted<T, U>>>;

    fn angle(self, rhs: Vector<U, 2>) -> Self::Output {
        let cross = self.cross(rhs).into_real();
        let dot = dot_product(self, rhs).into_real();
        cross.atan2(dot)
    }
}

/// The unsigned angle between `self` and `rhs`, in `[0, π]`.
impl<T, U> Angle<Vector<U, 3>> for Vector<T, 3>
where
    T: Promote<U> + Copy,
    U: Copy,
    Promoted<T, U>: Scalar,
{
    type Output = RealOf<Widened<Promoted<T, U>>>;

    fn angle(self, rhs: Vector<U, 3>) -> Self::Output {
        let cross = length(self.cross(rhs));
        let dot = dot_product(self, rhs).into_real();
        cross.atan2(dot)
    }
}

/// Computes the angle between `a` and `b`, in radians.
///
/// For 2D vectors the angle is signed, measured counterclockwise from `a` to `b`. For 3D vectors it
/// is unsigned.
///
/// # Examples
///
/// ```
/// # use math3d::*;
/// use std::f32::consts::FRAC_PI_2;
///
/// assert_eq!(angle(Vec2f::X, Vec2f::Y), FRAC_PI_2);
/// assert_eq!(angle(Vec2f::Y, Vec2f::X), -FRAC_PI_2);
/// assert_eq!(angle(Vec3f::Y, Vec3f::X), FRAC_PI_2);
/// ```
pub fn angle<A, B>(a: A, b: B) -> A::Output
where
    A: Angle<B>,
{
    A::angle(a, b)
}
