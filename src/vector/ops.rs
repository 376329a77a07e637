//! Implementations of `std::ops`.
//!
//! All binary operators are routed through the [`engine`], so vectors and matrices share the same
//! promotion and row-order behavior.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    engine::{self, broadcast_rows, zip_rows, Elementwise, Output, RowOp},
    promote::{Promote, Promoted},
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

/// Element-wise equality, after promoting both sides.
///
/// `==` holds when every row compares equal, and `!=` holds when any row compares unequal. Both
/// reductions stop at the first row that decides the result.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U> + Copy,
    U: Copy,
    Promoted<T, U>: Elementwise,
{
    #[inline]
    fn eq(&self, other: &Vector<U, N>) -> bool {
        engine::all_rows_eq(*self, *other)
    }

    #[allow(clippy::partialeq_ne_impl)]
    #[inline]
    fn ne(&self, other: &Vector<U, N>) -> bool {
        engine::any_row_ne(*self, *other)
    }
}

impl<T, const N: usize> Eq for Vector<T, N>
where
    T: Eq,
    Self: PartialEq,
{
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition, with promotion.
impl<T, U, const N: usize> Add<Vector<U, N>> for Vector<T, N>
where
    engine::Add: RowOp<T, U>,
{
    type Output = Vector<Output<engine::Add, T, U>, N>;

    #[inline]
    fn add(self, rhs: Vector<U, N>) -> Self::Output {
        zip_rows::<engine::Add, _, _, N>(self, rhs)
    }
}

/// Element-wise addition. Only available when the result keeps the element type of `self`.
impl<T, U, const N: usize> AddAssign<Vector<U, N>> for Vector<T, N>
where
    T: Copy,
    engine::Add: RowOp<T, U, Output = T>,
{
    fn add_assign(&mut self, rhs: Vector<U, N>) {
        *self = zip_rows::<engine::Add, _, _, N>(*self, rhs);
    }
}

/// Element-wise subtraction, with promotion.
impl<T, U, const N: usize> Sub<Vector<U, N>> for Vector<T, N>
where
    engine::Subtract: RowOp<T, U>,
{
    type Output = Vector<Output<engine::Subtract, T, U>, N>;

    #[inline]
    fn sub(self, rhs: Vector<U, N>) -> Self::Output {
        zip_rows::<engine::Subtract, _, _, N>(self, rhs)
    }
}

/// Element-wise subtraction. Only available when the result keeps the element type of `self`.
impl<T, U, const N: usize> SubAssign<Vector<U, N>> for Vector<T, N>
where
    T: Copy,
    engine::Subtract: RowOp<T, U, Output = T>,
{
    fn sub_assign(&mut self, rhs: Vector<U, N>) {
        *self = zip_rows::<engine::Subtract, _, _, N>(*self, rhs);
    }
}

// NB: `*` between two vectors is not provided. Multiplication by a vector-valued "scalar" would be
// ambiguous for matrices, and the element-wise product is available as `componentwise_product`.

/// Scalar multiplication. The result keeps the element type of `self`.
impl<T, S, const N: usize> Mul<S> for Vector<T, N>
where
    S: Copy,
    engine::ScalarMultiply: RowOp<T, S>,
{
    type Output = Vector<Output<engine::ScalarMultiply, T, S>, N>;

    #[inline]
    fn mul(self, scalar: S) -> Self::Output {
        broadcast_rows::<engine::ScalarMultiply, _, _, N>(self, scalar)
    }
}

/// Scalar multiplication.
impl<T, S, const N: usize> MulAssign<S> for Vector<T, N>
where
    T: Copy,
    S: Copy,
    engine::ScalarMultiply: RowOp<T, S, Output = T>,
{
    fn mul_assign(&mut self, scalar: S) {
        *self = broadcast_rows::<engine::ScalarMultiply, _, _, N>(*self, scalar);
    }
}

/// Scalar division. The result keeps the element type of `self`.
///
/// Dividing integer rows by zero panics, just like integer division does.
impl<T, S, const N: usize> Div<S> for Vector<T, N>
where
    S: Copy,
    engine::ScalarDivide: RowOp<T, S>,
{
    type Output = Vector<Output<engine::ScalarDivide, T, S>, N>;

    #[inline]
    fn div(self, scalar: S) -> Self::Output {
        broadcast_rows::<engine::ScalarDivide, _, _, N>(self, scalar)
    }
}

/// Scalar division.
impl<T, S, const N: usize> DivAssign<S> for Vector<T, N>
where
    T: Copy,
    S: Copy,
    engine::ScalarDivide: RowOp<T, S, Output = T>,
{
    fn div_assign(&mut self, scalar: S) {
        *self = broadcast_rows::<engine::ScalarDivide, _, _, N>(*self, scalar);
    }
}

/// Scalar-on-the-left multiplication (`c * v`), for each primitive scalar type.
macro_rules! left_scalar_mul {
    ($($types:ty),+) => {
        $(
            impl<T, const N: usize> Mul<Vector<T, N>> for $types
            where
                engine::ScalarMultiply: RowOp<T, $types>,
            {
                type Output = Vector<Output<engine::ScalarMultiply, T, $types>, N>;

                #[inline]
                fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                    broadcast_rows::<engine::ScalarMultiply, _, _, N>(rhs, self)
                }
            }
        )+
    };
}

left_scalar_mul!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn add_sub_promote() {
        let v = vec3(1i32, 2, 3) + vec3(0.5f32, 0.5, 0.5);
        let _: &Vec3f = &v;
        assert_eq!(v.into_array(), [1.5, 2.5, 3.5]);

        let v = vec2(10u8, 20) - vec2(1u16, 2);
        let _: &Vec2<u16> = &v;
        assert_eq!(v.into_array(), [9, 18]);

        let v = vec2(0.25f32, 0.5) + vec2(1.0f64, 1.0);
        assert_eq!(v.into_array(), [1.25f64, 1.5]);
    }

    #[test]
    fn scalar_keeps_vector_type() {
        let v: Vec3i = vec3(2i32, 4, 6) * 1.5f32;
        assert_eq!(v.into_array(), [3, 6, 9]);

        let v: Vec3i = vec3(3i32, 4, 5) / 2.0f64;
        assert_eq!(v.into_array(), [1, 2, 2]);

        let v: Vec2f = 2i32 * vec2(0.5f32, 1.5);
        assert_eq!(v.into_array(), [1.0, 3.0]);

        assert_eq!(vec2(1i64, -2) * 3i64, 3i64 * vec2(1i64, -2));
    }

    #[test]
    fn compound_assignment() {
        let mut v = vec3(1.0f32, 2.0, 3.0);
        v += vec3(1i32, 1, 1);
        assert_eq!(v.into_array(), [2.0, 3.0, 4.0]);
        v -= vec3(0.5f32, 0.5, 0.5);
        assert_eq!(v.into_array(), [1.5, 2.5, 3.5]);
        v *= 2i32;
        assert_eq!(v.into_array(), [3.0, 5.0, 7.0]);
        v /= 2.0f64;
        assert_eq!(v.into_array(), [1.5, 2.5, 3.5]);
    }

    #[test]
    fn neg() {
        assert_eq!(-vec2(1i32, -2), vec2(-1i32, 2));
        assert_eq!(-Vec3f::X, vec3(-1.0f32, 0.0, 0.0));
    }

    #[test]
    fn eq_ne_are_separate_reductions() {
        let a = vec3(1i32, 2, 3);
        assert!(a == vec3(1.0f64, 2.0, 3.0));
        assert!(!(a != vec3(1.0f64, 2.0, 3.0)));
        assert!(a != vec3(1i32, 2, 4));
        assert!(!(a == vec3(1i32, 2, 4)));

        let nan = vec2(f32::NAN, 1.0);
        assert!(!(nan == nan));
        assert!(nan != nan);
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero() {
        let _ = vec2(1i32, 2) / 0i32;
    }

    #[test]
    fn matrices() {
        let a = Matrix::from_rows([[1i32, 2], [3, 4]]);
        let b = Matrix::from_rows([[5i32, 6], [7, 8]]);
        assert_eq!(a + b, Matrix::from_rows([[6i32, 8], [10, 12]]));
        assert_eq!(b - a, Matrix::from_rows([[4i32, 4], [4, 4]]));
        assert_eq!(a * 2i32, 2i32 * a);
        assert_eq!((a * 2i32).into_array()[1].into_array(), [6, 8]);

        let mut m = a;
        m[1][0] = 30;
        assert_eq!(m[(1, 0)], 30);
        assert!(m != a);
    }
}
