//! The componentwise operation engine.
//!
//! Every binary operation between two containers of the same shape is expressed as an *operation
//! descriptor* (a type implementing [`RowOp`]) that maps a pair of rows to a result row. The engine
//! applies the descriptor to every row index and assembles the results, in order, into a new
//! container:
//!
//! - [`zip_rows`] combines the rows of two containers.
//! - [`broadcast_rows`] combines every row of a container with one shared scalar.
//! - [`dot_rows`], [`all_rows_eq`], and [`any_row_ne`] fold the per-row results into a single
//!   value.
//!
//! A row is an element for vectors and a row vector for matrices. Since row vectors are themselves
//! [`Vector`]s, applying a descriptor to a matrix recurses into its rows through the same engine.
//!
//! There is no runtime error path: mismatched shapes and element types without a promotion do not
//! type-check.

use crate::{
    promote::{Promote, Promoted, Scale, Widen, Widened},
    traits::Zero,
    Vector,
};

/// An operation descriptor, mapping a left-hand row `L` and a right-hand value `R` to a result.
pub trait RowOp<L, R> {
    type Output;

    fn apply(lhs: L, rhs: R) -> Self::Output;
}

/// The result type of applying the descriptor `Op` to `L` and `R`.
pub type Output<Op, L, R> = <Op as RowOp<L, R>>::Output;

/// Element-wise arithmetic between two values of the same type.
///
/// This is the kernel that the promoting descriptors ([`Add`], [`Subtract`], [`Multiply`]) apply
/// after both operands have been promoted to a common type. It is implemented for all primitive
/// numeric types, and for [`Vector`]s of any type implementing it.
pub trait Elementwise: Copy {
    fn sum(self, rhs: Self) -> Self;
    fn difference(self, rhs: Self) -> Self;
    fn product(self, rhs: Self) -> Self;
    fn equals(self, rhs: Self) -> bool;
    fn not_equals(self, rhs: Self) -> bool;
}

macro_rules! elementwise {
    ($($types:ty),+) => {
        $(
            impl Elementwise for $types {
                #[inline]
                fn sum(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn difference(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn product(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn equals(self, rhs: Self) -> bool {
                    self == rhs
                }

                #[inline]
                fn not_equals(self, rhs: Self) -> bool {
                    self != rhs
                }
            }
        )+
    };
}
elementwise!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T: Elementwise, const N: usize> Elementwise for Vector<T, N> {
    fn sum(self, rhs: Self) -> Self {
        self.zip(rhs).map(|(l, r)| l.sum(r))
    }

    fn difference(self, rhs: Self) -> Self {
        self.zip(rhs).map(|(l, r)| l.difference(r))
    }

    fn product(self, rhs: Self) -> Self {
        self.zip(rhs).map(|(l, r)| l.product(r))
    }

    fn equals(self, rhs: Self) -> bool {
        self.zip(rhs).into_array().into_iter().all(|(l, r)| l.equals(r))
    }

    fn not_equals(self, rhs: Self) -> bool {
        self.zip(rhs)
            .into_array()
            .into_iter()
            .any(|(l, r)| l.not_equals(r))
    }
}

/// Row addition, with promotion.
pub struct Add;

/// Row subtraction, with promotion.
pub struct Subtract;

/// Element-wise row multiplication (Hadamard product), with promotion.
pub struct Multiply;

/// Multiplication of a row by a scalar. The row keeps its own type.
pub struct ScalarMultiply;

/// Division of a row by a scalar. The row keeps its own type.
pub struct ScalarDivide;

impl<L, R> RowOp<L, R> for Add
where
    L: Promote<R>,
    Promoted<L, R>: Elementwise,
{
    type Output = Promoted<L, R>;

    #[inline]
    fn apply(lhs: L, rhs: R) -> Self::Output {
        lhs.promote().sum(L::promote_rhs(rhs))
    }
}

impl<L, R> RowOp<L, R> for Subtract
where
    L: Promote<R>,
    Promoted<L, R>: Elementwise,
{
    type Output = Promoted<L, R>;

    #[inline]
    fn apply(lhs: L, rhs: R) -> Self::Output {
        lhs.promote().difference(L::promote_rhs(rhs))
    }
}

impl<L, R> RowOp<L, R> for Multiply
where
    L: Promote<R>,
    Promoted<L, R>: Elementwise,
{
    type Output = Promoted<L, R>;

    #[inline]
    fn apply(lhs: L, rhs: R) -> Self::Output {
        lhs.promote().product(L::promote_rhs(rhs))
    }
}

impl<L, S> RowOp<L, S> for ScalarMultiply
where
    L: Scale<S>,
{
    type Output = L;

    #[inline]
    fn apply(lhs: L, scalar: S) -> L {
        lhs.scale_mul(scalar)
    }
}

impl<L, S> RowOp<L, S> for ScalarDivide
where
    L: Scale<S>,
{
    type Output = L;

    #[inline]
    fn apply(lhs: L, scalar: S) -> L {
        lhs.scale_div(scalar)
    }
}

/// Applies `Op` to every pair of rows of `lhs` and `rhs`.
///
/// Row `i` of the result is `Op::apply(lhs[i], rhs[i])`; row order matches the inputs.
///
/// # Examples
///
/// ```
/// # use math3d::{*, engine::*};
/// let v = zip_rows::<Subtract, _, _, 3>(vec3(5i32, 5, 5), vec3(1.0f32, 2.0, 3.0));
/// assert_eq!(v, vec3(4.0f32, 3.0, 2.0));
/// ```
pub fn zip_rows<Op, L, R, const N: usize>(
    lhs: Vector<L, N>,
    rhs: Vector<R, N>,
) -> Vector<Output<Op, L, R>, N>
where
    Op: RowOp<L, R>,
{
    lhs.zip(rhs).map(|(l, r)| Op::apply(l, r))
}

/// Applies `Op` to every row of `lhs`, sharing the same `scalar` across all rows.
pub fn broadcast_rows<Op, L, S, const N: usize>(
    lhs: Vector<L, N>,
    scalar: S,
) -> Vector<Output<Op, L, S>, N>
where
    Op: RowOp<L, S>,
    S: Copy,
{
    lhs.map(|row| Op::apply(row, scalar))
}

/// Sums the products of all pairs of elements.
///
/// Both elements are promoted and then widened, so the sum is accumulated in
/// `Widened<Promoted<L, R>>`.
pub fn dot_rows<L, R, const N: usize>(
    lhs: Vector<L, N>,
    rhs: Vector<R, N>,
) -> Widened<Promoted<L, R>>
where
    L: Promote<R>,
    Promoted<L, R>: Widen,
{
    lhs.zip(rhs)
        .into_array()
        .into_iter()
        .fold(<Widened<Promoted<L, R>> as Zero>::ZERO, |acc, (l, r)| {
            acc + l.promote().widen() * L::promote_rhs(r).widen()
        })
}

/// Returns `true` if every row of `lhs` is equal to the corresponding row of `rhs`.
///
/// Stops at the first row that differs.
pub fn all_rows_eq<L, R, const N: usize>(lhs: Vector<L, N>, rhs: Vector<R, N>) -> bool
where
    L: Promote<R>,
    Promoted<L, R>: Elementwise,
{
    lhs.zip(rhs)
        .into_array()
        .into_iter()
        .all(|(l, r)| l.promote().equals(L::promote_rhs(r)))
}

/// Returns `true` if any row of `lhs` differs from the corresponding row of `rhs`.
///
/// Stops at the first row that differs.
pub fn any_row_ne<L, R, const N: usize>(lhs: Vector<L, N>, rhs: Vector<R, N>) -> bool
where
    L: Promote<R>,
    Promoted<L, R>: Elementwise,
{
    lhs.zip(rhs)
        .into_array()
        .into_iter()
        .any(|(l, r)| l.promote().not_equals(L::promote_rhs(r)))
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Matrix, Vec3f};

    use super::*;

    #[test]
    fn row_order() {
        let v = zip_rows::<Add, _, _, 3>(vec3(1i32, 2, 3), vec3(10i32, 20, 30));
        assert_eq!(v.into_array(), [11, 22, 33]);

        let v = broadcast_rows::<ScalarMultiply, _, _, 3>(vec3(1i32, 2, 3), 2i32);
        assert_eq!(v.into_array(), [2, 4, 6]);
    }

    #[test]
    fn promotes() {
        let v: Vec3f = zip_rows::<Multiply, _, _, 3>(vec3(1i32, 2, 3), vec3(0.5f32, 0.5, 0.5));
        assert_eq!(v.into_array(), [0.5, 1.0, 1.5]);
    }

    #[test]
    fn scalar_ops_keep_row_type() {
        let v = broadcast_rows::<ScalarDivide, _, _, 2>(vec2(7i32, 9), 2.0f64);
        assert_eq!(v.into_array(), [3, 4]);
    }

    #[test]
    fn matrix_rows_recurse() {
        let a = Matrix::from_rows([[1i32, 2], [3, 4]]);
        let b = Matrix::from_rows([[0.5f64, 0.5], [0.5, 0.5]]);
        let m = zip_rows::<Add, _, _, 2>(a, b);
        assert_eq!(m.x.into_array(), [1.5, 2.5]);
        assert_eq!(m.y.into_array(), [3.5, 4.5]);
    }

    #[test]
    fn reductions() {
        assert_eq!(dot_rows(vec3(1i32, 3, -5), vec3(4i32, -2, -1)), 3);
        assert_eq!(dot_rows(vec2(1i32, 2), vec2(0.5f32, 0.25)), 1.0);
        assert_eq!(dot_rows(vec2(200i16, 0), vec2(200i16, 0)), 40_000i32);
        assert_eq!(dot_rows(vec2(255u8, 255), vec2(255u8, 255)), 130_050i32);

        assert!(all_rows_eq(vec2(1i32, 2), vec2(1.0f32, 2.0)));
        assert!(!all_rows_eq(vec2(1i32, 2), vec2(1i32, 3)));
        assert!(any_row_ne(vec2(1i32, 2), vec2(1i32, 3)));
        assert!(!any_row_ne(vec3(0i16, 0, 0), vec3(0i16, 0, 0)));
    }

    #[test]
    fn nan_is_unequal() {
        let v = vec2(f32::NAN, 0.0);
        assert!(!all_rows_eq(v, v));
        assert!(any_row_ne(v, v));
    }
}
