use std::ops::{Index, IndexMut};

use crate::Vector;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A single row of a [`Matrix`], a vector with `C` elements.
pub type RowVector<T, const C: usize> = Vector<T, C>;

/// A matrix with `R` rows and `C` columns, and element type `T`.
///
/// A matrix is a [`Vector`] whose rows are themselves vectors, so everything that works on vectors
/// of rows works on matrices too: construction, the `x`/`y`/`z`/`w` row fields, [`Vector::get`],
/// element-wise `+` and `-` with promotion, scaling by a scalar, and `==`/`!=`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] creates a matrix from an array of rows, each of which can be an array or
///   a [`Vector`].
/// - [`Vector::ZERO`] and the [`Default`] impl create a matrix with every element set to 0.
///
/// # Element Access
///
/// Rows are accessed with [`Matrix::row`] or with the named fields. Individual elements can be read
/// with [`Matrix::element`], or accessed through the [`Index`] and [`IndexMut`] impls for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row*, the second is the *column*.
///
/// ```
/// # use math3d::*;
/// let mut mat = Matrix::from_rows([
///     [0i32, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat.element(1, 0), 2);
/// assert_eq!(mat.y.y, 3);
/// ```
///
/// Containers of different shapes can not be combined:
///
/// ```compile_fail
/// # use math3d::*;
/// let a: Mat2<i32> = Matrix::ZERO;
/// let b: Mat2x3<i32> = Matrix::ZERO;
/// let _ = a + b;
/// ```
pub type Matrix<T, const R: usize, const C: usize> = Vector<RowVector<T, C>, R>;

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let m = Matrix::from_rows([
    ///     [1i32, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(m.row::<1>(), vec3(4i32, 5, 6));
    ///
    /// let m = Matrix::from_rows([Vec2f::X, Vec2f::Y]);
    /// assert_eq!(m.element(0, 0), 1.0);
    /// ```
    pub fn from_rows<U: Into<RowVector<T, C>>>(rows: [U; R]) -> Self {
        Vector::new(rows.map(Into::into))
    }

    /// Returns a copy of row `I`. The index is checked when the code is built.
    #[inline]
    pub fn row<const I: usize>(&self) -> RowVector<T, C>
    where
        T: Copy,
    {
        self.get::<I>()
    }

    /// Returns a copy of the element at `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn element(&self, row: usize, col: usize) -> T
    where
        T: Copy,
    {
        self[(row, col)]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self[row][col]
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn add_commutes() {
        let a = Matrix::from_rows([[1i32, 2], [3, 4]]);
        let b = Matrix::from_rows([[10i32, 20], [30, 40]]);
        let sum = Matrix::from_rows([[11i32, 22], [33, 44]]);
        assert_eq!(a + b, sum);
        assert_eq!(b + a, sum);
        assert!(!(a + b != sum));
    }

    #[test]
    fn sub() {
        let a = Matrix::from_rows([[1i32, 2], [3, 4]]);
        let b = Matrix::from_rows([[10i32, 20], [30, 40]]);
        assert_eq!(b - a, Matrix::from_rows([[9i32, 18], [27, 36]]));
        assert_eq!(a - b, Matrix::from_rows([[-9i32, -18], [-27, -36]]));
    }

    #[test]
    fn promotes_like_vectors() {
        let a: Mat2<i16> = Matrix::from_rows([[1, 2], [3, 4]]);
        let b: Mat2f = Matrix::from_rows([[0.5, 0.5], [0.5, 0.5]]);
        let sum: Mat2f = a + b;
        assert_eq!(sum, Matrix::from_rows([[1.5f32, 2.5], [3.5, 4.5]]));
        assert_eq!(sum, b + a);
    }

    #[test]
    fn scalar_keeps_matrix_type() {
        let m = Matrix::from_rows([[2i32, 4], [6, 8]]);
        let scaled: Mat2<i32> = m * 0.5f64;
        assert_eq!(scaled, Matrix::from_rows([[1i32, 2], [3, 4]]));
        assert_eq!(0.5f64 * m, scaled);
        assert_eq!(m / 2i32, scaled);
        assert_eq!(m / 2.0f32, scaled);

        let m: Mat2f = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let scaled: Mat2f = 2i32 * m;
        assert_eq!(scaled.row::<1>(), vec2(6.0f32, 8.0));
    }

    #[test]
    fn rectangular() {
        let m: Mat2x3<i32> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.element(1, 2), 6);
        assert_eq!(m.x.z, 3);
        assert_eq!(m.get::<1>().get::<0>(), 4);

        let zero = Mat4x3::<f64>::ZERO;
        assert_eq!(zero + zero, zero);
        assert_eq!(zero.element(3, 2), 0.0);
    }

    #[test]
    fn fmt() {
        let m = Matrix::from_rows([[1i32, 2], [3, 4]]);
        assert_eq!(format!("{m:?}"), "((1, 2), (3, 4))");
    }
}
