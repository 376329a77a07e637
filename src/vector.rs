use std::{array, fmt};

use crate::{
    geometry::{self, Cross},
    promote::{Cast, Promote, Promoted, RealOf, Scalar, Widen, Widened},
    traits::{One, Zero},
};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// Compile-time indices of the named components, for use with [`Vector::get`].
///
/// ```
/// # use math3d::*;
/// use math3d::index::*;
///
/// let v = vec3(1i32, 2, 3);
/// assert_eq!(v.get::<Z>(), 3);
/// ```
pub mod index {
    /// Index of the `x` component (the first row).
    pub const X: usize = 0;
    /// Index of the `y` component (the second row).
    pub const Y: usize = 1;
    /// Index of the `z` component (the third row).
    pub const Z: usize = 2;
    /// Index of the `w` component (the fourth row).
    pub const W: usize = 3;
}

/// A fixed-size container of `N` rows of type `T`.
///
/// If `T` is a scalar, this is an `N`-dimensional vector. If `T` is itself a [`Vector`], this is a
/// matrix whose rows are vectors (see [`Matrix`][crate::Matrix]). `N` must be 2, 3, or 4.
///
/// There is no distinction between row and column vectors: the orientation of a vector only
/// depends on the context it is used in.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::new`] and the [`From`] impl create a vector from an array.
/// - [`Vector::splat`] creates a vector by copying the given value into each row.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each row.
/// - The [`Default`] implementation initializes each row with its default value, and
///   [`Vector::ZERO`] is a vector containing all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing in the
///   given direction.
///
/// Any other dimension is rejected when the code is built:
///
/// ```compile_fail
/// # use math3d::*;
/// let v = Vector::new([1, 2, 3, 4, 5]);
/// ```
///
/// # Element Access
///
/// - Rows can be accessed as fields `x`, `y`, `z`, or `w`.
/// - [`Vector::get`] and [`Vector::get_mut`] take the row index as a const generic parameter,
///   and refuse to compile when it is out of bounds. Dimension-generic code should use these.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   rows.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

/// Evaluated at monomorphization time to reject out-of-range const indices.
struct IndexCheck<const I: usize, const N: usize>;

impl<const I: usize, const N: usize> IndexCheck<I, N> {
    const IN_BOUNDS: () = assert!(I < N, "component index out of bounds");
}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each row initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all rows.
    pub const ZERO: Self = Self::new([T::ZERO; N]);
}

/// Lets matrices use [`Vector::ZERO`], since their rows are vectors.
impl<T: Zero, const N: usize> Zero for Vector<T, N> {
    const ZERO: Self = Self::new([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    const DIMENSION_OK: () = assert!(
        N >= 2 && N <= 4,
        "vectors and matrices must have 2, 3, or 4 rows"
    );

    /// Creates a vector from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(Vector::new([1i32, 2, 3]), vec3(1i32, 2, 3));
    /// ```
    #[inline]
    pub const fn new(rows: [T; N]) -> Self {
        let () = Self::DIMENSION_OK;
        Self(rows)
    }

    /// Creates a vector with each row initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let v = Vector::splat(2i32);
    /// assert_eq!(v, vec3(2i32, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self::new([elem; N])
    }

    /// Creates a vector where each row is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let v: Vec3i = Vector::from_fn(|i| i as i32 + 100);
    /// assert_eq!(v, vec3(100i32, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::new(array::from_fn(cb))
    }

    /// Applies a closure to each row, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let v = vec3(1i32, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10i32, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let v = vec2(1i32, 2).zip(vec2("1", "2"));
    /// assert_eq!(v.into_array(), [(1, "1"), (2, "2")]);
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a copy of the row at index `I`.
    ///
    /// The index is checked when the code is built, so this never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let v = vec2(7i32, 8);
    /// assert_eq!(v.get::<0>(), v.x);
    /// assert_eq!(v.get::<1>(), v.y);
    /// ```
    ///
    /// ```compile_fail
    /// # use math3d::*;
    /// let v = vec2(7i32, 8);
    /// v.get::<3>();
    /// ```
    #[inline]
    pub fn get<const I: usize>(&self) -> T
    where
        T: Copy,
    {
        let () = IndexCheck::<I, N>::IN_BOUNDS;
        self.0[I]
    }

    /// Returns a mutable reference to the row at index `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let mut v = vec3(1i32, 2, 3);
    /// *v.get_mut::<2>() = 30;
    /// assert_eq!(v, vec3(1i32, 2, 30));
    /// ```
    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> &mut T {
        let () = IndexCheck::<I, N>::IN_BOUNDS;
        &mut self.0[I]
    }

    /// Returns a reference to the underlying rows as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying rows as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(vec3(1i32, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying rows as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(vec3(1i32, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Explicitly converts each element to type `U`, with `as` semantics.
    ///
    /// Vectors of different element types never convert into each other implicitly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let v: Vec2i = vec2(1.9f32, -2.5).cast();
    /// assert_eq!(v, vec2(1i32, -2));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(<T as Cast<U>>::cast)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// See [`dot_product`][crate::dot_product].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let a = vec3(1i32, 3, -5);
    /// let b = vec3(4i32, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot<U>(self, other: Vector<U, N>) -> Widened<Promoted<T, U>>
    where
        T: Promote<U>,
        Promoted<T, U>: Widen,
    {
        geometry::dot_product(self, other)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(vec2(4i32, 0).length_squared(), 16);
    /// assert_eq!(vec2(300u16, 400).length_squared(), 250_000i32);
    /// ```
    pub fn length_squared(self) -> Widened<T>
    where
        T: Scalar,
    {
        geometry::length_squared(self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// assert_eq!(vec2(3i32, 4).length(), 5.0f64);
    /// ```
    pub fn length(self) -> RealOf<T>
    where
        T: Scalar,
    {
        geometry::length(self)
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// See [`unit`][crate::unit].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let z = vec3(0.0f64, 0.0, 4.0).unit();
    /// assert_eq!(z, vec3(0.0f64, 0.0, 1.0));
    /// ```
    pub fn unit(self) -> Vector<RealOf<T>, N>
    where
        T: Scalar,
    {
        geometry::unit(self)
    }

    /// Computes the element-wise (Hadamard) product of `self` and `other`.
    ///
    /// See [`componentwise_product`][crate::componentwise_product].
    pub fn componentwise_mul<U>(self, other: Vector<U, N>) -> Vector<Promoted<T, U>, N>
    where
        T: Promote<U>,
        Promoted<T, U>: crate::engine::Elementwise,
    {
        geometry::componentwise_product(self, other)
    }
}

impl<T> Vector<T, 2> {
    /// Returns the left-hand perpendicular of this vector, `(-y, x)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(vec2(1i32, 2).normal(), vec2(-2i32, 1));
    /// assert_eq!(Vec2f::X.normal(), Vec2f::Y);
    /// ```
    pub fn normal(self) -> Self
    where
        T: std::ops::Neg<Output = T>,
    {
        let [x, y] = self.0;
        vec2(-y, x)
    }

    /// Computes the 2D cross product of `self` and `other`, a scalar.
    ///
    /// See [`cross_product`][crate::cross_product].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// assert_eq!(Vec2i::X.cross(Vec2i::Y), 1);
    /// assert_eq!(Vec2i::Y.cross(Vec2f::X), -1.0);
    /// ```
    pub fn cross<U>(self, other: Vector<U, 2>) -> <Self as Cross<Vector<U, 2>>>::Output
    where
        Self: Cross<Vector<U, 2>>,
    {
        geometry::cross_product(self, other)
    }
}

impl<T> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross<U>(self, other: Vector<U, 3>) -> <Self as Cross<Vector<U, 3>>>::Output
    where
        Self: Cross<Vector<U, 3>>,
    {
        geometry::cross_product(self, other)
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two rows.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three rows.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four rows.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::index::{W, X, Y, Z};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0i32, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v.get::<X>(), 0);
        assert_eq!(v.get::<Y>(), 1);

        v.x = 777;
        assert_eq!(v.get::<X>(), 777);
        assert_eq!(v[0], 777);
        *v.get_mut::<Y>() = 9;
        assert_eq!(v.y, 9);
        assert_eq!(v.into_array(), [777, 9]);
    }

    #[test]
    fn get_matches_fields() {
        let v = vec4(1i16, 2, 3, 4);
        assert_eq!(v.get::<X>(), v.x);
        assert_eq!(v.get::<Y>(), v.y);
        assert_eq!(v.get::<Z>(), v.z);
        assert_eq!(v.get::<W>(), v.w);
    }

    #[test]
    fn zero() {
        let z = Vec4d::ZERO;
        assert_eq!(z.into_array(), [0.0; 4]);
        assert_eq!(Vec3i::default(), Vec3i::ZERO);
        assert_eq!(Vector::<u8, 2>::default().into_array(), [0, 0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{}", vec2(vec2(1i32, 2), vec2(3, 4))), "((1, 2), (3, 4))");
    }

    #[test]
    fn cast() {
        let v: Vec3f = vec3(1i32, -2, 3).cast();
        assert_eq!(v.into_array(), [1.0, -2.0, 3.0]);

        let v: Vector<u8, 2> = vec2(2.75f64, 255.9).cast();
        assert_eq!(v.into_array(), [2, 255]);
    }

    #[test]
    fn zip() {
        let v = vec4(1i32, 2, 3, 4).zip(vec4('a', 'b', 'c', 'd'));
        assert_eq!(v.into_array(), [(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')]);

        let m = crate::Matrix::from_rows([[1i32, 2], [3, 4]]).zip(vec2(5u8, 6));
        assert_eq!(m[1], (vec2(3i32, 4), 6u8));
    }

    #[test]
    fn normal() {
        let v = vec2(3.0f32, -1.5);
        assert_eq!(v.normal(), vec2(1.5f32, 3.0));
        assert_eq!(v.dot(v.normal()), 0.0);
        assert_eq!(v.normal().normal(), -v);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1i32, 3, -5).dot(vec3(4i32, -2, -1)), 3);
        assert_eq!(vec3(1i32, 3, -5).dot(vec3(1i32, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3i::X.cross(Vec3i::Y), Vec3i::Z);
        assert_eq!(Vec3i::Z.cross(Vec3i::X), Vec3i::Y);
        assert_eq!(Vec3i::Y.cross(Vec3i::X), -Vec3i::Z);
        assert_eq!(vec2(2i32, 0).cross(vec2(0i32, 3)), 6);
    }
}
