//! Fixed-size vectors and matrices with type-promoting arithmetic.
//!
//! # Overview
//!
//! The central type is [`Vector<T, N>`], a container of `N` rows of type `T`, where `N` is 2, 3,
//! or 4. A [`Matrix<T, R, C>`] is simply a vector whose rows are vectors, so both share the same
//! construction, access and arithmetic API.
//!
//! All binary operations are implemented once, independent of the dimension, by the componentwise
//! [`engine`]: `+` and `-` combine corresponding rows, `*` and `/` scale every row by a scalar,
//! and `==`, `!=` and the dot product reduce all rows into a single value.
//!
//! Operands may have different element types. The element type of the result is chosen by the
//! [promotion rules](promote), so adding a `Vec2<i32>` and a `Vec2<f32>` yields a `Vec2<f32>`.
//! Scaling is the exception: multiplying or dividing by a scalar always keeps the container's
//! own element type.
//!
//! ```
//! # use math3d::*;
//! let a = vec3(1i32, 2, 3);
//! let b = vec3(0.5f32, 0.5, 0.5);
//! let sum: Vec3f = a + b;
//! assert_eq!(sum, vec3(1.5f32, 2.5, 3.5));
//!
//! let scaled: Vec3i = a * 1.5f32;
//! assert_eq!(scaled, vec3(1i32, 3, 4));
//!
//! assert_eq!(dot_product(a, b), 3.0);
//! assert_eq!(cross_product(Vec3f::X, Vec3f::Y), Vec3f::Z);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Only support dimensions 2 to 4. Dimensions are const generic parameters, and anything else is
//!   rejected when the code is built.
//! - Don't support dynamically-sized vectors and matrices, or matrix inversion and decompositions.
//! - Catch every shape, index and dimension mismatch at compile time. There is no runtime error
//!   path in this library; the only runtime hazard is division by zero, which behaves like it does
//!   for the element type.
//! - Be generic over the element type, but only for the primitive numeric types, which all
//!   implement [`Copy`].

mod approx_eq;
pub mod engine;
mod geometry;
mod matrix;
pub mod promote;
mod traits;
mod vector;

pub use geometry::*;
pub use matrix::*;
pub use promote::{Cast, IntoReal, Promote, Promoted, RealOf, Scalar, Scale, Widen, Widened};
pub use traits::*;
pub use vector::*;
