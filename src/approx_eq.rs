//! Approximate equality of floating-point vectors and matrices.
//!
//! [`Vector`] implements the [`approx`] crate's comparison traits element-wise, whenever its
//! element type does. Since matrix rows are vectors, this extends to matrices.
//!
//! ```
//! # use math3d::*;
//! use approx::assert_relative_eq;
//!
//! let v = vec2(0.1f32, 0.2) + vec2(0.2f32, 0.1);
//! assert_relative_eq!(v, vec2(0.3f32, 0.3));
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Vector;

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
    Self: PartialEq,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(l, r)| l.abs_diff_eq(r, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
    Self: PartialEq,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(l, r)| l.relative_eq(r, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
    Self: PartialEq,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(l, r)| l.ulps_eq(r, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use approx::{abs_diff_eq, assert_abs_diff_eq, assert_ulps_eq, relative_ne};

    use crate::*;

    #[test]
    fn vectors() {
        let third = vec3(1.0f64, 2.0, 3.0) / 3.0f64;
        assert_ulps_eq!(third * 3.0f64, vec3(1.0f64, 2.0, 3.0));
        assert!(relative_ne!(Vec3d::X, Vec3d::Y));
        assert!(abs_diff_eq!(Vec2f::X, vec2(1.05f32, 0.0), epsilon = 0.1));
        assert!(!abs_diff_eq!(Vec2f::X, vec2(1.05f32, 0.0), epsilon = 0.01));
    }

    #[test]
    fn matrices() {
        let m: Mat2f = Matrix::from_rows([[0.1, 0.2], [0.3, 0.4]]);
        let sum = m + m + m;
        assert_abs_diff_eq!(
            sum,
            Matrix::from_rows([[0.3f32, 0.6], [0.9, 1.2]]),
            epsilon = 1e-6
        );
    }
}
