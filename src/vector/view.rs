//! Named access to the rows of 2-, 3- and 4-row vectors.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

/// The rows of a [`Vec2`][crate::Vec2], by name.
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

/// The rows of a [`Vec3`][crate::Vec3], by name.
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

/// The rows of a [`Vec4`][crate::Vec4], by name.
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// `Vector` is `repr(transparent)` over `[T; N]`, and the views are `repr(C)` with `N` fields of
// type `T` followed by a ZST, so both have identical layout.
macro_rules! named_rows {
    ($($n:literal => $view:ident),+) => {
        $(
            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

named_rows!(2 => XY, 3 => XYZ, 4 => XYZW);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Matrix};

    #[test]
    fn fields_alias_rows() {
        let mut v = vec4(1u8, 2, 3, 4);
        assert_eq!((v.x, v.y, v.z, v.w), (1, 2, 3, 4));
        v.z = 30;
        assert_eq!(v.into_array(), [1, 2, 30, 4]);

        let mut v = vec3(0.5f64, 1.5, 2.5);
        v.y += 1.0;
        assert_eq!(v.as_array(), &[0.5, 2.5, 2.5]);
    }

    #[test]
    fn matrix_rows() {
        let mut m = Matrix::from_rows([[1i32, 2], [3, 4]]);
        assert_eq!(m.y.x, 3);
        m.x = vec2(10, 20);
        assert_eq!(m.x.y, 20);
    }
}
