/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The `x()`/`y()`/`z()`/`w()` coordinate accessors.
//!
//! These exist only on the dimensions where the names make sense; a `V5`
//! simply has no `x()`, and asking for `w()` on a `V3` is a type error
//! rather than a runtime one.  The getters read through whatever storage
//! the vector has, so `m.row_span(1).y()` does exactly what it looks like.

use crate::storage::{Storage, StorageMut};
use crate::types::{Vector, V};

macro_rules! impl_named_accessors {
    ($N:literal; $($idx:tt => $name:ident / $setter:ident),*) => {
        impl<T, S: Storage<T, $N>> Vector<T, $N, S> {
            $(
                #[inline(always)]
                pub fn $name(&self) -> T
                where T: Copy,
                { *self.storage.index($idx) }
            )*
        }

        impl<T, S: StorageMut<T, $N>> Vector<T, $N, S> {
            $(
                #[inline(always)]
                pub fn $setter(&mut self, value: T)
                { *self.storage.index_mut($idx) = value; }
            )*
        }

        impl<T> V<T, $N> {
            /// Construct from named components.
            #[inline(always)]
            pub fn new($($name: T),*) -> Self
            { V::from_array([$($name),*]) }
        }
    };
}

impl_named_accessors!{2; 0 => x / set_x, 1 => y / set_y}
impl_named_accessors!{3; 0 => x / set_x, 1 => y / set_y, 2 => z / set_z}
impl_named_accessors!{4; 0 => x / set_x, 1 => y / set_y, 2 => z / set_z, 3 => w / set_w}

#[cfg(test)]
mod tests {
    use crate::types::{V2, V3, V4, VectorSpan3, VectorSpanMut3};

    #[test]
    fn getters_match_indexing() {
        let v = V4::new(1, 2, 3, 4);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (v[0], v[1], v[2], v[3]));
        assert_eq!(V2::new(5, 6).y(), 6);
        assert_eq!(V3::new(5, 6, 7).z(), 7);
    }

    #[test]
    fn setters_write_components() {
        let mut v = V3::new(0.0, 0.0, 0.0);
        v.set_x(1.5);
        v.set_z(-2.0);
        assert_eq!(v, V3::new(1.5, 0.0, -2.0));
    }

    #[test]
    fn accessors_read_through_spans() {
        let buffer = [10, 20, 30, 40, 50, 60];
        let v = VectorSpan3::<i32>::new(&buffer, 1, 2);
        assert_eq!((v.x(), v.y(), v.z()), (20, 40, 60));

        let mut buffer = [0; 3];
        let mut v = VectorSpanMut3::<i32>::from_slice(&mut buffer);
        v.set_y(7);
        assert_eq!(buffer, [0, 7, 0]);
    }
}
