/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Operator impls for [`Vector`].
//!
//! Binary ops accept any mix of storage policies and any mix of values and
//! references, and always produce an *owning* vector; only the compound
//! assignment forms write through the left operand's storage.  Scalar
//! multiplication works in both orders (the scalar-on-the-left form has to
//! be spelled out per primitive type thanks to the orphan rules).

use crate::traits::{Semiring, Ring, Field};
use crate::storage::{Storage, StorageMut};
use crate::types::{Vector, V};
use std::ops::{Add, Sub, Neg, Mul, Div};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

// ---------------------------------------------------------------------------
// vector + vector, vector - vector

// The ref-ref impl does the work; the other three combos defer to it.
macro_rules! impl_v_binop_v {
    ($Op:ident::$op:ident, $Tier:ident) => {
        impl<'a, 'b, T, const N: usize, S1, S2> $Op<&'b Vector<T, N, S2>> for &'a Vector<T, N, S1>
        where T: $Tier, S1: Storage<T, N>, S2: Storage<T, N>,
        {
            type Output = V<T, N>;

            #[inline]
            fn $op(self, other: &'b Vector<T, N, S2>) -> V<T, N> {
                V::from_array(std::array::from_fn(|i| {
                    $Op::$op(*self.storage.index(i), *other.storage.index(i))
                }))
            }
        }

        impl<'b, T, const N: usize, S1, S2> $Op<&'b Vector<T, N, S2>> for Vector<T, N, S1>
        where T: $Tier, S1: Storage<T, N>, S2: Storage<T, N>,
        {
            type Output = V<T, N>;

            #[inline]
            fn $op(self, other: &'b Vector<T, N, S2>) -> V<T, N>
            { $Op::$op(&self, other) }
        }

        impl<'a, T, const N: usize, S1, S2> $Op<Vector<T, N, S2>> for &'a Vector<T, N, S1>
        where T: $Tier, S1: Storage<T, N>, S2: Storage<T, N>,
        {
            type Output = V<T, N>;

            #[inline]
            fn $op(self, other: Vector<T, N, S2>) -> V<T, N>
            { $Op::$op(self, &other) }
        }

        impl<T, const N: usize, S1, S2> $Op<Vector<T, N, S2>> for Vector<T, N, S1>
        where T: $Tier, S1: Storage<T, N>, S2: Storage<T, N>,
        {
            type Output = V<T, N>;

            #[inline]
            fn $op(self, other: Vector<T, N, S2>) -> V<T, N>
            { $Op::$op(&self, &other) }
        }
    };
}

impl_v_binop_v!{Add::add, Semiring}
impl_v_binop_v!{Sub::sub, Ring}

// ---------------------------------------------------------------------------
// -vector

impl<'a, T, const N: usize, S> Neg for &'a Vector<T, N, S>
where T: Ring, S: Storage<T, N>,
{
    type Output = V<T, N>;

    #[inline]
    fn neg(self) -> V<T, N>
    { V::from_array(std::array::from_fn(|i| -*self.storage.index(i))) }
}

impl<T, const N: usize, S> Neg for Vector<T, N, S>
where T: Ring, S: Storage<T, N>,
{
    type Output = V<T, N>;

    #[inline]
    fn neg(self) -> V<T, N>
    { -&self }
}

// ---------------------------------------------------------------------------
// vector * scalar, vector / scalar

macro_rules! impl_v_binop_scalar {
    ($Op:ident::$op:ident, $Tier:ident) => {
        impl<'a, T, const N: usize, S> $Op<T> for &'a Vector<T, N, S>
        where T: $Tier, S: Storage<T, N>,
        {
            type Output = V<T, N>;

            #[inline]
            fn $op(self, scalar: T) -> V<T, N> {
                V::from_array(std::array::from_fn(|i| {
                    $Op::$op(*self.storage.index(i), scalar)
                }))
            }
        }

        impl<T, const N: usize, S> $Op<T> for Vector<T, N, S>
        where T: $Tier, S: Storage<T, N>,
        {
            type Output = V<T, N>;

            #[inline]
            fn $op(self, scalar: T) -> V<T, N>
            { $Op::$op(&self, scalar) }
        }
    };
}

impl_v_binop_scalar!{Mul::mul, Semiring}
impl_v_binop_scalar!{Div::div, Field}

// scalar * vector.  This cannot be written generically (the impl would be
// for the foreign type parameter `T`), so it is stamped out for each
// primitive scalar.
macro_rules! impl_scalar_mul_v {
    ($($T:ty)*) => {$(
        impl<'b, const N: usize, S> Mul<&'b Vector<$T, N, S>> for $T
        where S: Storage<$T, N>,
        {
            type Output = V<$T, N>;

            #[inline]
            fn mul(self, vector: &'b Vector<$T, N, S>) -> V<$T, N>
            { vector * self }
        }

        impl<const N: usize, S> Mul<Vector<$T, N, S>> for $T
        where S: Storage<$T, N>,
        {
            type Output = V<$T, N>;

            #[inline]
            fn mul(self, vector: Vector<$T, N, S>) -> V<$T, N>
            { &vector * self }
        }
    )*};
}

impl_scalar_mul_v!{
    f32 f64
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
}

// ---------------------------------------------------------------------------
// vector += vector, vector -= vector

// These mutate in place through the storage policy, so `+=` on a span
// writes into the aliased buffer.
macro_rules! impl_v_assign_v {
    ($Op:ident::$op:ident via $Base:ident::$base:ident, $Tier:ident) => {
        impl<'b, T, const N: usize, S1, S2> $Op<&'b Vector<T, N, S2>> for Vector<T, N, S1>
        where T: $Tier, S1: StorageMut<T, N>, S2: Storage<T, N>,
        {
            #[inline]
            fn $op(&mut self, other: &'b Vector<T, N, S2>) {
                for i in 0..N {
                    let value = $Base::$base(*self.storage.index(i), *other.storage.index(i));
                    *self.storage.index_mut(i) = value;
                }
            }
        }

        impl<T, const N: usize, S1, S2> $Op<Vector<T, N, S2>> for Vector<T, N, S1>
        where T: $Tier, S1: StorageMut<T, N>, S2: Storage<T, N>,
        {
            #[inline]
            fn $op(&mut self, other: Vector<T, N, S2>)
            { $Op::$op(self, &other) }
        }
    };
}

impl_v_assign_v!{AddAssign::add_assign via Add::add, Semiring}
impl_v_assign_v!{SubAssign::sub_assign via Sub::sub, Ring}

// ---------------------------------------------------------------------------
// vector *= scalar, vector /= scalar

macro_rules! impl_v_assign_scalar {
    ($Op:ident::$op:ident via $Base:ident::$base:ident, $Tier:ident) => {
        impl<T, const N: usize, S> $Op<T> for Vector<T, N, S>
        where T: $Tier, S: StorageMut<T, N>,
        {
            #[inline]
            fn $op(&mut self, scalar: T) {
                for i in 0..N {
                    let value = $Base::$base(*self.storage.index(i), scalar);
                    *self.storage.index_mut(i) = value;
                }
            }
        }
    };
}

impl_v_assign_scalar!{MulAssign::mul_assign via Mul::mul, Semiring}
impl_v_assign_scalar!{DivAssign::div_assign via Div::div, Field}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::types::{V3, VectorSpan3, VectorSpanMut3};

    #[test]
    fn binary_ops_take_any_combination() {
        let a = V3::new(1, 2, 3);
        let b = V3::new(10, 20, 30);
        let expected = V3::new(11, 22, 33);
        assert_eq!(a + b, expected);
        assert_eq!(a + &b, expected);
        assert_eq!(&a + b, expected);
        assert_eq!(&a + &b, expected);
        assert_eq!(b - a, V3::new(9, 18, 27));
    }

    #[test]
    fn mixed_policies_produce_owning_vectors() {
        let buffer = [1, 2, 3, 4, 5, 6];
        let v = VectorSpan3::<i32>::new(&buffer, 0, 2);
        let sum = &v + V3::new(10, 10, 10);
        assert_eq!(sum, V3::new(11, 13, 15));
        // the buffer is untouched
        assert_eq!(buffer, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn negating_a_span_copies_out() {
        let mut buffer = [1, 2, 3];
        let negated = -VectorSpanMut3::<i32>::from_slice(&mut buffer);
        assert_eq!(negated, V3::new(-1, -2, -3));
        buffer[0] = 100;
        assert_eq!(negated[0], -1);
    }

    #[test]
    fn scalar_mul_commutes() {
        let v = V3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, V3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * v, V3::new(2.0, 4.0, 6.0));
        assert_eq!(v / 2.0, V3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn compound_assignment_writes_through_spans() {
        let mut buffer = [1, 2, 3, 4, 5, 6];
        {
            let mut v = VectorSpanMut3::<i32>::new(&mut buffer, 0, 2);
            v += V3::new(10, 10, 10);
            v[0] -= 1;
        }
        assert_eq!(buffer, [10, 2, 13, 4, 15, 6]);

        let mut v = V3::new(2.0, 4.0, 8.0);
        v *= 2.0;
        v /= 4.0;
        v -= V3::new(1.0, 2.0, 4.0);
        assert_eq!(v, V3::new(0.0, 0.0, 0.0));
    }
}
