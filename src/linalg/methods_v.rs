/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Inherent methods and free functions on vectors.

use crate::traits::{Semiring, Ring, Field};
use crate::storage::{Storage, StorageMut};
use crate::types::{Vector, V};

/// Construct an owning vector from a function of the component index.
#[inline]
pub fn from_fn<T, const N: usize, F>(mut f: F) -> V<T, N>
where F: FnMut(usize) -> T,
{ V::from_array(std::array::from_fn(|i| f(i))) }

/// Dot product of two same-dimension vectors, over any storage policies.
#[inline]
pub fn dot<T, const N: usize, S1, S2>(a: &Vector<T, N, S1>, b: &Vector<T, N, S2>) -> T
where T: Semiring, S1: Storage<T, N>, S2: Storage<T, N>,
{
    (0..N).fold(T::zero(), |acc, i| {
        acc + *a.storage.index(i) * *b.storage.index(i)
    })
}

/// Right-handed cross product.  Only defined in three dimensions.
#[inline]
pub fn cross<T, S1, S2>(a: &Vector<T, 3, S1>, b: &Vector<T, 3, S2>) -> V<T, 3>
where T: Ring, S1: Storage<T, 3>, S2: Storage<T, 3>,
{
    V::from_array([
        a.y() * b.z() - a.z() * b.y(),
        a.z() * b.x() - a.x() * b.z(),
        a.x() * b.y() - a.y() * b.x(),
    ])
}

impl<T, const N: usize, S: Storage<T, N>> Vector<T, N, S> {
    /// Apply `f` to each component, producing an owning vector.
    #[inline]
    pub fn map<U, F>(&self, mut f: F) -> V<U, N>
    where T: Copy, F: FnMut(T) -> U,
    { V::from_array(std::array::from_fn(|i| f(*self.storage.index(i)))) }

    /// Sum of products of corresponding components.
    #[inline]
    pub fn dot<S2>(&self, other: &Vector<T, N, S2>) -> T
    where T: Semiring, S2: Storage<T, N>,
    { dot(self, other) }

    /// Squared euclidean norm.
    #[inline]
    pub fn sqnorm(&self) -> T
    where T: Semiring,
    { dot(self, self) }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> T
    where T: Field,
    { self.sqnorm().sqrt() }
}

impl<T, S: Storage<T, 3>> Vector<T, 3, S> {
    /// Right-handed cross product.
    #[inline]
    pub fn cross<S2>(&self, other: &Vector<T, 3, S2>) -> V<T, 3>
    where T: Ring, S2: Storage<T, 3>,
    { cross(self, other) }
}

impl<T, const N: usize> V<T, N> {
    /// Componentwise copy out of any same-dimension vector, converting
    /// each component with `Into`.
    #[inline]
    pub fn from_vector<U, S>(source: &Vector<U, N, S>) -> Self
    where U: Copy + Into<T>, S: Storage<U, N>,
    { V::from_array(std::array::from_fn(|i| (*source.storage.index(i)).into())) }
}

impl<T, const N: usize, S: StorageMut<T, N>> Vector<T, N, S> {
    /// Componentwise in-place assignment from any same-dimension vector,
    /// converting each component with `Into`.  On a span this writes into
    /// the aliased buffer.
    #[inline]
    pub fn assign_from<U, S2>(&mut self, source: &Vector<U, N, S2>)
    where U: Copy + Into<T>, S2: Storage<U, N>,
    {
        for i in 0..N {
            *self.storage.index_mut(i) = (*source.storage.index(i)).into();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{V, V3, VectorSpan3, VectorSpanMut3};
    use crate::vee;

    #[test]
    fn dot_products() {
        let a = V3::new(1, 2, 3);
        let b = V3::new(4, -5, 6);
        assert_eq!(vee::dot(&a, &b), 12);
        assert_eq!(a.dot(&b), b.dot(&a));
        assert_eq!(a.dot(&V3::zero()), 0);
    }

    #[test]
    fn dot_across_policies() {
        let buffer = [1, 0, 2, 0, 3, 0];
        let strided = VectorSpan3::<i32>::new(&buffer, 0, 2);
        assert_eq!(strided.dot(&V3::new(1, 1, 1)), 6);
    }

    #[test]
    fn cross_products() {
        let x = V3::new(1, 0, 0);
        let y = V3::new(0, 1, 0);
        let z = V3::new(0, 0, 1);
        assert_eq!(vee::cross(&x, &y), z);
        assert_eq!(vee::cross(&y, &z), x);
        assert_eq!(vee::cross(&z, &x), y);

        let a = V3::new(1, 2, 3);
        let b = V3::new(-7, 8, 9);
        assert_eq!(a.cross(&b), -b.cross(&a));
        assert_eq!(a.cross(&a), V3::zero());
    }

    #[test]
    fn cross_across_policies() {
        let buffer = [1, 0, 0, 0, 1, 0];
        let x = VectorSpan3::<i32>::new(&buffer, 0, 1);
        let y = VectorSpan3::<i32>::new(&buffer, 3, 1);
        assert_eq!(vee::cross(&x, &y), V3::new(0, 0, 1));
        assert_eq!(x.cross(&V3::new(0, 0, 1)), V3::new(0, -1, 0));
    }

    #[test]
    fn norms() {
        let v = V3::new(3.0f64, 4.0, 12.0);
        assert_eq!(v.sqnorm(), 169.0);
        assert_eq!(v.norm(), 13.0);
        assert_eq!(V3::new(1, 2, 3).sqnorm(), 14);
    }

    #[test]
    fn from_fn_and_map() {
        let v = vee::from_fn::<i32, 4, _>(|i| (i * i) as i32);
        assert_eq!(v, V::from_array([0, 1, 4, 9]));
        assert_eq!(v.map(|x| x * 2), V::from_array([0, 2, 8, 18]));
    }

    #[test]
    fn converting_copies_and_assignment() {
        let ints = V3::new(1i32, 2, 3);
        let floats = V3::<f64>::from_vector(&ints);
        assert_eq!(floats, V3::new(1.0, 2.0, 3.0));

        let mut buffer = [0.0f64; 3];
        let mut span = VectorSpanMut3::<f64>::from_slice(&mut buffer);
        span.assign_from(&V3::new(1.0f32, 2.0, 3.0));
        assert_eq!(buffer, [1.0, 2.0, 3.0]);
    }
}
