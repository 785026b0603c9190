/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::traits::Semiring;
use crate::storage::{Storage, StorageMut, Owned, Span, SpanMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// A fixed-dimension vector, generic over where its components live.
///
/// The third parameter is the storage policy; it defaults to [`Owned`],
/// which is what you want for freestanding values.  [`VectorSpan`] and
/// [`VectorSpanMut`] are the same type instantiated with borrowed storage,
/// so that e.g. a matrix row can be handed around and operated on as a
/// vector without copying it out first.
///
/// Operations that produce a *new* vector (arithmetic, [`Vector::owned`],
/// the `from_fn` constructors) always produce an owning one, regardless of
/// the storage of their inputs.
pub struct Vector<T, const N: usize, S = Owned<T, N>> {
    pub(crate) storage: S,
    _scalar: PhantomData<[T; N]>,
}

/// An owning vector.  The usual case.
pub type V<T, const N: usize> = Vector<T, N, Owned<T, N>>;
pub type V2<T = f32> = V<T, 2>;
pub type V3<T = f32> = V<T, 3>;
pub type V4<T = f32> = V<T, 4>;

/// A vector view over components borrowed from a larger buffer.
pub type VectorSpan<'a, T, const N: usize> = Vector<T, N, Span<'a, T, N>>;
pub type VectorSpan2<'a, T = f32> = VectorSpan<'a, T, 2>;
pub type VectorSpan3<'a, T = f32> = VectorSpan<'a, T, 3>;
pub type VectorSpan4<'a, T = f32> = VectorSpan<'a, T, 4>;

/// A mutable vector view; writes go into the borrowed buffer.
pub type VectorSpanMut<'a, T, const N: usize> = Vector<T, N, SpanMut<'a, T, N>>;
pub type VectorSpanMut2<'a, T = f32> = VectorSpanMut<'a, T, 2>;
pub type VectorSpanMut3<'a, T = f32> = VectorSpanMut<'a, T, 3>;
pub type VectorSpanMut4<'a, T = f32> = VectorSpanMut<'a, T, 4>;

impl<T, const N: usize, S: Storage<T, N>> Vector<T, N, S> {
    /// Wrap an arbitrary storage policy as a vector.
    #[inline]
    pub fn from_storage(storage: S) -> Self
    { Vector { storage, _scalar: PhantomData } }

    /// The dimension `N`.
    #[inline]
    pub fn len(&self) -> usize
    { N }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        if i < N { Some(self.storage.index(i)) } else { None }
    }

    /// Iterate over the components in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_
    { (0..N).map(move |i| self.storage.index(i)) }

    /// Copy the components out into an owning vector.
    ///
    /// For spans this is the escape hatch from the borrow; the result is
    /// independent of the buffer the span was looking into.
    #[inline]
    pub fn owned(&self) -> V<T, N>
    where T: Copy,
    { Vector::from_storage(Owned(std::array::from_fn(|i| *self.storage.index(i)))) }

    /// Copy the components out into a plain array.
    #[inline]
    pub fn to_array(&self) -> [T; N]
    where T: Copy,
    { std::array::from_fn(|i| *self.storage.index(i)) }
}

impl<T, const N: usize, S: StorageMut<T, N>> Vector<T, N, S> {
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < N { Some(self.storage.index_mut(i)) } else { None }
    }
}

impl<T, const N: usize> V<T, N> {
    #[inline]
    pub fn from_array(array: [T; N]) -> Self
    { Vector::from_storage(Owned(array)) }

    #[inline]
    pub fn into_array(self) -> [T; N]
    { (self.storage).0 }

    #[inline]
    pub fn as_array(&self) -> &[T; N]
    { &(self.storage).0 }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [T; N]
    { &mut (self.storage).0 }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self
    where T: Semiring,
    { Vector::from_storage(Owned([T::zero(); N])) }
}

impl<'a, T, const N: usize> VectorSpan<'a, T, N> {
    /// View `N` components of `buffer`, starting at `offset` and stepping
    /// by `stride`.  See [`Span::new`] for the bounds precondition.
    #[inline]
    pub fn new(buffer: &'a [T], offset: usize, stride: usize) -> Self
    { Vector::from_storage(Span::new(buffer, offset, stride)) }

    /// `new` with offset 0.
    #[inline]
    pub fn with_stride(buffer: &'a [T], stride: usize) -> Self
    { VectorSpan::new(buffer, 0, stride) }

    /// A contiguous view of the first `N` elements.
    #[inline]
    pub fn from_slice(buffer: &'a [T]) -> Self
    { VectorSpan::new(buffer, 0, 1) }
}

impl<'a, T, const N: usize> VectorSpanMut<'a, T, N> {
    #[inline]
    pub fn new(buffer: &'a mut [T], offset: usize, stride: usize) -> Self
    { Vector::from_storage(SpanMut::new(buffer, offset, stride)) }

    /// `new` with offset 0.
    #[inline]
    pub fn with_stride(buffer: &'a mut [T], stride: usize) -> Self
    { VectorSpanMut::new(buffer, 0, stride) }

    /// A contiguous mutable view of the first `N` elements.
    #[inline]
    pub fn from_slice(buffer: &'a mut [T]) -> Self
    { VectorSpanMut::new(buffer, 0, 1) }

    /// A shorter-lived mutable view of the same components.
    #[inline]
    pub fn reborrow(&mut self) -> VectorSpanMut<'_, T, N>
    { Vector::from_storage(self.storage.reborrow()) }

    /// Downgrade to a shared view.
    #[inline]
    pub fn as_span(&self) -> VectorSpan<'_, T, N>
    { Vector::from_storage(self.storage.as_span()) }
}

// ---------------------------------------------------------------------------
// trait impls that the derives would put wrong bounds on

impl<T, const N: usize, S: Clone> Clone for Vector<T, N, S> {
    #[inline]
    fn clone(&self) -> Self
    { Vector { storage: self.storage.clone(), _scalar: PhantomData } }
}

impl<T, const N: usize, S: Copy> Copy for Vector<T, N, S> { }

impl<T, const N: usize, S: Storage<T, N> + Default> Default for Vector<T, N, S> {
    #[inline]
    fn default() -> Self
    { Vector::from_storage(S::default()) }
}

impl<T, const N: usize, S> Index<usize> for Vector<T, N, S>
where S: Storage<T, N>,
{
    type Output = T;

    // An explicit dimension check, because a strided span's buffer may
    // well contain an element at the place index N would land.
    #[inline]
    fn index(&self, i: usize) -> &T {
        assert!(i < N, "index out of bounds: the dim is {} but the index is {}", N, i);
        self.storage.index(i)
    }
}

impl<T, const N: usize, S> IndexMut<usize> for Vector<T, N, S>
where S: StorageMut<T, N>,
{
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        assert!(i < N, "index out of bounds: the dim is {} but the index is {}", N, i);
        self.storage.index_mut(i)
    }
}

impl<T, const N: usize, S1, S2> PartialEq<Vector<T, N, S2>> for Vector<T, N, S1>
where
    T: PartialEq,
    S1: Storage<T, N>,
    S2: Storage<T, N>,
{
    fn eq(&self, other: &Vector<T, N, S2>) -> bool
    { (0..N).all(|i| self.storage.index(i) == other.storage.index(i)) }
}

impl<T: Eq, const N: usize> Eq for V<T, N> { }

impl<T: Hash, const N: usize> Hash for V<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H)
    { self.as_array().hash(state) }
}

impl<T, const N: usize, S> fmt::Debug for Vector<T, N, S>
where T: fmt::Debug, S: Storage<T, N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.debug_list().entries(self.iter()).finish() }
}

impl<T, const N: usize, S> fmt::Display for Vector<T, N, S>
where T: fmt::Display, S: Storage<T, N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for i in 0..N {
            if i != 0 { write!(f, ", ")?; }
            write!(f, "{}", self.storage.index(i))?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> From<[T; N]> for V<T, N> {
    #[inline]
    fn from(array: [T; N]) -> Self
    { V::from_array(array) }
}

impl<T, const N: usize> From<V<T, N>> for [T; N] {
    #[inline]
    fn from(v: V<T, N>) -> Self
    { v.into_array() }
}

// ---------------------------------------------------------------------------

/// A fixed-dimension matrix with `R` rows and `C` columns.
///
/// Storage is column-major (the layout OpenGL-style uniform uploads
/// expect), but the public face is row-major: indexing takes
/// `(row, column)` pairs and [`mat::from_fn`](crate::mat::from_fn) calls
/// its closure as `f(row, column)`.  Rows and columns can be borrowed
/// in-place as vector spans; see `methods_m`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) cols: [[T; R]; C],
}

pub type M2<T = f32> = Matrix<T, 2, 2>;
pub type M3<T = f32> = Matrix<T, 3, 3>;
pub type M4<T = f32> = Matrix<T, 4, 4>;

/// The default is the identity (ones down the diagonal of the largest
/// square sub-block, zeros elsewhere), not the zero matrix.
impl<T: Semiring, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    #[inline]
    fn default() -> Self
    { Matrix::identity() }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T
    { &self.cols[col][row] }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T
    { &mut self.cols[col][row] }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    // printed row-major, like the indexing
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = f.debug_list();
        for r in 0..R {
            rows.entry(&RowEntry { matrix: self, row: r });
        }
        rows.finish()
    }
}

struct RowEntry<'a, T, const R: usize, const C: usize> {
    matrix: &'a Matrix<T, R, C>,
    row: usize,
}

impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for RowEntry<'a, T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..C).map(|c| &self.matrix[(self.row, c)]))
            .finish()
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    // single line, row-major, rows separated by semicolons
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..R {
            if r != 0 { write!(f, "; ")?; }
            for c in 0..C {
                if c != 0 { write!(f, ", ")?; }
                write!(f, "{}", self[(r, c)])?;
            }
        }
        write!(f, "]")
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::types::{V3, Matrix, M3};

    #[test]
    fn default_vector_is_zero() {
        assert_eq!(V3::<i32>::default(), V3::from_array([0, 0, 0]));
    }

    #[test]
    fn default_matrix_is_identity() {
        let eye = M3::<i32>::default();
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(eye[(r, c)], (r == c) as i32);
            }
        }

        // non-square: ones down the square sub-block
        let eye = Matrix::<i32, 2, 3>::default();
        assert_eq!(eye[(0, 0)], 1);
        assert_eq!(eye[(1, 1)], 1);
        assert_eq!(eye[(0, 1)], 0);
        assert_eq!(eye[(0, 2)], 0);
        assert_eq!(eye[(1, 2)], 0);
    }

    #[test]
    fn vector_formatting() {
        let v = V3::from_array([1, 2, 3]);
        assert_eq!(format!("{}", v), "(1, 2, 3)");
        assert_eq!(format!("{:?}", v), "[1, 2, 3]");
    }

    #[test]
    fn matrix_debug_is_row_major() {
        let m = crate::mat::from_fn::<i32, 2, 2, _>(|r, c| (10 * r + c) as i32);
        assert_eq!(format!("{:?}", m), "[[0, 1], [10, 11]]");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn vector_index_checked_against_dim() {
        let buffer = [1, 2, 3, 4, 5, 6];
        let v = crate::VectorSpan::<'_, i32, 2>::new(&buffer, 0, 2);
        let _ = v[2];
    }
}
