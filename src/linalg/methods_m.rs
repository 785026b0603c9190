/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Inherent methods and free functions on matrices.

use crate::traits::Semiring;
use crate::storage::Storage;
use crate::types::{Matrix, Vector, V, VectorSpan, VectorSpanMut};
use slice_of_array::prelude::*;

/// Construct a matrix from a function of the `(row, column)` index pair.
///
/// The closure is invoked in storage order, i.e. column by column.
#[inline]
pub fn from_fn<T, const R: usize, const C: usize, F>(mut f: F) -> Matrix<T, R, C>
where F: FnMut(usize, usize) -> T,
{ Matrix { cols: std::array::from_fn(|c| std::array::from_fn(|r| f(r, c))) } }

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// See [`from_fn`](crate::mat::from_fn).
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize, usize) -> T,
    { from_fn(f) }

    /// Full fill from a row-major nested array.  The element count is part
    /// of the type, so there is no way to supply the wrong number.
    #[inline]
    pub fn from_rows(rows: [[T; C]; R]) -> Self
    where T: Copy,
    { Matrix::from_fn(|r, c| rows[r][c]) }

    /// Wrap a column-major nested array directly.
    #[inline]
    pub fn from_cols(cols: [[T; R]; C]) -> Self
    { Matrix { cols } }

    /// Ones on the leading diagonal of the largest square sub-block, zeros
    /// elsewhere.
    #[inline]
    pub fn identity() -> Self
    where T: Semiring,
    { Matrix::from_fn(|r, c| if r == c { T::one() } else { T::zero() }) }

    /// Diagonal fill.  The diagonal must have exactly `min(R, C)` entries;
    /// anything else fails to compile (at monomorphization time).
    #[inline]
    pub fn from_diagonal<const D: usize>(diagonal: [T; D]) -> Self
    where T: Semiring,
    {
        const { assert!(D == if R < C { R } else { C }) };
        Matrix::from_fn(|r, c| if r == c { diagonal[r] } else { T::zero() })
    }

    /// An owning snapshot of row `r`.  Later writes to the matrix are not
    /// reflected in it; use [`Matrix::row_span`] for a live view.
    #[inline]
    pub fn row(&self, r: usize) -> V<T, C>
    where T: Copy,
    { crate::methods_v::from_fn(|c| self[(r, c)]) }

    /// An owning snapshot of column `c`.
    #[inline]
    pub fn column(&self, c: usize) -> V<T, R>
    where T: Copy,
    { crate::methods_v::from_fn(|r| self[(r, c)]) }

    /// A read-only vector span aliasing row `r` in place.
    ///
    /// Because storage is column-major, consecutive row elements sit `R`
    /// apart in the buffer; the span's stride handles that transparently.
    #[inline]
    pub fn row_span(&self, r: usize) -> VectorSpan<'_, T, C> {
        assert!(r < R, "row index out of bounds: {} >= {}", r, R);
        VectorSpan::new(self.as_slice(), r, R)
    }

    /// A mutable vector span aliasing row `r`; writes through it are
    /// visible via `self[(r, c)]`.
    #[inline]
    pub fn row_span_mut(&mut self, r: usize) -> VectorSpanMut<'_, T, C> {
        assert!(r < R, "row index out of bounds: {} >= {}", r, R);
        VectorSpanMut::new(self.as_mut_slice(), r, R)
    }

    /// A read-only vector span aliasing column `c` in place (contiguous,
    /// stride 1).
    #[inline]
    pub fn column_span(&self, c: usize) -> VectorSpan<'_, T, R> {
        assert!(c < C, "column index out of bounds: {} >= {}", c, C);
        VectorSpan::new(self.as_slice(), c * R, 1)
    }

    /// A mutable vector span aliasing column `c`.
    #[inline]
    pub fn column_span_mut(&mut self, c: usize) -> VectorSpanMut<'_, T, R> {
        assert!(c < C, "column index out of bounds: {} >= {}", c, C);
        VectorSpanMut::new(self.as_mut_slice(), c * R, 1)
    }

    /// The backing buffer in column-major order, suitable for handing to a
    /// `glUniformMatrix*`-style upload without transposition.
    #[inline]
    pub fn as_slice(&self) -> &[T]
    { self.cols.flat() }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T]
    { self.cols.flat_mut() }
}

impl<T: Semiring> Matrix<T, 4, 4> {
    /// The homogeneous transform that translates by `(x, y, z)`.
    #[inline]
    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut out = Matrix::identity();
        out[(0, 3)] = x;
        out[(1, 3)] = y;
        out[(2, 3)] = z;
        out
    }

    /// [`Matrix::translation`] from a 3-vector of any storage policy.
    #[inline]
    pub fn translation_by<S: Storage<T, 3>>(offset: &Vector<T, 3, S>) -> Self
    { Matrix::translation(offset.x(), offset.y(), offset.z()) }
}
