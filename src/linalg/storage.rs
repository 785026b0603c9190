/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Storage policies for [`Vector`](crate::Vector).
//!
//! A vector's components either live inside the vector itself ([`Owned`]),
//! or inside some external buffer that the vector merely looks into
//! ([`Span`], [`SpanMut`]).  The vector's operations are written against
//! the [`Storage`]/[`StorageMut`] contract and never care which it is.

use crate::traits::Semiring;

/// Read access to the components of an `N`-dimensional vector.
///
/// Implementations map a logical component index to wherever that
/// component physically lives.  Indexes outside `0..N` are a caller
/// error; all provided implementations panic on them.
pub trait Storage<T, const N: usize> {
    fn index(&self, i: usize) -> &T;
}

/// Write access, for policies whose backing memory may be mutated.
pub trait StorageMut<T, const N: usize>: Storage<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T;
}

// ---------------------------------------------------------------------------

/// Storage policy for a vector that owns its component data.
///
/// This is the ordinary value-semantics case: copying duplicates the
/// components, and nothing can alias them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Owned<T, const N: usize>(pub [T; N]);

impl<T: Semiring, const N: usize> Default for Owned<T, N> {
    #[inline]
    fn default() -> Self
    { Owned([T::zero(); N]) }
}

impl<T, const N: usize> Storage<T, N> for Owned<T, N> {
    #[inline(always)]
    fn index(&self, i: usize) -> &T
    { &self.0[i] }
}

impl<T, const N: usize> StorageMut<T, N> for Owned<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T
    { &mut self.0[i] }
}

// ---------------------------------------------------------------------------

/// Storage policy for a vector that reads components out of a borrowed
/// buffer (a vector "span").
///
/// Logically consecutive components sit `stride` slots apart in the
/// buffer; a stride of 1 means they are contiguous.  Copies of a `Span`
/// are cheap and alias the same buffer.  The span's validity is bounded
/// by the borrow, so there is no way to outlive the buffer.
#[derive(Copy, Clone)]
pub struct Span<'a, T, const N: usize> {
    data: &'a [T],
    stride: usize,
}

impl<'a, T, const N: usize> Span<'a, T, N> {
    /// Bind to `data`, starting at `offset` and reading every `stride`-th
    /// element from there.
    ///
    /// The buffer must hold the whole window: `offset + (N-1)*stride` must
    /// be in bounds.  That precondition is asserted in debug builds;
    /// release builds defer to the (still memory-safe) slice bounds check
    /// at access time.
    #[inline]
    pub fn new(data: &'a [T], offset: usize, stride: usize) -> Self {
        debug_assert!(
            N == 0 || offset + (N - 1) * stride < data.len(),
            "vector span window is outside of buffer bounds",
        );
        Span { data: &data[offset..], stride }
    }

    #[inline]
    pub fn from_slice(data: &'a [T]) -> Self
    { Span::new(data, 0, 1) }

    #[inline]
    pub fn stride(&self) -> usize
    { self.stride }
}

impl<'a, T, const N: usize> Storage<T, N> for Span<'a, T, N> {
    #[inline(always)]
    fn index(&self, i: usize) -> &T
    { &self.data[i * self.stride] }
}

// ---------------------------------------------------------------------------

/// The mutable counterpart of [`Span`]: writes go straight into the
/// borrowed buffer.
///
/// Unlike a shared `Span` this is not copyable; Rust's exclusivity rules
/// stand in for the manual "aliased mutation is on you" contract a raw
/// pointer version would need.  Use [`SpanMut::reborrow`] to hand out a
/// shorter-lived window over the same components.
pub struct SpanMut<'a, T, const N: usize> {
    data: &'a mut [T],
    stride: usize,
}

impl<'a, T, const N: usize> SpanMut<'a, T, N> {
    /// Bind mutably to `data` at `offset`, with the given `stride`.
    ///
    /// Same bounds precondition as [`Span::new`].
    #[inline]
    pub fn new(data: &'a mut [T], offset: usize, stride: usize) -> Self {
        debug_assert!(
            N == 0 || offset + (N - 1) * stride < data.len(),
            "vector span window is outside of buffer bounds",
        );
        SpanMut { data: &mut data[offset..], stride }
    }

    #[inline]
    pub fn from_slice(data: &'a mut [T]) -> Self
    { SpanMut::new(data, 0, 1) }

    #[inline]
    pub fn stride(&self) -> usize
    { self.stride }

    #[inline]
    pub fn reborrow(&mut self) -> SpanMut<'_, T, N>
    { SpanMut { data: &mut *self.data, stride: self.stride } }

    #[inline]
    pub fn as_span(&self) -> Span<'_, T, N>
    { Span { data: &*self.data, stride: self.stride } }
}

impl<'a, T, const N: usize> Storage<T, N> for SpanMut<'a, T, N> {
    #[inline(always)]
    fn index(&self, i: usize) -> &T
    { &self.data[i * self.stride] }
}

impl<'a, T, const N: usize> StorageMut<T, N> for SpanMut<'a, T, N> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T
    { &mut self.data[i * self.stride] }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_defaults_to_zero() {
        let s: Owned<i32, 4> = Default::default();
        assert_eq!(s.0, [0; 4]);
    }

    #[test]
    fn strided_window() {
        let buffer = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let s: Span<'_, i32, 3> = Span::new(&buffer, 1, 3);
        assert_eq!(*s.index(0), 2);
        assert_eq!(*s.index(1), 5);
        assert_eq!(*s.index(2), 8);
    }

    #[test]
    fn writes_land_in_buffer() {
        let mut buffer = [0, 0, 0, 0, 0, 0];
        {
            let mut s: SpanMut<'_, i32, 3> = SpanMut::new(&mut buffer, 0, 2);
            *s.index_mut(0) = 1;
            *s.index_mut(1) = 2;
            *s.index_mut(2) = 3;
        }
        assert_eq!(buffer, [1, 0, 2, 0, 3, 0]);
    }

    // in debug builds the constructor catches this; in release the slice
    // bounds check at access time does
    #[test]
    #[should_panic]
    fn window_out_of_bounds() {
        let buffer = [1, 2, 3, 4];
        let s: Span<'_, i32, 3> = Span::new(&buffer, 0, 2);
        let _ = *s.index(2);
    }
}
