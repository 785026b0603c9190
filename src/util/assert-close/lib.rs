/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality under a *relative* tolerance.
//!
//! The scalar rule is `|a - b| <= max(|a|, |b|) * max_rel_diff`, with the
//! machine epsilon of the scalar type as the default tolerance.  Because the
//! tolerance scales with the operands' magnitude, the test degenerates toward
//! exact equality near zero; `almost_equal(0.0, EPSILON)` is `false`, and
//! that is intended behavior rather than a bug.  For results of longer
//! computation chains you will usually want to supply a larger tolerance
//! empirically.

use failure::Fail;
use num_traits::Float;
use std::fmt;

#[macro_export]
macro_rules! assert_close {
    (rel=$tol:expr, $($rest:tt)*) => { $crate::assert_close_impl!{[$tol] $($rest)*} };
    ($($rest:tt)*) => { $crate::assert_close_impl!{[] $($rest)*} };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@check $a:ident, $b:ident, $rel:ident, $($fmt:tt)+) => {
        if let Err(e) = $crate::AlmostEqual::check_close($a, $b, $rel) {
            panic!(
                "{} (rel={:?})\n left: {:?}\nright: {:?}\n{}",
                format!($($fmt)+), $rel, $a, $b, e,
            );
        }
    };
    ([] $a:expr, $b:expr $(,)?) => {{
        let a = &$a;
        let b = &$b;
        let rel = $crate::AlmostEqual::default_tolerance(a);
        $crate::assert_close_impl!{@check a, b, rel, "not nearly equal!"}
    }};
    ([$tol:expr] $a:expr, $b:expr $(,)?) => {{
        let a = &$a;
        let b = &$b;
        let rel = $tol;
        $crate::assert_close_impl!{@check a, b, rel, "not nearly equal!"}
    }};
    ([] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let a = &$a;
        let b = &$b;
        let rel = $crate::AlmostEqual::default_tolerance(a);
        $crate::assert_close_impl!{@check a, b, rel, $($fmt)+}
    }};
    ([$tol:expr] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let a = &$a;
        let b = &$b;
        let rel = $tol;
        $crate::assert_close_impl!{@check a, b, rel, $($fmt)+}
    }};
}

/// Error produced when two values fail a `check_close` test.
///
/// Carries the offending pair and the tolerance so that assertion messages
/// can show where a composite comparison (vector, matrix, slice...) failed.
#[derive(Debug, Fail)]
pub struct CheckCloseError<T: fmt::Debug + Send + Sync + 'static = f64> {
    pub values: (T, T),
    pub rel: T,
}

impl<T: fmt::Debug + Send + Sync> fmt::Display for CheckCloseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (ref left, ref right) = self.values;
        write!(f, "failed at:
  left: {:?}
 right: {:?}
   rel: {:?}", left, right, self.rel)
    }
}

/// Relative-tolerance approximate equality.
///
/// The required method is `check_close`, which reports the first offending
/// pair of scalars on failure; `almost_equal` and `almost_equal_by` are the
/// plain boolean forms.  Implementations exist for `f32`/`f64`, for slices,
/// `Vec`s and arrays of implementors, and (in `glspan-linalg`) for vectors
/// of any storage policy and for matrices.  There are deliberately no
/// implementations for non-floating-point scalars.
pub trait AlmostEqual<Rhs: ?Sized = Self> {
    type Scalar: Float + fmt::Debug + Send + Sync + 'static;

    /// Test that all corresponding scalars of `self` and `other` are within
    /// the given relative tolerance, reporting the first pair that is not.
    fn check_close(&self, other: &Rhs, max_rel_diff: Self::Scalar)
    -> Result<(), CheckCloseError<Self::Scalar>>;

    /// `check_close` as a predicate.
    #[inline]
    fn almost_equal_by(&self, other: &Rhs, max_rel_diff: Self::Scalar) -> bool
    { self.check_close(other, max_rel_diff).is_ok() }

    /// `almost_equal_by` at the default tolerance (machine epsilon).
    #[inline]
    fn almost_equal(&self, other: &Rhs) -> bool
    { self.almost_equal_by(other, self.default_tolerance()) }

    /// The machine epsilon of the scalar type.  (This exists as a method so
    /// that the assertion macros can obtain it without naming the type.)
    #[inline]
    fn default_tolerance(&self) -> Self::Scalar
    { Self::Scalar::epsilon() }
}

/// Free function form of [`AlmostEqual::almost_equal`].
#[inline]
pub fn almost_equal<A, B>(a: &A, b: &B) -> bool
where A: AlmostEqual<B> + ?Sized, B: ?Sized,
{ a.almost_equal(b) }

/// Free function form of [`AlmostEqual::almost_equal_by`].
#[inline]
pub fn almost_equal_by<A, B>(a: &A, b: &B, max_rel_diff: A::Scalar) -> bool
where A: AlmostEqual<B> + ?Sized, B: ?Sized,
{ a.almost_equal_by(b, max_rel_diff) }

#[inline]
fn is_close<F: Float>(a: F, b: F, rel: F) -> bool {
    assert!(rel >= F::zero());

    // catches exact equality, including infinities of the same sign
    if a == b { return true; }

    // infinities of opposite sign would otherwise produce a NaN difference
    if a.is_infinite() || b.is_infinite() { return false; }

    // general values and NaN
    (a - b).abs() <= a.abs().max(b.abs()) * rel
}

macro_rules! impl_float_almost_equal {
    ($($T:ident)*) => {$(
        impl AlmostEqual for $T {
            type Scalar = $T;

            #[inline]
            fn check_close(&self, other: &$T, max_rel_diff: $T)
            -> Result<(), CheckCloseError<$T>>
            {
                if is_close(*self, *other, max_rel_diff) {
                    Ok(())
                } else {
                    Err(CheckCloseError {
                        values: (*self, *other),
                        rel: max_rel_diff,
                    })
                }
            }
        }
    )*};
}

impl_float_almost_equal!{f32 f64}

impl<'a, T: ?Sized + AlmostEqual> AlmostEqual for &'a T {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, max_rel_diff: T::Scalar)
    -> Result<(), CheckCloseError<T::Scalar>>
    { AlmostEqual::check_close(*self, *other, max_rel_diff) }
}

impl<T: AlmostEqual> AlmostEqual for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, max_rel_diff: T::Scalar)
    -> Result<(), CheckCloseError<T::Scalar>>
    {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, max_rel_diff))
            .collect()
    }
}

impl<T: AlmostEqual> AlmostEqual for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, max_rel_diff: T::Scalar)
    -> Result<(), CheckCloseError<T::Scalar>>
    { (&self[..]).check_close(&other[..], max_rel_diff) }
}

impl<T: AlmostEqual, const N: usize> AlmostEqual for [T; N] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, max_rel_diff: T::Scalar)
    -> Result<(), CheckCloseError<T::Scalar>>
    { (&self[..]).check_close(&other[..], max_rel_diff) }
}
