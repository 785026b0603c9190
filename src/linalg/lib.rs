/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-dimension vectors and matrices for graphics-style math.
//!
//! The vector type is generic over a *storage policy*: it can own its
//! components outright ([`Owned`]), or it can be a *span* over components
//! that physically live in some larger buffer ([`Span`], [`SpanMut`]),
//! optionally separated by a stride.  Arithmetic, comparison, and the named
//! coordinate accessors behave identically in either mode; the only
//! difference is where writes land.
//!
//! Matrices are stored column-major (matching the uniform layout expected
//! by the usual graphics APIs) while presenting row-major `(row, col)`
//! indexing, and hand out spans into their own storage via
//! [`Matrix::row_span_mut`] and friends.

mod traits;
mod storage;
mod types;
mod named;
mod ops;
mod methods_v;
mod methods_m;
mod close;
#[cfg(feature = "serde-support")]
mod serde_support;

pub use crate::traits::{Semiring, Ring, Field};
pub use crate::storage::{Storage, StorageMut, Owned, Span, SpanMut};
pub use crate::types::{
    Vector, V, V2, V3, V4,
    VectorSpan, VectorSpan2, VectorSpan3, VectorSpan4,
    VectorSpanMut, VectorSpanMut2, VectorSpanMut3, VectorSpanMut4,
    Matrix, M2, M3, M4,
};
pub use crate::methods_v::{dot, cross};

/// Free-function forms of the vector operations, for those who prefer
/// `vee::dot(&a, &b)` over `a.dot(&b)`.
pub mod vee {
    pub use crate::methods_v::{from_fn, dot, cross};
}

/// Free-function forms of the matrix constructors.
pub mod mat {
    pub use crate::methods_m::from_fn;
}

// The comparator lives downstream of the storage-generic types, so its
// trait is simply re-exported here for convenience.
pub use glspan_assert_close::{
    AlmostEqual, CheckCloseError, almost_equal, almost_equal_by,
};
