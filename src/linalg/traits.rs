/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces, implemented on the fixed set of
// primitive arithmetic types rather than as open generic bounds, in order
// to reduce coupling with client crates.

use num_traits::{Zero, One};
use std::ops::{Add, Mul, Sub, Neg, Div};

mod sealed {
    pub trait Sealed { }
}
use self::sealed::Sealed;

/// Trait for scalars with addition and multiplication.
///
/// There are lots and lots and lots of really cool (and sometimes useful)
/// semiring algebras out there, but don't get excited; you get primitive
/// floats and integers.  That's all this API is willing to commit to, and
/// the trait is sealed to avoid accidental commitments.
pub trait Semiring
    : Sealed
    + Copy + PartialEq + PartialOrd
    + Add<Output=Self> + Mul<Output=Self>
    + Zero + One
{ }

/// Trait for scalars with addition, multiplication, and subtraction.
///
/// Unsigned integers are excluded because a ring must be closed under
/// negation.  This trait is sealed.
pub trait Ring
    : Semiring
    + Sub<Output=Self> + Neg<Output=Self>
{ }

/// Trait for scalars with addition, multiplication, subtraction, and
/// division.  Currently just the primitive real floating point types;
/// you'll have to take your rationals and complex numbers elsewhere.
/// This trait is sealed.
pub trait Field
    : Ring
    + Div<Output=Self>
    + num_traits::Float
{ }

macro_rules! impl_tier {
    ($Tier:ident: $($T:ty)*) => {$(
        impl $Tier for $T { }
    )*};
}

macro_rules! impl_sealed {
    ($($T:ty)*) => {$(
        impl Sealed for $T { }
    )*};
}

impl_sealed!{
    f32 f64
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
}

impl_tier!{Semiring:
    f32 f64
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
}

impl_tier!{Ring:
    f32 f64
    i8 i16 i32 i64 isize
}

impl_tier!{Field: f32 f64}
