/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Serde impls, behind the `serde-support` feature.
//!
//! These are written by hand because `derive` cannot express the bounds
//! for const-generic array fields.  A vector serializes as a fixed-length
//! sequence of its components (spans serialize like the owning vector they
//! alias); a matrix serializes as a sequence of its rows, matching the
//! row-major face it presents everywhere else.  Only owning types
//! deserialize.

use crate::storage::Storage;
use crate::types::{Vector, V, Matrix};
use serde::ser::{Serialize, Serializer, SerializeTuple};
use serde::de::{self, Deserialize, Deserializer, Visitor, SeqAccess};
use std::convert::TryInto;
use std::fmt;
use std::marker::PhantomData;

impl<T, const N: usize, S> Serialize for Vector<T, N, S>
where T: Serialize, S: Storage<T, N>,
{
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for i in 0..N {
            tuple.serialize_element(self.storage.index(i))?;
        }
        tuple.end()
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for V<T, N>
where T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VectorVisitor<T, const N: usize>(PhantomData<[T; N]>);

        impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
        where T: Deserialize<'de>,
        {
            type Value = V<T, N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { write!(f, "a sequence of {} components", N) }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut components = Vec::with_capacity(N);
                for i in 0..N {
                    match seq.next_element()? {
                        Some(x) => components.push(x),
                        None => return Err(de::Error::invalid_length(i, &self)),
                    }
                }
                match components.try_into() {
                    Ok(array) => Ok(V::from_array(array)),
                    Err(_) => Err(de::Error::invalid_length(N, &self)),
                }
            }
        }

        deserializer.deserialize_tuple(N, VectorVisitor(PhantomData))
    }
}

impl<T, const R: usize, const C: usize> Serialize for Matrix<T, R, C>
where T: Serialize + Copy,
{
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        let mut tuple = serializer.serialize_tuple(R)?;
        for r in 0..R {
            tuple.serialize_element(&self.row(r))?;
        }
        tuple.end()
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where T: Deserialize<'de> + Copy,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MatrixVisitor<T, const R: usize, const C: usize>(PhantomData<[[T; C]; R]>);

        impl<'de, T, const R: usize, const C: usize> Visitor<'de> for MatrixVisitor<T, R, C>
        where T: Deserialize<'de> + Copy,
        {
            type Value = Matrix<T, R, C>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { write!(f, "a sequence of {} rows", R) }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut rows: Vec<[T; C]> = Vec::with_capacity(R);
                for r in 0..R {
                    match seq.next_element::<V<T, C>>()? {
                        Some(row) => rows.push(row.into_array()),
                        None => return Err(de::Error::invalid_length(r, &self)),
                    }
                }
                Ok(Matrix::from_fn(|r, c| rows[r][c]))
            }
        }

        deserializer.deserialize_tuple(R, MatrixVisitor(PhantomData))
    }
}
