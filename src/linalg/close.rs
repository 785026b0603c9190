/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate comparison for vectors and matrices.
//!
//! The scalar rule lives in `glspan-assert-close`; these impls lift it
//! componentwise, short-circuiting on the first offending pair so that
//! `assert_close!` failures report the scalars that actually differ.

use glspan_assert_close::{AlmostEqual, CheckCloseError};
use crate::storage::Storage;
use crate::types::{Vector, Matrix};

impl<X, const N: usize, S1, S2> AlmostEqual<Vector<X, N, S2>> for Vector<X, N, S1>
where
    X: AlmostEqual,
    S1: Storage<X, N>,
    S2: Storage<X, N>,
{
    type Scalar = X::Scalar;

    fn check_close(&self, other: &Vector<X, N, S2>, max_rel_diff: X::Scalar)
    -> Result<(), CheckCloseError<X::Scalar>>
    {
        for i in 0..N {
            self.storage.index(i).check_close(other.storage.index(i), max_rel_diff)?;
        }
        Ok(())
    }
}

impl<X, const R: usize, const C: usize> AlmostEqual for Matrix<X, R, C>
where X: AlmostEqual,
{
    type Scalar = X::Scalar;

    fn check_close(&self, other: &Self, max_rel_diff: X::Scalar)
    -> Result<(), CheckCloseError<X::Scalar>>
    {
        // same storage order on both sides, so the flat buffers line up
        for (a, b) in self.cols.iter().flatten().zip(other.cols.iter().flatten()) {
            a.check_close(b, max_rel_diff)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Matrix, V3, VectorSpan3};
    use crate::{almost_equal, almost_equal_by};
    use glspan_assert_close::assert_close;

    #[test]
    fn vectors_componentwise() {
        let a = V3::new(1.0f64, 2.0, 3.0);
        let b = V3::new(1.0f64, 2.0, 3.0 + 1e-13);
        assert!(!almost_equal(&a, &b));
        assert!(almost_equal_by(&a, &b, 1e-12));
        assert_close!(rel=1e-12, a, b);
    }

    #[test]
    fn vectors_across_policies() {
        let buffer = [1.0f64, 9.0, 2.0, 9.0, 3.0, 9.0];
        let strided = VectorSpan3::<f64>::new(&buffer, 0, 2);
        assert!(almost_equal(&strided, &V3::new(1.0, 2.0, 3.0)));
        assert!(!almost_equal(&strided, &V3::new(1.0, 9.0, 3.0)));
    }

    #[test]
    fn matrices_elementwise() {
        let a = Matrix::from_rows([[1.0f64, 2.0], [3.0, 4.0]]);
        let mut b = a;
        assert!(almost_equal(&a, &b));
        assert_close!(a, b);

        b[(1, 0)] += 1e-13;
        assert!(!almost_equal(&a, &b));
        assert!(almost_equal_by(&a, &b, 1e-12));
    }

    #[test]
    fn near_zero_stays_strict() {
        let a = V3::new(0.0f64, 0.0, 0.0);
        let b = V3::new(0.0f64, 0.0, f64::EPSILON);
        assert!(!almost_equal(&a, &b));
    }
}
