/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use glspan::{assert_close, almost_equal, vee, mat};
use glspan::{Matrix, M4, V3, V4, VectorSpan3, VectorSpanMut3};
use pretty_assertions::assert_eq;

fn random_v3() -> V3<f64>
{ vee::from_fn(|_| rand::random::<f64>() * 2.0 - 1.0) }

#[test]
fn additive_inverse() {
    for _ in 0..10 {
        let v = random_v3();
        assert_eq!(v + (-v), V3::zero());
        assert_eq!(v.owned(), v);
    }
}

#[test]
fn dot_is_symmetric() {
    for _ in 0..10 {
        let a = random_v3();
        let b = random_v3();
        assert_eq!(vee::dot(&a, &b), vee::dot(&b, &a));
    }
}

#[test]
fn cross_is_antisymmetric() {
    for _ in 0..10 {
        let a = random_v3();
        let b = random_v3();
        assert_eq!(a.cross(&b), -b.cross(&a));
        assert_eq!(a.cross(&a), V3::zero());

        // the result is orthogonal to both inputs, up to roundoff
        assert!(vee::dot(&a.cross(&b), &a).abs() < 1e-12);
    }
}

#[test]
fn row_span_mutation_is_visible_through_the_matrix() {
    let mut m = Matrix::<i32, 3, 4>::identity();
    m.row_span_mut(1)[2] = 42;
    assert_eq!(m[(1, 2)], 42);
    assert_eq!(m.row(1), V4::new(0, 1, 42, 0));
}

#[test]
fn diagonal_equals_full_listing() {
    let diagonal = Matrix::<i32, 3, 4>::from_diagonal([1, 2, 3]);
    let full = Matrix::from_rows([
        [1, 0, 0, 0],
        [0, 2, 0, 0],
        [0, 0, 3, 0],
    ]);
    assert_eq!(diagonal, full);
}

#[test]
fn strided_spans_partition_a_buffer() {
    let buffer: Vec<i32> = (0..9).collect();
    let a = VectorSpan3::<i32>::new(&buffer, 0, 3);
    let b = VectorSpan3::<i32>::new(&buffer, 1, 3);
    let c = VectorSpan3::<i32>::new(&buffer, 2, 3);
    assert_eq!(a.owned(), V3::new(0, 3, 6));
    assert_eq!(b.owned(), V3::new(1, 4, 7));
    assert_eq!(c.owned(), V3::new(2, 5, 8));

    // together they cover every element exactly once
    let mut seen: Vec<i32> = a.iter().chain(b.iter()).chain(c.iter()).copied().collect();
    seen.sort();
    assert_eq!(seen, buffer);
}

#[test]
fn negating_a_span_yields_an_independent_vector() {
    let mut buffer = [1, 2, 3];
    let negated = {
        let span = VectorSpanMut3::<i32>::from_slice(&mut buffer);
        -span
    };
    buffer[0] = 100;
    assert_eq!(negated, V3::new(-1, -2, -3));
}

#[test]
fn comparator_boundaries() {
    assert!(almost_equal(&1.0f64, &(1.0 + f64::EPSILON)));
    assert!(!almost_equal(&0.0f64, &f64::EPSILON));
    assert!(almost_equal(&f64::INFINITY, &f64::INFINITY));
    assert!(!almost_equal(&f64::INFINITY, &f64::NEG_INFINITY));

    let v = V3::new(1.0f64, 2.0, 3.0);
    assert_close!(rel=1e-12, v, V3::new(1.0, 2.0, 3.0 + 1e-13));
    assert!(!almost_equal(&v, &V3::new(1.0, 2.0, 3.1)));
}

#[test]
fn uniform_buffer_is_column_major() {
    let m = mat::from_fn::<i32, 2, 3, _>(|r, c| (10 * r + c) as i32);
    // logical rows: [0, 1, 2], [10, 11, 12]
    assert_eq!(m.as_slice(), &[0, 10, 1, 11, 2, 12]);
}

#[test]
fn translation_matrix() {
    let m = M4::<f64>::translation_by(&V3::new(5.0f64, 6.0, 7.0));
    assert_eq!(m.column(3), V4::new(5.0, 6.0, 7.0, 1.0));

    // translating a homogeneous point by hand
    let p = V4::new(1.0f64, 2.0, 3.0, 1.0);
    let translated = vee::from_fn::<f64, 4, _>(|r| m.row(r).dot(&p));
    assert_eq!(translated, V4::new(6.0, 8.0, 10.0, 1.0));
}
