// tests/products_tests.rs

use approx::assert_abs_diff_eq;
use scale_geom::{
    cross_product_2d, cross_product_3d, dot_product, is_equal, scalar_triple_product, Vector, Vector2f, Vector3f,
};

fn samples_3d() -> Vec<Vector3f>
{
    vec![
        Vector3f::xyz(1.0, 0.0, 0.0),
        Vector3f::xyz(0.0, 1.0, 0.0),
        Vector3f::xyz(1.0, 2.0, 3.0),
        Vector3f::xyz(-4.5, 0.25, 10.0),
        Vector3f::xyz(5.1, 6.2, 8.3),
        Vector3f::xyz(4.2, 5.1, 6.5),
    ]
}

fn samples_2d() -> Vec<Vector2f>
{
    vec![
        Vector2f::xy(3.0, 4.0),
        Vector2f::xy(-1.0, 0.5),
        Vector2f::xy(0.0, 0.0),
        Vector2f::xy(2.75, -8.0),
    ]
}

#[test]
fn test_dot()
{
    let a = Vector::new([1.0, 2.0, 3.0]);
    let b = Vector::new([4.0, -5.0, 6.0]);
    // 1*4 + 2*(-5) + 3*6 = 12
    assert_abs_diff_eq!(dot_product(&a, &b), 12.0);

    let c = Vector::new([1, 1, 1, 1, 1]);
    let d = Vector::new([1, 2, 3, 4, 5]);
    assert_eq!(dot_product(&c, &d), 15);
}

#[test]
fn test_dot_is_commutative()
{
    for v in samples_3d() {
        for w in samples_3d() {
            assert_eq!(dot_product(&v, &w), dot_product(&w, &v));
        }
    }
}

#[test]
fn test_orthogonal_basis()
{
    let v1 = Vector3f::xyz(1.0, 0.0, 0.0);
    let v2 = Vector3f::xyz(0.0, 1.0, 0.0);
    assert_eq!(cross_product_3d(v1, v2), Vector3f::xyz(0.0, 0.0, 1.0));
    assert_eq!(dot_product(&v1, &v2), 0.0);
}

#[test]
fn test_cross_3d_components()
{
    let a = Vector3f::xyz(1.0, 2.0, 3.0);
    let b = Vector3f::xyz(4.0, 5.0, 6.0);
    assert_eq!(cross_product_3d(a, b), Vector3f::xyz(-3.0, 6.0, -3.0));
}

#[test]
fn test_cross_3d_is_anti_commutative()
{
    for v in samples_3d() {
        for w in samples_3d() {
            assert_eq!(cross_product_3d(v, w), -cross_product_3d(w, v));
        }
    }
}

#[test]
fn test_cross_3d_is_orthogonal_to_inputs()
{
    let a = Vector3f::xyz(1.0, 2.0, 3.0);
    let b = Vector3f::xyz(-4.5, 0.25, 10.0);
    let n = cross_product_3d(a, b);
    assert_abs_diff_eq!(dot_product(&n, &a), 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(dot_product(&n, &b), 0.0, epsilon = 1e-4);
}

#[test]
fn test_cross_2d()
{
    let a = Vector2f::xy(3.0, 4.0);
    let b = Vector2f::xy(-4.0, 3.0);
    // 3*3 - 4*(-4) = 25
    assert_abs_diff_eq!(cross_product_2d(a, b), 25.0);
}

#[test]
fn test_cross_2d_is_anti_commutative()
{
    for v in samples_2d() {
        for w in samples_2d() {
            assert_eq!(cross_product_2d(v, w), -cross_product_2d(w, v));
        }
    }
}

#[test]
fn test_triple_product_of_coplanar_vectors()
{
    let v1 = Vector3f::xyz(1.0, 2.0, 3.0);
    let v2 = Vector3f::xyz(4.0, 5.0, 6.0);
    let v3 = Vector3f::xyz(7.0, 8.0, 9.0);
    assert!(is_equal(scalar_triple_product(v1, v2, v3) as f64, 0.0));
}

#[test]
fn test_triple_product_with_repeated_vector()
{
    for v in samples_3d() {
        for w in samples_3d() {
            assert!(is_equal(scalar_triple_product(v, v, w) as f64, 0.0));
        }
    }
}

#[test]
fn test_triple_product_is_signed_volume()
{
    let a = Vector3f::xyz(2.0, 0.0, 0.0);
    let b = Vector3f::xyz(0.0, 3.0, 0.0);
    let c = Vector3f::xyz(0.0, 0.0, 4.0);
    assert_abs_diff_eq!(scalar_triple_product(a, b, c), 24.0);
    assert_abs_diff_eq!(scalar_triple_product(b, a, c), -24.0);
}

#[test]
fn test_is_equal()
{
    assert!(is_equal(1.00000005, 1.00000006));
    assert!(!is_equal(1.0, 1.001));
}
