use crate::maths::vector::{Coordinate, Vector, Vector2f, Vector3f};

/// Sum of the pairwise coordinate products, accumulated in the coordinate type
pub fn dot_product<T: Coordinate, const SIZE: usize>(v1: &Vector<T, SIZE>, v2: &Vector<T, SIZE>) -> T
{
    v1.into_iter().zip(v2).fold(T::zero(), |sum, (a, b)| sum + *a * *b)
}

/// Signed area of the parallelogram spanned by two 2D vectors
pub fn cross_product_2d(v1: Vector2f, v2: Vector2f) -> f32 { v1.x() * v2.y() - v1.y() * v2.x() }

pub fn cross_product_3d(v1: Vector3f, v2: Vector3f) -> Vector3f
{
    let x = v1.y() * v2.z() - v1.z() * v2.y();
    let y = v1.z() * v2.x() - v1.x() * v2.z();
    let z = v1.x() * v2.y() - v1.y() * v2.x();

    Vector3f::xyz(x, y, z)
}

/// Signed volume of the parallelepiped spanned by three 3D vectors
pub fn scalar_triple_product(v1: Vector3f, v2: Vector3f, v3: Vector3f) -> f32
{
    dot_product(&cross_product_3d(v1, v2), &v3)
}
