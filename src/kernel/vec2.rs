//! Kernels for 2-element vectors.

use nalgebra::{Matrix2, Vector2, Vector3};

fn load(a: &[f64; 2]) -> Vector2<f64> {
    Vector2::from(*a)
}

/// The z-component of the cross product of `a` and `b` embedded in 3D.
pub fn cross(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    load(a).perp(&load(b))
}

/// Transforms `a` as a 2D point (`w = 1`) by the 3x3 homogeneous matrix `m`.
/// The resulting `w` is dropped.
pub fn transform_mat3(a: &[f64; 2], m: &[f64; 9]) -> [f64; 2] {
    let p = super::mat3::load(m) * Vector3::new(a[0], a[1], 1.0);
    [p.x, p.y]
}

pub fn transform_mat2(a: &[f64; 2], m: &[f64; 4]) -> [f64; 2] {
    (Matrix2::from_column_slice(m) * load(a)).into()
}
