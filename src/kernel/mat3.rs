//! Kernels for column-major 3x3 matrices.

use nalgebra::Matrix3;

pub const IDENTITY: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

pub(super) fn load(a: &[f64; 9]) -> Matrix3<f64> {
    Matrix3::from_column_slice(a)
}

fn store(m: &Matrix3<f64>) -> [f64; 9] {
    let mut out = [0.0; 9];
    out.copy_from_slice(m.as_slice());
    out
}

/// Computes `a * b`.
pub fn multiply(a: &[f64; 9], b: &[f64; 9]) -> [f64; 9] {
    store(&(load(a) * load(b)))
}

pub fn transpose(a: &[f64; 9]) -> [f64; 9] {
    store(&load(a).transpose())
}

pub fn determinant(a: &[f64; 9]) -> f64 {
    load(a).determinant()
}

/// The 2D homogeneous rotation about the origin by the given angle.
pub fn from_rotation(radians: f64) -> [f64; 9] {
    store(&Matrix3::new_rotation(radians))
}

/// The rotation matrix corresponding to the unit quaternion `q`.
pub fn from_quat(q: &[f64; 4]) -> [f64; 9] {
    store(super::quat::load_unit(q).to_rotation_matrix().matrix())
}
