//! Kernels for column-major 4x4 matrices.

use nalgebra::{Matrix4, Vector3};

pub const IDENTITY: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

pub(super) fn load(a: &[f64; 16]) -> Matrix4<f64> {
    Matrix4::from_column_slice(a)
}

fn store(m: &Matrix4<f64>) -> [f64; 16] {
    let mut out = [0.0; 16];
    out.copy_from_slice(m.as_slice());
    out
}

/// Computes `a * b`.
pub fn multiply(a: &[f64; 16], b: &[f64; 16]) -> [f64; 16] {
    store(&(load(a) * load(b)))
}

pub fn transpose(a: &[f64; 16]) -> [f64; 16] {
    store(&load(a).transpose())
}

pub fn determinant(a: &[f64; 16]) -> f64 {
    load(a).determinant()
}

pub fn from_translation(translation: &[f64; 3]) -> [f64; 16] {
    store(&Matrix4::new_translation(&Vector3::from(*translation)))
}

pub fn from_scaling(scaling: &[f64; 3]) -> [f64; 16] {
    store(&Matrix4::new_nonuniform_scaling(&Vector3::from(*scaling)))
}

pub fn from_x_rotation(radians: f64) -> [f64; 16] {
    store(&Matrix4::from_axis_angle(&Vector3::x_axis(), radians))
}

pub fn from_y_rotation(radians: f64) -> [f64; 16] {
    store(&Matrix4::from_axis_angle(&Vector3::y_axis(), radians))
}

pub fn from_z_rotation(radians: f64) -> [f64; 16] {
    store(&Matrix4::from_axis_angle(&Vector3::z_axis(), radians))
}

/// The rotation matrix corresponding to the unit quaternion `q`.
pub fn from_quat(q: &[f64; 4]) -> [f64; 16] {
    store(&super::quat::load_unit(q).to_homogeneous())
}
