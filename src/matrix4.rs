//! 4x4 matrices.

use crate::{
    array::{NumericArray, component},
    config::Config,
    error::Result,
    kernel::mat4,
    matrix::format_matrix,
    quaternion::Quaternion,
    vector3::Vector3,
};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 4x4 homogeneous transformation matrix stored in column-major order.
///
/// The element at `(row, col)` is at index `col * 4 + row`, which puts the
/// translation at indices 12, 13 and 14.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix4 {
    elements: [f64; 16],
}

impl Matrix4 {
    pub const IDENTITY: Self = Self::wrap(mat4::IDENTITY);

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from the first sixteen values of `source`, taken in
    /// column-major order.
    pub fn from_column_major(source: &[f64]) -> Result<Self> {
        let mut matrix = Self::default();
        matrix.copy(source)?;
        Ok(matrix)
    }

    pub fn from_translation(translation: &Vector3) -> Self {
        Self::wrap(mat4::from_translation(translation.as_array()))
    }

    /// A matrix scaling each axis by the corresponding component of
    /// `scaling`.
    pub fn from_scaling(scaling: &Vector3) -> Self {
        Self::wrap(mat4::from_scaling(scaling.as_array()))
    }

    pub fn from_x_rotation(radians: f64) -> Self {
        Self::wrap(mat4::from_x_rotation(radians))
    }

    pub fn from_y_rotation(radians: f64) -> Self {
        Self::wrap(mat4::from_y_rotation(radians))
    }

    pub fn from_z_rotation(radians: f64) -> Self {
        Self::wrap(mat4::from_z_rotation(radians))
    }

    /// The rotation matrix of the given unit quaternion, with no
    /// translation.
    pub fn from_quaternion(quaternion: &Quaternion) -> Self {
        Self::wrap(mat4::from_quat(quaternion.as_array()))
    }

    /// # Panics
    /// If `row` or `col` is not below 4.
    pub fn element(&self, row: usize, col: usize) -> f64 {
        assert!(row < 4 && col < 4, "matrix index out of bounds");
        self.elements[col * 4 + row]
    }

    /// The translation part of the matrix.
    pub fn translation(&self) -> Vector3 {
        Vector3::wrap([self.elements[12], self.elements[13], self.elements[14]])
    }

    /// Replaces this matrix `M` by `M * other`, so that `other` is applied
    /// first when transforming vectors.
    pub fn multiply_right(&mut self, other: &Self) -> Result<&mut Self> {
        self.elements = mat4::multiply(&self.elements, &other.elements);
        self.check("multiply_right")
    }

    /// Replaces this matrix `M` by `other * M`, so that `other` is applied
    /// last when transforming vectors.
    pub fn multiply_left(&mut self, other: &Self) -> Result<&mut Self> {
        self.elements = mat4::multiply(&other.elements, &self.elements);
        self.check("multiply_left")
    }

    pub fn transpose(&mut self) -> Result<&mut Self> {
        self.elements = mat4::transpose(&self.elements);
        self.check("transpose")
    }

    pub fn determinant(&self) -> f64 {
        mat4::determinant(&self.elements)
    }

    pub fn as_array(&self) -> &[f64; 16] {
        &self.elements
    }

    const fn wrap(elements: [f64; 16]) -> Self {
        Self { elements }
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl NumericArray for Matrix4 {
    const ELEMENTS: usize = 16;
    const TYPE_NAME: &'static str = "Matrix4";

    fn elements(&self) -> &[f64] {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut [f64] {
        &mut self.elements
    }

    fn copy(&mut self, source: &[f64]) -> Result<&mut Self> {
        self.elements = std::array::from_fn(|idx| component(source, idx));
        self.check("copy")
    }

    fn format_string(&self, config: &Config) -> String {
        format_matrix(&self.elements, 4, Self::TYPE_NAME, config)
    }
}

impl_numeric_array_traits!(Matrix4, 16);
