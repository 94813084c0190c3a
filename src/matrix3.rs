//! 3x3 matrices.

use crate::{
    array::{NumericArray, component},
    config::Config,
    error::Result,
    kernel::mat3,
    matrix::format_matrix,
    quaternion::Quaternion,
};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 3x3 matrix stored in column-major order, so the element at `(row,
/// col)` is at index `col * 3 + row`.
///
/// Used both for linear transforms of 3D vectors and for homogeneous
/// transforms of 2D points.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix3 {
    elements: [f64; 9],
}

impl Matrix3 {
    pub const IDENTITY: Self = Self {
        elements: mat3::IDENTITY,
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from the first nine values of `source`, taken in
    /// column-major order.
    pub fn from_column_major(source: &[f64]) -> Result<Self> {
        let mut matrix = Self::default();
        matrix.copy(source)?;
        Ok(matrix)
    }

    /// The rotation by `radians` about the z-axis, which is also the 2D
    /// homogeneous rotation about the origin.
    pub fn from_rotation(radians: f64) -> Self {
        Self {
            elements: mat3::from_rotation(radians),
        }
    }

    /// The rotation matrix of the given unit quaternion.
    pub fn from_quaternion(quaternion: &Quaternion) -> Self {
        Self {
            elements: mat3::from_quat(quaternion.as_array()),
        }
    }

    /// # Panics
    /// If `row` or `col` is not below 3.
    pub fn element(&self, row: usize, col: usize) -> f64 {
        assert!(row < 3 && col < 3, "matrix index out of bounds");
        self.elements[col * 3 + row]
    }

    /// Replaces this matrix `M` by `M * other`.
    pub fn multiply_right(&mut self, other: &Self) -> Result<&mut Self> {
        self.elements = mat3::multiply(&self.elements, &other.elements);
        self.check("multiply_right")
    }

    /// Replaces this matrix `M` by `other * M`.
    pub fn multiply_left(&mut self, other: &Self) -> Result<&mut Self> {
        self.elements = mat3::multiply(&other.elements, &self.elements);
        self.check("multiply_left")
    }

    pub fn transpose(&mut self) -> Result<&mut Self> {
        self.elements = mat3::transpose(&self.elements);
        self.check("transpose")
    }

    pub fn determinant(&self) -> f64 {
        mat3::determinant(&self.elements)
    }

    pub fn as_array(&self) -> &[f64; 9] {
        &self.elements
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl NumericArray for Matrix3 {
    const ELEMENTS: usize = 9;
    const TYPE_NAME: &'static str = "Matrix3";

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
        format_matrix(&self.elements, 3, Self::TYPE_NAME, config)
    }
}

impl_numeric_array_traits!(Matrix3, 9);
