//! Two-element vectors.

use crate::{
    array::{NumericArray, check_components, component},
    error::Result,
    kernel::vec2,
    matrix3::Matrix3,
    vector::Vector,
};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 2-element vector with components x and y.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector2 {
    elements: [f64; 2],
}

impl Vector2 {
    pub const ZERO: Self = Self { elements: [0.0; 2] };

    /// Creates a new vector with the given components.
    ///
    /// # Errors
    /// Returns [`MathError::Validation`](crate::MathError::Validation) if
    /// debug checks are enabled and any component is not finite.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        check_components(&[x, y], Self::TYPE_NAME, "new")?;
        Ok(Self { elements: [x, y] })
    }

    pub fn from_slice(source: &[f64]) -> Result<Self> {
        let mut vector = Self::default();
        vector.copy(source)?;
        Ok(vector)
    }

    pub fn set(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        self.elements = [x, y];
        self.check("set")
    }

    /// The z-component of the cross product of the two vectors embedded in
    /// the xy-plane.
    pub fn cross(&self, other: &Self) -> f64 {
        vec2::cross(&self.elements, &other.elements)
    }

    /// Transforms the vector as a 2D point by the given homogeneous 3x3
    /// matrix, so that its translation applies.
    pub fn transform_as_point(&mut self, matrix: &Matrix3) -> Result<&mut Self> {
        self.elements = vec2::transform_mat3(&self.elements, matrix.as_array());
        self.check("transform_as_point")
    }

    /// Transforms the vector by the given column-major 2x2 matrix.
    pub fn transform_by_matrix2(&mut self, matrix: &[f64; 4]) -> Result<&mut Self> {
        self.elements = vec2::transform_mat2(&self.elements, matrix);
        self.check("transform_by_matrix2")
    }

    pub fn as_array(&self) -> &[f64; 2] {
        &self.elements
    }
}

impl NumericArray for Vector2 {
    const ELEMENTS: usize = 2;
    const TYPE_NAME: &'static str = "Vector2";

    fn elements(&self) -> &[f64] {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut [f64] {
        &mut self.elements
    }

    fn copy(&mut self, source: &[f64]) -> Result<&mut Self> {
        self.elements = [component(source, 0), component(source, 1)];
        self.check("copy")
    }
}

impl Vector for Vector2 {}

impl_numeric_array_traits!(Vector2, 2);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OptionValue, configure};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn vec2(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y).unwrap()
    }

    #[test]
    fn cross_product_of_axes_is_unit() {
        assert_eq!(vec2(1.0, 0.0).cross(&vec2(0.0, 1.0)), 1.0);
        assert_eq!(vec2(0.0, 1.0).cross(&vec2(1.0, 0.0)), -1.0);
        assert_eq!(vec2(2.0, 4.0).cross(&vec2(1.0, 2.0)), 0.0);
    }

    #[test]
    fn point_transform_applies_rotation_and_translation() {
        let mut matrix = Matrix3::from_rotation(FRAC_PI_2);
        matrix[6] = 10.0;
        matrix[7] = -1.0;

        let mut v = vec2(1.0, 0.0);
        v.transform_as_point(&matrix).unwrap();
        assert_abs_diff_eq!(v, vec2(10.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn matrix2_transform_works() {
        let mut v = vec2(1.0, 2.0);
        v.transform_by_matrix2(&[0.0, 1.0, -1.0, 0.0]).unwrap();
        assert!(v.exact_equals(&[-2.0, 1.0]));
    }

    #[test]
    fn construction_validates_in_debug_mode() {
        configure([("debug_checks", OptionValue::from(true))]).unwrap();
        assert!(Vector2::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(Vector2::from_slice(&[1.0]).is_err());
        assert!(Vector2::from_slice(&[1.0, 2.0]).is_ok());
    }

    #[test]
    fn set_overwrites_components() {
        let mut v = Vector2::ZERO;
        v.set(3.0, -4.0).unwrap();
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.to_string(), "[3, -4]");
    }
}
