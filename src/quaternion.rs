//! Rotation quaternions.

use crate::{
    array::{NumericArray, check_components, component},
    error::Result,
    kernel::quat,
    vector3::Vector3,
};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A quaternion stored as `[x, y, z, w]`, where `w` is the scalar part.
///
/// Unit quaternions represent rotations. The constructors produce unit
/// quaternions, and [`normalize`](Self::normalize) restores unit length
/// after accumulated round-off.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quaternion {
    elements: [f64; 4],
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        elements: quat::IDENTITY,
    };

    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Result<Self> {
        check_components(&[x, y, z, w], Self::TYPE_NAME, "new")?;
        Ok(Self {
            elements: [x, y, z, w],
        })
    }

    /// The rotation by `radians` about the given unit-length axis.
    pub fn from_axis_rotation(axis: &Vector3, radians: f64) -> Result<Self> {
        let mut quaternion = Self {
            elements: quat::from_axis_angle(axis.as_array(), radians),
        };
        quaternion.check("from_axis_rotation")?;
        Ok(quaternion)
    }

    pub fn w(&self) -> f64 {
        self.elements[3]
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| a * b)
            .sum()
    }

    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scales the quaternion to unit length. A zero quaternion is left
    /// unchanged.
    pub fn normalize(&mut self) -> Result<&mut Self> {
        let length = self.length();
        if length != 0.0 {
            for element in &mut self.elements {
                *element /= length;
            }
        }
        self.check("normalize")
    }

    /// Negates the vector part, which inverts a unit quaternion.
    pub fn conjugate(&mut self) -> Result<&mut Self> {
        self.elements = quat::conjugate(&self.elements);
        self.check("conjugate")
    }

    /// Replaces this quaternion `q` by `q * other`. As a rotation, `other`
    /// is applied first.
    pub fn multiply_right(&mut self, other: &Self) -> Result<&mut Self> {
        self.elements = quat::multiply(&self.elements, &other.elements);
        self.check("multiply_right")
    }

    /// Replaces this quaternion `q` by `other * q`. As a rotation, `other`
    /// is applied last.
    pub fn multiply_left(&mut self, other: &Self) -> Result<&mut Self> {
        self.elements = quat::multiply(&other.elements, &self.elements);
        self.check("multiply_left")
    }

    /// Composes the rotation with a rotation by `radians` about the local
    /// x-axis.
    pub fn rotate_x(&mut self, radians: f64) -> Result<&mut Self> {
        self.rotate_about_axis([1.0, 0.0, 0.0], radians, "rotate_x")
    }

    pub fn rotate_y(&mut self, radians: f64) -> Result<&mut Self> {
        self.rotate_about_axis([0.0, 1.0, 0.0], radians, "rotate_y")
    }

    pub fn rotate_z(&mut self, radians: f64) -> Result<&mut Self> {
        self.rotate_about_axis([0.0, 0.0, 1.0], radians, "rotate_z")
    }

    pub fn as_array(&self) -> &[f64; 4] {
        &self.elements
    }

    fn rotate_about_axis(
        &mut self,
        axis: [f64; 3],
        radians: f64,
        operation: &'static str,
    ) -> Result<&mut Self> {
        let rotation = quat::from_axis_angle(&axis, radians);
        self.elements = quat::multiply(&self.elements, &rotation);
        self.check(operation)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl NumericArray for Quaternion {
    const ELEMENTS: usize = 4;
    const TYPE_NAME: &'static str = "Quaternion";

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
}

impl_numeric_array_traits!(Quaternion, 4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{OptionValue, configure},
        error::MathError,
        matrix3::Matrix3,
    };
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;

    fn vec3(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z).unwrap()
    }

    #[test]
    fn default_quaternion_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
        assert_eq!(Quaternion::IDENTITY.w(), 1.0);
        assert_eq!(Quaternion::IDENTITY.length(), 1.0);
    }

    #[test]
    fn axis_rotation_is_unit_length() {
        let q = Quaternion::from_axis_rotation(&vec3(0.0, 0.6, 0.8), 1.3).unwrap();
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn rotating_identity_about_axis_equals_axis_rotation() {
        let mut q = Quaternion::IDENTITY;
        q.rotate_z(0.5).unwrap();
        assert_abs_diff_eq!(
            q,
            Quaternion::from_axis_rotation(&vec3(0.0, 0.0, 1.0), 0.5).unwrap(),
            epsilon = EPSILON
        );

        let mut q = Quaternion::IDENTITY;
        q.rotate_x(0.5).unwrap().rotate_y(0.25).unwrap();
        let mut expected = Quaternion::from_axis_rotation(&vec3(1.0, 0.0, 0.0), 0.5).unwrap();
        expected
            .multiply_right(&Quaternion::from_axis_rotation(&vec3(0.0, 1.0, 0.0), 0.25).unwrap())
            .unwrap();
        assert_abs_diff_eq!(q, expected, epsilon = EPSILON);
    }

    #[test]
    fn conjugate_undoes_rotation() {
        let q = Quaternion::from_axis_rotation(&vec3(1.0, 0.0, 0.0), 0.9).unwrap();
        let mut inverse = q;
        inverse.conjugate().unwrap();

        let mut v = vec3(0.0, 1.0, 2.0);
        v.transform_by_quaternion(&q)
            .unwrap()
            .transform_by_quaternion(&inverse)
            .unwrap();
        assert_abs_diff_eq!(v, vec3(0.0, 1.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn right_multiplied_rotation_is_applied_first() {
        let quarter_z = Quaternion::from_axis_rotation(&vec3(0.0, 0.0, 1.0), FRAC_PI_2).unwrap();
        let quarter_x = Quaternion::from_axis_rotation(&vec3(1.0, 0.0, 0.0), FRAC_PI_2).unwrap();

        let mut q = quarter_z;
        q.multiply_right(&quarter_x).unwrap();

        // x-rotation takes y to z, which the z-rotation leaves in place.
        let mut v = vec3(0.0, 1.0, 0.0);
        v.transform_by_quaternion(&q).unwrap();
        assert_abs_diff_eq!(v, vec3(0.0, 0.0, 1.0), epsilon = EPSILON);

        let mut q = quarter_z;
        q.multiply_left(&quarter_x).unwrap();

        // z-rotation takes y to -x, which the x-rotation leaves in place.
        let mut v = vec3(0.0, 1.0, 0.0);
        v.transform_by_quaternion(&q).unwrap();
        assert_abs_diff_eq!(v, vec3(-1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_restores_unit_length() {
        let mut q = Quaternion::new(1.0, 2.0, 2.0, 4.0).unwrap();
        q.normalize().unwrap();
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(q.w(), 0.8, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_quaternion_leaves_it_unchanged() {
        let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.0).unwrap();
        q.normalize().unwrap();
        assert!(q.exact_equals(&[0.0; 4]));
    }

    #[test]
    fn invalid_axis_fails_in_debug_mode() {
        configure([("debug_checks", OptionValue::from(true))]).unwrap();
        let axis = Vector3::new(0.0, 0.0, 1.0).unwrap();
        assert_eq!(
            Quaternion::from_axis_rotation(&axis, f64::INFINITY).unwrap_err(),
            MathError::Validation {
                type_name: "Quaternion",
                operation: "from_axis_rotation"
            }
        );
    }

    proptest! {
        #[test]
        fn quaternion_transform_agrees_with_rotation_matrix(
            axis_x in -1.0..1.0_f64,
            axis_y in -1.0..1.0_f64,
            axis_z in 0.1..1.0_f64,
            angle in -PI..PI,
            x in -100.0..100.0_f64,
            y in -100.0..100.0_f64,
            z in -100.0..100.0_f64,
        ) {
            let mut axis = vec3(axis_x, axis_y, axis_z);
            crate::vector::Vector::normalize(&mut axis).unwrap();
            let q = Quaternion::from_axis_rotation(&axis, angle).unwrap();

            let mut by_quaternion = vec3(x, y, z);
            let mut by_matrix = by_quaternion;
            by_quaternion.transform_by_quaternion(&q).unwrap();
            by_matrix.transform_by_matrix3(&Matrix3::from_quaternion(&q)).unwrap();

            for idx in 0..3 {
                prop_assert!((by_quaternion[idx] - by_matrix[idx]).abs() < 1e-9);
            }
        }
    }
}
