//! Three-element vectors.

use crate::{
    array::{NumericArray, check_components, component},
    error::{Result, check_number},
    kernel::vec3,
    matrix3::Matrix3,
    matrix4::Matrix4,
    quaternion::Quaternion,
    vector::Vector,
};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 3-element vector with components x, y and z.
///
/// Depending on the operation the vector represents either a point or a
/// direction. The 4x4 transforms make the distinction explicit through
/// [`transform_as_point`](Self::transform_as_point) and
/// [`transform_as_vector`](Self::transform_as_vector).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector3 {
    elements: [f64; 3],
}

/// A loosely structured record with x-, y- and z-fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::wrap([0.0; 3]);

    /// Creates a new vector with the given components.
    ///
    /// # Errors
    /// Returns [`MathError::Validation`](crate::MathError::Validation) if
    /// debug checks are enabled and any component is not finite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        check_components(&[x, y, z], Self::TYPE_NAME, "new")?;
        Ok(Self::wrap([x, y, z]))
    }

    /// Creates a new vector from the first three values of `source`.
    pub fn from_slice(source: &[f64]) -> Result<Self> {
        let mut vector = Self::default();
        vector.copy(source)?;
        Ok(vector)
    }

    /// Creates a new vector from the fields of the given record.
    pub fn from_xyz(object: &Xyz) -> Result<Self> {
        let mut vector = Self::default();
        vector.from_object(object)?;
        Ok(vector)
    }

    pub fn z(&self) -> f64 {
        self.elements[2]
    }

    /// Sets the z-component.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidNumber`](crate::MathError::InvalidNumber)
    /// if `value` is not finite.
    pub fn set_z(&mut self, value: f64) -> Result<&mut Self> {
        self.elements[2] = check_number(value)?;
        Ok(self)
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) -> Result<&mut Self> {
        self.elements = [x, y, z];
        self.check("set")
    }

    /// Overwrites the components with the fields of the given record. With
    /// debug checks enabled, the fields are validated before anything is
    /// assigned.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_object(&mut self, object: &Xyz) -> Result<&mut Self> {
        check_components(&[object.x, object.y, object.z], Self::TYPE_NAME, "from_object")?;
        self.elements = [object.x, object.y, object.z];
        self.check("from_object")
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn to_object(&self) -> Xyz {
        let [x, y, z] = self.elements;
        Xyz { x, y, z }
    }

    /// Computes the unsigned angle in radians between this vector and
    /// `other`. If either vector has zero length, the angle is zero.
    pub fn angle(&self, other: &Self) -> f64 {
        vec3::angle(&self.elements, &other.elements)
    }

    /// Replaces this vector by its cross product with `other`
    /// (`self x other`, right-handed).
    pub fn cross(&mut self, other: &Self) -> Result<&mut Self> {
        self.elements = vec3::cross(&self.elements, &other.elements);
        self.check("cross")
    }

    /// Rotates the vector about the x-axis through the origin.
    pub fn rotate_x(&mut self, radians: f64) -> Result<&mut Self> {
        self.rotate_x_about(radians, &Self::ZERO)
    }

    /// Rotates the vector about the y-axis through the origin.
    pub fn rotate_y(&mut self, radians: f64) -> Result<&mut Self> {
        self.rotate_y_about(radians, &Self::ZERO)
    }

    /// Rotates the vector about the z-axis through the origin.
    pub fn rotate_z(&mut self, radians: f64) -> Result<&mut Self> {
        self.rotate_z_about(radians, &Self::ZERO)
    }

    /// Rotates the vector about the axis parallel to the x-axis passing
    /// through `origin`.
    pub fn rotate_x_about(&mut self, radians: f64, origin: &Self) -> Result<&mut Self> {
        self.elements = vec3::rotate_x(&self.elements, &origin.elements, radians);
        self.check("rotate_x")
    }

    pub fn rotate_y_about(&mut self, radians: f64, origin: &Self) -> Result<&mut Self> {
        self.elements = vec3::rotate_y(&self.elements, &origin.elements, radians);
        self.check("rotate_y")
    }

    pub fn rotate_z_about(&mut self, radians: f64, origin: &Self) -> Result<&mut Self> {
        self.elements = vec3::rotate_z(&self.elements, &origin.elements, radians);
        self.check("rotate_z")
    }

    /// Transforms the vector as a point. Same as
    /// [`transform_as_point`](Self::transform_as_point).
    pub fn transform(&mut self, matrix: &Matrix4) -> Result<&mut Self> {
        self.transform_as_point(matrix)
    }

    /// Transforms the vector as a point, with an implicit fourth component of
    /// one. The translation of `matrix` applies, and the result is divided
    /// by the transformed fourth component.
    pub fn transform_as_point(&mut self, matrix: &Matrix4) -> Result<&mut Self> {
        self.elements = vec3::transform_mat4(&self.elements, matrix.as_array());
        self.check("transform_as_point")
    }

    /// Transforms the vector as a direction, with an implicit fourth
    /// component of zero. The translation of `matrix` is ignored.
    pub fn transform_as_vector(&mut self, matrix: &Matrix4) -> Result<&mut Self> {
        self.elements = vec3::transform_mat4_as_vector(&self.elements, matrix.as_array());
        self.check("transform_as_vector")
    }

    pub fn transform_by_matrix3(&mut self, matrix: &Matrix3) -> Result<&mut Self> {
        self.elements = vec3::transform_mat3(&self.elements, matrix.as_array());
        self.check("transform_by_matrix3")
    }

    /// Transforms the x- and y-components by the given column-major 2x2
    /// matrix. The z-component is kept.
    pub fn transform_by_matrix2(&mut self, matrix: &[f64; 4]) -> Result<&mut Self> {
        self.elements = vec3::transform_mat2(&self.elements, matrix);
        self.check("transform_by_matrix2")
    }

    /// Transforms the x- and y-components by the given 2D affine matrix,
    /// laid out as the two columns of the linear part followed by the
    /// translation. The z-component is kept.
    pub fn transform_by_matrix2x3(&mut self, matrix: &[f64; 6]) -> Result<&mut Self> {
        self.elements = vec3::transform_mat2x3(&self.elements, matrix);
        self.check("transform_by_matrix2x3")
    }

    /// Rotates the vector by the given (unit) quaternion.
    pub fn transform_by_quaternion(&mut self, quaternion: &Quaternion) -> Result<&mut Self> {
        self.elements = vec3::transform_quat(&self.elements, quaternion.as_array());
        self.check("transform_by_quaternion")
    }

    pub fn as_array(&self) -> &[f64; 3] {
        &self.elements
    }

    pub(crate) const fn wrap(elements: [f64; 3]) -> Self {
        Self { elements }
    }
}

impl NumericArray for Vector3 {
    const ELEMENTS: usize = 3;
    const TYPE_NAME: &'static str = "Vector3";

    fn elements(&self) -> &[f64] {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut [f64] {
        &mut self.elements
    }

    fn copy(&mut self, source: &[f64]) -> Result<&mut Self> {
        self.elements = [
            component(source, 0),
            component(source, 1),
            component(source, 2),
        ];
        self.check("copy")
    }
}

impl Vector for Vector3 {}

impl From<Vector3> for Xyz {
    fn from(vector: Vector3) -> Self {
        vector.to_object()
    }
}

impl_numeric_array_traits!(Vector3, 3);
