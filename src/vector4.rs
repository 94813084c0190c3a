//! Four-element vectors.

use crate::{
    array::{NumericArray, check_components, component},
    error::{Result, check_number},
    matrix4::Matrix4,
    vector::Vector,
};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 4-element vector with components x, y, z and w, typically a point or
/// direction in homogeneous coordinates.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector4 {
    elements: [f64; 4],
}

impl Vector4 {
    pub const ZERO: Self = Self { elements: [0.0; 4] };

    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Result<Self> {
        check_components(&[x, y, z, w], Self::TYPE_NAME, "new")?;
        Ok(Self {
            elements: [x, y, z, w],
        })
    }

    pub fn from_slice(source: &[f64]) -> Result<Self> {
        let mut vector = Self::default();
        vector.copy(source)?;
        Ok(vector)
    }

    pub fn z(&self) -> f64 {
        self.elements[2]
    }

    pub fn w(&self) -> f64 {
        self.elements[3]
    }

    pub fn set_z(&mut self, value: f64) -> Result<&mut Self> {
        self.elements[2] = check_number(value)?;
        Ok(self)
    }

    pub fn set_w(&mut self, value: f64) -> Result<&mut Self> {
        self.elements[3] = check_number(value)?;
        Ok(self)
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> Result<&mut Self> {
        self.elements = [x, y, z, w];
        self.check("set")
    }

    /// Multiplies the vector by the given matrix from the left. No
    /// homogeneous divide is performed.
    pub fn transform(&mut self, matrix: &Matrix4) -> Result<&mut Self> {
        let m = matrix.as_array();
        let [x, y, z, w] = self.elements;
        self.elements = std::array::from_fn(|row| {
            m[row] * x + m[4 + row] * y + m[8 + row] * z + m[12 + row] * w
        });
        self.check("transform")
    }

    /// Divides the x-, y- and z-components by w, unless w is zero.
    pub fn to_cartesian(&self) -> [f64; 3] {
        let [x, y, z, w] = self.elements;
        if w == 0.0 { [x, y, z] } else { [x / w, y / w, z / w] }
    }

    pub fn as_array(&self) -> &[f64; 4] {
        &self.elements
    }
}

impl NumericArray for Vector4 {
    const ELEMENTS: usize = 4;
    const TYPE_NAME: &'static str = "Vector4";

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

impl Vector for Vector4 {}

impl_numeric_array_traits!(Vector4, 4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MathError, vector3::Vector3};

    fn vec4(x: f64, y: f64, z: f64, w: f64) -> Vector4 {
        Vector4::new(x, y, z, w).unwrap()
    }

    #[test]
    fn homogeneous_point_is_translated() {
        let translation = Matrix4::from_translation(&Vector3::new(1.0, 2.0, 3.0).unwrap());
        let mut point = vec4(1.0, 1.0, 1.0, 1.0);
        point.transform(&translation).unwrap();
        assert!(point.exact_equals(&[2.0, 3.0, 4.0, 1.0]));

        let mut direction = vec4(1.0, 1.0, 1.0, 0.0);
        direction.transform(&translation).unwrap();
        assert!(direction.exact_equals(&[1.0, 1.0, 1.0, 0.0]));
    }

    #[test]
    fn cartesian_conversion_divides_by_w() {
        assert_eq!(vec4(2.0, 4.0, 6.0, 2.0).to_cartesian(), [1.0, 2.0, 3.0]);
        assert_eq!(vec4(2.0, 4.0, 6.0, 0.0).to_cartesian(), [2.0, 4.0, 6.0]);
    }

    #[test]
    fn component_accessors_work() {
        let mut v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.z(), v.w()), (3.0, 4.0));
        v.set_z(5.0).unwrap().set_w(6.0).unwrap();
        assert!(v.exact_equals(&[1.0, 2.0, 5.0, 6.0]));
        assert_eq!(
            v.set_w(f64::NAN).unwrap_err().to_string(),
            MathError::InvalidNumber { value: f64::NAN }.to_string()
        );
    }
}
