//! Conversions to and from [`nalgebra`] types.
//!
//! Conversions into `nalgebra` always succeed. Conversions from `nalgebra`
//! go through the regular constructors and are validated when debug checks
//! are enabled.

use crate::{
    error::{MathError, Result},
    matrix3::Matrix3,
    matrix4::Matrix4,
    quaternion::Quaternion,
    vector2::Vector2,
    vector3::Vector3,
    vector4::Vector4,
};

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(vector: Vector2) -> Self {
        Self::from(*vector.as_array())
    }
}

impl TryFrom<nalgebra::Vector2<f64>> for Vector2 {
    type Error = MathError;

    fn try_from(vector: nalgebra::Vector2<f64>) -> Result<Self> {
        Self::new(vector.x, vector.y)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(vector: Vector3) -> Self {
        Self::from(*vector.as_array())
    }
}

impl TryFrom<nalgebra::Vector3<f64>> for Vector3 {
    type Error = MathError;

    fn try_from(vector: nalgebra::Vector3<f64>) -> Result<Self> {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f64> {
    fn from(vector: Vector3) -> Self {
        Self::from(*vector.as_array())
    }
}

impl From<Vector4> for nalgebra::Vector4<f64> {
    fn from(vector: Vector4) -> Self {
        Self::from(*vector.as_array())
    }
}

impl TryFrom<nalgebra::Vector4<f64>> for Vector4 {
    type Error = MathError;

    fn try_from(vector: nalgebra::Vector4<f64>) -> Result<Self> {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }
}

impl From<Matrix3> for nalgebra::Matrix3<f64> {
    fn from(matrix: Matrix3) -> Self {
        Self::from_column_slice(matrix.as_array())
    }
}

impl TryFrom<nalgebra::Matrix3<f64>> for Matrix3 {
    type Error = MathError;

    fn try_from(matrix: nalgebra::Matrix3<f64>) -> Result<Self> {
        Self::from_column_major(matrix.as_slice())
    }
}

impl From<Matrix4> for nalgebra::Matrix4<f64> {
    fn from(matrix: Matrix4) -> Self {
        Self::from_column_slice(matrix.as_array())
    }
}

impl TryFrom<nalgebra::Matrix4<f64>> for Matrix4 {
    type Error = MathError;

    fn try_from(matrix: nalgebra::Matrix4<f64>) -> Result<Self> {
        Self::from_column_major(matrix.as_slice())
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f64> {
    fn from(quaternion: Quaternion) -> Self {
        let [x, y, z, w] = *quaternion.as_array();
        Self::new(w, x, y, z)
    }
}

impl TryFrom<nalgebra::Quaternion<f64>> for Quaternion {
    type Error = MathError;

    fn try_from(quaternion: nalgebra::Quaternion<f64>) -> Result<Self> {
        Self::new(quaternion.i, quaternion.j, quaternion.k, quaternion.w)
    }
}
