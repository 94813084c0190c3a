//! Fixed-size vectors, matrices and quaternions with configurable tolerance,
//! validation and formatting.

#[macro_use]
mod macros;

pub mod array;
pub mod common;
pub mod config;
pub mod error;
pub mod interop;
pub mod kernel;
mod matrix;
pub mod matrix3;
pub mod matrix4;
pub mod quaternion;
pub mod vector;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use array::NumericArray;
pub use config::{Config, OptionValue};
pub use error::{MathError, Result};
pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use quaternion::Quaternion;
pub use vector::Vector;
pub use vector2::Vector2;
pub use vector3::{Vector3, Xyz};
pub use vector4::Vector4;
pub use web_mercator;
