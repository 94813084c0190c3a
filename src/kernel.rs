//! Pure math kernels operating on flat numeric buffers.
//!
//! All matrices are column-major: element `(row, col)` of an `n x n` matrix
//! lives at index `col * n + row`. Vectors are column vectors multiplied on
//! the right of matrices. Quaternions are laid out as `[x, y, z, w]`.

pub mod mat3;
pub mod mat4;
pub mod quat;
pub mod vec2;
pub mod vec3;
