//! Kernels for 3-element vectors.

use nalgebra::{Matrix2, Matrix2x3, Rotation3, Unit, Vector2, Vector3};

fn load(a: &[f64; 3]) -> Vector3<f64> {
    Vector3::from(*a)
}

pub fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    load(a).dot(&load(b))
}

pub fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    load(a).cross(&load(b)).into()
}

pub fn length(a: &[f64; 3]) -> f64 {
    load(a).norm()
}

/// Computes the unsigned angle in radians between `a` and `b`.
///
/// Uses `atan2(|a x b|, a . b)`, which stays accurate for nearly parallel
/// vectors. If either vector has zero length the result is zero.
pub fn angle(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let (a, b) = (load(a), load(b));
    a.cross(&b).norm().atan2(a.dot(&b))
}

fn rotate_about(
    a: &[f64; 3],
    origin: &[f64; 3],
    axis: &Unit<Vector3<f64>>,
    radians: f64,
) -> [f64; 3] {
    let origin = load(origin);
    let rotation = Rotation3::from_axis_angle(axis, radians);
    (rotation * (load(a) - origin) + origin).into()
}

/// Rotates `a` about the x-axis through `origin`.
pub fn rotate_x(a: &[f64; 3], origin: &[f64; 3], radians: f64) -> [f64; 3] {
    rotate_about(a, origin, &Vector3::x_axis(), radians)
}

/// Rotates `a` about the y-axis through `origin`.
pub fn rotate_y(a: &[f64; 3], origin: &[f64; 3], radians: f64) -> [f64; 3] {
    rotate_about(a, origin, &Vector3::y_axis(), radians)
}

/// Rotates `a` about the z-axis through `origin`.
pub fn rotate_z(a: &[f64; 3], origin: &[f64; 3], radians: f64) -> [f64; 3] {
    rotate_about(a, origin, &Vector3::z_axis(), radians)
}

/// Transforms `a` as a point (`w = 1`) by the 4x4 matrix `m`, including the
/// homogeneous divide. A resulting `w` of zero is treated as one.
pub fn transform_mat4(a: &[f64; 3], m: &[f64; 16]) -> [f64; 3] {
    let [x, y, z] = *a;
    let w = nonzero_or_one(m[3] * x + m[7] * y + m[11] * z + m[15]);
    [
        (m[0] * x + m[4] * y + m[8] * z + m[12]) / w,
        (m[1] * x + m[5] * y + m[9] * z + m[13]) / w,
        (m[2] * x + m[6] * y + m[10] * z + m[14]) / w,
    ]
}

/// Transforms `a` as a direction (`w = 0`) by the 4x4 matrix `m`. The
/// translation column does not contribute, neither to the result nor to the
/// homogeneous divide.
pub fn transform_mat4_as_vector(a: &[f64; 3], m: &[f64; 16]) -> [f64; 3] {
    let [x, y, z] = *a;
    let w = nonzero_or_one(m[3] * x + m[7] * y + m[11] * z);
    [
        (m[0] * x + m[4] * y + m[8] * z) / w,
        (m[1] * x + m[5] * y + m[9] * z) / w,
        (m[2] * x + m[6] * y + m[10] * z) / w,
    ]
}

pub fn transform_mat3(a: &[f64; 3], m: &[f64; 9]) -> [f64; 3] {
    (super::mat3::load(m) * load(a)).into()
}

/// Transforms the x and y components of `a` by the 2x2 matrix `m`. The z
/// component is kept.
pub fn transform_mat2(a: &[f64; 3], m: &[f64; 4]) -> [f64; 3] {
    let xy = Matrix2::from_column_slice(m) * Vector2::new(a[0], a[1]);
    [xy.x, xy.y, a[2]]
}

/// Transforms the x and y components of `a` by the 2D affine matrix `m`,
/// laid out as `[a, b, c, d, tx, ty]`. The z component is kept.
pub fn transform_mat2x3(a: &[f64; 3], m: &[f64; 6]) -> [f64; 3] {
    let xy = Matrix2x3::from_column_slice(m) * Vector3::new(a[0], a[1], 1.0);
    [xy.x, xy.y, a[2]]
}

/// Rotates `a` by the unit quaternion `q`.
pub fn transform_quat(a: &[f64; 3], q: &[f64; 4]) -> [f64; 3] {
    (super::quat::load_unit(q) * load(a)).into()
}

fn nonzero_or_one(w: f64) -> f64 {
    if w == 0.0 { 1.0 } else { w }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn cross_product_is_right_handed() {
        assert_eq!(cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn angle_between_orthogonal_vectors_is_right_angle() {
        assert_abs_diff_eq!(
            angle(&[3.0, 4.0, 0.0], &[0.0, 0.0, 1.0]),
            FRAC_PI_2,
            epsilon = EPSILON
        );
    }

    #[test]
    fn angle_between_opposite_vectors_is_pi() {
        assert_abs_diff_eq!(
            angle(&[1.0, 2.0, 3.0], &[-2.0, -4.0, -6.0]),
            PI,
            epsilon = EPSILON
        );
    }

    #[test]
    fn angle_with_zero_vector_is_zero() {
        assert_eq!(angle(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn rotations_follow_right_hand_rule() {
        let rotated = rotate_z(&[1.0, 0.0, 0.0], &[0.0; 3], FRAC_PI_2);
        assert_abs_diff_eq!(rotated[0], 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(rotated[1], 1.0, epsilon = EPSILON);

        let rotated = rotate_x(&[0.0, 1.0, 0.0], &[0.0; 3], FRAC_PI_2);
        assert_abs_diff_eq!(rotated[1], 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(rotated[2], 1.0, epsilon = EPSILON);

        let rotated = rotate_y(&[0.0, 0.0, 1.0], &[0.0; 3], FRAC_PI_2);
        assert_abs_diff_eq!(rotated[0], 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(rotated[2], 0.0, epsilon = EPSILON);
    }

    #[test]
    fn rotating_origin_about_itself_leaves_it_in_place() {
        let origin = [1.0, -2.0, 3.0];
        assert_eq!(rotate_y(&origin, &origin, 1.234), origin);
    }

    #[test]
    fn direction_transform_ignores_translation_column() {
        let mut m = [0.0; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        m[12] = 5.0;
        m[13] = 6.0;
        m[14] = 7.0;
        assert_eq!(transform_mat4(&[1.0, 1.0, 1.0], &m), [6.0, 7.0, 8.0]);
        assert_eq!(transform_mat4_as_vector(&[1.0, 1.0, 1.0], &m), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn point_transform_applies_homogeneous_divide() {
        let mut m = [0.0; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 2.0;
        assert_eq!(transform_mat4(&[2.0, 4.0, 6.0], &m), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn matrix2_transforms_keep_z() {
        assert_eq!(
            transform_mat2(&[1.0, 2.0, 9.0], &[0.0, 1.0, -1.0, 0.0]),
            [-2.0, 1.0, 9.0]
        );
        assert_eq!(
            transform_mat2x3(&[1.0, 2.0, 9.0], &[1.0, 0.0, 0.0, 1.0, 10.0, 20.0]),
            [11.0, 22.0, 9.0]
        );
    }

    #[test]
    fn quaternion_rotation_matches_axis_rotation() {
        let q = crate::kernel::quat::from_axis_angle(&[0.0, 0.0, 1.0], 0.9);
        let rotated = transform_quat(&[1.0, 2.0, 3.0], &q);
        let expected = rotate_z(&[1.0, 2.0, 3.0], &[0.0; 3], 0.9);
        for (computed, expected) in rotated.iter().zip(expected) {
            assert_abs_diff_eq!(*computed, expected, epsilon = EPSILON);
        }
    }

    #[test]
    fn identity_quaternion_leaves_vector_unchanged() {
        assert_eq!(
            transform_quat(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0, 1.0]),
            [1.0, 2.0, 3.0]
        );
    }
}
