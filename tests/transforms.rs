//! End-to-end behavior of the containers through the public API.

use approx::assert_abs_diff_eq;
use geomath::{
    Matrix3, Matrix4, MathError, NumericArray, OptionValue, Quaternion, Vector, Vector3,
    config,
};
use std::f64::consts::FRAC_PI_2;

const EPSILON: f64 = 1e-12;

fn vec3(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z).unwrap()
}

#[test]
fn translation_moves_points_but_not_directions() {
    let translation = Matrix4::from_translation(&vec3(5.0, -1.0, 2.0));

    let mut point = Vector3::ZERO;
    point.transform_as_point(&translation).unwrap();
    assert!(point.exact_equals(&[5.0, -1.0, 2.0]));

    let mut direction = Vector3::ZERO;
    direction.transform_as_vector(&translation).unwrap();
    assert!(direction.exact_equals(&[0.0, 0.0, 0.0]));
}

#[test]
fn rigid_transform_preserves_distances_and_angles() {
    let mut transform = Matrix4::from_translation(&vec3(1.0, 2.0, 3.0));
    transform
        .multiply_right(&Matrix4::from_quaternion(
            &Quaternion::from_axis_rotation(&vec3(0.0, 0.6, 0.8), 1.1).unwrap(),
        ))
        .unwrap();

    let mut a = vec3(1.0, 0.0, 0.0);
    let mut b = vec3(0.0, 2.0, -1.0);
    let distance = a.distance(&b);
    let angle = a.angle(&b);

    a.transform_as_point(&transform).unwrap();
    b.transform_as_point(&transform).unwrap();
    assert_abs_diff_eq!(a.distance(&b), distance, epsilon = 1e-9);

    let mut a = vec3(1.0, 0.0, 0.0);
    let mut b = vec3(0.0, 2.0, -1.0);
    a.transform_as_vector(&transform).unwrap();
    b.transform_as_vector(&transform).unwrap();
    assert_abs_diff_eq!(a.angle(&b), angle, epsilon = 1e-9);
}

#[test]
fn rotations_by_matrix_and_quaternion_agree() {
    let quaternion = Quaternion::from_axis_rotation(&vec3(0.0, 0.0, 1.0), FRAC_PI_2).unwrap();

    let mut by_quaternion = vec3(1.0, 0.0, 0.0);
    by_quaternion.transform_by_quaternion(&quaternion).unwrap();

    let mut by_matrix3 = vec3(1.0, 0.0, 0.0);
    by_matrix3
        .transform_by_matrix3(&Matrix3::from_rotation(FRAC_PI_2))
        .unwrap();

    let mut by_rotation = vec3(1.0, 0.0, 0.0);
    by_rotation.rotate_z(FRAC_PI_2).unwrap();

    assert_abs_diff_eq!(by_quaternion, vec3(0.0, 1.0, 0.0), epsilon = EPSILON);
    assert_abs_diff_eq!(by_matrix3, by_quaternion, epsilon = EPSILON);
    assert_abs_diff_eq!(by_rotation, by_quaternion, epsilon = EPSILON);
}

#[test]
fn debug_checks_guard_every_mutation() {
    config::configure([("debug_checks", OptionValue::from(true))]).unwrap();

    let mut v = vec3(1.0, 2.0, 3.0);
    assert_eq!(
        v.multiply_by_scalar(f64::INFINITY).unwrap_err(),
        MathError::Validation {
            type_name: "Vector3",
            operation: "multiply_by_scalar"
        }
    );

    config::with_config(
        config::Config {
            debug_checks: false,
            ..config::current()
        },
        || {
            let mut v = vec3(1.0, 2.0, 3.0);
            v.multiply_by_scalar(f64::INFINITY).unwrap();
            assert!(!v.validate());
        },
    );
    assert!(config::debug_checks_enabled());
}

#[test]
fn formatting_reflects_configuration() {
    let v = vec3(0.1 + 0.2, -0.0, 1e-13);
    assert_eq!(v.to_string(), "[0.3, 0, 0]");

    config::configure([
        ("print_types", OptionValue::from(true)),
        ("precision", OptionValue::from(2_u32)),
    ])
    .unwrap();
    assert_eq!(vec3(1.234, 5.0, 6.0).to_string(), "Vector3[1.2, 5, 6]");
}
