//! Kernels for quaternions laid out as `[x, y, z, w]`.

use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector3, Vector4};

pub const IDENTITY: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// nalgebra stores the coordinates as `[i, j, k, w]`, matching the flat layout.
fn load(q: &[f64; 4]) -> Quaternion<f64> {
    Quaternion::from(Vector4::from(*q))
}

/// Wraps `q` without normalizing it.
pub(super) fn load_unit(q: &[f64; 4]) -> UnitQuaternion<f64> {
    UnitQuaternion::new_unchecked(load(q))
}

fn store(q: &Quaternion<f64>) -> [f64; 4] {
    q.coords.into()
}

/// The rotation by `radians` about the given unit axis.
pub fn from_axis_angle(axis: &[f64; 3], radians: f64) -> [f64; 4] {
    let axis = Unit::new_unchecked(Vector3::from(*axis));
    store(UnitQuaternion::from_axis_angle(&axis, radians).quaternion())
}

/// Computes the Hamilton product `a * b`, which applies `b` first when used
/// as a rotation.
pub fn multiply(a: &[f64; 4], b: &[f64; 4]) -> [f64; 4] {
    store(&(load(a) * load(b)))
}

pub fn conjugate(a: &[f64; 4]) -> [f64; 4] {
    store(&load(a).conjugate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn multiplying_by_identity_is_noop() {
        let q = [0.1, 0.2, 0.3, 0.9];
        assert_eq!(multiply(&q, &IDENTITY), q);
        assert_eq!(multiply(&IDENTITY, &q), q);
    }

    #[test]
    fn axis_angle_puts_scalar_part_last() {
        let q = from_axis_angle(&[1.0, 0.0, 0.0], 0.6);
        assert_abs_diff_eq!(q[0], 0.3_f64.sin(), epsilon = 1e-15);
        assert_abs_diff_eq!(q[3], 0.3_f64.cos(), epsilon = 1e-15);
        assert_eq!([q[1], q[2]], [0.0, 0.0]);
    }

    #[test]
    fn product_with_conjugate_of_unit_quaternion_is_identity() {
        let q = from_axis_angle(&[0.0, 1.0, 0.0], 0.7);
        let product = multiply(&q, &conjugate(&q));
        for (computed, expected) in product.iter().zip(IDENTITY) {
            assert_abs_diff_eq!(*computed, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn composing_quarter_turns_gives_half_turn() {
        let quarter = from_axis_angle(&[0.0, 0.0, 1.0], FRAC_PI_2);
        let half = multiply(&quarter, &quarter);
        assert_abs_diff_eq!(half[2], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(half[3], 0.0, epsilon = 1e-12);
    }
}
