//! Scalar helpers shared by the containers.

use crate::config::{self, Config};

const RADIANS_TO_DEGREES: f64 = 180.0 / std::f64::consts::PI;
const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / 180.0;

/// Whether `a` and `b` are equal within the current tolerance.
pub fn equals(a: f64, b: f64) -> bool {
    equals_with_epsilon(a, b, config::epsilon())
}

/// Whether `a` and `b` are equal within the given tolerance.
///
/// The tolerance is absolute for values of magnitude below one and relative
/// above, that is `|a - b| <= epsilon * max(1, |a|, |b|)`. Identical values
/// always compare equal, and NaN never does.
pub fn equals_with_epsilon(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    if !(a.is_finite() && b.is_finite()) {
        return false;
    }
    (a - b).abs() <= epsilon * a.abs().max(b.abs()).max(1.0)
}

/// Formats the given value for display.
///
/// The value is first snapped to the epsilon grid, then rounded to the
/// configured number of significant digits. Trailing zeros are dropped.
pub fn format_value(value: f64, config: &Config) -> String {
    let rounded = round_to_epsilon(value, config.epsilon);
    if !rounded.is_finite() {
        return rounded.to_string();
    }
    let digits = config.precision.max(1) - 1;
    let significant = format!("{rounded:.digits$e}")
        .parse::<f64>()
        .unwrap_or(rounded);
    // Adding zero turns negative zero into zero.
    (significant + 0.0).to_string()
}

/// Formats the given angle for display, in degrees if
/// [`Config::print_degrees`] is set and in radians otherwise.
pub fn format_angle(radians: f64, config: &Config) -> String {
    if config.print_degrees {
        format_value(to_degrees(radians), config)
    } else {
        format_value(radians, config)
    }
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEGREES_TO_RADIANS
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * RADIANS_TO_DEGREES
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Interpolates linearly between `a` (at `t = 0`) and `b` (at `t = 1`). Both
/// endpoints are reproduced exactly.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    t * b + (1.0 - t) * a
}

// Values too large to be expressed in units of `epsilon` are left as is.
fn round_to_epsilon(value: f64, epsilon: f64) -> f64 {
    let steps = value / epsilon;
    if epsilon > 0.0 && steps.is_finite() {
        steps.round() * epsilon
    } else {
        value
    }
}
