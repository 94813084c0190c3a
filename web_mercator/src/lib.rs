//! Web Mercator projection helpers and viewport normalization.
//!
//! World coordinates span `[0, TILE_SIZE]` along both axes, with `x`
//! increasing eastwards from longitude -180 and `y` increasing northwards
//! from the southern edge of the projected map.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, PI, TAU};

/// Size in pixels of the single tile covering the world at zoom level 0.
pub const TILE_SIZE: f64 = 512.0;

/// The state of a map viewport. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportProps {
    pub width: f64,
    pub height: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub bearing: f64,
}

/// Projects the given longitude and latitude (in degrees) to world
/// coordinates.
pub fn lng_lat_to_world([longitude, latitude]: [f64; 2]) -> [f64; 2] {
    let lambda = longitude.to_radians();
    let phi = latitude.to_radians();
    let x = TILE_SIZE * (lambda + PI) / TAU;
    let y = TILE_SIZE * (PI + (FRAC_PI_4 + phi * 0.5).tan().ln()) / TAU;
    [x, y]
}

/// Unprojects the given world coordinates to longitude and latitude (in
/// degrees).
pub fn world_to_lng_lat([x, y]: [f64; 2]) -> [f64; 2] {
    let lambda = x / TILE_SIZE * TAU - PI;
    let phi = 2.0 * ((y / TILE_SIZE * TAU - PI).exp().atan() - FRAC_PI_4);
    [lambda.to_degrees(), phi.to_degrees()]
}

/// Computes `value` modulo `divisor` with the sign of `divisor`.
pub fn modulo(value: f64, divisor: f64) -> f64 {
    value.rem_euclid(divisor)
}

/// Applies the constraints of the map projection to the given viewport.
///
/// - Longitude and bearing outside `[-180, 180]` are wrapped into it.
/// - The zoom can't go below the level where the world exactly fills the
///   viewport height. At or below that level the latitude is centered.
/// - Otherwise the latitude is clamped so that no empty space shows above or
///   below the map.
///
/// Width, height and pitch are passed through.
pub fn normalize_viewport_props(props: ViewportProps) -> ViewportProps {
    let ViewportProps {
        width,
        height,
        mut longitude,
        mut latitude,
        mut zoom,
        pitch,
        mut bearing,
    } = props;

    if !(-180.0..=180.0).contains(&longitude) {
        longitude = wrap_degrees(longitude);
    }
    if !(-180.0..=180.0).contains(&bearing) {
        bearing = wrap_degrees(bearing);
    }

    let min_zoom = (height / TILE_SIZE).log2();
    if zoom <= min_zoom {
        log::trace!("Clamping zoom {zoom} to minimum {min_zoom} for height {height}");
        zoom = min_zoom;
        latitude = 0.0;
    } else {
        let half_height = height / 2.0 / zoom.exp2();
        let min_latitude = world_to_lng_lat([0.0, half_height])[1];
        let max_latitude = world_to_lng_lat([0.0, TILE_SIZE - half_height])[1];
        if latitude < min_latitude {
            log::trace!("Clamping latitude {latitude} to minimum {min_latitude}");
            latitude = min_latitude;
        } else if latitude > max_latitude {
            log::trace!("Clamping latitude {latitude} to maximum {max_latitude}");
            latitude = max_latitude;
        }
    }

    ViewportProps {
        width,
        height,
        longitude,
        latitude,
        zoom,
        pitch,
        bearing,
    }
}

fn wrap_degrees(degrees: f64) -> f64 {
    modulo(degrees + 180.0, 360.0) - 180.0
}
