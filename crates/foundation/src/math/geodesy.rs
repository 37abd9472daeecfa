//! Spherical projection for the globe scene.
//!
//! Latitude is measured from the north pole and longitude is shifted by 180°
//! so that the globe texture seam lands where the scene expects it. The
//! scene's `+Y` axis points to the north pole.

use std::f64::consts::PI;

use super::Vec3;

/// Radius at which event markers sit (the globe surface).
pub const MARKER_RADIUS: f64 = 1.0;
/// Radius the camera is moved to when focusing on a single event.
pub const FOCUS_RADIUS: f64 = 2.0;

/// Converts geographic coordinates in degrees to a point on a sphere of
/// `radius` centered on the origin.
pub fn project(latitude_deg: f64, longitude_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - latitude_deg) * PI / 180.0;
    let theta = (longitude_deg + 180.0) * PI / 180.0;

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    Vec3::new(
        -radius * sin_phi * cos_theta,
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    )
}

/// Inverse of [`project`]: returns `(latitude_deg, longitude_deg)` of the
/// direction from the origin to `point`.
///
/// Longitude is normalized to `(-180, 180]`. Returns `None` for the origin.
pub fn unproject(point: Vec3) -> Option<(f64, f64)> {
    let r = point.length();
    if r <= 0.0 || !r.is_finite() {
        return None;
    }

    let phi = (point.y / r).clamp(-1.0, 1.0).acos();
    let theta = point.z.atan2(-point.x);

    let latitude = 90.0 - phi.to_degrees();
    let mut longitude = theta.to_degrees() - 180.0;
    if longitude <= -180.0 {
        longitude += 360.0;
    }
    Some((latitude, longitude))
}
