use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle into [-π, π)
pub fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}

/// Move `current` towards `target` by at most `max_delta`
#[inline]
pub fn approach(current: f64, target: f64, max_delta: f64) -> f64 {
    current + (target - current).clamp(-max_delta, max_delta)
}

/// Unit nose direction for a y-up world where zero yaw looks along +x
pub fn forward_vector(pitch: f64, yaw: f64) -> Vector3<f64> {
    Vector3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        -yaw.sin() * pitch.cos(),
    )
}

/// True when every component is finite
#[inline]
pub fn is_finite_vec(v: &Vector3<f64>) -> bool {
    v.iter().all(|x| x.is_finite())
}
