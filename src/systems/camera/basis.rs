use nalgebra::Vector3;

use crate::components::{CameraData, FlightState};
use crate::utils::{forward_vector, CAMERA_UP_EPSILON};

/// Up vector used when the projected up vector collapses.
pub fn fallback_up() -> Vector3<f64> {
    Vector3::y()
}

/// Body up axis for a yaw-pitch-roll attitude, before orthogonalisation.
///
/// Same rotation as [`forward_vector`]: yaw about world y, pitch about the
/// lateral axis, roll about the nose. Level flight gives world up.
pub fn raw_up_vector(pitch: f64, yaw: f64, roll: f64) -> Vector3<f64> {
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();
    let (sr, cr) = roll.sin_cos();
    Vector3::new(
        sy * sr - cy * sp * cr,
        cp * cr,
        sy * sp * cr + cy * sr,
    )
}

/// Remove the component of `up` along `forward` and renormalise.
///
/// Falls back to [`fallback_up`] when the remainder is shorter than
/// [`CAMERA_UP_EPSILON`].
pub fn orthonormalize_up(forward: &Vector3<f64>, up: &Vector3<f64>) -> Vector3<f64> {
    let projected = up - forward * forward.dot(up);
    let length = projected.norm();
    if length < CAMERA_UP_EPSILON || !length.is_finite() {
        return fallback_up();
    }
    projected / length
}

/// Camera position and orthonormal (forward, up) pair for the given state.
pub fn derive_camera_basis(state: &FlightState) -> CameraData {
    let forward = forward_vector(state.pitch, state.yaw).normalize();
    let up_raw = raw_up_vector(state.pitch, state.yaw, state.roll);
    CameraData {
        position: state.position,
        forward,
        up: orthonormalize_up(&forward, &up_raw),
    }
}
