use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::is_finite_vec;

/// Kinematic state of the aircraft as produced by the physics collaborator.
///
/// World frame is y-up. At zero yaw the nose points along +x and the right wing
/// along +z; positive yaw turns the nose towards -z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Position in world space [m]
    pub position: Vector3<f64>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Rotation about the lateral axis, nose up positive [rad]
    pub pitch: f64,
    /// Rotation about the world vertical axis [rad]
    pub yaw: f64,
    /// Rotation about the forward axis, right wing down positive [rad]
    pub roll: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
        }
    }
}

impl FlightState {
    /// Level attitude at `position` pointing along `heading`, at rest.
    pub fn at_position(position: Vector3<f64>, heading: f64) -> Self {
        Self {
            position,
            yaw: heading,
            ..Default::default()
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn is_finite(&self) -> bool {
        is_finite_vec(&self.position)
            && is_finite_vec(&self.velocity)
            && self.pitch.is_finite()
            && self.yaw.is_finite()
            && self.roll.is_finite()
    }
}
