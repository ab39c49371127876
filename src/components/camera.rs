use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Renderer-facing camera basis, recomputed every tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraData {
    pub position: Vector3<f64>,
    /// Unit view direction.
    pub forward: Vector3<f64>,
    /// Unit up vector, orthogonal to `forward`.
    pub up: Vector3<f64>,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            forward: Vector3::x(),
            up: Vector3::y(),
        }
    }
}

impl CameraData {
    /// Right-hand lateral axis of the basis.
    pub fn right(&self) -> Vector3<f64> {
        self.forward.cross(&self.up)
    }

    /// The basis as a bevy `Transform` looking along `forward`.
    pub fn to_transform(&self) -> Transform {
        let position = Vec3::new(
            self.position.x as f32,
            self.position.y as f32,
            self.position.z as f32,
        );
        let forward = Vec3::new(
            self.forward.x as f32,
            self.forward.y as f32,
            self.forward.z as f32,
        );
        let up = Vec3::new(self.up.x as f32, self.up.y as f32, self.up.z as f32);
        Transform::from_translation(position).looking_to(forward, up)
    }
}

/// Marker for cameras driven by the flight controller.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct FlightCamera;
