use bevy::prelude::*;

use crate::components::{CameraData, FlightCamera};
use crate::physics::FlightModel;
use crate::resources::FlightController;

/// Point every [`FlightCamera`] along the aircraft's current basis.
pub fn camera_sync_system<M: FlightModel>(
    controller: Res<FlightController<M>>,
    mut cameras: Query<(&mut Transform, Option<&mut CameraData>), With<FlightCamera>>,
) {
    let camera = controller.camera_data();
    for (mut transform, data) in cameras.iter_mut() {
        *transform = camera.to_transform();
        if let Some(mut data) = data {
            *data = camera;
        }
    }
}
