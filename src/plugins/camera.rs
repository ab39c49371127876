use bevy::prelude::*;
use std::marker::PhantomData;

use crate::physics::FlightModel;
use crate::plugins::FlightControlSet;
use crate::systems::camera_sync_system;

/// Keeps every `FlightCamera` entity on the aircraft's camera basis.
pub struct FlightCameraPlugin<M: FlightModel> {
    _model: PhantomData<fn() -> M>,
}

impl<M: FlightModel> Default for FlightCameraPlugin<M> {
    fn default() -> Self {
        Self {
            _model: PhantomData,
        }
    }
}

impl<M: FlightModel> Plugin for FlightCameraPlugin<M> {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            camera_sync_system::<M>.in_set(FlightControlSet::Camera),
        );
    }
}
