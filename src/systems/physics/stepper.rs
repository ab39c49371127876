use bevy::prelude::*;

use crate::physics::FlightModel;
use crate::plugins::{FlightFault, ResetRequestEvent};
use crate::resources::{ControlSnapshot, FlightController};
use crate::utils::SimError;

/// Advance the flight controller once per frame using the frame's elapsed time.
///
/// The first failure of a session is reported as a [`FlightFault`]; later
/// frames stay frozen until a reset arrives.
pub fn flight_step_system<M: FlightModel>(
    time: Res<Time>,
    mut controller: ResMut<FlightController<M>>,
    mut snapshot: ResMut<ControlSnapshot>,
    mut faults: EventWriter<FlightFault>,
) {
    match controller.step(time.delta_secs_f64()) {
        Ok(_) | Err(SimError::SessionFaulted(_)) => {}
        Err(err) => {
            faults.send(FlightFault {
                message: err.to_string(),
            });
        }
    }
    *snapshot = controller.snapshot();
}

pub fn reset_request_system<M: FlightModel>(
    mut requests: EventReader<ResetRequestEvent>,
    mut controller: ResMut<FlightController<M>>,
) {
    // Only the latest request matters within a frame
    if let Some(request) = requests.read().last() {
        let position = request
            .position
            .unwrap_or(controller.config().start_position);
        let heading = request.heading.unwrap_or(controller.config().start_heading);
        controller.reset(position, heading);
    }
}
