use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::window::WindowFocused;
use std::sync::Arc;

use crate::physics::{FlightModel, TerrainQuery};
use crate::plugins::{CursorCaptureChanged, FlightFault, ResetRequestEvent};
use crate::resources::{ControlSnapshot, FlightController, SimulationConfig};
use crate::systems::{
    capture_change_system, cursor_grab_watch_system, flight_step_system, focus_system,
    keyboard_input_system, mouse_motion_system, mouse_wheel_system, reset_request_system,
};

/// Per-frame ordering: collect input, step the model, then place cameras.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightControlSet {
    Input,
    Step,
    Camera,
}

/// Inserts a [`FlightController`] for model `M` and drives it from bevy's
/// keyboard, mouse, wheel, focus and cursor-grab events.
pub struct FlightControlPlugin<M: FlightModel + Clone> {
    model: M,
    model_config: M::Config,
    config: SimulationConfig,
    terrain: Option<Arc<dyn TerrainQuery>>,
    start_enabled: bool,
}

impl<M: FlightModel + Clone> FlightControlPlugin<M> {
    pub fn new(model: M, model_config: M::Config) -> Self {
        Self {
            model,
            model_config,
            config: SimulationConfig::default(),
            terrain: None,
            start_enabled: true,
        }
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_terrain(mut self, terrain: impl TerrainQuery + 'static) -> Self {
        self.terrain = Some(Arc::new(terrain));
        self
    }

    /// Start with the controller disabled; enable it later through the resource.
    pub fn disabled(mut self) -> Self {
        self.start_enabled = false;
        self
    }
}

impl<M: FlightModel + Clone> Plugin for FlightControlPlugin<M> {
    fn build(&self, app: &mut App) {
        let mut controller = FlightController::new(
            self.model.clone(),
            self.model_config.clone(),
            self.config.clone(),
        );
        if let Some(terrain) = &self.terrain {
            controller = controller.with_shared_terrain(terrain.clone());
        }
        if self.start_enabled {
            controller.enable();
        }

        // Registering is a no-op when InputPlugin/WindowPlugin already did it
        app.add_event::<KeyboardInput>()
            .add_event::<MouseMotion>()
            .add_event::<MouseWheel>()
            .add_event::<WindowFocused>()
            .add_event::<CursorCaptureChanged>()
            .add_event::<FlightFault>()
            .add_event::<ResetRequestEvent>();

        app.insert_resource(controller)
            .init_resource::<ControlSnapshot>()
            .configure_sets(
                Update,
                (
                    FlightControlSet::Input,
                    FlightControlSet::Step,
                    FlightControlSet::Camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                // Focus loss must come after every key-down of the frame
                (
                    cursor_grab_watch_system::<M>,
                    capture_change_system::<M>,
                    keyboard_input_system::<M>,
                    mouse_motion_system::<M>,
                    mouse_wheel_system::<M>,
                    focus_system::<M>,
                )
                    .chain()
                    .in_set(FlightControlSet::Input),
            )
            .add_systems(
                Update,
                (reset_request_system::<M>, flight_step_system::<M>)
                    .chain()
                    .in_set(FlightControlSet::Step),
            );

        info!("Flight control plugin built");
    }
}
