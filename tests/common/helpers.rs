use flyer_control::{
    physics::{FlatTerrain, KinematicConfig, KinematicFlightModel},
    FlightController, SimulationConfig,
};
use nalgebra::Vector3;

pub const TEST_DT: f64 = 1.0 / 60.0;

/// Creates a test simulation configuration with a known spawn point
pub fn create_test_config() -> SimulationConfig {
    SimulationConfig {
        start_position: Vector3::new(0.0, 500.0, 0.0),
        start_heading: 0.0,
        ..Default::default()
    }
}

/// Creates an enabled controller flying the kinematic model
pub fn create_test_controller() -> FlightController<KinematicFlightModel> {
    let mut controller = FlightController::new(
        KinematicFlightModel,
        KinematicConfig::default(),
        create_test_config(),
    );
    controller.enable();
    controller
}

/// Same as [`create_test_controller`] over flat ground at `height`
pub fn create_grounded_controller(height: f64) -> FlightController<KinematicFlightModel> {
    create_test_controller().with_terrain(FlatTerrain::new(height))
}

/// Runs the controller for `steps` ticks of `TEST_DT`
pub fn run_steps(controller: &mut FlightController<KinematicFlightModel>, steps: usize) {
    for _ in 0..steps {
        controller.step(TEST_DT).expect("step failed");
    }
}
