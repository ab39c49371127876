use nalgebra::Vector3;

use crate::components::{ControlInputs, FlightState};
use crate::physics::error::PhysicsError;

/// Ground height lookup, `(x, z) -> y` in world space.
pub trait TerrainQuery: Send + Sync {
    fn height_at(&self, x: f64, z: f64) -> f64;
}

impl<F> TerrainQuery for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn height_at(&self, x: f64, z: f64) -> f64 {
        self(x, z)
    }
}

/// Equations of motion driven by the flight controller.
///
/// Implementations own the aerodynamics; the controller only feeds them
/// sampled inputs and stores whatever state they return.
pub trait FlightModel: Send + Sync + 'static {
    type Config: Clone + Send + Sync + 'static;

    /// Build the state for a fresh session at `position`, pointing along `heading`.
    fn create_initial_state(
        &self,
        config: &Self::Config,
        position: Vector3<f64>,
        heading: f64,
    ) -> FlightState;

    /// Advance `state` by `dt` seconds under `inputs`.
    fn step_physics(
        &self,
        state: &FlightState,
        inputs: &ControlInputs,
        config: &Self::Config,
        dt: f64,
        terrain: Option<&dyn TerrainQuery>,
    ) -> Result<FlightState, PhysicsError>;
}
