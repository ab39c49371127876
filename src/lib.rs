pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{CameraData, ControlInputs, FlightCamera, FlightState, ModeState};
pub use physics::{FlightModel, KinematicConfig, KinematicFlightModel, TerrainQuery};
pub use plugins::{FlightCameraPlugin, FlightControlPlugin};
pub use resources::{ControlConfig, FlightController, InputState, SimulationConfig};
pub use utils::SimError;
