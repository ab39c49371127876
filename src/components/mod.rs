pub mod camera;
pub mod controls;
pub mod flight;
pub mod mode;

pub use camera::{CameraData, FlightCamera};
pub use controls::ControlInputs;
pub use flight::FlightState;
pub use mode::{ModeChange, ModeState};
