mod camera;
mod events;
mod flight_control;

pub use camera::FlightCameraPlugin;
pub use events::{CursorCaptureChanged, FlightFault, ResetRequestEvent};
pub use flight_control::{FlightControlPlugin, FlightControlSet};
