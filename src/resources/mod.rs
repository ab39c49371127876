pub mod config;
mod controller;
mod input;

pub use config::{ControlConfig, SimulationConfig};
pub use controller::{ActiveSession, ControlSnapshot, FlightController};
pub use input::{key_id, normalize_key, InputState, KeyPress};
