pub mod control;
pub mod simulation;

pub use control::ControlConfig;
pub use simulation::SimulationConfig;
