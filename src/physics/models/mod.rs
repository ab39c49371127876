mod kinematic;

pub use kinematic::{KinematicConfig, KinematicFlightModel};
