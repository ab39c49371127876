pub mod error;
pub mod models;
pub mod terrain;
pub mod traits;

pub use error::PhysicsError;
pub use models::{KinematicConfig, KinematicFlightModel};
pub use terrain::{FlatTerrain, NoiseTerrain};
pub use traits::{FlightModel, TerrainQuery};
