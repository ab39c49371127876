mod basis;
mod sync;

pub use basis::{derive_camera_basis, fallback_up, orthonormalize_up, raw_up_vector};
pub use sync::camera_sync_system;
