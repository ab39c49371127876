mod camera;
mod controller;
mod physics;

pub use camera::{
    camera_sync_system, derive_camera_basis, fallback_up, orthonormalize_up, raw_up_vector,
};
pub use controller::{
    capture_change_system, cursor_grab_watch_system, focus_system, keyboard_input_system,
    map_controls, mouse_motion_system, mouse_wheel_system, sample_controls,
};
pub use physics::{flight_step_system, reset_request_system};
