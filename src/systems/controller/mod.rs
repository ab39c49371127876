mod input;
mod mapper;

pub use input::{
    capture_change_system, cursor_grab_watch_system, focus_system, keyboard_input_system,
    mouse_motion_system, mouse_wheel_system,
};
pub use mapper::{map_controls, sample_controls};
