mod helpers;

// Re-export
pub use assertions::{
    assert_camera_orthonormal, assert_controls_in_range, assert_position_eq, assert_state_valid,
};

pub use helpers::*;

pub use test_app::{TestApp, TestAppBuilder};
