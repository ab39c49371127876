use approx::assert_relative_eq;
use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::window::CursorGrabMode;
use flyer_control::{
    components::{CameraData, FlightCamera},
    physics::{KinematicConfig, KinematicFlightModel},
    plugins::{FlightControlPlugin, FlightFault, ResetRequestEvent},
    resources::ControlSnapshot,
    FlightController,
};
use nalgebra::Vector3;

use crate::common::{create_test_config, TestAppBuilder};

#[test]
fn test_key_events_drive_modes() {
    let mut app = TestAppBuilder::new().build();
    app.press_char("5");
    app.press_char("f");
    app.run_frame();

    assert_eq!(app.controller().throttle(), 1.0);
    assert_eq!(app.controller().flaps(), 0.5);

    let snapshot = *app.app.world().resource::<ControlSnapshot>();
    assert_eq!(snapshot.throttle, 1.0);
    assert_eq!(snapshot.flaps, 0.5);
}

#[test]
fn test_held_keys_reach_control_inputs() {
    let mut app = TestAppBuilder::new().build();
    app.press_char("S");
    app.press_char("e");
    app.run_frame();
    assert_eq!(app.controller().last_inputs().pitch, 1.0);
    assert!(app.controller().last_inputs().yaw > 0.0);

    app.release_char("s");
    app.run_frame();
    assert_eq!(app.controller().last_inputs().pitch, 0.0);
}

#[test]
fn test_mouse_motion_only_while_captured() {
    let mut app = TestAppBuilder::new().build();
    app.mouse_motion(0.0, 100.0);
    app.run_frame();
    assert_eq!(app.controller().last_inputs().pitch, 0.0);

    app.capture(true);
    app.mouse_motion(0.0, 100.0);
    app.run_frame();
    assert!(app.controller().last_inputs().pitch > 0.0);
    assert!(app.controller().is_captured());

    app.run_frame();
    assert_eq!(app.controller().last_inputs().pitch, 0.0);
}

#[test]
fn test_wheel_nudges_throttle_when_captured() {
    let mut app = TestAppBuilder::new().build();
    app.wheel_lines(1.0);
    app.run_frame();
    assert_eq!(app.controller().throttle(), 0.5);

    app.capture(true);
    app.wheel_lines(1.0);
    app.run_frame();
    assert_relative_eq!(app.controller().throttle(), 0.6, epsilon = 1e-12);
}

#[test]
fn test_focus_loss_clears_held_keys() {
    let mut app = TestAppBuilder::new().build();
    app.press_char("w");
    app.run_frame();
    assert!(app.controller().input().is_held("w"));

    app.focus_lost();
    app.run_frame();
    assert!(!app.controller().input().is_held("w"));
    assert_eq!(app.controller().last_inputs().pitch, 0.0);
}

#[test]
fn test_focus_loss_after_key_down_in_same_frame() {
    let mut app = TestAppBuilder::new().build();
    app.press_char("w");
    app.focus_lost();
    app.run_frame();

    assert!(!app.controller().input().is_held("w"));
    assert_eq!(app.controller().last_inputs().pitch, 0.0);

    app.run_frame();
    assert_eq!(app.controller().last_inputs().pitch, 0.0);
}

#[test]
fn test_window_grab_sets_capture() {
    let mut app = TestAppBuilder::new().build();
    let window = app.spawn_primary_window(CursorGrabMode::Locked);
    app.run_frame();
    assert!(app.controller().is_captured());

    app.set_grab_mode(window, CursorGrabMode::None);
    app.run_frame();
    assert!(!app.controller().is_captured());
}

#[test]
fn test_enable_under_locked_cursor_restores_capture() {
    let mut app = TestAppBuilder::new().disabled().build();
    app.spawn_primary_window(CursorGrabMode::Locked);
    app.run_frame();
    assert!(!app.controller().is_captured());

    app.controller_mut().enable();
    app.run_frame();
    assert!(app.controller().is_captured());

    app.mouse_motion(0.0, 100.0);
    app.run_frame();
    assert!(app.controller().last_inputs().pitch > 0.0);
}

#[test]
fn test_reenable_after_disable_picks_up_window_capture() {
    let mut app = TestAppBuilder::new().build();
    app.spawn_primary_window(CursorGrabMode::Locked);
    app.run_frame();
    assert!(app.controller().is_captured());

    app.controller_mut().disable();
    assert!(!app.controller().is_captured());
    app.run_frame();

    app.controller_mut().enable();
    app.mouse_motion(80.0, 0.0);
    app.run_frame();
    assert!(app.controller().is_captured());
    assert!(app.controller().last_inputs().roll > 0.0);
}

#[test]
fn test_disabled_controller_ignores_events() {
    let mut app = TestAppBuilder::new().disabled().build();
    let before = *app.controller().state();
    app.press_char("5");
    app.run_steps(3);
    assert_eq!(app.controller().throttle(), 0.5);
    assert_eq!(*app.controller().state(), before);

    app.controller_mut().enable();
    app.press_char("5");
    app.run_frame();
    assert_eq!(app.controller().throttle(), 1.0);
}

#[test]
fn test_reset_request() {
    let mut app = TestAppBuilder::new().build();
    app.press_char("5");
    app.run_frame();

    let position = Vector3::new(100.0, 800.0, -100.0);
    app.request_reset(ResetRequestEvent {
        position: Some(position),
        heading: Some(0.3),
    });
    app.run_frame();

    let controller = app.controller();
    assert_eq!(controller.throttle(), 0.5);
    assert_relative_eq!(controller.state().yaw, 0.3, epsilon = 1e-9);
    // At most one clamped tick of flight since the reset
    let drift = (controller.state().position - position).norm();
    assert!(drift <= controller.config().max_dt * 100.0, "drift {}", drift);
}

#[test]
fn test_camera_follows_aircraft() {
    let mut app = TestAppBuilder::new().build();
    let camera = app
        .app
        .world_mut()
        .spawn((FlightCamera, CameraData::default(), Transform::default()))
        .id();
    app.run_frame();

    let expected = app.controller().camera_data();
    let world = app.app.world();
    let transform = world.get::<Transform>(camera).unwrap();
    let data = world.get::<CameraData>(camera).unwrap();

    assert_eq!(*data, expected);
    assert_relative_eq!(transform.translation.x, expected.position.x as f32, epsilon = 1e-2);
    assert_relative_eq!(transform.translation.y, expected.position.y as f32, epsilon = 1e-2);
    assert_relative_eq!(transform.translation.z, expected.position.z as f32, epsilon = 1e-2);
    assert_relative_eq!(transform.forward().x, expected.forward.x as f32, epsilon = 1e-4);
    assert_relative_eq!(transform.up().y, expected.up.y as f32, epsilon = 1e-4);
}

#[test]
fn test_physics_failure_reported_once() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(InputPlugin)
        .add_plugins(
            FlightControlPlugin::new(KinematicFlightModel, KinematicConfig::default())
                .with_config(create_test_config())
                .with_terrain(|_: f64, _: f64| f64::NAN),
        );

    app.update();
    app.update();

    assert_eq!(app.world().resource::<Events<FlightFault>>().len(), 1);
    assert!(app.world().resource::<ControlSnapshot>().faulted);
    assert!(app
        .world()
        .resource::<FlightController<KinematicFlightModel>>()
        .is_faulted());

    app.world_mut().send_event(ResetRequestEvent::default());
    app.update();
    // The terrain is still broken, so the fresh session faults again
    assert!(app
        .world()
        .resource::<FlightController<KinematicFlightModel>>()
        .is_faulted());
}
