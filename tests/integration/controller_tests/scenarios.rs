use approx::assert_relative_eq;
use flyer_control::{
    physics::PhysicsError,
    systems::derive_camera_basis,
    FlightState, SimError,
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use crate::common::{
    assert_camera_orthonormal, assert_position_eq, assert_state_valid, create_grounded_controller,
    create_test_controller, run_steps, TEST_DT,
};

#[test]
fn test_level_attitude_gives_world_axes() {
    let camera = derive_camera_basis(&FlightState::default());
    assert_relative_eq!(camera.forward, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(camera.up, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
}

#[test]
fn test_reset_after_full_throttle_and_flaps() {
    let mut controller = create_test_controller();
    controller.on_key_down("5");
    controller.on_key_down("f");
    controller.on_key_down("f");
    assert_eq!(controller.throttle(), 1.0);
    assert_eq!(controller.flaps(), 1.0);
    run_steps(&mut controller, 60);

    let position = Vector3::new(-250.0, 420.0, 75.5);
    controller.reset(position, 2.0);

    assert_eq!(controller.throttle(), 0.5);
    assert_eq!(controller.flaps(), 0.0);
    assert_eq!(controller.state().position, position);
    assert_eq!(controller.state().yaw, 2.0);
    assert_eq!(controller.camera_data().position, position);
}

#[test]
fn test_focus_lost_releases_pitch_key() {
    let mut controller = create_test_controller();
    controller.on_key_down("w");
    controller.step(TEST_DT).unwrap();
    assert_eq!(controller.last_inputs().pitch, -1.0);

    controller.on_focus_lost();
    controller.step(TEST_DT).unwrap();
    assert_eq!(controller.last_inputs().pitch, 0.0);
}

#[test]
fn test_mouse_motion_applies_for_one_tick() {
    let mut controller = create_test_controller();
    controller.on_capture_change(true);
    controller.on_mouse_motion(0.0, 200.0);

    controller.step(TEST_DT).unwrap();
    let first = *controller.last_inputs();
    controller.step(TEST_DT).unwrap();
    let second = *controller.last_inputs();

    assert_relative_eq!(first.pitch, 0.5, epsilon = 1e-12);
    assert_eq!(second.pitch, 0.0);
}

#[test]
fn test_release_capture_drops_pending_motion() {
    let mut controller = create_test_controller();
    controller.on_capture_change(true);
    controller.on_mouse_motion(300.0, 0.0);
    controller.on_capture_change(false);
    controller.on_capture_change(true);
    controller.step(TEST_DT).unwrap();
    assert_eq!(controller.last_inputs().roll, 0.0);
}

#[test]
fn test_banked_flight_keeps_camera_orthonormal() {
    let mut controller = create_test_controller();
    controller.on_key_down("d");
    controller.on_key_down("s");
    for _ in 0..600 {
        let state = controller.step(TEST_DT).unwrap();
        assert_state_valid(&state);
        assert_camera_orthonormal(&controller.camera_data());
    }
    assert!(controller.state().roll.abs() > 0.0);
}

#[test]
fn test_climb_holds_attitude() {
    let mut controller = create_test_controller();
    let start = controller.state().position;

    controller.on_key_down("s");
    run_steps(&mut controller, 30);
    controller.on_key_up("s");
    run_steps(&mut controller, 60);

    assert!(controller.state().position.y > start.y);
    assert!(controller.state().pitch > 0.0);
}

#[test]
fn test_ground_roll_and_braking() {
    let mut controller = create_grounded_controller(0.0);
    controller.reset(Vector3::new(0.0, 1.5, 0.0), 0.0);
    controller.on_key_down("1");
    controller.on_key_down("b");
    run_steps(&mut controller, 900);

    let state = *controller.state();
    assert_relative_eq!(state.speed(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(state.position.y, 1.5, epsilon = 1e-9);
    assert!(state.position.x > 0.0);

    // Stopped aircraft stays put
    run_steps(&mut controller, 10);
    assert_position_eq(&controller.state().position, &state.position, 1e-9);
}

#[test]
fn test_broken_terrain_faults_until_reset() {
    let mut controller = create_test_controller().with_terrain(|_: f64, _: f64| f64::NAN);
    let before = *controller.state();

    let err = controller.step(TEST_DT).unwrap_err();
    assert!(matches!(
        err,
        SimError::Physics(PhysicsError::NonFiniteState(_))
    ));
    assert_eq!(*controller.state(), before);
    assert!(matches!(
        controller.step(TEST_DT),
        Err(SimError::SessionFaulted(_))
    ));
    assert!(controller.fault().is_some());

    controller.reset_to_start();
    assert!(!controller.is_faulted());
    // Terrain is still broken, so the next step faults again
    assert!(controller.step(TEST_DT).is_err());
}

#[test]
fn test_presets_apply_in_arrival_order() {
    let mut controller = create_test_controller();
    controller.on_capture_change(true);
    controller.on_key_down("=");
    controller.on_key_down("2");
    assert_eq!(controller.throttle(), 0.25);

    controller.on_key_down("4");
    controller.on_wheel(100.0);
    assert_relative_eq!(controller.throttle(), 0.65, epsilon = 1e-12);

    controller.step(TEST_DT).unwrap();
    assert_relative_eq!(controller.last_inputs().throttle, 0.65, epsilon = 1e-12);
}

#[test]
fn test_scoped_session_releases_input() {
    let mut controller = create_test_controller();
    controller.disable();
    let parked = *controller.state();

    {
        let mut session = controller.activate();
        session.on_capture_change(true);
        session.on_key_down("a");
        session.on_mouse_motion(40.0, 0.0);
        session.step(TEST_DT).unwrap();
        assert!(session.is_enabled());
    }

    assert!(!controller.is_enabled());
    assert!(!controller.is_captured());
    assert_eq!(controller.input().held_count(), 0);
    assert!(controller.state().position != parked.position);

    let frozen = *controller.state();
    controller.on_key_down("5");
    assert_eq!(controller.step(TEST_DT).unwrap(), frozen);
    assert_eq!(controller.throttle(), 0.5);
}

#[test]
fn test_terrain_height_lookup() {
    assert_eq!(create_test_controller().terrain_height(3.0, 4.0), None);
    assert_eq!(
        create_grounded_controller(12.0).terrain_height(3.0, 4.0),
        Some(12.0)
    );
}
