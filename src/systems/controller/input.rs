use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow, WindowFocused};

use crate::physics::FlightModel;
use crate::plugins::CursorCaptureChanged;
use crate::resources::{key_id, FlightController};

/// Report the primary window's grab mode whenever it disagrees with the
/// controller's capture flag.
///
/// Compares against the controller rather than the last seen grab mode, so a
/// controller re-enabled under a locked cursor picks the capture back up.
pub fn cursor_grab_watch_system<M: FlightModel>(
    windows: Query<&Window, With<PrimaryWindow>>,
    controller: Res<FlightController<M>>,
    mut capture_events: EventWriter<CursorCaptureChanged>,
) {
    if !controller.is_enabled() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let captured = window.cursor_options.grab_mode != CursorGrabMode::None;
    if captured != controller.is_captured() {
        capture_events.send(CursorCaptureChanged { captured });
    }
}

pub fn capture_change_system<M: FlightModel>(
    mut events: EventReader<CursorCaptureChanged>,
    mut controller: ResMut<FlightController<M>>,
) {
    for event in events.read() {
        controller.on_capture_change(event.captured);
    }
}

pub fn focus_system<M: FlightModel>(
    mut events: EventReader<WindowFocused>,
    mut controller: ResMut<FlightController<M>>,
) {
    for event in events.read() {
        if !event.focused {
            controller.on_focus_lost();
        }
    }
}

/// Feed key events to the controller using their logical (layout-aware) key.
pub fn keyboard_input_system<M: FlightModel>(
    mut events: EventReader<KeyboardInput>,
    mut controller: ResMut<FlightController<M>>,
) {
    for event in events.read() {
        let Some(key) = key_id(&event.logical_key) else {
            continue;
        };
        match event.state {
            ButtonState::Pressed => {
                controller.on_key_down(&key);
            }
            ButtonState::Released => controller.on_key_up(&key),
        }
    }
}

pub fn mouse_motion_system<M: FlightModel>(
    mut events: EventReader<MouseMotion>,
    mut controller: ResMut<FlightController<M>>,
) {
    for event in events.read() {
        controller.on_mouse_motion(event.delta.x as f64, event.delta.y as f64);
    }
}

/// Bevy reports wheel-up as positive `y`; the controller expects pixel deltas
/// with scrolling towards the user positive, so the sign is flipped here.
pub fn mouse_wheel_system<M: FlightModel>(
    mut events: EventReader<MouseWheel>,
    mut controller: ResMut<FlightController<M>>,
) {
    let line_pixels = controller.config().control.line_scroll_pixels;
    for event in events.read() {
        let pixels = match event.unit {
            MouseScrollUnit::Line => event.y as f64 * line_pixels,
            MouseScrollUnit::Pixel => event.y as f64,
        };
        controller.on_wheel(-pixels);
    }
}
