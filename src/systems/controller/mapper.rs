use nalgebra::Vector2;

use crate::components::{ControlInputs, ModeState};
use crate::resources::{ControlConfig, InputState};

const PITCH_UP_KEYS: [&str; 2] = ["s", "down"];
const PITCH_DOWN_KEYS: [&str; 2] = ["w", "up"];
const ROLL_RIGHT_KEYS: [&str; 2] = ["d", "right"];
const ROLL_LEFT_KEYS: [&str; 2] = ["a", "left"];
const YAW_RIGHT_KEYS: [&str; 1] = ["e"];
const YAW_LEFT_KEYS: [&str; 1] = ["q"];
const BRAKE_KEYS: [&str; 2] = ["b", " "];

/// +1, -1 or 0 depending on which side of an axis is held.
fn key_axis(input: &InputState, positive: &[&str], negative: &[&str]) -> f64 {
    let mut axis = 0.0;
    if input.any_held(positive) {
        axis += 1.0;
    }
    if input.any_held(negative) {
        axis -= 1.0;
    }
    axis
}

/// Map held keys plus one consumed mouse delta into normalised control inputs.
///
/// Mouse motion only contributes while the cursor is captured. Moving the
/// mouse towards the user (positive `dy`) raises the nose, moving it right
/// rolls right. Throttle and flaps come straight from `mode`.
pub fn map_controls(
    input: &InputState,
    mouse_delta: Vector2<f64>,
    mode: &ModeState,
    config: &ControlConfig,
) -> ControlInputs {
    let mut pitch = key_axis(input, &PITCH_UP_KEYS, &PITCH_DOWN_KEYS);
    let mut roll = key_axis(input, &ROLL_RIGHT_KEYS, &ROLL_LEFT_KEYS);

    if input.is_captured() {
        pitch += mouse_delta.y * config.pitch_sensitivity * config.mouse_scale;
        roll += mouse_delta.x * config.roll_sensitivity * config.mouse_scale;
    }

    let yaw = key_axis(input, &YAW_RIGHT_KEYS, &YAW_LEFT_KEYS) * config.yaw_sensitivity;

    ControlInputs {
        pitch: pitch.clamp(-1.0, 1.0),
        roll: roll.clamp(-1.0, 1.0),
        yaw,
        throttle: mode.throttle(),
        flaps: mode.flaps(),
        brake: input.any_held(&BRAKE_KEYS),
    }
}

/// Consume the pending mouse delta exactly once and map the result.
pub fn sample_controls(
    input: &mut InputState,
    mode: &ModeState,
    config: &ControlConfig,
) -> ControlInputs {
    let delta = input.consume_mouse_delta();
    map_controls(input, delta, mode, config)
}
