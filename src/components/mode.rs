use serde::{Deserialize, Serialize};

use crate::resources::ControlConfig;
use crate::utils::{DEFAULT_FLAPS, FLAP_DETENTS, FLAP_INCREMENT};

/// A transition applied to the [`ModeState`] by a key-down edge or wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeChange {
    /// Additive throttle change, carrying the requested delta.
    ThrottleNudged(f64),
    /// Absolute throttle preset, carrying the preset index.
    ThrottlePreset(usize),
    /// Flaps moved to the next detent, carrying the new setting.
    FlapsCycled(f64),
}

/// Throttle and flap state that persists across ticks.
///
/// Every mutation path clamps, so `throttle` never leaves [0, 1] and `flaps`
/// always sits on one of the detents in [`FLAP_DETENTS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeState {
    throttle: f64,
    flaps: f64,
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new(crate::utils::DEFAULT_THROTTLE)
    }
}

impl ModeState {
    pub fn new(throttle: f64) -> Self {
        Self {
            throttle: throttle.clamp(0.0, 1.0),
            flaps: DEFAULT_FLAPS,
        }
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn flaps(&self) -> f64 {
        self.flaps
    }

    /// Overwrite the throttle, clamped to [0, 1]. Non-finite values are ignored.
    pub fn set_throttle(&mut self, throttle: f64) {
        if throttle.is_finite() {
            self.throttle = throttle.clamp(0.0, 1.0);
        }
    }

    /// Overwrite the flaps, snapped to the nearest detent.
    pub fn set_flaps(&mut self, flaps: f64) {
        if !flaps.is_finite() {
            return;
        }
        let flaps = flaps.clamp(0.0, 1.0);
        self.flaps = FLAP_DETENTS
            .iter()
            .copied()
            .min_by(|a, b| (a - flaps).abs().total_cmp(&(b - flaps).abs()))
            .unwrap_or(DEFAULT_FLAPS);
    }

    pub fn nudge_throttle(&mut self, delta: f64) {
        self.set_throttle(self.throttle + delta);
    }

    /// Cycle 0 -> 0.5 -> 1.0 -> 0.
    pub fn cycle_flaps(&mut self) -> f64 {
        self.flaps = if self.flaps >= 1.0 {
            0.0
        } else {
            self.flaps + FLAP_INCREMENT
        };
        self.flaps
    }

    /// Apply a wheel delta (positive = scrolled towards the user, as on the web).
    pub fn apply_wheel(&mut self, delta_y: f64, config: &ControlConfig) -> ModeChange {
        let delta = -delta_y * config.wheel_scale;
        self.nudge_throttle(delta);
        ModeChange::ThrottleNudged(delta)
    }

    /// Run the transition table for one key-down edge.
    ///
    /// `key` must already be normalised. Keys without a transition return `None`.
    pub fn apply_key(&mut self, key: &str, config: &ControlConfig) -> Option<ModeChange> {
        match key {
            "shift" | "=" | "+" => {
                self.nudge_throttle(config.throttle_step);
                Some(ModeChange::ThrottleNudged(config.throttle_step))
            }
            "control" | "-" => {
                self.nudge_throttle(-config.throttle_step);
                Some(ModeChange::ThrottleNudged(-config.throttle_step))
            }
            "f" => Some(ModeChange::FlapsCycled(self.cycle_flaps())),
            _ => {
                let index = preset_index(key)?;
                let preset = *config.throttle_presets.get(index)?;
                self.set_throttle(preset);
                Some(ModeChange::ThrottlePreset(index))
            }
        }
    }

    pub fn reset(&mut self, throttle: f64) {
        *self = Self::new(throttle);
    }
}

/// Number keys `1`..`9` select preset 0..8.
fn preset_index(key: &str) -> Option<usize> {
    let digit: usize = key.parse().ok()?;
    (1..=9).contains(&digit).then(|| digit - 1)
}
