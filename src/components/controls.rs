use serde::{Deserialize, Serialize};

/// Normalised control inputs sampled once per tick.
///
/// Sign convention is "nose up = positive": a positive `pitch` raises the nose
/// (stick pulled back, `s`/`down`, mouse moved towards the user), a positive
/// `roll` lowers the right wing and a positive `yaw` swings the nose right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Pitch demand in [-1, 1].
    pub pitch: f64,
    /// Roll demand in [-1, 1].
    pub roll: f64,
    /// Yaw demand, bounded by the yaw sensitivity.
    pub yaw: f64,
    /// Power lever position in [0, 1].
    pub throttle: f64,
    /// Flap setting, one of 0.0, 0.5 or 1.0.
    pub flaps: f64,
    /// Wheel brake engaged.
    pub brake: bool,
}

impl Default for ControlInputs {
    /// Neutral stick, idle flaps and half throttle.
    fn default() -> Self {
        Self {
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            throttle: crate::utils::DEFAULT_THROTTLE,
            flaps: crate::utils::DEFAULT_FLAPS,
            brake: false,
        }
    }
}

impl ControlInputs {
    pub fn is_finite(&self) -> bool {
        [self.pitch, self.roll, self.yaw, self.throttle, self.flaps]
            .iter()
            .all(|v| v.is_finite())
    }
}
