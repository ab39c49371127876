pub const GRAVITY: f64 = 9.80665; // m/s^2

/// Lower bound on the length of the projected up vector before it is renormalised.
pub const CAMERA_UP_EPSILON: f64 = 1e-4;

/// Upper bound on the elapsed time accepted for a single tick (s).
pub const MAX_FRAME_DT: f64 = 0.1;

// Throttle/flap defaults
pub const DEFAULT_THROTTLE: f64 = 0.5;
pub const DEFAULT_FLAPS: f64 = 0.0;
pub const THROTTLE_STEP: f64 = 0.02;
pub const WHEEL_THROTTLE_SCALE: f64 = 0.001;
pub const THROTTLE_PRESETS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Flap detents, in cycle order.
pub const FLAP_DETENTS: [f64; 3] = [0.0, 0.5, 1.0];
pub const FLAP_INCREMENT: f64 = 0.5;

// Stick feel
pub const PITCH_SENSITIVITY: f64 = 1.0;
pub const ROLL_SENSITIVITY: f64 = 1.0;
pub const YAW_SENSITIVITY: f64 = 0.5;
pub const MOUSE_SCALE: f64 = 0.0025; // pixels -> stick deflection

/// Pixel equivalent of one line-based wheel notch.
pub const LINE_SCROLL_PIXELS: f64 = 100.0;
