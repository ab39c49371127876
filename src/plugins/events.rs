use bevy::prelude::*;
use nalgebra::Vector3;

/// Exclusive cursor capture was entered or left.
///
/// Emitted when the primary window's grab mode disagrees with the controller.
/// Embeddings without a primary window may send it directly.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCaptureChanged {
    pub captured: bool,
}

/// The physics model failed and the session needs a reset.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FlightFault {
    pub message: String,
}

/// Ask the controller to start a fresh session.
#[derive(Event, Debug, Clone, Copy, PartialEq, Default)]
pub struct ResetRequestEvent {
    /// Spawn position, or the configured start position when `None`.
    pub position: Option<Vector3<f64>>,
    /// Spawn heading, or the configured heading when `None`.
    pub heading: Option<f64>,
}
