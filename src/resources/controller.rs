use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::components::{CameraData, ControlInputs, FlightState, ModeChange, ModeState};
use crate::physics::{FlightModel, PhysicsError, TerrainQuery};
use crate::resources::{InputState, SimulationConfig};
use crate::systems::{derive_camera_basis, sample_controls};
use crate::utils::SimError;

/// Values the UI shows next to the view.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSnapshot {
    pub throttle: f64,
    pub flaps: f64,
    /// Cursor capture state.
    pub is_active: bool,
    /// Set once a fatal physics failure needs a reset.
    pub faulted: bool,
}

impl Default for ControlSnapshot {
    fn default() -> Self {
        Self {
            throttle: crate::utils::DEFAULT_THROTTLE,
            flaps: crate::utils::DEFAULT_FLAPS,
            is_active: false,
            faulted: false,
        }
    }
}

/// Owns one flight session: the input aggregator, throttle/flap modes, the
/// physics model and the latest flight state.
///
/// Input callbacks are only honoured while the controller is enabled; a
/// disabled controller behaves as if no listeners were attached.
#[derive(Resource)]
pub struct FlightController<M: FlightModel> {
    model: M,
    model_config: M::Config,
    config: SimulationConfig,
    terrain: Option<Arc<dyn TerrainQuery>>,
    input: InputState,
    mode: ModeState,
    state: FlightState,
    last_inputs: ControlInputs,
    enabled: bool,
    fault: Option<String>,
}

impl<M: FlightModel> FlightController<M> {
    /// Build a disabled controller sitting at the configured start position.
    pub fn new(model: M, model_config: M::Config, config: SimulationConfig) -> Self {
        let state = model.create_initial_state(
            &model_config,
            config.start_position,
            config.start_heading,
        );
        let mode = ModeState::new(config.control.default_throttle);
        Self {
            model,
            model_config,
            config,
            terrain: None,
            input: InputState::new(),
            mode,
            state,
            last_inputs: ControlInputs::default(),
            enabled: false,
            fault: None,
        }
    }

    pub fn with_terrain(mut self, terrain: impl TerrainQuery + 'static) -> Self {
        self.terrain = Some(Arc::new(terrain));
        self
    }

    pub fn with_shared_terrain(mut self, terrain: Arc<dyn TerrainQuery>) -> Self {
        self.terrain = Some(terrain);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn model_config(&self) -> &M::Config {
        &self.model_config
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn mode(&self) -> &ModeState {
        &self.mode
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// Inputs sampled by the most recent successful step.
    pub fn last_inputs(&self) -> &ControlInputs {
        &self.last_inputs
    }

    pub fn terrain_height(&self, x: f64, z: f64) -> Option<f64> {
        self.terrain.as_ref().map(|t| t.height_at(x, z))
    }

    // Session lifecycle

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        if !self.enabled {
            info!("Flight controller enabled");
        }
        self.enabled = true;
    }

    /// Stop listening and forget everything the pilot was holding.
    pub fn disable(&mut self) {
        if self.enabled {
            info!("Flight controller disabled");
        }
        self.enabled = false;
        self.input.clear();
    }

    /// Enable for the lifetime of the returned guard.
    pub fn activate(&mut self) -> ActiveSession<'_, M> {
        self.enable();
        ActiveSession { controller: self }
    }

    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    // Input callbacks

    /// Record a key-down and run the throttle/flap transition table for it.
    ///
    /// Every down event fires the transition, including auto-repeats.
    pub fn on_key_down(&mut self, key: &str) -> Option<ModeChange> {
        if !self.enabled {
            return None;
        }
        let press = self.input.on_key_down(key);
        let change = self.mode.apply_key(&press.key, &self.config.control);
        if let Some(change) = change {
            debug!("Key '{}' -> {:?}", press.key, change);
        }
        change
    }

    pub fn on_key_up(&mut self, key: &str) {
        if self.enabled {
            self.input.on_key_up(key);
        }
    }

    pub fn on_mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.enabled {
            self.input.on_mouse_motion(dx, dy);
        }
    }

    pub fn on_capture_change(&mut self, captured: bool) {
        if self.enabled {
            self.input.on_capture_change(captured);
        }
    }

    /// Nudge the throttle from a wheel delta (web convention, positive = towards the user).
    pub fn on_wheel(&mut self, delta_y: f64) -> Option<ModeChange> {
        if !self.enabled {
            return None;
        }
        let delta_y = self.input.on_wheel(delta_y)?;
        Some(self.mode.apply_wheel(delta_y, &self.config.control))
    }

    pub fn on_focus_lost(&mut self) {
        if self.enabled {
            self.input.on_focus_lost();
        }
    }

    // UI surface

    pub fn throttle(&self) -> f64 {
        self.mode.throttle()
    }

    pub fn flaps(&self) -> f64 {
        self.mode.flaps()
    }

    pub fn is_captured(&self) -> bool {
        self.input.is_captured()
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.mode.set_throttle(throttle);
    }

    pub fn set_flaps(&mut self, flaps: f64) {
        self.mode.set_flaps(flaps);
    }

    pub fn snapshot(&self) -> ControlSnapshot {
        ControlSnapshot {
            throttle: self.throttle(),
            flaps: self.flaps(),
            is_active: self.is_captured(),
            faulted: self.is_faulted(),
        }
    }

    // Simulation

    /// Clamp an externally supplied elapsed time into [0, max_dt].
    pub fn sanitize_dt(&self, dt: f64) -> f64 {
        if !dt.is_finite() || dt < 0.0 {
            warn!("Rejected elapsed time {}, stepping with dt = 0", dt);
            return 0.0;
        }
        dt.min(self.config.max_dt)
    }

    /// Sample inputs, advance the physics model by `dt` and store the result.
    ///
    /// A disabled controller returns the current state untouched. A failed or
    /// non-finite physics step faults the session: the error is returned and
    /// every later step fails with [`SimError::SessionFaulted`] until
    /// [`reset`](Self::reset).
    pub fn step(&mut self, dt: f64) -> Result<FlightState, SimError> {
        if !self.enabled {
            return Ok(self.state);
        }
        if let Some(fault) = &self.fault {
            return Err(SimError::SessionFaulted(fault.clone()));
        }

        let dt = self.sanitize_dt(dt);
        let inputs = sample_controls(&mut self.input, &self.mode, &self.config.control);

        let result = self
            .model
            .step_physics(
                &self.state,
                &inputs,
                &self.model_config,
                dt,
                self.terrain.as_deref(),
            )
            .and_then(|next| {
                if next.is_finite() {
                    Ok(next)
                } else {
                    Err(PhysicsError::NonFiniteState(format!("{:?}", next)))
                }
            });

        match result {
            Ok(next) => {
                self.state = next;
                self.last_inputs = inputs;
                Ok(next)
            }
            Err(err) => {
                error!("Physics step failed, session needs a reset: {}", err);
                self.fault = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Start a fresh session at `position`, heading `heading`.
    pub fn reset(&mut self, position: Vector3<f64>, heading: f64) {
        info!("Resetting flight at {:?}, heading {}", position, heading);
        self.state = self
            .model
            .create_initial_state(&self.model_config, position, heading);
        self.mode.reset(self.config.control.default_throttle);
        self.input.consume_mouse_delta();
        self.last_inputs = ControlInputs::default();
        self.fault = None;
    }

    /// Reset to the configured start position and heading.
    pub fn reset_to_start(&mut self) {
        self.reset(self.config.start_position, self.config.start_heading);
    }

    pub fn camera_data(&self) -> CameraData {
        derive_camera_basis(&self.state)
    }
}

/// Keeps a [`FlightController`] enabled until dropped.
///
/// Dropping the guard disables the controller and clears held keys, pending
/// mouse motion and capture, whichever way the scope is left.
pub struct ActiveSession<'a, M: FlightModel> {
    controller: &'a mut FlightController<M>,
}

impl<M: FlightModel> Deref for ActiveSession<'_, M> {
    type Target = FlightController<M>;

    fn deref(&self) -> &Self::Target {
        self.controller
    }
}

impl<M: FlightModel> DerefMut for ActiveSession<'_, M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.controller
    }
}

impl<M: FlightModel> Drop for ActiveSession<'_, M> {
    fn drop(&mut self) {
        self.controller.disable();
    }
}
