use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{ControlInputs, FlightState};
use crate::physics::{FlightModel, PhysicsError, TerrainQuery};
use crate::utils::{approach, deg_to_rad, forward_vector, wrap_angle, GRAVITY};

/// Limits for the kinematic flight model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicConfig {
    /// Airspeed at idle throttle (m/s).
    pub min_speed: f64,
    /// Airspeed at full throttle (m/s).
    pub max_speed: f64,
    /// Airspeed on spawn (m/s).
    pub initial_speed: f64,
    /// Rate at which airspeed converges on the throttle target (m/s²).
    pub acceleration: f64,
    /// Attitude rates at full stick deflection (rad/s).
    pub max_pitch_rate: f64,
    pub max_roll_rate: f64,
    pub max_yaw_rate: f64,
    /// Pitch attitude limit (radians).
    pub max_pitch: f64,
    /// Target airspeed lost with full flaps (m/s).
    pub flap_speed_loss: f64,
    /// Wheel brake deceleration on the ground (m/s²).
    pub brake_deceleration: f64,
    /// Height of the reference point above the terrain when resting (m).
    pub ground_clearance: f64,
}

impl Default for KinematicConfig {
    fn default() -> Self {
        Self {
            min_speed: 0.0,
            max_speed: 90.0,
            initial_speed: 50.0,
            acceleration: 6.0,
            max_pitch_rate: 0.9,
            max_roll_rate: 1.6,
            max_yaw_rate: 0.5,
            max_pitch: deg_to_rad(80.0),
            flap_speed_loss: 15.0,
            brake_deceleration: 8.0,
            ground_clearance: 1.5,
        }
    }
}

/// Point-mass model: throttle sets a target airspeed, stick deflection sets
/// attitude rates and bank produces a coordinated turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct KinematicFlightModel;

impl FlightModel for KinematicFlightModel {
    type Config = KinematicConfig;

    fn create_initial_state(
        &self,
        config: &KinematicConfig,
        position: Vector3<f64>,
        heading: f64,
    ) -> FlightState {
        FlightState {
            position,
            velocity: forward_vector(0.0, heading) * config.initial_speed,
            pitch: 0.0,
            yaw: heading,
            roll: 0.0,
        }
    }

    fn step_physics(
        &self,
        state: &FlightState,
        inputs: &ControlInputs,
        config: &KinematicConfig,
        dt: f64,
        terrain: Option<&dyn TerrainQuery>,
    ) -> Result<FlightState, PhysicsError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!("dt = {}", dt)));
        }
        if !inputs.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "inputs = {:?}",
                inputs
            )));
        }

        let mut next = *state;

        // Airspeed converges on the throttle target, flaps bleed some off
        let target_speed = (config.min_speed
            + inputs.throttle * (config.max_speed - config.min_speed)
            - inputs.flaps * config.flap_speed_loss)
            .max(config.min_speed);
        let mut speed = approach(state.speed(), target_speed, config.acceleration * dt);

        next.pitch = (state.pitch + inputs.pitch * config.max_pitch_rate * dt)
            .clamp(-config.max_pitch, config.max_pitch);
        next.roll = wrap_angle(state.roll + inputs.roll * config.max_roll_rate * dt);

        // Right wing down turns right, which is negative yaw in this frame
        let turn_rate = GRAVITY * next.roll.sin() / speed.max(1.0);
        next.yaw =
            wrap_angle(state.yaw - (inputs.yaw * config.max_yaw_rate + turn_rate) * dt);

        let on_ground = terrain.is_some_and(|t| {
            let floor = t.height_at(state.position.x, state.position.z) + config.ground_clearance;
            state.position.y <= floor + 1e-6
        });
        if inputs.brake && on_ground {
            speed = (speed - config.brake_deceleration * dt).max(0.0);
        }

        next.velocity = forward_vector(next.pitch, next.yaw) * speed;
        next.position = state.position + next.velocity * dt;

        if let Some(terrain) = terrain {
            let floor = terrain.height_at(next.position.x, next.position.z) + config.ground_clearance;
            if !floor.is_finite() {
                return Err(PhysicsError::NonFiniteState(format!(
                    "terrain height at ({}, {})",
                    next.position.x, next.position.z
                )));
            }
            if next.position.y <= floor {
                debug!("Ground contact at {:?}", next.position);
                next.position.y = floor;
                next.pitch = next.pitch.max(0.0);
                next.roll = 0.0;
                next.velocity.y = next.velocity.y.max(0.0);
            }
        }

        if !next.is_finite() {
            return Err(PhysicsError::NonFiniteState(format!(
                "position {:?}, attitude ({}, {}, {})",
                next.position, next.pitch, next.yaw, next.roll
            )));
        }
        Ok(next)
    }
}
