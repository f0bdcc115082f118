use anyhow::{Context, Result};
use bevy_math::Vec3;
use math::{KinematicState, Limits};
use serde::Deserialize;

/// A single agent steering towards a fixed target.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Scenario {
    pub start:    KinematicState,
    pub target:   Vec3,
    pub limits:   Limits,
    /// Tick length in seconds.
    pub dt:       f32,
    /// Simulated duration in seconds.
    pub duration: f32,
}

impl Scenario {
    /// An agent at rest at the origin with the target `distance` along +X.
    pub fn straight_line(
        distance: f32,
        max_speed: f32,
        max_accel: f32,
        dt: f32,
        duration: f32,
    ) -> Result<Self> {
        Ok(Self {
            start: KinematicState::at_rest(Vec3::ZERO),
            target: Vec3::new(distance, 0.0, 0.0),
            limits: Limits::new(max_speed, max_accel).context("invalid limits")?,
            dt,
            duration,
        })
    }
}
