//! Point-mass state and its per-agent limits.

use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Position and velocity of a point mass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KinematicState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl KinematicState {
    #[must_use]
    pub const fn at_rest(position: Vec3) -> Self { Self { position, velocity: Vec3::ZERO } }

    /// Advances the state by `dt` under constant `accel`.
    ///
    /// The final velocity is clamped to `max_speed` in magnitude.
    /// Displacement uses the average of the initial and final velocities,
    /// which is exact only if the clamp did not engage.
    #[must_use]
    pub fn integrate(self, accel: Vec3, dt: f32, max_speed: f32) -> Self {
        let velocity = (self.velocity + accel * dt).clamp_length_max(max_speed);
        let displacement = (self.velocity + velocity) * 0.5 * dt;
        Self { position: self.position + displacement, velocity }
    }
}

/// Motion limits of an agent.
///
/// Always valid when constructed through [`Limits::new`] or deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLimits")]
pub struct Limits {
    max_speed: f32,
    max_accel: f32,
}

impl Limits {
    /// # Errors
    /// Returns an error if either value is not finite,
    /// `max_accel` is not positive or `max_speed` is negative.
    pub fn new(max_speed: f32, max_accel: f32) -> Result<Self, LimitsError> {
        if !max_speed.is_finite() || !max_accel.is_finite() {
            return Err(LimitsError::NonFinite);
        }
        if max_accel <= 0.0 {
            return Err(LimitsError::NonPositiveAccel(max_accel));
        }
        if max_speed < 0.0 {
            return Err(LimitsError::NegativeSpeed(max_speed));
        }
        Ok(Self { max_speed, max_accel })
    }

    /// Maximum speed magnitude.
    #[must_use]
    pub fn max_speed(&self) -> f32 { self.max_speed }

    /// Maximum acceleration magnitude, shared by all axes.
    #[must_use]
    pub fn max_accel(&self) -> f32 { self.max_accel }
}

#[derive(Deserialize)]
struct RawLimits {
    max_speed: f32,
    max_accel: f32,
}

impl TryFrom<RawLimits> for Limits {
    type Error = LimitsError;

    fn try_from(raw: RawLimits) -> Result<Self, LimitsError> {
        Self::new(raw.max_speed, raw.max_accel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LimitsError {
    #[error("limits must be finite")]
    NonFinite,
    #[error("max acceleration must be positive, got {0}")]
    NonPositiveAccel(f32),
    #[error("max speed must not be negative, got {0}")]
    NegativeSpeed(f32),
}
