//! Per-tick steering towards a stationary point.
//!
//! The agent is driven onto the brake curve of the remaining distance and kept on it,
//! while velocity perpendicular to the line of sight is damped separately
//! so that the agent does not orbit the target.
//! The orthogonal correction takes priority in the shared acceleration budget.

use bevy_math::{Dir3, Vec3};

use crate::{
    BrakeCurve, Error, KinematicState, Limits, brake_curve_accel, damp_orthogonal, decompose,
    time_to_reach,
};


/// The branch taken by [`advance`] for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// The step duration was not positive, nothing changed.
    Skipped,
    /// The agent was already at the target and only shed residual velocity.
    Idle,
    /// The target was not reached within the step.
    Pursuing,
    /// The target was reached within the step,
    /// and the rest of the step was spent shedding residual velocity.
    Arrived,
}

/// Output of [`advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub state: KinematicState,
    pub phase: Phase,
}

/// Computes the state of an agent after steering towards `target` for `dt`.
///
/// A non-positive or non-finite `dt` returns `state` unchanged.
///
/// # Errors
/// Returns [`Error::NoBrakeSolution`] if the brake curve cannot be solved,
/// in which case the caller should keep the previous state for this tick.
pub fn advance(
    state: KinematicState,
    target: Vec3,
    limits: Limits,
    dt: f32,
) -> Result<Step, Error> {
    if !(dt > 0.0 && dt.is_finite()) {
        return Ok(Step { state, phase: Phase::Skipped });
    }

    let Ok((direction, distance)) = Dir3::new_and_length(target - state.position) else {
        return Ok(Step { state: shed_velocity(state, limits, dt), phase: Phase::Idle });
    };

    let split = decompose(state.velocity, direction);
    let damping = damp_orthogonal(split.orthogonal, dt, limits.max_accel());
    let budget = damping.remaining_budget;

    if let Some(arrival) = time_to_reach(distance, split.parallel, -budget, dt) {
        let accel = direction * -budget + damping.accel;
        let mut arrived = state.integrate(accel, arrival, limits.max_speed());
        arrived.position = target;

        return Ok(Step {
            state: shed_velocity(arrived, limits, dt - arrival),
            phase: Phase::Arrived,
        });
    }

    let parallel_accel = brake_curve_accel(BrakeCurve {
        distance,
        closing_speed: split.parallel,
        decel: budget,
        dt,
    })?
    .clamp(-budget, budget);

    let accel = direction * parallel_accel + damping.accel;
    Ok(Step { state: state.integrate(accel, dt, limits.max_speed()), phase: Phase::Pursuing })
}

/// Brakes at full acceleration against the current velocity for up to `duration`,
/// stopping exactly if the velocity reaches zero earlier.
fn shed_velocity(state: KinematicState, limits: Limits, duration: f32) -> KinematicState {
    if duration <= 0.0 {
        return state;
    }

    let Ok((direction, speed)) = Dir3::new_and_length(state.velocity) else { return state };

    let accel = direction * -limits.max_accel();
    let stop_time = speed / limits.max_accel();
    if stop_time < duration {
        let mut stopped = state.integrate(accel, stop_time, limits.max_speed());
        stopped.velocity = Vec3::ZERO;
        stopped
    } else {
        state.integrate(accel, duration, limits.max_speed())
    }
}
