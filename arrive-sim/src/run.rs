//! Fixed-step driver around [`math::advance`].

use anyhow::{Context, Result, ensure};
use bevy_math::Vec3;
use math::{KinematicState, Phase};
use serde::Serialize;

use crate::scenario::Scenario;

#[cfg(test)]
mod tests;

/// The agent state after a tick.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Record {
    /// Simulated time at the end of the tick, in seconds.
    pub time:     f32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub distance: f32,
    pub speed:    f32,
    pub phase:    &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Summary {
    pub final_distance:     f32,
    pub final_speed:        f32,
    /// Largest observed `speed - sqrt(2 * max_accel * distance)` while closing in,
    /// or zero if the agent never exceeded its brake curve.
    pub worst_curve_excess: f32,
}

pub struct Trace {
    pub records: Vec<Record>,
    pub summary: Summary,
}

/// Runs `scenario` until its duration elapses
/// or the agent has rested at the target for a whole tick.
pub fn run(scenario: &Scenario) -> Result<Trace> {
    ensure!(scenario.dt.is_finite() && scenario.dt > 0.0, "dt must be positive, got {}", scenario.dt);
    ensure!(
        scenario.duration.is_finite() && scenario.duration >= 0.0,
        "duration must not be negative, got {}",
        scenario.duration
    );

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "checked to be finite and non-negative"
    )]
    let ticks = (scenario.duration / scenario.dt).ceil() as u64;

    let mut state = scenario.start;
    let mut summary = summarize(state, scenario.target, Summary::default());
    let mut records = Vec::new();

    for tick in 1..=ticks {
        #[expect(clippy::cast_precision_loss, reason = "tick counts are small")]
        let time = tick as f32 * scenario.dt;

        let step = math::advance(state, scenario.target, scenario.limits, scenario.dt)
            .with_context(|| format!("steering at {time}s from {state:?}"))?;

        let at_rest = step.phase == Phase::Idle && step.state == state;
        state = step.state;

        let distance = state.position.distance(scenario.target);
        records.push(Record {
            time,
            position: state.position,
            velocity: state.velocity,
            distance,
            speed: state.velocity.length(),
            phase: step.phase.into(),
        });
        summary = summarize(state, scenario.target, summary);
        summary.worst_curve_excess = summary
            .worst_curve_excess
            .max(curve_excess(state, scenario.target, scenario.limits.max_accel()));

        if at_rest {
            break;
        }
    }

    Ok(Trace { records, summary })
}

fn summarize(state: KinematicState, target: Vec3, summary: Summary) -> Summary {
    Summary {
        final_distance: state.position.distance(target),
        final_speed: state.velocity.length(),
        ..summary
    }
}

/// How far the speed exceeds the brake curve at the current distance,
/// or zero if the agent is not closing in.
fn curve_excess(state: KinematicState, target: Vec3, max_accel: f32) -> f32 {
    let offset = target - state.position;
    if state.velocity.dot(offset) <= 0.0 {
        return 0.0;
    }

    let curve_speed = (2.0 * max_accel * offset.length()).sqrt();
    (state.velocity.length() - curve_speed).max(0.0)
}
