use bevy_math::{Dir3, Vec3};

use crate::{Error, solve_quadratic_tolerant};


/// Relative tolerance for treating a slightly negative discriminant as a tangent solution.
///
/// Both quadratics in this module are exactly tangent in their boundary cases
/// (stopping exactly at the target, or sitting exactly on the brake curve),
/// where single-precision rounding alone can push the discriminant below zero.
pub const DISCRIMINANT_TOLERANCE: f32 = 1e-5;

/// Result of [`damp_orthogonal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthogonalDamping {
    /// Acceleration opposing the orthogonal velocity.
    pub accel:            Vec3,
    /// Acceleration magnitude left for the parallel axis.
    ///
    /// Together with `accel`, this never exceeds the total budget:
    /// `accel.length()^2 + remaining_budget^2 == max_accel^2`.
    pub remaining_budget: f32,
}

/// Computes the acceleration that cancels `orthogonal_velocity` within `dt`,
/// limited to `max_accel` in magnitude.
///
/// The orthogonal axis is served first; the parallel axis gets what is left of the
/// circular acceleration budget.
#[must_use]
pub fn damp_orthogonal(orthogonal_velocity: Vec3, dt: f32, max_accel: f32) -> OrthogonalDamping {
    let Ok((direction, speed)) = Dir3::new_and_length(orthogonal_velocity) else {
        return OrthogonalDamping { accel: Vec3::ZERO, remaining_budget: max_accel };
    };

    // negative, i.e. opposing `direction`
    let accel = (-speed / dt).max(-max_accel);

    OrthogonalDamping {
        accel:            direction * accel,
        remaining_budget: (max_accel.powi(2) - accel.powi(2)).max(0.0).sqrt(),
    }
}

/// Finds the earliest time within `0..=dt` at which an object `distance` away,
/// approaching at `closing_speed` with constant `accel`,
/// has covered exactly `distance`.
///
/// `accel` is signed in the same sense as `closing_speed`,
/// so braking towards the target uses a negative `accel`.
///
/// Returns `None` if the distance is not covered within `dt`.
#[must_use]
pub fn time_to_reach(distance: f32, closing_speed: f32, accel: f32, dt: f32) -> Option<f32> {
    let arrival = if accel == 0.0 {
        if closing_speed <= 0.0 {
            return None;
        }
        distance / closing_speed
    } else {
        // distance = closing_speed * t + accel * t^2 / 2
        let roots =
            solve_quadratic_tolerant(accel / 2.0, closing_speed, -distance, DISCRIMINANT_TOLERANCE)?;
        // The root order depends on the sign of `accel`, so pick explicitly.
        roots.into_iter().filter(|&t| t >= 0.0).min_by(f32::total_cmp)?
    };

    (arrival <= dt).then_some(arrival)
}

/// Parameters for [`brake_curve_accel`].
#[derive(Debug, Clone, Copy)]
pub struct BrakeCurve {
    /// Distance from the object to the target along the line of sight.
    pub distance:      f32,
    /// Rate of decrease of `distance`. Negative if moving away.
    pub closing_speed: f32,
    /// Maximum braking magnitude available. Must be non-negative.
    ///
    /// The brake curve is the set of states satisfying `speed^2 == 2 * decel * distance`.
    pub decel:         f32,
    /// Duration of the step the returned acceleration is held for.
    pub dt:            f32,
}

/// Computes the acceleration towards the target which,
/// held constant for `dt`, lands the object exactly on the brake curve.
///
/// The result is positive while the object is still behind the curve
/// and becomes the mildest sufficient braking once it is on the curve.
/// It is not clamped; the caller limits it to the available budget.
///
/// The result is meaningless if the target is reached within `dt`
/// (see [`time_to_reach`]), since the curve equation is squared
/// and accepts a receding end state as well.
///
/// # Errors
/// Returns [`Error::NoBrakeSolution`] if the equation has no real root,
/// which does not happen for states that fail [`time_to_reach`] with `-decel`.
pub fn brake_curve_accel(args: BrakeCurve) -> Result<f32, Error> {
    let BrakeCurve { distance, closing_speed, decel, dt } = args;

    // End state after dt:
    //   distance' = distance - closing_speed * dt - accel * dt^2 / 2
    //   speed' = closing_speed + accel * dt
    // Substituting into speed'^2 = 2 * decel * distance' gives a quadratic in accel.
    let a = dt.powi(2);
    let b = 2.0 * closing_speed * dt + decel * dt.powi(2);
    let c = closing_speed.powi(2) - 2.0 * decel * (distance - closing_speed * dt);

    let [high, _low] = solve_quadratic_tolerant(a, b, c, DISCRIMINANT_TOLERANCE)
        .ok_or(Error::NoBrakeSolution { distance, closing_speed, decel, dt })?;
    Ok(high)
}
