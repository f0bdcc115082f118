use bevy_math::Vec3;

use crate::{KinematicState, Limits, LimitsError};

#[test]
fn integrate_constant_accel_is_exact() {
    let state = KinematicState { position: Vec3::ZERO, velocity: Vec3::new(1.0, 0.0, 0.0) };
    let next = state.integrate(Vec3::new(2.0, 0.0, 0.0), 0.5, 100.0);

    // v = 1 + 2 * 0.5, s = 1 * 0.5 + 2 * 0.25 / 2
    assert!(next.velocity.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));
    assert!(next.position.abs_diff_eq(Vec3::new(0.75, 0.0, 0.0), 1e-6));
}

#[test]
fn integrate_clamps_speed_preserving_direction() {
    let state = KinematicState { position: Vec3::ZERO, velocity: Vec3::new(0.0, 3.0, 4.0) };
    let next = state.integrate(Vec3::new(0.0, 3.0, 4.0), 1.0, 5.0);

    assert!(next.velocity.abs_diff_eq(Vec3::new(0.0, 3.0, 4.0), 1e-5));
    // trapezoid over the clamped endpoints
    assert!(next.position.abs_diff_eq(Vec3::new(0.0, 3.0, 4.0), 1e-5));
}

#[test]
fn integrate_zero_duration_is_identity() {
    let state = KinematicState { position: Vec3::ONE, velocity: Vec3::X };
    assert_eq!(state.integrate(Vec3::Y * 10.0, 0.0, 100.0), state);
}

#[test]
fn limits_validation() {
    assert!(Limits::new(10.0, 2.0).is_ok());
    assert!(Limits::new(0.0, 2.0).is_ok());
    assert_eq!(Limits::new(10.0, 0.0), Err(LimitsError::NonPositiveAccel(0.0)));
    assert_eq!(Limits::new(10.0, -1.0), Err(LimitsError::NonPositiveAccel(-1.0)));
    assert_eq!(Limits::new(-1.0, 2.0), Err(LimitsError::NegativeSpeed(-1.0)));
    assert_eq!(Limits::new(f32::NAN, 2.0), Err(LimitsError::NonFinite));
    assert_eq!(Limits::new(10.0, f32::INFINITY), Err(LimitsError::NonFinite));
}

#[test]
fn limits_deserialize_validates() {
    let limits: Limits = serde_json::from_str(r#"{"max_speed": 12.5, "max_accel": 3}"#).unwrap();
    assert_eq!(limits, Limits::new(12.5, 3.0).unwrap());

    let err = serde_json::from_str::<Limits>(r#"{"max_speed": 12.5, "max_accel": 0}"#)
        .expect_err("zero acceleration must be rejected");
    assert!(err.to_string().contains("max acceleration must be positive"), "{err}");
}
