use bevy_math::Vec3;
use math::{KinematicState, Limits};

use super::run;
use crate::output::{self, Format};
use crate::scenario::Scenario;

#[test]
fn straight_line_stops_at_target() {
    let scenario = Scenario::straight_line(100.0, 50.0, 2.0, 1.0 / 60.0, 60.0).unwrap();
    let trace = run(&scenario).unwrap();

    assert!(trace.summary.final_distance < 1e-2, "{:?}", trace.summary);
    assert!(trace.summary.final_speed < 1e-2, "{:?}", trace.summary);
    assert!(trace.summary.worst_curve_excess < 0.05, "{:?}", trace.summary);
}

#[test]
fn stops_once_at_rest_on_target() {
    let scenario = Scenario {
        start:    KinematicState::at_rest(Vec3::new(1.0, 2.0, 3.0)),
        target:   Vec3::new(1.0, 2.0, 3.0),
        limits:   Limits::new(10.0, 2.0).unwrap(),
        dt:       0.1,
        duration: 10.0,
    };
    let trace = run(&scenario).unwrap();

    assert_eq!(trace.records.len(), 1);
    assert_eq!(trace.records[0].phase, "idle");
}

#[test]
fn tangential_start_is_summarized() {
    let scenario = Scenario {
        start:    KinematicState {
            position: Vec3::new(10.0, 0.0, 0.0),
            velocity: Vec3::new(0.0, 5.0, 0.0),
        },
        target:   Vec3::ZERO,
        limits:   Limits::new(100.0, 2.0).unwrap(),
        dt:       0.25,
        duration: 1.0,
    };
    let trace = run(&scenario).unwrap();

    assert_eq!(trace.records.len(), 4);
    let last = trace.records.last().unwrap();
    assert!((last.time - 1.0).abs() < 1e-4);
    assert!((trace.summary.final_distance - last.distance).abs() < f32::EPSILON);
}

#[test]
fn rejects_invalid_dt() {
    for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let scenario = Scenario::straight_line(10.0, 50.0, 2.0, dt, 10.0).unwrap();
        assert!(run(&scenario).is_err(), "dt {dt} should be rejected");
    }
}

#[test]
fn zero_duration_has_no_records() {
    let scenario = Scenario::straight_line(10.0, 50.0, 2.0, 0.1, 0.0).unwrap();
    let trace = run(&scenario).unwrap();
    assert!(trace.records.is_empty());
    assert!((trace.summary.final_distance - 10.0).abs() < f32::EPSILON);
}

#[test]
fn scenario_rejects_invalid_limits() {
    let json = r#"{
        "start": {"position": [0, 0, 0], "velocity": [0, 0, 0]},
        "target": [1, 0, 0],
        "limits": {"max_speed": 10, "max_accel": 0},
        "dt": 0.1,
        "duration": 1
    }"#;
    let err = serde_json::from_str::<Scenario>(json).unwrap_err();
    assert!(err.to_string().contains("max acceleration"), "{err}");
}

#[test]
fn csv_has_header_and_rows() {
    let scenario = Scenario::straight_line(1.0, 50.0, 2.0, 0.5, 1.0).unwrap();
    let trace = run(&scenario).unwrap();

    let mut buf = Vec::new();
    output::write(&mut buf, Format::Csv, &trace.records).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("time,x,y,z,vx,vy,vz,distance,speed,phase"));
    assert_eq!(lines.count(), trace.records.len());
    assert!(text.lines().nth(1).unwrap().starts_with("0.5,"));
}

#[test]
fn json_is_an_array_of_ticks() {
    let scenario = Scenario::straight_line(1.0, 50.0, 2.0, 0.5, 1.0).unwrap();
    let trace = run(&scenario).unwrap();

    let mut buf = Vec::new();
    output::write(&mut buf, Format::Json, &trace.records).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    let ticks = value.as_array().unwrap();
    assert_eq!(ticks.len(), trace.records.len());
    assert_eq!(ticks[0]["phase"], trace.records[0].phase);
    assert!(ticks[0]["position"].is_array());
}
