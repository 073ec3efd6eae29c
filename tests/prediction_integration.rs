//! Integration tests for the trajectory preview.

mod common;

use bevy::math::DVec2;
use gravity_wells::physics::{GravityConfig, euler_step};
use gravity_wells::prediction::predict_trajectory;
use gravity_wells::types::BodyState;

#[test]
fn test_preview_matches_live_integration() {
    // The preview replays the live integrator step for step: simulating the
    // same launch by hand must visit exactly the predicted positions.
    let config = GravityConfig::default();
    let level = common::single_source_level(3);
    let start = level.start;
    let vel = DVec2::new(60.0, -15.0);

    let predicted = predict_trajectory(start, vel, 1.0, &level.sources, &config, 60, 0.15);

    let mut body = BodyState::new(start, vel, 1.0);
    for point in &predicted {
        assert_eq!(*point, body.pos);
        euler_step(&mut body, &level.sources, &config, 0.15);
    }
}

#[test]
fn test_preview_never_exceeds_cap() {
    let config = GravityConfig::default();
    let level = common::single_source_level(3);

    for (vx, vy) in [(20.0, 0.0), (60.0, -30.0), (200.0, 100.0), (-80.0, 0.0)] {
        let points = predict_trajectory(
            level.start,
            DVec2::new(vx, vy),
            1.0,
            &level.sources,
            &config,
            60,
            0.15,
        );
        assert!(!points.is_empty());
        assert!(points.len() <= 60);
        assert_eq!(points[0], level.start);
    }
}

#[test]
fn test_preview_leaves_session_inputs_alone() {
    let config = GravityConfig::default();
    let level = common::single_source_level(3);
    let before: Vec<_> = level.sources.iter().map(|s| (s.pos, s.mass)).collect();

    predict_trajectory(
        level.start,
        DVec2::new(60.0, -15.0),
        1.0,
        &level.sources,
        &config,
        60,
        0.15,
    );

    let after: Vec<_> = level.sources.iter().map(|s| (s.pos, s.mass)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_repeated_prediction_is_stable() {
    let config = GravityConfig::default();
    let level = common::single_source_level(3);

    let first = predict_trajectory(
        level.start,
        DVec2::new(60.0, -15.0),
        1.0,
        &level.sources,
        &config,
        60,
        0.15,
    );
    for _ in 0..10 {
        let again = predict_trajectory(
            level.start,
            DVec2::new(60.0, -15.0),
            1.0,
            &level.sources,
            &config,
            60,
            0.15,
        );
        assert_eq!(first, again);
    }
}
