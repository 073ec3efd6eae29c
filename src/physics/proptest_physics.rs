//! Property-based tests for the force model and integrator.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::physics::gravity::{GravityConfig, GravitySource, gravity_force, total_force};
use crate::physics::integrator::euler_step;
use crate::types::BodyState;

fn attractor(mass: f64) -> GravitySource {
    GravitySource::new(DVec2::ZERO, mass, 15.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Force magnitude strictly decreases with distance inside the band.
    #[test]
    fn prop_inverse_square_monotonic(
        d1 in 6.0..400.0f64,
        factor in 1.05..1.2f64,
        mass in 1.0..500.0f64,
    ) {
        let config = GravityConfig::default();
        let source = attractor(mass);
        let d2 = (d1 * factor).min(config.max_distance);

        let near = gravity_force(&source, DVec2::new(d1, 0.0), 1.0, &config);
        let far = gravity_force(&source, DVec2::new(d2, 0.0), 1.0, &config);

        prop_assert!(near.length() > far.length());
    }

    /// Force scales linearly with both masses.
    #[test]
    fn prop_linear_mass_scaling(
        source_mass in 1.0..500.0f64,
        body_mass in 0.1..10.0f64,
        scale in 1.5..4.0f64,
        d in 10.0..400.0f64,
    ) {
        let config = GravityConfig::default();
        let body = DVec2::new(d, 0.0);

        let base = gravity_force(&attractor(source_mass), body, body_mass, &config);
        let heavier = gravity_force(&attractor(source_mass * scale), body, body_mass, &config);
        let heavier_body = gravity_force(&attractor(source_mass), body, body_mass * scale, &config);

        prop_assert!((heavier.length() - base.length() * scale).abs() < 1e-6 * heavier.length());
        prop_assert!(
            (heavier_body.length() - base.length() * scale).abs() < 1e-6 * heavier_body.length()
        );
    }

    /// Any body outside the interaction band feels exactly zero force.
    #[test]
    fn prop_zero_outside_band(
        mass in 1.0..10_000.0f64,
        angle in 0.0..std::f64::consts::TAU,
        inside_min in 0.0..4.99f64,
        beyond_max in 500.1..5000.0f64,
    ) {
        let config = GravityConfig::default();
        let source = attractor(mass);
        let dir = DVec2::new(angle.cos(), angle.sin());

        prop_assert_eq!(gravity_force(&source, dir * inside_min, 1.0, &config), DVec2::ZERO);
        prop_assert_eq!(gravity_force(&source, dir * beyond_max, 1.0, &config), DVec2::ZERO);
    }

    /// A repulsive source is the exact negation of its attractive twin.
    #[test]
    fn prop_repulsive_exact_negation(
        x in -400.0..400.0f64,
        y in -400.0..400.0f64,
        mass in 1.0..500.0f64,
    ) {
        let config = GravityConfig::default();
        let body = DVec2::new(x, y);

        let pull = gravity_force(&GravitySource::new(DVec2::ZERO, mass, 15.0), body, 1.0, &config);
        let push = gravity_force(
            &GravitySource::repulsive(DVec2::ZERO, mass, 20.0),
            body,
            1.0,
            &config,
        );

        prop_assert_eq!(push, -pull);
    }

    /// Total force is the exact sum of per-source forces.
    #[test]
    fn prop_superposition(
        x1 in -300.0..300.0f64, y1 in -300.0..300.0f64, m1 in 1.0..200.0f64,
        x2 in -300.0..300.0f64, y2 in -300.0..300.0f64, m2 in 1.0..200.0f64,
    ) {
        let config = GravityConfig::default();
        let a = GravitySource::new(DVec2::new(x1, y1), m1, 15.0);
        let b = GravitySource::new(DVec2::new(x2, y2), m2, 15.0);
        let body = DVec2::new(50.0, -50.0);

        let combined = total_force(&[a.clone(), b.clone()], body, 1.0, &config);
        let separate = gravity_force(&a, body, 1.0, &config) + gravity_force(&b, body, 1.0, &config);

        prop_assert_eq!(combined, separate);
    }

    /// Without sources the integrator never bends the path.
    #[test]
    fn prop_free_motion_is_linear(
        vx in -100.0..100.0f64,
        vy in -100.0..100.0f64,
        steps in 1usize..200,
    ) {
        let config = GravityConfig::default();
        let dt = 0.1;
        let mut body = BodyState::new(DVec2::ZERO, DVec2::new(vx, vy), 1.0);

        for _ in 0..steps {
            euler_step(&mut body, &[], &config, dt);
        }

        let expected = DVec2::new(vx, vy) * dt * steps as f64;
        prop_assert!((body.pos - expected).length() < 1e-6);
    }
}
