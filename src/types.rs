//! Core types and constants for the gravity-slingshot flight core.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Gameplay gravitational constant.
///
/// Deliberately far above real-world scale so a flight across the play field
/// resolves in a few seconds of simulation time.
pub const GRAVITY_CONSTANT: f64 = 5000.0;

/// Sources closer than this to the craft contribute no force (singularity guard).
pub const MIN_GRAVITY_DISTANCE: f64 = 5.0;

/// Sources farther than this from the craft contribute no force.
pub const MAX_GRAVITY_DISTANCE: f64 = 500.0;

/// Play field width in world units.
pub const FIELD_WIDTH: f64 = 1024.0;

/// Play field height in world units.
pub const FIELD_HEIGHT: f64 = 768.0;

/// Margin around the play field before a live flight counts as lost off-screen.
pub const FLIGHT_BOUND_MARGIN: f64 = 100.0;

/// Margin around the play field before the trajectory preview stops extending.
///
/// Wider than the live-flight margin so the preview still shows paths that
/// swing far off-screen and come back.
pub const PREDICTION_BOUND_MARGIN: f64 = 500.0;

/// Minimum requested launch speed; slower launch commands are ignored.
pub const MIN_LAUNCH_SPEED: f64 = 10.0;

/// Collision radius of the craft.
pub const CRAFT_RADIUS: f64 = 8.0;

/// Mass of the craft.
pub const CRAFT_MASS: f64 = 1.0;

/// Fuel the craft starts each attempt with.
pub const INITIAL_FUEL: f64 = 100.0;

/// Fuel burned by a single thruster use, regardless of power.
pub const THRUSTER_FUEL_COST: f64 = 5.0;

/// Physical state of the craft.
#[derive(Component, Clone, Debug, Default)]
pub struct BodyState {
    /// Position in world units.
    pub pos: DVec2,
    /// Velocity in world units per second.
    pub vel: DVec2,
    /// Mass in gameplay units.
    pub mass: f64,
}

impl BodyState {
    /// Create a new body state.
    pub fn new(pos: DVec2, vel: DVec2, mass: f64) -> Self {
        Self { pos, vel, mass }
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}

/// Axis-aligned rectangle used for the flight and preview bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// The visible play field, origin at the top-left corner.
    pub fn play_field() -> Self {
        Self {
            min: DVec2::ZERO,
            max: DVec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        }
    }

    /// Grow the rectangle by `margin` units on every side.
    pub fn with_margin(self, margin: f64) -> Self {
        Self {
            min: self.min - DVec2::splat(margin),
            max: self.max + DVec2::splat(margin),
        }
    }

    /// Whether a point lies inside the rectangle.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
