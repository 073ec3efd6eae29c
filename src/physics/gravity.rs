//! Inverse-square force model with gameplay distance cutoffs.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::types::{GRAVITY_CONSTANT, MAX_GRAVITY_DISTANCE, MIN_GRAVITY_DISTANCE};

/// Tunables for the force model.
#[derive(Resource, Clone, Debug)]
pub struct GravityConfig {
    /// Gravitational constant.
    pub constant: f64,
    /// Sources closer than this exert no force.
    pub min_distance: f64,
    /// Sources farther than this exert no force.
    pub max_distance: f64,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            constant: GRAVITY_CONSTANT,
            min_distance: MIN_GRAVITY_DISTANCE,
            max_distance: MAX_GRAVITY_DISTANCE,
        }
    }
}

/// A fixed point mass acting on the craft.
///
/// `mass` is the effective mass, already scaled by the level's gravity class.
/// Sources never move and never attract each other.
#[derive(Clone, Debug)]
pub struct GravitySource {
    pub pos: DVec2,
    pub mass: f64,
    /// Collision radius of the physical body at the source.
    pub radius: f64,
    /// Pushes instead of pulls.
    pub repulsive: bool,
}

impl GravitySource {
    pub fn new(pos: DVec2, mass: f64, radius: f64) -> Self {
        Self {
            pos,
            mass,
            radius,
            repulsive: false,
        }
    }

    pub fn repulsive(pos: DVec2, mass: f64, radius: f64) -> Self {
        Self {
            pos,
            mass,
            radius,
            repulsive: true,
        }
    }
}

/// Force a single source exerts on a body at `body_pos`.
///
/// Zero outside the [min_distance, max_distance] interaction band. Inside it,
/// magnitude follows the inverse-square law and the force points from the body
/// toward the source (away from it for repulsive sources).
pub fn gravity_force(
    source: &GravitySource,
    body_pos: DVec2,
    body_mass: f64,
    config: &GravityConfig,
) -> DVec2 {
    let direction = source.pos - body_pos;
    let distance = direction.length();

    if distance < config.min_distance || distance > config.max_distance {
        return DVec2::ZERO;
    }

    let magnitude = config.constant * source.mass * body_mass / (distance * distance);
    let force = direction.normalize_or_zero() * magnitude;

    if source.repulsive { -force } else { force }
}

/// Superposition of all source forces on a body.
pub fn total_force(
    sources: &[GravitySource],
    body_pos: DVec2,
    body_mass: f64,
    config: &GravityConfig,
) -> DVec2 {
    sources.iter().fold(DVec2::ZERO, |acc, source| {
        acc + gravity_force(source, body_pos, body_mass, config)
    })
}

/// Net acceleration on a body: F / m.
pub fn compute_acceleration(
    sources: &[GravitySource],
    body_pos: DVec2,
    body_mass: f64,
    config: &GravityConfig,
) -> DVec2 {
    total_force(sources, body_pos, body_mass, config) / body_mass
}
