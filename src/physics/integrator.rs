//! Semi-implicit Euler integrator for craft motion.

use crate::physics::gravity::{GravityConfig, GravitySource, compute_acceleration};
use crate::types::BodyState;

/// Advance a body by one step of semi-implicit Euler.
///
/// Velocity updates first and the position update uses the updated velocity.
/// The trajectory predictor replays exactly this function, so live flight and
/// preview stay sample-for-sample identical for the same inputs.
pub fn euler_step(
    body: &mut BodyState,
    sources: &[GravitySource],
    config: &GravityConfig,
    dt: f64,
) {
    let acc = compute_acceleration(sources, body.pos, body.mass, config);
    body.vel += acc * dt;
    body.pos += body.vel * dt;
}
