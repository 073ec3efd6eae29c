//! Physics layer: force model and integrator.
//!
//! Everything here is pure and operates on plain values. The flight session
//! drives `euler_step` directly so integration and terminal checks happen
//! atomically within a tick; there is no separate physics system.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use gravity::{GravityConfig, GravitySource, compute_acceleration, gravity_force, total_force};
pub use integrator::euler_step;
