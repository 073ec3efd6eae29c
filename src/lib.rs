//! Gravity Wells: a 2D gravity-slingshot flight core.
//!
//! A single craft flies through a field of fixed attractors and repulsors.
//! The crate owns the force model, the semi-implicit Euler integrator, the
//! aiming-phase trajectory preview, and the launch/flight state machine with
//! its per-level shot budget. Rendering, input polling, and on-screen text
//! live outside: embedders send command events and consume craft state plus
//! the notification events emitted each simulation tick.

pub mod collision;
pub mod flight;
pub mod levels;
pub mod physics;
pub mod prediction;
pub mod types;

#[cfg(test)]
pub mod test_utils;
