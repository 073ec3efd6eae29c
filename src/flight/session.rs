//! The flight session: craft state, shot budget, fuel, and the state machine.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::collision::{TerminalCondition, check_terminal};
use crate::levels::Level;
use crate::physics::{GravityConfig, euler_step};
use crate::types::{
    BodyState, Bounds, CRAFT_MASS, CRAFT_RADIUS, FLIGHT_BOUND_MARGIN, INITIAL_FUEL,
    MIN_LAUNCH_SPEED, THRUSTER_FUEL_COST,
};

/// Phase of the current attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlightState {
    /// Waiting for a launch; the craft sits at the level start.
    #[default]
    Aiming,
    /// Craft in motion, integrated every tick.
    Flying,
    /// Goal reached; terminal until restart or advance.
    Succeeded,
    /// Shot budget exhausted; terminal until restart.
    Failed,
}

/// Launches spent on the current level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShotBudget {
    pub used: u32,
    pub max: u32,
}

impl ShotBudget {
    pub fn exhausted(&self) -> bool {
        self.used >= self.max
    }

    pub fn remaining(&self) -> u32 {
        self.max.saturating_sub(self.used)
    }
}

/// What happened inside the session during a command or tick.
///
/// The plugin layer forwards these as Bevy events; headless callers can
/// consume them directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlightEvent {
    Launched {
        velocity: DVec2,
    },
    ThrusterFired {
        fuel_remaining: f64,
    },
    GoalReached,
    Impact {
        hit_pos: DVec2,
        craft_pos: DVec2,
        speed: f64,
    },
    OutOfBounds {
        last_pos: DVec2,
    },
    /// A shot was lost but more remain; craft is back at the start, Aiming.
    AttemptReset {
        shots_remaining: u32,
    },
    /// The last shot was lost; the level is over.
    LevelFailed,
}

/// Owns everything mutable about one level attempt.
///
/// All transitions go through the methods here; the Bevy systems in the
/// parent module are thin wrappers that translate events to these calls.
#[derive(Resource, Clone, Debug)]
pub struct FlightSession {
    craft: BodyState,
    aim_velocity: DVec2,
    fuel: f64,
    state: FlightState,
    budget: ShotBudget,
    start: DVec2,
    bounds: Bounds,
}

impl FlightSession {
    /// Fresh session for a level, Aiming at the start position.
    pub fn new(level: &Level) -> Self {
        Self {
            craft: BodyState::new(level.start, DVec2::ZERO, CRAFT_MASS),
            aim_velocity: DVec2::ZERO,
            fuel: INITIAL_FUEL,
            state: FlightState::Aiming,
            budget: ShotBudget {
                used: 0,
                max: level.max_shots,
            },
            start: level.start,
            bounds: Bounds::play_field().with_margin(FLIGHT_BOUND_MARGIN),
        }
    }

    pub fn craft(&self) -> &BodyState {
        &self.craft
    }

    pub fn state(&self) -> FlightState {
        self.state
    }

    pub fn budget(&self) -> ShotBudget {
        self.budget
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    /// The velocity the preview should be drawn for.
    pub fn aim_velocity(&self) -> DVec2 {
        self.aim_velocity
    }

    /// Record the would-be launch velocity while Aiming. Ignored otherwise.
    pub fn set_aim(&mut self, velocity: DVec2) {
        if self.state == FlightState::Aiming {
            self.aim_velocity = velocity;
        }
    }

    /// Launch the craft. Accepted only while Aiming with speed at or above
    /// the minimum; a rejected launch changes nothing.
    pub fn launch(&mut self, velocity: DVec2) -> Option<FlightEvent> {
        if self.state != FlightState::Aiming {
            return None;
        }
        if velocity.length() < MIN_LAUNCH_SPEED {
            debug!("launch below minimum speed, ignoring: {:?}", velocity);
            return None;
        }

        self.craft.vel = velocity;
        self.budget.used += 1;
        self.state = FlightState::Flying;
        Some(FlightEvent::Launched { velocity })
    }

    /// Mid-flight velocity correction. No-op unless Flying with fuel left.
    pub fn use_thruster(&mut self, direction: DVec2, power: f64) -> Option<FlightEvent> {
        if self.state != FlightState::Flying || self.fuel <= 0.0 {
            return None;
        }

        self.craft.vel += direction.normalize_or_zero() * power;
        self.fuel -= THRUSTER_FUEL_COST;
        Some(FlightEvent::ThrusterFired {
            fuel_remaining: self.fuel,
        })
    }

    /// Advance the session by one simulation step of `dt` seconds.
    ///
    /// Integrates the craft and then evaluates terminal conditions in order
    /// (goal, impact, bounds). Returns every event the step produced; empty
    /// unless Flying.
    pub fn tick(&mut self, level: &Level, config: &GravityConfig, dt: f64) -> Vec<FlightEvent> {
        if self.state != FlightState::Flying {
            return Vec::new();
        }

        euler_step(&mut self.craft, &level.sources, config, dt);

        let mut events = Vec::new();
        match check_terminal(self.craft.pos, CRAFT_RADIUS, level, &self.bounds) {
            Some(TerminalCondition::GoalReached) => {
                self.state = FlightState::Succeeded;
                events.push(FlightEvent::GoalReached);
            }
            Some(TerminalCondition::Impact { hit_pos }) => {
                events.push(FlightEvent::Impact {
                    hit_pos,
                    craft_pos: self.craft.pos,
                    speed: self.craft.speed(),
                });
                events.push(self.fail_or_retry());
            }
            Some(TerminalCondition::OutOfBounds) => {
                events.push(FlightEvent::OutOfBounds {
                    last_pos: self.craft.pos,
                });
                events.push(self.fail_or_retry());
            }
            None => {}
        }
        events
    }

    /// Wipe all progress on the current level and go back to Aiming.
    pub fn reset_level(&mut self) {
        self.budget.used = 0;
        self.reset_craft();
        self.state = FlightState::Aiming;
    }

    fn fail_or_retry(&mut self) -> FlightEvent {
        if self.budget.exhausted() {
            self.state = FlightState::Failed;
            FlightEvent::LevelFailed
        } else {
            self.reset_craft();
            self.state = FlightState::Aiming;
            FlightEvent::AttemptReset {
                shots_remaining: self.budget.remaining(),
            }
        }
    }

    // Craft back at the start with zero velocity and a full tank. The shot
    // budget is deliberately untouched: lost shots stay lost.
    fn reset_craft(&mut self) {
        self.craft.pos = self.start;
        self.craft.vel = DVec2::ZERO;
        self.fuel = INITIAL_FUEL;
        self.aim_velocity = DVec2::ZERO;
    }
}
