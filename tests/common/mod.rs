//! Shared helpers for integration tests.

#![allow(dead_code)]

use bevy::math::DVec2;
use gravity_wells::collision::CircleRegion;
use gravity_wells::flight::{FlightEvent, FlightSession};
use gravity_wells::levels::Level;
use gravity_wells::physics::{GravityConfig, GravitySource};

/// Empty field: start (100, 300), goal at (700, 300), nothing in between.
pub fn open_field_level(max_shots: u32) -> Level {
    Level {
        name: "open field",
        description: "",
        start: DVec2::new(100.0, 300.0),
        sources: Vec::new(),
        goal: CircleRegion::new(DVec2::new(700.0, 300.0), 25.0),
        obstacles: Vec::new(),
        max_shots,
    }
}

/// Open field plus one planet of mass 80 on the start-goal line.
pub fn single_source_level(max_shots: u32) -> Level {
    let mut level = open_field_level(max_shots);
    level.sources = vec![GravitySource::new(DVec2::new(400.0, 300.0), 80.0, 25.0)];
    level
}

/// Tick the session until it produces events or the step limit runs out.
pub fn fly_until_terminal(
    session: &mut FlightSession,
    level: &Level,
    config: &GravityConfig,
    dt: f64,
) -> Vec<FlightEvent> {
    let mut all = Vec::new();
    for _ in 0..50_000 {
        let events = session.tick(level, config, dt);
        let done = !events.is_empty();
        all.extend(events);
        if done {
            return all;
        }
    }
    panic!("flight did not terminate within the step limit");
}
