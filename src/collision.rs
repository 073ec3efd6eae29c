//! Circle overlap tests and per-tick terminal-condition evaluation.
//!
//! Collision is plain circle-circle overlap sampled once per tick. A craft
//! moving fast enough to cross a thin obstacle within one step can tunnel
//! through it; there is no swept test.

use bevy::math::DVec2;

use crate::levels::Level;
use crate::types::Bounds;

/// A static circular region: the goal, an obstacle, or a source body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleRegion {
    pub pos: DVec2,
    pub radius: f64,
}

impl CircleRegion {
    pub fn new(pos: DVec2, radius: f64) -> Self {
        Self { pos, radius }
    }
}

/// Whether two circles overlap (strict: touching circles do not).
pub fn circles_overlap(a_pos: DVec2, a_radius: f64, b_pos: DVec2, b_radius: f64) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Why a flight ended this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TerminalCondition {
    /// Craft overlaps the goal region.
    GoalReached,
    /// Craft struck a source body or an obstacle.
    Impact { hit_pos: DVec2 },
    /// Craft left the live flight bounds.
    OutOfBounds,
}

/// Evaluate terminal conditions for the craft at `pos`.
///
/// Checked in priority order: goal first, then source bodies and obstacles,
/// then the flight bounds. A tick that overlaps both the goal and an obstacle
/// counts as a win.
pub fn check_terminal(
    pos: DVec2,
    radius: f64,
    level: &Level,
    bounds: &Bounds,
) -> Option<TerminalCondition> {
    if circles_overlap(pos, radius, level.goal.pos, level.goal.radius) {
        return Some(TerminalCondition::GoalReached);
    }

    for source in &level.sources {
        if circles_overlap(pos, radius, source.pos, source.radius) {
            return Some(TerminalCondition::Impact {
                hit_pos: source.pos,
            });
        }
    }

    for obstacle in &level.obstacles {
        if circles_overlap(pos, radius, obstacle.pos, obstacle.radius) {
            return Some(TerminalCondition::Impact {
                hit_pos: obstacle.pos,
            });
        }
    }

    if !bounds.contains(pos) {
        return Some(TerminalCondition::OutOfBounds);
    }

    None
}
