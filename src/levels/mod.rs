//! Level definitions, validation, and progression.

pub mod presets;

use bevy::math::DVec2;
use bevy::prelude::*;
use thiserror::Error;

use crate::collision::CircleRegion;
use crate::physics::GravitySource;

/// Gameplay family of a gravity source, scaling its base mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GravityClass {
    Normal,
    Heavy,
    Light,
    Variable,
    SuperHeavy,
    Moderate,
}

impl GravityClass {
    /// Effective-mass multiplier applied at level load.
    pub fn multiplier(&self) -> f64 {
        match self {
            GravityClass::Normal => 1.0,
            GravityClass::Heavy => 2.0,
            GravityClass::Light => 0.7,
            GravityClass::Variable => 1.5,
            GravityClass::SuperHeavy => 2.5,
            GravityClass::Moderate => 1.2,
        }
    }
}

/// Static description of a gravity source within a level.
#[derive(Clone, Copy, Debug)]
pub struct SourceSpec {
    pub x: f64,
    pub y: f64,
    /// Mass before the gravity-class multiplier.
    pub base_mass: f64,
    pub radius: f64,
    pub class: GravityClass,
    pub repulsive: bool,
}

impl SourceSpec {
    fn build(&self) -> GravitySource {
        GravitySource {
            pos: DVec2::new(self.x, self.y),
            mass: self.base_mass * self.class.multiplier(),
            radius: self.radius,
            repulsive: self.repulsive,
        }
    }
}

/// Static description of a level, suitable for `static` preset tables.
#[derive(Clone, Copy, Debug)]
pub struct LevelSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Craft start position.
    pub start: (f64, f64),
    /// Goal circle: (x, y, radius).
    pub goal: (f64, f64, f64),
    pub sources: &'static [SourceSpec],
    /// Obstacle circles: (x, y, radius).
    pub obstacles: &'static [(f64, f64, f64)],
    pub max_shots: u32,
}

/// Level validation failures.
#[derive(Error, Debug, PartialEq)]
pub enum LevelError {
    #[error("level grants zero shots")]
    ZeroShotBudget,
    #[error("goal radius must be positive, got {0}")]
    BadGoalRadius(f64),
    #[error("source {index} has non-positive mass {mass}")]
    BadSourceMass { index: usize, mass: f64 },
    #[error("source {index} has non-positive radius {radius}")]
    BadSourceRadius { index: usize, radius: f64 },
}

/// A validated, ready-to-fly level.
#[derive(Clone, Debug)]
pub struct Level {
    pub name: &'static str,
    pub description: &'static str,
    pub start: DVec2,
    pub sources: Vec<GravitySource>,
    pub goal: CircleRegion,
    pub obstacles: Vec<CircleRegion>,
    pub max_shots: u32,
}

impl Level {
    /// Build and validate a level from its static spec.
    pub fn from_spec(spec: &LevelSpec) -> Result<Self, LevelError> {
        if spec.max_shots == 0 {
            return Err(LevelError::ZeroShotBudget);
        }
        let (gx, gy, goal_radius) = spec.goal;
        if goal_radius <= 0.0 {
            return Err(LevelError::BadGoalRadius(goal_radius));
        }
        for (index, source) in spec.sources.iter().enumerate() {
            if source.base_mass <= 0.0 {
                return Err(LevelError::BadSourceMass {
                    index,
                    mass: source.base_mass,
                });
            }
            if source.radius <= 0.0 {
                return Err(LevelError::BadSourceRadius {
                    index,
                    radius: source.radius,
                });
            }
        }

        Ok(Self {
            name: spec.name,
            description: spec.description,
            start: DVec2::new(spec.start.0, spec.start.1),
            sources: spec.sources.iter().map(SourceSpec::build).collect(),
            goal: CircleRegion::new(DVec2::new(gx, gy), goal_radius),
            obstacles: spec
                .obstacles
                .iter()
                .map(|&(x, y, r)| CircleRegion::new(DVec2::new(x, y), r))
                .collect(),
            max_shots: spec.max_shots,
        })
    }
}

/// Ordered set of levels plus progression cursor.
#[derive(Resource, Clone, Debug)]
pub struct LevelSet {
    levels: Vec<Level>,
    current: usize,
}

impl LevelSet {
    /// Validate and collect a slice of specs.
    pub fn from_specs(specs: &[LevelSpec]) -> Result<Self, LevelError> {
        let levels = specs.iter().map(Level::from_spec).collect::<Result<_, _>>()?;
        Ok(Self { levels, current: 0 })
    }

    /// The built-in campaign. Preset integrity is covered by tests, so a
    /// validation failure here is a bug in the preset table itself.
    pub fn builtin() -> Self {
        Self::from_specs(presets::LEVELS).unwrap()
    }

    pub fn current(&self) -> &Level {
        &self.levels[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Move to the next level. Returns false when already at the last one.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.levels.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }
}
