//! Open-loop trajectory preview for the aiming phase.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::flight::{FlightSession, FlightState};
use crate::levels::LevelSet;
use crate::physics::{GravityConfig, GravitySource, euler_step};
use crate::types::{
    BodyState, Bounds, CRAFT_MASS, MIN_LAUNCH_SPEED, PREDICTION_BOUND_MARGIN,
};

/// Preview tuning. The defaults match the in-game preview cadence, which is
/// coarser than the live simulation step.
#[derive(Resource, Clone, Debug)]
pub struct PredictionSettings {
    /// Hard cap on recorded samples.
    pub max_steps: usize,
    /// Preview step size in seconds.
    pub dt: f64,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            max_steps: 60,
            dt: 0.15,
        }
    }
}

/// The current preview polyline. Empty when there is nothing to show.
#[derive(Resource, Clone, Debug, Default)]
pub struct TrajectoryPreview {
    pub points: Vec<DVec2>,
}

/// Dirty-tracking for the preview so it only recomputes on aim changes.
#[derive(Resource, Clone, Debug)]
pub struct PreviewState {
    pub needs_update: bool,
    last_aim: DVec2,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            needs_update: true,
            last_aim: DVec2::ZERO,
        }
    }
}

/// Simulate a launch without touching live state.
///
/// Records the position before every step, so the first sample is the start
/// position itself. Stops early once the projected position leaves the
/// prediction bounds; at most `steps` samples are returned.
pub fn predict_trajectory(
    start_pos: DVec2,
    start_vel: DVec2,
    mass: f64,
    sources: &[GravitySource],
    config: &GravityConfig,
    steps: usize,
    dt: f64,
) -> Vec<DVec2> {
    let bounds = Bounds::play_field().with_margin(PREDICTION_BOUND_MARGIN);
    let mut body = BodyState::new(start_pos, start_vel, mass);
    let mut points = Vec::with_capacity(steps);

    for _ in 0..steps {
        points.push(body.pos);
        euler_step(&mut body, sources, config, dt);
        if !bounds.contains(body.pos) {
            break;
        }
    }
    points
}

/// Recomputes the preview while Aiming; clears it otherwise.
pub struct PredictionPlugin;

impl Plugin for PredictionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PredictionSettings>()
            .init_resource::<TrajectoryPreview>()
            .init_resource::<PreviewState>()
            .add_systems(Update, update_preview);
    }
}

fn update_preview(
    session: Res<FlightSession>,
    levels: Res<LevelSet>,
    config: Res<GravityConfig>,
    settings: Res<PredictionSettings>,
    mut preview: ResMut<TrajectoryPreview>,
    mut state: ResMut<PreviewState>,
) {
    if session.state() != FlightState::Aiming {
        if !preview.points.is_empty() {
            preview.points.clear();
        }
        state.needs_update = true;
        return;
    }

    let aim = session.aim_velocity();
    if !state.needs_update && aim == state.last_aim {
        return;
    }
    state.needs_update = false;
    state.last_aim = aim;

    if aim.length() < MIN_LAUNCH_SPEED {
        preview.points.clear();
        return;
    }

    preview.points = predict_trajectory(
        session.craft().pos,
        aim,
        CRAFT_MASS,
        &levels.current().sources,
        &config,
        settings.max_steps,
        settings.dt,
    );
}
