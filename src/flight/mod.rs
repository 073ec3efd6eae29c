//! Flight plugin: command and notification events around the session.

mod session;

pub use session::{FlightEvent, FlightSession, FlightState, ShotBudget};

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::levels::LevelSet;
use crate::physics::GravityConfig;
use crate::prediction::PreviewState;

/// Update the aim velocity while Aiming (drives the trajectory preview).
#[derive(Message)]
pub struct AimCommand {
    pub velocity: DVec2,
}

/// Launch the craft with the given velocity.
#[derive(Message)]
pub struct LaunchCommand {
    pub velocity: DVec2,
}

/// Fire the thruster mid-flight.
#[derive(Message)]
pub struct ThrusterCommand {
    pub direction: DVec2,
    pub power: f64,
}

/// Restart the current level from scratch.
#[derive(Message)]
pub struct RestartCommand;

/// Move to the next level (intended after a success).
#[derive(Message)]
pub struct AdvanceLevelCommand;

/// The craft reached the goal.
#[derive(Message)]
pub struct GoalReachedEvent {
    pub shots_used: u32,
}

/// The craft struck a body or an obstacle.
#[derive(Message)]
pub struct ImpactEvent {
    pub hit_pos: DVec2,
    pub craft_pos: DVec2,
    pub impact_speed: f64,
}

/// The craft drifted past the live flight bounds.
#[derive(Message)]
pub struct OutOfBoundsEvent {
    pub last_pos: DVec2,
}

/// A shot was lost but the level continues; the craft is back at the start.
#[derive(Message)]
pub struct AttemptResetEvent {
    pub shots_remaining: u32,
}

/// The shot budget ran out.
#[derive(Message)]
pub struct LevelFailedEvent {
    pub shots_used: u32,
}

/// Wires the session into the schedule: commands in `Update`, simulation in
/// `FixedUpdate`.
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let levels = LevelSet::builtin();
        let session = FlightSession::new(levels.current());

        app.insert_resource(levels)
            .insert_resource(session)
            .init_resource::<GravityConfig>()
            .init_resource::<PreviewState>()
            .init_resource::<Messages<AimCommand>>()
            .init_resource::<Messages<LaunchCommand>>()
            .init_resource::<Messages<ThrusterCommand>>()
            .init_resource::<Messages<RestartCommand>>()
            .init_resource::<Messages<AdvanceLevelCommand>>()
            .init_resource::<Messages<GoalReachedEvent>>()
            .init_resource::<Messages<ImpactEvent>>()
            .init_resource::<Messages<OutOfBoundsEvent>>()
            .init_resource::<Messages<AttemptResetEvent>>()
            .init_resource::<Messages<LevelFailedEvent>>()
            .add_systems(
                Update,
                (handle_aim, handle_launch, handle_thruster, handle_level_commands),
            )
            .add_systems(FixedUpdate, flight_tick);
    }
}

fn handle_aim(
    mut commands: MessageReader<AimCommand>,
    mut session: ResMut<FlightSession>,
    mut preview: ResMut<PreviewState>,
) {
    for command in commands.read() {
        session.set_aim(command.velocity);
        preview.needs_update = true;
    }
}

fn handle_launch(mut commands: MessageReader<LaunchCommand>, mut session: ResMut<FlightSession>) {
    for command in commands.read() {
        if let Some(FlightEvent::Launched { velocity }) = session.launch(command.velocity) {
            info!(
                "launch {} of {}: velocity ({:.1}, {:.1})",
                session.budget().used,
                session.budget().max,
                velocity.x,
                velocity.y
            );
        }
    }
}

fn handle_thruster(
    mut commands: MessageReader<ThrusterCommand>,
    mut session: ResMut<FlightSession>,
) {
    for command in commands.read() {
        if let Some(FlightEvent::ThrusterFired { fuel_remaining }) =
            session.use_thruster(command.direction, command.power)
        {
            info!("thruster fired, {fuel_remaining:.1} fuel left");
        }
    }
}

fn handle_level_commands(
    mut restarts: MessageReader<RestartCommand>,
    mut advances: MessageReader<AdvanceLevelCommand>,
    mut session: ResMut<FlightSession>,
    mut levels: ResMut<LevelSet>,
    mut preview: ResMut<PreviewState>,
) {
    if restarts.read().next().is_some() {
        session.reset_level();
        preview.needs_update = true;
        info!("level '{}' restarted", levels.current().name);
    }

    if advances.read().next().is_some() {
        if levels.advance() {
            *session = FlightSession::new(levels.current());
            preview.needs_update = true;
            info!(
                "advanced to level {} of {}: '{}'",
                levels.current_index() + 1,
                levels.len(),
                levels.current().name
            );
        } else {
            info!("already at the last level");
        }
    }
}

/// One simulation step per `FixedUpdate`; forwards session events out.
fn flight_tick(
    time: Res<Time>,
    mut session: ResMut<FlightSession>,
    levels: Res<LevelSet>,
    config: Res<GravityConfig>,
    mut goal_events: MessageWriter<GoalReachedEvent>,
    mut impact_events: MessageWriter<ImpactEvent>,
    mut oob_events: MessageWriter<OutOfBoundsEvent>,
    mut reset_events: MessageWriter<AttemptResetEvent>,
    mut failed_events: MessageWriter<LevelFailedEvent>,
) {
    let dt = time.delta_secs_f64();
    let events = session.tick(levels.current(), &config, dt);

    for event in events {
        match event {
            FlightEvent::GoalReached => {
                info!(
                    "goal reached on '{}' with {} of {} shots",
                    levels.current().name,
                    session.budget().used,
                    session.budget().max
                );
                goal_events.write(GoalReachedEvent {
                    shots_used: session.budget().used,
                });
            }
            FlightEvent::Impact {
                hit_pos,
                craft_pos,
                speed,
            } => {
                info!("impact at ({:.0}, {:.0}), speed {:.1}", craft_pos.x, craft_pos.y, speed);
                impact_events.write(ImpactEvent {
                    hit_pos,
                    craft_pos,
                    impact_speed: speed,
                });
            }
            FlightEvent::OutOfBounds { last_pos } => {
                info!("craft lost out of bounds at ({:.0}, {:.0})", last_pos.x, last_pos.y);
                oob_events.write(OutOfBoundsEvent { last_pos });
            }
            FlightEvent::AttemptReset { shots_remaining } => {
                reset_events.write(AttemptResetEvent { shots_remaining });
            }
            FlightEvent::LevelFailed => {
                warn!(
                    "level '{}' failed, all {} shots spent",
                    levels.current().name,
                    session.budget().max
                );
                failed_events.write(LevelFailedEvent {
                    shots_used: session.budget().used,
                });
            }
            // Launched and ThrusterFired are emitted by the command handlers
            FlightEvent::Launched { .. } | FlightEvent::ThrusterFired { .. } => {}
        }
    }
}
