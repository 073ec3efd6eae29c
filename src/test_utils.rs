//! Shared helpers for unit tests.

pub mod fixtures {
    use bevy::math::DVec2;

    use crate::collision::CircleRegion;
    use crate::levels::Level;
    use crate::physics::GravitySource;

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

    /// Open field plus one planet of mass 80 directly on the start-goal line.
    pub fn single_source_level(max_shots: u32) -> Level {
        let mut level = open_field_level(max_shots);
        level.sources = vec![GravitySource::new(DVec2::new(400.0, 300.0), 80.0, 25.0)];
        level
    }
}

pub mod bevy_test {
    use bevy::prelude::*;

    use crate::flight::FlightPlugin;
    use crate::prediction::PredictionPlugin;

    /// Minimal app with the full simulation wired up and no rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightPlugin)
            .add_plugins(PredictionPlugin);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::{FlightSession, FlightState};
    use crate::levels::LevelSet;

    #[test]
    fn test_fixture_levels_are_sane() {
        let open = fixtures::open_field_level(3);
        assert!(open.sources.is_empty());
        assert_eq!(open.max_shots, 3);

        let single = fixtures::single_source_level(1);
        assert_eq!(single.sources.len(), 1);
        assert_eq!(single.max_shots, 1);
    }

    #[test]
    fn test_headless_app_has_resources() {
        let app = bevy_test::headless_app();
        let session = app.world().resource::<FlightSession>();
        assert_eq!(session.state(), FlightState::Aiming);

        let levels = app.world().resource::<LevelSet>();
        assert_eq!(levels.current_index(), 0);
    }
}
