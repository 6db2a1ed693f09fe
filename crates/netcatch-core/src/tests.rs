#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::GameConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::GameError;
    use crate::state::{CatchCounts, GameRecord, GameStateSnapshot};
    use crate::types::{Canvas, Level, Position, Velocity};

    // ---- Level ----

    #[test]
    fn test_level_bounds() {
        assert!(Level::new(1).is_ok());
        assert!(Level::new(MAX_LEVEL).is_ok());
        assert!(matches!(Level::new(0), Err(GameError::LevelOutOfRange(0))));
        assert!(matches!(
            Level::new(MAX_LEVEL + 1),
            Err(GameError::LevelOutOfRange(11))
        ));
    }

    #[test]
    fn test_level_clamped() {
        assert_eq!(Level::clamped(0), Level::FIRST);
        assert_eq!(Level::clamped(200), Level::MAX);
        assert_eq!(Level::clamped(4).get(), 4);
    }

    #[test]
    fn test_level_next_stops_at_max() {
        let mut level = Level::FIRST;
        let mut steps = 0;
        while let Some(next) = level.next() {
            assert_eq!(next.get(), level.get() + 1);
            level = next;
            steps += 1;
        }
        assert_eq!(steps, MAX_LEVEL - 1);
        assert!(level.is_max());
        assert_eq!(Level::MAX.previous().get(), MAX_LEVEL - 1);
        assert_eq!(Level::FIRST.previous(), Level::FIRST);
    }

    #[test]
    fn test_level_points() {
        assert_eq!(Level::FIRST.points(), 10);
        assert_eq!(Level::new(7).unwrap().points(), 70);
        assert_eq!(Level::MAX.points(), 100);
    }

    #[test]
    fn test_level_serde_rejects_out_of_range() {
        let level: Level = serde_json::from_str("3").unwrap();
        assert_eq!(level.get(), 3);
        assert_eq!(serde_json::to_string(&level).unwrap(), "3");
        assert!(serde_json::from_str::<Level>("0").is_err());
        assert!(serde_json::from_str::<Level>("11").is_err());
    }

    // ---- Geometry ----

    #[test]
    fn test_canvas_contains_and_beyond() {
        let canvas = Canvas::new(800.0, 600.0);
        assert!(canvas.contains(&Position::new(0.0, 0.0)));
        assert!(canvas.contains(&Position::new(800.0, 600.0)));
        assert!(!canvas.contains(&Position::new(-0.1, 300.0)));

        assert!(!canvas.is_beyond(&Position::new(-100.0, 300.0), 100.0));
        assert!(canvas.is_beyond(&Position::new(-100.1, 300.0), 100.0));
        assert!(canvas.is_beyond(&Position::new(400.0, 700.5), 100.0));
        assert!(!canvas.is_beyond(&Position::new(850.0, 650.0), 100.0));
    }

    #[test]
    fn test_velocity_from_heading() {
        let v = Velocity::from_heading(std::f64::consts::FRAC_PI_2, 50.0);
        assert!(v.x.abs() < 1e-9);
        assert!((v.y - 50.0).abs() < 1e-9);
        assert!((v.speed() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_distance_and_angle() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((a.angle_to(&Position::new(-1.0, 0.0)) - std::f64::consts::PI).abs() < 1e-12);
    }

    // ---- Scoring records ----

    #[test]
    fn test_catch_counts_and_record() {
        let mut counts = CatchCounts::default();
        counts.record(Level::FIRST);
        counts.record(Level::FIRST);
        counts.record(Level::MAX);

        assert_eq!(counts.get(Level::FIRST), 2);
        assert_eq!(counts.get(Level::MAX), 1);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.as_slice().len(), MAX_LEVEL as usize);

        let record = GameRecord::new(120, counts);
        assert_eq!(record.total_caught, 3);
        assert_eq!(record.score, 120);
    }

    #[test]
    fn test_default_snapshot_is_idle_level_one() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.phase, GamePhase::Idle);
        assert_eq!(snap.level, Level::FIRST);
        assert!(snap.butterflies.is_empty());
        assert!(snap.countdown.is_none());
    }

    // ---- Enums ----

    #[test]
    fn test_edge_opposites() {
        for edge in Edge::ALL {
            assert_ne!(edge, edge.opposite());
            assert_eq!(edge, edge.opposite().opposite());
        }
    }

    #[test]
    fn test_completion_reason_fast() {
        assert!(!CompletionReason::TimeLimit.is_fast());
        assert!(CompletionReason::Cleared.is_fast());
        assert!(CompletionReason::BossDefeated.is_fast());
    }

    #[test]
    fn test_catch_outcome_views() {
        assert!(CatchOutcome::Caught.is_caught());
        assert!(!CatchOutcome::Wounded { remaining: 2 }.is_caught());
        assert!(CatchOutcome::Wounded { remaining: 2 }.is_hit());
        assert!(!CatchOutcome::Miss.is_hit());
    }

    /// Commands use an internally tagged representation on the wire.
    #[test]
    fn test_player_command_wire_format() {
        let json = serde_json::to_string(&PlayerCommand::Click { x: 1.5, y: 2.0 }).unwrap();
        assert_eq!(json, r#"{"type":"Click","x":1.5,"y":2.0}"#);

        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"StartGame"}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::StartGame));
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.wave_size, WAVE_SIZE);
        assert_eq!(config.completion_guard_secs, COMPLETION_GUARD_SECS);
    }

    #[test]
    fn test_config_partial_override() {
        let config =
            GameConfig::from_json_str(r#"{"seed": 7, "completion_guard_secs": 0.5}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.completion_guard_secs, 0.5);
        assert_eq!(config.level_time_limit_secs, LEVEL_TIME_LIMIT_SECS);
        assert_eq!(config.canvas, Canvas::default());
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        let err = GameConfig::from_json_str(r#"{"wave_size": 0}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));

        let err = GameConfig::from_json_str(r#"{"opportunistic_chance": 1.5}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));

        let err = GameConfig::from_json_str(r#"{"canvas": {"width": 0.0, "height": 10.0}}"#)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));

        let err = GameConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }

    #[test]
    fn test_config_from_missing_path() {
        let path = std::env::temp_dir().join("netcatch_missing_config_does_not_exist.json");
        let err = GameConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, GameError::ConfigIo(_)));
    }
}
