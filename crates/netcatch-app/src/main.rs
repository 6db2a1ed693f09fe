//! Headless netcatch runner.
//!
//! Usage: `netcatch-app [config.json]`. Plays one run with the autopilot at
//! real-time speed and logs the final record. `RUST_LOG` controls verbosity.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use log::{error, info, warn};

use netcatch_app::autopilot;
use netcatch_app::game_loop::TICK_DURATION;
use netcatch_app::session;
use netcatch_app::state::AppState;
use netcatch_core::config::GameConfig;
use netcatch_core::enums::GamePhase;

/// Reaction time between autopilot swings.
const SWING_INTERVAL: Duration = Duration::from_millis(120);

fn load_config() -> Result<GameConfig, String> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("loading config from {}", path.display());
            GameConfig::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
        }
        None => Ok(GameConfig::default()),
    }
}

fn run(state: &AppState, config: GameConfig) -> Result<(), String> {
    let canvas = config.canvas;
    session::start_session(state, config)?;

    let mut last_phase = GamePhase::Idle;
    loop {
        let Some(snapshot) = session::get_snapshot(state)? else {
            std::thread::sleep(TICK_DURATION);
            continue;
        };

        if snapshot.phase != last_phase {
            info!(
                "phase {:?} (level {}, score {})",
                snapshot.phase, snapshot.level, snapshot.score
            );
            last_phase = snapshot.phase;
        }
        if snapshot.phase == GamePhase::Complete {
            break;
        }

        if let Some(command) = autopilot::next_command(&snapshot, &canvas) {
            session::send_command(state, command)?;
            std::thread::sleep(SWING_INTERVAL);
        } else {
            std::thread::sleep(TICK_DURATION);
        }
    }

    session::stop_session(state)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new();
    if let Err(e) = run(&state, config) {
        error!("session failed: {e}");
        return ExitCode::FAILURE;
    }

    match state.leaderboard.best() {
        Some(best) => info!(
            "final score {} with {} butterflies caught",
            best.score, best.total_caught
        ),
        None => warn!("run ended without a record"),
    }
    ExitCode::SUCCESS
}
