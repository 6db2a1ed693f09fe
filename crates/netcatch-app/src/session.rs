//! Host-facing session calls.
//!
//! These bridge a host (window shell, test harness, autopilot) to the game
//! loop thread through `AppState`.

use log::info;

use netcatch_core::commands::PlayerCommand;
use netcatch_core::config::GameConfig;
use netcatch_core::state::GameStateSnapshot;

use crate::game_loop;
use crate::scoreboard::LoggedLeaderboard;
use crate::state::{AppState, GameLoopCommand};

/// Spawn the game loop if it is not already running.
pub fn start_session(state: &AppState, config: GameConfig) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Session already running".into());
    }

    let sink = LoggedLeaderboard::new(state.leaderboard.clone());
    let cmd_tx = game_loop::spawn_game_loop(config, state.latest_snapshot.clone(), sink)
        .map_err(|e| format!("Failed to spawn game loop: {}", e))?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;
    info!("session started");

    Ok(())
}

/// Send a player command to the engine.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Session not started".into()),
    }
}

/// Latest snapshot, if the loop has produced one.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop. Stopping an idle app is a no-op.
pub fn stop_session(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    if let Some(tx) = tx_lock.take() {
        // A loop that already exited has dropped its receiver.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    *running = false;
    Ok(())
}
