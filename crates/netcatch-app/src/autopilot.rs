//! Headless player for demo runs and soak testing.
//!
//! Starts the game, then swings the net at the newest on-screen butterfly,
//! favouring the queen when she is visible.

use netcatch_core::commands::PlayerCommand;
use netcatch_core::enums::GamePhase;
use netcatch_core::state::GameStateSnapshot;
use netcatch_core::types::Canvas;

/// The command to send for this snapshot, if any.
pub fn next_command(snapshot: &GameStateSnapshot, canvas: &Canvas) -> Option<PlayerCommand> {
    match snapshot.phase {
        GamePhase::Idle => Some(PlayerCommand::StartGame),
        GamePhase::Playing => {
            let visible = snapshot
                .butterflies
                .iter()
                .filter(|b| canvas.contains(&b.position));
            let target = visible
                .clone()
                .find(|b| b.is_boss)
                .or_else(|| visible.last())?;
            Some(PlayerCommand::Click {
                x: target.position.x,
                y: target.position.y,
            })
        }
        GamePhase::Countdown | GamePhase::Transitioning | GamePhase::Complete => None,
    }
}
