//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::CompletionReason;
use crate::state::GameRecord;
use crate::types::Level;

/// Feedback events drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Countdown stepped; `remaining == 0` means play begins.
    CountdownTick { remaining: u32 },
    /// A level's first wave was issued.
    LevelStarted { level: Level },
    /// A butterfly was caught.
    Caught {
        level: Level,
        points: u32,
        boss: bool,
    },
    /// The queen was hit but survived.
    BossWounded { remaining: u32 },
    /// A level ended; `level` is the level that was just finished.
    LevelComplete {
        level: Level,
        reason: CompletionReason,
    },
    /// The run ended.
    GameComplete { record: GameRecord },
}
