//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a new session (countdown, then level 1).
    StartGame,
    /// Reset everything after a completed run and start again.
    PlayAgain,
    /// Pointer or touch moved.
    PointerMove { x: f64, y: f64 },
    /// Click or tap; hit-tested against live butterflies.
    Click { x: f64, y: f64 },
}
