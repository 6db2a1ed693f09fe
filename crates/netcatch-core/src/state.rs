//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_LEVEL;
use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Level, Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub level: Level,
    pub score: u32,
    /// Seconds elapsed in the current level.
    pub level_timer: f64,
    /// Countdown value while counting down.
    pub countdown: Option<u32>,
    /// Transition progress in `[0, 1]` while transitioning.
    pub transition_progress: Option<f64>,
    /// Live butterflies, oldest first.
    pub butterflies: Vec<ButterflyView>,
    pub pursuer: PursuerView,
    pub catch_counts: CatchCounts,
    pub events: Vec<GameEvent>,
}

/// A butterfly as the renderer needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButterflyView {
    pub serial: u64,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    /// Sprite rotation derived from the heading (radians).
    pub rotation: f64,
    pub wing_phase: f64,
    /// Which level's artwork to draw.
    pub art_level: Level,
    pub is_boss: bool,
    /// Remaining hits for the queen.
    pub health: Option<u32>,
}

/// Net position for drawing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PursuerView {
    pub position: Position,
    pub radius: f64,
}

/// Compact session summary for harnesses and tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub level: Level,
    pub score: u32,
    pub live_entities: usize,
    pub phase: GamePhase,
}

/// Catches per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchCounts([u32; MAX_LEVEL as usize]);

impl CatchCounts {
    pub fn record(&mut self, level: Level) {
        self.0[level.index()] += 1;
    }

    pub fn get(&self, level: Level) -> u32 {
        self.0[level.index()]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

/// Final result of a run, handed to the leaderboard once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub score: u32,
    pub catch_counts: CatchCounts,
    pub total_caught: u32,
}

impl GameRecord {
    pub fn new(score: u32, catch_counts: CatchCounts) -> Self {
        Self {
            score,
            total_caught: catch_counts.total(),
            catch_counts,
        }
    }
}
