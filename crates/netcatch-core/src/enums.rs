//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session phase. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game started yet.
    #[default]
    Idle,
    /// Pre-game countdown, shown once per session.
    Countdown,
    /// Normal play.
    Playing,
    /// Short interstitial between levels.
    Transitioning,
    /// The run has ended; score is final.
    Complete,
}

/// Flight behaviour tag for a butterfly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPattern {
    /// Heads toward its crossing point with a small bounded random walk.
    #[default]
    Direct,
    /// Holds its initial heading.
    Straight,
}

/// Canvas edge a butterfly enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Right => Edge::Left,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
        }
    }
}

/// Geometric pattern used to assign spawn edges to a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    /// Every member picks its own random edge.
    Scatter,
    /// All members share one edge.
    Stream,
    /// Members alternate between an edge and its opposite.
    Pincer,
    /// Members cycle through all four edges.
    Ring,
}

impl Formation {
    pub const ALL: [Formation; 4] = [
        Formation::Scatter,
        Formation::Stream,
        Formation::Pincer,
        Formation::Ring,
    ];
}

/// Why a level ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionReason {
    /// The level time limit expired.
    TimeLimit,
    /// No butterflies left (all caught or flown off).
    Cleared,
    /// The queen was caught on the boss level.
    BossDefeated,
}

impl CompletionReason {
    /// Whether the player finished the level ahead of the clock.
    pub fn is_fast(self) -> bool {
        !matches!(self, CompletionReason::TimeLimit)
    }
}

/// Result of testing one butterfly against a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatchOutcome {
    /// Click outside the combined catch radius.
    Miss,
    /// Boss hit but still alive.
    Wounded { remaining: u32 },
    /// Butterfly caught.
    Caught,
}

impl CatchOutcome {
    pub fn is_caught(self) -> bool {
        matches!(self, CatchOutcome::Caught)
    }

    pub fn is_hit(self) -> bool {
        !matches!(self, CatchOutcome::Miss)
    }
}
