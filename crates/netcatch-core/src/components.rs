//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::MovementPattern;
use crate::types::{Level, Position};

/// A catchable butterfly. Paired with `Position`, `Velocity` and `SpawnSerial`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Butterfly {
    /// Level whose art and parameters this butterfly uses.
    pub level: Level,
    pub width: f64,
    pub height: f64,
    /// Speed at spawn, before crossing or hit multipliers (pixels/second).
    pub base_speed: f64,
    /// Current speed (pixels/second).
    pub speed: f64,
    /// Current heading (radians).
    pub direction: f64,
    /// Heading at spawn; wander deviation is bounded around it.
    pub initial_direction: f64,
    pub catch_radius: f64,
    pub pattern: MovementPattern,
    /// Wing flap phase (radians), cosmetic.
    pub wing_phase: f64,
    /// Set the first frame the butterfly is inside the canvas.
    pub has_crossed_screen: bool,
    /// Set once a crossed butterfly has left the canvas plus margin.
    pub should_remove: bool,
}

/// Marks the boss-level queen. Each hit drains one point of health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    pub health: u32,
}

/// Insertion order within a session. Higher = spawned later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnSerial(pub u64);

/// The player's net.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pursuer {
    /// Latest pointer position.
    pub position: Position,
    /// Catch radius added to each butterfly's own radius.
    pub radius: f64,
}
