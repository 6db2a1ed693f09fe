//! Simulation constants and tuning parameters.

use std::f64::consts::PI;

/// Nominal frame rate of the host loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest frame delta the simulation will integrate in one step (seconds).
pub const MAX_FRAME_DELTA: f64 = 0.25;

// --- Canvas ---

pub const DEFAULT_CANVAS_WIDTH: f64 = 1280.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 720.0;

/// Distance beyond the canvas at which a crossed butterfly is pruned (pixels).
pub const OFFSCREEN_MARGIN: f64 = 100.0;

// --- Levels ---

/// Number of levels; the last one is the boss level.
pub const MAX_LEVEL: u8 = 10;

/// Points per catch are `level * POINTS_PER_LEVEL`.
pub const POINTS_PER_LEVEL: u32 = 10;

/// Hard time limit per level (seconds).
pub const LEVEL_TIME_LIMIT_SECS: f64 = 10.0;

/// Level time before completion conditions are evaluated (seconds).
pub const COMPLETION_GUARD_SECS: f64 = 2.0;

/// Pre-game countdown start value; one step per second.
pub const COUNTDOWN_START: u32 = 3;

/// Seconds per countdown step.
pub const COUNTDOWN_STEP_SECS: f64 = 1.0;

/// Duration of the level transition interstitial (seconds).
pub const TRANSITION_SECS: f64 = 1.0;

// --- Waves ---

/// Butterflies per regular level wave.
pub const WAVE_SIZE: u32 = 15;

/// Insertion delay between consecutive wave members (seconds).
pub const WAVE_STAGGER_SECS: f64 = 0.05;

/// Per-butterfly random speed multiplier range.
pub const SPEED_VARIANCE_MIN: f64 = 0.8;
pub const SPEED_VARIANCE_MAX: f64 = 1.2;

/// Baseline acceleration per level above the first.
pub const LEVEL_SPEED_STEP: f64 = 0.1;

// --- Spawn geometry ---

/// Crossing points are drawn from this fraction band of each axis.
pub const CROSSING_MIN_FRACTION: f64 = 0.2;
pub const CROSSING_MAX_FRACTION: f64 = 0.8;

/// Spawn distance beyond the edge, in multiples of the butterfly's size.
pub const SPAWN_EDGE_OFFSET_FACTOR: f64 = 2.0;

/// Half-width of the random heading jitter (radians). Total spread is π/4.
pub const HEADING_JITTER: f64 = PI / 8.0;

// --- Butterfly profile ---

pub const BUTTERFLY_BASE_SIZE: f64 = 60.0;
pub const BUTTERFLY_SIZE_STEP: f64 = 4.0;
pub const BUTTERFLY_MIN_SIZE: f64 = 30.0;

pub const BUTTERFLY_BASE_CATCH_RADIUS: f64 = 35.0;
pub const BUTTERFLY_CATCH_RADIUS_STEP: f64 = 2.5;
pub const BUTTERFLY_MIN_CATCH_RADIUS: f64 = 15.0;

/// Level 1 base speed (pixels/second).
pub const BUTTERFLY_BASE_SPEED: f64 = 120.0;
pub const BUTTERFLY_SPEED_STEP: f64 = 12.0;

/// Wing flap phase rate (radians/second). Cosmetic only.
pub const WING_FLAP_RATE: f64 = 12.0;

/// One-time speed multiplier applied when a butterfly first enters the canvas.
pub const CROSSING_SPEED_BOOST: f64 = 1.05;

// --- Wander ---

/// Per-frame probability of a heading perturbation for `Direct` flight.
pub const WANDER_CHANCE: f64 = 0.05;

/// Maximum single perturbation (radians).
pub const WANDER_STEP: f64 = 0.25;

/// Maximum cumulative deviation from the spawn heading (radians).
pub const WANDER_MAX_DEVIATION: f64 = PI / 4.0;

// --- Boss level ---

pub const BOSS_SIZE_FACTOR: f64 = 2.5;
pub const BOSS_CATCH_RADIUS_FACTOR: f64 = 0.7;
pub const BOSS_SPEED_FACTOR: f64 = 0.8;
pub const BOSS_HEALTH: u32 = 5;
pub const BOSS_SPAWN_DELAY_SECS: f64 = 1.0;

/// Speed multiplier applied on each non-fatal boss hit.
pub const BOSS_HIT_SPEED_FACTOR: f64 = 1.1;

pub const MINION_COUNT: u32 = 8;
pub const MINION_RING_RADIUS: f64 = 150.0;
pub const MINION_BASE_DELAY_SECS: f64 = 0.5;
pub const MINION_STAGGER_SECS: f64 = 0.1;

// --- Opportunistic spawns ---

/// Per-frame probability of an extra group while playing.
pub const OPPORTUNISTIC_CHANCE: f64 = 0.01;

/// Extra groups are only spawned while fewer butterflies than this are live.
pub const OPPORTUNISTIC_MAX_LIVE: usize = 20;

pub const OPPORTUNISTIC_GROUP_MIN: u32 = 3;
pub const OPPORTUNISTIC_GROUP_MAX: u32 = 5;
pub const OPPORTUNISTIC_SPEED_BOOST: f64 = 1.2;

// --- Pursuer ---

/// Net catch radius (pixels).
pub const PURSUER_RADIUS: f64 = 30.0;
