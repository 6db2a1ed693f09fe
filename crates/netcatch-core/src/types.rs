//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_LEVEL;
use crate::error::{GameError, Result};

/// 2D position in canvas space (pixels). x = right, y = down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in canvas space (pixels/second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each frame).
    pub tick: u64,
    /// Elapsed session time in seconds.
    pub elapsed_secs: f64,
}

/// Visible play area in pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

/// A level number in `1..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    /// Angle from this position to another (radians, atan2 convention).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` along `direction` (radians).
    pub fn from_heading(direction: f64, speed: f64) -> Self {
        let v = DVec2::from_angle(direction) * speed;
        Self { x: v.x, y: v.y }
    }

    /// Speed magnitude (pixels/second).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether the position lies inside the visible rectangle (edges inclusive).
    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Whether the position lies beyond the visible rectangle by more than `margin` on any side.
    pub fn is_beyond(&self, pos: &Position, margin: f64) -> bool {
        pos.x < -margin
            || pos.x > self.width + margin
            || pos.y < -margin
            || pos.y > self.height + margin
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_CANVAS_WIDTH,
            crate::constants::DEFAULT_CANVAS_HEIGHT,
        )
    }
}

impl Level {
    pub const FIRST: Level = Level(1);
    pub const MAX: Level = Level(MAX_LEVEL);

    /// Checked constructor; levels outside `1..=MAX_LEVEL` are contract violations.
    pub fn new(level: u8) -> Result<Self> {
        if (1..=MAX_LEVEL).contains(&level) {
            Ok(Self(level))
        } else {
            Err(GameError::LevelOutOfRange(level))
        }
    }

    /// Clamp any requested level into `1..=MAX_LEVEL`.
    pub fn clamped(level: u8) -> Self {
        Self(level.clamp(1, MAX_LEVEL))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index for per-level tables.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn is_max(self) -> bool {
        self.0 == MAX_LEVEL
    }

    /// The following level, or `None` at the last level.
    pub fn next(self) -> Option<Level> {
        if self.is_max() {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// The level preceding this one, saturating at level 1.
    pub fn previous(self) -> Level {
        Self(self.0.saturating_sub(1).max(1))
    }

    /// Points awarded for catching a butterfly of this level.
    pub fn points(self) -> u32 {
        self.0 as u32 * crate::constants::POINTS_PER_LEVEL
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for Level {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Level::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
