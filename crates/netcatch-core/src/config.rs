//! Session configuration.
//!
//! Every field defaults to the matching value in `constants`, so a config
//! file only needs to name what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{GameError, Result};
use crate::types::Canvas;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub canvas: Canvas,
    /// Butterflies per regular level wave.
    pub wave_size: u32,
    pub level_time_limit_secs: f64,
    /// Level time before completion conditions are checked.
    pub completion_guard_secs: f64,
    pub countdown_start: u32,
    pub transition_secs: f64,
    pub offscreen_margin: f64,
    pub pursuer_radius: f64,
    /// Per-frame probability of an opportunistic group (0 disables).
    pub opportunistic_chance: f64,
    pub opportunistic_max_live: usize,
    /// Frames longer than this are integrated as this long.
    pub max_frame_delta: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            canvas: Canvas::default(),
            wave_size: WAVE_SIZE,
            level_time_limit_secs: LEVEL_TIME_LIMIT_SECS,
            completion_guard_secs: COMPLETION_GUARD_SECS,
            countdown_start: COUNTDOWN_START,
            transition_secs: TRANSITION_SECS,
            offscreen_margin: OFFSCREEN_MARGIN,
            pursuer_radius: PURSUER_RADIUS,
            opportunistic_chance: OPPORTUNISTIC_CHANCE,
            opportunistic_max_live: OPPORTUNISTIC_MAX_LIVE,
            max_frame_delta: MAX_FRAME_DELTA,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "canvas must have positive size, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if self.wave_size == 0 {
            return Err(GameError::InvalidConfig("wave_size must be at least 1".into()));
        }
        if !(self.level_time_limit_secs > 0.0) {
            return Err(GameError::InvalidConfig(
                "level_time_limit_secs must be positive".into(),
            ));
        }
        if !(self.completion_guard_secs >= 0.0) {
            return Err(GameError::InvalidConfig(
                "completion_guard_secs must not be negative".into(),
            ));
        }
        if !(self.transition_secs > 0.0) {
            return Err(GameError::InvalidConfig("transition_secs must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.opportunistic_chance) {
            return Err(GameError::InvalidConfig(format!(
                "opportunistic_chance must be a probability, got {}",
                self.opportunistic_chance
            )));
        }
        if !(self.offscreen_margin >= 0.0 && self.pursuer_radius >= 0.0) {
            return Err(GameError::InvalidConfig(
                "offscreen_margin and pursuer_radius must not be negative".into(),
            ));
        }
        if !(self.max_frame_delta > 0.0) {
            return Err(GameError::InvalidConfig("max_frame_delta must be positive".into()));
        }
        Ok(())
    }
}
