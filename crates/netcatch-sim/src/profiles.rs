//! Per-level butterfly parameters.
//!
//! Size and catch radius shrink with level down to a floor; speed only grows.

use netcatch_core::constants::*;
use netcatch_core::types::Level;

/// Butterfly dimensions and speed for one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProfile {
    pub level: Level,
    pub width: f64,
    pub height: f64,
    pub catch_radius: f64,
    /// Base speed before per-spawn variance (pixels/second).
    pub base_speed: f64,
}

impl LevelProfile {
    pub fn for_level(level: Level) -> Self {
        let step = (level.get() - 1) as f64;
        let size = (BUTTERFLY_BASE_SIZE - BUTTERFLY_SIZE_STEP * step).max(BUTTERFLY_MIN_SIZE);
        Self {
            level,
            width: size,
            height: size * 0.8,
            catch_radius: (BUTTERFLY_BASE_CATCH_RADIUS - BUTTERFLY_CATCH_RADIUS_STEP * step)
                .max(BUTTERFLY_MIN_CATCH_RADIUS),
            base_speed: BUTTERFLY_BASE_SPEED + BUTTERFLY_SPEED_STEP * step,
        }
    }

    /// Baseline wave acceleration: 10 % per level above the first.
    pub fn speed_scale(&self) -> f64 {
        1.0 + LEVEL_SPEED_STEP * (self.level.get() - 1) as f64
    }

    /// Larger of width and height; used for spawn offsets.
    pub fn size(&self) -> f64 {
        self.width.max(self.height)
    }
}
