//! Motion settings shared by every effect on the page

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

/// Interval between typed characters
pub const DEFAULT_TYPING_INTERVAL_MS: u64 = 60;
/// Interval between role changes
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 2500;
/// Particles in the hero field
pub const DEFAULT_PARTICLE_COUNT: usize = 20;
/// Marquee loop length per item
pub const DEFAULT_MARQUEE_SECS_PER_ITEM: f32 = 2.5;

const MAX_PARTICLES: usize = 500;

/// Timing and decoration knobs, set once at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSettings {
    pub typing_interval_ms: u64,
    pub rotation_interval_ms: u64,
    pub particle_count: usize,
    /// Fixed seed for the particle field; random when unset
    pub particle_seed: Option<u64>,
    pub marquee_secs_per_item: f32,
    /// Show every effect in its final state without timers
    pub reduced_motion: bool,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            rotation_interval_ms: DEFAULT_ROTATION_INTERVAL_MS,
            particle_count: DEFAULT_PARTICLE_COUNT,
            particle_seed: None,
            marquee_secs_per_item: DEFAULT_MARQUEE_SECS_PER_ITEM,
            reduced_motion: false,
        }
    }
}

impl MotionSettings {
    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.particle_seed = Some(seed);
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.typing_interval_ms == 0 {
            return Err(PortfolioError::InvalidSetting {
                name: "typing_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.rotation_interval_ms == 0 {
            return Err(PortfolioError::InvalidSetting {
                name: "rotation_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.particle_count > MAX_PARTICLES {
            return Err(PortfolioError::InvalidSetting {
                name: "particle_count",
                reason: format!("at most {} particles", MAX_PARTICLES),
            });
        }
        if !(self.marquee_secs_per_item.is_finite() && self.marquee_secs_per_item > 0.0) {
            return Err(PortfolioError::InvalidSetting {
                name: "marquee_secs_per_item",
                reason: "must be a positive number".to_string(),
            });
        }
        Ok(())
    }
}
