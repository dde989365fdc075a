//! Data-driven timing and thresholds
//!
//! Defaults come from `consts`; a host may override any subset from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Interval the host should call `Game::tick` at (ms)
    pub poll_interval_ms: u32,
    /// Freeze time before a blocked level reloads (ms)
    pub blocked_cooldown_ms: u32,
    /// Delay before the next level loads after a solve (ms)
    pub transition_delay_ms: u32,
    /// Progress above which the level is solved
    pub completion_threshold: f64,
    pub levels_per_group: u32,
    pub level_groups: u32,
    /// On-boundary tolerance
    pub epsilon: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL_MS,
            blocked_cooldown_ms: BLOCKED_COOLDOWN_MS,
            transition_delay_ms: TRANSITION_DELAY_MS,
            completion_threshold: COMPLETION_THRESHOLD,
            levels_per_group: LEVELS_PER_GROUP,
            level_groups: LEVEL_GROUPS,
            epsilon: EPSILON,
        }
    }
}

impl Tuning {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
