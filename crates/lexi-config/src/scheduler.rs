use serde::{Deserialize, Serialize};

use crate::env_or;

pub const DEFAULT_REVISION_CHANCE: f64 = 0.25;

/// Clamp into `0.0..=1.0`; NaN and infinities fall back to the default
pub fn revision_probability(chance: f64) -> f64 {
    if chance.is_finite() {
        chance.clamp(0.0, 1.0)
    } else {
        DEFAULT_REVISION_CHANCE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Days before a seen word becomes due for revision
    pub revision_interval_days: u32,
    /// Probability of taking the revision path when something is due
    pub revision_chance: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            revision_interval_days: 2,
            revision_chance: DEFAULT_REVISION_CHANCE,
        }
    }
}

impl SchedulerConfig {
    pub fn new() -> Self {
        Self {
            revision_interval_days: env_or("LEXI_REVISION_INTERVAL_DAYS", 2),
            revision_chance: revision_probability(env_or(
                "LEXI_REVISION_CHANCE",
                DEFAULT_REVISION_CHANCE,
            )),
        }
    }
}
