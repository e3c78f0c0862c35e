use serde::{Deserialize, Serialize};

use crate::env_or;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaConfig {
    /// Used when the store has no `dailyGoal` yet
    pub default_daily_goal: u32,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            default_daily_goal: 5,
        }
    }
}

impl QuotaConfig {
    pub fn new() -> Self {
        Self {
            default_daily_goal: env_or("LEXI_DEFAULT_DAILY_GOAL", 5),
        }
    }
}
