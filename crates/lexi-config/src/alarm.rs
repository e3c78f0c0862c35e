use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

pub const WORD_ALARM: &str = "wordAlarm";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmConfig {
    /// Name of the recurring word alarm
    pub name: String,
    pub delay_minutes: u64,
    pub period_minutes: u64,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            name: WORD_ALARM.to_string(),
            delay_minutes: 1,
            period_minutes: 30,
        }
    }
}

impl AlarmConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            name: env::var("LEXI_ALARM_NAME").unwrap_or(defaults.name),
            delay_minutes: env_or("LEXI_ALARM_DELAY_MINUTES", defaults.delay_minutes),
            period_minutes: env_or("LEXI_ALARM_PERIOD_MINUTES", defaults.period_minutes).max(1),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_minutes * 60)
    }

    pub fn period(&self) -> Duration {
        Duration::from_secs(self.period_minutes * 60)
    }
}
