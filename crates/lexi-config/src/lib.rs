use std::env;

use serde::{Deserialize, Serialize};

use self::alarm::AlarmConfig;
use self::dictionary::DictionaryConfig;
use self::notification::NotificationConfig;
use self::quota::QuotaConfig;
use self::scheduler::SchedulerConfig;
use self::store::StoreConfig;

pub mod alarm;
pub mod dictionary;
pub mod notification;
pub mod quota;
pub mod scheduler;
pub mod store;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub alarm: AlarmConfig,
    pub dictionary: DictionaryConfig,
    pub notification: NotificationConfig,
    pub quota: QuotaConfig,
    pub scheduler: SchedulerConfig,
    pub store: StoreConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            alarm: AlarmConfig::new(),
            dictionary: DictionaryConfig::new(),
            notification: NotificationConfig::new(),
            quota: QuotaConfig::new(),
            scheduler: SchedulerConfig::new(),
            store: StoreConfig::new(),
        }
    }
}

/// Parse an env var, falling back to `default` when unset or malformed
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        // SAFETY: no other test touches this key
        unsafe { env::set_var("LEXI_TEST_ENV_OR", "not-a-number") };
        assert_eq!(env_or("LEXI_TEST_ENV_OR", 7u32), 7);

        unsafe { env::set_var("LEXI_TEST_ENV_OR", " 12 ") };
        assert_eq!(env_or("LEXI_TEST_ENV_OR", 7u32), 12);

        unsafe { env::remove_var("LEXI_TEST_ENV_OR") };
        assert_eq!(env_or("LEXI_TEST_ENV_OR", 7u32), 7);
    }

    #[test]
    fn test_defaults_match_extension() {
        let config = Config::default();
        assert_eq!(config.alarm.name, "wordAlarm");
        assert_eq!(config.alarm.delay_minutes, 1);
        assert_eq!(config.alarm.period_minutes, 30);
        assert_eq!(config.quota.default_daily_goal, 5);
        assert_eq!(config.scheduler.revision_interval_days, 2);
        assert!((config.scheduler.revision_chance - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.notification.priority, 2);
    }
}
