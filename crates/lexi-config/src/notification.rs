use std::env;

use serde::{Deserialize, Serialize};

use crate::env_or;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    /// Write notifications to the log only
    Log,
    /// Spawn an external command such as `notify-send`
    Command,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub kind: NotifierKind,
    pub command: String,
    pub icon: String,
    pub priority: u8,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            kind: NotifierKind::Log,
            command: "notify-send".to_string(),
            icon: "images/dragon_128.png".to_string(),
            priority: 2,
        }
    }
}

impl NotificationConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let kind = match env::var("LEXI_NOTIFIER").as_deref() {
            Ok("command") => NotifierKind::Command,
            _ => NotifierKind::Log,
        };

        Self {
            kind,
            command: env::var("LEXI_NOTIFY_COMMAND").unwrap_or(defaults.command),
            icon: env::var("LEXI_NOTIFY_ICON").unwrap_or(defaults.icon),
            priority: env_or("LEXI_NOTIFY_PRIORITY", defaults.priority),
        }
    }
}
