use std::sync::Arc;

use lexi_config::notification::{NotificationConfig, NotifierKind};
use lexi_core::Notifier;
use lexi_types::{Notification, Priority};

pub fn build_notifier(config: &NotificationConfig) -> Arc<dyn Notifier> {
    match config.kind {
        NotifierKind::Log => Arc::new(LogNotifier),
        NotifierKind::Command => Arc::new(CommandNotifier::new(config.command.clone())),
    }
}

/// Writes notifications to the log
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            priority = notification.priority.level(),
            icon = %notification.icon,
            "{}: {}",
            notification.title,
            notification.message
        );
    }
}

/// Spawns a `notify-send` compatible command and does not wait for it
pub struct CommandNotifier {
    program: String,
}

impl CommandNotifier {
    pub fn new(program: String) -> Self {
        Self { program }
    }

    pub fn args(notification: &Notification) -> Vec<String> {
        let urgency = match notification.priority {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "critical",
        };

        vec![
            format!("--urgency={urgency}"),
            format!("--icon={}", notification.icon),
            notification.title.clone(),
            notification.message.clone(),
        ]
    }
}

impl Notifier for CommandNotifier {
    fn notify(&self, notification: Notification) {
        let spawned = tokio::process::Command::new(&self.program)
            .args(Self::args(&notification))
            .kill_on_drop(false)
            .spawn();

        if let Err(e) = spawned {
            tracing::warn!("Failed to run {}: {}", self.program, e);
        }
    }
}
