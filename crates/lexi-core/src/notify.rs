use lexi_config::notification::NotificationConfig;
use lexi_types::{DefinitionPayload, Notification, Priority};

/// Presentation surface. Fire-and-forget: nothing is awaited or acknowledged.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub icon: String,
    pub priority: Priority,
}

impl Default for NotificationStyle {
    fn default() -> Self {
        Self::from(&NotificationConfig::default())
    }
}

impl From<&NotificationConfig> for NotificationStyle {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            icon: config.icon.clone(),
            priority: Priority::from_level(config.priority),
        }
    }
}

impl NotificationStyle {
    pub fn build(&self, payload: &DefinitionPayload, is_revision: bool) -> Notification {
        let prefix = if is_revision {
            "🔄 Revision: "
        } else {
            "✨ New Word: "
        };

        Notification {
            title: format!("{prefix}{}", payload.word),
            message: payload.definition.clone(),
            icon: self.icon.clone(),
            priority: self.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        let style = NotificationStyle::default();
        let payload = DefinitionPayload {
            word: "apple".to_string(),
            phonetic: String::new(),
            definition: "A fruit.".to_string(),
        };

        let new_word = style.build(&payload, false);
        assert_eq!(new_word.title, "✨ New Word: apple");
        assert_eq!(new_word.message, "A fruit.");
        assert_eq!(new_word.priority, Priority::High);

        assert_eq!(style.build(&payload, true).title, "🔄 Revision: apple");
    }
}
