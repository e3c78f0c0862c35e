use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Startup or reinstall of the daemon
    Installed,
    /// A named alarm fired
    Alarm { name: String },
}

/// One word ever presented, keyed by `word`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeenEntry {
    pub word: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_seen: DateTime<Utc>,
}

impl SeenEntry {
    pub fn new(word: impl Into<String>, last_seen: DateTime<Utc>) -> Self {
        Self {
            word: word.into(),
            last_seen,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionPayload {
    pub word: String,
    pub phonetic: String,
    pub definition: String,
}

/// Outcome of word selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordChoice {
    pub word: String,
    pub is_revision: bool,
}

impl WordChoice {
    pub fn new_word(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            is_revision: false,
        }
    }

    pub fn revision(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            is_revision: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaState {
    pub daily_goal: u32,
    pub words_shown_today: u32,
    pub last_shown_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    /// Maps the 0..=2 notification priority scale
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Priority::Low,
            1 => Priority::Normal,
            _ => Priority::High,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Normal => 1,
            Priority::High => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub icon: String,
    pub priority: Priority,
}
