use std::sync::Arc;

use chrono::{DateTime, Utc};
use lexi_types::SeenEntry;

use crate::error::StoreError;
use crate::store::{self, KeyValueStore, keys};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerUpdate {
    /// Existing entry had its `last_seen` refreshed
    Refreshed,
    /// First sighting, appended at the end
    Appended,
}

/// Persisted record of every word ever presented
#[derive(Clone)]
pub struct SeenLedger {
    store: Arc<dyn KeyValueStore>,
}

impl SeenLedger {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current entries in first-seen order; absent key reads as empty
    pub async fn snapshot(&self) -> Result<Vec<SeenEntry>, StoreError> {
        Ok(store::get_as(&*self.store, keys::SEEN_WORDS)
            .await?
            .unwrap_or_default())
    }

    pub async fn exists(&self) -> Result<bool, StoreError> {
        Ok(self.store.get(keys::SEEN_WORDS).await?.is_some())
    }

    /// Refresh or append `word`, then write the whole sequence back
    pub async fn record(&self, word: &str, now: DateTime<Utc>) -> Result<LedgerUpdate, StoreError> {
        let mut entries = self.snapshot().await?;
        let update = apply(&mut entries, word, now);
        store::set_as(&*self.store, keys::SEEN_WORDS, &entries).await?;
        Ok(update)
    }
}

/// At most one entry per word: refresh in place or append
pub fn apply(entries: &mut Vec<SeenEntry>, word: &str, now: DateTime<Utc>) -> LedgerUpdate {
    match entries.iter_mut().find(|entry| entry.word == word) {
        Some(entry) => {
            entry.last_seen = now;
            LedgerUpdate::Refreshed
        }
        None => {
            entries.push(SeenEntry::new(word, now));
            LedgerUpdate::Appended
        }
    }
}
