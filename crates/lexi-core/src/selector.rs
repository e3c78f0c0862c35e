//! Word selection for the next presentation.
//!
//! A word is either new (absent from the ledger) or a revision (in the
//! ledger and stale). The two pools are disjoint since both are derived
//! from the same ledger snapshot.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use lexi_config::scheduler::{SchedulerConfig, revision_probability};
use lexi_types::{SeenEntry, WordChoice};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy)]
pub struct SelectionPolicy {
    /// Age after which a seen word is due for revision
    pub staleness: TimeDelta,
    /// Chance of taking the revision path, in `0.0..=1.0`
    pub revision_chance: f64,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::from(&SchedulerConfig::default())
    }
}

impl From<&SchedulerConfig> for SelectionPolicy {
    fn from(config: &SchedulerConfig) -> Self {
        Self {
            staleness: TimeDelta::days(i64::from(config.revision_interval_days)),
            revision_chance: revision_probability(config.revision_chance),
        }
    }
}

/// Entries whose `last_seen` is at least `staleness` before `now`
pub fn due_for_revision(
    ledger: &[SeenEntry],
    now: DateTime<Utc>,
    staleness: TimeDelta,
) -> Vec<&SeenEntry> {
    let threshold = now - staleness;
    ledger
        .iter()
        .filter(|entry| entry.last_seen <= threshold)
        .collect()
}

/// Catalog words with no ledger entry, in catalog order
pub fn available_words<'a>(catalog: &'a Catalog, ledger: &[SeenEntry]) -> Vec<&'a str> {
    let seen: HashSet<&str> = ledger.iter().map(|entry| entry.word.as_str()).collect();
    catalog
        .words()
        .iter()
        .map(String::as_str)
        .filter(|word| !seen.contains(word))
        .collect()
}

#[derive(Debug, Clone)]
pub struct WordSelector {
    catalog: Arc<Catalog>,
    policy: SelectionPolicy,
}

impl WordSelector {
    pub fn new(catalog: Arc<Catalog>, policy: SelectionPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Pick the next word from a ledger snapshot. `None` means the catalog
    /// is exhausted and nothing is due for revision on this draw.
    pub fn select_word<R: Rng>(
        &self,
        ledger: &[SeenEntry],
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Option<WordChoice> {
        let mut due = due_for_revision(ledger, now, self.policy.staleness);
        due.retain(|entry| self.catalog.contains(&entry.word));

        if !due.is_empty()
            && rng.gen_bool(revision_probability(self.policy.revision_chance))
            && let Some(entry) = due.choose(rng)
        {
            return Some(WordChoice::revision(entry.word.as_str()));
        }

        tracing::info!("No revision shown, attempting to show a new word.");

        available_words(&self.catalog, ledger)
            .choose(rng)
            .map(|word| WordChoice::new_word(*word))
    }
}
