//! Alarm tick orchestration: quota gate, selection, lookup, presentation.

use std::sync::{Arc, Mutex};

use lexi_config::Config;
use lexi_dictionary::DefinitionFetcher;
use lexi_types::{DefinitionPayload, QuotaState, WordChoice};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::catalog::Catalog;
use crate::clock::Clock;
use crate::error::StoreError;
use crate::ledger::{LedgerUpdate, SeenLedger};
use crate::notify::{NotificationStyle, Notifier};
use crate::quota::QuotaTracker;
use crate::selector::{self, SelectionPolicy, WordSelector};
use crate::store::{self, KeyValueStore, keys};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Daily goal already met
    QuotaReached,
    /// No revision drawn and no unseen catalog words left
    CatalogExhausted,
    /// Lookup returned nothing; ledger and quota untouched
    FetchFailed(WordChoice),
    Presented(WordChoice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerStatus {
    pub quota: QuotaState,
    pub catalog_size: usize,
    pub seen: usize,
    pub due_for_revision: usize,
    pub remaining: usize,
}

pub struct WordScheduler {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    fetcher: Arc<dyn DefinitionFetcher>,
    notifier: Arc<dyn Notifier>,
    selector: WordSelector,
    quota: QuotaTracker,
    ledger: SeenLedger,
    style: NotificationStyle,
    rng: Mutex<StdRng>,
}

impl WordScheduler {
    pub fn new(
        config: &Config,
        catalog: Arc<Catalog>,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        fetcher: Arc<dyn DefinitionFetcher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let policy = SelectionPolicy::from(&config.scheduler);

        Self {
            selector: WordSelector::new(catalog, policy),
            quota: QuotaTracker::new(
                store.clone(),
                clock.clone(),
                config.quota.default_daily_goal,
            ),
            ledger: SeenLedger::new(store.clone()),
            style: NotificationStyle::from(&config.notification),
            rng: Mutex::new(StdRng::from_entropy()),
            store,
            clock,
            fetcher,
            notifier,
        }
    }

    /// Replace the random source, e.g. with a seeded one
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    pub fn quota(&self) -> &QuotaTracker {
        &self.quota
    }

    pub fn ledger(&self) -> &SeenLedger {
        &self.ledger
    }

    /// Seed first-run defaults. A store that already has a ledger is left alone.
    pub async fn on_installed(&self) -> Result<bool, StoreError> {
        if self.ledger.exists().await? {
            return Ok(false);
        }

        tracing::info!("First run, seeding store defaults");
        self.store
            .set_many(vec![
                (keys::DAILY_GOAL.to_string(), json!(self.quota.default_goal())),
                (keys::WORDS_SHOWN_TODAY.to_string(), json!(0)),
                (keys::LAST_SHOWN_DATE.to_string(), json!(self.clock.today())),
                (keys::SEEN_WORDS.to_string(), json!([])),
            ])
            .await?;
        Ok(true)
    }

    /// One alarm firing
    pub async fn handle_alarm(&self) -> Result<TickOutcome, StoreError> {
        tracing::info!("Alarm triggered!");

        let Some(slot) = self.quota.check_and_reserve_slot().await? else {
            return Ok(TickOutcome::QuotaReached);
        };

        let outcome = self.handle_word_notification().await?;

        if let TickOutcome::Presented(_) = &outcome
            && let Err(e) = self.quota.commit(slot).await
        {
            // Shown but not counted; no compensation
            tracing::warn!("Failed to record daily count: {}", e);
        }

        Ok(outcome)
    }

    pub async fn select_word(&self) -> Result<Option<WordChoice>, StoreError> {
        let snapshot = self.ledger.snapshot().await?;
        let now = self.clock.now();

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.selector.select_word(&snapshot, now, &mut *rng))
    }

    /// Select, look up and present a single word
    pub async fn handle_word_notification(&self) -> Result<TickOutcome, StoreError> {
        tracing::info!("Deciding whether to show a new word or a revision...");

        let Some(choice) = self.select_word().await? else {
            tracing::info!("Congratulations! All words from the list have been learned.");
            return Ok(TickOutcome::CatalogExhausted);
        };

        if choice.is_revision {
            tracing::info!("Revising word: {}", choice.word);
        } else {
            tracing::info!("Showing new word: {}", choice.word);
        }

        let Some(payload) = self.fetcher.fetch_definition(&choice.word).await else {
            return Ok(TickOutcome::FetchFailed(choice));
        };

        self.present(&choice, &payload).await?;
        Ok(TickOutcome::Presented(choice))
    }

    /// Notify, then record. The ledger is keyed by the chosen catalog word.
    pub async fn present(
        &self,
        choice: &WordChoice,
        payload: &DefinitionPayload,
    ) -> Result<LedgerUpdate, StoreError> {
        self.notifier
            .notify(self.style.build(payload, choice.is_revision));

        store::set_as(&*self.store, keys::CURRENT_WORD, payload).await?;

        let update = self.ledger.record(&choice.word, self.clock.now()).await?;

        if choice.is_revision {
            tracing::info!("Successfully revised: {}", choice.word);
        } else {
            tracing::info!("Successfully saved new word: {}", choice.word);
        }
        Ok(update)
    }

    /// Most recently presented definition
    pub async fn current_word(&self) -> Result<Option<DefinitionPayload>, StoreError> {
        store::get_as(&*self.store, keys::CURRENT_WORD).await
    }

    pub async fn status(&self) -> Result<SchedulerStatus, StoreError> {
        let quota = self.quota.load_state().await?;
        let snapshot = self.ledger.snapshot().await?;
        let staleness = self.selector.policy().staleness;
        let catalog = self.selector.catalog();

        Ok(SchedulerStatus {
            quota,
            catalog_size: catalog.len(),
            seen: snapshot.len(),
            due_for_revision: selector::due_for_revision(&snapshot, self.clock.now(), staleness)
                .len(),
            remaining: selector::available_words(catalog, &snapshot).len(),
        })
    }
}
