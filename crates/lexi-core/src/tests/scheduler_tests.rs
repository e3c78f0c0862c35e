use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use lexi_config::Config;
use lexi_dictionary::{DefinitionFetcher, LookupError, ProviderMetadata};
use lexi_types::{DefinitionPayload, Notification, SeenEntry, WordChoice};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::store::{self, keys};
use crate::{
    Catalog, FixedClock, KeyValueStore, LedgerUpdate, MemoryStore, Notifier, TickOutcome,
    WordScheduler,
};

/// Dictionary that knows a fixed set of words
#[derive(Default)]
struct FakeFetcher {
    known: HashMap<String, DefinitionPayload>,
    calls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    fn knowing(words: &[&str]) -> Self {
        let known = words
            .iter()
            .map(|w| {
                (
                    w.to_string(),
                    DefinitionPayload {
                        word: w.to_string(),
                        phonetic: format!("/{w}/"),
                        definition: format!("Definition of {w}."),
                    },
                )
            })
            .collect();
        Self {
            known,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl DefinitionFetcher for FakeFetcher {
    async fn lookup(&self, word: &str) -> Result<DefinitionPayload, LookupError> {
        self.calls.lock().unwrap().push(word.to_string());
        self.known
            .get(word)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(word.to_string()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            language: "en".to_string(),
            requires_api_key: false,
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}

struct Harness {
    scheduler: WordScheduler,
    store: Arc<MemoryStore>,
    clock: Arc<FixedClock>,
    fetcher: Arc<FakeFetcher>,
    notifier: Arc<RecordingNotifier>,
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
}

fn harness(catalog: &[&str], known: &[&str], revision_chance: f64) -> Harness {
    let mut config = Config::default();
    config.scheduler.revision_chance = revision_chance;

    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::new(start()));
    let fetcher = Arc::new(FakeFetcher::knowing(known));
    let notifier = Arc::new(RecordingNotifier::default());

    let scheduler = WordScheduler::new(
        &config,
        Arc::new(Catalog::new(catalog.iter().copied())),
        store.clone(),
        clock.clone(),
        fetcher.clone(),
        notifier.clone(),
    )
    .with_rng(StdRng::seed_from_u64(42));

    Harness {
        scheduler,
        store,
        clock,
        fetcher,
        notifier,
    }
}

async fn seen_words(store: &MemoryStore) -> Vec<SeenEntry> {
    store::get_as(store, keys::SEEN_WORDS)
        .await
        .unwrap()
        .unwrap_or_default()
}

#[tokio::test]
async fn test_on_installed_seeds_once() {
    let h = harness(&["apple"], &["apple"], 0.25);

    assert!(h.scheduler.on_installed().await.unwrap());
    assert_eq!(h.store.get(keys::DAILY_GOAL).await.unwrap(), Some(json!(5)));
    assert_eq!(h.store.get(keys::SEEN_WORDS).await.unwrap(), Some(json!([])));
    assert_eq!(
        h.store.get(keys::LAST_SHOWN_DATE).await.unwrap(),
        Some(json!("2026-10-19"))
    );

    h.store.set(keys::DAILY_GOAL, json!(9)).await.unwrap();
    assert!(!h.scheduler.on_installed().await.unwrap());
    assert_eq!(h.store.get(keys::DAILY_GOAL).await.unwrap(), Some(json!(9)));
}

#[tokio::test]
async fn test_alarm_presents_new_word_and_counts_it() {
    let h = harness(&["apple", "banana"], &["apple", "banana"], 0.25);

    let outcome = h.scheduler.handle_alarm().await.unwrap();
    let TickOutcome::Presented(choice) = outcome else {
        panic!("expected a presentation, got {outcome:?}");
    };
    assert!(!choice.is_revision);

    let sent = h.notifier.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, format!("✨ New Word: {}", choice.word));

    let ledger = seen_words(&h.store).await;
    assert_eq!(ledger, vec![SeenEntry::new(choice.word.clone(), start())]);

    let current = h.scheduler.current_word().await.unwrap().unwrap();
    assert_eq!(current.word, choice.word);

    let quota = h.scheduler.quota().load_state().await.unwrap();
    assert_eq!(quota.words_shown_today, 1);
    assert_eq!(quota.last_shown_date, NaiveDate::from_ymd_opt(2026, 10, 19));
}

#[tokio::test]
async fn test_fetch_failure_leaves_ledger_and_quota_alone() {
    let h = harness(&["apple"], &[], 0.25);

    let outcome = h.scheduler.handle_alarm().await.unwrap();
    assert_eq!(outcome, TickOutcome::FetchFailed(WordChoice::new_word("apple")));

    assert!(seen_words(&h.store).await.is_empty());
    assert!(h.notifier.sent.lock().unwrap().is_empty());
    assert_eq!(h.scheduler.current_word().await.unwrap(), None);
    assert_eq!(
        h.scheduler
            .quota()
            .load_state()
            .await
            .unwrap()
            .words_shown_today,
        0
    );
}

#[tokio::test]
async fn test_exhausted_catalog_is_silent() {
    let h = harness(&["apple"], &["apple"], 0.25);
    store::set_as(&*h.store, keys::SEEN_WORDS, &vec![SeenEntry::new("apple", start())])
        .await
        .unwrap();

    assert_eq!(
        h.scheduler.handle_alarm().await.unwrap(),
        TickOutcome::CatalogExhausted
    );
    assert!(h.fetcher.calls.lock().unwrap().is_empty());
    assert!(h.notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_goal_reached_skips_everything() {
    let h = harness(&["apple"], &["apple"], 0.25);
    h.store
        .set_many(vec![
            (keys::DAILY_GOAL.to_string(), json!(5)),
            (keys::WORDS_SHOWN_TODAY.to_string(), json!(5)),
            (keys::LAST_SHOWN_DATE.to_string(), json!("2026-10-19")),
        ])
        .await
        .unwrap();

    assert_eq!(
        h.scheduler.handle_alarm().await.unwrap(),
        TickOutcome::QuotaReached
    );
    assert!(h.fetcher.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_new_day_resets_then_counts_one() {
    let h = harness(&["apple", "banana"], &["apple", "banana"], 0.25);
    h.store
        .set_many(vec![
            (keys::WORDS_SHOWN_TODAY.to_string(), json!(5)),
            (keys::LAST_SHOWN_DATE.to_string(), json!("2026-10-18")),
        ])
        .await
        .unwrap();

    assert!(matches!(
        h.scheduler.handle_alarm().await.unwrap(),
        TickOutcome::Presented(_)
    ));

    let quota = h.scheduler.quota().load_state().await.unwrap();
    assert_eq!(quota.words_shown_today, 1);
    assert_eq!(quota.last_shown_date, NaiveDate::from_ymd_opt(2026, 10, 19));
}

#[tokio::test]
async fn test_forced_revision_refreshes_last_seen() {
    let h = harness(&["apple"], &["apple"], 1.0);
    let seen_at = start() - TimeDelta::days(3);
    store::set_as(&*h.store, keys::SEEN_WORDS, &vec![SeenEntry::new("apple", seen_at)])
        .await
        .unwrap();

    assert_eq!(
        h.scheduler.handle_alarm().await.unwrap(),
        TickOutcome::Presented(WordChoice::revision("apple"))
    );

    let sent = h.notifier.sent.lock().unwrap().clone();
    assert_eq!(sent[0].title, "🔄 Revision: apple");
    assert_eq!(seen_words(&h.store).await, vec![SeenEntry::new("apple", start())]);
}

#[tokio::test]
async fn test_present_refresh_vs_append() {
    let h = harness(&["apple", "banana"], &[], 0.25);
    let payload = DefinitionPayload {
        word: "apple".to_string(),
        phonetic: String::new(),
        definition: "A fruit.".to_string(),
    };

    let first = h
        .scheduler
        .present(&WordChoice::new_word("apple"), &payload)
        .await
        .unwrap();
    h.clock.advance(TimeDelta::days(2));
    let second = h
        .scheduler
        .present(&WordChoice::revision("apple"), &payload)
        .await
        .unwrap();

    assert_eq!(first, LedgerUpdate::Appended);
    assert_eq!(second, LedgerUpdate::Refreshed);
    assert_eq!(
        seen_words(&h.store).await,
        vec![SeenEntry::new("apple", start() + TimeDelta::days(2))]
    );
}

#[tokio::test]
async fn test_daily_goal_caps_a_run_of_ticks() {
    let words = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let h = harness(&words, &words, 0.25);
    h.scheduler.quota().set_daily_goal(3).await.unwrap();

    let mut presented = 0;
    for _ in 0..6 {
        if let TickOutcome::Presented(_) = h.scheduler.handle_alarm().await.unwrap() {
            presented += 1;
        }
        h.clock.advance(TimeDelta::minutes(30));
    }

    assert_eq!(presented, 3);
    assert_eq!(seen_words(&h.store).await.len(), 3);
}

#[tokio::test]
async fn test_status_counts() {
    let h = harness(&["apple", "banana", "cherry"], &[], 0.25);
    store::set_as(
        &*h.store,
        keys::SEEN_WORDS,
        &vec![
            SeenEntry::new("apple", start() - TimeDelta::days(4)),
            SeenEntry::new("banana", start()),
        ],
    )
    .await
    .unwrap();

    let status = h.scheduler.status().await.unwrap();
    assert_eq!(status.catalog_size, 3);
    assert_eq!(status.seen, 2);
    assert_eq!(status.due_for_revision, 1);
    assert_eq!(status.remaining, 1);
    assert_eq!(status.quota.daily_goal, 5);
}
