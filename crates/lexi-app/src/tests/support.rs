use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use lexi_config::Config;
use lexi_core::{Catalog, FixedClock, MemoryStore, Notifier, WordScheduler};
use lexi_dictionary::{DefinitionFetcher, LookupError, ProviderMetadata};
use lexi_types::{DefinitionPayload, Notification};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::state::AppState;

pub struct EchoFetcher;

#[async_trait::async_trait]
impl DefinitionFetcher for EchoFetcher {
    async fn lookup(&self, word: &str) -> Result<DefinitionPayload, LookupError> {
        Ok(DefinitionPayload {
            word: word.to_string(),
            phonetic: String::new(),
            definition: format!("Meaning of {word}."),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "echo".to_string(),
            language: "en".to_string(),
            requires_api_key: false,
        }
    }
}

#[derive(Default)]
pub struct CountingNotifier {
    pub titles: Mutex<Vec<String>>,
}

impl Notifier for CountingNotifier {
    fn notify(&self, notification: Notification) {
        self.titles.lock().unwrap().push(notification.title);
    }
}

pub fn app_state(store: Arc<MemoryStore>, notifier: Arc<CountingNotifier>) -> Arc<AppState> {
    let config = Config::default();
    let scheduler = WordScheduler::new(
        &config,
        Arc::new(Catalog::new(["apple", "banana", "cherry"])),
        store,
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap(),
        )),
        Arc::new(EchoFetcher),
        notifier,
    )
    .with_rng(StdRng::seed_from_u64(7));

    Arc::new(AppState::from_parts(config, scheduler))
}
