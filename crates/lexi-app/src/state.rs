use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use lexi_config::Config;
use lexi_config::dictionary::DictionaryConfig;
use lexi_core::{Catalog, JsonFileStore, SystemClock, WordScheduler};
use lexi_dictionary::DefinitionFetcher;
use lexi_lang_english::{FreeDictionaryClient, english_catalog};
use tokio::sync::RwLock;

use crate::notifier;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub scheduler: Arc<WordScheduler>,
}

impl AppState {
    pub async fn init(config: Config) -> anyhow::Result<Self> {
        let store_path = config.store.store_path();
        let store = JsonFileStore::open(&store_path)
            .await
            .with_context(|| format!("Failed to open store at {}", store_path.display()))?;
        tracing::info!("Using store {}", store_path.display());

        let catalog = load_catalog(&config.dictionary);
        let fetcher = build_fetcher(&config.dictionary)?;
        let notifier = notifier::build_notifier(&config.notification);

        let scheduler = WordScheduler::new(
            &config,
            Arc::new(catalog),
            Arc::new(store),
            Arc::new(SystemClock),
            fetcher,
            notifier,
        );

        Ok(Self::from_parts(config, scheduler))
    }

    pub fn from_parts(config: Config, scheduler: WordScheduler) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            scheduler: Arc::new(scheduler),
        }
    }
}

fn load_catalog(config: &DictionaryConfig) -> Catalog {
    let mut catalog = english_catalog();

    for path in &config.additional_catalogs {
        if let Err(e) = catalog.extend_from_file(path) {
            tracing::warn!("Skipping catalog {}: {}", path.display(), e);
        }
    }

    tracing::info!("Catalog holds {} words", catalog.len());
    catalog
}

fn build_fetcher(config: &DictionaryConfig) -> anyhow::Result<Arc<dyn DefinitionFetcher>> {
    let client = match config.timeout_seconds {
        Some(secs) => {
            FreeDictionaryClient::with_timeout(config.api_url.clone(), Duration::from_secs(secs))
                .context("Failed to build dictionary client")?
        }
        None => FreeDictionaryClient::new(config.api_url.clone()),
    };

    let metadata = client.metadata();
    tracing::info!("Definitions from {} ({})", metadata.name, metadata.language);
    Ok(Arc::new(client))
}
