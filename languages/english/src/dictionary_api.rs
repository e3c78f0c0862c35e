use std::time::Duration;

use async_trait::async_trait;
use lexi_dictionary::{DefinitionFetcher, LookupError, ProviderMetadata};
use lexi_types::DefinitionPayload;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

const NO_DEFINITION: &str = "No definition found.";

/// Client for dictionaryapi.dev
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl FreeDictionaryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn with_timeout(base_url: String, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| LookupError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }
}

#[async_trait]
impl DefinitionFetcher for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<DefinitionPayload, LookupError> {
        let url = self.entry_url(word)?;
        tracing::debug!("Looking up {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(word.to_string()));
        }

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let entries: Vec<ApiEntry> = response
            .json()
            .await
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

        payload_from_entries(entries)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            language: "en".to_string(),
            requires_api_key: false,
        }
    }
}

// Response shape of /api/v2/entries/en/<word>
#[derive(Debug, Deserialize)]
struct ApiEntry {
    word: String,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMeaning {
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
}

/// Only the first entry is used
fn payload_from_entries(entries: Vec<ApiEntry>) -> Result<DefinitionPayload, LookupError> {
    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::MalformedResponse("empty entry list".to_string()))?;

    let phonetic = entry
        .phonetics
        .into_iter()
        .filter_map(|p| p.text)
        .find(|text| !text.is_empty())
        .unwrap_or_default();

    let definition = entry
        .meanings
        .into_iter()
        .next()
        .and_then(|m| m.definitions.into_iter().next())
        .map(|d| d.definition)
        .unwrap_or_else(|| NO_DEFINITION.to_string());

    Ok(DefinitionPayload {
        word: entry.word,
        phonetic,
        definition,
    })
}
