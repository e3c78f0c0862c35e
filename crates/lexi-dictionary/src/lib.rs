use lexi_types::DefinitionPayload;

/// Definition lookup provider interface
#[async_trait::async_trait]
pub trait DefinitionFetcher: Send + Sync {
    /// Look up a word, surfacing every failure as an error
    async fn lookup(&self, word: &str) -> Result<DefinitionPayload, LookupError>;

    /// Fetch a word's definition. Never fails: any lookup error is logged
    /// and collapsed to `None`.
    async fn fetch_definition(&self, word: &str) -> Option<DefinitionPayload> {
        match self.lookup(word).await {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!("Error fetching definition for \"{}\": {}", word, e);
                None
            }
        }
    }

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub language: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),
}
