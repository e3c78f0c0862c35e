use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en/".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// None leaves the HTTP client's own default in place
    pub timeout_seconds: Option<u64>,
    /// Extra word lists appended to the built-in catalog
    pub additional_catalogs: Vec<PathBuf>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: None,
            additional_catalogs: Vec::new(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let api_url = env::var("LEXI_DICTIONARY_URL").unwrap_or_else(|_| default_api_url());

        let timeout_seconds = env::var("LEXI_DICTIONARY_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok());

        let additional_catalogs = env::var("LEXI_CATALOG_PATHS")
            .map(|v| {
                v.split(';')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            api_url,
            timeout_seconds,
            additional_catalogs,
        }
    }
}
