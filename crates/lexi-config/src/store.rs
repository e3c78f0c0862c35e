use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_name: "store.json".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        let data_dir = env::var("LEXI_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Self {
            data_dir,
            file_name: "store.json".to_string(),
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lexi")
}
