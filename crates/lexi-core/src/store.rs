//! Process-wide key-value persistence.
//!
//! Every read and write is independent: there is no transaction spanning a
//! read-modify-write, so overlapping writers resolve as last write wins.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use crate::error::StoreError;

pub mod keys {
    pub const SEEN_WORDS: &str = "seenWords";
    pub const CURRENT_WORD: &str = "currentWord";
    pub const DAILY_GOAL: &str = "dailyGoal";
    pub const WORDS_SHOWN_TODAY: &str = "wordsShownToday";
    pub const LAST_SHOWN_DATE: &str = "lastShownDate";
}

#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Write several keys in one call
    async fn set_many(&self, entries: Vec<(String, Value)>) -> Result<(), StoreError>;

    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.set_many(vec![(key.to_string(), value)]).await
    }
}

/// Read `key` and decode it as `T`
pub async fn get_as<T>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
{
    match store.get(key).await? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StoreError::CorruptValue {
                key: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

pub async fn set_as<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    store.set(key, serde_json::to_value(value)?).await
}

/// Volatile store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set_many(&self, entries: Vec<(String, Value)>) -> Result<(), StoreError> {
        let mut values = self.values.write().await;
        values.extend(entries);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// Reads go to the file every time so writes made by another process (the
/// options command, say) are picked up. Writes hold an exclusive lock on a
/// sibling `.lock` file across load, modify and replace, so concurrent
/// writers to different keys never undo each other. The file itself is
/// replaced through a uniquely named temp file and a rename.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store, validating an existing file
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };

        if !tokio::fs::try_exists(&store.path).await? {
            tracing::info!("No store at {}, starting empty", store.path.display());
        }
        store.load().await?;
        Ok(store)
    }

    async fn load(&self) -> Result<Map<String, Value>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => parse_object(&self.path, &text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Run `update` on the stored object under the cross-process write lock.
    /// The file is rewritten only when `update` returns true.
    async fn update<F>(&self, update: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Map<String, Value>) -> bool + Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || locked_update(&path, update))
            .await
            .map_err(std::io::Error::other)?
    }
}

fn parse_object(path: &Path, text: &str) -> Result<Map<String, Value>, StoreError> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject(path.to_path_buf())),
    }
}

fn locked_update<F>(path: &Path, update: F) -> Result<(), StoreError>
where
    F: FnOnce(&mut Map<String, Value>) -> bool,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let lock = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path.with_extension("json.lock"))?;
    // released when `lock` is dropped
    lock.lock()?;

    let mut values = match fs::read_to_string(path) {
        Ok(text) => parse_object(path, &text)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
        Err(e) => return Err(e.into()),
    };

    if update(&mut values) {
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &values)?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;
    }

    Ok(())
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.load().await?.remove(key))
    }

    async fn set_many(&self, entries: Vec<(String, Value)>) -> Result<(), StoreError> {
        self.update(move |values| {
            values.extend(entries);
            true
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let key = key.to_string();
        self.update(move |values| values.remove(&key).is_some())
            .await
    }
}
