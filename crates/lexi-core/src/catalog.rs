use std::collections::HashSet;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::CatalogError;

/// Ordered, de-duplicated list of candidate words
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Catalog {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        catalog.extend(words);
        catalog
    }

    /// Append words not already present, keeping first-seen order
    pub fn extend<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.words.len();

        for word in words {
            let word = word.into();
            if word.is_empty() {
                continue;
            }
            if self.index.insert(word.clone()) {
                self.words.push(word);
            }
        }

        self.words.len() - before
    }

    /// Load an additional plain-text word list
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path)?;
        let added = self.extend(parse_word_list(&text));
        tracing::info!("Loaded {} words from {}", added, path.display());
        Ok(added)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }
}

/// One word per line; blank lines and `#` comments are skipped
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.nfc().collect::<String>())
        .collect()
}
