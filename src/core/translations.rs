//! Per-key, per-language translation values.
//!
//! The store only ever grows: values are added by translation runs or hand
//! edits and are never pruned automatically. It is persisted separately from
//! the translation cache.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::data::TranslationStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationStore {
    entries: IndexMap<String, IndexMap<String, String>>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from disk. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse translations: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize translations")?;
        fs::write(path, format!("{}\n", content))
            .with_context(|| format!("Failed to write translations: {}", path.display()))
    }

    /// Record a translation (or a hand edit), replacing any previous value.
    pub fn set(&mut self, key: &str, language: &str, text: impl Into<String>) {
        self.entries
            .entry(key.to_string())
            .or_default()
            .insert(language.to_string(), text.into());
    }

    pub fn get(&self, key: &str, language: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|langs| langs.get(language))
            .map(String::as_str)
    }

    pub fn status(&self, key: &str, language: &str) -> TranslationStatus {
        TranslationStatus::of(self.get(key, language))
    }

    /// Keys with at least one recorded language, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Blank out every value for `language` so those entries read as pending.
    pub fn clear_language(&mut self, language: &str) {
        for langs in self.entries.values_mut() {
            if let Some(value) = langs.get_mut(language) {
                value.clear();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys with a non-empty value for `language`.
    pub fn translated_count(&self, language: &str) -> usize {
        self.entries
            .keys()
            .filter(|key| self.status(key, language) == TranslationStatus::Translated)
            .count()
    }
}
