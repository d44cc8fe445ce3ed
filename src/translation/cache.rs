//! Content-addressed translation cache.
//!
//! Maps the fingerprint of `(text, target language, style, context)` to a
//! translated string. The whole store is loaded into memory at startup and
//! flushed to disk after every write. Flushes are serialized; reads go
//! against the in-memory map.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError, RwLock},
};

use tracing::{debug, warn};

use super::error::CacheError;

/// Fingerprint a translation request.
///
/// Each field is length-prefixed before hashing so that moving characters
/// between fields always changes the result.
pub fn fingerprint(text: &str, target_language: &str, style: &str, context: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    for field in [text, target_language, style, context] {
        hasher.update(&(field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: RwLock<BTreeMap<String, String>>,
    /// Backing file; `None` keeps the cache in memory only.
    path: Option<PathBuf>,
    /// Held while writing the backing file.
    flush_lock: Mutex<()>,
}

impl TranslationCache {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the cache stored at `path`.
    ///
    /// A missing file gives an empty cache. An unreadable or corrupt file
    /// also gives an empty cache, with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_store(&path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to load translation cache, starting empty");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), entries = entries.len(), "Loaded translation cache");
        Self {
            entries: RwLock::new(entries),
            path: Some(path),
            flush_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, fingerprint: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(fingerprint)
            .cloned()
    }

    /// Store a translation and flush the store.
    ///
    /// Flush failures are logged; the in-memory value is kept either way.
    pub fn put(&self, fingerprint: &str, translated: &str) {
        let _guard = self.flush_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let snapshot = {
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            entries.insert(fingerprint.to_string(), translated.to_string());
            self.path.as_ref().map(|_| entries.clone())
        };

        if let (Some(path), Some(snapshot)) = (&self.path, snapshot)
            && let Err(err) = write_store(path, &snapshot)
        {
            warn!(path = %path.display(), error = %err, "Failed to save translation cache");
        }
    }

    /// Flush the current contents to the backing file, if any.
    pub fn flush(&self) -> Result<(), CacheError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let _guard = self.flush_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let snapshot = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        write_store(path, &snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn read_store(path: &Path) -> Result<BTreeMap<String, String>, CacheError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_store(path: &Path, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
    let content = serde_json::to_string_pretty(entries)?;
    fs::write(path, content)?;
    Ok(())
}
