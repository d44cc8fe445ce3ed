use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::{
    classify::classify_entry,
    data::ClassifiedRecords,
    structure::{StructureReport, validate_structure},
    translations::TranslationStore,
};

/// Errors raised while loading a localization file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error reading file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The payload is not JSON at all. Kept apart from structural errors.
    #[error("Invalid JSON format: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("File structure is invalid ({} problem(s))", .0.len())]
    Structure(Vec<String>),
}

impl LoadError {
    /// Diagnostics to show the user, one per line.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            LoadError::Structure(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// A loaded and classified localization file.
#[derive(Debug, Clone)]
pub struct LocalizationFile {
    pub path: PathBuf,
    /// Classified entries in file order.
    pub records: ClassifiedRecords,
}

impl LocalizationFile {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read a file as JSON without any structural checks.
pub fn read_json(path: &Path) -> Result<Value, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Validate the structure of a file on disk.
pub fn check_file(path: &Path) -> Result<StructureReport, LoadError> {
    let data = read_json(path)?;
    Ok(validate_structure(&data))
}

/// Load, validate and classify a localization file.
pub fn load(path: &Path) -> Result<LocalizationFile, LoadError> {
    let data = read_json(path)?;
    let report = validate_structure(&data);
    if !report.is_ok() {
        return Err(LoadError::Structure(report.errors));
    }

    let records = match data {
        Value::Object(map) => classify_mapping(&map),
        _ => ClassifiedRecords::new(),
    };
    Ok(LocalizationFile {
        path: path.to_path_buf(),
        records,
    })
}

/// Classify every string entry of a mapping, keeping its order.
///
/// Non-string values are skipped; structure validation reports them.
pub fn classify_mapping(map: &Map<String, Value>) -> ClassifiedRecords {
    map.iter()
        .filter_map(|(key, value)| {
            value
                .as_str()
                .map(|text| (key.clone(), classify_entry(key, text)))
        })
        .collect()
}

/// Build the translated export for `language`.
///
/// Original keys keep their order and fall back to the source text when no
/// non-empty translation exists. Translated keys unknown to the source are
/// appended afterwards, but only when they have a non-empty value.
pub fn export(
    records: &ClassifiedRecords,
    translations: &TranslationStore,
    language: &str,
) -> Map<String, Value> {
    let mut out = Map::new();

    for (key, record) in records {
        let text = translations
            .get(key, language)
            .filter(|t| !t.is_empty())
            .unwrap_or(record.text.as_str());
        out.insert(key.clone(), Value::String(text.to_string()));
    }

    for key in translations.keys() {
        if out.contains_key(key) {
            continue;
        }
        if let Some(text) = translations.get(key, language).filter(|t| !t.is_empty()) {
            out.insert(key.clone(), Value::String(text.to_string()));
        }
    }

    out
}

/// Write a JSON object with 2-space indentation and a trailing newline.
pub fn write_json(path: &Path, map: &Map<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(map).context("Failed to serialize JSON")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}
