use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::report;
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{
        LoadError, LocalizationFile, TranslationStore, index::is_global_variable, load,
    },
    issues::{Finding, Rule},
    translation::is_error_sentinel,
    utils::contains_alphabetic,
};

pub fn load_workspace_config() -> Result<ConfigLoadResult> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    if let Some(path) = &loaded.path {
        debug!(path = %path.display(), "Loaded config");
    }
    Ok(loaded)
}

/// Load and classify `path`.
///
/// Structural problems are printed and yield `Ok(None)`; unreadable files and
/// invalid JSON are returned as errors.
pub fn load_or_report(path: &Path) -> Result<Option<LocalizationFile>> {
    match load(path) {
        Ok(file) => Ok(Some(file)),
        Err(LoadError::Structure(errors)) => {
            let findings: Vec<Finding> = errors
                .into_iter()
                .map(|message| Finding::error(Rule::Structure, message))
                .collect();
            report::report(&findings, &path.display().to_string());
            Ok(None)
        }
        Err(err) => Err(err).with_context(|| format!("Failed to load {}", path.display())),
    }
}

/// `<stem><suffix>` next to `file`.
fn sibling(file: &Path, suffix: &str) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "localization".to_string());
    file.with_file_name(format!("{}{}", stem, suffix))
}

pub fn translations_path(file: &Path, explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| sibling(file, ".translations.json"))
}

pub fn output_path(file: &Path, language: &str, explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(|| {
        let tag = language.trim().to_lowercase().replace(char::is_whitespace, "-");
        sibling(file, &format!(".{}.json", tag))
    })
}

/// Keys picked for translation, with the reasons others were left out.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub keys: Vec<String>,
    pub global_variables: usize,
    pub ignored: usize,
    pub non_text: usize,
    pub already_translated: usize,
    pub unknown: Vec<String>,
}

pub struct SelectionOptions<'a> {
    pub only_keys: &'a [String],
    pub exclude_global_variables: bool,
    pub is_ignored: &'a dyn Fn(&str) -> bool,
    /// Skip keys already translated into this language.
    pub skip_translated: Option<(&'a TranslationStore, &'a str)>,
}

/// Pick the entries of `file` that should go to a translation backend.
pub fn select_keys(file: &LocalizationFile, options: &SelectionOptions<'_>) -> Selection {
    let mut selection = Selection::default();

    let candidates: Vec<&String> = if options.only_keys.is_empty() {
        file.records.keys().collect()
    } else {
        options
            .only_keys
            .iter()
            .filter(|key| {
                let known = file.records.contains_key(key.as_str());
                if !known {
                    selection.unknown.push(key.to_string());
                }
                known
            })
            .collect()
    };

    for key in candidates {
        let Some(record) = file.records.get(key) else {
            continue;
        };
        if options.exclude_global_variables && is_global_variable(key, record) {
            selection.global_variables += 1;
        } else if (options.is_ignored)(key) {
            selection.ignored += 1;
        } else if !contains_alphabetic(&record.text) {
            selection.non_text += 1;
        } else if options
            .skip_translated
            .is_some_and(|(store, language)| {
                store
                    .get(key, language)
                    .is_some_and(|t| !t.is_empty() && !is_error_sentinel(t))
            })
        {
            selection.already_translated += 1;
        } else {
            selection.keys.push(key.clone());
        }
    }

    selection
}
