//! Heuristic quality checks on a finished translation.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use super::orchestrator::is_error_sentinel;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]+\}").unwrap());

const PLACEHOLDER_PENALTY: f64 = 0.2;
const LENGTH_PENALTY: f64 = 0.1;
const UNTRANSLATED_PENALTY: f64 = 0.3;
const MIN_LENGTH_RATIO: f64 = 0.3;
const MAX_LENGTH_RATIO: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub score: f64,
}

impl ValidationResult {
    fn invalid(error: &str) -> Self {
        Self {
            is_valid: false,
            warnings: Vec::new(),
            errors: vec![error.to_string()],
            score: 0.0,
        }
    }
}

/// All `{...}` tokens in `text`.
pub fn placeholders(text: &str) -> BTreeSet<&str> {
    PLACEHOLDER_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Score `translated` against `original`.
///
/// Blank output and error sentinels are invalid with score 0. Otherwise the
/// score starts at 1.0 and each warning deducts a fixed amount.
pub fn validate_translation(original: &str, translated: &str) -> ValidationResult {
    if translated.trim().is_empty() {
        return ValidationResult::invalid("Translation is empty");
    }
    if is_error_sentinel(translated) {
        return ValidationResult::invalid("Translation contains error message");
    }

    let mut warnings = Vec::new();
    let mut score = 1.0_f64;

    let expected = placeholders(original);
    let found = placeholders(translated);
    if expected != found {
        let join = |set: &BTreeSet<&str>| set.iter().copied().collect::<Vec<_>>().join(", ");
        warnings.push(format!(
            "Placeholder mismatch: expected [{}], found [{}]",
            join(&expected),
            join(&found)
        ));
        score -= PLACEHOLDER_PENALTY;
    }

    let original_len = original.chars().count();
    if original_len > 0 {
        let ratio = translated.chars().count() as f64 / original_len as f64;
        if !(MIN_LENGTH_RATIO..=MAX_LENGTH_RATIO).contains(&ratio) {
            warnings.push(format!("Unusual length ratio: {:.2}", ratio));
            score -= LENGTH_PENALTY;
        }
    }

    if translated.to_lowercase() == original.to_lowercase() {
        warnings.push("Translation appears to be unchanged from original".to_string());
        score -= UNTRANSLATED_PENALTY;
    }

    ValidationResult {
        is_valid: true,
        warnings,
        errors: Vec::new(),
        score: score.max(0.0),
    }
}
