use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an entry has a usable translation in a given language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranslationStatus {
    Pending,
    Translated,
}

impl TranslationStatus {
    /// Empty or missing values are pending; anything else counts as translated.
    pub fn of(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => TranslationStatus::Translated,
            _ => TranslationStatus::Pending,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Pending" | "pending" => Some(TranslationStatus::Pending),
            "Translated" | "translated" => Some(TranslationStatus::Translated),
            _ => None,
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationStatus::Pending => write!(f, "Pending"),
            TranslationStatus::Translated => write!(f, "Translated"),
        }
    }
}
