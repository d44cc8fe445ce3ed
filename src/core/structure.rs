//! Structural validation of a raw localization mapping.
//!
//! Runs before classification. A file that fails here is reported as a list
//! of diagnostics and never reaches the classifier.

use serde_json::Value;

use crate::core::classify::markers::has_root_marker;

/// Maximum number of diagnostics kept before truncation.
pub const MAX_STRUCTURE_ERRORS: usize = 10;

/// Outcome of structure validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureReport {
    pub errors: Vec<String>,
}

impl StructureReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a parsed JSON document.
///
/// The root must be an object whose values are all strings and whose keys
/// all carry one of the root markers. Only the first
/// [`MAX_STRUCTURE_ERRORS`] diagnostics are kept.
pub fn validate_structure(data: &Value) -> StructureReport {
    let Value::Object(map) = data else {
        return StructureReport {
            errors: vec!["File must contain a JSON object".to_string()],
        };
    };

    let mut errors = Vec::new();
    for (key, value) in map {
        if !value.is_string() {
            errors.push(format!("Value must be string for key: {}", key));
        }
        if !has_root_marker(key) {
            errors.push(format!("Key doesn't match expected format: {}", key));
        }
    }

    if errors.len() > MAX_STRUCTURE_ERRORS {
        errors.truncate(MAX_STRUCTURE_ERRORS);
        errors.push(format!(
            "... (showing first {} errors)",
            MAX_STRUCTURE_ERRORS
        ));
    }

    StructureReport { errors }
}
