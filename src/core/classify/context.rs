//! Context attribute extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::data::{ContextAttr, KeyContext};

/// Context patterns, evaluated independently. Each contributes its first capture group.
static CONTEXT_RULES: LazyLock<Vec<(ContextAttr, Regex)>> = LazyLock::new(|| {
    vec![
        (ContextAttr::ActionType, Regex::new(r"action\(([^)]+)\)").unwrap()),
        (ContextAttr::Trigger, Regex::new(r"trigger\(([^)]+)\)").unwrap()),
        (
            ContextAttr::Component,
            Regex::new(r"\.(Card|Activity|Prompt|Entity)\.").unwrap(),
        ),
        (ContextAttr::UiElement, Regex::new(r"\.(text|title|DisplayName)").unwrap()),
        (
            ContextAttr::Intent,
            Regex::new(r"Intent\.(DisplayName|TriggerQueries)").unwrap(),
        ),
    ]
});

pub fn extract_context(key: &str) -> KeyContext {
    CONTEXT_RULES
        .iter()
        .filter_map(|(attr, pattern)| {
            pattern
                .captures(key)
                .and_then(|caps| caps.get(1))
                .map(|m| (*attr, m.as_str().to_string()))
        })
        .collect()
}
