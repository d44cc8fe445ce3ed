//! Topic extraction and display-name formatting.

use std::sync::LazyLock;

use regex::Regex;

use super::markers::is_global_variable_key;
use crate::core::data::{GLOBAL_VARIABLES_TOPIC, UNKNOWN_TOPIC};

/// Words that are upper-cased instead of title-cased.
const ACRONYMS: &[&str] = &["copilot", "ai", "ui", "api"];

/// A named topic pattern. The first capture group holds the raw topic name.
pub struct TopicRule {
    pub name: &'static str,
    pub pattern: Regex,
}

/// Topic patterns in precedence order; the first match wins.
///
/// Captures stop at quotes, dots and parentheses so that
/// `dialog(topic.Billing).Card` yields `Billing`.
pub static TOPIC_RULES: LazyLock<Vec<TopicRule>> = LazyLock::new(|| {
    vec![
        TopicRule {
            name: "embedded-topic",
            pattern: Regex::new(r"topic\.([^'.()]+)").unwrap(),
        },
        TopicRule {
            name: "dialog-topic",
            pattern: Regex::new(r"dialog\([^.]*\.topic\.([^'.()]+)\)").unwrap(),
        },
        TopicRule {
            name: "global-variable-component",
            pattern: Regex::new(r"globalVariable\([^.]*\.component\.([^)]+)\)").unwrap(),
        },
    ]
});

static CAMEL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// Extract the display topic for a key.
///
/// Falls back to "Global Variables" for global-variable keys and to
/// "Unknown Topic" for everything else.
pub fn extract_topic(key: &str) -> String {
    let raw = TOPIC_RULES
        .iter()
        .find_map(|rule| rule.pattern.captures(key))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    match raw {
        Some(name) => format_topic_name(&name.replace(['_', '-'], " ")),
        None if is_global_variable_key(key) => GLOBAL_VARIABLES_TOPIC.to_string(),
        None => UNKNOWN_TOPIC.to_string(),
    }
}

/// Turn a raw topic name into a display name.
///
/// Splits camelCase, upper-cases known acronyms and single letters, and
/// title-cases every other word (the rest of the word is lower-cased).
pub fn format_topic_name(raw: &str) -> String {
    let spaced = CAMEL_BOUNDARY.replace_all(raw, "$1 $2");
    spaced
        .split_whitespace()
        .map(format_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_word(word: &str) -> String {
    if ACRONYMS.contains(&word.to_lowercase().as_str()) || word.chars().count() == 1 {
        return word.to_uppercase();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
