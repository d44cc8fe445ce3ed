//! Human-readable descriptions built from a classification.

use crate::core::data::{ElementType, KeyClassification, UiComponent};

const FALLBACK_DESCRIPTION: &str = "General localization entry";

/// Action prefixes and the clause they map to.
const ACTION_KINDS: &[(&str, &str)] = &[
    ("question_", "Question"),
    ("sendActivity_", "Response"),
    ("sendMessage_", "Message"),
];

/// Build the description for a classified key.
///
/// Clauses are joined with `" | "` in the order topic, component, element,
/// action type. Clauses carrying a default value are left out.
pub fn describe(classification: &KeyClassification) -> String {
    let mut parts = Vec::new();

    if classification.has_known_topic() {
        parts.push(format!("Topic: {}", classification.topic));
    }
    if classification.ui_component != UiComponent::Unknown {
        parts.push(format!("Component: {}", classification.ui_component));
    }
    if classification.element_type != ElementType::Text {
        parts.push(format!("Element: {}", classification.element_type));
    }
    if let Some(action) = classification.action_type() {
        parts.push(format!("Type: {}", action_kind(action)));
    }

    if parts.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        parts.join(" | ")
    }
}

fn action_kind(action: &str) -> &str {
    ACTION_KINDS
        .iter()
        .find(|(prefix, _)| action.starts_with(prefix))
        .map_or(action, |(_, kind)| kind)
}
