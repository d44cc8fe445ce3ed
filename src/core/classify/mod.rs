//! Key classification.
//!
//! Turns an opaque authoring key such as
//! `'dialog(cr1_agent.topic.OrderStatus)'.'action(question_x)'.Prompt.1.text`
//! into a [`KeyClassification`]: topic, UI component, element type and the
//! context attributes that matched.
//!
//! Classification never fails. Unmatched parts fall back to sentinel values
//! ("Unknown Topic", `UiComponent::Unknown`, `ElementType::Text`).
//!
//! ## Module Structure
//!
//! - `markers`: root segment markers shared with structure validation
//! - `topic`: topic patterns and display-name formatting
//! - `context`: context attribute patterns
//! - `component`: component precedence rules and element types
//! - `describe`: description generation

pub mod component;
pub mod context;
pub mod describe;
pub mod markers;
pub mod topic;

pub use component::{extract_element_type, extract_ui_component};
pub use context::extract_context;
pub use describe::describe;
pub use topic::{extract_topic, format_topic_name};

use crate::core::data::{ClassifiedRecord, KeyClassification};

/// Classify a key. Pure and deterministic.
pub fn classify(key: &str) -> KeyClassification {
    KeyClassification {
        topic: extract_topic(key),
        context: extract_context(key),
        ui_component: extract_ui_component(key),
        element_type: extract_element_type(key),
    }
}

/// Classify a key/value pair and attach its description.
pub fn classify_entry(key: &str, text: &str) -> ClassifiedRecord {
    let classification = classify(key);
    let description = describe(&classification);
    ClassifiedRecord::new(text, classification, description)
}
