//! UI component and element type extraction.

use super::markers::{is_dialog_key, is_global_variable_key};
use crate::core::data::{ElementType, UiComponent};

/// Segment markers that rule out a dialog-level `DisplayName`.
const NESTED_COMPONENT_MARKERS: [&str; 4] = [".Entity.", ".Card.", ".Activity.", ".Prompt."];

/// One entry in the component precedence list.
pub struct ComponentRule {
    pub component: UiComponent,
    pub matches: fn(&str) -> bool,
}

/// Component rules in precedence order; the first match wins.
///
/// The dialog `DisplayName` rule comes after the literal segment rules on
/// purpose: reordering them changes the result for dialog-root keys.
pub const COMPONENT_RULES: &[ComponentRule] = &[
    ComponentRule {
        component: UiComponent::Card,
        matches: |key| key.contains(".Card."),
    },
    ComponentRule {
        component: UiComponent::Activity,
        matches: |key| key.contains(".Activity."),
    },
    ComponentRule {
        component: UiComponent::Prompt,
        matches: |key| key.contains(".Prompt."),
    },
    ComponentRule {
        component: UiComponent::Entity,
        matches: |key| key.contains(".Entity."),
    },
    ComponentRule {
        component: UiComponent::Intent,
        matches: |key| key.contains(".Intent."),
    },
    ComponentRule {
        component: UiComponent::Dialog,
        matches: |key| key.contains(".Dialog."),
    },
    ComponentRule {
        component: UiComponent::GlobalVariable,
        matches: is_global_variable_key,
    },
    ComponentRule {
        component: UiComponent::KnowledgeSourceComponent,
        matches: |key| {
            let lowered = key.to_lowercase();
            lowered.contains("knowledgesourcecomponent")
                || lowered.contains("knowledge_source_component")
        },
    },
    ComponentRule {
        component: UiComponent::KnowledgeSource,
        matches: |key| {
            let lowered = key.to_lowercase();
            lowered.contains(".knowledgebase.")
                || lowered.contains("knowledgebase(")
                || lowered.contains(".knowledgesource.")
        },
    },
    ComponentRule {
        component: UiComponent::DialogDisplayName,
        matches: |key| {
            key.ends_with(".DisplayName")
                && is_dialog_key(key)
                && !NESTED_COMPONENT_MARKERS.iter().any(|m| key.contains(m))
        },
    },
];

pub fn extract_ui_component(key: &str) -> UiComponent {
    COMPONENT_RULES
        .iter()
        .find(|rule| (rule.matches)(key))
        .map_or(UiComponent::Unknown, |rule| rule.component)
}

/// First element whose name ends the key or is indexed as `.<name>[`.
pub fn extract_element_type(key: &str) -> ElementType {
    ElementType::priority()
        .into_iter()
        .find(|element| {
            let name = element.as_str();
            key.ends_with(&format!(".{}", name)) || key.contains(&format!(".{}[", name))
        })
        .unwrap_or_default()
}
