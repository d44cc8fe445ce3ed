use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sentinel topic for keys that match no topic pattern.
pub const UNKNOWN_TOPIC: &str = "Unknown Topic";

/// Topic assigned to keys scoped to a global variable without a component name.
pub const GLOBAL_VARIABLES_TOPIC: &str = "Global Variables";

/// Authoring-surface element a localized string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UiComponent {
    Card,
    Activity,
    Prompt,
    Entity,
    Intent,
    Dialog,
    GlobalVariable,
    KnowledgeSourceComponent,
    KnowledgeSource,
    DialogDisplayName,
    Unknown,
}

impl UiComponent {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiComponent::Card => "Card",
            UiComponent::Activity => "Activity",
            UiComponent::Prompt => "Prompt",
            UiComponent::Entity => "Entity",
            UiComponent::Intent => "Intent",
            UiComponent::Dialog => "Dialog",
            UiComponent::GlobalVariable => "GlobalVariable",
            UiComponent::KnowledgeSourceComponent => "KnowledgeSourceComponent",
            UiComponent::KnowledgeSource => "KnowledgeSource",
            UiComponent::DialogDisplayName => "DialogDisplayName",
            UiComponent::Unknown => "Unknown",
        }
    }

    /// Parse a component name as printed by [`UiComponent::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.as_str() == name)
    }

    pub fn all() -> Vec<UiComponent> {
        vec![
            UiComponent::Card,
            UiComponent::Activity,
            UiComponent::Prompt,
            UiComponent::Entity,
            UiComponent::Intent,
            UiComponent::Dialog,
            UiComponent::GlobalVariable,
            UiComponent::KnowledgeSourceComponent,
            UiComponent::KnowledgeSource,
            UiComponent::DialogDisplayName,
            UiComponent::Unknown,
        ]
    }
}

impl fmt::Display for UiComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-field within a component.
///
/// Candidates are matched in declaration order, so `Text` wins over
/// `DisplayName` when a key somehow carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ElementType {
    #[default]
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "title")]
    Title,
    DisplayName,
    TriggerQueries,
    Description,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::Title => "title",
            ElementType::DisplayName => "DisplayName",
            ElementType::TriggerQueries => "TriggerQueries",
            ElementType::Description => "Description",
        }
    }

    /// Candidates in match priority.
    pub fn priority() -> [ElementType; 5] {
        [
            ElementType::Text,
            ElementType::Title,
            ElementType::DisplayName,
            ElementType::TriggerQueries,
            ElementType::Description,
        ]
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named context attribute extracted from a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextAttr {
    ActionType,
    Trigger,
    Component,
    UiElement,
    Intent,
}

impl ContextAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextAttr::ActionType => "action_type",
            ContextAttr::Trigger => "trigger",
            ContextAttr::Component => "component",
            ContextAttr::UiElement => "ui_element",
            ContextAttr::Intent => "intent",
        }
    }
}

impl fmt::Display for ContextAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context attributes that matched, in pattern order. Unmatched attributes are absent.
pub type KeyContext = IndexMap<ContextAttr, String>;

/// Semantic classification of a single key.
///
/// Everything here is a pure function of the key; see
/// [`crate::core::classify::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyClassification {
    pub topic: String,
    pub context: KeyContext,
    pub ui_component: UiComponent,
    pub element_type: ElementType,
}

impl KeyClassification {
    pub fn action_type(&self) -> Option<&str> {
        self.context.get(&ContextAttr::ActionType).map(String::as_str)
    }

    pub fn has_known_topic(&self) -> bool {
        self.topic != UNKNOWN_TOPIC
    }
}

/// A localized string together with its classification and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedRecord {
    /// Original value, never altered by classification.
    pub text: String,
    pub topic: String,
    pub context: KeyContext,
    pub ui_component: UiComponent,
    pub element_type: ElementType,
    pub description: String,
}

impl ClassifiedRecord {
    pub fn new(text: impl Into<String>, classification: KeyClassification, description: String) -> Self {
        let KeyClassification {
            topic,
            context,
            ui_component,
            element_type,
        } = classification;
        Self {
            text: text.into(),
            topic,
            context,
            ui_component,
            element_type,
            description,
        }
    }

    /// Context string handed to the translator for this entry.
    pub fn translation_context(&self) -> &str {
        &self.topic
    }
}

/// Classified entries in original file order.
pub type ClassifiedRecords = IndexMap<String, ClassifiedRecord>;
