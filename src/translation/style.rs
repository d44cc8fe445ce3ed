//! Translation styles and supported target languages.

/// Style used when none or an unknown one is requested.
pub const DEFAULT_STYLE: &str = "formal";

/// Guidance attached to a named translation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub prompt_addition: &'static str,
    /// Tag used by the offline mock backend.
    pub mock_tag: &'static str,
}

pub const STYLES: &[StyleTemplate] = &[
    StyleTemplate {
        name: "formal",
        description: "Professional, formal tone suitable for business applications",
        prompt_addition: "Use formal, professional language appropriate for business software.",
        mock_tag: "[FORMAL]",
    },
    StyleTemplate {
        name: "conversational",
        description: "Natural, conversational tone for user interactions",
        prompt_addition: "Use natural, conversational language that feels friendly and approachable.",
        mock_tag: "[CONV]",
    },
    StyleTemplate {
        name: "chatbot",
        description: "Friendly, helpful tone optimized for chatbot interactions",
        prompt_addition: "Use friendly, helpful language optimized for chatbot conversations. Be concise and clear.",
        mock_tag: "[BOT]",
    },
];

/// Mock tag for styles without a template.
const UNKNOWN_STYLE_TAG: &str = "[TRANS]";

pub fn find_style(name: &str) -> Option<&'static StyleTemplate> {
    STYLES.iter().find(|s| s.name == name)
}

/// Template for `name`, falling back to the formal style.
pub fn style_or_default(name: &str) -> &'static StyleTemplate {
    find_style(name).unwrap_or(&STYLES[0])
}

pub fn mock_tag(name: &str) -> &'static str {
    find_style(name).map_or(UNKNOWN_STYLE_TAG, |s| s.mock_tag)
}

/// Style names with their descriptions.
pub fn translation_styles() -> Vec<(&'static str, &'static str)> {
    STYLES.iter().map(|s| (s.name, s.description)).collect()
}

pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Dutch",
    "Russian",
    "Chinese (Simplified)",
    "Chinese (Traditional)",
    "Japanese",
    "Korean",
    "Arabic",
    "Hindi",
    "Swedish",
    "Norwegian",
    "Danish",
    "Finnish",
    "Polish",
    "Czech",
    "Hungarian",
    "Romanian",
    "Bulgarian",
    "Croatian",
    "Serbian",
    "Slovak",
    "Slovenian",
    "Estonian",
    "Latvian",
    "Lithuanian",
    "Greek",
    "Turkish",
    "Hebrew",
    "Thai",
    "Vietnamese",
    "Indonesian",
    "Malay",
];
