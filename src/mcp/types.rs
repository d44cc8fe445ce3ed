use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Directory to start the .chatlocrc.json lookup from
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileParams {
    /// Path to a localization JSON export
    pub file_path: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspectFileParams {
    /// Path to a localization JSON export
    pub file_path: String,
    /// Only entries of this topic
    pub topic: Option<String>,
    /// Only entries of this UI component (e.g. "Card", "Prompt")
    pub component: Option<String>,
    /// Case-insensitive search over text, description and topic
    pub search: Option<String>,
    /// Page size (default 50, max 200)
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextParams {
    pub text: String,
    /// Target language name, e.g. "Spanish"
    pub target_language: String,
    /// formal (default), conversational or chatbot
    pub style: Option<String>,
    /// Topic or other context passed to the translator
    pub context: Option<String>,
    /// Project directory whose .chatlocrc.json and cache should be used
    pub project_root_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTranslationParams {
    pub original: String,
    pub translated: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstimateCostParams {
    /// Number of texts to translate
    pub text_count: u32,
    /// Average text length in characters
    pub avg_text_length: u32,
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
    /// Whether Azure OpenAI credentials are available; otherwise mock translations are used
    pub backend_configured: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub target_language: String,
    pub style: String,
    pub cache_file: String,
    pub max_retries: u32,
    pub max_workers: usize,
    pub exclude_global_variables: bool,
    pub ignore_keys: Vec<String>,
    pub deployment: String,
    pub api_version: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            target_language: c.target_language,
            style: c.style,
            cache_file: c.cache_file,
            max_retries: c.max_retries,
            max_workers: c.max_workers,
            exclude_global_variables: c.exclude_global_variables,
            ignore_keys: c.ignore_keys,
            deployment: c.backend.deployment,
            api_version: c.backend.api_version,
        }
    }
}

// ============================================================
// Inspect Types (inspect_file, validate_structure)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StructureResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspectResult {
    pub total_entries: usize,
    pub topics: BTreeMap<String, usize>,
    pub components: BTreeMap<String, usize>,
    /// Entries matching the filters
    pub matching_count: usize,
    pub items: Vec<EntryItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryItem {
    pub key: String,
    pub text: String,
    pub topic: String,
    pub component: String,
    pub element_type: String,
    pub description: String,
    pub is_global_variable: bool,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Translation Types (translate_text, validate_translation)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextResult {
    pub translation: String,
    /// "azure-openai" or "mock"
    pub backend: String,
    pub validation: ValidationDto,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDto {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub score: f64,
}

impl From<crate::translation::ValidationResult> for ValidationDto {
    fn from(r: crate::translation::ValidationResult) -> Self {
        Self {
            is_valid: r.is_valid,
            warnings: r.warnings,
            errors: r.errors,
            score: r.score,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostDto {
    pub text_count: usize,
    pub input_tokens: f64,
    pub output_tokens: f64,
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
    pub cost_per_translation: f64,
}

impl From<crate::translation::CostEstimate> for CostDto {
    fn from(e: crate::translation::CostEstimate) -> Self {
        Self {
            text_count: e.text_count,
            input_tokens: e.input_tokens,
            output_tokens: e.output_tokens,
            input_cost: e.input_cost,
            output_cost: e.output_cost,
            total_cost: e.total_cost,
            cost_per_translation: e.cost_per_translation,
        }
    }
}
