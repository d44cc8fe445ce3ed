//! Summaries and filters over a set of classified records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{
    classify::markers::is_global_variable_key,
    data::{ClassifiedRecord, ClassifiedRecords, GLOBAL_VARIABLES_TOPIC, TranslationStatus, UiComponent},
    translations::TranslationStore,
};
use crate::utils::truncate_chars;

/// Entries included in an analysis report.
pub const ANALYSIS_ENTRY_LIMIT: usize = 100;

/// Characters of text kept per entry in an analysis report.
pub const ANALYSIS_TEXT_LIMIT: usize = 100;

/// Value meaning "no constraint" in filter fields.
const ALL: &str = "All";

/// Entry counts per topic, sorted by topic name.
pub fn topic_summary(records: &ClassifiedRecords) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records.values() {
        *counts.entry(record.topic.clone()).or_insert(0) += 1;
    }
    counts
}

/// Entry counts per UI component, sorted by component name.
pub fn component_summary(records: &ClassifiedRecords) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records.values() {
        *counts.entry(record.ui_component.to_string()).or_insert(0) += 1;
    }
    counts
}

pub fn filter_by_topic(records: &ClassifiedRecords, topic: &str) -> ClassifiedRecords {
    filter_records(records, |_, record| record.topic == topic)
}

pub fn filter_by_component(records: &ClassifiedRecords, component: UiComponent) -> ClassifiedRecords {
    filter_records(records, |_, record| record.ui_component == component)
}

/// Case-insensitive search over text, description and topic.
pub fn search(records: &ClassifiedRecords, term: &str) -> ClassifiedRecords {
    let term = term.to_lowercase();
    filter_records(records, |_, record| matches_term(record, &term))
}

pub fn filter_by_status(
    records: &ClassifiedRecords,
    translations: &TranslationStore,
    language: &str,
    status: TranslationStatus,
) -> ClassifiedRecords {
    filter_records(records, |key, _| translations.status(key, language) == status)
}

fn matches_term(record: &ClassifiedRecord, lowered_term: &str) -> bool {
    record.text.to_lowercase().contains(lowered_term)
        || record.description.to_lowercase().contains(lowered_term)
        || record.topic.to_lowercase().contains(lowered_term)
}

fn filter_records<F>(records: &ClassifiedRecords, mut keep: F) -> ClassifiedRecords
where
    F: FnMut(&str, &ClassifiedRecord) -> bool,
{
    records
        .iter()
        .filter(|(key, record)| keep(key, record))
        .map(|(key, record)| (key.clone(), record.clone()))
        .collect()
}

/// Whether an entry belongs to global variables and should stay out of translation runs.
pub fn is_global_variable(key: &str, record: &ClassifiedRecord) -> bool {
    is_global_variable_key(key)
        || key.contains(".GlobalVariables.")
        || record.topic == GLOBAL_VARIABLES_TOPIC
        || record.ui_component == UiComponent::GlobalVariable
}

/// Conjunctive filter over classified records.
///
/// Empty strings and `"All"` leave a field unconstrained.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub query: Option<String>,
    pub topic: Option<String>,
    pub component: Option<String>,
    pub status: Option<TranslationStatus>,
}

impl Filter {
    pub fn apply(
        &self,
        records: &ClassifiedRecords,
        translations: &TranslationStore,
        language: &str,
    ) -> ClassifiedRecords {
        let query = constraint(&self.query).map(str::to_lowercase);
        let topic = constraint(&self.topic);
        let component = constraint(&self.component);

        filter_records(records, |key, record| {
            query.as_deref().is_none_or(|q| matches_term(record, q))
                && topic.is_none_or(|t| record.topic == t)
                && component.is_none_or(|c| record.ui_component.as_str() == c)
                && self
                    .status
                    .is_none_or(|s| translations.status(key, language) == s)
        })
    }
}

fn constraint(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL)
}

/// Serializable analysis of a classified file.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub total_entries: usize,
    pub topics: BTreeMap<String, usize>,
    pub components: BTreeMap<String, usize>,
    pub entries: Vec<AnalysisEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisEntry {
    pub key: String,
    pub text: String,
    pub topic: String,
    pub component: String,
    pub description: String,
}

/// Summarize a file: counts plus the first [`ANALYSIS_ENTRY_LIMIT`] entries
/// with text shortened to [`ANALYSIS_TEXT_LIMIT`] characters.
pub fn analyze(records: &ClassifiedRecords) -> AnalysisReport {
    AnalysisReport {
        total_entries: records.len(),
        topics: topic_summary(records),
        components: component_summary(records),
        entries: records
            .iter()
            .take(ANALYSIS_ENTRY_LIMIT)
            .map(|(key, record)| AnalysisEntry {
                key: key.clone(),
                text: truncate_chars(&record.text, ANALYSIS_TEXT_LIMIT),
                topic: record.topic.clone(),
                component: record.ui_component.to_string(),
                description: record.description.clone(),
            })
            .collect(),
    }
}
