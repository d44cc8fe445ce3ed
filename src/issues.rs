//! Findings reported by `check` and `validate`.
//!
//! Structural diagnostics and translation validation results are both turned
//! into [`Finding`]s so the CLI reporter and the MCP server print them the same way.

use serde::Serialize;

use crate::{core::StructureReport, translation::ValidationResult};

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Structure,
    Translation,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Structure => write!(f, "structure"),
            Rule::Translation => write!(f, "translation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub severity: Severity,
    pub rule: Rule,
    pub message: String,
    /// Localization key the finding is about, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Finding {
    pub fn error(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            rule,
            message: message.into(),
            key: None,
        }
    }

    pub fn warning(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            rule,
            message: message.into(),
            key: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

pub fn structure_findings(report: &StructureReport) -> Vec<Finding> {
    report
        .errors
        .iter()
        .map(|message| Finding::error(Rule::Structure, message.clone()))
        .collect()
}

pub fn validation_findings(key: &str, result: &ValidationResult) -> Vec<Finding> {
    let errors = result
        .errors
        .iter()
        .map(|m| Finding::error(Rule::Translation, m.clone()).with_key(key));
    let warnings = result
        .warnings
        .iter()
        .map(|m| Finding::warning(Rule::Translation, m.clone()).with_key(key));
    errors.chain(warnings).collect()
}

pub fn error_count(findings: &[Finding]) -> usize {
    findings.iter().filter(|f| f.severity == Severity::Error).count()
}
