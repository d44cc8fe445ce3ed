//! Helper functions for MCP server operations.

use std::{path::Path, sync::Arc};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::{
    config::{Credentials, load_config},
    core::{LoadError, LocalizationFile, load},
    translation::{Backend, TranslationCache, Translator},
};

/// Serialize `value` as the pretty JSON text content of a successful tool result.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Load and classify a file, turning every failure into a tool error.
pub fn load_file(path: &str) -> Result<LocalizationFile, McpError> {
    load(Path::new(path)).map_err(|e| match e {
        LoadError::Structure(errors) => McpError::invalid_params(
            format!("Invalid file structure: {}", errors.join("; ")),
            None,
        ),
        other => McpError::internal_error(format!("Failed to load file: {}", other), None),
    })
}

/// Build a translator from the project config (if any) and environment credentials.
///
/// Without a project root the cache lives in memory only. The HTTP client is
/// blocking, so call this off the async runtime.
pub fn build_translator(project_root: Option<&str>) -> Result<Translator<Backend>, McpError> {
    let (config, cache) = match project_root {
        Some(root) => {
            let root = Path::new(root);
            let loaded = load_config(root).map_err(|e| {
                McpError::internal_error(format!("Failed to load config: {}", e), None)
            })?;
            let cache = TranslationCache::open(loaded.cache_path(root));
            (loaded.config, cache)
        }
        None => (Default::default(), TranslationCache::in_memory()),
    };

    let backend = Backend::from_settings(Credentials::from_env().resolve(&config.backend));

    Ok(Translator::new(backend, Arc::new(cache)).with_retry_policy(config.retry_policy()))
}

/// Whether environment credentials select a real backend for `config`.
pub fn backend_configured(config: &crate::config::Config) -> bool {
    Credentials::from_env().resolve(&config.backend).is_some()
}
