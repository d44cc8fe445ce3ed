use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::translation::{AzureSettings, RetryPolicy};

pub const CONFIG_FILE_NAME: &str = ".chatlocrc.json";

pub const API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";
pub const ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT";
pub const DEPLOYMENT_ENV: &str = "AZURE_OPENAI_DEPLOYMENT_NAME";
pub const API_VERSION_ENV: &str = "AZURE_OPENAI_API_VERSION";

/// Values shipped in sample env files; treated as unset.
const PLACEHOLDER_VALUES: &[&str] = &["your_azure_openai_api_key_here", "your_azure_openai_endpoint_here"];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_cache_file")]
    pub cache_file: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    #[serde(default = "default_exclude_global_variables")]
    pub exclude_global_variables: bool,
    #[serde(default)]
    pub ignore_keys: Vec<String>,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    #[serde(default = "default_deployment")]
    pub deployment: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_target_language() -> String {
    "Spanish".to_string()
}

fn default_style() -> String {
    crate::translation::DEFAULT_STYLE.to_string()
}

fn default_cache_file() -> String {
    "translation_cache.json".to_string()
}

fn default_max_retries() -> u32 {
    crate::translation::orchestrator::DEFAULT_MAX_RETRIES
}

fn default_max_workers() -> usize {
    crate::translation::pool::DEFAULT_MAX_WORKERS
}

fn default_retry_base_delay_ms() -> u64 {
    1000
}

fn default_exclude_global_variables() -> bool {
    true
}

fn default_deployment() -> String {
    "gpt-4".to_string()
}

fn default_api_version() -> String {
    "2024-02-15-preview".to_string()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_temperature() -> f32 {
    0.3
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            deployment: default_deployment(),
            api_version: default_api_version(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
            style: default_style(),
            cache_file: default_cache_file(),
            max_retries: default_max_retries(),
            max_workers: default_max_workers(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            exclude_global_variables: default_exclude_global_variables(),
            ignore_keys: Vec::new(),
            backend: BackendConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignoreKeys` is invalid or a
    /// numeric limit is zero.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignore_keys {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignoreKeys': \"{}\"", pattern))?;
        }
        if self.max_retries == 0 {
            anyhow::bail!("'maxRetries' must be at least 1");
        }
        if self.max_workers == 0 {
            anyhow::bail!("'maxWorkers' must be at least 1");
        }
        Ok(())
    }

    /// Compiled `ignoreKeys` patterns. Invalid ones are skipped; `validate` reports them.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignore_keys
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }

    pub fn is_ignored_key(&self, key: &str) -> bool {
        self.ignore_patterns().iter().any(|p| p.matches(key))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(self.retry_base_delay_ms),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).context("Failed to generate default config.")?;
    Ok(format!("{}\n", json))
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Cache file path, relative paths resolved against the config file's directory.
    pub fn cache_path(&self, working_dir: &Path) -> PathBuf {
        let base = self
            .path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(working_dir);
        base.join(&self.config.cache_file)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            path: None,
        }),
    }
}

/// Backend credentials gathered from flags or the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub deployment: Option<String>,
    pub api_version: Option<String>,
}

fn usable(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !PLACEHOLDER_VALUES.contains(&v.as_str()))
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            endpoint: env::var(ENDPOINT_ENV).ok(),
            deployment: env::var(DEPLOYMENT_ENV).ok(),
            api_version: env::var(API_VERSION_ENV).ok(),
        }
    }

    /// Azure settings when both key and endpoint are usable, `None` otherwise.
    ///
    /// Deployment and API version fall back to the config file.
    pub fn resolve(self, backend: &BackendConfig) -> Option<AzureSettings> {
        let api_key = usable(self.api_key)?;
        let endpoint = usable(self.endpoint)?;
        Some(AzureSettings {
            api_key,
            endpoint,
            deployment: usable(self.deployment).unwrap_or_else(|| backend.deployment.clone()),
            api_version: usable(self.api_version).unwrap_or_else(|| backend.api_version.clone()),
            max_tokens: backend.max_tokens,
            temperature: backend.temperature,
        })
    }
}
