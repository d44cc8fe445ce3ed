//! Cache-first translation with retry and backoff.

use std::{sync::Arc, thread, time::Duration};

use tracing::{debug, error};

use super::{
    backend::{BackendRequest, TranslationBackend},
    cache::{TranslationCache, fingerprint},
    error::BackendError,
    prompt::{build_prompt, strip_quotes},
};

/// Prefix of the in-band failure marker returned instead of a translation.
pub const ERROR_SENTINEL_PREFIX: &str = "[ERROR:";

pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Whether a string is a failure marker rather than a translation.
pub fn is_error_sentinel(text: &str) -> bool {
    text.starts_with(ERROR_SENTINEL_PREFIX)
}

fn error_sentinel(err: &BackendError) -> String {
    format!("{} Translation failed: {}]", ERROR_SENTINEL_PREFIX, err)
}

/// How often and how patiently to retry a failing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_retries: u32,
    /// Delay before the second attempt; doubles for each further attempt.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay after the failed attempt `attempt` (0-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Drives requests through the cache and a backend.
#[derive(Debug)]
pub struct Translator<B> {
    backend: B,
    cache: Arc<TranslationCache>,
    retry: RetryPolicy,
}

impl<B: TranslationBackend> Translator<B> {
    pub fn new(backend: B, cache: Arc<TranslationCache>) -> Self {
        Self {
            backend,
            cache,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Translate with the configured number of attempts.
    pub fn translate(&self, text: &str, target_language: &str, style: &str, context: &str) -> String {
        self.translate_with_retries(text, target_language, style, context, self.retry.max_retries)
    }

    /// Translate `text`, never failing.
    ///
    /// A cache hit returns immediately. Offline backends answer without
    /// touching the cache. Otherwise the backend is called up to
    /// `max_retries` times with exponential backoff between attempts; a
    /// result has one layer of surrounding quotes removed and is cached.
    /// When every attempt fails, or the failure is permanent, the result is
    /// an `[ERROR: ...]` sentinel string.
    pub fn translate_with_retries(
        &self,
        text: &str,
        target_language: &str,
        style: &str,
        context: &str,
        max_retries: u32,
    ) -> String {
        let key = fingerprint(text, target_language, style, context);
        if let Some(hit) = self.cache.get(&key) {
            debug!(fingerprint = %key, "Translation cache hit");
            return hit;
        }

        let prompt = build_prompt(text, target_language, style, context);
        let request = BackendRequest {
            text,
            target_language,
            style,
            prompt: &prompt,
        };

        if self.backend.is_offline() {
            return match self.backend.translate(&request) {
                Ok(result) => result,
                Err(err) => error_sentinel(&err),
            };
        }

        let attempts = max_retries.max(1);
        let mut attempt = 0;
        loop {
            match self.backend.translate(&request) {
                Ok(raw) => {
                    let translated = strip_quotes(raw.trim()).to_string();
                    self.cache.put(&key, &translated);
                    return translated;
                }
                Err(err) if err.is_transient() && attempt + 1 < attempts => {
                    let delay = self.retry.delay_after(attempt);
                    debug!(
                        backend = self.backend.name(),
                        attempt = attempt + 1,
                        error = %err,
                        delay_ms = delay.as_millis() as u64,
                        "Translation attempt failed, retrying"
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) => {
                    error!(backend = self.backend.name(), attempts = attempt + 1, error = %err, "Translation failed");
                    return error_sentinel(&err);
                }
            }
        }
    }

    /// Translate texts in order, reporting `(done, total, source, result)` after each.
    ///
    /// A failed item yields its error sentinel and the batch carries on.
    pub fn translate_batch<F>(
        &self,
        texts: &[String],
        target_language: &str,
        style: &str,
        contexts: Option<&[String]>,
        mut on_progress: F,
    ) -> Vec<String>
    where
        F: FnMut(usize, usize, &str, &str),
    {
        let total = texts.len();
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let context = contexts
                    .and_then(|c| c.get(i))
                    .map_or("", String::as_str);
                let translated = self.translate(text, target_language, style, context);
                on_progress(i + 1, total, text, &translated);
                translated
            })
            .collect()
    }
}
