//! Translation pipeline.
//!
//! [`Translator`] checks the [`TranslationCache`], then asks a
//! [`Backend`] with retry and backoff. Failures come back as `[ERROR: ...]`
//! strings so batches keep going. [`pool`] runs batches on a bounded worker
//! pool, [`validate`] scores results.

pub mod backend;
pub mod cache;
pub mod cost;
pub mod error;
pub mod orchestrator;
pub mod pool;
pub mod prompt;
pub mod style;
pub mod validate;

pub use backend::{AzureSettings, Backend, MockBackend, TranslationBackend};
pub use cache::{TranslationCache, fingerprint};
pub use cost::{CostEstimate, estimate_cost, estimate_for_texts};
pub use error::{BackendError, CacheError};
pub use orchestrator::{RetryPolicy, Translator, is_error_sentinel};
pub use pool::{BatchHandle, BatchJob, BatchOptions, BatchSummary, CancellationToken, ProgressEvent, spawn_batch};
pub use style::{DEFAULT_STYLE, SUPPORTED_LANGUAGES, StyleTemplate, translation_styles};
pub use validate::{ValidationResult, validate_translation};
