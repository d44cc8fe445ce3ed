//! Translation error types.

use thiserror::Error;

/// Failure reported by a translation backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("backend returned no translation")]
    EmptyResponse,
}

impl BackendError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            BackendError::Transport(_) | BackendError::EmptyResponse => true,
            BackendError::Status { status, .. } => *status == 429 || *status >= 500,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => BackendError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None => BackendError::Transport(err.to_string()),
        }
    }
}

/// Failure reading or writing the translation cache store.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache store is not valid JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}
