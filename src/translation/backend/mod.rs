//! Translation backends.
//!
//! A backend turns a prepared [`BackendRequest`] into translated text.
//! [`Backend`] is the configured choice: Azure OpenAI when credentials are
//! present, the offline mock otherwise.

mod azure;
mod mock;

use enum_dispatch::enum_dispatch;
use tracing::warn;

pub use azure::{AzureOpenAiBackend, AzureSettings};
pub use mock::{MockBackend, mock_translate};

use super::error::BackendError;

/// One translation call as seen by a backend.
#[derive(Debug, Clone)]
pub struct BackendRequest<'a> {
    pub text: &'a str,
    pub target_language: &'a str,
    pub style: &'a str,
    /// Full instruction prompt built by [`super::prompt::build_prompt`].
    pub prompt: &'a str,
}

#[enum_dispatch]
pub trait TranslationBackend {
    fn translate(&self, request: &BackendRequest<'_>) -> Result<String, BackendError>;

    /// Offline backends produce placeholder output that must not be cached.
    fn is_offline(&self) -> bool {
        false
    }

    fn name(&self) -> &str;
}

#[enum_dispatch(TranslationBackend)]
#[derive(Debug)]
pub enum Backend {
    AzureOpenAi(AzureOpenAiBackend),
    Mock(MockBackend),
}

impl Backend {
    /// Pick the backend for the given settings.
    ///
    /// Without settings, or when the client cannot be created, the mock
    /// backend is used.
    pub fn from_settings(settings: Option<AzureSettings>) -> Self {
        match settings {
            Some(settings) => Self::or_mock(AzureOpenAiBackend::new(settings)),
            None => Backend::Mock(MockBackend),
        }
    }

    fn or_mock(client: Result<AzureOpenAiBackend, BackendError>) -> Self {
        match client {
            Ok(backend) => Backend::AzureOpenAi(backend),
            Err(err) => {
                warn!(error = %err, "Failed to create Azure OpenAI client, using mock translations");
                Backend::Mock(MockBackend)
            }
        }
    }
}
