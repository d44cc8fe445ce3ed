use super::{BackendRequest, TranslationBackend};
use crate::translation::{error::BackendError, style::mock_tag};

/// Tag the text with its style and target language.
///
/// `mock_translate("Pay now", "Spanish", "formal")` gives
/// `"[FORMAL] Pay now [SPANISH]"`.
pub fn mock_translate(text: &str, target_language: &str, style: &str) -> String {
    format!(
        "{} {} [{}]",
        mock_tag(style),
        text,
        target_language.to_uppercase()
    )
}

/// Deterministic offline backend used when no credentials are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBackend;

impl TranslationBackend for MockBackend {
    fn translate(&self, request: &BackendRequest<'_>) -> Result<String, BackendError> {
        Ok(mock_translate(
            request.text,
            request.target_language,
            request.style,
        ))
    }

    fn is_offline(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "mock"
    }
}
