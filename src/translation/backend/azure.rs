use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BackendRequest, TranslationBackend};
use crate::translation::{error::BackendError, prompt::SYSTEM_PROMPT};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection and generation settings for Azure OpenAI.
#[derive(Debug, Clone, PartialEq)]
pub struct AzureSettings {
    pub api_key: String,
    pub endpoint: String,
    pub deployment: String,
    pub api_version: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Chat-completions client for an Azure OpenAI deployment.
#[derive(Debug)]
pub struct AzureOpenAiBackend {
    client: Client,
    settings: AzureSettings,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: [ChatMessage<'a>; 2],
    max_completion_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl AzureOpenAiBackend {
    pub fn new(settings: AzureSettings) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, settings })
    }

    fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.deployment,
            self.settings.api_version
        )
    }
}

impl TranslationBackend for AzureOpenAiBackend {
    fn translate(&self, request: &BackendRequest<'_>) -> Result<String, BackendError> {
        let body = ChatRequest {
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt,
                },
            ],
            max_completion_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        debug!(deployment = %self.settings.deployment, "Sending chat completion request");
        let response = self
            .client
            .post(self.url())
            .header("api-key", &self.settings.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let parsed: ChatResponse = response.json()?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(BackendError::EmptyResponse)
    }

    fn name(&self) -> &str {
        "azure-openai"
    }
}
