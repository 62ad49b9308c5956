//! Anthropic adapter for the Messages API.

use super::http::{decode, read_body, send_error};
use super::ProviderAdapter;
use async_trait::async_trait;
use multidoc_domain::{Credential, PromptTemplate, ProviderError, ProviderKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

const PROVIDER: &str = "Claude";

/// Anthropic Messages adapter.
///
/// The instruction goes into the `system` field and the user content is
/// sent as the only user message.
#[derive(Debug, Clone)]
pub struct AnthropicAdapter {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
    max_tokens: u32,
}

impl AnthropicAdapter {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

// =============================================================================
// API TYPES
// =============================================================================

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Claude
    }

    async fn invoke(
        &self,
        model: &str,
        prompt: &str,
        credential: &Credential,
        deadline: Duration,
    ) -> Result<String, ProviderError> {
        let parts = PromptTemplate::split(prompt);
        let request = MessagesRequest {
            model,
            max_tokens: self.max_tokens,
            system: Some(parts.instruction.as_str()).filter(|s| !s.is_empty()),
            messages: [Message {
                role: "user",
                content: parts.user,
            }],
        };

        debug!("POST {} (model {})", self.messages_url(), model);
        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", credential.expose())
            .header("anthropic-version", &self.api_version)
            .timeout(deadline)
            .json(&request)
            .send()
            .await
            .map_err(|e| send_error(PROVIDER, model, e, deadline))?;

        let body = read_body(PROVIDER, model, response, deadline).await?;
        let parsed: MessagesResponse = decode(PROVIDER, &body)?;

        let block = parsed
            .content
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::empty_response("no response from Claude API"))?;

        match block.text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ProviderError::empty_response(
                "empty text block returned from Claude API",
            )),
        }
    }
}
