//! OpenAI adapter for chat completions.

use super::http::{decode, read_body, send_error};
use super::ProviderAdapter;
use async_trait::async_trait;
use multidoc_domain::{Credential, ProviderError, ProviderKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

const PROVIDER: &str = "OpenAI";

/// OpenAI chat completions adapter.
///
/// The combined prompt is sent unsplit as a single user message.
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiAdapter {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn chat_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

// =============================================================================
// API TYPES
// =============================================================================

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn invoke(
        &self,
        model: &str,
        prompt: &str,
        credential: &Credential,
        deadline: Duration,
    ) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("POST {} (model {})", self.chat_url(), model);
        let response = self
            .client
            .post(self.chat_url())
            .bearer_auth(credential.expose())
            .timeout(deadline)
            .json(&request)
            .send()
            .await
            .map_err(|e| send_error(PROVIDER, model, e, deadline))?;

        let body = read_body(PROVIDER, model, response, deadline).await?;
        let parsed: ChatResponse = decode(PROVIDER, &body)?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| {
                ProviderError::empty_response("no response choices returned from OpenAI")
            })?;

        match choice.message.and_then(|m| m.content) {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ProviderError::empty_response(
                "empty message content returned from OpenAI",
            )),
        }
    }
}
