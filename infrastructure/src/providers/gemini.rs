//! Gemini adapter for `generateContent`.

use super::http::{decode, read_body, send_error};
use super::ProviderAdapter;
use async_trait::async_trait;
use multidoc_domain::{Credential, PromptTemplate, ProviderError, ProviderKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const PROVIDER: &str = "Gemini";

/// Gemini adapter.
///
/// Gemini gets no separate system channel here: the instruction and the
/// user content are re-joined with a blank line into a single text part.
#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiAdapter {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Rebuild the text sent to Gemini from a combined prompt
    pub fn gemini_text(prompt: &str) -> String {
        let parts = PromptTemplate::split(prompt);
        if parts.user.is_empty() {
            parts.instruction
        } else {
            format!("{}\n\n{}", parts.instruction, parts.user)
        }
    }
}

// =============================================================================
// API TYPES
// =============================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn invoke(
        &self,
        model: &str,
        prompt: &str,
        credential: &Credential,
        deadline: Duration,
    ) -> Result<String, ProviderError> {
        let text = Self::gemini_text(prompt);
        let request = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: &text }],
            }],
        };

        debug!("POST {}", self.generate_url(model));
        let response = self
            .client
            .post(self.generate_url(model))
            .header("x-goog-api-key", credential.expose())
            .timeout(deadline)
            .json(&request)
            .send()
            .await
            .map_err(|e| send_error(PROVIDER, model, e, deadline))?;

        let body = read_body(PROVIDER, model, response, deadline).await?;
        let parsed: GenerateResponse = decode(PROVIDER, &body)?;

        // Text of the first candidate, all parts concatenated.
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            Err(ProviderError::empty_response(
                "received empty result from Gemini API",
            ))
        } else {
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multidoc_domain::ProviderErrorKind;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter(server: &MockServer) -> GeminiAdapter {
        GeminiAdapter::new(reqwest::Client::new(), server.uri())
    }

    fn key() -> Credential {
        Credential::new("g-test").unwrap()
    }

    #[test]
    fn instruction_and_user_are_joined_with_blank_line() {
        assert_eq!(
            GeminiAdapter::gemini_text("Process the following input: Why is the sky blue?"),
            "Process the following\n\ninput: Why is the sky blue?"
        );
        assert_eq!(GeminiAdapter::gemini_text("just two"), "just two");
    }

    #[tokio::test]
    async fn concatenates_parts_of_first_candidate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(header("x-goog-api-key", "g-test"))
            .and(body_partial_json(json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": "Process the following\n\ninput: hello there" }]
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    { "content": { "role": "model", "parts": [{ "text": "Hi" }, { "text": " there" }] } },
                    { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = adapter(&server)
            .invoke(
                "gemini-2.0-flash",
                "Process the following input: hello there",
                &key(),
                Duration::from_secs(5),
            )
            .await
            .unwrap();

        assert_eq!(text, "Hi there");
    }

    #[tokio::test]
    async fn no_candidates_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .invoke("gemini-2.0-flash", "a b c d", &key(), Duration::from_secs(5))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ProviderErrorKind::EmptyResponse);
    }

    #[tokio::test]
    async fn rejected_key_is_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
            })))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .invoke("gemini-2.0-flash", "a b c d", &key(), Duration::from_secs(5))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ProviderErrorKind::Auth);
        assert!(err.to_string().contains("API key not valid"));
    }
}
