//! Error normalization shared by the HTTP adapters

use multidoc_domain::ProviderError;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Error body shape used (with small variations) by all three providers
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    error_type: Option<String>,
    status: Option<String>,
}

/// Map a failed send (no HTTP response) to a provider error
pub(crate) fn send_error(
    provider: &str,
    model: &str,
    error: reqwest::Error,
    deadline: Duration,
) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout(deadline)
    } else {
        ProviderError::transport(format!("error calling {} {}: {}", provider, model, error))
    }
}

/// Map a non-success HTTP response to a provider error.
///
/// The provider's `{type, message}` body is flattened into the message.
pub(crate) fn status_error(provider: &str, status: StatusCode, body: &str) -> ProviderError {
    let detail = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => {
            let message = error.message.unwrap_or_default();
            match error.error_type.or(error.status) {
                Some(kind) => format!("type: {}, message: {}", kind, message),
                None => message,
            }
        }
        Err(_) => body.trim().to_string(),
    };

    let message = format!("{} API error ({}): {}", provider, status.as_u16(), detail);
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ProviderError::auth(message)
    } else {
        ProviderError::transport(message)
    }
}

/// Read a response, returning its body or a normalized error
pub(crate) async fn read_body(
    provider: &str,
    model: &str,
    response: reqwest::Response,
    deadline: Duration,
) -> Result<String, ProviderError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| send_error(provider, model, e, deadline))?;

    if status.is_success() {
        Ok(body)
    } else {
        Err(status_error(provider, status, &body))
    }
}

/// Decode a successful body into the provider's response type
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    provider: &str,
    body: &str,
) -> Result<T, ProviderError> {
    serde_json::from_str(body)
        .map_err(|e| ProviderError::transport(format!("invalid {} response: {}", provider, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use multidoc_domain::ProviderErrorKind;

    #[test]
    fn anthropic_style_error_is_flattened() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        let err = status_error("Claude", StatusCode::from_u16(529).unwrap(), body);
        assert_eq!(err.kind(), ProviderErrorKind::Transport);
        assert_eq!(
            err.to_string(),
            "Claude API error (529): type: overloaded_error, message: Overloaded"
        );
    }

    #[test]
    fn unauthorized_maps_to_auth() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let err = status_error("OpenAI", StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.kind(), ProviderErrorKind::Auth);
        assert!(err.to_string().contains("Incorrect API key provided"));
    }

    #[test]
    fn gemini_status_is_used_as_type() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        let err = status_error("Gemini", StatusCode::FORBIDDEN, body);
        assert_eq!(err.kind(), ProviderErrorKind::Auth);
        assert!(err.to_string().contains("type: PERMISSION_DENIED, message: API key not valid"));
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        let err = status_error("OpenAI", StatusCode::BAD_GATEWAY, " upstream down \n");
        assert_eq!(err.to_string(), "OpenAI API error (502): upstream down");
    }
}
