//! Domain error types

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("No models configured")]
    NoModels,
}

/// Category of a provider failure.
///
/// Lets callers branch on the kind of failure instead of matching on
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorKind {
    Transport,
    Auth,
    EmptyResponse,
    Timeout,
}

/// A failed provider call, flattened to a kind plus a readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Network failure, non-auth HTTP error or undecodable body
    #[error("{0}")]
    Transport(String),

    /// Credential rejected by the provider
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The provider answered but returned no usable text
    #[error("{0}")]
    EmptyResponse(String),

    /// The per-call deadline elapsed before the provider answered
    #[error("deadline exceeded after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl ProviderError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn empty_response(message: impl Into<String>) -> Self {
        Self::EmptyResponse(message.into())
    }

    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            Self::Transport(_) => ProviderErrorKind::Transport,
            Self::Auth(_) => ProviderErrorKind::Auth,
            Self::EmptyResponse(_) => ProviderErrorKind::EmptyResponse,
            Self::Timeout(_) => ProviderErrorKind::Timeout,
        }
    }

    /// Check if this error represents an elapsed deadline
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
