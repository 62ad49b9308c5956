//! User input value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// The text sent to every model in a run (Value Object)
///
/// Always contains at least one non-whitespace character. The original
/// text is kept as-is, including surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    content: String,
}

impl UserInput {
    /// Validate raw input, rejecting empty or whitespace-only text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyInput)
        } else {
            Ok(Self { content })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
