//! Dispatch value objects - immutable results of a fan-out.
//!
//! - [`CallResult`] - one model's answer (or failure) plus its latency
//! - [`ResultsTable`] - every call result, in dispatch order

use crate::core::error::{ProviderError, ProviderErrorKind};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Outcome of a single provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    /// The model that was asked
    pub model: String,
    /// Time spent in the provider call
    pub elapsed: Duration,
    /// Response text, or the failure
    pub outcome: Result<String, ProviderError>,
}

impl CallResult {
    /// Creates a successful result.
    pub fn success(model: impl Into<String>, elapsed: Duration, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            elapsed,
            outcome: Ok(text.into()),
        }
    }

    /// Creates a failed result.
    pub fn failure(model: impl Into<String>, elapsed: Duration, error: ProviderError) -> Self {
        Self {
            model: model.into(),
            elapsed,
            outcome: Err(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&ProviderError> {
        self.outcome.as_ref().err()
    }

    /// The text this call contributes to the summary prompt.
    ///
    /// Failures are rendered as `Error from {model}: {message}` so they stay
    /// visible to the synthesizer.
    pub fn display_text(&self) -> String {
        match &self.outcome {
            Ok(text) => text.clone(),
            Err(e) => format!("Error from {}: {}", self.model, e),
        }
    }
}

impl Serialize for CallResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CallResult", 5)?;
        state.serialize_field("model", &self.model)?;
        state.serialize_field("elapsed_secs", &self.elapsed.as_secs_f64())?;
        state.serialize_field("success", &self.is_success())?;
        match &self.outcome {
            Ok(text) => {
                state.serialize_field("content", text)?;
                state.skip_field("error")?;
            }
            Err(e) => {
                state.skip_field("content")?;
                let view = ErrorView {
                    kind: e.kind(),
                    message: e.to_string(),
                };
                state.serialize_field("error", &view)?;
            }
        }
        state.end()
    }
}

#[derive(Serialize)]
struct ErrorView {
    kind: ProviderErrorKind,
    message: String,
}

/// All call results of one fan-out, indexed by dispatch order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultsTable {
    results: Vec<CallResult>,
}

impl ResultsTable {
    /// Build a table from results already placed in dispatch order.
    pub fn new(results: Vec<CallResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CallResult> {
        self.results.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CallResult> {
        self.results.iter()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }
}

impl<'a> IntoIterator for &'a ResultsTable {
    type Item = &'a CallResult;
    type IntoIter = std::slice::Iter<'a, CallResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_for_failure() {
        let result = CallResult::failure(
            "o3-mini",
            Duration::from_millis(10),
            ProviderError::transport("connection refused"),
        );
        assert_eq!(result.display_text(), "Error from o3-mini: connection refused");
        assert!(!result.is_success());
    }

    #[test]
    fn test_table_counts() {
        let table = ResultsTable::new(vec![
            CallResult::success("a", Duration::ZERO, "hi"),
            CallResult::failure(
                "b",
                Duration::ZERO,
                ProviderError::Timeout(Duration::from_secs(30)),
            ),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.success_count(), 1);
        assert!(table.get(1).unwrap().error().unwrap().is_timeout());
    }

    #[test]
    fn test_json_shape() {
        let table = ResultsTable::new(vec![
            CallResult::success("a", Duration::from_millis(1500), "hi"),
            CallResult::failure("b", Duration::ZERO, ProviderError::auth("bad key")),
        ]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[0]["content"], "hi");
        assert_eq!(json[0]["elapsed_secs"], 1.5);
        assert!(json[0].get("error").is_none());
        assert_eq!(json[1]["error"]["kind"], "auth");
        assert_eq!(json[1]["success"], false);
    }
}
