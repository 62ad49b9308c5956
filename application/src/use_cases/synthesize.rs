//! Synthesize use case
//!
//! Folds a complete [`ResultsTable`] into one summary prompt and asks the
//! summary model to answer it.

use crate::ports::llm_gateway::LlmGateway;
use multidoc_domain::{ModelSpec, PromptTemplate, ProviderError, ResultsTable, SynthesisPrompt};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// The summary produced from a fan-out
#[derive(Debug, Clone, Serialize)]
pub struct Synthesis {
    /// Model that wrote the summary
    pub model: String,
    /// Summary text
    pub text: String,
    /// Time spent in the summary call
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Use case for the final summary call
pub struct SynthesizeUseCase<G: LlmGateway> {
    gateway: Arc<G>,
}

impl<G: LlmGateway> SynthesizeUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Build the summary prompt for `table`.
    ///
    /// Failed calls are kept as `Error from ...` lines.
    pub fn build_prompt(table: &ResultsTable, models: &[ModelSpec]) -> SynthesisPrompt {
        PromptTemplate::synthesis_prompt(table, models)
    }

    /// Issue exactly one summary call under `deadline`.
    pub async fn execute(
        &self,
        table: &ResultsTable,
        models: &[ModelSpec],
        synthesizer: &ModelSpec,
        deadline: Duration,
    ) -> Result<Synthesis, ProviderError> {
        let prompt = Self::build_prompt(table, models);
        info!(
            "Synthesizing {} results with {}",
            table.len(),
            synthesizer
        );
        debug!("Summary prompt is {} bytes", prompt.as_str().len());

        let start = Instant::now();
        let text = tokio::time::timeout(
            deadline,
            self.gateway.invoke(synthesizer, prompt.as_str(), deadline),
        )
        .await
        .unwrap_or(Err(ProviderError::Timeout(deadline)))
        .inspect_err(|e| warn!("Summary call to {} failed: {}", synthesizer, e))?;

        Ok(Synthesis {
            model: synthesizer.id().to_string(),
            text,
            elapsed: start.elapsed(),
        })
    }
}
