//! Run Summary use case
//!
//! Orchestrates a full run: validate the input, fan it out to every model,
//! then summarize all answers with the synthesizer model.

use crate::config::RunConfig;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::dispatch_all::{DispatchAllInput, DispatchAllUseCase};
use crate::use_cases::synthesize::{Synthesis, SynthesizeUseCase};
use multidoc_domain::{DomainError, ProviderError, ResultsTable, UserInput};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::info;

/// Errors that end a run
#[derive(Error, Debug)]
pub enum RunSummaryError {
    /// Input rejected before any provider was called
    #[error("Error: {0}")]
    Input(#[from] DomainError),

    /// The summary call failed after the fan-out completed
    #[error("Error getting final output: {0}")]
    Synthesis(ProviderError),
}

/// Output of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummaryOutput {
    /// Every fan-out result, in dispatch order
    pub results: ResultsTable,
    /// The final summary
    pub synthesis: Synthesis,
    /// Wall-clock time of the whole run
    #[serde(rename = "total_secs", serialize_with = "serialize_secs")]
    pub total_elapsed: Duration,
}

fn serialize_secs<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Use case for a complete run
pub struct RunSummaryUseCase<G: LlmGateway + 'static> {
    dispatch: DispatchAllUseCase<G>,
    synthesize: SynthesizeUseCase<G>,
}

impl<G: LlmGateway + 'static> RunSummaryUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            dispatch: DispatchAllUseCase::new(Arc::clone(&gateway)),
            synthesize: SynthesizeUseCase::new(gateway),
        }
    }

    /// Execute the run with default (no-op) progress
    pub async fn execute(
        &self,
        raw_input: &str,
        config: &RunConfig,
    ) -> Result<RunSummaryOutput, RunSummaryError> {
        self.execute_with_progress(raw_input, config, &NoProgress)
            .await
    }

    /// Execute the run with progress callbacks.
    ///
    /// Blank input and an empty model list are rejected before any provider
    /// is called. Fan-out failures never end the run; only a failed summary
    /// call does.
    pub async fn execute_with_progress(
        &self,
        raw_input: &str,
        config: &RunConfig,
        progress: &dyn ProgressNotifier,
    ) -> Result<RunSummaryOutput, RunSummaryError> {
        let start = Instant::now();

        let input = UserInput::try_new(raw_input)?;
        if config.models.is_empty() {
            return Err(DomainError::NoModels.into());
        }

        info!("Starting run with {} models", config.models.len());

        let results = self
            .dispatch
            .execute_with_progress(
                DispatchAllInput {
                    models: config.models.clone(),
                    system_prompt: config.system_prompt.clone(),
                    input,
                    call_timeout: config.call_timeout,
                },
                progress,
            )
            .await;

        progress.on_synthesis_start(&config.synthesizer);
        let synthesis_start = Instant::now();
        let synthesis = match self
            .synthesize
            .execute(
                &results,
                &config.models,
                &config.synthesizer,
                config.call_timeout,
            )
            .await
        {
            Ok(synthesis) => {
                progress.on_synthesis_complete(synthesis.elapsed, true);
                synthesis
            }
            Err(e) => {
                progress.on_synthesis_complete(synthesis_start.elapsed(), false);
                return Err(RunSummaryError::Synthesis(e));
            }
        };

        let total_elapsed = start.elapsed();
        info!("Run finished in {:.2}s", total_elapsed.as_secs_f64());

        Ok(RunSummaryOutput {
            results,
            synthesis,
            total_elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{Behavior, RecordingProgress, ScriptedGateway, specs};
    use multidoc_domain::ModelSpec;

    fn config(models: &[&str]) -> RunConfig {
        RunConfig::default().with_models(specs(models))
    }

    #[tokio::test]
    async fn blank_input_makes_no_calls() {
        let gateway = Arc::new(ScriptedGateway::new());
        let use_case = RunSummaryUseCase::new(Arc::clone(&gateway));

        for raw in ["", "   ", "\n\t\n"] {
            let err = use_case
                .execute(raw, &RunConfig::default())
                .await
                .unwrap_err();
            assert!(matches!(err, RunSummaryError::Input(DomainError::EmptyInput)));
        }

        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_model_list_is_rejected() {
        let gateway = Arc::new(ScriptedGateway::new());
        let use_case = RunSummaryUseCase::new(Arc::clone(&gateway));

        let err = use_case
            .execute("hello", &RunConfig::default().with_models(Vec::new()))
            .await
            .unwrap_err();

        assert!(matches!(err, RunSummaryError::Input(DomainError::NoModels)));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn one_failed_provider_still_reaches_synthesis() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .with("b", Behavior::fail(ProviderError::transport("network unreachable")))
                .with("o1-mini", Behavior::reply("final summary")),
        );
        let use_case = RunSummaryUseCase::new(Arc::clone(&gateway));
        let progress = RecordingProgress::default();

        let output = use_case
            .execute_with_progress("compare these", &config(&["a", "b", "c"]), &progress)
            .await
            .unwrap();

        assert_eq!(output.synthesis.text, "final summary");
        assert_eq!(output.results.len(), 3);
        assert_eq!(output.results.success_count(), 2);

        let summary_prompt = &gateway.prompts_for("o1-mini")[0];
        assert!(summary_prompt.contains("Output from a ("));
        assert!(summary_prompt.contains("): response from a\n\n"));
        assert!(summary_prompt.contains("): Error from b: network unreachable\n\n"));
        assert!(summary_prompt.contains("): response from c\n\n"));
        assert_eq!(*progress.synthesis.lock().unwrap(), vec![true]);
    }

    #[tokio::test]
    async fn synthesis_failure_is_fatal_after_fan_out() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .with("o1-mini", Behavior::fail(ProviderError::empty_response("no choices"))),
        );
        let use_case = RunSummaryUseCase::new(Arc::clone(&gateway));
        let progress = RecordingProgress::default();

        let err = use_case
            .execute_with_progress("hello", &config(&["a", "b"]), &progress)
            .await
            .unwrap_err();

        assert!(matches!(err, RunSummaryError::Synthesis(_)));
        assert_eq!(err.to_string(), "Error getting final output: no choices");
        // Fan-out ran and was reported before the summary failed.
        assert_eq!(progress.completed.lock().unwrap().len(), 2);
        assert_eq!(*progress.synthesis.lock().unwrap(), vec![false]);
        assert_eq!(gateway.call_count(), 3);
    }

    #[tokio::test]
    async fn custom_synthesizer_is_used() {
        let gateway = Arc::new(ScriptedGateway::new());
        let use_case = RunSummaryUseCase::new(Arc::clone(&gateway));
        let config = config(&["a"]).with_synthesizer(ModelSpec::new("gpt-4o-2024-08-06"));

        let output = use_case.execute("hello", &config).await.unwrap();

        assert_eq!(output.synthesis.model, "gpt-4o-2024-08-06");
        assert_eq!(output.synthesis.text, "response from gpt-4o-2024-08-06");
        assert!(gateway.prompts_for("o1-mini").is_empty());
    }

    #[tokio::test]
    async fn output_serializes_to_json() {
        let gateway = Arc::new(ScriptedGateway::new());
        let use_case = RunSummaryUseCase::new(gateway);

        let output = use_case.execute("hello", &config(&["a"])).await.unwrap();
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["results"][0]["model"], "a");
        assert_eq!(json["synthesis"]["model"], "o1-mini");
        assert!(json["total_secs"].is_number());
    }
}
