//! Dispatch All use case
//!
//! Sends the same combined prompt to every model concurrently and gathers
//! the answers into a [`ResultsTable`] in dispatch order.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use multidoc_domain::{
    CallResult, ModelSpec, PromptTemplate, ProviderError, ResultsTable, UserInput,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Input for the DispatchAll use case
#[derive(Debug, Clone)]
pub struct DispatchAllInput {
    /// Models to query; slot `i` of the result belongs to `models[i]`
    pub models: Vec<ModelSpec>,
    /// Instruction prepended to the user input
    pub system_prompt: String,
    /// The validated user input
    pub input: UserInput,
    /// Deadline for each call
    pub call_timeout: Duration,
}

/// Use case for the concurrent fan-out
///
/// One task per model runs on the tokio runtime. Each task owns its own
/// result and hands it back through the [`JoinSet`], so no table is shared
/// between tasks.
pub struct DispatchAllUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> DispatchAllUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the fan-out with default (no-op) progress
    pub async fn execute(&self, input: DispatchAllInput) -> ResultsTable {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the fan-out, reporting each completion as it happens.
    ///
    /// Returns only after every call has finished, failed or timed out.
    pub async fn execute_with_progress(
        &self,
        input: DispatchAllInput,
        progress: &dyn ProgressNotifier,
    ) -> ResultsTable {
        let total = input.models.len();
        info!("Dispatching input to {} models", total);
        progress.on_dispatch_start(total);

        let prompt: Arc<str> = Arc::from(PromptTemplate::combine(
            &input.system_prompt,
            input.input.content(),
        ));
        let mut join_set = JoinSet::new();

        for (index, model) in input.models.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let model = model.clone();
            let prompt = Arc::clone(&prompt);
            let deadline = input.call_timeout;

            join_set.spawn(async move {
                let result = Self::call_model(gateway.as_ref(), &model, &prompt, deadline).await;
                (index, result)
            });
        }

        let mut slots: Vec<Option<CallResult>> = (0..total).map(|_| None).collect();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    match &result.outcome {
                        Ok(_) => info!(
                            "Model {} responded in {:.2}s",
                            result.model,
                            result.elapsed.as_secs_f64()
                        ),
                        Err(e) => warn!("Model {} failed: {}", result.model, e),
                    }
                    progress.on_call_complete(&result);
                    slots[index] = Some(result);
                }
                Err(e) => {
                    // The slot is filled below, once every task has finished.
                    warn!("Task join error: {}", e);
                }
            }
        }

        let results = slots
            .into_iter()
            .zip(&input.models)
            .map(|(slot, model)| {
                slot.unwrap_or_else(|| {
                    let result = CallResult::failure(
                        model.id(),
                        Duration::ZERO,
                        ProviderError::transport("worker task did not complete"),
                    );
                    progress.on_call_complete(&result);
                    result
                })
            })
            .collect();

        let table = ResultsTable::new(results);
        debug!(
            "Fan-out complete: {}/{} succeeded",
            table.success_count(),
            table.len()
        );
        progress.on_dispatch_complete(&table);
        table
    }

    /// Call one model, timing only the provider call.
    ///
    /// The gateway future is dropped when the deadline elapses, which
    /// cancels the underlying request.
    async fn call_model(
        gateway: &G,
        model: &ModelSpec,
        prompt: &str,
        deadline: Duration,
    ) -> CallResult {
        let start = Instant::now();
        let outcome = tokio::time::timeout(deadline, gateway.invoke(model, prompt, deadline))
            .await
            .unwrap_or(Err(ProviderError::Timeout(deadline)));

        CallResult {
            model: model.id().to_string(),
            elapsed: start.elapsed(),
            outcome,
        }
    }
}
