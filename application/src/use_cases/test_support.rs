//! Scripted gateway and progress doubles shared by the use case tests.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use multidoc_domain::{CallResult, ModelSpec, ProviderError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// What a scripted model does when invoked.
#[derive(Clone)]
pub(crate) enum Behavior {
    Reply { text: String, delay: Duration },
    Fail { error: ProviderError, delay: Duration },
    Hang,
    Panic,
}

impl Behavior {
    pub(crate) fn reply(text: &str) -> Self {
        Self::Reply {
            text: text.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn reply_after(text: &str, delay: Duration) -> Self {
        Self::Reply {
            text: text.to_string(),
            delay,
        }
    }

    pub(crate) fn fail(error: ProviderError) -> Self {
        Self::Fail {
            error,
            delay: Duration::ZERO,
        }
    }
}

/// Gateway whose answers are scripted per model id.
///
/// Models without a script reply with `"response from {id}"`.
pub(crate) struct ScriptedGateway {
    scripts: HashMap<String, Behavior>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with(mut self, model: &str, behavior: Behavior) -> Self {
        self.scripts.insert(model.to_string(), behavior);
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received by `model`, in call order
    pub(crate) fn prompts_for(&self, model: &str) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == model)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn invoke(
        &self,
        model: &ModelSpec,
        prompt: &str,
        _deadline: Duration,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((model.id().to_string(), prompt.to_string()));

        match self.scripts.get(model.id()).cloned() {
            None => Ok(format!("response from {}", model.id())),
            Some(Behavior::Reply { text, delay }) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            Some(Behavior::Fail { error, delay }) => {
                tokio::time::sleep(delay).await;
                Err(error)
            }
            Some(Behavior::Hang) => {
                std::future::pending::<Result<String, ProviderError>>().await
            }
            Some(Behavior::Panic) => panic!("scripted panic for {}", model.id()),
        }
    }
}

/// Progress notifier that records completions in arrival order.
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub(crate) started: Mutex<Option<usize>>,
    pub(crate) completed: Mutex<Vec<String>>,
    pub(crate) synthesis: Mutex<Vec<bool>>,
}

impl ProgressNotifier for RecordingProgress {
    fn on_dispatch_start(&self, total_calls: usize) {
        *self.started.lock().unwrap() = Some(total_calls);
    }

    fn on_call_complete(&self, result: &CallResult) {
        self.completed.lock().unwrap().push(result.model.clone());
    }

    fn on_synthesis_complete(&self, _elapsed: Duration, success: bool) {
        self.synthesis.lock().unwrap().push(success);
    }
}

pub(crate) fn specs(ids: &[&str]) -> Vec<ModelSpec> {
    ids.iter().map(|id| ModelSpec::new(*id)).collect()
}
