//! Run configuration - everything a run needs besides the input text.
//!
//! Built once at startup and shared read-only with the use cases.

use multidoc_domain::{ModelSpec, PromptTemplate};
use std::time::Duration;

/// Default deadline for each provider call.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameters of a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Models queried during the fan-out, in dispatch order.
    pub models: Vec<ModelSpec>,
    /// Model that writes the final summary.
    pub synthesizer: ModelSpec,
    /// Instruction prepended to the user input.
    pub system_prompt: String,
    /// Deadline applied to every provider call, including the summary.
    pub call_timeout: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            models: ModelSpec::default_models(),
            synthesizer: ModelSpec::default_synthesizer(),
            system_prompt: PromptTemplate::DEFAULT_SYSTEM_PROMPT.to_string(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }
}

impl RunConfig {
    // ==================== Builder Methods ====================

    pub fn with_models(mut self, models: Vec<ModelSpec>) -> Self {
        self.models = models;
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: ModelSpec) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multidoc_domain::ProviderKind;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.models.len(), 5);
        assert_eq!(config.synthesizer.id(), "o1-mini");
        assert_eq!(config.synthesizer.provider(), ProviderKind::OpenAi);
        assert_eq!(config.system_prompt, "Process the following input:");
        assert_eq!(config.call_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_chain() {
        let config = RunConfig::default()
            .with_models(vec![ModelSpec::new("gemini-2.0-flash")])
            .with_call_timeout(Duration::from_secs(5));
        assert_eq!(config.models.len(), 1);
        assert_eq!(config.call_timeout, Duration::from_secs(5));
    }
}
