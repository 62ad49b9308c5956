//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod models;
mod output;
mod providers;
mod run;

pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use providers::{FileAnthropicConfig, FileGeminiConfig, FileOpenAiConfig, FileProvidersConfig};
pub use run::FileRunConfig;

use multidoc_application::RunConfig;
use multidoc_domain::{ConfigIssue, ModelSpec, ProviderKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Fan-out and summary model selection
    pub models: FileModelsConfig,
    /// Prompt and deadline settings
    pub run: FileRunConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Provider keys and endpoints
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// It checks:
    /// 1. Unknown provider names in `[models.routing]`
    /// 2. Empty model names and an empty participant list
    /// 3. A zero per-call timeout
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let (routes, routing_issues) = self.models.parse_routing();
        issues.extend(routing_issues);
        issues.extend(self.models.parse_participants(&routes).1);
        issues.extend(self.models.parse_synthesizer(&routes).1);
        issues.extend(self.run.parse_timeout().1);

        issues
    }

    /// Explicit routing table, with unknown entries dropped
    pub fn routes(&self) -> HashMap<String, ProviderKind> {
        self.models.parse_routing().0
    }

    /// Build a spec for a model named outside the file (e.g. on the command
    /// line), honoring `[models.routing]`
    pub fn model_spec(&self, id: &str) -> ModelSpec {
        FileModelsConfig::spec_for(id, &self.routes())
    }

    /// Convert to the run configuration, falling back to built-in defaults
    /// for anything unset or invalid
    pub fn to_run_config(&self) -> RunConfig {
        let routes = self.routes();
        let mut config = RunConfig::default();

        if let (Some(models), _) = self.models.parse_participants(&routes)
            && !models.is_empty()
        {
            config = config.with_models(models);
        }
        if let (Some(synthesizer), _) = self.models.parse_synthesizer(&routes) {
            config = config.with_synthesizer(synthesizer);
        }
        if let Some(prompt) = self.run.system_prompt.as_ref() {
            config = config.with_system_prompt(prompt.clone());
        }
        if let (Some(timeout), _) = self.run.parse_timeout() {
            config = config.with_call_timeout(timeout);
        }

        config
    }
}
