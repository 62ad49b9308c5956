//! Model selection from TOML (`[models]` section)

use multidoc_domain::{ConfigIssue, ConfigIssueCode, ModelSpec, ProviderKind};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Model selection from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// participants = ["gpt-4o-2024-08-06", "gemini-2.0-flash", "claude-3-7-sonnet-20250219"]
/// synthesizer = "o1-mini"
///
/// [models.routing]
/// "my-proxy-model" = "openai"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Models queried during the fan-out, in dispatch order
    pub participants: Option<Vec<String>>,
    /// Model that writes the final summary
    pub synthesizer: Option<String>,
    /// Explicit model → provider overrides ("openai", "gemini", "anthropic")
    pub routing: HashMap<String, String>,
}

impl FileModelsConfig {
    /// Parse the routing table, collecting issues for unknown provider names.
    ///
    /// Unknown entries are dropped so the model falls back to inference.
    pub fn parse_routing(&self) -> (HashMap<String, ProviderKind>, Vec<ConfigIssue>) {
        let mut routes = HashMap::new();
        let mut issues = Vec::new();
        for (model, provider) in &self.routing {
            match ProviderKind::parse(provider) {
                Some(kind) => {
                    routes.insert(model.trim().to_string(), kind);
                }
                None => issues.push(ConfigIssue::error(
                    ConfigIssueCode::UnknownProvider {
                        model: model.clone(),
                        provider: provider.clone(),
                    },
                    format!(
                        "models.routing.{}: unknown provider '{}' (expected openai, gemini or anthropic)",
                        model, provider
                    ),
                )),
            }
        }
        (routes, issues)
    }

    /// Build a spec for `id`, honoring explicit routing before inference
    pub fn spec_for(id: &str, routes: &HashMap<String, ProviderKind>) -> ModelSpec {
        let id = id.trim();
        match routes.get(id) {
            Some(&kind) => ModelSpec::with_provider(id, kind),
            None => ModelSpec::new(id),
        }
    }

    /// Parse participant names, collecting issues for empty or repeated names
    pub fn parse_participants(
        &self,
        routes: &HashMap<String, ProviderKind>,
    ) -> (Option<Vec<ModelSpec>>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let Some(names) = self.participants.as_ref() else {
            return (None, issues);
        };

        let mut seen = HashSet::new();
        let mut models = Vec::new();
        for name in names {
            if name.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: "participants".to_string(),
                    },
                    "models.participants: model name cannot be empty in list",
                ));
                continue;
            }
            if !seen.insert(name.trim().to_string()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateModel {
                        model: name.trim().to_string(),
                    },
                    format!(
                        "models.participants: '{}' is listed more than once and will be queried once per entry",
                        name.trim()
                    ),
                ));
            }
            models.push(Self::spec_for(name, routes));
        }

        if names.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoParticipants,
                "models.participants: at least one model is required",
            ));
        }

        (Some(models), issues)
    }

    /// Parse the synthesizer name, collecting an issue when it is empty
    pub fn parse_synthesizer(
        &self,
        routes: &HashMap<String, ProviderKind>,
    ) -> (Option<ModelSpec>, Vec<ConfigIssue>) {
        match self.synthesizer.as_deref() {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: "synthesizer".to_string(),
                    },
                    "models.synthesizer: model name cannot be empty",
                )],
            ),
            Some(s) => (Some(Self::spec_for(s, routes)), Vec::new()),
        }
    }
}
