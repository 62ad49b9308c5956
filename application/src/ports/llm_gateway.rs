//! LLM Gateway port
//!
//! Defines the interface for calling a text-generation provider.

use async_trait::async_trait;
use multidoc_domain::{ModelSpec, ProviderError};
use std::time::Duration;

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches providers.
/// Implementations (adapters) live in the infrastructure layer and pick the
/// provider client and credential for each model.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one combined prompt to `model` and return the reply text.
    ///
    /// `prompt` is never empty. `deadline` is the longest the call may take;
    /// callers also enforce it, so dropping the returned future must cancel
    /// any in-flight request.
    async fn invoke(
        &self,
        model: &ModelSpec,
        prompt: &str,
        deadline: Duration,
    ) -> Result<String, ProviderError>;
}
