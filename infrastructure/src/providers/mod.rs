//! Provider adapters and the routing gateway.
//!
//! Each adapter speaks one provider's HTTP API and reduces its reply to
//! plain text or a [`ProviderError`]. [`routing::RoutingGateway`] picks the
//! adapter and credential for each model.

pub mod anthropic;
pub mod gemini;
mod http;
pub mod openai;
pub mod routing;

use crate::config::FileProvidersConfig;
use async_trait::async_trait;
use multidoc_domain::{Credential, ProviderError, ProviderKind};
use std::sync::Arc;
use std::time::Duration;

/// One backing text-generation service
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Send `prompt` to `model` and return non-empty reply text.
    ///
    /// `prompt` is the combined instruction and user text; adapters that
    /// need the two apart use [`multidoc_domain::PromptTemplate::split`].
    async fn invoke(
        &self,
        model: &str,
        prompt: &str,
        credential: &Credential,
        deadline: Duration,
    ) -> Result<String, ProviderError>;
}

/// Build one adapter per provider family from the `[providers]` section.
///
/// All adapters share `client` and its connection pool.
pub fn build_adapters(
    config: &FileProvidersConfig,
    client: reqwest::Client,
) -> Vec<Arc<dyn ProviderAdapter>> {
    vec![
        Arc::new(openai::OpenAiAdapter::new(
            client.clone(),
            config.openai.base_url.as_str(),
        )),
        Arc::new(gemini::GeminiAdapter::new(
            client.clone(),
            config.gemini.base_url.as_str(),
        )),
        Arc::new(
            anthropic::AnthropicAdapter::new(client, config.anthropic.base_url.as_str())
                .with_api_version(config.anthropic.api_version.as_str())
                .with_max_tokens(config.anthropic.max_tokens),
        ),
    ]
}
