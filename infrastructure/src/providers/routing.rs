use super::ProviderAdapter;
use async_trait::async_trait;
use multidoc_application::LlmGateway;
use multidoc_domain::{Credential, Credentials, ModelSpec, ProviderError, ProviderKind};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Dispatch router: sends each model to the adapter of its provider family.
pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    credentials: Credentials,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, credentials: Credentials) -> Self {
        Self {
            providers,
            credentials,
        }
    }

    /// Resolve the adapter and credential for a model.
    ///
    /// The provider on the [`ModelSpec`] is already final: explicit config
    /// routing was applied when the spec was built, and otherwise it was
    /// inferred from the id with OpenAI as the named fallback.
    fn resolve(
        &self,
        model: &ModelSpec,
    ) -> Result<(&dyn ProviderAdapter, &Credential), ProviderError> {
        let kind = model.provider();
        let adapter = self
            .providers
            .iter()
            .find(|p| p.kind() == kind)
            .ok_or_else(|| {
                ProviderError::transport(format!(
                    "no {} provider registered for model {}",
                    kind,
                    model.id()
                ))
            })?;
        Ok((adapter.as_ref(), self.credentials.for_provider(kind)))
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    async fn invoke(
        &self,
        model: &ModelSpec,
        prompt: &str,
        deadline: Duration,
    ) -> Result<String, ProviderError> {
        let (adapter, credential) = self.resolve(model)?;
        debug!("Routing {} to {}", model.id(), adapter.kind());
        adapter
            .invoke(model.id(), prompt, credential, deadline)
            .await
    }
}
