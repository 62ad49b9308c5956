//! Credential resolution
//!
//! Every provider key is resolved once at startup, from the config file's
//! `api_key` or from the environment variable named by `api_key_env`.

use super::file_config::FileProvidersConfig;
use multidoc_domain::{Credential, Credentials, ProviderKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while preparing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing required API keys. Please set {} in the environment or in {}",
        .missing.join(", "),
        .config_path.display()
    )]
    MissingCredentials {
        missing: Vec<String>,
        config_path: PathBuf,
    },

    #[error("Error creating config directory {}: {source}", .path.display())]
    Bootstrap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve all three credentials, reading variables through `lookup`.
///
/// A non-empty `api_key` in the file wins over the environment. Every
/// missing key is reported at once.
pub fn resolve_credentials<F>(
    providers: &FileProvidersConfig,
    config_path: &Path,
    lookup: F,
) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing = Vec::new();
    let mut resolve = |kind: ProviderKind| {
        let (env_name, inline) = providers.key_source(kind);
        let credential = inline
            .and_then(Credential::new)
            .or_else(|| lookup(env_name).and_then(Credential::new));
        if credential.is_none() {
            missing.push(env_name.to_string());
        }
        credential
    };

    let openai = resolve(ProviderKind::OpenAi);
    let gemini = resolve(ProviderKind::Gemini);
    let claude = resolve(ProviderKind::Claude);

    match (openai, gemini, claude) {
        (Some(openai), Some(gemini), Some(claude)) => Ok(Credentials {
            openai,
            gemini,
            claude,
        }),
        _ => Err(ConfigError::MissingCredentials {
            missing,
            config_path: config_path.to_path_buf(),
        }),
    }
}

/// Resolve credentials from the process environment
pub fn credentials_from_env(
    providers: &FileProvidersConfig,
    config_path: &Path,
) -> Result<Credentials, ConfigError> {
    resolve_credentials(providers, config_path, |name| std::env::var(name).ok())
}
