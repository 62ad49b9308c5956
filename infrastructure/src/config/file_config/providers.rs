//! Provider configuration from TOML (`[providers]` section)

use crate::providers::{anthropic, gemini, openai};
use multidoc_domain::ProviderKind;
use serde::{Deserialize, Serialize};

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; used instead of the env var when non-empty.
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API (can point at any compatible server).
    pub base_url: String,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: openai::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; used instead of the env var when non-empty.
    pub api_key: Option<String>,
    /// Base URL for the Gemini API.
    pub base_url: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: gemini::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "CLAUDE_API_KEY").
    pub api_key_env: String,
    /// Direct API key; used instead of the env var when non-empty.
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "CLAUDE_API_KEY".to_string(),
            api_key: None,
            base_url: anthropic::DEFAULT_BASE_URL.to_string(),
            max_tokens: anthropic::DEFAULT_MAX_TOKENS,
            api_version: anthropic::DEFAULT_API_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Gemini API settings.
    pub gemini: FileGeminiConfig,
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
}

impl FileProvidersConfig {
    /// Where the key for `kind` comes from: `(api_key_env, api_key)`
    pub fn key_source(&self, kind: ProviderKind) -> (&str, Option<&str>) {
        match kind {
            ProviderKind::OpenAi => (&self.openai.api_key_env, self.openai.api_key.as_deref()),
            ProviderKind::Gemini => (&self.gemini.api_key_env, self.gemini.api_key.as_deref()),
            ProviderKind::Claude => (
                &self.anthropic.api_key_env,
                self.anthropic.api_key.as_deref(),
            ),
        }
    }
}
