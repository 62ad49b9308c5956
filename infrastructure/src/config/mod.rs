//! Configuration loading for multidoc
//!
//! This module handles file I/O, merging of configuration from multiple
//! sources, credential resolution and first-run setup.
//! The priority order (highest to lowest):
//!
//! 1. `MULTIDOC_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./multidoc.toml` or `./.multidoc.toml`
//! 4. Global: `$XDG_CONFIG_HOME/multidoc/config.toml`
//! 5. Default values

mod bootstrap;
mod credentials;
mod file_config;
mod loader;

pub use bootstrap::{Bootstrap, CONFIG_TEMPLATE, ensure_config_dir};
pub use credentials::{ConfigError, credentials_from_env, resolve_credentials};
pub use file_config::{
    FileAnthropicConfig, FileConfig, FileGeminiConfig, FileModelsConfig, FileOpenAiConfig,
    FileOutputConfig, FileProvidersConfig, FileRunConfig,
};
pub use loader::ConfigLoader;
