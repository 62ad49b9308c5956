//! First-run setup of the global config directory

use super::credentials::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Template written on first run
pub const CONFIG_TEMPLATE: &str = r#"# multidoc configuration
#
# Add your API keys below, or leave them empty and export the variables
# named by api_key_env instead.

[providers.openai]
api_key = ""
# api_key_env = "OPENAI_API_KEY"

[providers.gemini]
api_key = ""
# api_key_env = "GEMINI_API_KEY"

[providers.anthropic]
api_key = ""
# api_key_env = "CLAUDE_API_KEY"
# max_tokens = 1000

# [models]
# participants = ["gpt-4o-2024-08-06", "o3-mini", "o1-mini", "gemini-2.0-flash", "claude-3-7-sonnet-20250219"]
# synthesizer = "o1-mini"

# [run]
# system_prompt = "Process the following input:"
# timeout_secs = 30
"#;

/// Result of [`ensure_config_dir`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bootstrap {
    /// The directory was already there; nothing was written
    Existing,
    /// The directory was missing and a template was written to this path
    Created(PathBuf),
}

/// Create `dir` with a template `config.toml` if it does not exist yet.
pub fn ensure_config_dir(dir: &Path) -> Result<Bootstrap, ConfigError> {
    if dir.exists() {
        return Ok(Bootstrap::Existing);
    }

    let bootstrap_error = |source| ConfigError::Bootstrap {
        path: dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(bootstrap_error)?;
    let path = dir.join("config.toml");
    fs::write(&path, CONFIG_TEMPLATE).map_err(bootstrap_error)?;

    info!("Created default config at {}", path.display());
    Ok(Bootstrap::Created(path))
}
