//! Run settings from TOML (`[run]` section)

use multidoc_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw run configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRunConfig {
    /// Instruction prepended to every input
    pub system_prompt: Option<String>,
    /// Deadline for each provider call, in seconds
    pub timeout_secs: u64,
}

impl Default for FileRunConfig {
    fn default() -> Self {
        Self {
            system_prompt: None,
            timeout_secs: 30,
        }
    }
}

impl FileRunConfig {
    pub fn parse_timeout(&self) -> (Option<Duration>, Vec<ConfigIssue>) {
        if self.timeout_secs == 0 {
            return (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::ZeroTimeout,
                    "run.timeout_secs cannot be 0",
                )],
            );
        }
        (Some(Duration::from_secs(self.timeout_secs)), Vec::new())
    }
}
