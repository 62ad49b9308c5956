//! Output format value object

use serde::{Deserialize, Serialize};

/// How the final result of a run is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the summary section (default)
    #[default]
    Summary,
    /// Every model's response followed by the summary
    Full,
    /// Results table and summary as JSON
    Json,
}
