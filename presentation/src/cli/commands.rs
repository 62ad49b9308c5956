//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Only the summary and timing
    Summary,
    /// Every model's response followed by the summary
    Full,
    /// Results table and summary as JSON
    Json,
}

impl From<OutputArg> for multidoc_domain::OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Summary => Self::Summary,
            OutputArg::Full => Self::Full,
            OutputArg::Json => Self::Json,
        }
    }
}

/// How fan-out progress is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ProgressArg {
    /// One line per event
    #[default]
    Plain,
    /// A progress bar over the fan-out
    Bars,
}

/// CLI arguments for multidoc
#[derive(Parser, Debug)]
#[command(name = "multidoc")]
#[command(author, version, about = "Ask several LLMs at once and summarize their answers")]
#[command(long_about = r#"
multidoc reads a prompt from standard input, sends it to several LLMs in
parallel, then asks one summary model to combine their answers.

Configuration files are loaded from (in priority order):
1. MULTIDOC_* environment variables
2. --config <path>     Explicit config file
3. ./multidoc.toml     Project-level config
4. ~/.config/multidoc/config.toml   Global config

API keys are read from OPENAI_API_KEY, GEMINI_API_KEY and CLAUDE_API_KEY
unless set in the [providers] section of a config file.

Example:
  echo "Explain the borrow checker" | multidoc
  cat notes.md | multidoc -m gpt-4o-2024-08-06 -m gemini-2.0-flash --synthesizer o1-mini
"#)]
pub struct Cli {
    /// Models to query (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Model that writes the final summary
    #[arg(long, value_name = "MODEL")]
    pub synthesizer: Option<String>,

    /// Instruction prepended to the input
    #[arg(short, long, value_name = "TEXT")]
    pub system_prompt: Option<String>,

    /// Deadline for each model call, in seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Progress display
    #[arg(long, value_enum, default_value = "plain")]
    pub progress: ProgressArg,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
