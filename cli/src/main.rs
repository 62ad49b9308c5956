//! CLI entrypoint for multidoc
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use multidoc_application::{NoProgress, ProgressNotifier, RunConfig, RunSummaryUseCase};
use multidoc_domain::{OutputFormat, Severity};
use multidoc_infrastructure::{
    Bootstrap, ConfigLoader, FileConfig, RoutingGateway, build_adapters, credentials_from_env,
    ensure_config_dir,
};
use multidoc_presentation::{Cli, ConsoleFormatter, ProgressArg, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting multidoc");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(dir) = ConfigLoader::global_config_dir()
            && let Bootstrap::Created(path) = ensure_config_dir(&dir)?
        {
            println!(
                "Created default config at: {}\nPlease add your API keys to this file.",
                path.display()
            );
            return Ok(ExitCode::SUCCESS);
        }
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    check_config(&config)?;

    if cli.no_color || !config.output.color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let key_file = cli
        .config
        .clone()
        .or_else(ConfigLoader::global_config_path)
        .unwrap_or_else(|| PathBuf::from("multidoc.toml"));
    let credentials = credentials_from_env(&config.providers, &key_file)?;

    let run_config = apply_overrides(&cli, &config)?;
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Input ===
    let mut raw = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut raw)
        .await
        .context("Error reading from stdin")?;
    let input = decode_input(&raw);

    // === Dependency Injection ===
    let client = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;
    let gateway = Arc::new(RoutingGateway::new(
        build_adapters(&config.providers, client),
        credentials,
    ));
    let use_case = RunSummaryUseCase::new(gateway);

    let progress: Box<dyn ProgressNotifier> = match (cli.quiet, cli.progress) {
        (true, _) => Box::new(NoProgress),
        (false, ProgressArg::Plain) => Box::new(SimpleProgress),
        (false, ProgressArg::Bars) => Box::new(ProgressReporter::new()),
    };

    match use_case
        .execute_with_progress(&input, &run_config, progress.as_ref())
        .await
    {
        Ok(output) => {
            print!("{}", ConsoleFormatter::render(&output, format));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Decode stdin as text; invalid UTF-8 sequences become U+FFFD
fn decode_input(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Report config issues; any error aborts startup
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = 0;
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => {
                eprintln!("config error: {}", issue.message);
                errors += 1;
            }
        }
    }
    if errors > 0 {
        bail!("Invalid configuration ({} error(s))", errors);
    }
    Ok(())
}

/// Layer command-line flags over the file configuration
fn apply_overrides(cli: &Cli, config: &FileConfig) -> Result<RunConfig> {
    let mut run_config = config.to_run_config();

    if !cli.model.is_empty() {
        if cli.model.iter().any(|m| m.trim().is_empty()) {
            bail!("Model name cannot be empty");
        }
        let models = cli.model.iter().map(|m| config.model_spec(m)).collect();
        run_config = run_config.with_models(models);
    }
    if let Some(synthesizer) = &cli.synthesizer {
        if synthesizer.trim().is_empty() {
            bail!("Synthesizer name cannot be empty");
        }
        run_config = run_config.with_synthesizer(config.model_spec(synthesizer));
    }
    if let Some(prompt) = &cli.system_prompt {
        run_config = run_config.with_system_prompt(prompt.clone());
    }
    match cli.timeout {
        Some(0) => bail!("--timeout must be at least 1 second"),
        Some(secs) => run_config = run_config.with_call_timeout(Duration::from_secs(secs)),
        None => {}
    }

    info!(
        "Models: {}; synthesizer: {}; timeout: {}s",
        run_config
            .models
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        run_config.synthesizer,
        run_config.call_timeout.as_secs()
    );

    Ok(run_config)
}
