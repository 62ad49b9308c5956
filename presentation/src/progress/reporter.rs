//! Progress reporting for a run

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use multidoc_application::ProgressNotifier;
use multidoc_domain::{CallResult, ModelSpec, ResultsTable};
use std::sync::Mutex;
use std::time::Duration;

/// Line for a successful call
pub fn received_line(result: &CallResult) -> String {
    format!(
        "Received response from {} ({:.2}s)",
        result.model,
        result.elapsed.as_secs_f64()
    )
}

/// Line for a failed call, written to stderr
pub fn error_line(result: &CallResult) -> Option<String> {
    result
        .error()
        .map(|e| format!("Error from {}: {}", result.model, e))
}

/// Reports progress with a bar over the fan-out and a spinner for the summary
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn dispatch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }

    fn replace_bar(&self, pb: Option<ProgressBar>) -> Option<ProgressBar> {
        match self.bar.lock() {
            Ok(mut guard) => std::mem::replace(&mut *guard, pb),
            Err(_) => None,
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_dispatch_start(&self, total_calls: usize) {
        let pb = ProgressBar::new(total_calls as u64);
        pb.set_style(Self::dispatch_style());
        pb.set_prefix("Querying models");
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(100));
        self.replace_bar(Some(pb));
    }

    fn on_call_complete(&self, result: &CallResult) {
        self.with_bar(|pb| {
            let status = if result.is_success() {
                format!("{} {}", "v".green(), result.model)
            } else {
                format!("{} {}", "x".red(), result.model)
            };
            if let Some(line) = error_line(result) {
                pb.suspend(|| eprintln!("{}", line.red()));
            }
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_dispatch_complete(&self, table: &ResultsTable) {
        if let Some(pb) = self.replace_bar(None) {
            pb.finish_with_message(format!(
                "{} ({}/{} succeeded)",
                "All models responded".green(),
                table.success_count(),
                table.len()
            ));
        }
    }

    fn on_synthesis_start(&self, model: &ModelSpec) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Summarizing");
        pb.set_message(model.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.replace_bar(Some(pb));
    }

    fn on_synthesis_complete(&self, _elapsed: Duration, success: bool) {
        if let Some(pb) = self.replace_bar(None) {
            if success {
                pb.finish_and_clear();
            } else {
                pb.abandon_with_message("failed".red().to_string());
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Success lines go to stdout and failures to stderr, one line per event.
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_dispatch_start(&self, total_calls: usize) {
        println!("Processing input with {} different AI models...", total_calls);
    }

    fn on_call_complete(&self, result: &CallResult) {
        match error_line(result) {
            Some(line) => eprintln!("{}", line.red()),
            None => println!("{}", received_line(result)),
        }
    }

    fn on_dispatch_complete(&self, _table: &ResultsTable) {
        println!("All models responded. Generating summary...");
    }
}
