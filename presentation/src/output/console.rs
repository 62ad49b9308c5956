//! Console output formatter for run results

use colored::Colorize;
use multidoc_application::RunSummaryOutput;
use multidoc_domain::OutputFormat;

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format `output` in the requested format
    pub fn render(output: &RunSummaryOutput, format: OutputFormat) -> String {
        match format {
            OutputFormat::Summary => Self::format_summary(output),
            OutputFormat::Full => Self::format_full(output),
            OutputFormat::Json => Self::format_json(output),
        }
    }

    /// Summary section followed by the total execution time
    pub fn format_summary(output: &RunSummaryOutput) -> String {
        format!(
            "\n--- Summary ({:.2}s) ---\n{}\n\nTotal execution time: {:.2} seconds\n",
            output.synthesis.elapsed.as_secs_f64(),
            output.synthesis.text,
            output.total_elapsed.as_secs_f64()
        )
    }

    /// Every model's response, in dispatch order, then the summary
    pub fn format_full(output: &RunSummaryOutput) -> String {
        let mut text = String::new();

        text.push_str(&format!("\n{}\n", "=== Model Responses ===".cyan().bold()));
        for result in &output.results {
            let header = format!(
                "── {} ({:.2}s) ──",
                result.model,
                result.elapsed.as_secs_f64()
            );
            match &result.outcome {
                Ok(content) => {
                    text.push_str(&format!("\n{}\n{}\n", header.yellow().bold(), content));
                }
                Err(e) => {
                    text.push_str(&format!("\n{}\nError: {}\n", header.red().bold(), e));
                }
            }
        }

        text.push_str(&Self::format_summary(output));
        text
    }

    /// Format as JSON
    pub fn format_json(output: &RunSummaryOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multidoc_application::Synthesis;
    use multidoc_domain::{CallResult, ProviderError, ResultsTable};
    use std::time::Duration;

    fn sample() -> RunSummaryOutput {
        RunSummaryOutput {
            results: ResultsTable::new(vec![
                CallResult::success("o3-mini", Duration::from_millis(1500), "first answer"),
                CallResult::failure(
                    "gemini-2.0-flash",
                    Duration::from_millis(20),
                    ProviderError::auth("bad key"),
                ),
            ]),
            synthesis: Synthesis {
                model: "o1-mini".to_string(),
                text: "combined view".to_string(),
                elapsed: Duration::from_millis(2250),
            },
            total_elapsed: Duration::from_millis(4000),
        }
    }

    #[test]
    fn test_summary_layout() {
        assert_eq!(
            ConsoleFormatter::format_summary(&sample()),
            "\n--- Summary (2.25s) ---\ncombined view\n\nTotal execution time: 4.00 seconds\n"
        );
    }

    #[test]
    fn test_full_lists_every_model_in_order() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_full(&sample());

        let first = text.find("── o3-mini (1.50s) ──").unwrap();
        let second = text.find("── gemini-2.0-flash (0.02s) ──").unwrap();
        assert!(first < second);
        assert!(text.contains("first answer"));
        assert!(text.contains("Error: authentication failed: bad key"));
        assert!(text.ends_with("Total execution time: 4.00 seconds\n"));
    }

    #[test]
    fn test_json_output() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&sample())).unwrap();
        assert_eq!(json["results"][0]["model"], "o3-mini");
        assert_eq!(json["results"][1]["success"], false);
        assert_eq!(json["synthesis"]["text"], "combined view");
        assert_eq!(json["total_secs"], 4.0);
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let output = sample();
        assert_eq!(
            ConsoleFormatter::render(&output, OutputFormat::Summary),
            ConsoleFormatter::format_summary(&output)
        );
        assert!(ConsoleFormatter::render(&output, OutputFormat::Json).starts_with('{'));
    }
}
