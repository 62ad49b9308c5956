//! Prompt conventions shared by the fan-out and the summary step

use crate::core::model::ModelSpec;
use crate::dispatch::value_objects::ResultsTable;

/// Number of leading space-separated tokens treated as the instruction
/// when a provider needs instruction and user content apart.
const INSTRUCTION_TOKENS: usize = 3;

/// A combined prompt split into its instruction and user content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptParts<'a> {
    pub instruction: String,
    pub user: &'a str,
}

/// The combined prompt handed to the summary model.
///
/// Built once from a complete [`ResultsTable`] and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisPrompt(String);

impl SynthesisPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SynthesisPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction prepended to the user input for every model
    pub const DEFAULT_SYSTEM_PROMPT: &'static str = "Process the following input:";

    /// First line of the summary prompt
    pub const SUMMARY_HEADER: &'static str =
        "Summarize the following outputs from different AI models:";

    /// Join the instruction and the user input into one prompt
    pub fn combine(system_prompt: &str, input: &str) -> String {
        format!("{} {}", system_prompt, input)
    }

    /// Split a combined prompt into instruction and user content.
    ///
    /// The instruction is the first three single-space-separated tokens and
    /// the user content is everything after the third space, untouched. This
    /// only recovers the original pair when the instruction itself has
    /// exactly three words; the four-word [`Self::DEFAULT_SYSTEM_PROMPT`]
    /// leaves its last word (`input:`) at the start of the user content.
    pub fn split(prompt: &str) -> PromptParts<'_> {
        let mut pieces = prompt.splitn(INSTRUCTION_TOKENS + 1, ' ');
        let instruction = pieces
            .by_ref()
            .take(INSTRUCTION_TOKENS)
            .collect::<Vec<_>>()
            .join(" ");
        let user = pieces.next().unwrap_or("");
        PromptParts { instruction, user }
    }

    /// Build the summary prompt from every call result, in dispatch order.
    ///
    /// Model names come from `models` by index. Durations are printed with
    /// two decimals, so equal tables always produce equal prompts.
    pub fn synthesis_prompt(table: &ResultsTable, models: &[ModelSpec]) -> SynthesisPrompt {
        let mut prompt = format!("{}\n", Self::SUMMARY_HEADER);

        for (i, result) in table.iter().enumerate() {
            let name = models.get(i).map(ModelSpec::id).unwrap_or(&result.model);
            prompt.push_str(&format!(
                "Output from {} ({:.2}s): {}\n\n",
                name,
                result.elapsed.as_secs_f64(),
                result.display_text()
            ));
        }

        SynthesisPrompt(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ProviderError;
    use crate::dispatch::value_objects::CallResult;
    use std::time::Duration;

    #[test]
    fn test_combine_and_split() {
        let prompt = PromptTemplate::combine(
            PromptTemplate::DEFAULT_SYSTEM_PROMPT,
            "What is  ownership?\nExplain.",
        );
        let parts = PromptTemplate::split(&prompt);
        assert_eq!(parts.instruction, "Process the following");
        assert_eq!(parts.user, "input: What is  ownership?\nExplain.");
    }

    #[test]
    fn test_split_short_prompt() {
        let parts = PromptTemplate::split("Summarize this");
        assert_eq!(parts.instruction, "Summarize this");
        assert_eq!(parts.user, "");
    }

    #[test]
    fn test_split_three_word_instruction_round_trips() {
        let prompt = PromptTemplate::combine("Answer this briefly", "hi there");
        let parts = PromptTemplate::split(&prompt);
        assert_eq!(parts.instruction, "Answer this briefly");
        assert_eq!(parts.user, "hi there");
    }

    #[test]
    fn test_split_exactly_three_tokens() {
        let parts = PromptTemplate::split("one two three");
        assert_eq!(parts.instruction, "one two three");
        assert_eq!(parts.user, "");
    }

    #[test]
    fn test_split_uses_first_three_tokens_regardless_of_instruction() {
        // A four-word instruction leaks its last word into the user content.
        let prompt = PromptTemplate::combine("Please process this input:", "hello");
        let parts = PromptTemplate::split(&prompt);
        assert_eq!(parts.instruction, "Please process this");
        assert_eq!(parts.user, "input: hello");
    }

    #[test]
    fn test_synthesis_prompt_format() {
        let models = vec![ModelSpec::new("gpt-4o-2024-08-06"), ModelSpec::new("o3-mini")];
        let table = ResultsTable::new(vec![
            CallResult::success("gpt-4o-2024-08-06", Duration::from_millis(1234), "Answer A"),
            CallResult::failure(
                "o3-mini",
                Duration::from_millis(50),
                ProviderError::transport("connection reset"),
            ),
        ]);

        let prompt = PromptTemplate::synthesis_prompt(&table, &models);
        assert_eq!(
            prompt.as_str(),
            "Summarize the following outputs from different AI models:\n\
             Output from gpt-4o-2024-08-06 (1.23s): Answer A\n\n\
             Output from o3-mini (0.05s): Error from o3-mini: connection reset\n\n"
        );
    }

    #[test]
    fn test_synthesis_prompt_is_deterministic() {
        let models = ModelSpec::default_models();
        let table = ResultsTable::new(
            models
                .iter()
                .enumerate()
                .map(|(i, m)| {
                    CallResult::success(m.id(), Duration::from_millis(i as u64 * 333), "text")
                })
                .collect(),
        );

        let first = PromptTemplate::synthesis_prompt(&table, &models);
        let second = PromptTemplate::synthesis_prompt(&table.clone(), &models);
        assert_eq!(first, second);
    }
}
