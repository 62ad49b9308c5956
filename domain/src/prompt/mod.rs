//! Prompt construction and the instruction/user split convention.

pub mod template;

pub use template::{PromptParts, PromptTemplate, SynthesisPrompt};
