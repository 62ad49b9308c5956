//! Domain layer for multidoc
//!
//! This crate contains the core value objects and prompt conventions.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Fan-out**: the same input is sent to every [`ModelSpec`] concurrently
//! - **Results table**: one [`CallResult`] per model, in dispatch order
//! - **Synthesis**: all results are folded into one [`SynthesisPrompt`] and
//!   answered by a single summary model

pub mod config;
pub mod core;
pub mod dispatch;
pub mod prompt;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::{
    credential::{Credential, Credentials},
    error::{DomainError, ProviderError, ProviderErrorKind},
    input::UserInput,
    model::{ModelSpec, ProviderKind},
};
pub use dispatch::value_objects::{CallResult, ResultsTable};
pub use prompt::{PromptParts, PromptTemplate, SynthesisPrompt};
