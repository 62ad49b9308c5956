//! Application layer for multidoc
//!
//! This crate contains use cases, port definitions, and run configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RunConfig;
pub use ports::{
    llm_gateway::LlmGateway,
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::dispatch_all::{DispatchAllInput, DispatchAllUseCase};
pub use use_cases::run_summary::{RunSummaryError, RunSummaryOutput, RunSummaryUseCase};
pub use use_cases::synthesize::{Synthesis, SynthesizeUseCase};
