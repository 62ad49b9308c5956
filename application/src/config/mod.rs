//! Application-level configuration.
//!
//! - [`RunConfig`] - the fixed model list, summary model, instruction and
//!   per-call deadline for one run

pub mod run_config;

pub use run_config::RunConfig;
