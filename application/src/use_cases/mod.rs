//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch_all;
pub mod run_summary;
pub mod synthesize;

#[cfg(test)]
pub(crate) mod test_support;
