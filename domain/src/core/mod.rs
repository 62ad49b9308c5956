//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelSpec`] - a model identifier plus its provider family
//! - [`input::UserInput`] - validated, non-blank user text
//! - [`credential::Credentials`] - one secret per provider
//! - [`error::ProviderError`] - a failed provider call

pub mod credential;
pub mod error;
pub mod input;
pub mod model;
