//! Infrastructure layer for multidoc
//!
//! This crate contains the adapters that implement the ports defined
//! in the application layer: one HTTP adapter per provider, the routing
//! gateway in front of them, and configuration loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    Bootstrap, ConfigError, ConfigLoader, FileConfig, FileModelsConfig, FileOutputConfig,
    FileProvidersConfig, FileRunConfig, credentials_from_env, ensure_config_dir,
    resolve_credentials,
};
pub use providers::{ProviderAdapter, build_adapters, routing::RoutingGateway};
