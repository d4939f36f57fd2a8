//! Devchain Configuration Management
//!
//! This crate provides loading, validation, and lookup of the network
//! profiles and test reporter settings consumed by contract deployment
//! tooling.

pub mod config;
pub mod error;
pub mod loader;
pub mod networks;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use loader::*;
pub use utils::{ConfigFormat, ConfigUtils};

// Re-export main types
pub use error::{ConfigError, ConfigResult};

// Re-export network presets
pub use networks::{default_config, NetworkName};
