//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - `types`: Config struct definitions and loading (Config, TagsConfig, LinksConfig)
//! - `validation`: checks applied before a formatter is built from a config
//! - `defaults`: serde default functions

mod defaults;
mod types;
mod validation;

pub use types::{Config, ConfigError, LinksConfig, TagConfig, TagsConfig};
pub use validation::{ValidationError, validate};
