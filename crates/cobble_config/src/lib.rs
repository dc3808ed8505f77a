//! Parsing and validation of `cobble.toml` project manifests.
//!
//! This crate reads the project manifest and produces a strongly-typed
//! [`ProjectConfig`], plus the per-profile resolution of effective compiler
//! flags and preprocessor defines consumed by the build engine.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_project_root, load_config, load_config_from_str};
pub use resolve::{resolve_options, BuildOptionsSet, Profile};
pub use types::*;
