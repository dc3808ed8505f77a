//! Compiler and linker drivers.
//!
//! Defines the [`Toolchain`] trait the build engine schedules against, the
//! gcc/g++/ar implementation used in production, and the naming rules for
//! object files and final artifacts.

#![warn(missing_docs)]

pub mod artifact;
pub mod driver;
pub mod error;
pub mod system;

pub use artifact::{artifact_file_name, object_file_name};
pub use driver::{CheckRequest, CompileRequest, LinkRequest, ToolOutcome, Toolchain};
pub use error::ToolchainError;
pub use system::SystemToolchain;
