//! The incremental build engine.
//!
//! Ties the scanner, the fingerprint cache, and a [`Toolchain`]
//! implementation together: compute every unit's fingerprint, recompile
//! only the stale ones on a worker pool, record confirmed artifacts in the
//! cache, and run the single link step once every compile has landed.
//!
//! [`Toolchain`]: cobble_toolchain::Toolchain

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod layout;
pub mod report;
mod scheduler;

pub use engine::{
    build, cache_clear, cache_stats, check, clean, BuildOptions, CleanSummary, TOOL_VERSION,
};
pub use error::BuildError;
pub use report::{BuildReport, UnitOutcome, UnitStatus};
