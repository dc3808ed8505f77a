//! Error types for cache operations.

use std::path::PathBuf;

/// Errors that can occur during cache operations.
///
/// Cache reads are fail-safe and never produce these; they surface only
/// from writes (persisting the manifest) and from fingerprinting, where an
/// unreadable translation unit is a real problem the build must report.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// An I/O error occurred while reading an input or writing cache state.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest could not be serialized.
    #[error("failed to serialize cache manifest: {reason}")]
    Serialization {
        /// Description of the serialization failure.
        reason: String,
    },
}
