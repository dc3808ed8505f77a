//! The build engine's error taxonomy.

use std::path::PathBuf;

/// Errors that abort a build invocation outright.
///
/// Compile and link failures are not in this enum; those are ordinary
/// outcomes carried inside the build report. These variants cover problems
/// with the invocation itself: a broken manifest, an unreadable tree, a
/// toolchain that cannot be spawned.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The project manifest failed to load or validate.
    #[error(transparent)]
    Config(#[from] cobble_config::ConfigError),

    /// The source tree could not be scanned.
    #[error(transparent)]
    Scan(#[from] cobble_scan::ScanError),

    /// Fingerprinting or cache persistence failed.
    #[error(transparent)]
    Cache(#[from] cobble_cache::CacheError),

    /// A tool could not be spawned.
    #[error(transparent)]
    Toolchain(#[from] cobble_toolchain::ToolchainError),

    /// An I/O error outside the cache, typically creating output directories.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configured source directories contain no translation units.
    #[error("no source files found in the configured source directories")]
    NoSources,

    /// The worker pool could not be constructed.
    #[error("failed to start worker pool: {reason}")]
    Scheduler {
        /// Description of the pool construction failure.
        reason: String,
    },
}
