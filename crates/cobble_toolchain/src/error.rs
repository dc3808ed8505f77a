//! Error types for toolchain invocation.

/// Errors that can occur when driving an external tool.
///
/// A compile or link that runs and fails is not an error at this level;
/// that outcome is reported through diagnostics. These variants cover the
/// cases where the tool could not be run at all.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// The tool binary could not be spawned.
    #[error("failed to run '{tool}': {source}")]
    Spawn {
        /// The tool that was invoked.
        tool: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
