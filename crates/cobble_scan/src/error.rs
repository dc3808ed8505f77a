//! Error types for source tree scanning.

use std::path::PathBuf;

/// Errors that can occur while scanning the source tree.
///
/// Unresolvable include directives are deliberately not errors: they are
/// treated as external headers and excluded from the graph.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// An I/O error occurred while reading a directory or source file.
    #[error("scan I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = ScanError::Io {
            path: PathBuf::from("src/main.c"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("scan I/O error"));
        assert!(msg.contains("src/main.c"));
    }
}
