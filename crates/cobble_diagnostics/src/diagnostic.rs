//! Structured diagnostic messages with severity and source location.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A source position extracted from a compiler message.
///
/// Line and column are 1-based; the column is optional because archivers
/// and linkers usually report only a file, and some compiler messages omit
/// the column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// The file the diagnostic refers to, as reported by the tool.
    pub file: PathBuf,
    /// The 1-based line number.
    pub line: u32,
    /// The 1-based column number, when the tool reported one.
    pub column: Option<u32>,
}

/// A diagnostic produced by a compile, link, or syntax-check invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The main diagnostic message.
    pub message: String,
    /// Where the issue was detected, when the tool reported a location.
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    /// Creates a new error diagnostic without a source location.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            location: None,
        }
    }

    /// Creates a new warning diagnostic without a source location.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            location: None,
        }
    }

    /// Creates a new note diagnostic without a source location.
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            message: message.into(),
            location: None,
        }
    }

    /// Attaches a source location to this diagnostic.
    pub fn with_location(mut self, file: impl Into<PathBuf>, line: u32, column: Option<u32>) -> Self {
        self.location = Some(SourceLocation {
            file: file.into(),
            line,
            column,
        });
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => {
                write!(f, "{}:{}", loc.file.display(), loc.line)?;
                if let Some(col) = loc.column {
                    write!(f, ":{col}")?;
                }
                write!(f, ": {}: {}", self.severity, self.message)
            }
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
