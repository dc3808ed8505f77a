//! Source tree scanning and the header dependency graph.
//!
//! The scanner discovers translation units and headers under the project's
//! configured directories and extracts one level of include edges per file.
//! The [`DependencyGraph`] computes transitive header closures over those
//! edges with visited-set bounded traversal, so include cycles terminate.

#![warn(missing_docs)]

pub mod error;
pub mod graph;
pub mod include;
pub mod scanner;

pub use error::ScanError;
pub use graph::DependencyGraph;
pub use include::{parse_includes, resolve_include, IncludeDirective, IncludeKind};
pub use scanner::{scan_project, ScanResult, SourceFile, SourceKind};
