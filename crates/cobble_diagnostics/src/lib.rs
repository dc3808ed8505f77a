//! Structured diagnostics collected from compiler and linker invocations.
//!
//! Provides the [`Diagnostic`] type with severity and optional source
//! location, a thread-safe [`DiagnosticSink`] for the parallel compile
//! phase, and a parser that turns gcc/clang-style stderr into diagnostics.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod parse;
pub mod severity;
pub mod sink;

pub use diagnostic::{Diagnostic, SourceLocation};
pub use parse::parse_tool_output;
pub use severity::Severity;
pub use sink::DiagnosticSink;
