//! The toolchain abstraction the build engine drives.
//!
//! The scheduler never spawns processes itself; it talks to a [`Toolchain`].
//! The production implementation shells out to gcc/g++ and ar, while tests
//! substitute a scripted fake.

use crate::error::ToolchainError;
use cobble_config::{BuildOptionsSet, Language, TargetKind};
use cobble_diagnostics::{parse_tool_output, Diagnostic};
use std::path::Path;

/// One compile invocation: a translation unit into an object file.
///
/// All paths are project-relative; implementations run with the project
/// root as working directory so that diagnostics carry relative paths.
#[derive(Debug)]
pub struct CompileRequest<'a> {
    /// The project root, used as the working directory.
    pub project_root: &'a Path,
    /// Project-relative path of the translation unit.
    pub source: &'a Path,
    /// Project-relative path of the object file to produce.
    pub object: &'a Path,
    /// The language, selecting the compiler front-end.
    pub language: Language,
    /// Effective flags, defines, and include directories.
    pub options: &'a BuildOptionsSet,
    /// Whether to compile position-independent code (shared library targets).
    pub pic: bool,
}

/// One syntax-only check of a translation unit. No object is produced.
#[derive(Debug)]
pub struct CheckRequest<'a> {
    /// The project root, used as the working directory.
    pub project_root: &'a Path,
    /// Project-relative path of the translation unit.
    pub source: &'a Path,
    /// The language, selecting the compiler front-end.
    pub language: Language,
    /// Effective flags, defines, and include directories.
    pub options: &'a BuildOptionsSet,
}

/// One link (or archive) invocation producing the final artifact.
#[derive(Debug)]
pub struct LinkRequest<'a> {
    /// The project root, used as the working directory.
    pub project_root: &'a Path,
    /// Project-relative object file paths, in deterministic order.
    pub objects: &'a [std::path::PathBuf],
    /// Project-relative path of the artifact to produce.
    pub output: &'a Path,
    /// The artifact kind, selecting linker vs archiver.
    pub kind: TargetKind,
    /// The language, selecting the linker driver.
    pub language: Language,
    /// Library names passed as `-l`.
    pub libs: &'a [String],
    /// Library search paths passed as `-L`.
    pub lib_dirs: &'a [String],
}

/// The result of running one tool: whether it succeeded and what it said.
///
/// A failed invocation is a normal outcome here, not an `Err`; errors are
/// reserved for tools that could not be run at all.
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    /// Whether the tool exited successfully.
    pub success: bool,
    /// Diagnostics parsed from the tool's stderr.
    pub diagnostics: Vec<Diagnostic>,
}

impl ToolOutcome {
    /// Builds an outcome from an exit status and raw stderr.
    ///
    /// When the tool failed but no diagnostic line could be parsed, a
    /// location-free error carrying the raw stderr is synthesized so the
    /// failure is never silent.
    pub fn from_output(success: bool, stderr: &str) -> Self {
        let mut diagnostics = parse_tool_output(stderr);
        if !success && !diagnostics.iter().any(|d| d.severity.is_error()) {
            let raw = stderr.trim();
            let message = if raw.is_empty() {
                "tool exited with a failure status".to_string()
            } else {
                raw.to_string()
            };
            diagnostics.push(Diagnostic::error(message));
        }
        Self {
            success,
            diagnostics,
        }
    }

    /// An outcome with no diagnostics, used for trivially successful steps.
    pub fn success() -> Self {
        Self {
            success: true,
            diagnostics: Vec::new(),
        }
    }
}

/// The compiler and linker interface the build engine is written against.
///
/// Implementations must be safe to call from multiple scheduler threads at
/// once. Every method returns `Err` only when the underlying tool could not
/// be spawned; a tool that ran and failed comes back as a [`ToolOutcome`]
/// with `success == false`.
pub trait Toolchain: Send + Sync {
    /// Compiles one translation unit into an object file.
    fn compile(&self, request: &CompileRequest<'_>) -> Result<ToolOutcome, ToolchainError>;

    /// Checks one translation unit for syntax errors without producing output.
    fn check(&self, request: &CheckRequest<'_>) -> Result<ToolOutcome, ToolchainError>;

    /// Links (or archives) object files into the final artifact.
    fn link(&self, request: &LinkRequest<'_>) -> Result<ToolOutcome, ToolchainError>;
}
