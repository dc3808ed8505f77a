//! Configuration types deserialized from `cobble.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The top-level project configuration parsed from `cobble.toml`.
///
/// Contains project metadata, source and include directory lists, build
/// flags/defines/link settings, and per-profile overrides. The build engine
/// only reads this structure; it never writes the manifest back.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata (name, version, target kind, language).
    pub project: ProjectMeta,
    /// Source directory configuration.
    #[serde(default)]
    pub sources: SourceConfig,
    /// Include directory configuration.
    #[serde(default)]
    pub includes: IncludeConfig,
    /// Build settings (flags, defines, link libraries).
    #[serde(default)]
    pub build: BuildConfig,
    /// Per-profile flag and define overrides.
    #[serde(default)]
    pub profile: ProfilesConfig,
}

/// Core project metadata required in every `cobble.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name, also the artifact base name.
    pub name: String,
    /// The project version string.
    #[serde(default)]
    pub version: String,
    /// What kind of artifact the project produces.
    #[serde(default)]
    pub kind: TargetKind,
    /// The source language, selecting the compiler front-end.
    #[serde(default)]
    pub language: Language,
}

/// The kind of artifact a project builds into.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// A linked executable (default).
    #[default]
    Executable,
    /// A static archive (`lib<name>.a`).
    StaticLibrary,
    /// A shared object (`lib<name>.so` / `.dylib` / `.dll`).
    SharedLibrary,
}

impl TargetKind {
    /// Returns `true` for the two library kinds.
    pub fn is_library(self) -> bool {
        self != TargetKind::Executable
    }
}

/// The source language of the project.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C (default). Translation units use the `.c` extension.
    #[default]
    C,
    /// C++. Translation units use `.cpp`, `.cc`, or `.cxx`.
    Cpp,
}

/// Source directory configuration.
#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    /// Directories scanned for translation units, relative to the project root.
    #[serde(default = "default_source_dirs")]
    pub dirs: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dirs: default_source_dirs(),
        }
    }
}

fn default_source_dirs() -> Vec<String> {
    vec!["src".to_string()]
}

/// Include directory configuration.
#[derive(Debug, Deserialize)]
pub struct IncludeConfig {
    /// Directories searched when resolving include directives, relative to
    /// the project root. Also passed to the compiler as `-I` paths.
    #[serde(default = "default_include_dirs")]
    pub dirs: Vec<String>,
}

impl Default for IncludeConfig {
    fn default() -> Self {
        Self {
            dirs: default_include_dirs(),
        }
    }
}

fn default_include_dirs() -> Vec<String> {
    vec!["include".to_string()]
}

/// Build settings applied to every profile.
#[derive(Debug, Default, Deserialize)]
pub struct BuildConfig {
    /// Extra compiler flags, in order, appended after the profile defaults.
    #[serde(default)]
    pub flags: Vec<String>,
    /// Preprocessor defines passed as `-DNAME=VALUE`.
    ///
    /// A `BTreeMap` so the iteration order (and thus the fingerprint input
    /// and command line) is deterministic.
    #[serde(default)]
    pub defines: BTreeMap<String, String>,
    /// Libraries to link against (`-l` names, without the `lib` prefix).
    #[serde(default)]
    pub libs: Vec<String>,
    /// Additional library search paths (`-L`).
    #[serde(default)]
    pub lib_dirs: Vec<String>,
}

/// Per-profile flag and define overrides.
#[derive(Debug, Default, Deserialize)]
pub struct ProfilesConfig {
    /// Extras applied only to debug builds.
    #[serde(default)]
    pub debug: ProfileOverride,
    /// Extras applied only to release builds.
    #[serde(default)]
    pub release: ProfileOverride,
}

/// Flags and defines scoped to a single profile.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileOverride {
    /// Extra compiler flags appended after the project-wide flags.
    #[serde(default)]
    pub flags: Vec<String>,
    /// Extra defines; these override project-wide defines of the same name.
    #[serde(default)]
    pub defines: BTreeMap<String, String>,
}
