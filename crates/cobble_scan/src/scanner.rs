//! Source tree discovery and one-level include edge extraction.

use crate::error::ScanError;
use crate::include::{parse_includes, resolve_include};
use cobble_config::{Language, ProjectConfig};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Whether a discovered file compiles on its own or is only included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A file compiled independently into one object artifact.
    TranslationUnit,
    /// A header, contributing content to the units that include it.
    Header,
}

/// A discovered source file, identified by its normalized project-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the project root, normalized.
    pub path: PathBuf,
    /// Translation unit or header.
    pub kind: SourceKind,
}

/// The scanner's output: discovered files and their direct include edges.
///
/// `includes` holds exactly one scan level per file; the transitive closure
/// is the dependency graph's job.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Translation units in sorted path order.
    pub units: Vec<PathBuf>,
    /// All discovered headers in sorted path order.
    pub headers: Vec<PathBuf>,
    /// Direct (one-level) resolved include edges per file, for units and
    /// headers alike. External includes are absent.
    pub includes: BTreeMap<PathBuf, Vec<PathBuf>>,
}

impl ScanResult {
    /// Returns every discovered file with its kind, units first.
    pub fn files(&self) -> Vec<SourceFile> {
        self.units
            .iter()
            .map(|p| SourceFile {
                path: p.clone(),
                kind: SourceKind::TranslationUnit,
            })
            .chain(self.headers.iter().map(|p| SourceFile {
                path: p.clone(),
                kind: SourceKind::Header,
            }))
            .collect()
    }
}

/// Returns the translation unit extensions for a language.
fn unit_extensions(language: Language) -> &'static [&'static str] {
    match language {
        Language::C => &["c"],
        Language::Cpp => &["cpp", "cc", "cxx"],
    }
}

/// Header extensions recognized for either language.
const HEADER_EXTENSIONS: &[&str] = &["h", "hpp", "hh"];

/// Scans the project tree, discovering units and headers and extracting
/// their direct include edges.
///
/// Walks the configured source directories for translation units and
/// headers, and the include directories for headers. Every discovered file
/// is read once and its `#include` directives resolved against the project;
/// unresolvable includes are treated as external and dropped.
pub fn scan_project(project_root: &Path, config: &ProjectConfig) -> Result<ScanResult, ScanError> {
    let unit_exts = unit_extensions(config.project.language);
    let search_dirs: Vec<PathBuf> = config
        .includes
        .dirs
        .iter()
        .chain(config.sources.dirs.iter())
        .map(PathBuf::from)
        .collect();

    let mut units = Vec::new();
    let mut headers = Vec::new();

    for dir in &config.sources.dirs {
        let abs = project_root.join(dir);
        if abs.is_dir() {
            walk_dir(&abs, project_root, unit_exts, &mut units, &mut headers)?;
        }
    }
    for dir in &config.includes.dirs {
        let abs = project_root.join(dir);
        if abs.is_dir() {
            // Include dirs contribute headers only; a stray .c there is not
            // compiled.
            let mut ignored_units = Vec::new();
            walk_dir(&abs, project_root, unit_exts, &mut ignored_units, &mut headers)?;
        }
    }

    units.sort();
    units.dedup();
    headers.sort();
    headers.dedup();

    let mut includes = BTreeMap::new();
    for path in units.iter().chain(headers.iter()) {
        let abs = project_root.join(path);
        let content = std::fs::read_to_string(&abs).map_err(|e| ScanError::Io {
            path: abs.clone(),
            source: e,
        })?;
        let mut edges = Vec::new();
        for directive in parse_includes(&content) {
            if let Some(resolved) = resolve_include(&directive, path, project_root, &search_dirs) {
                if !edges.contains(&resolved) {
                    edges.push(resolved);
                }
            }
        }
        includes.insert(path.clone(), edges);
    }

    Ok(ScanResult {
        units,
        headers,
        includes,
    })
}

/// Recursively walks a directory, collecting units and headers by extension.
fn walk_dir(
    dir: &Path,
    project_root: &Path,
    unit_exts: &[&str],
    units: &mut Vec<PathBuf>,
    headers: &mut Vec<PathBuf>,
) -> Result<(), ScanError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ScanError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ScanError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| ScanError::Io {
            path: path.clone(),
            source: e,
        })?;
        // Symlinks are skipped entirely; a link back into an ancestor
        // directory would otherwise recurse without bound.
        if file_type.is_symlink() {
            continue;
        }
        if file_type.is_dir() {
            walk_dir(&path, project_root, unit_exts, units, headers)?;
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let Some(rel) = cobble_common::paths::relative_to_root(&path, project_root) else {
            continue;
        };
        if unit_exts.contains(&ext) {
            units.push(rel);
        } else if HEADER_EXTENSIONS.contains(&ext) {
            headers.push(rel);
        }
    }
    Ok(())
}
