//! Lexical path normalization defining source file identity.
//!
//! The dependency graph and the cache both key files by their path relative
//! to the project root. The same file reached through different spellings
//! (`./src/a.c`, `src/sub/../a.c`) must normalize to one identity, so paths
//! are cleaned lexically without touching the filesystem.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path lexically: removes `.` components and resolves `..`
/// against preceding components where possible.
///
/// Leading `..` components that cannot be resolved are preserved. No
/// filesystem access is performed, so symlinks are not followed.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Returns `path` relative to `root` and normalized, if `path` lies under `root`.
///
/// Both arguments are normalized first. Returns `None` when `path` is not
/// a descendant of `root`; such files are outside the project and do not
/// participate in the dependency graph.
pub fn relative_to_root(path: &Path, root: &Path) -> Option<PathBuf> {
    let path = normalize_path(path);
    let root = normalize_path(root);
    path.strip_prefix(&root).ok().map(normalize_path)
}
