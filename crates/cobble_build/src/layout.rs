//! Output directory layout under `target/`.
//!
//! Everything the engine writes lives under the project's `target/`
//! directory: one subdirectory per profile holding the final artifact and
//! an `obj/` directory of per-unit objects, plus a `.cache/` directory
//! shared across profiles. Paths here are project-relative; callers join
//! the project root where an absolute path is needed.

use cobble_config::Profile;
use std::path::{Path, PathBuf};

/// Project-relative path of a profile's output directory.
pub fn profile_rel(profile: Profile) -> PathBuf {
    Path::new("target").join(profile.as_str())
}

/// Project-relative path of a profile's object directory.
pub fn obj_rel(profile: Profile) -> PathBuf {
    profile_rel(profile).join("obj")
}

/// Absolute path of the project's `target/` directory.
pub fn target_dir(root: &Path) -> PathBuf {
    root.join("target")
}

/// Absolute path of the cache directory.
pub fn cache_dir(root: &Path) -> PathBuf {
    target_dir(root).join(".cache")
}
