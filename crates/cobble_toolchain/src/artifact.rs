//! Artifact and object file naming.
//!
//! Object files live in a single flat directory per profile, so two units
//! named `util.c` in different directories must not collide. The object name
//! carries a short hash of the unit's project-relative path to keep stems
//! unique.

use cobble_common::ContentHash;
use cobble_config::TargetKind;
use std::path::Path;

/// Returns the object file name for a translation unit.
///
/// The name is `<stem>-<hash8>.o` where the hash covers the unit's
/// project-relative path, not its content, so the name is stable across
/// edits.
pub fn object_file_name(unit: &Path) -> String {
    let stem = unit
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unit".to_string());
    let hash = ContentHash::from_bytes(unit.to_string_lossy().as_bytes());
    format!("{}-{}.o", stem, hash.short_hex())
}

/// Returns the platform-specific shared library extension.
fn shared_lib_ext() -> &'static str {
    if cfg!(target_os = "macos") {
        "dylib"
    } else if cfg!(target_os = "windows") {
        "dll"
    } else {
        "so"
    }
}

/// Returns the final artifact file name for a project.
pub fn artifact_file_name(project_name: &str, kind: TargetKind) -> String {
    match kind {
        TargetKind::Executable => {
            if cfg!(target_os = "windows") {
                format!("{project_name}.exe")
            } else {
                project_name.to_string()
            }
        }
        TargetKind::StaticLibrary => format!("lib{project_name}.a"),
        TargetKind::SharedLibrary => format!("lib{project_name}.{}", shared_lib_ext()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn object_name_keeps_stem() {
        let name = object_file_name(Path::new("src/main.c"));
        assert!(name.starts_with("main-"));
        assert!(name.ends_with(".o"));
    }

    #[test]
    fn same_stem_different_dirs_do_not_collide() {
        let a = object_file_name(Path::new("src/util.c"));
        let b = object_file_name(Path::new("src/net/util.c"));
        assert_ne!(a, b);
    }

    #[test]
    fn object_name_is_stable() {
        let path = PathBuf::from("src/parser.cpp");
        assert_eq!(object_file_name(&path), object_file_name(&path));
    }

    #[test]
    fn static_library_name() {
        assert_eq!(
            artifact_file_name("mathlib", TargetKind::StaticLibrary),
            "libmathlib.a"
        );
    }

    #[test]
    fn shared_library_name_has_lib_prefix() {
        let name = artifact_file_name("mathlib", TargetKind::SharedLibrary);
        assert!(name.starts_with("libmathlib."));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn executable_name_is_bare() {
        assert_eq!(artifact_file_name("app", TargetKind::Executable), "app");
    }
}
