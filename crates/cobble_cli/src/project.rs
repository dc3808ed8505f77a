//! Shared helpers: project discovery and diagnostic rendering.

use cobble_config::{find_project_root, load_config, Profile, ProjectConfig};
use cobble_diagnostics::Diagnostic;
use std::path::PathBuf;

/// Locates the project root from the current directory and loads its
/// manifest.
pub fn load_project() -> Result<(PathBuf, ProjectConfig), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let root = find_project_root(&cwd)?;
    let config = load_config(&root)?;
    Ok((root, config))
}

/// Maps the `--release` flag to a profile.
pub fn profile_from_flag(release: bool) -> Profile {
    if release {
        Profile::Release
    } else {
        Profile::Debug
    }
}

/// Prints diagnostics to stderr, one per line.
///
/// Diagnostics are never gated by `--quiet`; that flag only suppresses
/// status lines.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        eprintln!("{diag}");
    }
}
