//! `cobble clean` — remove build outputs.

use crate::project::load_project;
use crate::{CleanArgs, GlobalArgs};

/// Runs the `cobble clean` command.
pub fn run(args: &CleanArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (root, _config) = load_project()?;

    let summary = cobble_build::clean(&root, args.all)?;

    if !global.quiet {
        for dir in &summary.removed {
            eprintln!("   Removed {}", dir.display());
        }
        if summary.removed.is_empty() {
            eprintln!("   Nothing to clean");
        } else {
            eprintln!("   Cleaned {} output dir(s)", summary.removed.len());
        }
    }
    Ok(0)
}
