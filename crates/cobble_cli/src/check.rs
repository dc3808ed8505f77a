//! `cobble check` — syntax-only validation of every source file.

use crate::project::{load_project, render_diagnostics};
use crate::GlobalArgs;
use cobble_diagnostics::Severity;
use cobble_toolchain::SystemToolchain;

/// Runs the `cobble check` command.
///
/// Returns exit code 0 when no error diagnostics were emitted, 1 otherwise.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (root, config) = load_project()?;

    if !global.quiet {
        eprintln!(
            "   Checking {} v{}",
            config.project.name, config.project.version
        );
    }

    let toolchain = SystemToolchain::new(global.verbose);
    let diagnostics = cobble_build::check(&root, &config, &toolchain, global.verbose)?;
    render_diagnostics(&diagnostics);

    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    if errors > 0 {
        eprintln!("error: check failed with {errors} error(s)");
        return Ok(1);
    }

    if !global.quiet {
        eprintln!("   All checks passed");
    }
    Ok(0)
}
