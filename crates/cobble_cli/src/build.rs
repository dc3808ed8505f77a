//! `cobble build` — incremental compilation and linking.

use crate::project::{load_project, profile_from_flag, render_diagnostics};
use crate::{BuildArgs, GlobalArgs};
use cobble_build::{BuildOptions, BuildReport};
use cobble_toolchain::SystemToolchain;

/// Runs the `cobble build` command.
///
/// Returns exit code 0 on success, 1 when any unit or the link step failed.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (root, config) = load_project()?;
    let profile = profile_from_flag(args.release);

    if !global.quiet {
        eprintln!(
            "   Building {} v{} [{}]",
            config.project.name, config.project.version, profile
        );
    }

    let toolchain = SystemToolchain::new(global.verbose);
    let options = BuildOptions {
        profile,
        jobs: args.jobs,
        verbose: global.verbose,
    };
    let report = cobble_build::build(&root, &config, &toolchain, &options)?;

    report_outcome(&report, global);
    Ok(if report.success() { 0 } else { 1 })
}

/// Prints diagnostics and the closing summary line for a build report.
pub fn report_outcome(report: &BuildReport, global: &GlobalArgs) {
    let diagnostics: Vec<_> = report.diagnostics().cloned().collect();
    render_diagnostics(&diagnostics);

    if report.success() {
        if !global.quiet {
            eprintln!(
                "   Finished {} compiled, {} up to date",
                report.compiled_count(),
                report.fresh_count()
            );
        }
    } else if report.failed_count() > 0 {
        eprintln!(
            "error: build failed: {} of {} units did not compile",
            report.failed_count(),
            report.units.len()
        );
    } else {
        eprintln!("error: linking failed");
    }
}
