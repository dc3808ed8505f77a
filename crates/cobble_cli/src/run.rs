//! `cobble run` — build, then execute the produced binary.

use crate::build::report_outcome;
use crate::project::{load_project, profile_from_flag};
use crate::{GlobalArgs, RunArgs};
use cobble_build::BuildOptions;
use cobble_config::TargetKind;
use cobble_toolchain::SystemToolchain;
use std::process::Command;

/// Runs the `cobble run` command.
///
/// Builds the project, then executes the artifact with the trailing
/// arguments and propagates its exit status. Library targets are refused.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (root, config) = load_project()?;

    if config.project.kind != TargetKind::Executable {
        return Err(format!(
            "'{}' is a library project and cannot be run",
            config.project.name
        )
        .into());
    }

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

    let Some(artifact) = &report.artifact else {
        return Ok(1);
    };

    let binary = root.join(artifact);
    if !global.quiet {
        eprintln!("   Running {}", artifact.display());
    }
    let status = Command::new(&binary).args(&args.args).status()?;
    Ok(status.code().unwrap_or(1))
}
