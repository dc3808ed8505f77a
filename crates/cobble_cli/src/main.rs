//! Cobble CLI — the command-line interface for the cobble build tool.
//!
//! Provides `cobble build` for incremental compilation, `cobble run` for
//! build-and-execute, `cobble check` for syntax-only validation,
//! `cobble clean` for output removal, `cobble cache` for cache maintenance,
//! and `cobble info` for a project summary.

#![warn(missing_docs)]

mod build;
mod cache;
mod check;
mod clean;
mod info;
mod project;
mod run;

use std::process;

use clap::{Parser, Subcommand};

/// Cobble — an incremental build tool for C and C++ projects.
#[derive(Parser, Debug)]
#[command(name = "cobble", version, about = "Cobble C/C++ Build Tool")]
pub struct Cli {
    /// Suppress all output except errors and diagnostics.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print tool invocations and per-unit progress.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the project incrementally.
    Build(BuildArgs),
    /// Build the project, then run the produced executable.
    Run(RunArgs),
    /// Syntax-check every source file without producing artifacts.
    Check,
    /// Remove build outputs.
    Clean(CleanArgs),
    /// Inspect or clear the fingerprint cache.
    Cache(CacheArgs),
    /// Print a summary of the project manifest and source tree.
    Info,
}

/// Arguments for the `cobble build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Build with the release profile (-O2, NDEBUG).
    #[arg(short, long)]
    pub release: bool,

    /// Number of parallel compile jobs (default: available CPUs).
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

/// Arguments for the `cobble run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Build with the release profile before running.
    #[arg(short, long)]
    pub release: bool,

    /// Number of parallel compile jobs (default: available CPUs).
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Arguments passed through to the executable.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `cobble clean` subcommand.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Also remove the fingerprint cache.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `cobble cache` subcommand.
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// The cache operation to perform.
    #[command(subcommand)]
    pub command: CacheCommand,
}

/// Cache maintenance operations.
#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Print entry count and manifest size.
    Stats,
    /// Drop every cached record.
    Clear,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose progress and tool invocations.
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Command::Build(ref args) => build::run(args, &global),
        Command::Run(ref args) => run::run(args, &global),
        Command::Check => check::run(&global),
        Command::Clean(ref args) => clean::run(args, &global),
        Command::Cache(ref args) => cache::run(args, &global),
        Command::Info => info::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
