//! The engine facade: build, check, clean, and cache maintenance.

use crate::error::BuildError;
use crate::layout::{cache_dir, obj_rel, profile_rel, target_dir};
use crate::report::{BuildReport, UnitOutcome, UnitStatus};
use crate::scheduler::{self, UnitPlan};
use cobble_cache::{unit_fingerprint, ArtifactKind, CacheError, CacheStats, FingerprintCache};
use cobble_config::{resolve_options, Profile, ProjectConfig, TargetKind};
use cobble_diagnostics::{Diagnostic, DiagnosticSink};
use cobble_scan::{scan_project, DependencyGraph};
use cobble_toolchain::{artifact_file_name, object_file_name, CheckRequest, LinkRequest, Toolchain};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// The tool version stamped into cache manifests. Any release bump
/// invalidates existing caches.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Caller-selected knobs for one build invocation.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// The profile to build.
    pub profile: Profile,
    /// Worker count; `None` uses available parallelism.
    pub jobs: Option<usize>,
    /// Print per-unit progress to stderr.
    pub verbose: bool,
}

/// What a clean invocation removed.
#[derive(Debug, Default)]
pub struct CleanSummary {
    /// The directories that existed and were deleted.
    pub removed: Vec<PathBuf>,
}

/// Builds the project incrementally and returns a report.
///
/// Only invocation-level problems come back as `Err`: an unscannable tree,
/// an unreadable unit, a toolchain that cannot be spawned, cache
/// persistence failures. Compile and link failures are normal outcomes
/// inside the report, with `report.success() == false`.
pub fn build(
    root: &Path,
    config: &ProjectConfig,
    toolchain: &dyn Toolchain,
    options: &BuildOptions,
) -> Result<BuildReport, BuildError> {
    let scan = scan_project(root, config)?;
    if scan.units.is_empty() {
        return Err(BuildError::NoSources);
    }
    let graph = DependencyGraph::from_scan(&scan);
    let effective = resolve_options(config, options.profile);

    let mut cache = FingerprintCache::load_or_create(&cache_dir(root), TOOL_VERSION);

    let obj_dir = obj_rel(options.profile);
    std::fs::create_dir_all(root.join(&obj_dir)).map_err(|e| BuildError::Io {
        path: obj_dir.clone(),
        source: e,
    })?;

    let kind = config.project.kind;
    let pic = kind == TargetKind::SharedLibrary;
    let artifact_kind = match kind {
        TargetKind::StaticLibrary => ArtifactKind::ArchiveMember,
        _ => ArtifactKind::Object,
    };

    let plans: Vec<UnitPlan> = scan
        .units
        .iter()
        .map(|unit| {
            let fingerprint = unit_fingerprint(root, unit, &graph, &effective)?;
            let object = obj_dir.join(object_file_name(unit));
            let stale = cache.is_stale(root, unit, &fingerprint);
            Ok(UnitPlan {
                unit: unit.clone(),
                fingerprint,
                object,
                stale,
            })
        })
        .collect::<Result<_, CacheError>>()?;

    let jobs = options
        .jobs
        .filter(|&n| n > 0)
        .unwrap_or_else(scheduler::default_jobs);
    let results = scheduler::compile_stale(
        root,
        toolchain,
        &plans,
        &effective,
        config.project.language,
        pic,
        jobs,
        options.verbose,
    )?;

    // The compile barrier has passed; decide each unit's outcome and record
    // the confirmed successes before touching the link step.
    let mut units: Vec<UnitOutcome> = plans
        .iter()
        .map(|plan| UnitOutcome {
            unit: plan.unit.clone(),
            status: UnitStatus::Fresh,
            diagnostics: Vec::new(),
        })
        .collect();

    for (index, outcome) in results {
        let plan = &plans[index];
        let written = outcome.success && root.join(&plan.object).exists();
        units[index].status = if written {
            UnitStatus::Compiled
        } else {
            UnitStatus::Failed
        };
        units[index].diagnostics = outcome.diagnostics;
        if written {
            cache.record(
                &plan.unit,
                plan.fingerprint,
                plan.object.clone(),
                artifact_kind,
            );
        } else if outcome.success {
            // The tool exited 0 without writing its output; leave the unit
            // failed with something actionable instead of an empty list.
            units[index].diagnostics.push(Diagnostic::error(format!(
                "compiler reported success for {} but produced no object file",
                plan.unit.display()
            )));
        }
    }
    cache.save()?;

    let failed = units.iter().filter(|u| u.status == UnitStatus::Failed).count();
    let artifact_rel = profile_rel(options.profile).join(artifact_file_name(
        &config.project.name,
        kind,
    ));

    if failed > 0 {
        return Ok(BuildReport {
            profile: options.profile,
            units,
            link_diagnostics: Vec::new(),
            artifact: None,
        });
    }

    let recompiled = units.iter().any(|u| u.status == UnitStatus::Compiled);
    if !recompiled && root.join(&artifact_rel).exists() {
        return Ok(BuildReport {
            profile: options.profile,
            units,
            link_diagnostics: Vec::new(),
            artifact: Some(artifact_rel),
        });
    }

    if options.verbose {
        eprintln!("   Linking {}", artifact_rel.display());
    }
    let objects: Vec<PathBuf> = plans.iter().map(|p| p.object.clone()).collect();
    let link = toolchain.link(&LinkRequest {
        project_root: root,
        objects: &objects,
        output: &artifact_rel,
        kind,
        language: config.project.language,
        libs: &config.build.libs,
        lib_dirs: &config.build.lib_dirs,
    })?;

    Ok(BuildReport {
        profile: options.profile,
        units,
        artifact: link.success.then_some(artifact_rel),
        link_diagnostics: link.diagnostics,
    })
}

/// Syntax-checks every translation unit without producing artifacts.
///
/// Runs the compiler front-end only (`-fsyntax-only` in the system
/// toolchain) across the worker pool and returns every diagnostic it
/// emitted, ordered by source location. Touches neither the cache nor the
/// target directory.
pub fn check(
    root: &Path,
    config: &ProjectConfig,
    toolchain: &dyn Toolchain,
    verbose: bool,
) -> Result<Vec<Diagnostic>, BuildError> {
    let scan = scan_project(root, config)?;
    if scan.units.is_empty() {
        return Err(BuildError::NoSources);
    }
    let effective = resolve_options(config, Profile::Debug);

    let sink = DiagnosticSink::new();
    scan.units
        .par_iter()
        .map(|unit| {
            if verbose {
                eprintln!("   Checking {}", unit.display());
            }
            let outcome = toolchain.check(&CheckRequest {
                project_root: root,
                source: unit,
                language: config.project.language,
                options: &effective,
            })?;
            sink.emit_all(outcome.diagnostics);
            Ok(())
        })
        .collect::<Result<(), cobble_toolchain::ToolchainError>>()?;

    // Workers append in completion order; sort for stable output.
    let mut diagnostics = sink.take_all();
    diagnostics.sort_by(|a, b| {
        let key = |d: &Diagnostic| {
            d.location
                .as_ref()
                .map(|l| (l.file.clone(), l.line, l.column))
        };
        key(a).cmp(&key(b)).then_with(|| a.message.cmp(&b.message))
    });
    Ok(diagnostics)
}

/// Removes build outputs.
///
/// Deletes the per-profile output directories; with `all`, removes the
/// whole `target/` directory including the cache. Missing directories are
/// not an error.
pub fn clean(root: &Path, all: bool) -> Result<CleanSummary, BuildError> {
    let mut summary = CleanSummary::default();
    let targets: Vec<PathBuf> = if all {
        vec![target_dir(root)]
    } else {
        [Profile::Debug, Profile::Release]
            .into_iter()
            .map(|p| root.join(profile_rel(p)))
            .collect()
    };

    for dir in targets {
        if dir.exists() {
            std::fs::remove_dir_all(&dir).map_err(|e| BuildError::Io {
                path: dir.clone(),
                source: e,
            })?;
            summary.removed.push(dir);
        }
    }
    Ok(summary)
}

/// Reports the cache's entry count and manifest size.
pub fn cache_stats(root: &Path) -> CacheStats {
    FingerprintCache::load_or_create(&cache_dir(root), TOOL_VERSION).stats()
}

/// Drops every cache record and deletes the manifest file.
pub fn cache_clear(root: &Path) -> Result<(), CacheError> {
    FingerprintCache::load_or_create(&cache_dir(root), TOOL_VERSION).clear()
}
