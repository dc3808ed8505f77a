//! The parallel compile phase.
//!
//! All stale units are dispatched onto a bounded worker pool; each task
//! writes its outcome into its own result slot, so no ordering is imposed
//! between compilations. The collect at the end is the barrier: nothing
//! downstream (cache writes, the link step) runs until every compile has
//! finished or failed.

use crate::error::BuildError;
use cobble_cache::Fingerprint;
use cobble_config::{BuildOptionsSet, Language};
use cobble_toolchain::{CompileRequest, ToolOutcome, Toolchain};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// One unit's planned work for this build.
#[derive(Debug)]
pub(crate) struct UnitPlan {
    /// Project-relative path of the translation unit.
    pub unit: PathBuf,
    /// The unit's fingerprint for this option set.
    pub fingerprint: Fingerprint,
    /// Project-relative path of the object file.
    pub object: PathBuf,
    /// Whether the unit must be recompiled.
    pub stale: bool,
}

/// Compiles every stale plan on a pool of `jobs` workers.
///
/// Returns `(plan index, outcome)` pairs in plan order. `Err` means a
/// compiler process could not be spawned; individual compile failures come
/// back as outcomes with `success == false`.
pub(crate) fn compile_stale(
    project_root: &Path,
    toolchain: &dyn Toolchain,
    plans: &[UnitPlan],
    options: &BuildOptionsSet,
    language: Language,
    pic: bool,
    jobs: usize,
    verbose: bool,
) -> Result<Vec<(usize, ToolOutcome)>, BuildError> {
    let stale: Vec<usize> = plans
        .iter()
        .enumerate()
        .filter(|(_, p)| p.stale)
        .map(|(i, _)| i)
        .collect();
    if stale.is_empty() {
        return Ok(Vec::new());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| BuildError::Scheduler {
            reason: e.to_string(),
        })?;

    pool.install(|| {
        stale
            .par_iter()
            .map(|&index| {
                let plan = &plans[index];
                if verbose {
                    eprintln!("   Compiling {}", plan.unit.display());
                }
                let request = CompileRequest {
                    project_root,
                    source: &plan.unit,
                    object: &plan.object,
                    language,
                    options,
                    pic,
                };
                let outcome = toolchain.compile(&request)?;
                Ok((index, outcome))
            })
            .collect::<Result<Vec<_>, cobble_toolchain::ToolchainError>>()
    })
    .map_err(BuildError::from)
}

/// Number of workers to use when the caller did not pick one.
pub(crate) fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cobble_common::ContentHash;
    use cobble_config::Profile;
    use cobble_toolchain::{CheckRequest, LinkRequest, ToolchainError};
    use std::sync::Mutex;

    struct CountingToolchain {
        seen: Mutex<Vec<PathBuf>>,
    }

    impl Toolchain for CountingToolchain {
        fn compile(&self, request: &CompileRequest<'_>) -> Result<ToolOutcome, ToolchainError> {
            self.seen.lock().unwrap().push(request.source.to_path_buf());
            Ok(ToolOutcome::success())
        }

        fn check(&self, _request: &CheckRequest<'_>) -> Result<ToolOutcome, ToolchainError> {
            Ok(ToolOutcome::success())
        }

        fn link(&self, _request: &LinkRequest<'_>) -> Result<ToolOutcome, ToolchainError> {
            Ok(ToolOutcome::success())
        }
    }

    fn plan(unit: &str, stale: bool) -> UnitPlan {
        UnitPlan {
            unit: PathBuf::from(unit),
            fingerprint: Fingerprint::from_hash(ContentHash::from_bytes(unit.as_bytes())),
            object: PathBuf::from(format!("{unit}.o")),
            stale,
        }
    }

    fn options() -> BuildOptionsSet {
        BuildOptionsSet {
            profile: Profile::Debug,
            flags: Vec::new(),
            defines: Default::default(),
            include_dirs: Vec::new(),
        }
    }

    #[test]
    fn only_stale_plans_are_compiled() {
        let toolchain = CountingToolchain {
            seen: Mutex::new(Vec::new()),
        };
        let plans = vec![
            plan("src/a.c", true),
            plan("src/b.c", false),
            plan("src/c.c", true),
        ];
        let results = compile_stale(
            Path::new("/p"),
            &toolchain,
            &plans,
            &options(),
            Language::C,
            false,
            2,
            false,
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        let indices: Vec<usize> = results.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 2]);

        let mut seen = toolchain.seen.into_inner().unwrap();
        seen.sort();
        assert_eq!(seen, vec![PathBuf::from("src/a.c"), PathBuf::from("src/c.c")]);
    }

    #[test]
    fn no_stale_plans_means_no_pool() {
        let toolchain = CountingToolchain {
            seen: Mutex::new(Vec::new()),
        };
        let plans = vec![plan("src/a.c", false)];
        let results = compile_stale(
            Path::new("/p"),
            &toolchain,
            &plans,
            &options(),
            Language::C,
            false,
            1,
            false,
        )
        .unwrap();
        assert!(results.is_empty());
        assert!(toolchain.seen.into_inner().unwrap().is_empty());
    }

    #[test]
    fn default_jobs_is_positive() {
        assert!(default_jobs() >= 1);
    }
}
