//! The build report returned to the caller.

use cobble_config::Profile;
use cobble_diagnostics::Diagnostic;
use std::path::PathBuf;

/// How one translation unit fared in a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitStatus {
    /// The cached object was reused; the compiler was not invoked.
    Fresh,
    /// The unit was recompiled successfully.
    Compiled,
    /// The unit was recompiled and the compiler reported errors.
    Failed,
}

/// Per-unit result with the diagnostics its compilation produced.
#[derive(Debug, Clone)]
pub struct UnitOutcome {
    /// Project-relative path of the translation unit.
    pub unit: PathBuf,
    /// What happened to the unit.
    pub status: UnitStatus,
    /// Diagnostics from this unit's compile invocation. Empty for fresh units.
    pub diagnostics: Vec<Diagnostic>,
}

/// Everything that happened during one build invocation.
///
/// A report exists even for failed builds; only invocation-level aborts
/// (config, scan, spawn failures) surface as errors instead.
#[derive(Debug)]
pub struct BuildReport {
    /// The profile that was built.
    pub profile: Profile,
    /// Per-unit outcomes in deterministic (sorted path) order.
    pub units: Vec<UnitOutcome>,
    /// Diagnostics from the link or archive step.
    pub link_diagnostics: Vec<Diagnostic>,
    /// Project-relative path of the produced artifact, `None` when any
    /// compile failed or the link itself failed.
    pub artifact: Option<PathBuf>,
}

impl BuildReport {
    /// Whether the build produced its artifact with no failed units.
    pub fn success(&self) -> bool {
        self.failed_count() == 0 && self.artifact.is_some()
    }

    /// Number of units whose cached object was reused.
    pub fn fresh_count(&self) -> usize {
        self.count(UnitStatus::Fresh)
    }

    /// Number of units recompiled successfully.
    pub fn compiled_count(&self) -> usize {
        self.count(UnitStatus::Compiled)
    }

    /// Number of units whose compilation failed.
    pub fn failed_count(&self) -> usize {
        self.count(UnitStatus::Failed)
    }

    fn count(&self, status: UnitStatus) -> usize {
        self.units.iter().filter(|u| u.status == status).count()
    }

    /// All diagnostics, unit ones first, then the link step's.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.units
            .iter()
            .flat_map(|u| u.diagnostics.iter())
            .chain(self.link_diagnostics.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(unit: &str, status: UnitStatus) -> UnitOutcome {
        UnitOutcome {
            unit: PathBuf::from(unit),
            status,
            diagnostics: Vec::new(),
        }
    }

    #[test]
    fn counts_by_status() {
        let report = BuildReport {
            profile: Profile::Debug,
            units: vec![
                outcome("src/a.c", UnitStatus::Fresh),
                outcome("src/b.c", UnitStatus::Compiled),
                outcome("src/c.c", UnitStatus::Compiled),
                outcome("src/d.c", UnitStatus::Failed),
            ],
            link_diagnostics: Vec::new(),
            artifact: None,
        };
        assert_eq!(report.fresh_count(), 1);
        assert_eq!(report.compiled_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.success());
    }

    #[test]
    fn success_requires_artifact() {
        let report = BuildReport {
            profile: Profile::Debug,
            units: vec![outcome("src/a.c", UnitStatus::Compiled)],
            link_diagnostics: Vec::new(),
            artifact: None,
        };
        assert!(!report.success());

        let report = BuildReport {
            artifact: Some(PathBuf::from("target/debug/app")),
            ..report
        };
        assert!(report.success());
    }

    #[test]
    fn diagnostics_include_link_step() {
        let mut unit = outcome("src/a.c", UnitStatus::Failed);
        unit.diagnostics
            .push(Diagnostic::error("undeclared identifier"));
        let report = BuildReport {
            profile: Profile::Debug,
            units: vec![unit],
            link_diagnostics: vec![Diagnostic::error("undefined reference to 'f'")],
            artifact: None,
        };
        assert_eq!(report.diagnostics().count(), 2);
    }
}
