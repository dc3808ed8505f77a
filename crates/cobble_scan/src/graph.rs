//! The header dependency graph over scanner output.
//!
//! Nodes are normalized project-relative paths; a directed edge `A -> B`
//! means A's compiled output depends on B's content. Header include cycles
//! are legal (mutual includes behind guards), so every traversal carries an
//! explicit visited set instead of assuming acyclicity.

use crate::scanner::ScanResult;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// In-memory dependency graph of translation units and headers.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    units: Vec<PathBuf>,
    edges: BTreeMap<PathBuf, Vec<PathBuf>>,
}

impl DependencyGraph {
    /// Builds the graph from the scanner's one-level include edges.
    pub fn from_scan(scan: &ScanResult) -> Self {
        Self {
            units: scan.units.clone(),
            edges: scan.includes.clone(),
        }
    }

    /// Returns the translation units in sorted order.
    pub fn units(&self) -> &[PathBuf] {
        &self.units
    }

    /// Returns the direct include edges of a file, empty if unknown.
    pub fn direct_includes(&self, file: &Path) -> &[PathBuf] {
        self.edges.get(file).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Computes every header reachable from a unit's direct includes.
    ///
    /// Visited-set bounded: include cycles terminate, and each header is
    /// visited once. The unit itself is never part of its own closure.
    pub fn transitive_headers(&self, unit: &Path) -> BTreeSet<PathBuf> {
        let mut visited = BTreeSet::new();
        self.collect_reachable(unit, &mut visited);
        visited.remove(unit);
        visited
    }

    /// Depth-first reachability with an explicit visited set.
    fn collect_reachable(&self, file: &Path, visited: &mut BTreeSet<PathBuf>) {
        for include in self.direct_includes(file) {
            if visited.insert(include.clone()) {
                self.collect_reachable(include, visited);
            }
        }
    }

    /// Returns every translation unit whose transitive include set contains
    /// `header` — the minimal recompilation set when that header changes.
    pub fn affected_by(&self, header: &Path) -> Vec<PathBuf> {
        self.units
            .iter()
            .filter(|unit| self.transitive_headers(unit).contains(header))
            .cloned()
            .collect()
    }
}
