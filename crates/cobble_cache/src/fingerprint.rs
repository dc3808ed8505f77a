//! Fingerprint computation over a unit's compilation-relevant inputs.

use crate::error::CacheError;
use cobble_common::ContentHash;
use cobble_config::BuildOptionsSet;
use cobble_scan::DependencyGraph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A deterministic summary of everything that affects a unit's object file:
/// its own content, the content of every transitively included project
/// header, and the effective flags and defines for the profile.
///
/// Two builds computing equal fingerprints for a unit may share the cached
/// artifact; any change to any input changes the fingerprint.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(ContentHash);

impl Fingerprint {
    /// Wraps a raw content hash as a fingerprint.
    pub fn from_hash(hash: ContentHash) -> Self {
        Self(hash)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.0)
    }
}

/// Computes the fingerprint of one translation unit.
///
/// Hashes the unit's content, then each transitive header as a sorted
/// `(path, content hash)` sequence, then the option set. The header set
/// comes from the graph's visited-set bounded closure, so the result is
/// stable under include cycles. An unreadable unit is an error; an
/// unreadable header contributes a sentinel so the fingerprint still
/// changes when the header later reappears.
pub fn unit_fingerprint(
    project_root: &Path,
    unit: &Path,
    graph: &DependencyGraph,
    options: &BuildOptionsSet,
) -> Result<Fingerprint, CacheError> {
    let unit_content = std::fs::read(project_root.join(unit)).map_err(|e| CacheError::Io {
        path: unit.to_path_buf(),
        source: e,
    })?;

    let mut buf = Vec::new();
    buf.extend_from_slice(ContentHash::from_bytes(&unit_content).as_bytes());

    // BTreeSet iteration gives sorted, deterministic header order.
    for header in graph.transitive_headers(unit) {
        buf.extend_from_slice(header.to_string_lossy().as_bytes());
        buf.push(0x1f);
        match std::fs::read(project_root.join(&header)) {
            Ok(content) => buf.extend_from_slice(ContentHash::from_bytes(&content).as_bytes()),
            // A header that vanished since the scan: marker bytes distinct
            // from any real hash input.
            Err(_) => buf.extend_from_slice(b"<missing>"),
        }
        buf.push(0x1e);
    }

    buf.extend_from_slice(&options.fingerprint_input());

    Ok(Fingerprint(ContentHash::from_bytes(&buf)))
}
