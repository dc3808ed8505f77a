//! The staleness oracle backed by the persisted manifest.

use crate::error::CacheError;
use crate::fingerprint::Fingerprint;
use crate::manifest::{ArtifactKind, CacheEntry, CacheManifest, MANIFEST_FILE};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Summary of what the cache currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached unit records.
    pub entry_count: usize,
    /// Size in bytes of the manifest file on disk, zero if absent.
    pub disk_size: u64,
}

/// Decides, per translation unit, whether the cached artifact can be reused.
///
/// Wraps the on-disk [`CacheManifest`] with the staleness policy: a unit is
/// stale when it has no record, its fingerprint changed, or its recorded
/// artifact vanished from disk. Mutations stay in memory until [`save`]
/// (called once per build, after the compile phase) writes them out.
///
/// [`save`]: FingerprintCache::save
#[derive(Debug)]
pub struct FingerprintCache {
    cache_dir: PathBuf,
    manifest: CacheManifest,
}

impl FingerprintCache {
    /// Opens the cache in `cache_dir`, starting fresh if no usable manifest
    /// is found there. Never fails: any load problem means an empty cache.
    pub fn load_or_create(cache_dir: &Path, tool_version: &str) -> Self {
        let manifest = CacheManifest::load(cache_dir, tool_version)
            .unwrap_or_else(|| CacheManifest::new(tool_version));
        Self {
            cache_dir: cache_dir.to_path_buf(),
            manifest,
        }
    }

    /// Returns whether `unit` must be recompiled given its current
    /// fingerprint. Artifact existence is checked relative to
    /// `project_root`.
    pub fn is_stale(&self, project_root: &Path, unit: &Path, fingerprint: &Fingerprint) -> bool {
        match self.manifest.entries.get(unit) {
            None => true,
            Some(entry) => {
                entry.fingerprint != *fingerprint
                    || !project_root.join(&entry.artifact_path).exists()
            }
        }
    }

    /// Records a successful compilation of `unit`.
    pub fn record(
        &mut self,
        unit: &Path,
        fingerprint: Fingerprint,
        artifact_path: PathBuf,
        artifact_kind: ArtifactKind,
    ) {
        let built_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.manifest.entries.insert(
            unit.to_path_buf(),
            CacheEntry {
                fingerprint,
                artifact_path,
                artifact_kind,
                built_at,
            },
        );
    }

    /// Returns the cached record for `unit`, if any.
    pub fn entry(&self, unit: &Path) -> Option<&CacheEntry> {
        self.manifest.entries.get(unit)
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.manifest.entries.len()
    }

    /// Whether the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.manifest.entries.is_empty()
    }

    /// Drops every record and deletes the manifest file from disk.
    pub fn clear(&mut self) -> Result<(), CacheError> {
        self.manifest.entries.clear();
        let path = self.cache_dir.join(MANIFEST_FILE);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::Io { path, source: e }),
        }
    }

    /// Computes entry count and the manifest's on-disk size.
    pub fn stats(&self) -> CacheStats {
        let disk_size = std::fs::metadata(self.cache_dir.join(MANIFEST_FILE))
            .map(|m| m.len())
            .unwrap_or(0);
        CacheStats {
            entry_count: self.manifest.entries.len(),
            disk_size,
        }
    }

    /// Persists the current records to the manifest file.
    pub fn save(&self) -> Result<(), CacheError> {
        self.manifest.save(&self.cache_dir)
    }
}
