//! The persisted cache manifest, one record per translation unit.
//!
//! Stored as `manifest.json` in the cache directory. Loading is fail-safe
//! at two granularities: a manifest that fails to parse at the top level or
//! was written by a different tool version is discarded wholesale, and an
//! individual record that fails to decode is dropped alone, forcing a
//! recompile of just that unit.

use crate::error::CacheError;
use crate::fingerprint::Fingerprint;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Name of the manifest file within the cache directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Current manifest format version. Increment on breaking changes.
const FORMAT_VERSION: u32 = 1;

/// What kind of artifact a cache entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// A standalone object file fed to the linker.
    Object,
    /// An object destined for a static archive member.
    ArchiveMember,
}

/// Cached state for a single translation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The unit's fingerprint when its artifact was last built.
    pub fingerprint: Fingerprint,
    /// Project-relative path of the built object artifact.
    pub artifact_path: PathBuf,
    /// How the artifact is consumed by the link step.
    pub artifact_kind: ArtifactKind,
    /// Unix timestamp (seconds) of the build that produced the artifact.
    pub built_at: u64,
}

/// Top-level cache manifest tracking every cached translation unit.
#[derive(Debug, Clone)]
pub struct CacheManifest {
    /// Tool version that produced this cache. Invalidate on change.
    pub tool_version: String,
    /// Per-unit cache records, keyed by normalized project-relative path.
    pub entries: HashMap<PathBuf, CacheEntry>,
}

/// On-disk shape. Entries are raw JSON values so each record can be decoded
/// independently of its siblings.
#[derive(Serialize, Deserialize)]
struct RawManifest {
    format_version: u32,
    tool_version: String,
    entries: HashMap<String, serde_json::Value>,
}

impl CacheManifest {
    /// Creates a new, empty cache manifest for the given tool version.
    pub fn new(tool_version: &str) -> Self {
        Self {
            tool_version: tool_version.to_string(),
            entries: HashMap::new(),
        }
    }

    /// Loads the manifest from the cache directory.
    ///
    /// Returns `None` if the file does not exist, cannot be parsed at the
    /// top level, or carries a different format or tool version. All of
    /// these degrade to a full rebuild. Individual records that fail to
    /// decode are skipped, so one corrupt record only invalidates its own
    /// unit.
    pub fn load(cache_dir: &Path, tool_version: &str) -> Option<Self> {
        let path = cache_dir.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path).ok()?;
        let raw: RawManifest = serde_json::from_str(&content).ok()?;

        if raw.format_version != FORMAT_VERSION || raw.tool_version != tool_version {
            return None;
        }

        let entries = raw
            .entries
            .into_iter()
            .filter_map(|(key, value)| {
                let entry: CacheEntry = serde_json::from_value(value).ok()?;
                Some((PathBuf::from(key), entry))
            })
            .collect();

        Some(Self {
            tool_version: raw.tool_version,
            entries,
        })
    }

    /// Saves the manifest to the cache directory as pretty JSON.
    ///
    /// Creates the cache directory if it does not exist.
    pub fn save(&self, cache_dir: &Path) -> Result<(), CacheError> {
        std::fs::create_dir_all(cache_dir).map_err(|e| CacheError::Io {
            path: cache_dir.to_path_buf(),
            source: e,
        })?;

        let raw = RawManifest {
            format_version: FORMAT_VERSION,
            tool_version: self.tool_version.clone(),
            entries: self
                .entries
                .iter()
                .map(|(path, entry)| {
                    let value = serde_json::to_value(entry).map_err(|e| {
                        CacheError::Serialization {
                            reason: e.to_string(),
                        }
                    })?;
                    Ok((path.to_string_lossy().into_owned(), value))
                })
                .collect::<Result<_, CacheError>>()?,
        };

        let json = serde_json::to_string_pretty(&raw).map_err(|e| CacheError::Serialization {
            reason: e.to_string(),
        })?;
        let path = cache_dir.join(MANIFEST_FILE);
        std::fs::write(&path, json).map_err(|e| CacheError::Io { path, source: e })
    }
}
