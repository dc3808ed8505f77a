//! The content-fingerprint cache deciding what must be recompiled.
//!
//! A unit's fingerprint covers its own content, the content of every header
//! reachable from it in the dependency graph, and the effective flag/define
//! set for the profile. The cache persists one record per unit and is
//! fail-safe throughout: corruption degrades to "stale", never to a build
//! failure.

#![warn(missing_docs)]

pub mod cache;
pub mod error;
pub mod fingerprint;
pub mod manifest;

pub use cache::{CacheStats, FingerprintCache};
pub use error::CacheError;
pub use fingerprint::{unit_fingerprint, Fingerprint};
pub use manifest::{ArtifactKind, CacheEntry, CacheManifest};
