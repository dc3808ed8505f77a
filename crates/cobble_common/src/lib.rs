//! Shared foundational types used across the cobble build tool.
//!
//! This crate provides content hashing for cache invalidation and the
//! path normalization rules that define source file identity.

#![warn(missing_docs)]

pub mod hash;
pub mod paths;

pub use hash::ContentHash;
pub use paths::normalize_path;
