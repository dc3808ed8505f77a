//! Profile resolution: merging profile defaults with manifest flags and defines.
//!
//! The resolved option set is the "(c)" input of every unit's fingerprint,
//! so the merge here must be deterministic: flags keep their declared order
//! and defines are held in a sorted map.

use crate::types::ProjectConfig;
use std::collections::BTreeMap;
use std::fmt;

/// The build profile, selecting default optimization and symbol flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Debug symbols, no optimization (default).
    #[default]
    Debug,
    /// Optimized, asserts disabled, no debug symbols.
    Release,
}

impl Profile {
    /// Returns the profile name used for directory layout and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        }
    }

    /// Returns the compiler flags this profile contributes before any
    /// manifest flags.
    pub fn default_flags(self) -> &'static [&'static str] {
        match self {
            Profile::Debug => &["-O0", "-g"],
            Profile::Release => &["-O2", "-DNDEBUG"],
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The effective flag and define set for one profile of one project.
///
/// Every compile invocation and every fingerprint for a given build uses
/// exactly this set; any change to it invalidates every unit's cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptionsSet {
    /// The profile the set was resolved for.
    pub profile: Profile,
    /// Ordered compiler flags: profile defaults, then `build.flags`, then
    /// the profile-scoped extras.
    pub flags: Vec<String>,
    /// Merged defines, profile-scoped entries overriding project-wide ones.
    pub defines: BTreeMap<String, String>,
    /// Include directories passed as `-I`, in manifest order.
    pub include_dirs: Vec<String>,
}

impl BuildOptionsSet {
    /// Serializes the option set into a stable byte string for fingerprinting.
    ///
    /// The encoding separates fields with `\x1f` and records with `\x1e` so
    /// that adjacent values cannot collide by concatenation.
    pub fn fingerprint_input(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(self.profile.as_str().as_bytes());
        buf.push(0x1e);
        for flag in &self.flags {
            buf.extend_from_slice(flag.as_bytes());
            buf.push(0x1f);
        }
        buf.push(0x1e);
        for (name, value) in &self.defines {
            buf.extend_from_slice(name.as_bytes());
            buf.push(0x1f);
            buf.extend_from_slice(value.as_bytes());
            buf.push(0x1f);
        }
        buf
    }
}

/// Resolves the effective flags and defines for the given profile.
///
/// Flag order: profile defaults, then project-wide `build.flags`, then the
/// `[profile.<p>]` extras. Defines merge with profile-scoped values taking
/// precedence over project-wide ones.
pub fn resolve_options(config: &ProjectConfig, profile: Profile) -> BuildOptionsSet {
    let scoped = match profile {
        Profile::Debug => &config.profile.debug,
        Profile::Release => &config.profile.release,
    };

    let mut flags: Vec<String> = profile
        .default_flags()
        .iter()
        .map(|s| s.to_string())
        .collect();
    flags.extend(config.build.flags.iter().cloned());
    flags.extend(scoped.flags.iter().cloned());

    let mut defines = config.build.defines.clone();
    for (name, value) in &scoped.defines {
        defines.insert(name.clone(), value.clone());
    }

    BuildOptionsSet {
        profile,
        flags,
        defines,
        include_dirs: config.includes.dirs.clone(),
    }
}
