//! Include directive extraction and resolution.
//!
//! This is a textual scan, not a preprocessor: every `#include` line is
//! extracted regardless of surrounding `#ifdef` guards, which makes the
//! resulting graph conservatively over-inclusive. Over-inclusion can only
//! cause an unnecessary recompile; under-inclusion could serve a stale
//! artifact, so the trade is deliberate.

use cobble_common::normalize_path;
use std::path::{Path, PathBuf};

/// The quoting form of an include directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeKind {
    /// `#include "header.h"` — conventionally project-local.
    Quoted,
    /// `#include <header.h>` — conventionally system or library.
    Angled,
}

/// One `#include` directive extracted from a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    /// The path text between the delimiters, as written.
    pub path: String,
    /// Whether the directive used quotes or angle brackets.
    pub kind: IncludeKind,
}

/// Extracts all include directives from source text, one scan level.
///
/// Matches lines of the form `#include "..."` or `#include <...>` with
/// arbitrary whitespace after the `#`. Directives inside block comments or
/// disabled preprocessor branches are still extracted.
pub fn parse_includes(source: &str) -> Vec<IncludeDirective> {
    source.lines().filter_map(parse_include_line).collect()
}

/// Parses a single line as an include directive, if it is one.
fn parse_include_line(line: &str) -> Option<IncludeDirective> {
    let rest = line.trim_start().strip_prefix('#')?;
    let rest = rest.trim_start().strip_prefix("include")?;
    let rest = rest.trim_start();

    let (open, close, kind) = match rest.chars().next()? {
        '"' => ('"', '"', IncludeKind::Quoted),
        '<' => ('<', '>', IncludeKind::Angled),
        _ => return None,
    };

    let inner = rest.strip_prefix(open)?;
    let end = inner.find(close)?;
    let path = &inner[..end];
    if path.is_empty() {
        return None;
    }

    Some(IncludeDirective {
        path: path.to_string(),
        kind,
    })
}

/// Resolves an include directive to a project-relative file path.
///
/// Search order: the directory of the including file, then each configured
/// include directory, then each source directory — all relative to the
/// project root. Returns the normalized project-relative path of the first
/// existing candidate, or `None` when the include is external (system
/// headers, missing files). External includes never participate in the
/// graph or the fingerprint.
pub fn resolve_include(
    directive: &IncludeDirective,
    includer: &Path,
    project_root: &Path,
    search_dirs: &[PathBuf],
) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::with_capacity(search_dirs.len() + 1);
    if let Some(parent) = includer.parent() {
        candidates.push(parent.join(&directive.path));
    } else {
        candidates.push(PathBuf::from(&directive.path));
    }
    for dir in search_dirs {
        candidates.push(dir.join(&directive.path));
    }

    for candidate in candidates {
        let rel = normalize_path(&candidate);
        // Absolute directives and paths escaping the project root are
        // external by definition.
        if rel.is_absolute() || rel.starts_with("..") {
            continue;
        }
        if project_root.join(&rel).is_file() {
            return Some(rel);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_quoted_include() {
        let includes = parse_includes("#include \"helper.h\"\n");
        assert_eq!(
            includes,
            vec![IncludeDirective {
                path: "helper.h".to_string(),
                kind: IncludeKind::Quoted,
            }]
        );
    }

    #[test]
    fn parse_angled_include() {
        let includes = parse_includes("#include <stdio.h>\n");
        assert_eq!(includes[0].kind, IncludeKind::Angled);
        assert_eq!(includes[0].path, "stdio.h");
    }

    #[test]
    fn parse_with_leading_whitespace() {
        let includes = parse_includes("   #  include   \"a/b.h\"\n");
        assert_eq!(includes.len(), 1);
        assert_eq!(includes[0].path, "a/b.h");
    }

    #[test]
    fn parse_ignores_other_directives() {
        let source = "#define X 1\n#ifdef Y\n#endif\n#pragma once\n";
        assert!(parse_includes(source).is_empty());
    }

    #[test]
    fn parse_ignores_plain_code() {
        let source = "int include_count = 0; // #include \"fake.h\" in comment text\n";
        assert!(parse_includes(source).is_empty());
    }

    #[test]
    fn parse_guarded_include_still_extracted() {
        // No preprocessor evaluation: the ifdef'd include is still an edge.
        let source = "#ifdef USE_EXTRA\n#include \"extra.h\"\n#endif\n";
        let includes = parse_includes(source);
        assert_eq!(includes.len(), 1);
        assert_eq!(includes[0].path, "extra.h");
    }

    #[test]
    fn parse_multiple_in_order() {
        let source = "#include \"a.h\"\n#include <b.h>\n#include \"c.h\"\n";
        let paths: Vec<_> = parse_includes(source).into_iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["a.h", "b.h", "c.h"]);
    }

    #[test]
    fn parse_empty_path_skipped() {
        assert!(parse_includes("#include \"\"\n").is_empty());
    }

    fn quoted(path: &str) -> IncludeDirective {
        IncludeDirective {
            path: path.to_string(),
            kind: IncludeKind::Quoted,
        }
    }

    #[test]
    fn resolve_local_to_includer() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/helper.h"), "").unwrap();

        let resolved = resolve_include(
            &quoted("helper.h"),
            Path::new("src/main.c"),
            tmp.path(),
            &[],
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("src/helper.h"));
    }

    #[test]
    fn resolve_falls_back_to_include_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::create_dir_all(tmp.path().join("include")).unwrap();
        fs::write(tmp.path().join("include/api.h"), "").unwrap();

        let resolved = resolve_include(
            &quoted("api.h"),
            Path::new("src/main.c"),
            tmp.path(),
            &[PathBuf::from("include")],
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("include/api.h"));
    }

    #[test]
    fn resolve_prefers_includer_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::create_dir_all(tmp.path().join("include")).unwrap();
        fs::write(tmp.path().join("src/api.h"), "// local").unwrap();
        fs::write(tmp.path().join("include/api.h"), "// shared").unwrap();

        let resolved = resolve_include(
            &quoted("api.h"),
            Path::new("src/main.c"),
            tmp.path(),
            &[PathBuf::from("include")],
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("src/api.h"));
    }

    #[test]
    fn resolve_system_header_is_external() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();

        let directive = IncludeDirective {
            path: "stdio.h".to_string(),
            kind: IncludeKind::Angled,
        };
        assert!(resolve_include(&directive, Path::new("src/main.c"), tmp.path(), &[]).is_none());
    }

    #[test]
    fn resolve_absolute_include_is_external() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/real.h"), "").unwrap();

        // The file exists, but an absolute directive must not enter the
        // graph keyed by an absolute path.
        let abs = tmp.path().join("src/real.h");
        assert!(resolve_include(
            &quoted(abs.to_str().unwrap()),
            Path::new("src/main.c"),
            tmp.path(),
            &[],
        )
        .is_none());
    }

    #[test]
    fn resolve_relative_subdir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/net")).unwrap();
        fs::write(tmp.path().join("src/net/socket.h"), "").unwrap();

        let resolved = resolve_include(
            &quoted("net/socket.h"),
            Path::new("src/main.c"),
            tmp.path(),
            &[],
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("src/net/socket.h"));
    }

    #[test]
    fn resolve_parent_escape_is_external() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();

        // "../../etc/passwd" style paths cannot resolve inside the project.
        assert!(resolve_include(
            &quoted("../../outside.h"),
            Path::new("src/main.c"),
            tmp.path(),
            &[],
        )
        .is_none());
    }
}
