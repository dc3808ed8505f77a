//! Parsing gcc/clang-style stderr into structured diagnostics.
//!
//! Both gcc and clang emit `file:line:col: severity: message` lines. Lines
//! that do not match the shape (source excerpts, caret markers, "In function"
//! banners) are skipped; callers that saw a nonzero exit status with no
//! parsed errors should fall back to a location-free error carrying the raw
//! output.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;

/// Parses compiler stderr into structured diagnostics.
///
/// Recognizes `file:line:col: severity: message` and `file:line: severity:
/// message`. `fatal error` is treated as [`Severity::Error`]. Unrecognized
/// lines are ignored.
pub fn parse_tool_output(stderr: &str) -> Vec<Diagnostic> {
    stderr.lines().filter_map(parse_line).collect()
}

/// Parses one stderr line, returning `None` when it is not a diagnostic.
fn parse_line(line: &str) -> Option<Diagnostic> {
    // Split off the message at the severity keyword.
    let (head, severity, message) = split_severity(line)?;

    // head is "file:line[:col]" with a trailing colon already stripped.
    let mut parts = head.rsplitn(3, ':');
    let last = parts.next()?;
    let middle = parts.next();
    let rest = parts.next();

    let (file, line_no, column) = match (rest, middle) {
        // file:line:col
        (Some(file), Some(mid)) => match (mid.parse::<u32>(), last.parse::<u32>()) {
            (Ok(l), Ok(c)) => (file, l, Some(c)),
            // file-with-colon:line
            _ => {
                let l = last.parse::<u32>().ok()?;
                (head.rsplit_once(':')?.0, l, None)
            }
        },
        // file:line
        (None, Some(file)) => {
            let l = last.parse::<u32>().ok()?;
            (file, l, None)
        }
        _ => return None,
    };

    if file.is_empty() {
        return None;
    }

    Some(match severity {
        Severity::Error => Diagnostic::error(message),
        Severity::Warning => Diagnostic::warning(message),
        Severity::Note => Diagnostic::note(message),
    }
    .with_location(file, line_no, column))
}

/// Finds the `" severity: "` marker in a line and splits around it.
///
/// Returns the location prefix (without its trailing colon), the severity,
/// and the message text.
fn split_severity(line: &str) -> Option<(&str, Severity, &str)> {
    for (marker, severity) in [
        (": fatal error: ", Severity::Error),
        (": error: ", Severity::Error),
        (": warning: ", Severity::Warning),
        (": note: ", Severity::Note),
    ] {
        if let Some(pos) = line.find(marker) {
            let head = &line[..pos];
            let message = &line[pos + marker.len()..];
            return Some((head, severity, message.trim()));
        }
    }
    None
}
