//! Rendering of the `GAMES` array and its splice into the host document.
//!
//! The host document owns everything outside the generated region. The
//! region starts right after [`START_MARKER`] and ends at the [`END_MARKER`]
//! that closes the array it opens, found by bracket matching outside string
//! literals and comments. Both markers must be present or nothing is
//! rewritten.

use crate::error::MenuError;
use crate::types::GameEntry;

/// Opening marker of the generated region.
pub const START_MARKER: &str = "const GAMES = [";

/// Closing marker of the generated region.
pub const END_MARKER: &str = "];";

/// Extra indentation of entries relative to the opening marker's line.
const ENTRY_INDENT: &str = "  ";

/// Renders one entry as a JavaScript object literal.
///
/// Strings are emitted as JSON string literals, which are valid
/// JavaScript; a missing image becomes `null`.
pub fn render_entry(entry: &GameEntry) -> String {
    let image = match &entry.image {
        Some(path) => js_string(path),
        None => "null".to_string(),
    };
    format!(
        "{{ file: {}, name: {}, image: {} }}",
        js_string(&entry.file),
        js_string(&entry.name),
        image
    )
}

/// Renders all entries, one per line, each prefixed with `indent`.
pub fn render_entries(entries: &[GameEntry], indent: &str) -> String {
    entries
        .iter()
        .map(|e| format!("{indent}{}", render_entry(e)))
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Replaces the generated region of `document` with `entries`.
///
/// Returns the full new document text. Fails with
/// [`MenuError::MarkerNotFound`] if either marker is missing.
pub fn splice_games(document: &str, entries: &[GameEntry]) -> Result<String, MenuError> {
    let start = document.find(START_MARKER).ok_or(MenuError::MarkerNotFound {
        marker: START_MARKER,
    })?;
    let body_start = start + START_MARKER.len();
    let end = find_end_marker(document, body_start).ok_or(MenuError::MarkerNotFound {
        marker: END_MARKER,
    })?;

    let indent = line_indent(document, start);
    let entry_indent = format!("{indent}{ENTRY_INDENT}");

    let mut out = String::with_capacity(document.len());
    out.push_str(&document[..body_start]);
    out.push('\n');
    if !entries.is_empty() {
        out.push_str(&render_entries(entries, &entry_indent));
        out.push('\n');
    }
    out.push_str(indent);
    out.push_str(END_MARKER);
    out.push_str(&document[end + END_MARKER.len()..]);

    Ok(out)
}

/// Finds the `];` closing the array opened just before `from`.
///
/// Brackets are counted outside string literals and comments. Returns
/// `None` if the array never closes or its `]` is not directly followed
/// by `;`.
fn find_end_marker(document: &str, from: usize) -> Option<usize> {
    let bytes = document.as_bytes();
    let mut depth = 1usize;
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'"' | b'\'' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = document[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |end| i + 2 + end + 1);
            }
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return document[i..].starts_with(END_MARKER).then_some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Leading whitespace of the line containing byte offset `at`.
fn line_indent(document: &str, at: usize) -> &str {
    let line_start = document[..at].rfind('\n').map_or(0, |nl| nl + 1);
    let prefix = &document[line_start..at];
    let trimmed = prefix.trim_start();
    &prefix[..prefix.len() - trimmed.len()]
}

fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
