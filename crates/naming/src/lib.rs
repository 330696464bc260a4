//! Name handling for arcade game folders and documents.
//!
//! Provides the string heuristics shared by the arcade tools:
//!
//! - **Display names**: turn `superMario_64` or `Sonic/sonic-2.html`
//!   into a human-readable title.
//! - **Slugs**: lowercase alphanumeric comparison keys used for fuzzy
//!   thumbnail matching.
//! - **Documents**: recognition of game documents by extension.

mod display;
mod slug;

pub use display::display_name;
pub use slug::slug;

/// Extension (without the dot) of a game document.
pub const DOCUMENT_EXTENSION: &str = "html";

/// Returns true if `file_name` names a game document (`*.html`, any case).
pub fn is_document_name(file_name: &str) -> bool {
    has_extension(file_name, DOCUMENT_EXTENSION)
}

/// Returns the file name without its directory prefix and last extension.
///
/// A leading dot is part of the name, not an extension separator, so
/// `.hidden` stays `.hidden`.
pub fn base_name(file: &str) -> &str {
    let name = file_name(file);
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

/// Returns the lowercased extension of `file` (without the dot), if any.
pub fn extension(file: &str) -> Option<String> {
    let name = file_name(file);
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(name[idx + 1..].to_ascii_lowercase()),
        _ => None,
    }
}

/// Returns true if the extension of `file` equals `ext` case-insensitively.
pub fn has_extension(file: &str, ext: &str) -> bool {
    extension(file).is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn file_name(file: &str) -> &str {
    file.rsplit('/').next().unwrap_or(file)
}
