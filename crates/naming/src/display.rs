//! Display name resolution for game folders and documents.

use std::sync::LazyLock;

use regex::Regex;

use crate::{DOCUMENT_EXTENSION, base_name, has_extension};

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel boundary pattern"));

// Word boundaries are ASCII-only, so a digit run glued to an accented
// letter still counts as standalone.
static STANDALONE_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)([0-9]+)(?-u:\b)").expect("digit run pattern")
});

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]+").expect("separator pattern"));

/// Turns a folder identifier or document path into a human-readable title.
///
/// Inputs containing `/` are treated as paths: the last component is taken
/// without its extension. Bare identifiers only lose a trailing `.html`,
/// so a folder called `Sonic.2` keeps its number.
///
/// ```
/// assert_eq!(arcade_naming::display_name("superMario_64"), "Super Mario 64");
/// assert_eq!(arcade_naming::display_name("Retro/retro.bowl.html"), "Retro Bowl");
/// ```
pub fn display_name(input: &str) -> String {
    let stem = if input.contains('/') {
        base_name(input)
    } else {
        strip_document_extension(input)
    };

    let spaced = stem.replace('.', " ");
    let spaced = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");
    let spaced = STANDALONE_DIGITS.replace_all(&spaced, " $1 ");
    let spaced = SEPARATORS.replace_all(&spaced, " ");

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_document_extension(input: &str) -> &str {
    if has_extension(input, DOCUMENT_EXTENSION) {
        base_name(input)
    } else {
        input
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
