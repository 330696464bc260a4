//! Game folder discovery.
//!
//! Lists the games root and picks the document that represents each game.

use std::cmp::Ordering;
use std::path::Path;

use arcade_naming::is_document_name;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::MenuError;

/// A game folder and its chosen document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFolder {
    /// Folder name under the games root.
    pub folder: String,
    /// Document file name inside the folder.
    pub document: String,
    /// True if `document` is the folder's default entry point.
    pub is_default_entry: bool,
}

impl GameFolder {
    /// Document path relative to the games root, `/`-separated.
    pub fn path(&self) -> String {
        format!("{}/{}", self.folder, self.document)
    }
}

/// Lists the game folders under `games_dir` in menu order.
///
/// Hidden folders are skipped, and so are folders without any document.
/// Inside a folder, `default_entry` (matched ignoring case) is preferred,
/// else the first document by name.
pub fn discover_games(games_dir: &Path, default_entry: &str) -> Result<Vec<GameFolder>, MenuError> {
    let mut folders: Vec<String> = list_entries(games_dir)?
        .into_iter()
        .filter(|(name, is_dir)| *is_dir && !name.starts_with('.'))
        .map(|(name, _)| name)
        .collect();
    folders.sort_by(|a, b| compare_folder_names(a, b));

    let mut games = Vec::with_capacity(folders.len());
    for folder in folders {
        let mut documents: Vec<String> = list_entries(&games_dir.join(&folder))?
            .into_iter()
            .filter(|(name, is_dir)| !*is_dir && is_document_name(name))
            .map(|(name, _)| name)
            .collect();
        documents.sort();

        let default = documents
            .iter()
            .position(|d| d.eq_ignore_ascii_case(default_entry));
        let (document, is_default_entry) = match default {
            Some(idx) => (documents.swap_remove(idx), true),
            None if !documents.is_empty() => (documents.swap_remove(0), false),
            None => {
                tracing::debug!(folder = %folder, "no game document, skipping folder");
                continue;
            }
        };

        games.push(GameFolder {
            folder,
            document,
            is_default_entry,
        });
    }

    Ok(games)
}

/// Name order ignoring case and accents, so `Éclair` sorts between
/// `apple` and `Zelda`. Names equal at that level fall back to lowercase
/// and then byte order so the result is total.
pub fn compare_folder_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Lowercased canonical decomposition with combining marks removed.
fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns `(name, is_dir)` for each file or directory in `dir`.
fn list_entries(dir: &Path) -> Result<Vec<(String, bool)>, MenuError> {
    let read_err = |source: std::io::Error| MenuError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;
        if !file_type.is_dir() && !file_type.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push((name, file_type.is_dir()));
    }
    Ok(entries)
}
