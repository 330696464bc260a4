//! Per-game icon discovery.
//!
//! A game folder may ship its own thumbnail as `icon.<ext>` anywhere in
//! its tree. The shallowest match wins: every file of a directory is
//! checked before any of its subdirectories is entered.

use std::path::{Path, PathBuf};

use arcade_naming::{base_name, extension};

use crate::error::ArtworkError;
use crate::listing::{is_hidden, list_dir};

/// Base name (case-insensitive) of a per-game icon file.
pub const ICON_NAME: &str = "icon";

/// Extensions accepted for per-game icons.
pub const ICON_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "avif", "ico"];

/// Searches `game_dir` for an icon and returns its path relative to
/// `project_root`, using `/` as separator.
///
/// Siblings are visited in name order and hidden directories are skipped.
/// Returns `None` when the folder holds no icon.
pub fn find_icon(game_dir: &Path, project_root: &Path) -> Result<Option<String>, ArtworkError> {
    let Some(found) = search_dir(game_dir)? else {
        return Ok(None);
    };

    let rel_path = found
        .strip_prefix(project_root)
        .map_err(|_| ArtworkError::OutsideRoot {
            path: found.clone(),
            root: project_root.to_path_buf(),
        })?;

    // Normalize to forward slashes.
    Ok(Some(rel_path.to_string_lossy().replace('\\', "/")))
}

/// Returns true if `file_name` is an icon file name.
pub fn is_icon_file(file_name: &str) -> bool {
    base_name(file_name).eq_ignore_ascii_case(ICON_NAME)
        && extension(file_name).is_some_and(|ext| ICON_EXTENSIONS.contains(&ext.as_str()))
}

fn search_dir(dir: &Path) -> Result<Option<PathBuf>, ArtworkError> {
    let listing = list_dir(dir)?;

    if let Some(name) = listing.files.iter().find(|name| is_icon_file(name)) {
        return Ok(Some(dir.join(name)));
    }

    for name in listing.dirs.iter().filter(|name| !is_hidden(name)) {
        if let Some(found) = search_dir(&dir.join(name))? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}
