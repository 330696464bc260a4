//! Sorted directory listings.

use std::path::Path;

use crate::error::ArtworkError;

/// Entries of a single directory, split by kind and sorted by name.
///
/// Symbolic links are neither files nor directories here. Names that are
/// not valid UTF-8 are skipped with a warning.
#[derive(Debug, Default)]
pub(crate) struct Listing {
    pub files: Vec<String>,
    pub dirs: Vec<String>,
}

pub(crate) fn list_dir(dir: &Path) -> Result<Listing, ArtworkError> {
    let read_err = |source: std::io::Error| ArtworkError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut listing = Listing::default();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!(dir = %dir.display(), name = ?raw, "skipping non UTF-8 entry");
                continue;
            }
        };

        if file_type.is_file() {
            listing.files.push(name);
        } else if file_type.is_dir() {
            listing.dirs.push(name);
        }
    }

    listing.files.sort();
    listing.dirs.sort();
    Ok(listing)
}

/// Hidden entries start with a dot.
pub(crate) fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
