//! Artwork error types.

use std::path::PathBuf;

/// Errors produced while discovering thumbnails.
#[derive(Debug, thiserror::Error)]
pub enum ArtworkError {
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("icon {} is outside the project root {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
}
