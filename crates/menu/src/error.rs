//! Menu builder error types.

use std::path::PathBuf;

/// Errors produced while building the games menu.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read host document {}: {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write host document {}: {source}", path.display())]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find `{marker}` in host document")]
    MarkerNotFound { marker: &'static str },

    #[error(transparent)]
    Artwork(#[from] arcade_artwork::ArtworkError),
}
