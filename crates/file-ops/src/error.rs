//! Error types for games directory operations.

use std::path::PathBuf;

/// Errors produced while reorganizing the games directory.
#[derive(Debug, thiserror::Error)]
pub enum FileOpsError {
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create folder {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move {} to {}: {source}", from.display(), to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to overwrite existing document {}", path.display())]
    Collision { path: PathBuf },
}
