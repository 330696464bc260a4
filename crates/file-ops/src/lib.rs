//! File operations on the arcade games directory.
//!
//! The games root is expected to hold one folder per game. Older layouts
//! kept every game as a loose `<name>.html` next to the folders;
//! [`normalize_game_folders`] migrates those into `<name>/<name>.html`.

mod error;
mod normalize;

pub use error::FileOpsError;
pub use normalize::{MovedDocument, NormalizeReport, normalize_game_folders, plan_moves};
