//! Arcade menu generation.
//!
//! Scans the games root, resolves a display name and a thumbnail for each
//! game and rewrites the generated `GAMES` array of the host document.
//!
//! # Pipeline
//!
//! 1. **Scan**: list game folders and pick each one's document
//! 2. **Name**: derive a title from the folder or the document
//! 3. **Thumbnail**: per-game icon, else the shared image pool
//! 4. **Splice**: replace the region between `const GAMES = [` and `];`

pub mod builder;
pub mod error;
pub mod render;
pub mod scanner;
pub mod types;

// Re-export primary types for convenience.
pub use builder::MenuBuilder;
pub use error::MenuError;
pub use render::{END_MARKER, START_MARKER, render_entries, render_entry, splice_games};
pub use scanner::{GameFolder, discover_games};
pub use types::{BuildOutput, BuildSummary, GameEntry, ImageSource};
