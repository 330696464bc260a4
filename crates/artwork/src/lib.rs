//! Thumbnail discovery for arcade games.
//!
//! Two sources, checked in this order by the menu builder:
//!
//! 1. **Per-game icon**: an `icon.<ext>` file somewhere inside the game's
//!    own folder ([`find_icon`]).
//! 2. **Shared pool**: the flat image directory, matched by name
//!    heuristics ([`ImageResolver`]).

pub mod error;
pub mod icon;
mod listing;
pub mod pool;
pub mod resolver;

// Re-export primary types for convenience.
pub use error::ArtworkError;
pub use icon::{ICON_EXTENSIONS, find_icon, is_icon_file};
pub use pool::{IMAGE_EXTENSIONS, ImageCandidate, ImagePool, is_image_file};
pub use resolver::{
    FranchiseRule, FranchiseVariant, ImageMatch, ImageResolver, MatchTier,
    default_franchise_rules,
};
