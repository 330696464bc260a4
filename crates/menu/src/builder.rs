//! Menu build orchestration.
//!
//! For each game folder (in menu order) the builder picks a document,
//! derives a display name and a thumbnail, then rewrites the generated
//! region of the host document in a single write.

use std::path::Path;

use arcade_artwork::{FranchiseRule, ImagePool, ImageResolver, MatchTier, find_icon};
use arcade_config::{Config, Layout};
use arcade_naming::display_name;
use tracing::{debug, info};

use crate::error::MenuError;
use crate::render::splice_games;
use crate::scanner::{GameFolder, discover_games};
use crate::types::{BuildOutput, BuildSummary, GameEntry, ImageSource};

/// Builds the games menu for one project layout.
#[derive(Debug, Clone)]
pub struct MenuBuilder {
    layout: Layout,
    default_entry: String,
    franchises: Vec<FranchiseRule>,
}

impl MenuBuilder {
    /// Creates a builder with the default entry point and franchise table.
    pub fn new(layout: Layout) -> Self {
        let config = Config::default();
        let franchises = config.franchise_rules();
        Self {
            layout,
            default_entry: config.default_entry,
            franchises,
        }
    }

    /// Creates a builder for the project at `root` as described by `config`.
    pub fn from_config(config: &Config, root: &Path) -> Self {
        Self {
            layout: config.layout(root),
            default_entry: config.default_entry.clone(),
            franchises: config.franchise_rules(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Scans the games root and resolves every game, without touching the
    /// host document.
    pub fn collect_entries(&self) -> Result<(Vec<GameEntry>, BuildSummary), MenuError> {
        let games = discover_games(&self.layout.games_dir, &self.default_entry)?;
        let pool = ImagePool::load(&self.layout.images_dir)?;
        let resolver = ImageResolver::with_franchises(pool, self.franchises.clone());
        let image_prefix = self.relative_to_root(&self.layout.images_dir);

        let mut summary = BuildSummary::default();
        let mut entries = Vec::with_capacity(games.len());
        for game in &games {
            let (entry, source) = self.resolve_game(game, &resolver, &image_prefix)?;
            debug!(
                folder = %entry.folder,
                file = %entry.file,
                name = %entry.name,
                image = ?entry.image,
                source = ?source,
                "resolved game"
            );
            summary.record(source);
            entries.push(entry);
        }

        Ok((entries, summary))
    }

    /// Regenerates the `GAMES` region of the host document.
    ///
    /// The document is read, spliced in memory and written back in one
    /// write. Nothing is written when a marker is missing, when the content
    /// is already up to date, or when `dry_run` is set.
    pub fn build(&self, dry_run: bool) -> Result<BuildOutput, MenuError> {
        let (entries, summary) = self.collect_entries()?;

        let path = &self.layout.host_document;
        let current = std::fs::read_to_string(path).map_err(|source| MenuError::ReadDocument {
            path: path.clone(),
            source,
        })?;
        let updated = splice_games(&current, &entries)?;
        let changed = updated != current;

        let written = changed && !dry_run;
        if written {
            std::fs::write(path, &updated).map_err(|source| MenuError::WriteDocument {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), games = entries.len(), "host document updated");
        } else if !changed {
            info!(path = %path.display(), "host document already up to date");
        }

        Ok(BuildOutput {
            entries,
            summary,
            changed,
            written,
        })
    }

    fn resolve_game(
        &self,
        game: &GameFolder,
        resolver: &ImageResolver,
        image_prefix: &str,
    ) -> Result<(GameEntry, ImageSource), MenuError> {
        let file = game.path();

        // Default entry points are named after their folder.
        let (name, query) = if game.is_default_entry {
            (display_name(&game.folder), game.folder.as_str())
        } else {
            (display_name(&file), game.document.as_str())
        };

        let game_dir = self.layout.games_dir.join(&game.folder);
        let (image, source) = match find_icon(&game_dir, &self.layout.root)? {
            Some(icon) => (Some(icon), ImageSource::Icon),
            None => match resolver.resolve_with_tier(query) {
                Some(found) => {
                    let source = match found.tier {
                        MatchTier::Franchise => ImageSource::Franchise,
                        MatchTier::Exact | MatchTier::Contains => ImageSource::Pool,
                    };
                    (Some(join_link(image_prefix, found.file)), source)
                }
                None => (None, ImageSource::None),
            },
        };

        let entry = GameEntry {
            folder: game.folder.clone(),
            file,
            name,
            image,
        };
        Ok((entry, source))
    }

    /// `/`-separated path of `path` relative to the project root; paths
    /// outside the root are kept as they are.
    fn relative_to_root(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.layout.root).unwrap_or(path);
        rel.to_string_lossy().replace('\\', "/")
    }
}

fn join_link(prefix: &str, file: &str) -> String {
    if prefix.is_empty() {
        file.to_string()
    } else {
        format!("{}/{file}", prefix.trim_end_matches('/'))
    }
}
