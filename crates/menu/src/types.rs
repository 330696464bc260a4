//! Data types for the menu build.

use serde::Serialize;

/// One game as it appears in the generated menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEntry {
    /// Folder name under the games root.
    #[serde(skip)]
    pub folder: String,
    /// Document path relative to the games root, e.g. `Tetris/index.html`.
    pub file: String,
    /// Human-readable title.
    pub name: String,
    /// Thumbnail path relative to the project root, if one was found.
    pub image: Option<String>,
}

/// Where a game's thumbnail came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// `icon.<ext>` inside the game folder.
    Icon,
    /// Name match in the shared image directory.
    Pool,
    /// Forced by a franchise rule.
    Franchise,
    /// No thumbnail.
    None,
}

/// Counts reported after a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub games: usize,
    pub with_image: usize,
    pub without_image: usize,
    pub from_icon: usize,
    pub from_pool: usize,
    pub from_franchise: usize,
}

impl BuildSummary {
    pub(crate) fn record(&mut self, source: ImageSource) {
        self.games += 1;
        match source {
            ImageSource::Icon => self.from_icon += 1,
            ImageSource::Pool => self.from_pool += 1,
            ImageSource::Franchise => self.from_franchise += 1,
            ImageSource::None => {}
        }
        if source == ImageSource::None {
            self.without_image += 1;
        } else {
            self.with_image += 1;
        }
    }
}

/// Result of a build run.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// Entries in menu order.
    pub entries: Vec<GameEntry>,
    pub summary: BuildSummary,
    /// Whether the host document content differs from the generated one.
    pub changed: bool,
    /// Whether the host document was written.
    pub written: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_by_source() {
        let mut summary = BuildSummary::default();
        for source in [
            ImageSource::Icon,
            ImageSource::Pool,
            ImageSource::Pool,
            ImageSource::Franchise,
            ImageSource::None,
        ] {
            summary.record(source);
        }

        assert_eq!(summary.games, 5);
        assert_eq!(summary.with_image, 4);
        assert_eq!(summary.without_image, 1);
        assert_eq!(summary.from_icon, 1);
        assert_eq!(summary.from_pool, 2);
        assert_eq!(summary.from_franchise, 1);
    }

    #[test]
    fn game_entry_json_omits_folder() {
        let entry = GameEntry {
            folder: "A".into(),
            file: "A/a.html".into(),
            name: "A".into(),
            image: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"file":"A/a.html","name":"A","image":null}"#);
    }
}
