//! Project layout configuration.
//!
//! Configuration is read from an optional `arcade.toml` at the project
//! root. Every key has a default, so the file may be partial or absent:
//!
//! ```toml
//! games_dir = "games"
//! images_dir = "images"
//! host_document = "index.html"
//! default_entry = "index.html"
//!
//! [[franchise]]
//! keyword = "fnaf"
//! fallback = "fnaf1.jpeg"
//! variants = [{ markers = ["2"], image = "fnaf2.jpeg" }]
//! ```

use std::path::{Path, PathBuf};

use arcade_artwork::{FranchiseRule, default_franchise_rules};
use serde::{Deserialize, Serialize};

/// File name of the configuration file at the project root.
pub const CONFIG_FILE_NAME: &str = "arcade.toml";

/// Errors from loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Arcade project configuration. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Games root holding one folder per game.
    #[serde(default = "default_games_dir")]
    pub games_dir: String,

    /// Shared thumbnail directory.
    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    /// Document holding the generated `GAMES` array.
    #[serde(default = "default_host_document")]
    pub host_document: String,

    /// Preferred document inside a game folder.
    #[serde(default = "default_entry")]
    pub default_entry: String,

    /// Replaces the built-in franchise table when present.
    #[serde(default, rename = "franchise", skip_serializing_if = "Option::is_none")]
    pub franchises: Option<Vec<FranchiseRule>>,
}

fn default_games_dir() -> String {
    "games".into()
}

fn default_images_dir() -> String {
    "images".into()
}

fn default_host_document() -> String {
    "index.html".into()
}

fn default_entry() -> String {
    "index.html".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            games_dir: default_games_dir(),
            images_dir: default_images_dir(),
            host_document: default_host_document(),
            default_entry: default_entry(),
            franchises: None,
        }
    }
}

impl Config {
    /// Loads `arcade.toml` from `root`, or the defaults if there is none.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Franchise table to use: the configured one, else the built-in one.
    pub fn franchise_rules(&self) -> Vec<FranchiseRule> {
        self.franchises
            .clone()
            .unwrap_or_else(default_franchise_rules)
    }

    /// Resolves the configured paths against `root`.
    pub fn layout(&self, root: &Path) -> Layout {
        Layout {
            root: root.to_path_buf(),
            games_dir: root.join(&self.games_dir),
            images_dir: root.join(&self.images_dir),
            host_document: root.join(&self.host_document),
        }
    }
}

/// Absolute locations of the project's directories and files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub games_dir: PathBuf,
    pub images_dir: PathBuf,
    pub host_document: PathBuf,
}
