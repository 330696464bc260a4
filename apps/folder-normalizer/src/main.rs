//! Arcade folder normalizer entry point.
//!
//! One-time migration: moves every loose `<name>.html` in the games
//! directory into its own `<name>/` folder.

use std::path::PathBuf;

use anyhow::Context;
use arcade_config::Config;
use arcade_file_ops::normalize_game_folders;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arcade-folder-normalizer", version)]
#[command(about = "Move loose game documents into per-game folders")]
struct Args {
    /// Project root holding the games directory (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Report the moves without touching the disk
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("failed to determine the current directory")?,
    };

    let config = Config::load(&root)?;
    let games_dir = config.layout(&root).games_dir;

    let report = normalize_game_folders(&games_dir, args.dry_run)
        .with_context(|| format!("failed to normalize {}", games_dir.display()))?;

    if args.dry_run {
        tracing::info!(pending = report.moved.len(), "dry run, nothing moved");
    } else {
        tracing::info!(moved = report.moved.len(), "games moved into their own folders");
    }
    Ok(())
}
