//! Arcade menu builder entry point.
//!
//! Rewrites the `GAMES` array of the host document from the contents of
//! the games and images directories.

use std::path::PathBuf;

use anyhow::Context;
use arcade_config::Config;
use arcade_menu::{MenuBuilder, render_entries};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arcade-menu-builder", version)]
#[command(about = "Regenerate the games menu of the arcade host document")]
struct Args {
    /// Project root holding the games and images directories (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Print the generated entries instead of writing the host document
    #[arg(long)]
    dry_run: bool,

    /// Print dry-run entries as JSON
    #[arg(long, requires = "dry_run")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize structured logging. Stdout is kept for dry-run output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let root = project_root(args.root)?;

    let config = Config::load(&root)?;
    tracing::info!(root = %root.display(), "building games menu");

    let builder = MenuBuilder::from_config(&config, &root);
    let output = builder
        .build(args.dry_run)
        .with_context(|| format!("failed to build the games menu in {}", root.display()))?;

    if args.dry_run {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&output.entries)?);
        } else {
            println!("{}", render_entries(&output.entries, ""));
        }
    }

    let summary = output.summary;
    tracing::info!(
        games = summary.games,
        with_image = summary.with_image,
        without_image = summary.without_image,
        from_icon = summary.from_icon,
        from_pool = summary.from_pool,
        from_franchise = summary.from_franchise,
        written = output.written,
        "menu built"
    );
    Ok(())
}

/// Returns `root`, or the current directory when none was given.
fn project_root(root: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => std::env::current_dir().context("failed to determine the current directory"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["arcade-menu-builder"]).unwrap();
        assert!(args.root.is_none());
        assert!(!args.dry_run);
        assert!(!args.json);
    }

    #[test]
    fn root_and_dry_run() {
        let args =
            Args::try_parse_from(["arcade-menu-builder", "--root", "/srv/arcade", "--dry-run"])
                .unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/srv/arcade")));
        assert!(args.dry_run);
    }

    #[test]
    fn json_requires_dry_run() {
        assert!(Args::try_parse_from(["arcade-menu-builder", "--json"]).is_err());
        let args =
            Args::try_parse_from(["arcade-menu-builder", "--dry-run", "--json"]).unwrap();
        assert!(args.json);
    }

    #[test]
    fn project_root_defaults_to_current_dir() {
        let root = project_root(None).unwrap();
        assert_eq!(root, std::env::current_dir().unwrap());
        assert_eq!(
            project_root(Some(PathBuf::from("site"))).unwrap(),
            PathBuf::from("site")
        );
    }
}
