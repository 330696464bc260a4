//! Migration of loose game documents into per-game folders.

use std::path::{Path, PathBuf};

use arcade_naming::{base_name, is_document_name};

use crate::error::FileOpsError;

/// A loose document and the folder it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedDocument {
    /// Document file name, e.g. `tetris.html`.
    pub file: String,
    /// Target folder name under the games root, e.g. `tetris`.
    pub folder: String,
}

impl MovedDocument {
    /// Path of the document relative to the games root after the move.
    pub fn target(&self) -> String {
        format!("{}/{}", self.folder, self.file)
    }
}

/// Outcome of a normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Documents moved (or, in a dry run, that would be moved), in name order.
    pub moved: Vec<MovedDocument>,
}

/// Lists the loose documents directly inside `games_dir` and where each
/// one would go.
///
/// Fails with [`FileOpsError::Collision`] if a target document already
/// exists, so nothing gets overwritten.
pub fn plan_moves(games_dir: &Path) -> Result<Vec<MovedDocument>, FileOpsError> {
    let read_err = |source: std::io::Error| FileOpsError::ReadDir {
        path: games_dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(games_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.file_type().map_err(read_err)?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !is_document_name(&name) {
            continue;
        }
        files.push(name);
    }
    files.sort();

    let mut moves = Vec::with_capacity(files.len());
    for file in files {
        let folder = base_name(&file).to_string();
        let target = games_dir.join(&folder).join(&file);
        if target.exists() {
            return Err(FileOpsError::Collision { path: target });
        }
        moves.push(MovedDocument { file, folder });
    }

    Ok(moves)
}

/// Moves every loose `<name>.html` in `games_dir` to `<name>/<name>.html`.
///
/// Folders are created as needed. Running it again once every document has
/// been moved is a no-op. With `dry_run` the moves are planned and reported
/// but the disk is left untouched. An error aborts the run; documents
/// already moved stay where they are.
pub fn normalize_game_folders(
    games_dir: &Path,
    dry_run: bool,
) -> Result<NormalizeReport, FileOpsError> {
    let moves = plan_moves(games_dir)?;

    if dry_run {
        for doc in &moves {
            tracing::info!(from = %doc.file, to = %doc.target(), "would move");
        }
        return Ok(NormalizeReport { moved: moves });
    }

    for doc in &moves {
        let folder = ensure_game_dir(&games_dir.join(&doc.folder))?;
        let from = games_dir.join(&doc.file);
        let to = folder.join(&doc.file);

        std::fs::rename(&from, &to).map_err(|source| FileOpsError::Move {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        tracing::info!(from = %doc.file, to = %doc.target(), "moved");
    }

    Ok(NormalizeReport { moved: moves })
}

/// Ensures a game folder exists, creating it if necessary.
fn ensure_game_dir(path: &Path) -> Result<PathBuf, FileOpsError> {
    std::fs::create_dir_all(path).map_err(|source| FileOpsError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Sorted list of every file under `root`, relative, `/`-separated.
    fn layout(root: &Path) -> Vec<String> {
        fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    walk(root, &path, out);
                } else {
                    let rel = path.strip_prefix(root).unwrap();
                    out.push(rel.to_string_lossy().replace('\\', "/"));
                }
            }
        }
        let mut out = Vec::new();
        walk(root, root, &mut out);
        out.sort();
        out
    }

    fn create_loose_games() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("tetris.html"), "<html>tetris</html>").unwrap();
        fs::write(root.join("Slope.HTML"), "<html>slope</html>").unwrap();
        fs::write(root.join("readme.txt"), "not a game").unwrap();
        fs::write(root.join(".draft.html"), "hidden").unwrap();
        fs::create_dir_all(root.join("Mario")).unwrap();
        fs::write(root.join("Mario").join("index.html"), "<html>mario</html>").unwrap();
        dir
    }

    #[test]
    fn moves_loose_documents_into_folders() {
        let dir = create_loose_games();
        let report = normalize_game_folders(dir.path(), false).unwrap();

        let targets: Vec<String> = report.moved.iter().map(MovedDocument::target).collect();
        assert_eq!(targets, vec!["Slope/Slope.HTML", "tetris/tetris.html"]);

        assert_eq!(
            layout(dir.path()),
            vec![
                ".draft.html",
                "Mario/index.html",
                "Slope/Slope.HTML",
                "readme.txt",
                "tetris/tetris.html",
            ]
        );
        let content = fs::read_to_string(dir.path().join("tetris").join("tetris.html")).unwrap();
        assert_eq!(content, "<html>tetris</html>");
    }

    #[test]
    fn uses_existing_folder() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("snake").join("assets")).unwrap();
        fs::write(dir.path().join("snake.html"), "<html></html>").unwrap();

        normalize_game_folders(dir.path(), false).unwrap();

        assert!(dir.path().join("snake").join("snake.html").is_file());
        assert!(dir.path().join("snake").join("assets").is_dir());
        assert!(!dir.path().join("snake.html").exists());
    }

    #[test]
    fn second_run_is_a_no_op() {
        let dir = create_loose_games();
        normalize_game_folders(dir.path(), false).unwrap();
        let after_first = layout(dir.path());

        let report = normalize_game_folders(dir.path(), false).unwrap();
        assert!(report.moved.is_empty());
        assert_eq!(layout(dir.path()), after_first);
    }

    #[test]
    fn dry_run_leaves_disk_untouched() {
        let dir = create_loose_games();
        let before = layout(dir.path());

        let report = normalize_game_folders(dir.path(), true).unwrap();
        assert_eq!(report.moved.len(), 2);
        assert_eq!(layout(dir.path()), before);
    }

    #[test]
    fn collision_aborts_before_moving() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("tetris")).unwrap();
        fs::write(dir.path().join("tetris").join("tetris.html"), "old").unwrap();
        fs::write(dir.path().join("tetris.html"), "new").unwrap();

        let result = normalize_game_folders(dir.path(), false);
        assert!(matches!(result, Err(FileOpsError::Collision { .. })));

        let kept = fs::read_to_string(dir.path().join("tetris").join("tetris.html")).unwrap();
        assert_eq!(kept, "old");
        assert!(dir.path().join("tetris.html").exists());
    }

    #[test]
    fn file_in_place_of_folder_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tetris"), "a file, not a folder").unwrap();
        fs::write(dir.path().join("tetris.html"), "<html></html>").unwrap();

        let result = normalize_game_folders(dir.path(), false);
        assert!(matches!(result, Err(FileOpsError::CreateDir { .. })));
    }

    #[test]
    fn missing_games_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = normalize_game_folders(&dir.path().join("games"), false);
        assert!(matches!(result, Err(FileOpsError::ReadDir { .. })));
    }

    #[test]
    fn empty_games_dir() {
        let dir = TempDir::new().unwrap();
        let report = normalize_game_folders(dir.path(), false).unwrap();
        assert_eq!(report, NormalizeReport::default());
    }
}
