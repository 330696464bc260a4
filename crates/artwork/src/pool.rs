//! The shared thumbnail pool.

use std::path::Path;

use arcade_naming::{base_name, extension, slug};

use crate::error::ArtworkError;
use crate::listing::{is_hidden, list_dir};

/// Extensions accepted in the shared image directory.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// A thumbnail file in the shared image directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    /// File name, e.g. `Sonic 2.png`.
    pub file: String,
    /// File name without extension, e.g. `Sonic 2`.
    pub name: String,
    /// Comparison key of `name`, e.g. `sonic2`.
    pub slug: String,
}

impl ImageCandidate {
    pub fn new(file: impl Into<String>) -> Self {
        let file = file.into();
        let name = base_name(&file).to_string();
        let slug = slug(&name);
        Self { file, name, slug }
    }
}

/// All thumbnail candidates, in file name order.
#[derive(Debug, Clone, Default)]
pub struct ImagePool {
    candidates: Vec<ImageCandidate>,
}

impl ImagePool {
    /// Enumerates the image files directly inside `dir`.
    ///
    /// Hidden files and files with other extensions are ignored.
    pub fn load(dir: &Path) -> Result<Self, ArtworkError> {
        let listing = list_dir(dir)?;
        let pool = Self::from_files(listing.files.into_iter().filter(|f| is_image_file(f)));
        tracing::debug!(dir = %dir.display(), images = pool.len(), "image pool loaded");
        Ok(pool)
    }

    /// Builds a pool from file names. The names are sorted.
    pub fn from_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut candidates: Vec<ImageCandidate> =
            files.into_iter().map(ImageCandidate::new).collect();
        candidates.sort_by(|a, b| a.file.cmp(&b.file));
        Self { candidates }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageCandidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains(&self, file: &str) -> bool {
        self.candidates.iter().any(|c| c.file == file)
    }
}

/// Returns true if `file_name` is a visible image usable as a thumbnail.
pub fn is_image_file(file_name: &str) -> bool {
    !is_hidden(file_name)
        && extension(file_name).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn candidate_derives_name_and_slug() {
        let c = ImageCandidate::new("Sonic 2.PNG");
        assert_eq!(c.file, "Sonic 2.PNG");
        assert_eq!(c.name, "Sonic 2");
        assert_eq!(c.slug, "sonic2");
    }

    #[test]
    fn image_file_filter() {
        assert!(is_image_file("a.png"));
        assert!(is_image_file("a.JPEG"));
        assert!(is_image_file("a.webp"));
        assert!(!is_image_file("a.avif"));
        assert!(!is_image_file("a.ico"));
        assert!(!is_image_file(".thumb.png"));
        assert!(!is_image_file("readme.md"));
    }

    #[test]
    fn from_files_sorts_by_name() {
        let pool = ImagePool::from_files(["sonic.png", "mario.jpg", "Zelda.gif"]);
        let files: Vec<&str> = pool.iter().map(|c| c.file.as_str()).collect();
        assert_eq!(files, vec!["Zelda.gif", "mario.jpg", "sonic.png"]);
    }

    #[test]
    fn load_filters_directory_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("a.png"), b"PNG").unwrap();
        fs::write(dir.join("b.jpeg"), b"JPG").unwrap();
        fs::write(dir.join(".DS_Store"), b"").unwrap();
        fs::write(dir.join(".hidden.png"), b"PNG").unwrap();
        fs::write(dir.join("notes.txt"), b"TXT").unwrap();
        fs::create_dir(dir.join("nested.png")).unwrap();

        let pool = ImagePool::load(dir).unwrap();
        assert_eq!(pool.len(), 2);
        assert!(pool.contains("a.png"));
        assert!(pool.contains("b.jpeg"));
        assert!(!pool.contains("nested.png"));
    }

    #[test]
    fn load_missing_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(ImagePool::load(&tmp.path().join("images")).is_err());
    }
}
