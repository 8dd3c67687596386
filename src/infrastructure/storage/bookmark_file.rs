//! Bookmark persistence

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::bookmark::Bookmarks;
use crate::shared::errors::BookmarkError;

#[derive(Debug, Default, Serialize, Deserialize)]
struct BookmarkDocument {
    #[serde(default)]
    tokens: Vec<String>,
    #[serde(default)]
    pools: Vec<String>,
}

/// JSON file holding both bookmark sets
#[derive(Debug, Clone)]
pub struct BookmarkFile {
    path: PathBuf,
}

impl BookmarkFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load bookmarks. A missing file is an empty store.
    pub fn load(&self) -> Result<Bookmarks, BookmarkError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No bookmark file at {}, starting empty", self.path.display());
                return Ok(Bookmarks::new());
            }
            Err(source) => {
                return Err(BookmarkError::Read {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };

        let document: BookmarkDocument =
            serde_json::from_str(&content).map_err(|e| BookmarkError::Malformed(e.to_string()))?;

        Ok(Bookmarks {
            tokens: document.tokens.into_iter().collect(),
            pools: document.pools.into_iter().collect(),
        })
    }

    /// Write both sets, ids sorted so the file diffs cleanly
    pub fn save(&self, bookmarks: &Bookmarks) -> Result<(), BookmarkError> {
        let document = BookmarkDocument {
            tokens: bookmarks.tokens.sorted_ids(),
            pools: bookmarks.pools.sorted_ids(),
        };
        let json = serde_json::to_string_pretty(&document).map_err(|e| BookmarkError::Malformed(e.to_string()))?;

        fs::write(&self.path, json).map_err(|source| BookmarkError::Write {
            path: self.path.display().to_string(),
            source,
        })?;

        info!(
            "Saved {} token and {} pool bookmarks to {}",
            bookmarks.tokens.len(),
            bookmarks.pools.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> BookmarkFile {
        BookmarkFile::new(std::env::temp_dir().join(format!("poolboard-{}-{}", std::process::id(), name)))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let file = BookmarkFile::new("/nonexistent/poolboard/bookmarks.json");
        let bookmarks = file.load().unwrap();
        assert!(bookmarks.tokens.is_empty());
        assert!(bookmarks.pools.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let file = temp_file("bookmarks-roundtrip.json");
        let mut bookmarks = Bookmarks::new();
        bookmarks.tokens.add("0xb");
        bookmarks.tokens.add("0xa");
        bookmarks.pools.add("0xpool");

        file.save(&bookmarks).unwrap();
        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.find("0xa").unwrap() < content.find("0xb").unwrap());

        assert_eq!(file.load().unwrap(), bookmarks);
        fs::remove_file(file.path()).ok();
    }

    #[test]
    fn test_malformed_file() {
        let file = temp_file("bookmarks-bad.json");
        fs::write(file.path(), "[1, 2").unwrap();
        assert!(matches!(file.load(), Err(BookmarkError::Malformed(_))));
        fs::remove_file(file.path()).ok();
    }

    #[test]
    fn test_partial_document() {
        let file = temp_file("bookmarks-partial.json");
        fs::write(file.path(), r#"{"pools":["0xp"]}"#).unwrap();
        let bookmarks = file.load().unwrap();
        assert!(bookmarks.tokens.is_empty());
        assert!(bookmarks.pools.contains("0xp"));
        fs::remove_file(file.path()).ok();
    }
}
