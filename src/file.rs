//! File handles and the load/save collaborators
//!
//! The highlighting core only ever sees plain text; this module is the
//! storage side that reads it in and writes it out. A [`Bookmark`] is
//! the remembered location of the last file, persisted so it can be
//! reopened after a restart.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};

/// Remembered location of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Location the bookmark resolves to
    pub path: PathBuf,
    /// Set when the location may no longer be valid
    pub stale: bool,
}

impl Bookmark {
    /// Create a fresh bookmark for a path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            stale: false,
        }
    }
}

/// An open document's name and where it lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// Display name (usually the file name)
    name: String,
    /// Resolved location, if known
    location: Option<PathBuf>,
    /// Persisted location for reopening
    bookmark: Option<Bookmark>,
}

impl FileHandle {
    /// Handle with a display name only
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
            bookmark: None,
        }
    }

    /// Handle for a file on disk, named after its last path component
    pub fn for_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());
        let mut handle = Self {
            name,
            location: Some(path.to_path_buf()),
            bookmark: None,
        };
        handle.resolve();
        handle
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get resolved location if set
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Get the persisted bookmark if any
    pub fn bookmark(&self) -> Option<&Bookmark> {
        self.bookmark.as_ref()
    }

    /// Flag the bookmark for refresh on the next resolve
    pub fn mark_stale(&mut self) {
        if let Some(bookmark) = &mut self.bookmark {
            bookmark.stale = true;
        }
    }

    /// Resolve the location, refreshing the bookmark when it is missing,
    /// stale, or points somewhere else.
    pub fn resolve(&mut self) -> Option<&Path> {
        let location = self.location.as_ref()?;
        let resolved = fs::canonicalize(location).unwrap_or_else(|_| location.clone());

        let refresh = match &self.bookmark {
            Some(bookmark) => bookmark.stale || bookmark.path != resolved,
            None => true,
        };
        if refresh {
            log::debug!("refreshing bookmark for {} -> {}", self.name, resolved.display());
            self.bookmark = Some(Bookmark::new(resolved));
        }

        self.location.as_deref()
    }
}

/// Read a file; returns its text and a handle for it
pub fn open(path: &Path) -> Result<(String, FileHandle)> {
    if !path.exists() {
        return Err(EditorError::FileNotFound(path.display().to_string()));
    }
    let text = fs::read_to_string(path)?;
    log::info!("opened {} ({} bytes)", path.display(), text.len());
    Ok((text, FileHandle::for_path(path)))
}

/// Write `text` back to the handle's location
pub fn save(handle: &mut FileHandle, text: &str) -> Result<()> {
    let path = handle.location().ok_or(EditorError::NoFile)?.to_path_buf();
    fs::write(&path, text)?;
    handle.resolve();
    log::info!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Write `text` to a new location; returns the handle for it
pub fn save_as(path: &Path, text: &str) -> Result<FileHandle> {
    fs::write(path, text)?;
    log::info!("exported {} bytes to {}", text.len(), path.display());
    Ok(FileHandle::for_path(path))
}

/// Persists the last document's bookmark between runs
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    /// File the bookmark is written to
    path: PathBuf,
}

impl BookmarkStore {
    /// Store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user's home directory
    pub fn default_location() -> Option<Self> {
        crate::config::home_dir().map(|home| Self::new(home.join(".synpad-bookmark.toml")))
    }

    /// The remembered handle, treating an unreadable store as empty
    pub fn recall(&self) -> Option<FileHandle> {
        match self.load() {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("ignoring {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Load the remembered handle, if any.
    ///
    /// A bookmark whose target no longer exists comes back stale.
    pub fn load(&self) -> Result<Option<FileHandle>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let table: toml::Table = contents.parse()?;

        let Some(entry) = table.get("bookmark").and_then(|v| v.as_table()) else {
            return Ok(None);
        };
        let Some(path) = entry.get("path").and_then(|v| v.as_str()) else {
            return Ok(None);
        };
        let path = PathBuf::from(path);
        let name = entry
            .get("name")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| FileHandle::for_path(&path).name);

        let mut bookmark = Bookmark::new(path.clone());
        bookmark.stale = !path.exists();

        Ok(Some(FileHandle {
            name,
            location: Some(path),
            bookmark: Some(bookmark),
        }))
    }

    /// Remember `handle`. Handles without a bookmark are not stored.
    pub fn store(&self, handle: &FileHandle) -> Result<()> {
        let Some(bookmark) = handle.bookmark() else {
            return Ok(());
        };

        let mut entry = toml::Table::new();
        entry.insert("name".into(), toml::Value::String(handle.name().to_string()));
        entry.insert(
            "path".into(),
            toml::Value::String(bookmark.path.to_string_lossy().into_owned()),
        );
        let mut doc = toml::Table::new();
        doc.insert("bookmark".into(), toml::Value::Table(entry));

        let contents = toml::to_string(&doc).map_err(|e| EditorError::Message(e.to_string()))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Forget the remembered handle
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.rs");
        fs::write(&path, "fn main() {}\n").unwrap();

        let (text, mut handle) = open(&path).unwrap();
        assert_eq!(text, "fn main() {}\n");
        assert_eq!(handle.name(), "main.rs");
        assert!(handle.bookmark().is_some());

        save(&mut handle, "fn main() { 1 }\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fn main() { 1 }\n");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = open(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, EditorError::FileNotFound(_)));
    }

    #[test]
    fn test_save_without_location() {
        let mut handle = FileHandle::new("untitled");
        assert!(matches!(save(&mut handle, "x"), Err(EditorError::NoFile)));
    }

    #[test]
    fn test_save_as_creates_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copy.py");
        let handle = save_as(&path, "pass\n").unwrap();
        assert_eq!(handle.name(), "copy.py");
        assert_eq!(handle.location(), Some(path.as_path()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "pass\n");
    }

    #[test]
    fn test_stale_bookmark_refreshed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "a").unwrap();

        let mut handle = FileHandle::for_path(&path);
        handle.mark_stale();
        assert!(handle.bookmark().unwrap().stale);
        handle.resolve();
        assert!(!handle.bookmark().unwrap().stale);
    }

    #[test]
    fn test_moved_location_refreshes_bookmark() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "1").unwrap();
        fs::write(&second, "2").unwrap();

        let mut handle = FileHandle::for_path(&first);
        let before = handle.bookmark().unwrap().path.clone();
        handle.location = Some(second.clone());
        handle.resolve();
        assert_ne!(handle.bookmark().unwrap().path, before);
        assert_eq!(handle.bookmark().unwrap().path, fs::canonicalize(&second).unwrap());
    }

    #[test]
    fn test_bookmark_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("notes.swift");
        fs::write(&doc, "let x = 1").unwrap();
        let store = BookmarkStore::new(dir.path().join("bookmark.toml"));

        assert_eq!(store.load().unwrap(), None);

        let handle = FileHandle::for_path(&doc);
        store.store(&handle).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.name(), "notes.swift");
        assert!(!loaded.bookmark().unwrap().stale);

        fs::remove_file(&doc).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.bookmark().unwrap().stale);

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_store_recalls_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmark.toml");
        fs::write(&path, "[bookmark\npath = ").unwrap();

        let store = BookmarkStore::new(&path);
        assert!(matches!(store.load(), Err(EditorError::Config(_))));
        assert_eq!(store.recall(), None);
    }

    #[test]
    fn test_store_skips_handle_without_bookmark() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::new(dir.path().join("bookmark.toml"));
        store.store(&FileHandle::new("untitled")).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
