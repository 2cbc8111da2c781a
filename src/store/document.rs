//! Storage for the destination document.

use crate::errors::{Error, Result};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The single destination document and its directory.
pub trait DocumentStore {
    /// Location of the document, used in messages and for the editor.
    fn path(&self) -> &Path;

    /// Creates the containing directory (recursively) if it is missing.
    fn ensure_dir(&self) -> Result<()>;

    /// Replaces the whole document, creating it if absent.
    fn overwrite(&self, text: &str) -> Result<()>;

    /// Appends `text` verbatim, creating the document if absent.
    fn append(&self, text: &str) -> Result<()>;

    /// `true` when the document is missing or has zero length.
    fn is_empty(&self) -> bool;
}

/// The destination document on the local file system.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    path: PathBuf,
}

impl FsDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_error(&self, source: io::Error) -> Error {
        Error::WriteDocument {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl DocumentStore for FsDocumentStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        if dir.as_os_str().is_empty() || dir.is_dir() {
            return Ok(());
        }
        debug!("Creating destination directory {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| Error::CreateDestination {
            path: dir.display().to_string(),
            source,
        })
    }

    fn overwrite(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text).map_err(|e| self.write_error(e))
    }

    fn append(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| self.write_error(e))
    }

    fn is_empty(&self) -> bool {
        fs::metadata(&self.path)
            .map(|md| md.len() == 0)
            .unwrap_or(true)
    }
}

/// An in-memory document, for tests.
///
/// `None` means the document does not exist yet.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    path: PathBuf,
    content: Mutex<Option<String>>,
    fail_writes: bool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("memory/aggregated.md"),
            ..Default::default()
        }
    }

    /// A store whose writes always fail with "permission denied".
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    /// Seeds the document with existing content.
    pub fn with_content(content: &str) -> Self {
        let store = Self::new();
        *store.lock() = Some(content.to_string());
        store
    }

    /// The current content, `None` if nothing was ever written.
    pub fn content(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.content.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(Error::WriteDocument {
                path: self.path.display().to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        Ok(())
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> Result<()> {
        Ok(())
    }

    fn overwrite(&self, text: &str) -> Result<()> {
        self.check_writable()?;
        *self.lock() = Some(text.to_string());
        Ok(())
    }

    fn append(&self, text: &str) -> Result<()> {
        self.check_writable()?;
        self.lock().get_or_insert_with(String::new).push_str(text);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.lock().as_deref().map_or(true, str::is_empty)
    }
}
