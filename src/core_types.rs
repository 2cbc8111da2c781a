//! Defines core data structures used throughout the application pipeline.
//!
//! `SelectionItem` describes one externally selected path, `SourceKind` names
//! the content source that produced an aggregated document and `Mode` picks
//! between the two user-facing commands.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What a path points at, resolved once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A regular file (after following symlinks).
    File,
    /// A directory (after following symlinks).
    Directory,
    /// Anything else: broken symlinks, sockets, vanished paths.
    Other,
}

/// A path selected in the host, with its kind.
///
/// # Examples
///
/// ```
/// use selcat::core_types::{ItemKind, SelectionItem};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// let file = temp.path().join("notes.txt");
/// fs::write(&file, "hi").unwrap();
///
/// assert_eq!(SelectionItem::from_path(&file).kind, ItemKind::File);
/// assert_eq!(SelectionItem::from_path(temp.path()).kind, ItemKind::Directory);
/// assert_eq!(SelectionItem::from_path(temp.path().join("gone")).kind, ItemKind::Other);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    /// The path as supplied by the host.
    pub path: PathBuf,
    /// The resolved kind of the path.
    pub kind: ItemKind,
}

impl SelectionItem {
    /// Resolves the kind of `path` with `fs::metadata` (symlinks are followed).
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let kind = match fs::metadata(&path) {
            Ok(md) if md.is_dir() => ItemKind::Directory,
            Ok(md) if md.is_file() => ItemKind::File,
            _ => ItemKind::Other,
        };
        Self { path, kind }
    }

    /// The base name used for classification and display.
    ///
    /// Paths without a final component (`.`, `..`, `dir/..`) are named after
    /// the directory they resolve to. Falls back to the full path when even
    /// that has no name (e.g. `/`).
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .or_else(|| {
                fs::canonicalize(&self.path)
                    .ok()
                    .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            })
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// The content source that produced an aggregated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Files and folders selected in the host.
    Selection,
    /// Text currently highlighted in the active application.
    SelectedText,
    /// Text on the system clipboard.
    Clipboard,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SourceKind::Selection => "selection",
            SourceKind::SelectedText => "highlighted text",
            SourceKind::Clipboard => "clipboard",
        };
        f.write_str(label)
    }
}

/// The two user-facing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Overwrite the destination and always open the editor.
    Write,
    /// Append to the destination, opening the editor subject to throttling.
    Append,
}
