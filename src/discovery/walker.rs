use crate::core_types::ItemKind;
use log::trace;
use rayon::prelude::*;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use tracing::instrument;

use super::entry_processor::{render_entry, RenderedEntry};

/// The rendered text of one directory level and everything below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOutput {
    /// Structure lines of the direct entries, a blank line, then the blocks.
    pub text: String,
    /// The full recursive structure listing below the directory.
    pub tree: String,
    /// Countable files anywhere below the directory.
    pub file_count: usize,
}

struct DirItem {
    path: PathBuf,
    name: String,
    kind: ItemKind,
}

/// Enumerates and renders `dir`, whose entries sit at `depth`.
///
/// Entries are rendered in parallel and reassembled in sorted name order.
/// Only a failure to list `dir` itself is returned; failures below it are
/// rendered as placeholders.
#[instrument(level = "debug", skip_all, fields(dir = %dir.display(), depth = depth))]
pub(crate) fn walk_directory(dir: &Path, relative: &Path, depth: usize) -> io::Result<WalkOutput> {
    let items = read_sorted_entries(dir)?;
    trace!("{} entries in {}", items.len(), dir.display());

    let rendered: Vec<RenderedEntry> = items
        .par_iter()
        .map(|item| render_entry(&item.path, &relative.join(&item.name), depth, item.kind))
        .collect();

    let mut structure = String::new();
    let mut tree = String::new();
    let mut blocks = Vec::with_capacity(rendered.len());
    let mut file_count = 0;
    for entry in rendered {
        structure.push_str(&entry.line);
        tree.push_str(&entry.line);
        tree.push_str(&entry.subtree);
        blocks.push(entry.block);
        file_count += entry.file_count;
    }

    let text = if structure.is_empty() {
        blocks.join("\n")
    } else {
        format!("{}\n{}", structure, blocks.join("\n"))
    };

    Ok(WalkOutput {
        text,
        tree,
        file_count,
    })
}

fn read_sorted_entries(dir: &Path) -> io::Result<Vec<DirItem>> {
    let mut items = fs::read_dir(dir)?
        .map(|entry| entry.map(to_item))
        .collect::<io::Result<Vec<_>>>()?;
    items.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(items)
}

fn to_item(entry: DirEntry) -> DirItem {
    let kind = entry_kind(&entry);
    DirItem {
        name: entry.file_name().to_string_lossy().into_owned(),
        path: entry.path(),
        kind,
    }
}

/// Symlinked files are read through; symlinked directories are not followed.
fn entry_kind(entry: &DirEntry) -> ItemKind {
    match entry.file_type() {
        Ok(ft) if ft.is_dir() => ItemKind::Directory,
        Ok(ft) if ft.is_file() => ItemKind::File,
        Ok(ft) if ft.is_symlink() => match fs::metadata(entry.path()) {
            Ok(md) if md.is_file() => ItemKind::File,
            _ => ItemKind::Other,
        },
        _ => ItemKind::Other,
    }
}
