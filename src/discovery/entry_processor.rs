use crate::core_types::ItemKind;
use crate::filtering::{classify, decode_text, FilterDecision};
use crate::output::{
    directory_failed_line, directory_header, file_block, placeholder_line, structure_line,
    Placeholder,
};
use log::{debug, warn};
use std::fs;
use std::path::Path;

use super::walker::walk_directory;

/// The rendered form of a single entry (file, directory or placeholder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedEntry {
    /// This entry's own structure line. Empty for ignored entries.
    pub line: String,
    /// Structure lines of everything below this entry (directories only).
    pub subtree: String,
    /// The content block, or the spliced directory rendering.
    pub block: String,
    /// Number of countable files in this entry.
    pub file_count: usize,
}

impl RenderedEntry {
    /// The recursive structure listing rooted at this entry.
    pub fn tree(&self) -> String {
        format!("{}{}", self.line, self.subtree)
    }
}

/// Renders one entry at `depth`, recursing into directories.
///
/// `relative` is the path shown in headers; its last component is the name
/// the filter policy classifies.
pub(crate) fn render_entry(
    path: &Path,
    relative: &Path,
    depth: usize,
    kind: ItemKind,
) -> RenderedEntry {
    let name = base_name(relative);

    match classify(&name) {
        FilterDecision::Ignored => {
            debug!("Ignoring by name: {}", relative.display());
            RenderedEntry {
                block: placeholder_line(relative, Placeholder::Ignored),
                ..Default::default()
            }
        }
        FilterDecision::BinaryOrMedia => RenderedEntry {
            line: structure_line(&name, kind == ItemKind::Directory, depth),
            block: placeholder_line(relative, Placeholder::BinaryOrMedia),
            ..Default::default()
        },
        FilterDecision::Content => match kind {
            ItemKind::Directory => render_directory(path, relative, &name, depth),
            ItemKind::File => RenderedEntry {
                line: structure_line(&name, false, depth),
                block: read_file_block(path, relative),
                file_count: 1,
                ..Default::default()
            },
            ItemKind::Other => {
                debug!("Not a regular file or directory: {}", path.display());
                RenderedEntry {
                    line: structure_line(&name, false, depth),
                    block: placeholder_line(relative, Placeholder::ReadFailed),
                    ..Default::default()
                }
            }
        },
    }
}

/// Renders a selected top-level item at depth zero.
///
/// A selected directory is walked unless its name is ignored; the
/// binary/media extension check only applies to files at this level.
pub(crate) fn render_selected(path: &Path, relative: &Path, kind: ItemKind) -> RenderedEntry {
    if kind == ItemKind::Directory {
        let name = base_name(relative);
        if classify(&name) != FilterDecision::Ignored {
            return render_directory(path, relative, &name, 0);
        }
    }
    render_entry(path, relative, 0, kind)
}

fn base_name(relative: &Path) -> String {
    relative
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| relative.to_string_lossy().into_owned())
}

fn render_directory(path: &Path, relative: &Path, name: &str, depth: usize) -> RenderedEntry {
    let line = structure_line(name, true, depth);
    match walk_directory(path, relative, depth + 1) {
        Ok(child) => RenderedEntry {
            line,
            subtree: child.tree,
            block: format!("{}{}", directory_header(relative), child.text),
            file_count: child.file_count,
        },
        Err(e) => {
            warn!("Failed to read directory '{}': {}", path.display(), e);
            RenderedEntry {
                line,
                block: directory_failed_line(relative),
                ..Default::default()
            }
        }
    }
}

/// Reads a file as text, falling back to the read-failure placeholder.
fn read_file_block(path: &Path, relative: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => match decode_text(bytes) {
            Some(content) => file_block(relative, &content),
            None => {
                debug!("Skipping non-text content: {}", path.display());
                placeholder_line(relative, Placeholder::ReadFailed)
            }
        },
        Err(e) => {
            warn!("Failed to read file '{}': {}", path.display(), e);
            placeholder_line(relative, Placeholder::ReadFailed)
        }
    }
}
