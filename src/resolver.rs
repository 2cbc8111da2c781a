//! The content resolver: tries each content source in order and keeps the
//! first one that yields text.
//!
//! Sources never raise. A failing or empty source is logged and the next one
//! is consulted; later sources are not queried once one has produced text.

use crate::core_types::{SelectionItem, SourceKind};
use crate::discovery::{render_item, RenderedEntry};
use crate::host::Host;
use crate::output::render_document;
use log::debug;
use rayon::prelude::*;
use tracing::instrument;

/// Resolved content and the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub source: SourceKind,
    pub text: String,
}

type Provider = fn(&dyn Host) -> Option<String>;

const SOURCES: [(SourceKind, Provider); 3] = [
    (SourceKind::Selection, from_selection),
    (SourceKind::SelectedText, from_selected_text),
    (SourceKind::Clipboard, from_clipboard),
];

/// Resolves content from the first source that yields any.
///
/// Returns `None` when every source is empty or unavailable.
///
/// # Examples
///
/// ```
/// use selcat::core_types::SourceKind;
/// use selcat::host::ScriptedHost;
/// use selcat::resolver::resolve;
///
/// let host = ScriptedHost::new().with_text("   ").with_clipboard("from clipboard");
/// let resolution = resolve(&host).unwrap();
/// assert_eq!(resolution.source, SourceKind::Clipboard);
/// assert_eq!(resolution.text, "from clipboard");
///
/// assert!(resolve(&ScriptedHost::new()).is_none());
/// ```
#[instrument(level = "debug", skip_all)]
pub fn resolve(host: &dyn Host) -> Option<Resolution> {
    SOURCES.iter().find_map(|(source, provider)| {
        let text = provider(host)?;
        debug!("Resolved {} bytes from {}", text.len(), source);
        Some(Resolution {
            source: *source,
            text,
        })
    })
}

/// Renders selected items into one aggregated document.
///
/// Items keep the given order; each contributes to the total file count,
/// the structure section and the content section.
pub fn render_selection(items: &[SelectionItem]) -> String {
    let rendered: Vec<RenderedEntry> = items.par_iter().map(render_item).collect();

    let file_count = rendered.iter().map(|r| r.file_count).sum();
    let structure: String = rendered.iter().map(RenderedEntry::tree).collect();
    let blocks: Vec<String> = rendered.into_iter().map(|r| r.block).collect();

    render_document(file_count, &structure, &blocks)
}

fn from_selection(host: &dyn Host) -> Option<String> {
    let paths = match host.selected_items() {
        Ok(paths) if !paths.is_empty() => paths,
        Ok(_) => {
            debug!("Selection is empty");
            return None;
        }
        Err(e) => {
            debug!("Selection unavailable: {}", e);
            return None;
        }
    };
    let items: Vec<SelectionItem> = paths.iter().map(SelectionItem::from_path).collect();
    Some(render_selection(&items))
}

fn from_selected_text(host: &dyn Host) -> Option<String> {
    non_blank(host.selected_text(), SourceKind::SelectedText)
}

fn from_clipboard(host: &dyn Host) -> Option<String> {
    non_blank(host.clipboard_text(), SourceKind::Clipboard)
}

fn non_blank(result: crate::errors::Result<String>, source: SourceKind) -> Option<String> {
    match result {
        Ok(text) if !text.trim().is_empty() => Some(text),
        Ok(_) => {
            debug!("No {} available", source);
            None
        }
        Err(e) => {
            debug!("{} unavailable: {}", source, e);
            None
        }
    }
}
