use super::Host;
use crate::errors::{Error, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A host with canned answers that counts every query.
///
/// Unset sources report [`Error::SourceUnavailable`].
///
/// # Examples
///
/// ```
/// use selcat::host::{Host, ScriptedHost};
///
/// let host = ScriptedHost::new().with_clipboard("copied");
/// assert!(host.selected_text().is_err());
/// assert_eq!(host.clipboard_text().unwrap(), "copied");
/// assert_eq!(host.text_queries(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedHost {
    items: Option<Vec<PathBuf>>,
    text: Option<String>,
    clipboard: Option<String>,
    item_queries: AtomicUsize,
    text_queries: AtomicUsize,
    clipboard_queries: AtomicUsize,
    notifications: Mutex<Vec<String>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<I, P>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.items = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_clipboard(mut self, text: &str) -> Self {
        self.clipboard = Some(text.to_string());
        self
    }

    pub fn item_queries(&self) -> usize {
        self.item_queries.load(Ordering::SeqCst)
    }

    pub fn text_queries(&self) -> usize {
        self.text_queries.load(Ordering::SeqCst)
    }

    pub fn clipboard_queries(&self) -> usize {
        self.clipboard_queries.load(Ordering::SeqCst)
    }

    /// Messages shown so far, oldest first.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Host for ScriptedHost {
    fn selected_items(&self) -> Result<Vec<PathBuf>> {
        self.item_queries.fetch_add(1, Ordering::SeqCst);
        self.items
            .clone()
            .ok_or_else(|| Error::SourceUnavailable("nothing selected".to_string()))
    }

    fn selected_text(&self) -> Result<String> {
        self.text_queries.fetch_add(1, Ordering::SeqCst);
        self.text
            .clone()
            .ok_or_else(|| Error::SourceUnavailable("no highlighted text".to_string()))
    }

    fn clipboard_text(&self) -> Result<String> {
        self.clipboard_queries.fetch_add(1, Ordering::SeqCst);
        self.clipboard
            .clone()
            .ok_or_else(|| Error::SourceUnavailable("clipboard is empty".to_string()))
    }

    fn notify(&self, message: &str) {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}
