//! The aggregate writer: persists resolved text to the destination document
//! and decides whether the editor should be (re)opened.
//!
//! `write` always overwrites and always opens the editor. `append` consults
//! the last time the editor was opened:
//!
//! * more than ten minutes ago (or never): the append becomes a `write`;
//! * more than one minute ago: append, reopen the editor, scroll to the end;
//! * otherwise: append only, the caller notifies the user instead.

use crate::constants::{APPEND_SEPARATOR, LAST_OPEN_TIMESTAMP_KEY, REOPEN_WINDOW, STALE_WINDOW};
use crate::editor::EditorLauncher;
use crate::errors::{Error, Result};
use crate::store::{Clock, DocumentStore, StateStore};
use log::{debug, warn};
use std::path::Path;
use tracing::instrument;

/// How an `append` is carried out, given the time since the last open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendPolicy {
    /// Overwrite as a fresh `write`.
    Reset,
    /// Append, then reopen the editor and scroll to the end.
    AppendAndOpen,
    /// Append without touching the editor.
    AppendQuietly,
}

/// Chooses the append policy from the milliseconds elapsed since the editor
/// was last opened. `None` means it never was.
///
/// Both windows are exclusive: exactly one minute still appends quietly.
///
/// # Examples
///
/// ```
/// use selcat::writer::{append_policy, AppendPolicy};
///
/// assert_eq!(append_policy(Some(59_000)), AppendPolicy::AppendQuietly);
/// assert_eq!(append_policy(Some(61_000)), AppendPolicy::AppendAndOpen);
/// assert_eq!(append_policy(Some(601_000)), AppendPolicy::Reset);
/// assert_eq!(append_policy(None), AppendPolicy::Reset);
/// ```
pub fn append_policy(elapsed_ms: Option<i64>) -> AppendPolicy {
    let stale = STALE_WINDOW.as_millis() as i64;
    let reopen = REOPEN_WINDOW.as_millis() as i64;
    match elapsed_ms {
        None => AppendPolicy::Reset,
        Some(ms) if ms > stale => AppendPolicy::Reset,
        Some(ms) if ms > reopen => AppendPolicy::AppendAndOpen,
        Some(_) => AppendPolicy::AppendQuietly,
    }
}

/// What happened to the destination document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentAction {
    Overwrote,
    Appended,
}

/// What happened to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorStatus {
    Opened,
    /// Opening is switched off by configuration.
    Disabled,
    /// Skipped by the throttle.
    NotReopened,
    /// The launch failed; the document was still saved.
    Failed(String),
}

/// The result of a successful persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub action: DocumentAction,
    pub editor: EditorStatus,
    /// `true` when an `append` was turned into a full overwrite.
    pub reset_from_append: bool,
}

/// Writes to the destination document through injected stores.
pub struct AggregateWriter<'a> {
    documents: &'a dyn DocumentStore,
    state: &'a dyn StateStore,
    editor: Option<&'a dyn EditorLauncher>,
    clock: &'a dyn Clock,
}

impl<'a> AggregateWriter<'a> {
    /// Creates a writer. With `editor` set to `None` nothing is launched, but
    /// the open time is still recorded so throttling behaves the same.
    pub fn new(
        documents: &'a dyn DocumentStore,
        state: &'a dyn StateStore,
        editor: Option<&'a dyn EditorLauncher>,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            documents,
            state,
            editor,
            clock,
        }
    }

    /// Replaces the destination with `text` and opens the editor.
    ///
    /// The destination directory must already exist; see
    /// [`DocumentStore::ensure_dir`].
    ///
    /// # Errors
    /// Returns a persistence error if the document cannot be written. Editor
    /// failures are reported in the [`WriteReport`] instead.
    #[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    pub fn write(&self, text: &str) -> Result<WriteReport> {
        self.documents.overwrite(text)?;
        debug!("Overwrote {}", self.documents.path().display());
        Ok(WriteReport {
            action: DocumentAction::Overwrote,
            editor: self.open_editor(false),
            reset_from_append: false,
        })
    }

    /// Appends `text` to the destination, subject to [`append_policy`].
    ///
    /// # Errors
    /// Same as [`AggregateWriter::write`].
    #[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    pub fn append(&self, text: &str) -> Result<WriteReport> {
        let now = self.clock.now_ms();
        let elapsed = self.last_open_ms().map(|last| now.saturating_sub(last));
        let policy = append_policy(elapsed);
        debug!("Append policy {:?} (elapsed: {:?} ms)", policy, elapsed);

        match policy {
            AppendPolicy::Reset => {
                let mut report = self.write(text)?;
                report.reset_from_append = true;
                Ok(report)
            }
            AppendPolicy::AppendAndOpen => {
                self.append_text(text)?;
                Ok(WriteReport {
                    action: DocumentAction::Appended,
                    editor: self.open_editor(true),
                    reset_from_append: false,
                })
            }
            AppendPolicy::AppendQuietly => {
                self.append_text(text)?;
                Ok(WriteReport {
                    action: DocumentAction::Appended,
                    editor: EditorStatus::NotReopened,
                    reset_from_append: false,
                })
            }
        }
    }

    fn append_text(&self, text: &str) -> Result<()> {
        if self.documents.is_empty() {
            self.documents.append(text)
        } else {
            self.documents
                .append(&format!("{}{}", APPEND_SEPARATOR, text))
        }
    }

    fn open_editor(&self, scroll: bool) -> EditorStatus {
        let Some(editor) = self.editor else {
            self.record_open();
            return EditorStatus::Disabled;
        };

        let file = self.documents.path();
        let dir = file.parent().unwrap_or_else(|| Path::new("."));
        match editor.open(dir, file) {
            Ok(()) => {
                self.record_open();
                if scroll {
                    if let Err(e) = editor.scroll_to_end() {
                        warn!("Could not scroll editor to end: {}", e);
                    }
                }
                EditorStatus::Opened
            }
            Err(e) => {
                warn!("{}", e);
                // The attempt counts as an open for throttling.
                self.record_open();
                let reason = match e {
                    Error::Launch(reason) => reason,
                    other => other.to_string(),
                };
                EditorStatus::Failed(reason)
            }
        }
    }

    fn record_open(&self) {
        let now = self.clock.now_ms().to_string();
        if let Err(e) = self.state.set(LAST_OPEN_TIMESTAMP_KEY, &now) {
            warn!("Could not record editor open time: {}", e);
        }
    }

    fn last_open_ms(&self) -> Option<i64> {
        match self.state.get(LAST_OPEN_TIMESTAMP_KEY) {
            Ok(Some(raw)) => match raw.trim().parse::<i64>() {
                Ok(ms) => Some(ms),
                Err(e) => {
                    warn!("Ignoring unparsable open time '{}': {}", raw, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Could not read editor open time: {}", e);
                None
            }
        }
    }
}
