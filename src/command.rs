//! The command orchestrator: `write` and `append` end to end.
//!
//! Ensure the destination directory, resolve content, persist it, then tell
//! the user what happened. Every outcome is reported through
//! [`Host::notify`]; nothing is raised to the caller.

use crate::core_types::{Mode, SourceKind};
use crate::editor::EditorLauncher;
use crate::host::Host;
use crate::resolver::resolve;
use crate::store::{Clock, DocumentStore, StateStore};
use crate::writer::{AggregateWriter, DocumentAction, EditorStatus, WriteReport};
use log::{debug, info, warn};
use std::path::PathBuf;
use tracing::instrument;

/// The collaborators an invocation runs against.
pub struct Services<'a> {
    pub host: &'a dyn Host,
    pub documents: &'a dyn DocumentStore,
    pub state: &'a dyn StateStore,
    /// `None` disables launching the editor.
    pub editor: Option<&'a dyn EditorLauncher>,
    pub clock: &'a dyn Clock,
}

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Content was persisted; the report says whether the editor opened.
    Completed {
        source: SourceKind,
        destination: PathBuf,
        report: WriteReport,
    },
    /// Every content source was empty; nothing was written.
    NothingToAggregate,
    /// The destination directory or document could not be written.
    PersistenceFailed(String),
}

impl Outcome {
    /// The user-facing message for this outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::NothingToAggregate => {
                "Nothing to aggregate: no selection, highlighted text or clipboard text found"
                    .to_string()
            }
            Outcome::PersistenceFailed(reason) => reason.clone(),
            Outcome::Completed {
                source,
                destination,
                report,
            } => {
                let done = match (report.action, report.reset_from_append) {
                    (DocumentAction::Overwrote, true) => format!(
                        "Started a new document from {} at {}",
                        source,
                        destination.display()
                    ),
                    (DocumentAction::Overwrote, false) => {
                        format!("Wrote {} to {}", source, destination.display())
                    }
                    (DocumentAction::Appended, _) => {
                        format!("Appended {} to {}", source, destination.display())
                    }
                };
                match &report.editor {
                    EditorStatus::Failed(reason) => {
                        format!("{}, but could not open editor: {}", done, reason)
                    }
                    _ => done,
                }
            }
        }
    }

    /// `true` unless the content was lost.
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }
}

/// Runs one `write` or `append` invocation.
///
/// # Examples
///
/// ```
/// use selcat::command::{run, Outcome, Services};
/// use selcat::core_types::Mode;
/// use selcat::host::ScriptedHost;
/// use selcat::store::{FixedClock, MemoryDocumentStore, MemoryStateStore};
///
/// let host = ScriptedHost::new().with_clipboard("copied text");
/// let documents = MemoryDocumentStore::new();
/// let state = MemoryStateStore::new();
/// let services = Services {
///     host: &host,
///     documents: &documents,
///     state: &state,
///     editor: None,
///     clock: &FixedClock(0),
/// };
///
/// let outcome = run(Mode::Write, &services);
/// assert!(outcome.is_saved());
/// assert_eq!(documents.content().as_deref(), Some("copied text"));
/// assert_eq!(host.notifications(), vec![outcome.message()]);
/// ```
#[instrument(level = "debug", skip(services))]
pub fn run(mode: Mode, services: &Services<'_>) -> Outcome {
    let outcome = execute_steps(mode, services);
    match &outcome {
        Outcome::Completed { report, .. } => {
            info!("{:?} finished: {:?}", mode, report);
        }
        Outcome::NothingToAggregate => debug!("{:?}: nothing to aggregate", mode),
        Outcome::PersistenceFailed(reason) => warn!("{:?} failed: {}", mode, reason),
    }
    services.host.notify(&outcome.message());
    outcome
}

fn execute_steps(mode: Mode, services: &Services<'_>) -> Outcome {
    if let Err(e) = services.documents.ensure_dir() {
        return Outcome::PersistenceFailed(e.to_string());
    }

    let Some(resolution) = resolve(services.host) else {
        return Outcome::NothingToAggregate;
    };

    let writer = AggregateWriter::new(
        services.documents,
        services.state,
        services.editor,
        services.clock,
    );
    let result = match mode {
        Mode::Write => writer.write(&resolution.text),
        Mode::Append => writer.append(&resolution.text),
    };

    match result {
        Ok(report) => Outcome::Completed {
            source: resolution.source,
            destination: services.documents.path().to_path_buf(),
            report,
        },
        Err(e) => Outcome::PersistenceFailed(e.to_string()),
    }
}
