//! The `selcat` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `selcat` library.
//!
//! # Example
//!
//! ```
//! use selcat::prelude::*;
//!
//! let host = ScriptedHost::new().with_text("highlighted");
//! let documents = MemoryDocumentStore::new();
//! let state = MemoryStateStore::new();
//! let services = Services {
//!     host: &host,
//!     documents: &documents,
//!     state: &state,
//!     editor: None,
//!     clock: &SystemClock,
//! };
//! let outcome = run(Mode::Append, &services);
//! assert!(outcome.is_saved());
//! ```

pub use crate::command::{run, Outcome, Services};
pub use crate::config::{Config, ConfigBuilder, EditorChoice};
pub use crate::core_types::{ItemKind, Mode, SelectionItem, SourceKind};
pub use crate::discovery::walk;
pub use crate::editor::{EditorLauncher, RecordingEditor, SystemEditor};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{classify, FilterDecision};
pub use crate::host::{Host, ScriptedHost, SystemHost};
pub use crate::resolver::{render_selection, resolve, Resolution};
pub use crate::store::{
    Clock, DocumentStore, FixedClock, FsDocumentStore, JsonFileStore, MemoryDocumentStore,
    MemoryStateStore, StateStore, SystemClock,
};
pub use crate::writer::{AggregateWriter, EditorStatus, WriteReport};
pub use crate::execute;
