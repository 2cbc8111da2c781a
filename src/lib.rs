//! `selcat` is a library and command-line tool that aggregates whatever is
//! currently selected into a single Markdown document and opens it in an editor.
//!
//! Content comes from the first source that yields any:
//! 1.  **Selection**: files and folders, rendered recursively with a structure
//!     section, a file count and one block per file. Noise (hidden files,
//!     dependency caches, build output, lock files) and binary/media files
//!     are replaced by one-line placeholders.
//! 2.  **Highlighted text**: bounded by a short timeout.
//! 3.  **Clipboard text**.
//!
//! The document is then overwritten (`write`) or appended to (`append`). An
//! append reopens the editor at most once a minute and starts a fresh document
//! when the last open is more than ten minutes old.
//!
//! Every collaborator with side effects (host, editor, document, state, clock)
//! is a trait, so the engine can run entirely in memory.
//!
//! # Example: Library Usage
//!
//! ```
//! use selcat::command::{run, Services};
//! use selcat::core_types::Mode;
//! use selcat::host::ScriptedHost;
//! use selcat::store::{FixedClock, MemoryDocumentStore, MemoryStateStore};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. A folder with a text file, an image and a nested folder.
//! let temp = tempdir().unwrap();
//! let folder = temp.path().join("folder");
//! fs::create_dir_all(folder.join("nested")).unwrap();
//! fs::write(folder.join("a.txt"), "hello").unwrap();
//! fs::write(folder.join("b.png"), [0u8, 1, 2]).unwrap();
//! fs::write(folder.join("nested/c.txt"), "world").unwrap();
//!
//! // 2. In-memory collaborators, with the folder as the selection.
//! let host = ScriptedHost::new().with_items([&folder]);
//! let documents = MemoryDocumentStore::new();
//! let state = MemoryStateStore::new();
//! let services = Services {
//!     host: &host,
//!     documents: &documents,
//!     state: &state,
//!     editor: None,
//!     clock: &FixedClock(0),
//! };
//!
//! // 3. Write.
//! run(Mode::Write, &services);
//!
//! let doc = documents.content().unwrap();
//! assert!(doc.starts_with("Total files: 2\n"));
//! assert!(doc.contains("hello"));
//! assert!(doc.contains("world"));
//! assert!(doc.contains("## File: folder/b.png (binary/media, ignored)"));
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod editor;
pub mod errors;
pub mod filtering;
pub mod host;
pub mod output;
pub mod prelude;
pub mod resolver;
pub mod store;
pub mod writer;

pub use command::{run, Outcome, Services};
pub use config::{Config, ConfigBuilder};
pub use core_types::Mode;
pub use resolver::render_selection;

use editor::{EditorLauncher, SystemEditor};
use host::SystemHost;
use std::path::PathBuf;
use store::{FsDocumentStore, JsonFileStore, SystemClock};

/// Runs one invocation against the local machine.
///
/// `paths` are the selected items, in order. The destination, state file and
/// editor come from `config`.
///
/// # Examples
///
/// ```
/// use selcat::{execute, ConfigBuilder, Mode};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// let notes = temp.path().join("notes.txt");
/// fs::write(&notes, "remember the milk")?;
///
/// let config = ConfigBuilder::new()
///     .destination_dir(temp.path().join("Selcat"))
///     .state_path(temp.path().join("state.json"))
///     .preferences_path(temp.path().join("preferences.json"))
///     .open_editor(false)
///     .build()?;
///
/// let outcome = execute(Mode::Write, &config, vec![notes]);
/// assert!(outcome.is_saved());
/// let written = fs::read_to_string(&config.destination_file)?;
/// assert!(written.contains("remember the milk"));
/// # Ok(())
/// # }
/// ```
pub fn execute(mode: Mode, config: &Config, paths: Vec<PathBuf>) -> Outcome {
    log::debug!("Executing {:?} with {} selected paths", mode, paths.len());
    let host = SystemHost::new(paths, config.selected_text_timeout);
    let documents = FsDocumentStore::new(&config.destination_file);
    let state = JsonFileStore::new(&config.state_path);
    let editor = SystemEditor::new(config.editor.clone());
    let services = Services {
        host: &host,
        documents: &documents,
        state: &state,
        editor: config
            .open_editor
            .then_some(&editor as &dyn EditorLauncher),
        clock: &SystemClock,
    };
    run(mode, &services)
}
