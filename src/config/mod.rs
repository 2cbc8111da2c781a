//! Defines the core `Config` struct and related types for application configuration.
//!
//! Locations of the destination document and the persisted state default to
//! platform directories (see [`paths`]); the editor comes from the command
//! line, then the preferences file, then the system default.

use crate::constants::{
    DEFAULT_SELECTED_TEXT_TIMEOUT, DESTINATION_FILE_NAME, PREFERENCES_FILE_NAME, STATE_FILE_NAME,
};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use builder::ConfigBuilder;
pub use preferences::Preferences;
mod builder;
pub mod paths;
mod preferences;

/// Which application opens the destination document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorChoice {
    /// Whatever the platform associates with the document.
    #[default]
    SystemDefault,
    /// A named application (e.g. "Visual Studio Code").
    App(String),
}

impl fmt::Display for EditorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorChoice::SystemDefault => f.write_str("system default"),
            EditorChoice::App(app) => f.write_str(app),
        }
    }
}

/// Represents the application's runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the destination document.
    pub destination_dir: PathBuf,
    /// Full path of the destination document.
    pub destination_file: PathBuf,
    /// JSON file holding the persisted key-value state.
    pub state_path: PathBuf,
    /// JSON file holding user preferences.
    pub preferences_path: PathBuf,
    /// The editor used to show the destination.
    pub editor: EditorChoice,
    /// If `false`, the destination is saved but no editor is launched.
    pub open_editor: bool,
    /// Upper bound on the highlighted-text query.
    pub selected_text_timeout: Duration,
}

impl Config {
    /// A configuration rooted entirely inside `root`, with the editor disabled.
    #[doc(hidden)]
    pub fn new_for_test(root: &Path) -> Self {
        let destination_dir = root.join("Selcat");
        Self {
            destination_file: destination_dir.join(DESTINATION_FILE_NAME),
            destination_dir,
            state_path: root.join("data").join(STATE_FILE_NAME),
            preferences_path: root.join("config").join(PREFERENCES_FILE_NAME),
            editor: EditorChoice::SystemDefault,
            open_editor: false,
            selected_text_timeout: DEFAULT_SELECTED_TEXT_TIMEOUT,
        }
    }
}
