//! Defines application-specific error types.
//!
//! The `Error` enum follows the failure taxonomy of the tool: content sources
//! that are unavailable (recovered by falling through to the next source),
//! persistence failures (terminal for an invocation) and editor launch
//! failures (reported separately, the content is already saved).

use thiserror::Error;

/// Errors raised while building the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option carries a value outside its accepted range.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The offending option.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// No home directory could be determined for the default paths.
    #[error("Could not determine the user's home directory")]
    NoHomeDirectory,
    /// The preferences file exists but could not be parsed.
    #[error("Invalid preferences file '{path}': {reason}")]
    Preferences {
        /// Location of the preferences file.
        path: String,
        /// Parser message.
        reason: String,
    },
}

/// Errors raised by the system clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The clipboard backend could not be initialised (e.g. no display server).
    #[error("Failed to initialize clipboard: {0}")]
    Initialization(String),
    /// The clipboard was reachable but held no readable text.
    #[error("Failed to read clipboard text: {0}")]
    GetContent(String),
}

/// Application-specific errors used throughout `selcat`.
#[derive(Error, Debug)]
pub enum Error {
    /// The destination directory could not be created.
    #[error("Could not create destination directory '{path}': {source}")]
    CreateDestination {
        /// The directory that could not be created.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The destination document could not be written or appended to.
    #[error("Could not write file '{path}': {source}")]
    WriteDocument {
        /// The destination document.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The editor could not be launched or focused.
    #[error("Could not open editor: {0}")]
    Launch(String),

    /// A content source (selection, highlighted text, clipboard) yielded nothing usable.
    #[error("Content source unavailable: {0}")]
    SourceUnavailable(String),

    /// The persisted key-value state could not be read or written.
    #[error("State store error: {0}")]
    State(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// A specialized `Result` type for `selcat` operations.
pub type Result<T> = std::result::Result<T, Error>;
