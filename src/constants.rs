// src/constants.rs

use std::time::Duration;

/// Name of the directory (inside the user's documents area) holding the destination.
pub const DESTINATION_DIR_NAME: &str = "Selcat";

/// File name of the destination document.
pub const DESTINATION_FILE_NAME: &str = "aggregated.md";

/// Application name used for the platform config/data directories.
pub const APP_NAME: &str = "selcat";

/// File name of the persisted key-value state inside the data directory.
pub const STATE_FILE_NAME: &str = "state.json";

/// File name of the user preferences inside the config directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Key under which the last editor-open time (millis since epoch) is stored.
pub const LAST_OPEN_TIMESTAMP_KEY: &str = "lastOpenTimestamp";

/// Preference key naming the editor application.
pub const EDITOR_PREFERENCE_KEY: &str = "editor";

/// Appends within this window of the last open do not refocus the editor.
pub const REOPEN_WINDOW: Duration = Duration::from_secs(60);

/// Appends after this much idle time replace the destination instead.
pub const STALE_WINDOW: Duration = Duration::from_secs(10 * 60);

/// Default bound on the highlighted-text query.
pub const DEFAULT_SELECTED_TEXT_TIMEOUT: Duration = Duration::from_secs(1);

/// Inserted between the existing destination content and an appended block.
pub const APPEND_SEPARATOR: &str = "\n\n---\n\n";

/// Prefix of the aggregate file count line.
pub const FILE_COUNT_PREFIX: &str = "Total files";

/// Header of the structure section.
pub const STRUCTURE_HEADER: &str = "Structure:";

/// Header of the detailed content section.
pub const CONTENT_HEADER: &str = "Content:";

/// Indentation used for one level of depth in structure listings.
pub const INDENT: &str = "  ";

/// Minimum number of backticks for the code fences around file content.
pub const MIN_FENCE_TICKS: usize = 3;

pub const PLACEHOLDER_IGNORED: &str = "(content ignored)";
pub const PLACEHOLDER_BINARY: &str = "(binary/media, ignored)";
pub const PLACEHOLDER_READ_FAILED: &str = "(read failed)";
pub const PLACEHOLDER_DIR_READ_FAILED: &str = "(directory read failed)";
