//! Platform-specific default locations.

use crate::constants::{APP_NAME, DESTINATION_DIR_NAME, PREFERENCES_FILE_NAME, STATE_FILE_NAME};
use crate::errors::ConfigError;
use directories::{ProjectDirs, UserDirs};
use std::path::PathBuf;

/// `<Documents>/Selcat`, or `<home>/Documents/Selcat` when the platform has
/// no documents directory configured.
pub fn default_destination_dir() -> Result<PathBuf, ConfigError> {
    let user = UserDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
    let documents = user
        .document_dir()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| user.home_dir().join("Documents"));
    Ok(documents.join(DESTINATION_DIR_NAME))
}

/// The JSON state file inside the application's data directory.
pub fn default_state_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.data_dir().join(STATE_FILE_NAME))
}

/// The preferences file inside the application's config directory.
pub fn default_preferences_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.config_dir().join(PREFERENCES_FILE_NAME))
}

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", APP_NAME).ok_or(ConfigError::NoHomeDirectory)
}
