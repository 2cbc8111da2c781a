use super::{paths, Config, EditorChoice, Preferences};
use crate::cli::Cli;
use crate::constants::{DEFAULT_SELECTED_TEXT_TIMEOUT, DESTINATION_FILE_NAME, EDITOR_PREFERENCE_KEY};
use crate::errors::{ConfigError, Result};
use log::{debug, warn};
use std::path::PathBuf;
use std::time::Duration;

const MAX_SELECTED_TEXT_TIMEOUT: Duration = Duration::from_secs(10);

/// A builder for creating a `Config` instance programmatically.
///
/// Every unset location falls back to its platform default.
///
/// # Examples
///
/// ```
/// use selcat::config::{ConfigBuilder, EditorChoice};
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// let config = ConfigBuilder::new()
///     .destination_dir(temp.path().join("out"))
///     .state_path(temp.path().join("state.json"))
///     .preferences_path(temp.path().join("preferences.json"))
///     .editor("TextEdit")
///     .open_editor(false)
///     .build()?;
///
/// assert_eq!(config.destination_file, temp.path().join("out").join("aggregated.md"));
/// assert_eq!(config.editor, EditorChoice::App("TextEdit".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    destination_dir: Option<PathBuf>,
    destination_file: Option<String>,
    state_path: Option<PathBuf>,
    preferences_path: Option<PathBuf>,
    editor: Option<String>,
    open_editor: Option<bool>,
    selected_text_timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed command-line arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut builder = Self::new().open_editor(!cli.no_open);
        if let Some(editor) = &cli.editor {
            builder = builder.editor(editor.clone());
        }
        builder
    }

    /// Sets the directory holding the destination document.
    pub fn destination_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.destination_dir = Some(dir.into());
        self
    }

    /// Sets the file name of the destination document.
    pub fn destination_file(mut self, name: impl Into<String>) -> Self {
        self.destination_file = Some(name.into());
        self
    }

    /// Sets the location of the persisted state file.
    pub fn state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = Some(path.into());
        self
    }

    /// Sets the location of the preferences file.
    pub fn preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = Some(path.into());
        self
    }

    /// Names the editor application, overriding the preferences file.
    pub fn editor(mut self, app: impl Into<String>) -> Self {
        self.editor = Some(app.into());
        self
    }

    /// Enables or disables launching the editor.
    pub fn open_editor(mut self, open: bool) -> Self {
        self.open_editor = Some(open);
        self
    }

    /// Bounds the highlighted-text query.
    pub fn selected_text_timeout(mut self, timeout: Duration) -> Self {
        self.selected_text_timeout = Some(timeout);
        self
    }

    /// Resolves defaults, reads preferences and validates the result.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if a default location cannot be determined or
    /// a value is out of range. An unreadable preferences file is logged and
    /// ignored.
    pub fn build(self) -> Result<Config> {
        let selected_text_timeout = self
            .selected_text_timeout
            .unwrap_or(DEFAULT_SELECTED_TEXT_TIMEOUT);
        validate_timeout(selected_text_timeout)?;

        let destination_dir = match self.destination_dir {
            Some(dir) => dir,
            None => paths::default_destination_dir()?,
        };
        let file_name = self
            .destination_file
            .unwrap_or_else(|| DESTINATION_FILE_NAME.to_string());
        if file_name.trim().is_empty() || file_name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                option: "destination file".to_string(),
                reason: format!("'{}' is not a plain file name", file_name),
            }
            .into());
        }
        let state_path = match self.state_path {
            Some(path) => path,
            None => paths::default_state_path()?,
        };
        let preferences_path = match self.preferences_path {
            Some(path) => path,
            None => paths::default_preferences_path()?,
        };

        let editor = match self.editor.filter(|e| !e.trim().is_empty()) {
            Some(app) => EditorChoice::App(app),
            None => editor_from_preferences(&preferences_path),
        };

        let config = Config {
            destination_file: destination_dir.join(file_name),
            destination_dir,
            state_path,
            preferences_path,
            editor,
            open_editor: self.open_editor.unwrap_or(true),
            selected_text_timeout,
        };
        debug!("Built config: {:?}", config);
        Ok(config)
    }
}

fn validate_timeout(timeout: Duration) -> std::result::Result<(), ConfigError> {
    if timeout.is_zero() || timeout > MAX_SELECTED_TEXT_TIMEOUT {
        return Err(ConfigError::InvalidValue {
            option: "selected text timeout".to_string(),
            reason: format!(
                "{:?} is outside 1ms..={:?}",
                timeout, MAX_SELECTED_TEXT_TIMEOUT
            ),
        });
    }
    Ok(())
}

fn editor_from_preferences(path: &std::path::Path) -> EditorChoice {
    match Preferences::load(path) {
        Ok(prefs) => prefs
            .read(EDITOR_PREFERENCE_KEY)
            .map(EditorChoice::App)
            .unwrap_or_default(),
        Err(e) => {
            warn!("{}; using the system default editor", e);
            EditorChoice::SystemDefault
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs;
    use tempfile::tempdir;

    fn rooted(root: &std::path::Path) -> ConfigBuilder {
        ConfigBuilder::new()
            .destination_dir(root.join("Selcat"))
            .state_path(root.join("state.json"))
            .preferences_path(root.join("preferences.json"))
    }

    #[test]
    fn test_defaults() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let config = rooted(temp.path()).build()?;
        assert_eq!(config.editor, EditorChoice::SystemDefault);
        assert!(config.open_editor);
        assert_eq!(config.selected_text_timeout, Duration::from_secs(1));
        assert_eq!(
            config.destination_file,
            temp.path().join("Selcat").join("aggregated.md")
        );
        Ok(())
    }

    #[test]
    fn test_editor_precedence() -> std::io::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("preferences.json"), r#"{"editor": "Zed"}"#)?;

        let from_prefs = rooted(temp.path()).build().map_err(std::io::Error::other)?;
        assert_eq!(from_prefs.editor, EditorChoice::App("Zed".to_string()));

        let from_flag = rooted(temp.path())
            .editor("Sublime Text")
            .build()
            .map_err(std::io::Error::other)?;
        assert_eq!(from_flag.editor, EditorChoice::App("Sublime Text".to_string()));
        Ok(())
    }

    #[test]
    fn test_corrupt_preferences_fall_back() -> std::io::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("preferences.json"), "[not, json")?;
        let config = rooted(temp.path()).build().map_err(std::io::Error::other)?;
        assert_eq!(config.editor, EditorChoice::SystemDefault);
        Ok(())
    }

    #[test]
    fn test_invalid_timeouts() {
        for timeout in [Duration::ZERO, Duration::from_secs(11)] {
            let result = rooted(std::path::Path::new("/tmp"))
                .selected_text_timeout(timeout)
                .build();
            assert!(matches!(
                result,
                Err(Error::Config(ConfigError::InvalidValue { .. }))
            ));
        }
    }

    #[test]
    fn test_destination_file_must_be_a_name() {
        let result = rooted(std::path::Path::new("/tmp"))
            .destination_file("../escape.md")
            .build();
        assert!(result.is_err());
    }
}
