use crate::errors::ConfigError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// User preferences: a flat JSON object of string keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Preferences {
    #[serde(flatten)]
    values: BTreeMap<String, Value>,
}

impl Preferences {
    /// Loads preferences from `path`. A missing file yields empty preferences.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(preferences_error(path, e.to_string())),
        };
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&raw).map_err(|e| preferences_error(path, e.to_string()))
    }

    /// Reads a non-empty string preference.
    ///
    /// # Examples
    /// ```
    /// use selcat::config::Preferences;
    ///
    /// let prefs: Preferences = serde_json::from_str(r#"{"editor": "Zed", "size": 3}"#).unwrap();
    /// assert_eq!(prefs.read("editor").as_deref(), Some("Zed"));
    /// assert_eq!(prefs.read("size"), None);
    /// assert_eq!(prefs.read("missing"), None);
    /// ```
    pub fn read(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

fn preferences_error(path: &Path, reason: String) -> ConfigError {
    ConfigError::Preferences {
        path: path.display().to_string(),
        reason,
    }
}
