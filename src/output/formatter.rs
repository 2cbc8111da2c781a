// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use crate::constants::MIN_FENCE_TICKS;
use std::path::Path;

/// Formats a path for display in headers and structure listings.
///
/// Path separators are always rendered as `/`, even on Windows.
///
/// # Examples
/// ```
/// use selcat::output::formatter::format_path_for_display;
/// use std::path::Path;
///
/// assert_eq!(format_path_for_display(Path::new("src/main.rs")), "src/main.rs");
/// ```
pub fn format_path_for_display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Returns a backtick fence long enough to wrap `content` safely.
///
/// The fence is at least three backticks and always one longer than the
/// longest run of backticks inside the content.
///
/// # Examples
/// ```
/// use selcat::output::formatter::fence_for;
///
/// assert_eq!(fence_for("plain"), "```");
/// assert_eq!(fence_for("```rust\n```"), "````");
/// ```
pub fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut current = 0;
    for c in content.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    "`".repeat((longest + 1).max(MIN_FENCE_TICKS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_path() {
        assert_eq!(format_path_for_display(Path::new("a/b/c.txt")), "a/b/c.txt");
    }

    #[test]
    #[cfg(windows)]
    fn test_format_windows_path_separator() {
        assert_eq!(format_path_for_display(Path::new("src\\main.rs")), "src/main.rs");
    }

    #[test]
    fn test_fence_minimum() {
        assert_eq!(fence_for(""), "```");
        assert_eq!(fence_for("a `tick` here"), "```");
        assert_eq!(fence_for("``double``"), "```");
    }

    #[test]
    fn test_fence_grows_past_content() {
        assert_eq!(fence_for("````four````"), "`````");
        assert_eq!(fence_for("``` and `````"), "``````");
    }
}
