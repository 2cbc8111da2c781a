use crate::constants::{
    PLACEHOLDER_BINARY, PLACEHOLDER_DIR_READ_FAILED, PLACEHOLDER_IGNORED, PLACEHOLDER_READ_FAILED,
};
use crate::output::formatter::{fence_for, format_path_for_display};
use std::path::Path;

/// One-line stand-ins emitted instead of file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// The name matched an ignore rule.
    Ignored,
    /// The extension marks binary or media content.
    BinaryOrMedia,
    /// The file could not be read as text.
    ReadFailed,
}

impl Placeholder {
    /// The marker text appended to the header line.
    pub fn label(self) -> &'static str {
        match self {
            Placeholder::Ignored => PLACEHOLDER_IGNORED,
            Placeholder::BinaryOrMedia => PLACEHOLDER_BINARY,
            Placeholder::ReadFailed => PLACEHOLDER_READ_FAILED,
        }
    }
}

/// Renders a file's header and fenced content block.
///
/// The fence's info string is the file extension, if any.
pub fn file_block(relative_path: &Path, content: &str) -> String {
    let extension_hint = relative_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or(""); // Default to empty hint if no extension
    let fence = fence_for(content);

    let mut block = format!(
        "## File: {}\n{}{}\n",
        format_path_for_display(relative_path),
        fence,
        extension_hint
    );
    block.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(&fence);
    block.push('\n');
    block
}

/// Renders a placeholder line naming the relative path.
pub fn placeholder_line(relative_path: &Path, placeholder: Placeholder) -> String {
    format!(
        "## File: {} {}\n",
        format_path_for_display(relative_path),
        placeholder.label()
    )
}

/// Renders the header that precedes a spliced sub-directory.
pub fn directory_header(relative_path: &Path) -> String {
    format!("## Directory: {}/\n", format_path_for_display(relative_path))
}

/// Renders the placeholder for a directory that could not be enumerated.
pub fn directory_failed_line(relative_path: &Path) -> String {
    format!(
        "## Directory: {}/ {}\n",
        format_path_for_display(relative_path),
        PLACEHOLDER_DIR_READ_FAILED
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_block_basic() {
        let output = file_block(
            &PathBuf::from("src/main.rs"),
            "fn main() {\n    println!(\"Hi\");\n}",
        );
        let expected = "## File: src/main.rs\n```rs\nfn main() {\n    println!(\"Hi\");\n}\n```\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_file_block_no_extension() {
        let output = file_block(&PathBuf::from("Makefile"), "all: build");
        let expected = "## File: Makefile\n```\nall: build\n```\n"; // No language hint
        assert_eq!(output, expected);
    }

    #[test]
    fn test_file_block_keeps_trailing_newline() {
        let output = file_block(&PathBuf::from("a.txt"), "hello\n");
        assert_eq!(output, "## File: a.txt\n```txt\nhello\n```\n");
    }

    #[test]
    fn test_file_block_empty_file() {
        let output = file_block(&PathBuf::from("empty.txt"), "");
        assert_eq!(output, "## File: empty.txt\n```txt\n```\n");
    }

    #[test]
    fn test_file_block_widens_fence() {
        let output = file_block(&PathBuf::from("README.md"), "```sh\nls\n```");
        assert_eq!(
            output,
            "## File: README.md\n````md\n```sh\nls\n```\n````\n"
        );
    }

    #[test]
    fn test_placeholder_lines() {
        let path = PathBuf::from("assets/logo.png");
        assert_eq!(
            placeholder_line(&path, Placeholder::BinaryOrMedia),
            "## File: assets/logo.png (binary/media, ignored)\n"
        );
        assert_eq!(
            placeholder_line(&PathBuf::from(".env"), Placeholder::Ignored),
            "## File: .env (content ignored)\n"
        );
        assert_eq!(
            placeholder_line(&PathBuf::from("data.bin.txt"), Placeholder::ReadFailed),
            "## File: data.bin.txt (read failed)\n"
        );
    }

    #[test]
    fn test_directory_lines() {
        let path = PathBuf::from("project/src");
        assert_eq!(directory_header(&path), "## Directory: project/src/\n");
        assert_eq!(
            directory_failed_line(&path),
            "## Directory: project/src/ (directory read failed)\n"
        );
    }
}
