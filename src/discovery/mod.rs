//! The directory walker: renders a file-system subtree into a structure
//! listing plus per-entry content blocks, applying the filter policy.
use crate::core_types::SelectionItem;
use crate::output::directory_failed_line;
use log::{debug, warn};
use std::path::{Path, PathBuf};

mod entry_processor;
mod walker;

pub use entry_processor::RenderedEntry;
pub use walker::WalkOutput;

use entry_processor::render_selected;
use walker::walk_directory;

/// Walks the directory at `root` and renders it.
///
/// Relative paths in the output start with the root's own name. The walk
/// never fails: a root that cannot be listed renders as a single
/// "(directory read failed)" placeholder with a count of zero.
///
/// # Examples
///
/// ```
/// use selcat::discovery::walk;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// let root = temp.path().join("project");
/// fs::create_dir_all(root.join("nested"))?;
/// fs::write(root.join("a.txt"), "hello")?;
/// fs::write(root.join("b.png"), [0u8, 1, 2])?;
/// fs::write(root.join("nested/c.txt"), "world")?;
///
/// let output = walk(&root);
/// assert_eq!(output.file_count, 2);
/// assert!(output.text.contains("hello"));
/// assert!(output.text.contains("world"));
/// assert!(output.text.contains("## File: project/b.png (binary/media, ignored)"));
/// # Ok(())
/// # }
/// ```
pub fn walk(root: &Path) -> WalkOutput {
    let relative = PathBuf::from(SelectionItem::from_path(root).display_name());
    match walk_directory(root, &relative, 1) {
        Ok(output) => {
            debug!(
                "Walked {}: {} countable files",
                root.display(),
                output.file_count
            );
            output
        }
        Err(e) => {
            warn!("Failed to read directory '{}': {}", root.display(), e);
            WalkOutput {
                text: directory_failed_line(&relative),
                ..Default::default()
            }
        }
    }
}

/// Renders one top-level selected item at depth zero.
///
/// Directories are walked and spliced in with a `## Directory:` header unless
/// their name is ignored; files are classified and read like any entry met
/// during a walk.
pub fn render_item(item: &SelectionItem) -> RenderedEntry {
    let relative = PathBuf::from(item.display_name());
    render_selected(&item.path, &relative, item.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_walk_round_trip_scenario() -> std::io::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().join("folder");
        fs::create_dir_all(root.join("nested"))?;
        fs::write(root.join("a.txt"), "hello")?;
        fs::write(root.join("b.png"), [137u8, 80, 78, 71])?;
        fs::write(root.join("nested").join("c.txt"), "world")?;

        let out = walk(&root);
        assert_eq!(out.file_count, 2);
        assert_eq!(out.tree, "  a.txt\n  b.png\n  nested/\n    c.txt\n");
        let expected = "  a.txt\n  b.png\n  nested/\n\n\
                        ## File: folder/a.txt\n```txt\nhello\n```\n\n\
                        ## File: folder/b.png (binary/media, ignored)\n\n\
                        ## Directory: folder/nested/\n    c.txt\n\n\
                        ## File: folder/nested/c.txt\n```txt\nworld\n```\n";
        assert_eq!(out.text, expected);
        Ok(())
    }

    #[test]
    fn test_ignored_entries_are_placeholders_only() -> std::io::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().join("app");
        fs::create_dir_all(root.join("node_modules").join("left-pad"))?;
        fs::write(root.join("node_modules/left-pad/index.js"), "module.exports = 1")?;
        fs::write(root.join(".env"), "SECRET=1")?;
        fs::write(root.join("main.js"), "run()")?;

        let out = walk(&root);
        assert_eq!(out.file_count, 1);
        assert_eq!(out.tree, "  main.js\n");
        assert!(out.text.contains("## File: app/.env (content ignored)"));
        assert!(out.text.contains("## File: app/node_modules (content ignored)"));
        assert!(!out.text.contains("SECRET"));
        assert!(!out.text.contains("module.exports"));
        Ok(())
    }

    #[test]
    fn test_walk_missing_root_is_placeholder() {
        let out = walk(Path::new("/definitely/not/here"));
        assert_eq!(out.text, "## Directory: here/ (directory read failed)\n");
        assert_eq!(out.file_count, 0);
        assert!(out.tree.is_empty());
    }

    #[test]
    fn test_walk_is_deterministic() -> std::io::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().join("many");
        for i in 0..20 {
            let dir = root.join(format!("d{:02}", i));
            fs::create_dir_all(&dir)?;
            fs::write(dir.join("f.txt"), format!("content {}", i))?;
        }
        let first = walk(&root);
        let second = walk(&root);
        assert_eq!(first, second);
        assert_eq!(first.file_count, 20);
        let d03 = first.text.find("content 3\n").unwrap_or(usize::MAX);
        let d10 = first.text.find("content 10\n").unwrap_or(0);
        assert!(d03 < d10);
        Ok(())
    }

    #[test]
    fn test_render_item_top_level_file() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("notes.md");
        fs::write(&file, "# Notes")?;

        let entry = render_item(&SelectionItem::from_path(&file));
        assert_eq!(entry.tree(), "notes.md\n");
        assert_eq!(entry.block, "## File: notes.md\n```md\n# Notes\n```\n");
        assert_eq!(entry.file_count, 1);
        Ok(())
    }

    #[test]
    fn test_render_item_top_level_directory() -> std::io::Result<()> {
        let temp = tempdir()?;
        let dir = temp.path().join("src");
        fs::create_dir(&dir)?;
        fs::write(dir.join("lib.rs"), "pub fn f() {}")?;

        let item = SelectionItem::from_path(&dir);
        assert_eq!(item.kind, crate::core_types::ItemKind::Directory);
        let entry = render_item(&item);
        assert_eq!(entry.tree(), "src/\n  lib.rs\n");
        assert!(entry.block.starts_with("## Directory: src/\n  lib.rs\n\n## File: src/lib.rs\n"));
        assert_eq!(entry.file_count, 1);
        Ok(())
    }

    #[test]
    fn test_render_item_parent_dir_path_uses_real_name() -> std::io::Result<()> {
        let temp = tempdir()?;
        let proj = temp.path().join("proj");
        fs::create_dir_all(proj.join("sub"))?;
        fs::write(proj.join("main.rs"), "fn main() {}")?;

        let entry = render_item(&SelectionItem::from_path(proj.join("sub").join("..")));
        assert_eq!(entry.tree(), "proj/\n  main.rs\n  sub/\n");
        assert!(entry.block.contains("## File: proj/main.rs\n```rs\nfn main() {}\n```"));
        assert_eq!(entry.file_count, 1);
        Ok(())
    }
}
