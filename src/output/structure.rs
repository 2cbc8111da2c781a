// src/output/structure.rs

use crate::constants::INDENT;

/// Renders one line of a structure listing.
///
/// Directories are suffixed with `/`; each depth level adds one indent.
///
/// # Examples
/// ```
/// use selcat::output::structure::structure_line;
///
/// assert_eq!(structure_line("src", true, 0), "src/\n");
/// assert_eq!(structure_line("main.rs", false, 2), "    main.rs\n");
/// ```
pub fn structure_line(name: &str, is_dir: bool, depth: usize) -> String {
    let indent = INDENT.repeat(depth);
    if is_dir {
        format!("{}{}/\n", indent, name)
    } else {
        format!("{}{}\n", indent, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_level_has_no_indent() {
        assert_eq!(structure_line("a.txt", false, 0), "a.txt\n");
    }

    #[test]
    fn test_nested_directory() {
        assert_eq!(structure_line("nested", true, 1), "  nested/\n");
    }
}
