// src/output/document.rs

use crate::constants::{CONTENT_HEADER, FILE_COUNT_PREFIX, STRUCTURE_HEADER};

/// Assembles the aggregated document for a selection.
///
/// Layout: file count line, the structure section, then the detailed content
/// section with a blank line between item blocks.
///
/// # Examples
/// ```
/// use selcat::output::document::render_document;
///
/// let doc = render_document(1, "a.txt\n", &["## File: a.txt\n```txt\nhi\n```\n".to_string()]);
/// assert_eq!(
///     doc,
///     "Total files: 1\n\nStructure:\na.txt\n\nContent:\n## File: a.txt\n```txt\nhi\n```\n"
/// );
/// ```
pub fn render_document(file_count: usize, structure: &str, blocks: &[String]) -> String {
    let mut doc = format!("{}: {}\n\n", FILE_COUNT_PREFIX, file_count);
    doc.push_str(STRUCTURE_HEADER);
    doc.push('\n');
    doc.push_str(structure);
    doc.push('\n');
    doc.push_str(CONTENT_HEADER);
    doc.push('\n');
    doc.push_str(&blocks.join("\n"));
    doc
}
