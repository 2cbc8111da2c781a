// src/filtering/text_detection.rs

use content_inspector::ContentType;
use std::str;

/// Checks if a byte buffer is likely text-based.
///
/// It uses `content_inspector` to perform a heuristic check and then verifies
/// UTF-8 validity if the content type is ambiguous.
///
/// # Examples
/// ```
/// use selcat::filtering::is_likely_text_from_buffer;
///
/// let text_buffer = b"This is valid UTF-8 text.";
/// assert!(is_likely_text_from_buffer(text_buffer));
///
/// let binary_buffer = b"This contains a null byte \0.";
/// assert!(!is_likely_text_from_buffer(binary_buffer));
///
/// let invalid_utf8_buffer = &[0x48, 0x65, 0x6c, 0x6c, 0x80, 0x6f]; // "Hell\x80o"
/// assert!(!is_likely_text_from_buffer(invalid_utf8_buffer));
/// ```
pub fn is_likely_text_from_buffer(buffer_slice: &[u8]) -> bool {
    // Consider it text ONLY if explicitly detected as UTF_8_BOM,
    // OR if detected as UTF_8 AND the buffer slice is actually valid UTF-8.
    match content_inspector::inspect(buffer_slice) {
        ContentType::UTF_8_BOM => true,
        ContentType::UTF_8 => str::from_utf8(buffer_slice).is_ok(),
        ContentType::BINARY => false,
        // UTF-16/32 and anything added later are not treated as readable text
        _ => false,
    }
}

/// Decodes a whole file's bytes into text, or `None` when the content is not
/// readable UTF-8 text. A leading byte-order mark is dropped.
///
/// # Examples
/// ```
/// use selcat::filtering::decode_text;
///
/// assert_eq!(decode_text(b"hello".to_vec()).as_deref(), Some("hello"));
/// assert_eq!(decode_text(b"\xEF\xBB\xBFhi".to_vec()).as_deref(), Some("hi"));
/// assert!(decode_text(b"bin\0ary".to_vec()).is_none());
/// ```
pub fn decode_text(bytes: Vec<u8>) -> Option<String> {
    if !is_likely_text_from_buffer(&bytes) {
        return None;
    }
    let text = String::from_utf8(bytes).ok()?;
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => Some(stripped.to_owned()),
        None => Some(text),
    }
}
