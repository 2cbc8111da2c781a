// src/filtering/mod.rs

//! The filter policy: decides from a base name alone whether an item is
//! noise to skip, binary/media to stand in with a placeholder, or content to
//! include.
//!
//! The decision never looks at file contents or sizes. Reading a `Content`
//! file can still fail later (e.g. it turns out not to be UTF-8); that is the
//! walker's concern, see [`decode_text`].

mod ignore_rules;
mod media;
mod text_detection;

pub use text_detection::{decode_text, is_likely_text_from_buffer};

/// The outcome of classifying a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// The name matches a static ignore rule (hidden, dependency cache, build
    /// output, VCS metadata, editor settings, environment or lock file).
    Ignored,
    /// The extension marks an image, audio, video, archive, executable or bundle.
    BinaryOrMedia,
    /// Eligible for inclusion.
    Content,
}

/// Classifies a base name.
///
/// Total and deterministic: the same name always yields the same decision.
/// Ignore rules take precedence over the binary/media check.
///
/// # Examples
///
/// ```
/// use selcat::filtering::{classify, FilterDecision};
///
/// assert_eq!(classify("node_modules"), FilterDecision::Ignored);
/// assert_eq!(classify(".env"), FilterDecision::Ignored);
/// assert_eq!(classify("Cargo.lock"), FilterDecision::Ignored);
/// assert_eq!(classify("photo.JPG"), FilterDecision::BinaryOrMedia);
/// assert_eq!(classify("main.rs"), FilterDecision::Content);
/// ```
pub fn classify(name: &str) -> FilterDecision {
    if ignore_rules::is_ignored_name(name) {
        FilterDecision::Ignored
    } else if media::is_binary_or_media(name) {
        FilterDecision::BinaryOrMedia
    } else {
        FilterDecision::Content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignore_takes_precedence_over_media() {
        // Hidden and media at the same time
        assert_eq!(classify(".thumbnail.png"), FilterDecision::Ignored);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for name in ["a.txt", "b.png", ".git", "dist", "weird name (1).md", ""] {
            assert_eq!(classify(name), classify(name));
        }
    }

    #[test]
    fn test_plain_names_are_content() {
        assert_eq!(classify("README"), FilterDecision::Content);
        assert_eq!(classify("notes.txt"), FilterDecision::Content);
        assert_eq!(classify("src"), FilterDecision::Content);
        assert_eq!(classify(""), FilterDecision::Content);
    }
}
