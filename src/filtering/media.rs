// src/filtering/media.rs

use std::path::Path;

const MEDIA_EXTENSIONS: &[&str] = &[
    // --- Images ---
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "icns", "webp", "tif", "tiff", "heic", "heif",
    "avif", "psd", "raw", "cr2", "nef", "dng",
    // --- Audio ---
    "mp3", "wav", "flac", "aac", "ogg", "oga", "m4a", "aif", "aiff", "opus", "mid", "midi",
    // --- Video ---
    "mp4", "m4v", "mov", "avi", "mkv", "webm", "wmv", "flv", "mpg", "mpeg",
    // --- Archives and disk images ---
    "zip", "tar", "gz", "tgz", "bz2", "xz", "zst", "7z", "rar", "dmg", "iso", "pkg", "deb", "rpm",
    // --- Executables and compiled artifacts ---
    "exe", "dll", "so", "dylib", "bin", "o", "a", "lib", "class", "jar", "war", "pyc", "pyo",
    "wasm", "rlib", "rmeta",
    // --- Documents, fonts and databases ---
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "ttf", "otf", "woff", "woff2", "eot",
    "db", "sqlite", "sqlite3",
    // --- Bundles ---
    "app", "bundle", "framework", "xcassets", "sketch", "fig", "xd",
];

/// Checks if a base name's extension belongs to the binary/media set.
///
/// The comparison is always case-insensitive. Names without an extension
/// (including dotfiles such as `.png`) never match.
pub(crate) fn is_binary_or_media(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|os_str| os_str.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            MEDIA_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_extensions_match() {
        assert!(is_binary_or_media("logo.png"));
        assert!(is_binary_or_media("clip.MOV")); // Case insensitive
        assert!(is_binary_or_media("song.mp3"));
        assert!(is_binary_or_media("release.tar.gz"));
        assert!(is_binary_or_media("Preview.app"));
    }

    #[test]
    fn test_text_extensions_do_not_match() {
        assert!(!is_binary_or_media("main.rs"));
        assert!(!is_binary_or_media("README.md"));
        assert!(!is_binary_or_media("icon.svg"));
        assert!(!is_binary_or_media("Makefile")); // No extension
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        assert!(!is_binary_or_media(".png"));
    }
}
