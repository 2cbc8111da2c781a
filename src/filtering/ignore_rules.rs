// src/filtering/ignore_rules.rs

use once_cell::sync::Lazy;
use regex::Regex;

// Noise directories, matched against the whole base name.
const NOISE_NAME_PATTERNS: &[&str] = &[
    // --- Hidden files and folders (.git, .vscode, .idea, .env, .DS_Store, .cache, ...) ---
    r"^\.",
    // --- Dependency caches ---
    r"^(node_modules|bower_components|jspm_packages|Pods|Carthage|vendor)$",
    // --- Build output ---
    r"^(dist|build|out|target|coverage|DerivedData)$",
    // --- Python environments and caches ---
    r"^(__pycache__|venv|env|virtualenv|\.?tox)$",
    // --- Editor swap/backup files ---
    r"~$",
    r"\.(swp|swo)$",
];

// Common lockfile names (case-insensitive check)
const LOCKFILE_NAMES: &[&str] = &[
    "package-lock.json",   // npm
    "npm-shrinkwrap.json", // npm (publishing)
    "yarn.lock",           // Yarn
    "pnpm-lock.yaml",      // pnpm
    "bun.lockb",           // Bun
    "deno.lock",           // Deno
    "composer.lock",       // Composer
    "gemfile.lock",        // Bundler
    "poetry.lock",         // Poetry
    "pipfile.lock",        // Pipenv
    "uv.lock",             // uv
    "go.sum",              // Go modules
    "cargo.lock",          // Cargo
    "podfile.lock",        // CocoaPods
    "package.resolved",    // Swift Package Manager
    "pubspec.lock",        // Pub
    "mix.lock",            // Mix
    "flake.lock",          // Nix Flakes
];

static NOISE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    NOISE_NAME_PATTERNS
        .iter()
        .filter_map(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(e) => {
                log::warn!("Invalid built-in ignore pattern '{}': {}", p, e);
                None
            }
        })
        .collect()
});

/// Checks if a base name is a lockfile.
pub(crate) fn is_lockfile(name: &str) -> bool {
    let lower_name = name.to_lowercase();
    LOCKFILE_NAMES.iter().any(|&lockfile| lower_name == lockfile) || lower_name.ends_with(".lock")
}

/// Checks if a base name matches any of the static ignore rules.
pub(crate) fn is_ignored_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    NOISE_RULES.iter().any(|re| re.is_match(name)) || is_lockfile(name)
}
