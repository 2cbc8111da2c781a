// tests/common.rs

use assert_cmd::Command;
use std::path::{Path, PathBuf};

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn selcat_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("selcat"))
}

/// The binary with `home` as the user's home directory and the editor disabled.
///
/// Platform directories (documents, data, config) all resolve below `home`.
#[allow(dead_code)]
pub fn isolated_cmd(home: &Path) -> Command {
    let mut cmd = selcat_cmd();
    cmd.env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_DATA_HOME")
        .arg("--no-open");
    cmd
}

/// Where the destination document lands for an isolated home.
#[allow(dead_code)]
pub fn destination_in(home: &Path) -> PathBuf {
    home.join("Documents").join("Selcat").join("aggregated.md")
}
