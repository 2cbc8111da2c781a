#![cfg(unix)]

mod common;

use common::{destination_in, isolated_cmd, selcat_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn sample_folder(root: &std::path::Path) -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    let folder = root.join("folder");
    fs::create_dir_all(folder.join("nested"))?;
    fs::write(folder.join("a.txt"), "hello")?;
    fs::write(folder.join("b.png"), [137u8, 80, 78, 71, 0, 0])?;
    fs::write(folder.join("nested").join("c.txt"), "world")?;
    Ok(folder)
}

#[test]
fn test_write_folder_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let work = tempdir()?;
    let folder = sample_folder(work.path())?;

    isolated_cmd(home.path())
        .arg("write")
        .arg(&folder)
        .assert()
        .success()
        .stderr(predicate::str::contains("selcat: Wrote selection to"));

    let doc = fs::read_to_string(destination_in(home.path()))?;
    assert!(doc.starts_with("Total files: 2\n"));
    assert!(doc.contains("Structure:\nfolder/\n  a.txt\n  b.png\n  nested/\n    c.txt\n"));
    assert!(doc.contains("## File: folder/a.txt\n```txt\nhello\n```"));
    assert!(doc.contains("## File: folder/nested/c.txt\n```txt\nworld\n```"));
    assert!(doc.contains("## File: folder/b.png (binary/media, ignored)"));
    Ok(())
}

#[test]
fn test_write_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let work = tempdir()?;
    let folder = sample_folder(work.path())?;

    isolated_cmd(home.path()).arg("write").arg(&folder).assert().success();
    let once = fs::read(destination_in(home.path()))?;
    isolated_cmd(home.path()).arg("write").arg(&folder).assert().success();
    let twice = fs::read(destination_in(home.path()))?;

    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn test_append_right_after_write_is_quiet() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let work = tempdir()?;
    let first = work.path().join("first.md");
    let second = work.path().join("second.md");
    fs::write(&first, "FIRST")?;
    fs::write(&second, "SECOND")?;

    isolated_cmd(home.path()).arg("write").arg(&first).assert().success();
    isolated_cmd(home.path())
        .arg("append")
        .arg(&second)
        .assert()
        .success()
        .stderr(predicate::str::contains("selcat: Appended selection to"));

    let doc = fs::read_to_string(destination_in(home.path()))?;
    let (before, after) = doc
        .split_once("\n\n---\n\n")
        .ok_or("separator missing")?;
    assert!(before.contains("FIRST"));
    assert!(after.contains("SECOND"));
    assert!(!after.contains("FIRST"));
    Ok(())
}

#[test]
fn test_piped_stdin_is_highlighted_text() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;

    isolated_cmd(home.path())
        .arg("write")
        .write_stdin("piped text\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("selcat: Wrote highlighted text to"));

    assert_eq!(
        fs::read_to_string(destination_in(home.path()))?,
        "piped text\n"
    );
    Ok(())
}

#[test]
fn test_selection_takes_precedence_over_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let work = tempdir()?;
    let file = work.path().join("chosen.txt");
    fs::write(&file, "from the file")?;

    isolated_cmd(home.path())
        .arg("write")
        .arg(&file)
        .write_stdin("from stdin")
        .assert()
        .success();

    let doc = fs::read_to_string(destination_in(home.path()))?;
    assert!(doc.contains("from the file"));
    assert!(!doc.contains("from stdin"));
    Ok(())
}

#[test]
fn test_ignored_top_level_item_is_placeholder() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let work = tempdir()?;
    let env_file = work.path().join(".env");
    fs::write(&env_file, "TOKEN=secret")?;

    isolated_cmd(home.path()).arg("write").arg(&env_file).assert().success();

    let doc = fs::read_to_string(destination_in(home.path()))?;
    assert!(doc.starts_with("Total files: 0\n"));
    assert!(doc.contains("## File: .env (content ignored)"));
    assert!(!doc.contains("secret"));
    Ok(())
}

#[test]
#[cfg(target_os = "linux")]
fn test_nothing_to_aggregate() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;

    // No selection, empty stdin and no display server for the clipboard.
    isolated_cmd(home.path())
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .arg("append")
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("selcat: Nothing to aggregate"));

    assert!(!destination_in(home.path()).exists());
    Ok(())
}

#[test]
fn test_unwritable_destination_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let work = tempdir()?;
    let file = work.path().join("a.txt");
    fs::write(&file, "a")?;
    // A regular file where the documents directory should be.
    fs::write(home.path().join("Documents"), "in the way")?;

    isolated_cmd(home.path())
        .arg("write")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "selcat: Could not create destination directory",
        ));
    Ok(())
}

#[test]
fn test_current_directory_selection_is_walked() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let work = tempdir()?;
    let proj = work.path().join("proj");
    fs::create_dir(&proj)?;
    fs::write(proj.join("main.rs"), "fn main() {}")?;

    isolated_cmd(home.path())
        .current_dir(&proj)
        .arg("write")
        .arg(".")
        .assert()
        .success();

    let doc = fs::read_to_string(destination_in(home.path()))?;
    assert!(doc.starts_with("Total files: 1\n"));
    assert!(doc.contains("Structure:\nproj/\n  main.rs\n"));
    assert!(doc.contains("## File: proj/main.rs\n```rs\nfn main() {}\n```"));
    Ok(())
}

#[test]
fn test_selected_bundle_folder_is_walked() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let work = tempdir()?;
    let bundle = work.path().join("x.app");
    fs::create_dir(&bundle)?;
    fs::write(bundle.join("README.txt"), "inside the bundle")?;

    isolated_cmd(home.path()).arg("write").arg(&bundle).assert().success();

    let doc = fs::read_to_string(destination_in(home.path()))?;
    assert!(doc.starts_with("Total files: 1\n"));
    assert!(doc.contains("## Directory: x.app/"));
    assert!(doc.contains("inside the bundle"));
    Ok(())
}

#[test]
fn test_subcommand_is_required() {
    selcat_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
