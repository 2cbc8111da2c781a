//! Launching the configured editor on the destination document.

use crate::config::EditorChoice;
use crate::errors::{Error, Result};
use log::{debug, warn};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Opens the destination in an editor and optionally scrolls to its end.
pub trait EditorLauncher {
    /// Opens (or focuses) the editor on `file`, with `dir` as its workspace.
    fn open(&self, dir: &Path, file: &Path) -> Result<()>;

    /// Moves the editor's view to the end of the document.
    fn scroll_to_end(&self) -> Result<()>;
}

/// Launches editors on the local machine.
#[derive(Debug, Clone)]
pub struct SystemEditor {
    choice: EditorChoice,
}

impl SystemEditor {
    pub fn new(choice: EditorChoice) -> Self {
        Self { choice }
    }
}

impl EditorLauncher for SystemEditor {
    #[cfg(target_os = "macos")]
    fn open(&self, dir: &Path, file: &Path) -> Result<()> {
        let mut cmd = std::process::Command::new("open");
        match &self.choice {
            EditorChoice::App(app) => {
                cmd.arg("-a").arg(app).arg(dir).arg(file);
            }
            EditorChoice::SystemDefault => {
                cmd.arg(file);
            }
        }
        debug!("Launching editor: {:?}", cmd);
        let status = cmd
            .status()
            .map_err(|e| Error::Launch(format!("failed to run 'open': {}", e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::Launch(format!("'open' exited with {}", status)))
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn open(&self, dir: &Path, file: &Path) -> Result<()> {
        debug!(
            "Launching editor {:?} on {} (workspace {})",
            self.choice,
            file.display(),
            dir.display()
        );
        let result = match &self.choice {
            EditorChoice::App(app) => open::with(file, app),
            EditorChoice::SystemDefault => open::that(file),
        };
        result.map_err(|e| Error::Launch(e.to_string()))
    }

    #[cfg(target_os = "macos")]
    fn scroll_to_end(&self) -> Result<()> {
        const SCRIPT: &str =
            "delay 0.5\ntell application \"System Events\" to key code 125 using command down";
        let status = std::process::Command::new("osascript")
            .arg("-e")
            .arg(SCRIPT)
            .status()
            .map_err(|e| Error::Launch(format!("failed to run osascript: {}", e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::Launch(format!("osascript exited with {}", status)))
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn scroll_to_end(&self) -> Result<()> {
        debug!("Scroll to end is not supported on this platform; skipping.");
        Ok(())
    }
}

/// An editor that records calls instead of launching anything.
#[derive(Debug, Default)]
pub struct RecordingEditor {
    opens: AtomicUsize,
    scrolls: AtomicUsize,
    fail_open: bool,
}

impl RecordingEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An editor whose `open` always fails.
    pub fn failing() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    /// Number of `open` attempts, failed ones included.
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl EditorLauncher for RecordingEditor {
    fn open(&self, _dir: &Path, file: &Path) -> Result<()> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if self.fail_open {
            warn!("Simulated launch failure for {}", file.display());
            return Err(Error::Launch("application not found".to_string()));
        }
        Ok(())
    }

    fn scroll_to_end(&self) -> Result<()> {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
