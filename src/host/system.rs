use super::Host;
#[cfg(feature = "clipboard")]
use crate::errors::ClipboardError;
use crate::errors::{Error, Result};
use crossbeam_channel::{bounded, RecvTimeoutError};
use log::{debug, info, warn};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// The local machine as host.
///
/// Selected items are the paths given on the command line. Highlighted text
/// is piped standard input when there is any, otherwise the primary selection
/// on X11/Wayland. Messages go to standard error.
#[derive(Debug, Clone)]
pub struct SystemHost {
    paths: Vec<PathBuf>,
    text_timeout: Duration,
}

impl SystemHost {
    pub fn new(paths: Vec<PathBuf>, text_timeout: Duration) -> Self {
        Self {
            paths,
            text_timeout,
        }
    }
}

impl Host for SystemHost {
    fn selected_items(&self) -> Result<Vec<PathBuf>> {
        Ok(self.paths.clone())
    }

    fn selected_text(&self) -> Result<String> {
        let from_stdin = !atty::is(atty::Stream::Stdin);
        let (tx, rx) = bounded(1);

        // The worker is detached; if it outlives the timeout its answer is dropped.
        thread::spawn(move || {
            let _ = tx.send(query_selected_text(from_stdin));
        });

        match rx.recv_timeout(self.text_timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                debug!(
                    "Highlighted text query timed out after {:?}",
                    self.text_timeout
                );
                Err(Error::SourceUnavailable(
                    "highlighted text query timed out".to_string(),
                ))
            }
            Err(RecvTimeoutError::Disconnected) => Err(Error::SourceUnavailable(
                "highlighted text worker exited".to_string(),
            )),
        }
    }

    #[cfg(feature = "clipboard")]
    fn clipboard_text(&self) -> Result<String> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Initialization(e.to_string()))?;
        let text = clipboard
            .get_text()
            .map_err(|e| ClipboardError::GetContent(e.to_string()))?;
        Ok(text)
    }

    #[cfg(not(feature = "clipboard"))]
    fn clipboard_text(&self) -> Result<String> {
        Err(Error::SourceUnavailable(
            "built without clipboard support".to_string(),
        ))
    }

    fn notify(&self, message: &str) {
        info!("{}", message);
        if let Err(e) = writeln!(io::stderr(), "selcat: {}", message) {
            warn!("Failed to show notification: {}", e);
        }
    }
}

fn query_selected_text(from_stdin: bool) -> Result<String> {
    if from_stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| Error::SourceUnavailable(format!("could not read stdin: {}", e)))?;
        debug!("Read {} bytes of piped text", buffer.len());
        return Ok(buffer);
    }
    primary_selection()
}

#[cfg(all(
    feature = "clipboard",
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn primary_selection() -> Result<String> {
    use arboard::{Clipboard, GetExtLinux, LinuxClipboardKind};

    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Initialization(e.to_string()))?;
    let text = clipboard
        .get()
        .clipboard(LinuxClipboardKind::Primary)
        .text()
        .map_err(|e| ClipboardError::GetContent(e.to_string()))?;
    Ok(text)
}

#[cfg(not(all(
    feature = "clipboard",
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn primary_selection() -> Result<String> {
    Err(Error::SourceUnavailable(
        "no highlighted-text query on this platform".to_string(),
    ))
}
