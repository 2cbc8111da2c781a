//! The host environment: where selections, highlighted text and clipboard
//! content come from, and where user-facing messages go.

use crate::errors::Result;
use std::path::PathBuf;

mod scripted;
mod system;

pub use scripted::ScriptedHost;
pub use system::SystemHost;

/// Primitives the aggregation engine requires from its host.
///
/// Every query may fail; callers treat failure the same as an empty answer.
pub trait Host {
    /// Items currently selected, in host order.
    fn selected_items(&self) -> Result<Vec<PathBuf>>;

    /// Text currently highlighted in the active application.
    fn selected_text(&self) -> Result<String>;

    /// Text on the system clipboard.
    fn clipboard_text(&self) -> Result<String>;

    /// Shows a short message to the user. Never fails.
    fn notify(&self, message: &str);
}
