//! Injected handles for persisted state: the destination document, the
//! key-value state holding the last editor-open time, and the clock.
//!
//! Each has a production implementation and an in-memory one for tests.

mod clock;
mod document;
mod state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use document::{DocumentStore, FsDocumentStore, MemoryDocumentStore};
pub use state::{JsonFileStore, MemoryStateStore, StateStore};
