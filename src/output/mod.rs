// src/output/mod.rs

//! Text rendering for the aggregated document.
//!
//! Everything here is pure string building; the walker and the resolver
//! decide *what* to render, these helpers decide *how* it looks.

pub mod document;
pub mod file_block;
pub mod formatter;
pub mod structure;

pub use document::render_document;
pub use file_block::{
    directory_failed_line, directory_header, file_block, placeholder_line, Placeholder,
};
pub use structure::structure_line;
