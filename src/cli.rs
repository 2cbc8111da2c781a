// src/cli.rs

use crate::core_types::Mode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Aggregates the current selection into a single Markdown document and opens it.
///
/// selcat concatenates the selected files and folders (recursively, skipping
/// dependency caches, build output, hidden and binary files) into one
/// destination document. With nothing selected it falls back to highlighted
/// text (piped stdin or the primary selection) and then to the clipboard.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Application used to open the destination document (overrides preferences).
    #[arg(long, global = true, value_name = "APP")]
    pub editor: Option<String>,

    /// Save the document without launching the editor.
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub no_open: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The two aggregation operations.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Replace the destination document and open it in the editor.
    Write {
        /// Selected files and folders, in order.
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
    /// Append to the destination document, reopening the editor at most once a minute.
    Append {
        /// Selected files and folders, in order.
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
}

impl Commands {
    pub fn mode(&self) -> Mode {
        match self {
            Commands::Write { .. } => Mode::Write,
            Commands::Append { .. } => Mode::Append,
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Commands::Write { paths } | Commands::Append { paths } => paths,
        }
    }
}
