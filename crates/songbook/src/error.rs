//! Error types for songbook operations.
//!
//! This module provides the main error type [`SongbookError`] which wraps
//! the error conditions of parsing, layout and export.

use std::io;

use thiserror::Error;

use songbook_parser::error::ParseError;

/// The main error type for songbook operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the manifest source next to the diagnostics so
/// that callers can render labelled source snippets.
#[derive(Debug, Error)]
pub enum SongbookError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    /// A caller broke a layout precondition, such as passing unsorted entries.
    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for SongbookError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl SongbookError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
