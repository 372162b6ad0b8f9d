//! Export functionality for songbooks.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning laid-out pages into an output document, and the helpers that
//! split a booklet into separately exported song files.
//!
//! # Pipeline Position
//!
//! ```text
//! Manifest
//!     ↓ parse
//! Booklet
//!     ↓ layout
//! Pages (LayoutNode trees)
//!     ↓ export (this module)
//! Document and song files
//! ```
//!
//! # Available Backends
//!
//! - [`tex`] - LaTeX output via [`tex::TexBuilder`] and [`tex::Tex`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`SongbookError::Export`] at the crate
//! boundary.
//!
//! [`SongbookError::Export`]: crate::SongbookError::Export

pub mod files;
/// LaTeX export backend.
pub mod tex;

use std::fmt;

use crate::layout::Page;

/// Abstraction for songbook export backends.
///
/// See the [`tex`] module for the built-in LaTeX implementation.
pub trait Exporter {
    /// Exports the laid-out pages of a booklet.
    ///
    /// Pages are exported in order; each page has a single layout root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a page cannot be converted to the target
    /// format, or [`Error::Io`] if writing the output fails.
    fn export_pages(&mut self, pages: &[Page<'_>]) -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// This type is converted into [`SongbookError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`SongbookError::Export`]: crate::SongbookError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while reading or writing files.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::Render("failed to format document".to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
