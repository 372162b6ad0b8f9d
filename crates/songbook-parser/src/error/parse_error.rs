//! The error returned when a manifest cannot be turned into a booklet.
//!
//! A rejected manifest usually has several problems at once: an unknown
//! song in one entry, a duplicated key further down, and perhaps entries
//! sharing a position. [`ParseError`] keeps all of them, so the CLI can
//! print one report per diagnostic. Warnings ride along with the errors
//! that caused the rejection.

use std::fmt;

use crate::error::Diagnostic;

/// Error returned by [`parse`](crate::parse).
///
/// Holds every diagnostic collected during the parse, warnings included,
/// in the order they were found.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// All diagnostics, errors and warnings interleaved.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The diagnostics that rejected the manifest.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity().is_error())
    }

    /// Warnings found while the manifest was checked.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity().is_warning())
    }
}

/// Shows the first error with a count of what else was found, e.g.
/// ``error[E200]: unknown song `ghost` (+1 more, 2 warnings)``.
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.errors().count();
        let warnings = self.warnings().count();

        let (first, rest) = match self.errors().next() {
            Some(first) => (first, errors - 1),
            None => match self.diagnostics.first() {
                Some(first) => (first, self.diagnostics.len() - 1),
                None => return Ok(()),
            },
        };
        write!(f, "{first}")?;

        let mut counts = Vec::new();
        if rest > 0 {
            counts.push(format!("+{rest} more"));
        }
        if errors > 0 && warnings > 0 {
            let suffix = if warnings == 1 { "" } else { "s" };
            counts.push(format!("{warnings} warning{suffix}"));
        }
        if !counts.is_empty() {
            write!(f, " ({})", counts.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}
