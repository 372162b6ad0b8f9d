//! Accumulates diagnostics so one parse can report every problem at once.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Collects diagnostics emitted while validating a manifest.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Errors mark the collection as failed.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection.
    ///
    /// Returns every diagnostic (warnings included) as a [`ParseError`] if
    /// any error was emitted. Otherwise the warnings are logged and
    /// `Ok(())` is returned.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }
        for diagnostic in &self.diagnostics {
            warn!(diagnostic:%; "Manifest warning");
        }
        Ok(())
    }
}
