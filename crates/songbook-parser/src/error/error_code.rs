//! Error codes for manifest diagnostics.
//!
//! Codes are grouped by phase:
//! - `E0xx` - Manifest syntax and schema errors
//! - `E2xx` - Validation errors
//! - `W1xx` - Warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E0xx)
    // =========================================================================
    /// Malformed manifest.
    ///
    /// The TOML is invalid, or a table is missing a required field or has a
    /// field of the wrong type.
    E001,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Unknown song reference.
    ///
    /// An entry names a song key that no `[[songs]]` table defines.
    E200,

    /// Duplicate song key.
    ///
    /// Two `[[songs]]` tables use the same key.
    E201,

    /// Empty song key.
    E202,

    // =========================================================================
    // Warnings (W1xx)
    // =========================================================================
    /// Duplicate position.
    ///
    /// Two entries on the same page share a full position key. Their order
    /// then falls back to song definition order.
    W100,
}

impl ErrorCode {
    /// Returns the code as it appears in rendered diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E001 => "E001",
            Self::E200 => "E200",
            Self::E201 => "E201",
            Self::E202 => "E202",
            Self::W100 => "W100",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
