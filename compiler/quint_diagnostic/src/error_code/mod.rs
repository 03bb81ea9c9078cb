//! Error codes for front-end diagnostics.
//!
//! Codes share the `QNT` prefix used across the toolchain. The 0xx range
//! holds user-facing structural errors; 9xx is reserved for internal
//! consistency problems of the front end itself.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Type name starts with a lowercase letter
    QNT007,
    /// More than one spread in a record literal
    QNT012,
    /// Lowered components left on the stacks at the end of a module
    QNT901,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[ErrorCode::QNT007, ErrorCode::QNT012, ErrorCode::QNT901];

    /// Get the code as a string (e.g., "QNT007").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::QNT007 => "QNT007",
            ErrorCode::QNT012 => "QNT012",
            ErrorCode::QNT901 => "QNT901",
        }
    }

    /// One-line description, used by `--explain`-style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::QNT007 => "type names must start with an uppercase letter",
            ErrorCode::QNT012 => "a record literal may contain at most one spread",
            ErrorCode::QNT901 => "internal: lowered components leaked across a module boundary",
        }
    }

    /// Check if this code reports an internal front-end problem rather than
    /// a problem in the user's specification.
    pub fn is_internal(&self) -> bool {
        matches!(self, ErrorCode::QNT901)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
