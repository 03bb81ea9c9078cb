//! Core diagnostic type.

use std::fmt;

use quint_ir::{QuintId, SourceMap};

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A structural problem found while lowering, tied to the node that
/// exhibits it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be collected or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Identifier of the offending node.
    pub node: QuintId,
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity, node: QuintId) -> Self {
        Diagnostic {
            code,
            severity,
            message: code.description().to_string(),
            node,
            notes: Vec::new(),
        }
    }

    /// Create a new error diagnostic. The message defaults to the code's
    /// description.
    #[cold]
    pub fn error(code: ErrorCode, node: QuintId) -> Self {
        Self::new_with_severity(code, Severity::Error, node)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(code: ErrorCode, node: QuintId) -> Self {
        Self::new_with_severity(code, Severity::Warning, node)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Render with the node's location resolved through `source_map`.
    pub fn render(&self, source_map: &SourceMap) -> String {
        let mut out = format!("{} [{}]: {}\n", self.severity, self.code, self.message);
        match source_map.get(self.node) {
            Some(loc) => out.push_str(&format!("  --> {loc}\n")),
            None => out.push_str(&format!("  --> node {}\n", self.node)),
        }
        for note in &self.notes {
            out.push_str(&format!("  = note: {note}\n"));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        writeln!(f, "  --> node {}", self.node)?;
        for note in &self.notes {
            writeln!(f, "  = note: {note}")?;
        }
        Ok(())
    }
}

// Common constructors

/// A type definition whose name starts with a lowercase letter.
pub fn lowercase_type_name(node: QuintId, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::QNT007, node)
        .with_message(format!(
            "type names must start with an uppercase letter, found `{name}`"
        ))
        .with_note("lowercase names are reserved for type variables")
}

/// A record literal with more than one `...spread`.
pub fn multiple_record_spreads(node: QuintId, count: usize) -> Diagnostic {
    Diagnostic::error(ErrorCode::QNT012, node)
        .with_message(format!(
            "record literal has {count} spreads, at most one is allowed"
        ))
        .with_note("only the first spread is used as the base record")
}

/// Components left on the category stacks when a module finished.
pub fn leaked_stack_elements(node: QuintId, leaked: &[(&str, usize)]) -> Diagnostic {
    let summary = leaked
        .iter()
        .map(|(category, count)| format!("{count} {category}"))
        .collect::<Vec<_>>()
        .join(", ");
    Diagnostic::warning(ErrorCode::QNT901, node)
        .with_message(format!("unconsumed components at end of module: {summary}"))
        .with_note("this is a front-end bug; the leftovers were discarded")
}

#[cfg(test)]
mod tests;
