//! Output of a lowering session.

use quint_diagnostic::{Diagnostic, ErrorCode};
use quint_ir::{Declaration, Module, QuintId, SourceMap};

use crate::RecoveryNote;

/// Everything a lowering session produces.
///
/// Always complete: malformed input yields placeholders and recovery notes,
/// never a missing module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoweringResult {
    /// Modules in completion order.
    pub modules: Vec<Module>,
    pub source_map: SourceMap,
    /// User-visible structural problems, in emission order.
    pub diagnostics: Vec<Diagnostic>,
    /// Internal recovery events.
    pub recovery_notes: Vec<RecoveryNote>,
}

impl LoweringResult {
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Declarations of every module, in order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.modules.iter().flat_map(|m| m.declarations.iter())
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn diagnostics_with(&self, code: ErrorCode) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    /// Whether the input needed any recovery.
    pub fn recovered(&self) -> bool {
        !self.recovery_notes.is_empty()
    }

    /// Largest identifier issued, if any; feed to
    /// [`LoweringConfig::continuing_after`](crate::LoweringConfig::continuing_after).
    pub fn last_id(&self) -> Option<QuintId> {
        self.source_map.entries().last().map(|(id, _)| *id)
    }

    /// Render all diagnostics against the source map.
    pub fn render_diagnostics(&self) -> String {
        self.diagnostics
            .iter()
            .map(|d| d.render(&self.source_map))
            .collect()
    }
}
