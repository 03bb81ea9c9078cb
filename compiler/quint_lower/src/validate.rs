//! Structural validation of lowering results.
//!
//! Checks what every result must satisfy regardless of input quality:
//! - no identifier appears twice in the module trees
//! - every identifier in the trees has a source map entry
//! - row field names are unique within their row
//! - an open row's variable is not also one of its field names
//!
//! Runs automatically after each session in debug builds, where a failure
//! is an engine bug.

use rustc_hash::FxHashSet;
use thiserror::Error;

use quint_ir::visitor::{
    walk_declaration, walk_expr, walk_module, walk_opdef, walk_type, Visitor,
};
use quint_ir::{
    Declaration, Expr, LambdaParameter, Module, OpDef, QuintId, RowTail, SourceMap, Type,
};

use crate::LoweringResult;

/// An invariant violation in a lowering result.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("identifier {0} is used by more than one node")]
    DuplicateId(QuintId),
    #[error("identifier {0} has no source map entry")]
    Unmapped(QuintId),
    #[error("row of type {ty} repeats field `{field}`")]
    DuplicateField { ty: QuintId, field: String },
    #[error("row of type {ty} has variable `{var}` named like one of its fields")]
    TailNamesField { ty: QuintId, var: String },
}

/// Check a lowering result; an empty list means it is well formed.
pub fn validate(result: &LoweringResult) -> Vec<ValidationError> {
    let mut checker = IdChecker {
        source_map: &result.source_map,
        seen: FxHashSet::default(),
        errors: Vec::new(),
    };
    for module in &result.modules {
        checker.visit_module(module);
    }
    checker.errors
}

#[cfg(debug_assertions)]
pub(crate) fn debug_check(result: &LoweringResult) {
    let errors = validate(result);
    for error in &errors {
        tracing::error!(%error, "invalid lowering result");
    }
    debug_assert!(errors.is_empty(), "invalid lowering result: {errors:?}");
}

struct IdChecker<'a> {
    source_map: &'a SourceMap,
    seen: FxHashSet<QuintId>,
    errors: Vec<ValidationError>,
}

impl IdChecker<'_> {
    fn record(&mut self, id: QuintId) {
        if !self.seen.insert(id) {
            self.errors.push(ValidationError::DuplicateId(id));
        }
        if !self.source_map.contains(id) {
            self.errors.push(ValidationError::Unmapped(id));
        }
    }
}

impl Visitor for IdChecker<'_> {
    fn visit_module(&mut self, module: &Module) {
        self.record(module.id);
        walk_module(self, module);
    }

    fn visit_declaration(&mut self, decl: &Declaration) {
        // Definitions are recorded by `visit_opdef`.
        if !matches!(decl, Declaration::Def(_)) {
            self.record(decl.id());
        }
        walk_declaration(self, decl);
    }

    fn visit_opdef(&mut self, opdef: &OpDef) {
        self.record(opdef.id);
        walk_opdef(self, opdef);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        self.record(expr.id);
        walk_expr(self, expr);
    }

    fn visit_param(&mut self, param: &LambdaParameter) {
        self.record(param.id);
    }

    fn visit_type(&mut self, ty: &Type) {
        self.record(ty.id);
        if let Some(row) = ty.row() {
            let mut names = FxHashSet::default();
            for name in row.field_names() {
                if !names.insert(name) {
                    self.errors.push(ValidationError::DuplicateField {
                        ty: ty.id,
                        field: name.to_string(),
                    });
                }
            }
            if let RowTail::Var(var) = &row.tail {
                if names.contains(var.as_str()) {
                    self.errors.push(ValidationError::TailNamesField {
                        ty: ty.id,
                        var: var.clone(),
                    });
                }
            }
        }
        walk_type(self, ty);
    }
}
