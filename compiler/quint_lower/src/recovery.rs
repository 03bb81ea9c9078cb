//! Best-effort recovery on malformed trees.
//!
//! When a construct finds fewer children than it needs (the parser recovered
//! from a syntax error and reported a partial tree), the missing children are
//! replaced by well-formed placeholders and a [`RecoveryNote`] is recorded.
//! Notes are for front-end maintainers: they are logged at debug level and
//! kept apart from user diagnostics.

use quint_ir::{
    Declaration, Expr, LambdaParameter, Loc, OpDef, Qualifier, Row, Type, TypeKind, HOLE,
};

use crate::lower::{LoweringState, Site};
use crate::stacks::{
    take_last, CategoryStacks, MatchArm, RecordEntry, StackCategory, VariantField,
};

/// Name bound by placeholder definitions.
pub const RECOVERED_NAME: &str = "__recovered";

/// Why a placeholder was synthesized or a component dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecoveryReason {
    /// The construct needed `missing` more children than were available.
    Underflow { missing: usize },
    /// An operator definition was reported without a body.
    MissingBody,
    /// An operator token outside the resolution tables.
    UnknownOperator(String),
    /// An integer literal that is malformed or out of range.
    InvalidInteger(String),
    /// A `let` found a declaration other than an operator definition.
    NotAnOperatorDefinition,
    /// A repeated field name in a row; the later field was dropped.
    DuplicateRowField(String),
    /// A row variable named like one of the row's fields; the row was closed.
    TailNamesField(String),
    /// Components still pending when the session finished.
    Unclaimed { count: usize },
}

/// A recovery event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveryNote {
    /// Production that triggered the recovery.
    pub construct: &'static str,
    pub category: StackCategory,
    pub loc: Loc,
    pub reason: RecoveryReason,
}

fn exprs(stacks: &mut CategoryStacks) -> &mut Vec<Expr> {
    &mut stacks.exprs
}

fn params(stacks: &mut CategoryStacks) -> &mut Vec<LambdaParameter> {
    &mut stacks.params
}

fn types(stacks: &mut CategoryStacks) -> &mut Vec<Type> {
    &mut stacks.types
}

fn rows(stacks: &mut CategoryStacks) -> &mut Vec<Row> {
    &mut stacks.rows
}

fn variants(stacks: &mut CategoryStacks) -> &mut Vec<VariantField> {
    &mut stacks.variants
}

fn identifiers(stacks: &mut CategoryStacks) -> &mut Vec<String> {
    &mut stacks.identifiers
}

impl LoweringState {
    /// Record a recovery event.
    pub(crate) fn note(
        &mut self,
        site: &Site<'_>,
        category: StackCategory,
        reason: RecoveryReason,
    ) {
        tracing::debug!(
            construct = site.construct,
            %category,
            loc = %site.loc,
            ?reason,
            "recovering from malformed tree"
        );
        self.notes.push(RecoveryNote {
            construct: site.construct,
            category,
            loc: site.loc.clone(),
            reason,
        });
    }

    /// A fresh name for synthesized components that need one.
    fn recovered_name(&mut self, prefix: &str) -> String {
        self.recovered += 1;
        format!("{prefix}{}", self.recovered)
    }

    // Placeholders

    /// `val __recovered = true; true`
    pub(crate) fn placeholder_expr(&mut self, site: &Site<'_>) -> Expr {
        let opdef = self.placeholder_opdef(site);
        let body = Expr::bool(self.fresh_id(site), true);
        Expr::let_in(self.fresh_id(site), opdef, body)
    }

    /// `val __recovered = true`
    pub(crate) fn placeholder_opdef(&mut self, site: &Site<'_>) -> OpDef {
        let expr = Expr::bool(self.fresh_id(site), true);
        OpDef {
            id: self.fresh_id(site),
            name: RECOVERED_NAME.to_string(),
            qualifier: Qualifier::Val,
            type_annotation: None,
            expr,
            doc: None,
        }
    }

    fn placeholder_param(&mut self, site: &Site<'_>) -> LambdaParameter {
        LambdaParameter::new(self.fresh_id(site), HOLE)
    }

    /// A type variable no user type can mention.
    fn placeholder_type(&mut self, site: &Site<'_>) -> Type {
        let name = self.recovered_name(RECOVERED_NAME);
        Type::new(self.fresh_id(site), TypeKind::Var(name))
    }

    fn placeholder_variant(&mut self, _site: &Site<'_>) -> VariantField {
        VariantField {
            label: self.recovered_name("__Recovered"),
            payload: None,
        }
    }

    fn placeholder_identifier(&mut self, _site: &Site<'_>) -> String {
        self.recovered_name("__field")
    }

    fn placeholder_row(&mut self, _site: &Site<'_>) -> Row {
        Row::empty()
    }

    // Popping with recovery

    fn pop_one<T>(
        &mut self,
        site: &Site<'_>,
        category: StackCategory,
        stack: fn(&mut CategoryStacks) -> &mut Vec<T>,
        placeholder: fn(&mut Self, &Site<'_>) -> T,
    ) -> T {
        if let Some(value) = stack(&mut self.stacks).pop() {
            return value;
        }
        self.note(site, category, RecoveryReason::Underflow { missing: 1 });
        placeholder(self, site)
    }

    /// Pop `n` elements in push order; missing ones are synthesized at the
    /// front, where the earliest (absent) children would have been.
    fn pop_many<T>(
        &mut self,
        site: &Site<'_>,
        n: usize,
        category: StackCategory,
        stack: fn(&mut CategoryStacks) -> &mut Vec<T>,
        placeholder: fn(&mut Self, &Site<'_>) -> T,
    ) -> Vec<T> {
        let (taken, missing) = take_last(stack(&mut self.stacks), n);
        if missing == 0 {
            return taken;
        }
        self.note(site, category, RecoveryReason::Underflow { missing });
        let mut filled: Vec<T> = (0..missing).map(|_| placeholder(self, site)).collect();
        filled.extend(taken);
        filled
    }

    pub(crate) fn pop_expr(&mut self, site: &Site<'_>) -> Expr {
        self.pop_one(site, StackCategory::Expression, exprs, Self::placeholder_expr)
    }

    pub(crate) fn pop_exprs(&mut self, site: &Site<'_>, n: usize) -> Vec<Expr> {
        self.pop_many(site, n, StackCategory::Expression, exprs, Self::placeholder_expr)
    }

    pub(crate) fn pop_type(&mut self, site: &Site<'_>) -> Type {
        self.pop_one(site, StackCategory::Type, types, Self::placeholder_type)
    }

    pub(crate) fn pop_types(&mut self, site: &Site<'_>, n: usize) -> Vec<Type> {
        self.pop_many(site, n, StackCategory::Type, types, Self::placeholder_type)
    }

    pub(crate) fn pop_params(&mut self, site: &Site<'_>, n: usize) -> Vec<LambdaParameter> {
        self.pop_many(site, n, StackCategory::Parameter, params, Self::placeholder_param)
    }

    pub(crate) fn pop_row(&mut self, site: &Site<'_>) -> Row {
        self.pop_one(site, StackCategory::Row, rows, Self::placeholder_row)
    }

    pub(crate) fn pop_variants(&mut self, site: &Site<'_>, n: usize) -> Vec<VariantField> {
        self.pop_many(site, n, StackCategory::VariantField, variants, Self::placeholder_variant)
    }

    pub(crate) fn pop_identifiers(&mut self, site: &Site<'_>, n: usize) -> Vec<String> {
        self.pop_many(site, n, StackCategory::Identifier, identifiers, Self::placeholder_identifier)
    }

    /// Pop the operator definition a `let` scopes over.
    ///
    /// This is the only single-declaration pop, so the declaration
    /// placeholder is a definition (`val __recovered = true`), never an
    /// assumption.
    pub(crate) fn pop_opdef(&mut self, site: &Site<'_>) -> OpDef {
        match self.stacks.decls.pop() {
            Some(Declaration::Def(opdef)) => opdef,
            Some(other) => {
                tracing::debug!(found = other.kind_str(), "let without operator definition");
                self.note(
                    site,
                    StackCategory::Declaration,
                    RecoveryReason::NotAnOperatorDefinition,
                );
                self.placeholder_opdef(site)
            }
            None => {
                self.note(
                    site,
                    StackCategory::Declaration,
                    RecoveryReason::Underflow { missing: 1 },
                );
                self.placeholder_opdef(site)
            }
        }
    }

    /// Pop `n` record entries. Missing entries are dropped rather than
    /// synthesized: an absent field contributes nothing to the record.
    pub(crate) fn pop_record_entries(&mut self, site: &Site<'_>, n: usize) -> Vec<RecordEntry> {
        let (taken, missing) = take_last(&mut self.stacks.record_entries, n);
        if missing > 0 {
            self.note(site, StackCategory::RecordEntry, RecoveryReason::Underflow { missing });
        }
        taken
    }

    /// Pop `n` match arms; missing arms are dropped.
    pub(crate) fn pop_match_arms(&mut self, site: &Site<'_>, n: usize) -> Vec<MatchArm> {
        let (taken, missing) = take_last(&mut self.stacks.match_arms, n);
        if missing > 0 {
            self.note(site, StackCategory::MatchArm, RecoveryReason::Underflow { missing });
        }
        taken
    }

    /// An expression to stand in for one that could not be built.
    pub(crate) fn recover_expr(&mut self, site: &Site<'_>, reason: RecoveryReason) -> Expr {
        self.note(site, StackCategory::Expression, reason);
        self.placeholder_expr(site)
    }
}
