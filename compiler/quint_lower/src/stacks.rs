//! Category stacks.
//!
//! Each stack holds lowered children of one syntactic category until the
//! parent construct claims them. Consumption is strictly LIFO and tied to the
//! order in which the driver reports constructs.

use std::fmt;

use quint_ir::{Declaration, Expr, LambdaParameter, Row, Type};

/// Syntactic categories with a stack of their own.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StackCategory {
    Expression,
    Declaration,
    Parameter,
    Type,
    Row,
    VariantField,
    Identifier,
    RecordEntry,
    MatchArm,
}

impl StackCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            StackCategory::Expression => "expressions",
            StackCategory::Declaration => "declarations",
            StackCategory::Parameter => "parameters",
            StackCategory::Type => "types",
            StackCategory::Row => "rows",
            StackCategory::VariantField => "variant fields",
            StackCategory::Identifier => "identifiers",
            StackCategory::RecordEntry => "record entries",
            StackCategory::MatchArm => "match arms",
        }
    }
}

impl fmt::Display for StackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared alternative of a sum type, waiting for its `type` construct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct VariantField {
    pub(crate) label: String,
    pub(crate) payload: Option<Type>,
}

// Transient carriers. They never leave the engine and carry no identifier.

/// One entry of a record literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RecordEntry {
    Field { name: String, value: Expr },
    Spread(Expr),
}

/// A lowered match case: its label literal and its handler lambda.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MatchArm {
    pub(crate) label: Expr,
    pub(crate) handler: Expr,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct CategoryStacks {
    pub(crate) exprs: Vec<Expr>,
    pub(crate) decls: Vec<Declaration>,
    pub(crate) params: Vec<LambdaParameter>,
    pub(crate) types: Vec<Type>,
    pub(crate) rows: Vec<Row>,
    pub(crate) variants: Vec<VariantField>,
    pub(crate) identifiers: Vec<String>,
    pub(crate) record_entries: Vec<RecordEntry>,
    pub(crate) match_arms: Vec<MatchArm>,
}

impl CategoryStacks {
    /// Non-empty stacks and their sizes, declarations excluded (they belong
    /// to the module being completed).
    pub(crate) fn leftovers(&self) -> Vec<(StackCategory, usize)> {
        [
            (StackCategory::Expression, self.exprs.len()),
            (StackCategory::Parameter, self.params.len()),
            (StackCategory::Type, self.types.len()),
            (StackCategory::Row, self.rows.len()),
            (StackCategory::VariantField, self.variants.len()),
            (StackCategory::Identifier, self.identifiers.len()),
            (StackCategory::RecordEntry, self.record_entries.len()),
            (StackCategory::MatchArm, self.match_arms.len()),
        ]
        .into_iter()
        .filter(|(_, len)| *len > 0)
        .collect()
    }

    /// Empty every stack except declarations.
    pub(crate) fn clear_components(&mut self) {
        self.exprs.clear();
        self.params.clear();
        self.types.clear();
        self.rows.clear();
        self.variants.clear();
        self.identifiers.clear();
        self.record_entries.clear();
        self.match_arms.clear();
    }
}

/// Pop the last `n` elements, returned in push order, plus how many were
/// missing.
pub(crate) fn take_last<T>(stack: &mut Vec<T>, n: usize) -> (Vec<T>, usize) {
    let available = n.min(stack.len());
    let taken = stack.split_off(stack.len() - available);
    (taken, n - available)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_last_keeps_push_order() {
        let mut stack = vec![1, 2, 3, 4];
        let (taken, missing) = take_last(&mut stack, 2);
        assert_eq!(taken, vec![3, 4]);
        assert_eq!(missing, 0);
        assert_eq!(stack, vec![1, 2]);
    }

    #[test]
    fn take_last_reports_underflow() {
        let mut stack = vec![1];
        let (taken, missing) = take_last(&mut stack, 3);
        assert_eq!(taken, vec![1]);
        assert_eq!(missing, 2);
        assert!(stack.is_empty());
    }

    #[test]
    fn leftovers_skip_empty_stacks() {
        let mut stacks = CategoryStacks::default();
        assert!(stacks.leftovers().is_empty());
        stacks.identifiers.push("a".into());
        stacks.identifiers.push("b".into());
        assert_eq!(stacks.leftovers(), vec![(StackCategory::Identifier, 2)]);
        stacks.clear_components();
        assert!(stacks.leftovers().is_empty());
    }
}
