//! Desugarings applied while reducing.
//!
//! Each rewrite runs inside the reduction of the construct it belongs to
//! and produces only core IR:
//!
//! - sum type definitions gain one constructor definition per variant
//! - lambdas over a tuple pattern bind the elements with nested `let`s
//! - record literals with a spread become a chain of `with`
//! - `match` becomes a `matchVariant` application over handler lambdas

mod matching;
mod record;
mod sum_type;
mod tuple_lambda;

use quint_ir::{Row, RowField, Type, TypeKind};

use crate::lower::{LoweringState, Site};

impl LoweringState {
    /// Deep copy of `ty` with fresh identifiers, for reusing a type in a
    /// second place of the tree.
    pub(crate) fn refresh_type_ids(&mut self, site: &Site<'_>, ty: &Type) -> Type {
        let kind = match &ty.kind {
            TypeKind::Int => TypeKind::Int,
            TypeKind::Bool => TypeKind::Bool,
            TypeKind::Str => TypeKind::Str,
            TypeKind::Var(name) => TypeKind::Var(name.clone()),
            TypeKind::Const(name) => TypeKind::Const(name.clone()),
            TypeKind::Set(elem) => TypeKind::Set(Box::new(self.refresh_type_ids(site, elem))),
            TypeKind::List(elem) => TypeKind::List(Box::new(self.refresh_type_ids(site, elem))),
            TypeKind::Fun { arg, res } => TypeKind::Fun {
                arg: Box::new(self.refresh_type_ids(site, arg)),
                res: Box::new(self.refresh_type_ids(site, res)),
            },
            TypeKind::Oper { args, res } => TypeKind::Oper {
                args: args
                    .iter()
                    .map(|arg| self.refresh_type_ids(site, arg))
                    .collect(),
                res: Box::new(self.refresh_type_ids(site, res)),
            },
            TypeKind::Tuple(row) => TypeKind::Tuple(self.refresh_row_ids(site, row)),
            TypeKind::Record(row) => TypeKind::Record(self.refresh_row_ids(site, row)),
            TypeKind::Sum(row) => TypeKind::Sum(self.refresh_row_ids(site, row)),
        };
        Type::new(self.fresh_id(site), kind)
    }

    fn refresh_row_ids(&mut self, site: &Site<'_>, row: &Row) -> Row {
        Row {
            fields: row
                .fields
                .iter()
                .map(|field| {
                    RowField::new(field.name.clone(), self.refresh_type_ids(site, &field.ty))
                })
                .collect(),
            tail: row.tail.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
