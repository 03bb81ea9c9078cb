//! Types and rows.

use rustc_hash::FxHashSet;

use quint_ir::{Row, RowField, RowTail, Type, TypeKind};

use super::{LoweringState, Site};
use crate::recovery::RecoveryReason;
use crate::stacks::StackCategory;

impl LoweringState {
    pub(super) fn primitive_type(&mut self, site: &Site<'_>, kind: TypeKind) -> Type {
        Type::new(self.fresh_id(site), kind)
    }

    /// `Set[T]`
    pub(super) fn lower_set_type(&mut self, site: &Site<'_>) -> Type {
        let elem = self.pop_type(site);
        Type::new(self.fresh_id(site), TypeKind::Set(Box::new(elem)))
    }

    /// `List[T]`
    pub(super) fn lower_list_type(&mut self, site: &Site<'_>) -> Type {
        let elem = self.pop_type(site);
        Type::new(self.fresh_id(site), TypeKind::List(Box::new(elem)))
    }

    /// `T1 -> T2`
    pub(super) fn lower_fun_type(&mut self, site: &Site<'_>) -> Type {
        let res = self.pop_type(site);
        let arg = self.pop_type(site);
        Type::new(
            self.fresh_id(site),
            TypeKind::Fun {
                arg: Box::new(arg),
                res: Box::new(res),
            },
        )
    }

    /// Operator type over `count` types: the last is the result, the ones
    /// before it the arguments, in declaration order.
    pub(super) fn lower_oper_type(&mut self, site: &Site<'_>, count: usize) -> Type {
        let mut types = self.pop_types(site, count.max(1));
        let res = match types.pop() {
            Some(res) => res,
            None => self.pop_type(site),
        };
        Type::new(
            self.fresh_id(site),
            TypeKind::Oper {
                args: types,
                res: Box::new(res),
            },
        )
    }

    /// Type annotation of an operator definition with `count` declared
    /// types. A single type is used as is; several form an operator type.
    pub(super) fn lower_signature(&mut self, site: &Site<'_>, count: usize) -> Option<Type> {
        match count {
            0 => None,
            1 => Some(self.pop_type(site)),
            _ => Some(self.lower_oper_type(site, count)),
        }
    }

    /// `(T1, ..., Tn)`; fields are named by position from `"0"`.
    pub(super) fn lower_tuple_type(&mut self, site: &Site<'_>, elements: usize) -> Type {
        let fields = self
            .pop_types(site, elements)
            .into_iter()
            .enumerate()
            .map(|(i, ty)| RowField::new(i.to_string(), ty))
            .collect();
        Type::new(self.fresh_id(site), TypeKind::Tuple(Row::closed(fields)))
    }

    /// `{ f1: T1, ..., fn: Tn | tail }`
    ///
    /// Names and types come from parallel stacks. A repeated name keeps its
    /// first occurrence. A row variable named like a field closes the row.
    pub(super) fn lower_row(
        &mut self,
        site: &Site<'_>,
        count: usize,
        row_var: Option<&str>,
    ) -> Row {
        let names = self.pop_identifiers(site, count);
        let types = self.pop_types(site, count);

        let mut seen = FxHashSet::default();
        let mut fields = Vec::with_capacity(count);
        for (name, ty) in names.into_iter().zip(types) {
            if seen.contains(&name) {
                self.note(site, StackCategory::Row, RecoveryReason::DuplicateRowField(name));
                continue;
            }
            seen.insert(name.clone());
            fields.push(RowField::new(name, ty));
        }

        match row_var {
            Some(var) if seen.contains(var) => {
                self.note(site, StackCategory::Row, RecoveryReason::TailNamesField(var.into()));
                Row::closed(fields)
            }
            Some(var) if fields.is_empty() => Row::var(var),
            Some(var) => Row {
                fields,
                tail: RowTail::Var(var.to_string()),
            },
            None => Row::closed(fields),
        }
    }

    pub(super) fn lower_record_type(&mut self, site: &Site<'_>) -> Type {
        let row = self.pop_row(site);
        Type::new(self.fresh_id(site), TypeKind::Record(row))
    }
}
