//! Record literals.

use quint_diagnostic::multiple_record_spreads;
use quint_ir::builtin_opcodes::collections;
use quint_ir::Expr;

use crate::lower::{LoweringState, Site};
use crate::stacks::RecordEntry;

impl LoweringState {
    /// `{ f1: e1, ..., fn: en }` is `Rec("f1", e1, ..., "fn", en)`.
    /// `{ ...r, f1: e1, ... }` is `with(with(r, "f1", e1), ...)`.
    ///
    /// Only the first spread is used as the base; more than one is reported.
    pub(crate) fn lower_record(&mut self, site: &Site<'_>, entries: usize) -> Expr {
        let entries = self.pop_record_entries(site, entries);

        let mut spreads = Vec::new();
        let mut fields = Vec::new();
        for entry in entries {
            match entry {
                RecordEntry::Spread(base) => spreads.push(base),
                RecordEntry::Field { name, value } => fields.push((name, value)),
            }
        }
        let spread_count = spreads.len();

        let record = match spreads.into_iter().next() {
            None => {
                let mut args = Vec::with_capacity(fields.len() * 2);
                for (name, value) in fields {
                    args.push(Expr::str(self.fresh_id(site), name));
                    args.push(value);
                }
                Expr::app(self.fresh_id(site), collections::RECORD, args)
            }
            Some(base) => fields.into_iter().fold(base, |record, (name, value)| {
                let name = Expr::str(self.fresh_id(site), name);
                Expr::app(self.fresh_id(site), collections::WITH, vec![record, name, value])
            }),
        };

        if spread_count > 1 {
            tracing::debug!(spreads = spread_count, "record literal with several spreads");
            self.diagnostics.push(multiple_record_spreads(record.id, spread_count));
        }
        record
    }
}
