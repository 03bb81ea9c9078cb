//! Variant matches.
//!
//! `match e { A(x) => b1 | _ => b2 }` becomes
//! `matchVariant(e, "A", (x) => b1, "_", (_) => b2)`.

use quint_ir::builtin_opcodes::{access, WILDCARD_LABEL};
use quint_ir::{Expr, LambdaParameter, Qualifier, HOLE};

use crate::lower::{LoweringState, Site};
use crate::stacks::MatchArm;

impl LoweringState {
    /// One case: its label literal and a handler binding the payload.
    pub(crate) fn lower_match_case(
        &mut self,
        site: &Site<'_>,
        label: Option<&str>,
        binder: Option<&str>,
    ) -> MatchArm {
        let body = self.pop_expr(site);
        let label = Expr::str(self.fresh_id(site), label.unwrap_or(WILDCARD_LABEL));
        let param = LambdaParameter::new(self.fresh_id(site), binder.unwrap_or(HOLE));
        let handler = Expr::lambda(self.fresh_id(site), vec![param], Qualifier::Def, body);
        MatchArm { label, handler }
    }

    /// The scrutinee was reported before the cases, so it sits below their
    /// bodies on the expression stack and is popped after the arms.
    pub(crate) fn lower_match(&mut self, site: &Site<'_>, cases: usize) -> Expr {
        let arms = self.pop_match_arms(site, cases);
        let scrutinee = self.pop_expr(site);

        let mut args = Vec::with_capacity(1 + arms.len() * 2);
        args.push(scrutinee);
        for arm in arms {
            args.push(arm.label);
            args.push(arm.handler);
        }
        Expr::app(self.fresh_id(site), access::MATCH_VARIANT, args)
    }
}
