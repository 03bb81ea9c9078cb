//! Literals, applications, projections and local definitions.

use quint_ir::builtin_opcodes::access;
use quint_ir::{Expr, Qualifier};

use super::{LoweringState, Site};
use crate::recovery::RecoveryReason;

impl LoweringState {
    /// Integer literal: decimal with optional `_` separators, or `0x` hex.
    pub(super) fn lower_int(&mut self, site: &Site<'_>, text: &str) -> Expr {
        match parse_int(text) {
            Some(value) => Expr::int(self.fresh_id(site), value),
            None => self.recover_expr(site, RecoveryReason::InvalidInteger(text.to_string())),
        }
    }

    /// String literal; the surrounding quotes are dropped.
    pub(super) fn lower_str(&mut self, site: &Site<'_>, text: &str) -> Expr {
        let value = text
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or(text);
        Expr::str(self.fresh_id(site), value)
    }

    /// `opcode(a1, ..., an)` over the last `arity` expressions.
    pub(super) fn lower_application(
        &mut self,
        site: &Site<'_>,
        opcode: &str,
        arity: usize,
    ) -> Expr {
        let args = self.pop_exprs(site, arity);
        Expr::app(self.fresh_id(site), opcode, args)
    }

    /// `e.f(a1, ..., an)` is `f(e, a1, ..., an)`. Without parentheses,
    /// `e._1` is a tuple item and `e.f` a record field.
    pub(super) fn lower_dot_call(
        &mut self,
        site: &Site<'_>,
        name: &str,
        args: Option<usize>,
    ) -> Expr {
        if let Some(args) = args {
            return self.lower_application(site, name, args.saturating_add(1));
        }

        let callee = self.pop_expr(site);
        let (opcode, selector) = match tuple_index(name) {
            Some(index) => (access::ITEM, Expr::int(self.fresh_id(site), index)),
            None => (access::FIELD, Expr::str(self.fresh_id(site), name)),
        };
        Expr::app(self.fresh_id(site), opcode, vec![callee, selector])
    }

    /// `(p1, ..., pn) => body`
    pub(super) fn lower_lambda(&mut self, site: &Site<'_>, params: usize, tupled: bool) -> Expr {
        let body = self.pop_expr(site);
        let params = self.pop_params(site, params);
        if tupled {
            return self.unpack_tuple_lambda(site, params, body);
        }
        Expr::lambda(self.fresh_id(site), params, Qualifier::Def, body)
    }

    /// A local operator definition scoping over the next expression.
    pub(super) fn lower_let(&mut self, site: &Site<'_>) -> Expr {
        let body = self.pop_expr(site);
        let opdef = self.pop_opdef(site);
        Expr::let_in(self.fresh_id(site), opdef, body)
    }
}

fn parse_int(text: &str) -> Option<i128> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
            i128::from_str_radix(hex, 16).ok()
        }
        Some(_) => None,
        None if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
            digits.parse().ok()
        }
        None => None,
    }
}

/// Position of a `_1`, `_2`, ... accessor.
fn tuple_index(name: &str) -> Option<i128> {
    let digits = name.strip_prefix('_')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|&index| index > 0)
}
