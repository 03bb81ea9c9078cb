//! Operator token resolution.
//!
//! Fixed tables from surface operators to builtin opcodes. Tokens outside
//! the tables are recovered from, not rejected.

use quint_ir::builtin_opcodes::{arith, collections, logic, relational};
use quint_ir::Expr;

use super::{LoweringState, Site};
use crate::recovery::RecoveryReason;

/// Opcode of an infix operator.
fn binary_opcode(op: &str) -> Option<&'static str> {
    let opcode = match op {
        "+" => arith::ADD,
        "-" => arith::SUB,
        "*" => arith::MUL,
        "/" => arith::DIV,
        "%" => arith::MOD,
        "^" => arith::POW,
        ">" => relational::GT,
        ">=" => relational::GTE,
        "<" => relational::LT,
        "<=" => relational::LTE,
        "==" => relational::EQ,
        "!=" => relational::NEQ,
        "and" => logic::AND,
        "or" => logic::OR,
        "implies" => logic::IMPLIES,
        "iff" => logic::IFF,
        ":=" => logic::ASSIGN,
        "->" => collections::TUPLE,
        _ => return None,
    };
    Some(opcode)
}

/// Opcode of a prefix or postfix operator.
fn unary_opcode(op: &str) -> Option<&'static str> {
    match op {
        "-" => Some(arith::UMINUS),
        "'" => Some(logic::NEXT),
        _ => None,
    }
}

/// Opcode of a braced block: `and { }`, `or { }`, `all { }`, `any { }`.
fn block_opcode(keyword: &str) -> Option<&'static str> {
    match keyword {
        "and" | "&" => Some(logic::AND),
        "or" | "|" => Some(logic::OR),
        "all" => Some(logic::ACTION_ALL),
        "any" => Some(logic::ACTION_ANY),
        _ => None,
    }
}

impl LoweringState {
    pub(super) fn lower_unary(&mut self, site: &Site<'_>, op: &str) -> Expr {
        self.lower_resolved(site, op, unary_opcode(op), 1)
    }

    pub(super) fn lower_binary(&mut self, site: &Site<'_>, op: &str) -> Expr {
        self.lower_resolved(site, op, binary_opcode(op), 2)
    }

    pub(super) fn lower_block(&mut self, site: &Site<'_>, keyword: &str, args: usize) -> Expr {
        self.lower_resolved(site, keyword, block_opcode(keyword), args)
    }

    /// Apply a resolved opcode to `arity` operands. An unresolved token
    /// still consumes its operands so the stacks stay aligned.
    fn lower_resolved(
        &mut self,
        site: &Site<'_>,
        token: &str,
        opcode: Option<&'static str>,
        arity: usize,
    ) -> Expr {
        match opcode {
            Some(opcode) => self.lower_application(site, opcode, arity),
            None => {
                let operands = self.pop_exprs(site, arity);
                tracing::debug!(
                    token,
                    operands = operands.len(),
                    "dropping operands of unknown operator"
                );
                self.recover_expr(site, RecoveryReason::UnknownOperator(token.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_and_relational_tables() {
        let expected = [
            ("+", "iadd"),
            ("-", "isub"),
            ("*", "imul"),
            ("/", "idiv"),
            ("%", "imod"),
            ("^", "ipow"),
            (">", "igt"),
            (">=", "igte"),
            ("<", "ilt"),
            ("<=", "ilte"),
            ("==", "eq"),
            ("!=", "neq"),
        ];
        for (op, opcode) in expected {
            assert_eq!(binary_opcode(op), Some(opcode), "operator {op}");
        }
    }

    #[test]
    fn logical_operators() {
        assert_eq!(binary_opcode("and"), Some("and"));
        assert_eq!(binary_opcode("or"), Some("or"));
        assert_eq!(binary_opcode("implies"), Some("implies"));
        assert_eq!(binary_opcode("iff"), Some("iff"));
        assert_eq!(binary_opcode(":="), Some("assign"));
        assert_eq!(binary_opcode("->"), Some("Tup"));
    }

    #[test]
    fn unary_minus_differs_from_binary() {
        assert_eq!(unary_opcode("-"), Some("iuminus"));
        assert_eq!(binary_opcode("-"), Some("isub"));
        assert_eq!(unary_opcode("'"), Some("next"));
    }

    #[test]
    fn block_keywords() {
        assert_eq!(block_opcode("and"), Some("and"));
        assert_eq!(block_opcode("&"), Some("and"));
        assert_eq!(block_opcode("or"), Some("or"));
        assert_eq!(block_opcode("|"), Some("or"));
        assert_eq!(block_opcode("all"), Some("actionAll"));
        assert_eq!(block_opcode("any"), Some("actionAny"));
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        assert_eq!(binary_opcode("<=>"), None);
        assert_eq!(unary_opcode("!"), None);
        assert_eq!(block_opcode("each"), None);
    }
}
