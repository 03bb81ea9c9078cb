//! Builtin opcode names.
//!
//! The lowering engine is the only producer of these strings; downstream
//! phases match on them. Grouped by the operator family that yields them.

/// Integer arithmetic.
pub mod arith {
    pub const ADD: &str = "iadd";
    pub const SUB: &str = "isub";
    pub const UMINUS: &str = "iuminus";
    pub const MUL: &str = "imul";
    pub const DIV: &str = "idiv";
    pub const MOD: &str = "imod";
    pub const POW: &str = "ipow";
}

/// Comparisons.
pub mod relational {
    pub const GT: &str = "igt";
    pub const GTE: &str = "igte";
    pub const LT: &str = "ilt";
    pub const LTE: &str = "ilte";
    pub const EQ: &str = "eq";
    pub const NEQ: &str = "neq";
}

/// Boolean connectives and action combinators.
pub mod logic {
    pub const AND: &str = "and";
    pub const OR: &str = "or";
    pub const IMPLIES: &str = "implies";
    pub const IFF: &str = "iff";
    pub const ACTION_ALL: &str = "actionAll";
    pub const ACTION_ANY: &str = "actionAny";
    pub const ITE: &str = "ite";
    pub const NEXT: &str = "next";
    pub const ASSIGN: &str = "assign";
}

/// Collection constructors.
pub mod collections {
    pub const TUPLE: &str = "Tup";
    pub const LIST: &str = "List";
    pub const RECORD: &str = "Rec";
    pub const WITH: &str = "with";
}

/// Projections out of tuples, records, lists and variants.
pub mod access {
    pub const NTH: &str = "nth";
    pub const ITEM: &str = "item";
    pub const FIELD: &str = "field";
    pub const VARIANT: &str = "variant";
    pub const MATCH_VARIANT: &str = "matchVariant";
}

/// Label of the catch-all case of a variant match.
pub const WILDCARD_LABEL: &str = "_";
