//! The lowered IR.
//!
//! Every node is created once, from already-finished children, and is
//! immutable afterwards. Trees are owned: a [`Module`] owns its declarations,
//! a declaration owns its expressions and types.

mod decl;
mod display;
mod expr;
mod types;

pub use decl::{
    AssumeDecl, ConstDecl, Declaration, ImportDecl, InstanceDecl, InstanceOverride, OpDef,
    TypeDef, VarDecl,
};
pub use expr::{Expr, ExprKind, LambdaParameter, HOLE};
pub use types::{starts_lowercase, Row, RowField, RowTail, Type, TypeKind};

use std::fmt;

use crate::QuintId;

/// A lowered module.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    pub id: QuintId,
    pub name: String,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
    pub doc: Option<String>,
}

/// Evaluation discipline of an operator definition or lambda.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Qualifier {
    Val,
    #[default]
    Def,
    PureVal,
    PureDef,
    Action,
    Run,
    Temporal,
    Nondet,
}

impl Qualifier {
    /// Resolve a qualifier keyword. Unrecognized keywords fall back to `def`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "val" => Qualifier::Val,
            "pure val" | "pureval" => Qualifier::PureVal,
            "pure def" | "puredef" => Qualifier::PureDef,
            "action" => Qualifier::Action,
            "run" => Qualifier::Run,
            "temporal" => Qualifier::Temporal,
            "nondet" => Qualifier::Nondet,
            _ => Qualifier::Def,
        }
    }

    /// Keyword as it appears in the IR.
    pub fn as_str(self) -> &'static str {
        match self {
            Qualifier::Val => "val",
            Qualifier::Def => "def",
            Qualifier::PureVal => "pureval",
            Qualifier::PureDef => "puredef",
            Qualifier::Action => "action",
            Qualifier::Run => "run",
            Qualifier::Temporal => "temporal",
            Qualifier::Nondet => "nondet",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
