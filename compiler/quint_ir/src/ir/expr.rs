//! Expressions and lambda parameters.

use crate::QuintId;

use super::{OpDef, Qualifier};

/// Name used for anonymous (`_`) lambda parameters.
pub const HOLE: &str = "_";

/// A lambda parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LambdaParameter {
    pub id: QuintId,
    pub name: String,
}

impl LambdaParameter {
    pub fn new(id: QuintId, name: impl Into<String>) -> Self {
        LambdaParameter {
            id,
            name: name.into(),
        }
    }

    /// Check whether this is the anonymous parameter `_`.
    pub fn is_hole(&self) -> bool {
        self.name == HOLE
    }
}

/// An expression node.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub id: QuintId,
    pub kind: ExprKind,
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    Name(String),
    Int(i128),
    Bool(bool),
    Str(String),
    /// Application of a builtin opcode or a user operator.
    App { opcode: String, args: Vec<Expr> },
    Lambda {
        params: Vec<LambdaParameter>,
        qualifier: Qualifier,
        body: Box<Expr>,
    },
    /// `opdef; body`: a single local definition in scope of `body`.
    Let { opdef: Box<OpDef>, body: Box<Expr> },
}

impl Expr {
    pub fn new(id: QuintId, kind: ExprKind) -> Self {
        Expr { id, kind }
    }

    pub fn name(id: QuintId, name: impl Into<String>) -> Self {
        Self::new(id, ExprKind::Name(name.into()))
    }

    pub fn int(id: QuintId, value: i128) -> Self {
        Self::new(id, ExprKind::Int(value))
    }

    pub fn bool(id: QuintId, value: bool) -> Self {
        Self::new(id, ExprKind::Bool(value))
    }

    pub fn str(id: QuintId, value: impl Into<String>) -> Self {
        Self::new(id, ExprKind::Str(value.into()))
    }

    pub fn app(id: QuintId, opcode: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::new(
            id,
            ExprKind::App {
                opcode: opcode.into(),
                args,
            },
        )
    }

    pub fn lambda(
        id: QuintId,
        params: Vec<LambdaParameter>,
        qualifier: Qualifier,
        body: Expr,
    ) -> Self {
        Self::new(
            id,
            ExprKind::Lambda {
                params,
                qualifier,
                body: Box::new(body),
            },
        )
    }

    pub fn let_in(id: QuintId, opdef: OpDef, body: Expr) -> Self {
        Self::new(
            id,
            ExprKind::Let {
                opdef: Box::new(opdef),
                body: Box::new(body),
            },
        )
    }

    /// Opcode and arguments, if this is an application.
    pub fn as_app(&self) -> Option<(&str, &[Expr])> {
        match &self.kind {
            ExprKind::App { opcode, args } => Some((opcode, args)),
            _ => None,
        }
    }
}
