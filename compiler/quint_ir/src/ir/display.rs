//! Compact textual rendering of IR, close to surface syntax.
//!
//! Used for diagnostics and test expectations. Applications print as
//! `opcode(args)`, so desugared forms stay visible: `{ ...r, x: 1 }` prints
//! as `with(r, "x", 1)`.

use std::fmt;

use super::{Expr, ExprKind, OpDef, Row, RowTail, Type, TypeKind};

fn comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Name(name) => f.write_str(name),
            ExprKind::Int(value) => write!(f, "{value}"),
            ExprKind::Bool(value) => write!(f, "{value}"),
            ExprKind::Str(value) => write!(f, "\"{value}\""),
            ExprKind::App { opcode, args } => {
                write!(f, "{opcode}(")?;
                comma_separated(f, args)?;
                f.write_str(")")
            }
            ExprKind::Lambda { params, body, .. } => {
                f.write_str("(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&param.name)?;
                }
                write!(f, ") => {body}")
            }
            ExprKind::Let { opdef, body } => write!(f, "{{ {opdef}; {body} }}"),
        }
    }
}

impl fmt::Display for OpDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.qualifier, self.name)?;
        if let Some(ty) = &self.type_annotation {
            write!(f, ": {ty}")?;
        }
        write!(f, " = {}", self.expr)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Int => f.write_str("int"),
            TypeKind::Bool => f.write_str("bool"),
            TypeKind::Str => f.write_str("str"),
            TypeKind::Var(name) | TypeKind::Const(name) => f.write_str(name),
            TypeKind::Set(elem) => write!(f, "Set[{elem}]"),
            TypeKind::List(elem) => write!(f, "List[{elem}]"),
            TypeKind::Fun { arg, res } => write!(f, "({arg} -> {res})"),
            TypeKind::Oper { args, res } => {
                f.write_str("(")?;
                comma_separated(f, args)?;
                write!(f, ") => {res}")
            }
            TypeKind::Tuple(row) => {
                f.write_str("(")?;
                for (i, field) in row.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", field.ty)?;
                }
                f.write_str(")")
            }
            TypeKind::Record(row) => write!(f, "{row}"),
            TypeKind::Sum(row) => {
                for (i, field) in row.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}({})", field.name, field.ty)?;
                }
                Ok(())
            }
        }
    }
}

/// `{ a: int, b: str | r }`; the empty closed row is `{}`.
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return match &self.tail {
                RowTail::Empty => f.write_str("{}"),
                RowTail::Var(var) => write!(f, "{{ | {var} }}"),
            };
        }
        f.write_str("{ ")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.name, field.ty)?;
        }
        match &self.tail {
            RowTail::Empty => f.write_str(" }"),
            RowTail::Var(var) => write!(f, " | {var} }}"),
        }
    }
}
