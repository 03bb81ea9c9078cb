//! IR visitor.
//!
//! Override `visit_*` methods to observe specific nodes; call the matching
//! `walk_*` function from an override to keep descending. The IR is never
//! mutated, only the visitor's own state.
//!
//! ```text
//! struct CountApps(usize);
//!
//! impl Visitor for CountApps {
//!     fn visit_expr(&mut self, expr: &Expr) {
//!         if expr.as_app().is_some() {
//!             self.0 += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use crate::ir::{
    Declaration, Expr, ExprKind, InstanceOverride, LambdaParameter, Module, OpDef, Row, Type,
    TypeKind,
};

pub trait Visitor {
    fn visit_module(&mut self, module: &Module) {
        walk_module(self, module);
    }

    fn visit_declaration(&mut self, decl: &Declaration) {
        walk_declaration(self, decl);
    }

    fn visit_opdef(&mut self, opdef: &OpDef) {
        walk_opdef(self, opdef);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_param(&mut self, param: &LambdaParameter) {
        let _ = param;
    }

    fn visit_type(&mut self, ty: &Type) {
        walk_type(self, ty);
    }

    fn visit_row(&mut self, row: &Row) {
        walk_row(self, row);
    }
}

pub fn walk_module<V: Visitor + ?Sized>(visitor: &mut V, module: &Module) {
    for decl in &module.declarations {
        visitor.visit_declaration(decl);
    }
}

pub fn walk_declaration<V: Visitor + ?Sized>(visitor: &mut V, decl: &Declaration) {
    match decl {
        Declaration::Def(opdef) => visitor.visit_opdef(opdef),
        Declaration::Const(c) => visitor.visit_type(&c.ty),
        Declaration::Var(v) => visitor.visit_type(&v.ty),
        Declaration::Assume(a) => visitor.visit_expr(&a.assumption),
        Declaration::TypeDef(t) => {
            if let Some(ty) = &t.ty {
                visitor.visit_type(ty);
            }
        }
        Declaration::Import(_) | Declaration::Export(_) => {}
        Declaration::Instance(instance) => {
            for InstanceOverride { param, value } in &instance.overrides {
                visitor.visit_param(param);
                visitor.visit_expr(value);
            }
        }
    }
}

pub fn walk_opdef<V: Visitor + ?Sized>(visitor: &mut V, opdef: &OpDef) {
    if let Some(ty) = &opdef.type_annotation {
        visitor.visit_type(ty);
    }
    visitor.visit_expr(&opdef.expr);
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match &expr.kind {
        ExprKind::Name(_) | ExprKind::Int(_) | ExprKind::Bool(_) | ExprKind::Str(_) => {}
        ExprKind::App { args, .. } => {
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        ExprKind::Lambda { params, body, .. } => {
            for param in params {
                visitor.visit_param(param);
            }
            visitor.visit_expr(body);
        }
        ExprKind::Let { opdef, body } => {
            visitor.visit_opdef(opdef);
            visitor.visit_expr(body);
        }
    }
}

pub fn walk_type<V: Visitor + ?Sized>(visitor: &mut V, ty: &Type) {
    match &ty.kind {
        TypeKind::Int | TypeKind::Bool | TypeKind::Str | TypeKind::Var(_) | TypeKind::Const(_) => {}
        TypeKind::Set(elem) | TypeKind::List(elem) => visitor.visit_type(elem),
        TypeKind::Fun { arg, res } => {
            visitor.visit_type(arg);
            visitor.visit_type(res);
        }
        TypeKind::Oper { args, res } => {
            for arg in args {
                visitor.visit_type(arg);
            }
            visitor.visit_type(res);
        }
        TypeKind::Tuple(row) | TypeKind::Record(row) | TypeKind::Sum(row) => {
            visitor.visit_row(row);
        }
    }
}

pub fn walk_row<V: Visitor + ?Sized>(visitor: &mut V, row: &Row) {
    for field in &row.fields {
        visitor.visit_type(&field.ty);
    }
}
