//! Quint IR - Intermediate Representation Types
//!
//! This crate contains the data the front end hands to later phases:
//! - `QuintId` node identifiers
//! - `Loc`/`Position` source locations
//! - `Registry` and `SourceMap`: identifier issuing with location recording
//! - The IR itself (`Module`, `Declaration`, `Expr`, `Type`, `Row`, ...)
//! - Builtin opcode names
//! - A read-only `Visitor`
//!
//! # Invariants
//!
//! - Every identifier issued by a `Registry` has exactly one `SourceMap` entry,
//!   inserted when the identifier is issued.
//! - Row field names are unique within a row.
//!
//! With the `serde` feature every IR type is serializable.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod builtin_opcodes;
mod id;
pub mod ir;
mod loc;
mod registry;
pub mod visitor;

pub use id::QuintId;
pub use ir::{
    starts_lowercase, AssumeDecl, ConstDecl, Declaration, Expr, ExprKind, ImportDecl,
    InstanceDecl, InstanceOverride, LambdaParameter, Module, OpDef, Qualifier, Row, RowField,
    RowTail, Type, TypeDef, TypeKind, VarDecl, HOLE,
};
pub use loc::{Loc, Position};
pub use registry::{Registry, SourceMap};
