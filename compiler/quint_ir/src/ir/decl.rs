//! Declarations.

use crate::QuintId;

use super::{Expr, ExprKind, LambdaParameter, Qualifier, Type};

/// Operator definition: `qualifier name(params): type = body`.
///
/// A definition with parameters stores them on a lambda in `expr`, whose
/// qualifier matches the definition's.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpDef {
    pub id: QuintId,
    pub name: String,
    pub qualifier: Qualifier,
    pub type_annotation: Option<Type>,
    pub expr: Expr,
    pub doc: Option<String>,
}

impl OpDef {
    /// Parameters of the definition (empty for a value definition).
    pub fn params(&self) -> &[LambdaParameter] {
        match &self.expr.kind {
            ExprKind::Lambda { params, .. } => params,
            _ => &[],
        }
    }

    /// Body with the parameter lambda peeled off.
    pub fn body(&self) -> &Expr {
        match &self.expr.kind {
            ExprKind::Lambda { body, .. } => body,
            _ => &self.expr,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstDecl {
    pub id: QuintId,
    pub name: String,
    pub ty: Type,
    pub doc: Option<String>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarDecl {
    pub id: QuintId,
    pub name: String,
    pub ty: Type,
    pub doc: Option<String>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssumeDecl {
    pub id: QuintId,
    /// Name of the assumption, `_` when anonymous.
    pub name: String,
    pub assumption: Expr,
    pub doc: Option<String>,
}

/// Type definition. `ty` is `None` for an abstract (uninterpreted) type,
/// the aliased type otherwise, and a `sum` type for variant declarations.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDef {
    pub id: QuintId,
    pub name: String,
    pub ty: Option<Type>,
    pub doc: Option<String>,
}

/// `import`/`export` of another module or of some of its definitions.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportDecl {
    pub id: QuintId,
    /// Module being imported.
    pub proto_name: String,
    /// Imported definition: `None` for the module itself, `*` for all.
    pub def_name: Option<String>,
    /// `as` name.
    pub qualified_name: Option<String>,
    /// `from "path"`.
    pub from_source: Option<String>,
}

/// One `name = expr` override of a module instance.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceOverride {
    pub param: LambdaParameter,
    pub value: Expr,
}

/// Module instantiation: `import P(N = e, ...).*` or `... as I`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceDecl {
    pub id: QuintId,
    pub proto_name: String,
    pub overrides: Vec<InstanceOverride>,
    /// `as` name; `None` for an unqualified (`.*`) instance.
    pub qualified_name: Option<String>,
    pub from_source: Option<String>,
}

/// A module-level declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Declaration {
    Def(OpDef),
    Const(ConstDecl),
    Var(VarDecl),
    Assume(AssumeDecl),
    TypeDef(TypeDef),
    Import(ImportDecl),
    Export(ImportDecl),
    Instance(InstanceDecl),
}

impl Declaration {
    pub fn id(&self) -> QuintId {
        match self {
            Declaration::Def(d) => d.id,
            Declaration::Const(d) => d.id,
            Declaration::Var(d) => d.id,
            Declaration::Assume(d) => d.id,
            Declaration::TypeDef(d) => d.id,
            Declaration::Import(d) | Declaration::Export(d) => d.id,
            Declaration::Instance(d) => d.id,
        }
    }

    /// Declared name, for the declarations that introduce one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Def(d) => Some(&d.name),
            Declaration::Const(d) => Some(&d.name),
            Declaration::Var(d) => Some(&d.name),
            Declaration::Assume(d) => Some(&d.name),
            Declaration::TypeDef(d) => Some(&d.name),
            Declaration::Import(_) | Declaration::Export(_) | Declaration::Instance(_) => None,
        }
    }

    pub fn doc(&self) -> Option<&str> {
        match self {
            Declaration::Def(d) => d.doc.as_deref(),
            Declaration::Const(d) => d.doc.as_deref(),
            Declaration::Var(d) => d.doc.as_deref(),
            Declaration::Assume(d) => d.doc.as_deref(),
            Declaration::TypeDef(d) => d.doc.as_deref(),
            Declaration::Import(_) | Declaration::Export(_) | Declaration::Instance(_) => None,
        }
    }

    /// Rebuild the declaration with documentation attached.
    ///
    /// Imports, exports and instances carry no documentation and are
    /// returned unchanged.
    #[must_use]
    pub fn with_doc(self, doc: Option<String>) -> Self {
        match self {
            Declaration::Def(d) => Declaration::Def(OpDef { doc, ..d }),
            Declaration::Const(d) => Declaration::Const(ConstDecl { doc, ..d }),
            Declaration::Var(d) => Declaration::Var(VarDecl { doc, ..d }),
            Declaration::Assume(d) => Declaration::Assume(AssumeDecl { doc, ..d }),
            Declaration::TypeDef(d) => Declaration::TypeDef(TypeDef { doc, ..d }),
            other @ (Declaration::Import(_)
            | Declaration::Export(_)
            | Declaration::Instance(_)) => other,
        }
    }

    /// Keyword naming the declaration kind.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Declaration::Def(_) => "def",
            Declaration::Const(_) => "const",
            Declaration::Var(_) => "var",
            Declaration::Assume(_) => "assume",
            Declaration::TypeDef(_) => "typedef",
            Declaration::Import(_) => "import",
            Declaration::Export(_) => "export",
            Declaration::Instance(_) => "instance",
        }
    }
}
