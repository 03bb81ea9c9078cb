//! Module-level declarations.

use quint_diagnostic::lowercase_type_name;
use quint_ir::{
    starts_lowercase, AssumeDecl, ConstDecl, Declaration, Expr, ImportDecl, InstanceDecl,
    InstanceOverride, LambdaParameter, OpDef, Qualifier, QuintId, Type, TypeDef, VarDecl,
};

use super::{LoweringState, Site};
use crate::docs::join_doc_lines;
use crate::recovery::RecoveryReason;
use crate::stacks::StackCategory;

/// Scanned parts of an operator definition construct.
pub(super) struct OperatorDefParts<'a> {
    pub(super) qualifier: &'a str,
    pub(super) name: &'a str,
    pub(super) params: usize,
    pub(super) type_annotations: usize,
    pub(super) has_body: bool,
    pub(super) docs: &'a [String],
}

/// Attach the doc comment lines, if any, to a finished declaration.
fn documented(decl: Declaration, docs: &[String]) -> Declaration {
    match join_doc_lines(docs) {
        Some(doc) => decl.with_doc(Some(doc)),
        None => decl,
    }
}

impl LoweringState {
    pub(super) fn lower_const(
        &mut self,
        site: &Site<'_>,
        name: &str,
        docs: &[String],
    ) -> Declaration {
        let ty = self.pop_type(site);
        let decl = Declaration::Const(ConstDecl {
            id: self.fresh_id(site),
            name: name.to_string(),
            ty,
            doc: None,
        });
        documented(decl, docs)
    }

    pub(super) fn lower_var(
        &mut self,
        site: &Site<'_>,
        name: &str,
        docs: &[String],
    ) -> Declaration {
        let ty = self.pop_type(site);
        let decl = Declaration::Var(VarDecl {
            id: self.fresh_id(site),
            name: name.to_string(),
            ty,
            doc: None,
        });
        documented(decl, docs)
    }

    pub(super) fn lower_assume(
        &mut self,
        site: &Site<'_>,
        name: &str,
        docs: &[String],
    ) -> Declaration {
        let assumption = self.pop_expr(site);
        let decl = Declaration::Assume(AssumeDecl {
            id: self.fresh_id(site),
            name: name.to_string(),
            assumption,
            doc: None,
        });
        documented(decl, docs)
    }

    /// `type Name` (`ty` is `None`) or `type Name = ty`.
    pub(crate) fn lower_typedef(
        &mut self,
        site: &Site<'_>,
        name: &str,
        ty: Option<Type>,
        docs: &[String],
    ) -> Declaration {
        let id = self.fresh_id(site);
        self.check_type_name(id, name);
        let decl = Declaration::TypeDef(TypeDef {
            id,
            name: name.to_string(),
            ty,
            doc: None,
        });
        documented(decl, docs)
    }

    /// Report a type definition named like a type variable. The definition
    /// is still emitted.
    fn check_type_name(&mut self, typedef_id: QuintId, name: &str) {
        if starts_lowercase(name) {
            tracing::debug!(name, "lowercase type name");
            self.diagnostics.push(lowercase_type_name(typedef_id, name));
        }
    }

    /// `qualifier name(p1, ..., pn): T1 => ... => R = body`
    ///
    /// Parameters become a lambda around the body carrying the definition's
    /// qualifier. Without a body the definition gets the literal `true`.
    pub(super) fn lower_operator_def(
        &mut self,
        site: &Site<'_>,
        def: &OperatorDefParts<'_>,
    ) -> Declaration {
        let qualifier = Qualifier::from_keyword(def.qualifier);

        let body = if def.has_body {
            self.pop_expr(site)
        } else {
            self.note(site, StackCategory::Expression, RecoveryReason::MissingBody);
            Expr::bool(self.fresh_id(site), true)
        };
        let type_annotation = self.lower_signature(site, def.type_annotations);
        let params = self.pop_params(site, def.params);

        let expr = if params.is_empty() {
            body
        } else {
            Expr::lambda(self.fresh_id(site), params, qualifier, body)
        };

        let decl = Declaration::Def(OpDef {
            id: self.fresh_id(site),
            name: def.name.to_string(),
            qualifier,
            type_annotation,
            expr,
            doc: None,
        });
        documented(decl, def.docs)
    }

    pub(super) fn lower_import(
        &mut self,
        site: &Site<'_>,
        proto: &str,
        def_name: Option<&str>,
        alias: Option<&str>,
        from: Option<&str>,
    ) -> Declaration {
        Declaration::Import(ImportDecl {
            id: self.fresh_id(site),
            proto_name: proto.to_string(),
            def_name: def_name.map(str::to_string),
            qualified_name: alias.map(str::to_string),
            from_source: from.map(unquote),
        })
    }

    pub(super) fn lower_export(
        &mut self,
        site: &Site<'_>,
        proto: &str,
        def_name: Option<&str>,
        alias: Option<&str>,
    ) -> Declaration {
        Declaration::Export(ImportDecl {
            id: self.fresh_id(site),
            proto_name: proto.to_string(),
            def_name: def_name.map(str::to_string),
            qualified_name: alias.map(str::to_string),
            from_source: None,
        })
    }

    /// `import P(N1 = e1, ..., Nk = ek).*` and `... as I`.
    ///
    /// One expression per override name is popped; each override name gets
    /// a parameter with its own identifier.
    pub(super) fn lower_instance(
        &mut self,
        site: &Site<'_>,
        proto: &str,
        overrides: &[String],
        alias: Option<&str>,
        from: Option<&str>,
    ) -> Declaration {
        let values = self.pop_exprs(site, overrides.len());
        let overrides = overrides
            .iter()
            .zip(values)
            .map(|(name, value)| InstanceOverride {
                param: LambdaParameter::new(self.fresh_id(site), name.as_str()),
                value,
            })
            .collect();
        Declaration::Instance(InstanceDecl {
            id: self.fresh_id(site),
            proto_name: proto.to_string(),
            overrides,
            qualified_name: alias.map(str::to_string),
            from_source: from.map(unquote),
        })
    }
}

/// Strip the quotes of a `from "path"` clause, if present.
fn unquote(text: &str) -> String {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
        .to_string()
}
