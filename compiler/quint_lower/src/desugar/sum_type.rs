//! Sum type constructors.
//!
//! `type T = A(P) | B` becomes
//!
//! ```text
//! type T = (A(P) | B)
//! def A: (P) => T = (__AParam) => variant("A", __AParam)
//! val B: T = variant("B", Rec())
//! ```
//!
//! with the constructors right after the type definition, in declared order.

use rustc_hash::FxHashSet;

use quint_ir::builtin_opcodes::{access, collections};
use quint_ir::{
    Declaration, Expr, LambdaParameter, OpDef, Qualifier, Row, RowField, Type, TypeKind,
};

use crate::lower::{LoweringState, Site};
use crate::recovery::RecoveryReason;
use crate::stacks::{StackCategory, VariantField};

/// Name of the parameter of a payload constructor. The `__` prefix keeps
/// it out of the user's namespace.
fn constructor_param(label: &str) -> String {
    format!("__{label}Param")
}

impl LoweringState {
    pub(crate) fn lower_sum_type(
        &mut self,
        site: &Site<'_>,
        name: &str,
        variants: usize,
        docs: &[String],
    ) -> Vec<Declaration> {
        let variants = self.pop_variants(site, variants);
        let variants = self.dedup_variants(site, variants);

        let fields = variants
            .iter()
            .map(|variant| {
                let payload = match &variant.payload {
                    Some(ty) => ty.clone(),
                    None => Type::unit(self.fresh_id(site)),
                };
                RowField::new(variant.label.clone(), payload)
            })
            .collect();
        let sum = Type::new(self.fresh_id(site), TypeKind::Sum(Row::closed(fields)));

        let mut decls = Vec::with_capacity(variants.len() + 1);
        decls.push(self.lower_typedef(site, name, Some(sum), docs));
        for variant in &variants {
            decls.push(self.variant_constructor(site, name, variant));
        }
        tracing::debug!(
            sum_type = name,
            constructors = variants.len(),
            "synthesized variant constructors"
        );
        decls
    }

    fn dedup_variants(
        &mut self,
        site: &Site<'_>,
        variants: Vec<VariantField>,
    ) -> Vec<VariantField> {
        let mut seen = FxHashSet::default();
        let mut unique = Vec::with_capacity(variants.len());
        for variant in variants {
            if seen.insert(variant.label.clone()) {
                unique.push(variant);
            } else {
                self.note(
                    site,
                    StackCategory::VariantField,
                    RecoveryReason::DuplicateRowField(variant.label),
                );
            }
        }
        unique
    }

    fn variant_constructor(
        &mut self,
        site: &Site<'_>,
        type_name: &str,
        variant: &VariantField,
    ) -> Declaration {
        let label = Expr::str(self.fresh_id(site), variant.label.as_str());

        let (qualifier, type_annotation, expr) = match &variant.payload {
            None => {
                let unit = Expr::app(self.fresh_id(site), collections::RECORD, Vec::new());
                let body = Expr::app(self.fresh_id(site), access::VARIANT, vec![label, unit]);
                let ty = Type::new(self.fresh_id(site), TypeKind::Const(type_name.to_string()));
                (Qualifier::Val, ty, body)
            }
            Some(payload) => {
                let param =
                    LambdaParameter::new(self.fresh_id(site), constructor_param(&variant.label));
                let arg = Expr::name(self.fresh_id(site), param.name.as_str());
                let body = Expr::app(self.fresh_id(site), access::VARIANT, vec![label, arg]);
                let lambda = Expr::lambda(self.fresh_id(site), vec![param], Qualifier::Def, body);

                let arg_ty = self.refresh_type_ids(site, payload);
                let res_ty = Type::new(self.fresh_id(site), TypeKind::Const(type_name.to_string()));
                let ty = Type::new(
                    self.fresh_id(site),
                    TypeKind::Oper {
                        args: vec![arg_ty],
                        res: Box::new(res_ty),
                    },
                );
                (Qualifier::Def, ty, lambda)
            }
        };

        Declaration::Def(OpDef {
            id: self.fresh_id(site),
            name: variant.label.clone(),
            qualifier,
            type_annotation: Some(type_annotation),
            expr,
            doc: None,
        })
    }
}
