//! Syntax construct → IR reduction.
//!
//! The parser driver reports constructs bottom-up, left to right. Each
//! reduction pops the construct's already-lowered children off the category
//! stacks, builds one IR node (or a short run of declarations, for sum
//! types), issues identifiers, and pushes the result onto the stack of its
//! own category. Completing a module claims every pending declaration.
//!
//! Reductions never fail. Missing children are replaced by placeholders
//! (see [`crate::recovery`]), structural problems go to the diagnostics
//! collector, and the session always ends with a complete
//! [`LoweringResult`].

mod decls;
mod exprs;
mod operators;
mod types;

use quint_diagnostic::{leaked_stack_elements, DiagnosticCollector};
use quint_ir::builtin_opcodes::{access, collections, logic};
use quint_ir::{
    Declaration, Expr, LambdaParameter, Loc, Module, QuintId, Registry, Row, Type, TypeKind,
};

use crate::construct::{Construct, ConstructKind};
use crate::docs::join_doc_lines;
use crate::recovery::{RecoveryNote, RecoveryReason};
use crate::stacks::{CategoryStacks, MatchArm, RecordEntry, StackCategory, VariantField};
use crate::{LoweringConfig, LoweringResult};

use decls::OperatorDefParts;

/// Where a reduction is happening: the construct's location and production
/// name. Every identifier issued by the reduction maps to `loc`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Site<'a> {
    pub(crate) loc: &'a Loc,
    pub(crate) construct: &'static str,
}

/// Result of one reduction, tagged by the stack it goes to.
enum Lowered {
    Expr(Expr),
    Decl(Declaration),
    Decls(Vec<Declaration>),
    Param(LambdaParameter),
    Type(Type),
    Row(Row),
    Variant(VariantField),
    Identifier(String),
    RecordEntry(RecordEntry),
    MatchArm(MatchArm),
    Module(Module),
}

/// State of one lowering session.
///
/// Sessions are independent: each owns its registry and stacks, so separate
/// sessions may run on separate threads.
pub struct LoweringState {
    pub(crate) registry: Registry,
    pub(crate) stacks: CategoryStacks,
    pub(crate) diagnostics: DiagnosticCollector,
    pub(crate) notes: Vec<RecoveryNote>,
    /// Counter for synthesized names.
    pub(crate) recovered: u32,
    modules: Vec<Module>,
    last_loc: Option<Loc>,
    config: LoweringConfig,
}

impl LoweringState {
    pub fn new(config: LoweringConfig) -> Self {
        LoweringState {
            registry: Registry::starting_at(config.first_id),
            stacks: CategoryStacks::default(),
            diagnostics: DiagnosticCollector::new(),
            notes: Vec::new(),
            recovered: 0,
            modules: Vec::new(),
            last_loc: None,
            config,
        }
    }

    /// Modules completed so far.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Apply the reduction rule for one completed construct.
    pub fn reduce(&mut self, construct: &Construct) {
        let site = Site {
            loc: &construct.loc,
            construct: construct.kind.name(),
        };
        tracing::trace!(construct = site.construct, loc = %site.loc, "reduce");

        let lowered = match &construct.kind {
            // Modules and declarations
            ConstructKind::Module { name, docs } => {
                Lowered::Module(self.lower_module(&site, name, docs))
            }
            ConstructKind::Const { name, docs } => {
                Lowered::Decl(self.lower_const(&site, name, docs))
            }
            ConstructKind::Var { name, docs } => Lowered::Decl(self.lower_var(&site, name, docs)),
            ConstructKind::Assume { name, docs } => {
                Lowered::Decl(self.lower_assume(&site, name, docs))
            }
            ConstructKind::TypeAbstract { name, docs } => {
                Lowered::Decl(self.lower_typedef(&site, name, None, docs))
            }
            ConstructKind::TypeAlias { name, docs } => {
                let ty = self.pop_type(&site);
                Lowered::Decl(self.lower_typedef(&site, name, Some(ty), docs))
            }
            ConstructKind::TypeSum {
                name,
                variants,
                docs,
            } => Lowered::Decls(self.lower_sum_type(&site, name, *variants, docs)),
            ConstructKind::SumVariant { label, has_payload } => {
                let payload = has_payload.then(|| self.pop_type(&site));
                Lowered::Variant(VariantField {
                    label: label.clone(),
                    payload,
                })
            }
            ConstructKind::OperatorDef {
                qualifier,
                name,
                params,
                type_annotations,
                has_body,
                docs,
            } => Lowered::Decl(self.lower_operator_def(
                &site,
                &OperatorDefParts {
                    qualifier,
                    name,
                    params: *params,
                    type_annotations: *type_annotations,
                    has_body: *has_body,
                    docs,
                },
            )),
            ConstructKind::Import {
                proto,
                def_name,
                alias,
                from,
            } => Lowered::Decl(self.lower_import(
                &site,
                proto,
                def_name.as_deref(),
                alias.as_deref(),
                from.as_deref(),
            )),
            ConstructKind::Export {
                proto,
                def_name,
                alias,
            } => Lowered::Decl(self.lower_export(
                &site,
                proto,
                def_name.as_deref(),
                alias.as_deref(),
            )),
            ConstructKind::Instance {
                proto,
                overrides,
                alias,
                from,
            } => Lowered::Decl(self.lower_instance(
                &site,
                proto,
                overrides,
                alias.as_deref(),
                from.as_deref(),
            )),
            ConstructKind::Parameter { name } => {
                Lowered::Param(LambdaParameter::new(self.fresh_id(&site), name.as_str()))
            }

            // Types
            ConstructKind::TypeInt => Lowered::Type(self.primitive_type(&site, TypeKind::Int)),
            ConstructKind::TypeBool => Lowered::Type(self.primitive_type(&site, TypeKind::Bool)),
            ConstructKind::TypeStr => Lowered::Type(self.primitive_type(&site, TypeKind::Str)),
            ConstructKind::TypeName { name } => {
                Lowered::Type(Type::from_name(self.fresh_id(&site), name.as_str()))
            }
            ConstructKind::TypeSet => Lowered::Type(self.lower_set_type(&site)),
            ConstructKind::TypeList => Lowered::Type(self.lower_list_type(&site)),
            ConstructKind::TypeFun => Lowered::Type(self.lower_fun_type(&site)),
            ConstructKind::TypeOper { args } => {
                Lowered::Type(self.lower_oper_type(&site, args.saturating_add(1)))
            }
            ConstructKind::TypeTuple { elements } => {
                Lowered::Type(self.lower_tuple_type(&site, *elements))
            }
            ConstructKind::RowField { name } => Lowered::Identifier(name.clone()),
            ConstructKind::Row { fields, row_var } => {
                Lowered::Row(self.lower_row(&site, *fields, row_var.as_deref()))
            }
            ConstructKind::TypeRecord => Lowered::Type(self.lower_record_type(&site)),

            // Expressions
            ConstructKind::Name { name } => {
                Lowered::Expr(Expr::name(self.fresh_id(&site), name.as_str()))
            }
            ConstructKind::Int { text } => Lowered::Expr(self.lower_int(&site, text)),
            ConstructKind::Bool { value } => {
                Lowered::Expr(Expr::bool(self.fresh_id(&site), *value))
            }
            ConstructKind::Str { text } => Lowered::Expr(self.lower_str(&site, text)),
            ConstructKind::Call { name, args } => {
                Lowered::Expr(self.lower_application(&site, name, *args))
            }
            ConstructKind::DotCall { name, args } => {
                Lowered::Expr(self.lower_dot_call(&site, name, *args))
            }
            ConstructKind::ListIndex => {
                Lowered::Expr(self.lower_application(&site, access::NTH, 2))
            }
            ConstructKind::Unary { op } => Lowered::Expr(self.lower_unary(&site, op)),
            ConstructKind::Binary { op } => Lowered::Expr(self.lower_binary(&site, op)),
            ConstructKind::Block { keyword, args } => {
                Lowered::Expr(self.lower_block(&site, keyword, *args))
            }
            ConstructKind::IfElse => Lowered::Expr(self.lower_application(&site, logic::ITE, 3)),
            ConstructKind::Tuple { elements } => {
                Lowered::Expr(self.lower_application(&site, collections::TUPLE, *elements))
            }
            ConstructKind::List { elements } => {
                Lowered::Expr(self.lower_application(&site, collections::LIST, *elements))
            }
            ConstructKind::RecordField { name } => Lowered::RecordEntry(RecordEntry::Field {
                name: name.clone(),
                value: self.pop_expr(&site),
            }),
            ConstructKind::RecordSpread => {
                Lowered::RecordEntry(RecordEntry::Spread(self.pop_expr(&site)))
            }
            ConstructKind::Record { entries } => Lowered::Expr(self.lower_record(&site, *entries)),
            ConstructKind::Lambda { params, tupled } => {
                Lowered::Expr(self.lower_lambda(&site, *params, *tupled))
            }
            ConstructKind::Let => Lowered::Expr(self.lower_let(&site)),
            ConstructKind::MatchCase { label, binder } => Lowered::MatchArm(self.lower_match_case(
                &site,
                label.as_deref(),
                binder.as_deref(),
            )),
            ConstructKind::Match { cases } => Lowered::Expr(self.lower_match(&site, *cases)),
        };

        self.push(lowered);
        self.last_loc = Some(construct.loc.clone());
    }

    fn push(&mut self, lowered: Lowered) {
        match lowered {
            Lowered::Expr(expr) => self.stacks.exprs.push(expr),
            Lowered::Decl(decl) => self.stacks.decls.push(decl),
            Lowered::Decls(decls) => self.stacks.decls.extend(decls),
            Lowered::Param(param) => self.stacks.params.push(param),
            Lowered::Type(ty) => self.stacks.types.push(ty),
            Lowered::Row(row) => self.stacks.rows.push(row),
            Lowered::Variant(variant) => self.stacks.variants.push(variant),
            Lowered::Identifier(name) => self.stacks.identifiers.push(name),
            Lowered::RecordEntry(entry) => self.stacks.record_entries.push(entry),
            Lowered::MatchArm(arm) => self.stacks.match_arms.push(arm),
            Lowered::Module(module) => self.modules.push(module),
        }
    }

    /// Issue an identifier mapped to the current construct.
    pub(crate) fn fresh_id(&mut self, site: &Site<'_>) -> QuintId {
        self.registry.next(site.loc)
    }

    fn lower_module(&mut self, site: &Site<'_>, name: &str, docs: &[String]) -> Module {
        let declarations = std::mem::take(&mut self.stacks.decls);
        let id = self.fresh_id(site);

        if self.config.check_stack_leaks {
            self.check_stack_leaks(id, name);
        }
        self.stacks.clear_components();

        tracing::debug!(module = name, declarations = declarations.len(), "module lowered");
        Module {
            id,
            name: name.to_string(),
            declarations,
            doc: join_doc_lines(docs),
        }
    }

    fn check_stack_leaks(&mut self, module_id: QuintId, module: &str) {
        let leftovers = self.stacks.leftovers();
        if leftovers.is_empty() {
            return;
        }
        tracing::warn!(module, ?leftovers, "components leaked across module boundary");
        let summary: Vec<(&str, usize)> = leftovers
            .iter()
            .map(|(category, count)| (category.as_str(), *count))
            .collect();
        self.diagnostics.push(leaked_stack_elements(module_id, &summary));
    }

    /// End the session.
    ///
    /// Components no module claimed are dropped with a recovery note.
    pub fn finish(mut self) -> LoweringResult {
        let mut leftovers = self.stacks.leftovers();
        if !self.stacks.decls.is_empty() {
            leftovers.insert(0, (StackCategory::Declaration, self.stacks.decls.len()));
        }
        if let Some(loc) = self.last_loc.take() {
            let site = Site {
                loc: &loc,
                construct: "end of input",
            };
            for (category, count) in leftovers {
                tracing::warn!(%category, count, "components left unclaimed");
                self.note(&site, category, RecoveryReason::Unclaimed { count });
            }
        }

        tracing::debug!(
            modules = self.modules.len(),
            ids = self.registry.issued(),
            "session finished"
        );
        let result = LoweringResult {
            modules: self.modules,
            source_map: self.registry.into_source_map(),
            diagnostics: self.diagnostics.into_vec(),
            recovery_notes: self.notes,
        };

        #[cfg(debug_assertions)]
        crate::validate::debug_check(&result);

        result
    }
}
