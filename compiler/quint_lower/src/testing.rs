//! Construct stream builder for tests and tooling.
//!
//! Builds the sequence of constructs a parser driver would report, in
//! bottom-up order, without a parser. Each construct gets its own line so
//! every location is distinct.
//!
//! ```
//! use quint_lower::testing::ConstructStream;
//!
//! // module M { val x = 1 + 2 }
//! let result = ConstructStream::new("m.qnt")
//!     .int(1)
//!     .int(2)
//!     .binary("+")
//!     .val("x")
//!     .module("M")
//!     .lower();
//! assert_eq!(result.modules[0].declarations.len(), 1);
//! ```

use quint_ir::{Loc, Position};

use crate::{lower, Construct, ConstructKind, LoweringConfig, LoweringResult};

#[derive(Clone, Debug, Default)]
pub struct ConstructStream {
    source: String,
    constructs: Vec<Construct>,
    pending_docs: Vec<String>,
}

impl ConstructStream {
    pub fn new(source: impl Into<String>) -> Self {
        ConstructStream {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Append any construct.
    #[must_use]
    pub fn construct(mut self, kind: ConstructKind) -> Self {
        let line = u32::try_from(self.constructs.len()).unwrap_or(u32::MAX);
        let index = line.saturating_mul(80);
        let loc = Loc::new(
            self.source.as_str(),
            Position::new(line, 0, index),
            Position::new(line, 1, index.saturating_add(1)),
        );
        self.constructs.push(Construct::new(loc, kind));
        self
    }

    /// Queue a `///` line for the next documented declaration.
    #[must_use]
    pub fn doc(mut self, text: &str) -> Self {
        self.pending_docs.push(format!("/// {text}\n"));
        self
    }

    fn take_docs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_docs)
    }

    pub fn constructs(&self) -> &[Construct] {
        &self.constructs
    }

    pub fn into_constructs(self) -> Vec<Construct> {
        self.constructs
    }

    pub fn lower(self) -> LoweringResult {
        self.lower_with(LoweringConfig::default())
    }

    pub fn lower_with(self, config: LoweringConfig) -> LoweringResult {
        lower(config, self.constructs)
    }

    // Declarations

    #[must_use]
    pub fn module(mut self, name: &str) -> Self {
        let docs = self.take_docs();
        self.construct(ConstructKind::Module {
            name: name.into(),
            docs,
        })
    }

    #[must_use]
    pub fn constant(mut self, name: &str) -> Self {
        let docs = self.take_docs();
        self.construct(ConstructKind::Const {
            name: name.into(),
            docs,
        })
    }

    #[must_use]
    pub fn var(mut self, name: &str) -> Self {
        let docs = self.take_docs();
        self.construct(ConstructKind::Var {
            name: name.into(),
            docs,
        })
    }

    #[must_use]
    pub fn assume(mut self, name: &str) -> Self {
        let docs = self.take_docs();
        self.construct(ConstructKind::Assume {
            name: name.into(),
            docs,
        })
    }

    #[must_use]
    pub fn type_abstract(mut self, name: &str) -> Self {
        let docs = self.take_docs();
        self.construct(ConstructKind::TypeAbstract {
            name: name.into(),
            docs,
        })
    }

    #[must_use]
    pub fn type_alias(mut self, name: &str) -> Self {
        let docs = self.take_docs();
        self.construct(ConstructKind::TypeAlias {
            name: name.into(),
            docs,
        })
    }

    #[must_use]
    pub fn sum_type(mut self, name: &str, variants: usize) -> Self {
        let docs = self.take_docs();
        self.construct(ConstructKind::TypeSum {
            name: name.into(),
            variants,
            docs,
        })
    }

    #[must_use]
    pub fn variant(self, label: &str, has_payload: bool) -> Self {
        self.construct(ConstructKind::SumVariant {
            label: label.into(),
            has_payload,
        })
    }

    /// Operator definition with a body.
    #[must_use]
    pub fn def(self, qualifier: &str, name: &str, params: usize, type_annotations: usize) -> Self {
        self.operator_def(qualifier, name, params, type_annotations, true)
    }

    /// Operator definition whose body the parser could not produce.
    #[must_use]
    pub fn def_without_body(self, qualifier: &str, name: &str, params: usize) -> Self {
        self.operator_def(qualifier, name, params, 0, false)
    }

    /// `val name = <last expression>`
    #[must_use]
    pub fn val(self, name: &str) -> Self {
        self.def("val", name, 0, 0)
    }

    fn operator_def(
        mut self,
        qualifier: &str,
        name: &str,
        params: usize,
        type_annotations: usize,
        has_body: bool,
    ) -> Self {
        let docs = self.take_docs();
        self.construct(ConstructKind::OperatorDef {
            qualifier: qualifier.into(),
            name: name.into(),
            params,
            type_annotations,
            has_body,
            docs,
        })
    }

    #[must_use]
    pub fn import(self, proto: &str, def_name: Option<&str>, from: Option<&str>) -> Self {
        self.construct(ConstructKind::Import {
            proto: proto.into(),
            def_name: def_name.map(Into::into),
            alias: None,
            from: from.map(Into::into),
        })
    }

    #[must_use]
    pub fn export(self, proto: &str, alias: Option<&str>) -> Self {
        self.construct(ConstructKind::Export {
            proto: proto.into(),
            def_name: None,
            alias: alias.map(Into::into),
        })
    }

    /// `import proto(o1 = e1, ...) as alias`, one expression per override
    /// already pushed.
    #[must_use]
    pub fn instance(self, proto: &str, overrides: &[&str], alias: Option<&str>) -> Self {
        self.construct(ConstructKind::Instance {
            proto: proto.into(),
            overrides: overrides.iter().map(ToString::to_string).collect(),
            alias: alias.map(Into::into),
            from: None,
        })
    }

    #[must_use]
    pub fn param(self, name: &str) -> Self {
        self.construct(ConstructKind::Parameter { name: name.into() })
    }

    // Types

    #[must_use]
    pub fn type_int(self) -> Self {
        self.construct(ConstructKind::TypeInt)
    }

    #[must_use]
    pub fn type_bool(self) -> Self {
        self.construct(ConstructKind::TypeBool)
    }

    #[must_use]
    pub fn type_str(self) -> Self {
        self.construct(ConstructKind::TypeStr)
    }

    #[must_use]
    pub fn type_name(self, name: &str) -> Self {
        self.construct(ConstructKind::TypeName { name: name.into() })
    }

    #[must_use]
    pub fn type_set(self) -> Self {
        self.construct(ConstructKind::TypeSet)
    }

    #[must_use]
    pub fn type_list(self) -> Self {
        self.construct(ConstructKind::TypeList)
    }

    #[must_use]
    pub fn type_fun(self) -> Self {
        self.construct(ConstructKind::TypeFun)
    }

    #[must_use]
    pub fn type_oper(self, args: usize) -> Self {
        self.construct(ConstructKind::TypeOper { args })
    }

    #[must_use]
    pub fn type_tuple(self, elements: usize) -> Self {
        self.construct(ConstructKind::TypeTuple { elements })
    }

    /// Name of the field whose type was just pushed.
    #[must_use]
    pub fn row_field(self, name: &str) -> Self {
        self.construct(ConstructKind::RowField { name: name.into() })
    }

    #[must_use]
    pub fn row(self, fields: usize, row_var: Option<&str>) -> Self {
        self.construct(ConstructKind::Row {
            fields,
            row_var: row_var.map(Into::into),
        })
    }

    #[must_use]
    pub fn type_record(self) -> Self {
        self.construct(ConstructKind::TypeRecord)
    }

    // Expressions

    #[must_use]
    pub fn name(self, name: &str) -> Self {
        self.construct(ConstructKind::Name { name: name.into() })
    }

    #[must_use]
    pub fn int(self, value: i128) -> Self {
        self.int_text(&value.to_string())
    }

    #[must_use]
    pub fn int_text(self, text: &str) -> Self {
        self.construct(ConstructKind::Int { text: text.into() })
    }

    #[must_use]
    pub fn bool(self, value: bool) -> Self {
        self.construct(ConstructKind::Bool { value })
    }

    /// String literal; quotes are added.
    #[must_use]
    pub fn str(self, value: &str) -> Self {
        self.construct(ConstructKind::Str {
            text: format!("\"{value}\""),
        })
    }

    #[must_use]
    pub fn call(self, name: &str, args: usize) -> Self {
        self.construct(ConstructKind::Call {
            name: name.into(),
            args,
        })
    }

    /// `e.name`
    #[must_use]
    pub fn dot(self, name: &str) -> Self {
        self.construct(ConstructKind::DotCall {
            name: name.into(),
            args: None,
        })
    }

    /// `e.name(args)`
    #[must_use]
    pub fn dot_call(self, name: &str, args: usize) -> Self {
        self.construct(ConstructKind::DotCall {
            name: name.into(),
            args: Some(args),
        })
    }

    #[must_use]
    pub fn index(self) -> Self {
        self.construct(ConstructKind::ListIndex)
    }

    #[must_use]
    pub fn unary(self, op: &str) -> Self {
        self.construct(ConstructKind::Unary { op: op.into() })
    }

    #[must_use]
    pub fn binary(self, op: &str) -> Self {
        self.construct(ConstructKind::Binary { op: op.into() })
    }

    #[must_use]
    pub fn block(self, keyword: &str, args: usize) -> Self {
        self.construct(ConstructKind::Block {
            keyword: keyword.into(),
            args,
        })
    }

    #[must_use]
    pub fn if_else(self) -> Self {
        self.construct(ConstructKind::IfElse)
    }

    #[must_use]
    pub fn tuple(self, elements: usize) -> Self {
        self.construct(ConstructKind::Tuple { elements })
    }

    #[must_use]
    pub fn list(self, elements: usize) -> Self {
        self.construct(ConstructKind::List { elements })
    }

    #[must_use]
    pub fn record_field(self, name: &str) -> Self {
        self.construct(ConstructKind::RecordField { name: name.into() })
    }

    #[must_use]
    pub fn spread(self) -> Self {
        self.construct(ConstructKind::RecordSpread)
    }

    #[must_use]
    pub fn record(self, entries: usize) -> Self {
        self.construct(ConstructKind::Record { entries })
    }

    #[must_use]
    pub fn lambda(self, params: usize) -> Self {
        self.construct(ConstructKind::Lambda {
            params,
            tupled: false,
        })
    }

    /// `((p1, ..., pn)) => body`
    #[must_use]
    pub fn tuple_lambda(self, params: usize) -> Self {
        self.construct(ConstructKind::Lambda {
            params,
            tupled: true,
        })
    }

    /// Local definition (already pushed) scoping over the last expression.
    #[must_use]
    pub fn let_in(self) -> Self {
        self.construct(ConstructKind::Let)
    }

    /// `label(binder) => <last expression>`; `None` label for `_`.
    #[must_use]
    pub fn match_case(self, label: Option<&str>, binder: Option<&str>) -> Self {
        self.construct(ConstructKind::MatchCase {
            label: label.map(Into::into),
            binder: binder.map(Into::into),
        })
    }

    #[must_use]
    pub fn match_cases(self, cases: usize) -> Self {
        self.construct(ConstructKind::Match { cases })
    }
}
