//! Completed syntax constructs, as reported by the parser driver.
//!
//! The driver walks the concrete syntax tree bottom-up, left to right, and
//! reports each construct once all of its children have been reported.
//! A construct carries only what the parser scanned directly (names,
//! literal text, operator tokens) and how many sub-constructs of each kind
//! it matched; the sub-constructs themselves are already lowered and wait on
//! the category stacks.

use quint_ir::Loc;

/// A completed construct and its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Construct {
    pub loc: Loc,
    pub kind: ConstructKind,
}

impl Construct {
    pub fn new(loc: Loc, kind: ConstructKind) -> Self {
        Construct { loc, kind }
    }
}

/// One variant per handled grammar production.
///
/// Counts (`args`, `params`, `elements`, ...) are the number of
/// sub-constructs of that kind the parser matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstructKind {
    // Modules and declarations
    /// `module name { declarations }`. Claims every pending declaration.
    Module { name: String, docs: Vec<String> },
    /// `const name: type`
    Const { name: String, docs: Vec<String> },
    /// `var name: type`
    Var { name: String, docs: Vec<String> },
    /// `assume name = expr`
    Assume { name: String, docs: Vec<String> },
    /// `type Name`
    TypeAbstract { name: String, docs: Vec<String> },
    /// `type Name = type`
    TypeAlias { name: String, docs: Vec<String> },
    /// `type Name = V1(T1) | V2 | ...`
    TypeSum {
        name: String,
        variants: usize,
        docs: Vec<String>,
    },
    /// One `Label(type)` or `Label` alternative of a sum type.
    SumVariant { label: String, has_payload: bool },
    /// `qualifier name(params): types = body`
    OperatorDef {
        qualifier: String,
        name: String,
        params: usize,
        type_annotations: usize,
        has_body: bool,
        docs: Vec<String>,
    },
    /// `import Proto.def as alias from "path"`
    Import {
        proto: String,
        def_name: Option<String>,
        alias: Option<String>,
        from: Option<String>,
    },
    /// `export Proto.def as alias`
    Export {
        proto: String,
        def_name: Option<String>,
        alias: Option<String>,
    },
    /// `import Proto(N1 = e1, ...).*` or `... as alias`, one expression per
    /// override name.
    Instance {
        proto: String,
        overrides: Vec<String>,
        alias: Option<String>,
        from: Option<String>,
    },
    /// A lambda or operator parameter; `_` for an anonymous one.
    Parameter { name: String },

    // Types
    TypeInt,
    TypeBool,
    TypeStr,
    /// Bare type name: a variable if lowercase, a type constant otherwise.
    TypeName { name: String },
    /// `Set[T]`
    TypeSet,
    /// `List[T]`
    TypeList,
    /// `T1 -> T2`
    TypeFun,
    /// `(T1, ..., Tn) => R`, with `args` argument types before the result.
    TypeOper { args: usize },
    /// `(T1, ..., Tn)`
    TypeTuple { elements: usize },
    /// `name: type` inside a row.
    RowField { name: String },
    /// `{ fields | row_var }`
    Row {
        fields: usize,
        row_var: Option<String>,
    },
    /// A record type wrapping the last row.
    TypeRecord,

    // Expressions
    Name { name: String },
    /// Integer literal text, possibly with `_` separators or `0x` prefix.
    Int { text: String },
    Bool { value: bool },
    /// String literal text, with its quotes.
    Str { text: String },
    /// `name(args)`
    Call { name: String, args: usize },
    /// `e.name(args)` when `args` is present, `e.name` otherwise.
    DotCall { name: String, args: Option<usize> },
    /// `e[i]`
    ListIndex,
    /// Prefix `-` or postfix `'`.
    Unary { op: String },
    /// Infix operator token.
    Binary { op: String },
    /// `and { ... }`, `or { ... }`, `all { ... }`, `any { ... }`.
    Block { keyword: String, args: usize },
    /// `if (c) e1 else e2`
    IfElse,
    /// `(e1, ..., en)`
    Tuple { elements: usize },
    /// `[e1, ..., en]`
    List { elements: usize },
    /// `name: expr` inside a record literal.
    RecordField { name: String },
    /// `...expr` inside a record literal.
    RecordSpread,
    /// `{ entries }`
    Record { entries: usize },
    /// `(params) => body`; `tupled` for `((p1, p2, ...)) => body`.
    Lambda { params: usize, tupled: bool },
    /// A local operator definition followed by the expression it scopes over.
    Let,
    /// `Label(binder) => body`; `label` is `None` for the `_` case.
    MatchCase {
        label: Option<String>,
        binder: Option<String>,
    },
    /// `match e { cases }`
    Match { cases: usize },
}

impl ConstructKind {
    /// Production name, for logs and recovery notes.
    pub fn name(&self) -> &'static str {
        match self {
            ConstructKind::Module { .. } => "module",
            ConstructKind::Const { .. } => "const",
            ConstructKind::Var { .. } => "var",
            ConstructKind::Assume { .. } => "assume",
            ConstructKind::TypeAbstract { .. } => "abstract typedef",
            ConstructKind::TypeAlias { .. } => "type alias",
            ConstructKind::TypeSum { .. } => "sum typedef",
            ConstructKind::SumVariant { .. } => "sum variant",
            ConstructKind::OperatorDef { .. } => "operator definition",
            ConstructKind::Import { .. } => "import",
            ConstructKind::Export { .. } => "export",
            ConstructKind::Instance { .. } => "instance",
            ConstructKind::Parameter { .. } => "parameter",
            ConstructKind::TypeInt => "int type",
            ConstructKind::TypeBool => "bool type",
            ConstructKind::TypeStr => "str type",
            ConstructKind::TypeName { .. } => "type name",
            ConstructKind::TypeSet => "set type",
            ConstructKind::TypeList => "list type",
            ConstructKind::TypeFun => "function type",
            ConstructKind::TypeOper { .. } => "operator type",
            ConstructKind::TypeTuple { .. } => "tuple type",
            ConstructKind::RowField { .. } => "row field",
            ConstructKind::Row { .. } => "row",
            ConstructKind::TypeRecord => "record type",
            ConstructKind::Name { .. } => "name",
            ConstructKind::Int { .. } => "integer literal",
            ConstructKind::Bool { .. } => "boolean literal",
            ConstructKind::Str { .. } => "string literal",
            ConstructKind::Call { .. } => "call",
            ConstructKind::DotCall { .. } => "dot call",
            ConstructKind::ListIndex => "list index",
            ConstructKind::Unary { .. } => "unary operator",
            ConstructKind::Binary { .. } => "binary operator",
            ConstructKind::Block { .. } => "block",
            ConstructKind::IfElse => "if-else",
            ConstructKind::Tuple { .. } => "tuple",
            ConstructKind::List { .. } => "list",
            ConstructKind::RecordField { .. } => "record field",
            ConstructKind::RecordSpread => "record spread",
            ConstructKind::Record { .. } => "record",
            ConstructKind::Lambda { .. } => "lambda",
            ConstructKind::Let => "let",
            ConstructKind::MatchCase { .. } => "match case",
            ConstructKind::Match { .. } => "match",
        }
    }
}
