use std::collections::HashMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quint_diagnostic::ErrorCode;
use quint_ir::{Declaration, Expr, ExprKind, OpDef, Qualifier, TypeKind};

use crate::testing::ConstructStream;
use crate::{LoweringResult, RecoveryReason};

fn stream() -> ConstructStream {
    ConstructStream::new("desugar.qnt")
}

fn value_of(result: &LoweringResult, name: &str) -> Expr {
    result
        .declarations()
        .find_map(|decl| match decl {
            Declaration::Def(def) if def.name == name => Some(def.expr.clone()),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no definition named {name}"))
}

fn defs(result: &LoweringResult) -> Vec<&OpDef> {
    result
        .declarations()
        .filter_map(|decl| match decl {
            Declaration::Def(def) => Some(def),
            _ => None,
        })
        .collect()
}

// A reference evaluator for the integer/tuple fragment.

#[derive(Clone, Debug, PartialEq)]
enum Value {
    Int(i128),
    Tuple(Vec<Value>),
}

fn eval(expr: &Expr, env: &HashMap<String, Value>) -> Value {
    match &expr.kind {
        ExprKind::Int(n) => Value::Int(*n),
        ExprKind::Name(name) => env
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("unbound name {name}")),
        ExprKind::App { opcode, args } => {
            let args: Vec<Value> = args.iter().map(|arg| eval(arg, env)).collect();
            match (opcode.as_str(), args.as_slice()) {
                ("iadd", [Value::Int(a), Value::Int(b)]) => Value::Int(a + b),
                ("isub", [Value::Int(a), Value::Int(b)]) => Value::Int(a - b),
                ("imul", [Value::Int(a), Value::Int(b)]) => Value::Int(a * b),
                ("Tup", _) => Value::Tuple(args.clone()),
                ("item", [Value::Tuple(items), Value::Int(position)]) => {
                    let index = usize::try_from(*position - 1)
                        .unwrap_or_else(|_| panic!("positions start at 1"));
                    items[index].clone()
                }
                _ => panic!("cannot evaluate {expr}"),
            }
        }
        ExprKind::Let { opdef, body } => {
            let mut inner = env.clone();
            inner.insert(opdef.name.clone(), eval(&opdef.expr, env));
            eval(body, &inner)
        }
        _ => panic!("cannot evaluate {expr}"),
    }
}

fn apply(lambda: &Expr, args: Vec<Value>) -> Value {
    let ExprKind::Lambda { params, body, .. } = &lambda.kind else {
        panic!("not a lambda: {lambda}");
    };
    assert_eq!(params.len(), args.len());
    let env = params.iter().map(|p| p.name.clone()).zip(args).collect();
    eval(body, &env)
}

// Sum types

/// type T = A(int) | B
fn sum_type_stream() -> ConstructStream {
    stream()
        .type_int()
        .variant("A", true)
        .variant("B", false)
        .sum_type("T", 2)
}

#[test]
fn sum_type_yields_typedef_then_constructors() {
    let result = sum_type_stream().module("M").lower();
    let decls = &result.modules[0].declarations;
    assert_eq!(decls.len(), 3);

    let Declaration::TypeDef(typedef) = &decls[0] else {
        panic!("expected a typedef first, got {:?}", decls[0]);
    };
    assert_eq!(typedef.name, "T");
    assert_eq!(
        typedef.ty.as_ref().map(ToString::to_string).as_deref(),
        Some("A(int) | B({})")
    );

    let rendered: Vec<String> = defs(&result).iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "def A: (int) => T = (__AParam) => variant(\"A\", __AParam)",
            "val B: T = variant(\"B\", Rec())",
        ]
    );
    assert!(result.diagnostics.is_empty());
    assert!(!result.recovered());
}

#[test]
fn payload_constructor_has_one_typed_parameter() {
    let result = sum_type_stream().module("M").lower();
    let constructors = defs(&result);
    let a = constructors[0];
    assert_eq!(a.qualifier, Qualifier::Def);
    assert_eq!(a.params().len(), 1);

    let Some(TypeKind::Oper { args, res }) = a.type_annotation.as_ref().map(|t| &t.kind) else {
        panic!("expected an operator type on A");
    };
    assert_eq!(args.len(), 1);
    assert_eq!(args[0].kind, TypeKind::Int);
    assert_eq!(res.kind, TypeKind::Const("T".into()));

    let b = constructors[1];
    assert_eq!(b.qualifier, Qualifier::Val);
    assert!(b.params().is_empty());
}

#[test]
fn payload_types_are_not_shared_between_nodes() {
    let result = sum_type_stream().module("M").lower();
    let Declaration::TypeDef(typedef) = &result.modules[0].declarations[0] else {
        panic!("expected a typedef");
    };
    let row_payload = typedef
        .ty
        .as_ref()
        .and_then(|ty| ty.row())
        .and_then(|row| row.field("A"))
        .map(|field| field.ty.id);
    let constructors = defs(&result);
    let annotation = constructors[0].type_annotation.as_ref();
    let Some(TypeKind::Oper { args, .. }) = annotation.map(|t| &t.kind) else {
        panic!("expected an operator type on A");
    };
    assert!(row_payload.is_some());
    assert_ne!(row_payload, Some(args[0].id));
    assert!(crate::validate(&result).is_empty());
}

#[test]
fn composite_payloads_are_copied_with_fresh_ids() {
    // type Msg = Send({ to: str, amount: int }) | Stop
    let result = stream()
        .type_str()
        .row_field("to")
        .type_int()
        .row_field("amount")
        .row(2, None)
        .type_record()
        .variant("Send", true)
        .variant("Stop", false)
        .sum_type("Msg", 2)
        .module("M")
        .lower();
    let send = defs(&result)[0];
    assert_eq!(
        send.type_annotation.as_ref().map(ToString::to_string).as_deref(),
        Some("({ to: str, amount: int }) => Msg")
    );
    assert!(crate::validate(&result).is_empty());
}

#[test]
fn lowercase_sum_type_is_reported_and_kept() {
    let result = stream()
        .variant("On", false)
        .variant("Off", false)
        .sum_type("state", 2)
        .module("M")
        .lower();
    assert_eq!(result.modules[0].declarations.len(), 3);
    let codes: Vec<ErrorCode> = result.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::QNT007]);
    assert_eq!(result.diagnostics[0].node, result.modules[0].declarations[0].id());
}

#[test]
fn sum_type_documentation_goes_on_the_typedef() {
    let result = stream()
        .doc("Switch state.")
        .variant("On", false)
        .variant("Off", false)
        .sum_type("Switch", 2)
        .module("M")
        .lower();
    let docs: Vec<Option<&str>> = result.declarations().map(Declaration::doc).collect();
    assert_eq!(docs, vec![Some("Switch state."), None, None]);
}

#[test]
fn repeated_variant_label_is_dropped() {
    let result = stream()
        .variant("A", false)
        .variant("A", false)
        .sum_type("T", 2)
        .module("M")
        .lower();
    assert_eq!(result.modules[0].declarations.len(), 2);
    let reasons: Vec<RecoveryReason> = result
        .recovery_notes
        .iter()
        .map(|note| note.reason.clone())
        .collect();
    assert_eq!(reasons, vec![RecoveryReason::DuplicateRowField("A".into())]);
}

// Tuple lambdas

/// ((a, b)) => a + b
fn tuple_lambda_stream() -> ConstructStream {
    stream()
        .param("a")
        .param("b")
        .name("a")
        .name("b")
        .binary("+")
        .tuple_lambda(2)
        .val("f")
}

#[test]
fn tuple_lambda_binds_elements_by_position() {
    let result = tuple_lambda_stream().module("M").lower();
    let lambda = value_of(&result, "f");
    let param = format!("__tuple{}", lambda.id);
    assert_eq!(
        lambda.to_string(),
        format!(
            "({param}) => {{ val a = item({param}, 1); \
             {{ val b = item({param}, 2); iadd(a, b) }} }}"
        )
    );
}

#[test]
fn tuple_lambda_on_a_pair() {
    let result = tuple_lambda_stream().module("M").lower();
    let lambda = value_of(&result, "f");
    let pair = Value::Tuple(vec![Value::Int(3), Value::Int(4)]);
    assert_eq!(apply(&lambda, vec![pair]), Value::Int(7));
}

#[test]
fn tuple_lambda_skips_holes() {
    // ((_, b)) => b
    let result = stream()
        .param("_")
        .param("b")
        .name("b")
        .tuple_lambda(2)
        .val("snd")
        .module("M")
        .lower();
    let lambda = value_of(&result, "snd");
    let pair = Value::Tuple(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(apply(&lambda, vec![pair]), Value::Int(2));
    assert_eq!(lambda.to_string().matches("val ").count(), 1);
}

#[test]
fn tuple_lambda_names_are_unique_per_lambda() {
    let result = tuple_lambda_stream()
        .param("x")
        .param("y")
        .name("x")
        .tuple_lambda(2)
        .val("g")
        .module("M")
        .lower();
    let f = value_of(&result, "f");
    let g = value_of(&result, "g");
    let param_name = |lambda: &Expr| match &lambda.kind {
        ExprKind::Lambda { params, .. } => params[0].name.clone(),
        _ => panic!("not a lambda"),
    };
    assert_ne!(param_name(&f), param_name(&g));
}

proptest! {
    #[test]
    fn tuple_lambda_matches_direct_substitution(a in -1_000i128..1_000, b in -1_000i128..1_000) {
        let tupled = value_of(&tuple_lambda_stream().module("M").lower(), "f");
        let direct = value_of(
            &stream()
                .param("a")
                .param("b")
                .name("a")
                .name("b")
                .binary("+")
                .lambda(2)
                .val("f")
                .module("M")
                .lower(),
            "f",
        );
        let pair = Value::Tuple(vec![Value::Int(a), Value::Int(b)]);
        prop_assert_eq!(
            apply(&tupled, vec![pair]),
            apply(&direct, vec![Value::Int(a), Value::Int(b)])
        );
    }
}

// Records

fn record_value(stream: ConstructStream) -> LoweringResult {
    stream.val("rec").module("M").lower()
}

#[test]
fn plain_record_flattens_pairs() {
    let result = record_value(
        stream()
            .int(1)
            .record_field("x")
            .int(2)
            .record_field("y")
            .record(2),
    );
    assert_eq!(value_of(&result, "rec").to_string(), "Rec(\"x\", 1, \"y\", 2)");
    assert_eq!(value_of(&record_value(stream().record(0)), "rec").to_string(), "Rec()");
}

#[test]
fn spread_seeds_a_with_chain() {
    // { ...r, x: 1 }
    let result = record_value(stream().name("r").spread().int(1).record_field("x").record(2));
    assert_eq!(value_of(&result, "rec").to_string(), "with(r, \"x\", 1)");
    assert!(result.diagnostics.is_empty());

    // { ...r, x: 1, y: 2 }
    let result = record_value(
        stream()
            .name("r")
            .spread()
            .int(1)
            .record_field("x")
            .int(2)
            .record_field("y")
            .record(3),
    );
    assert_eq!(
        value_of(&result, "rec").to_string(),
        "with(with(r, \"x\", 1), \"y\", 2)"
    );
}

#[test]
fn spread_position_does_not_matter() {
    // { x: 1, ...r }
    let result = record_value(stream().int(1).record_field("x").name("r").spread().record(2));
    assert_eq!(value_of(&result, "rec").to_string(), "with(r, \"x\", 1)");
}

#[test]
fn several_spreads_report_once_and_use_the_first() {
    // { ...r, ...s, x: 1 }
    let result = record_value(
        stream()
            .name("r")
            .spread()
            .name("s")
            .spread()
            .int(1)
            .record_field("x")
            .record(3),
    );
    let record = value_of(&result, "rec");
    assert_eq!(record.to_string(), "with(r, \"x\", 1)");
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.code, ErrorCode::QNT012);
    assert_eq!(diagnostic.node, record.id);
    assert!(result.has_errors());
    assert_eq!(result.diagnostics_with(ErrorCode::QNT012).count(), 1);
}

// Matches

#[test]
fn match_lowers_to_match_variant() {
    // match v { A(x) => x | _ => 0 }
    let result = stream()
        .name("v")
        .name("x")
        .match_case(Some("A"), Some("x"))
        .int(0)
        .match_case(None, None)
        .match_cases(2)
        .val("m")
        .module("M")
        .lower();
    assert_eq!(
        value_of(&result, "m").to_string(),
        "matchVariant(v, \"A\", (x) => x, \"_\", (_) => 0)"
    );
    assert!(!result.recovered());
}

#[test]
fn case_without_binder_binds_a_hole() {
    // match v { A(x) => x | B => 1 }
    let result = stream()
        .name("v")
        .name("x")
        .match_case(Some("A"), Some("x"))
        .int(1)
        .match_case(Some("B"), None)
        .match_cases(2)
        .val("m")
        .module("M")
        .lower();
    assert_eq!(
        value_of(&result, "m").to_string(),
        "matchVariant(v, \"A\", (x) => x, \"B\", (_) => 1)"
    );
}

#[test]
fn missing_cases_are_dropped() {
    let result = stream()
        .name("v")
        .int(1)
        .match_case(Some("B"), None)
        .match_cases(3)
        .val("m")
        .module("M")
        .lower();
    assert_eq!(
        value_of(&result, "m").to_string(),
        "matchVariant(v, \"B\", (_) => 1)"
    );
    assert_eq!(
        result.recovery_notes[0].reason,
        RecoveryReason::Underflow { missing: 2 }
    );
}
