use pretty_assertions::assert_eq;

use super::*;
use crate::QuintId;

fn id(raw: u64) -> QuintId {
    QuintId::new(raw)
}

#[test]
fn unknown_qualifier_defaults_to_def() {
    assert_eq!(Qualifier::from_keyword("val"), Qualifier::Val);
    assert_eq!(Qualifier::from_keyword("pure def"), Qualifier::PureDef);
    assert_eq!(Qualifier::from_keyword("nondet"), Qualifier::Nondet);
    assert_eq!(Qualifier::from_keyword("bogus"), Qualifier::Def);
    assert_eq!(Qualifier::from_keyword(""), Qualifier::Def);
}

#[test]
fn qualifier_keywords_round_trip() {
    let all = [
        Qualifier::Val,
        Qualifier::Def,
        Qualifier::PureVal,
        Qualifier::PureDef,
        Qualifier::Action,
        Qualifier::Run,
        Qualifier::Temporal,
        Qualifier::Nondet,
    ];
    for q in all {
        assert_eq!(Qualifier::from_keyword(q.as_str()), q);
    }
}

#[test]
fn type_names_classify_by_case() {
    assert_eq!(Type::from_name(id(1), "a").kind, TypeKind::Var("a".into()));
    assert_eq!(
        Type::from_name(id(2), "Proc").kind,
        TypeKind::Const("Proc".into())
    );
    assert_eq!(
        Type::from_name(id(3), "_t").kind,
        TypeKind::Const("_t".into())
    );
}

#[test]
fn opdef_params_come_from_the_lambda() {
    let body = Expr::name(id(3), "x");
    let lambda = Expr::lambda(
        id(2),
        vec![LambdaParameter::new(id(4), "x")],
        Qualifier::Def,
        body.clone(),
    );
    let def = OpDef {
        id: id(1),
        name: "f".into(),
        qualifier: Qualifier::Def,
        type_annotation: None,
        expr: lambda,
        doc: None,
    };
    assert_eq!(def.params().len(), 1);
    assert_eq!(def.params()[0].name, "x");
    assert_eq!(def.body(), &body);

    let value = OpDef {
        expr: Expr::int(id(5), 3),
        ..def
    };
    assert!(value.params().is_empty());
}

#[test]
fn with_doc_rebuilds_documented_declarations_only() {
    let var = Declaration::Var(VarDecl {
        id: id(1),
        name: "x".into(),
        ty: Type::new(id(2), TypeKind::Int),
        doc: None,
    });
    let documented = var.with_doc(Some("counter".into()));
    assert_eq!(documented.doc(), Some("counter"));
    assert_eq!(documented.id(), id(1));

    let import = Declaration::Import(ImportDecl {
        id: id(3),
        proto_name: "M".into(),
        def_name: Some("*".into()),
        qualified_name: None,
        from_source: None,
    });
    assert_eq!(import.clone().with_doc(Some("ignored".into())), import);
}

#[test]
fn rows() {
    let row = Row::closed(vec![RowField::new("a", Type::new(id(1), TypeKind::Int))]);
    assert!(!row.is_open());
    assert!(row.field("a").is_some());
    assert!(row.field("b").is_none());
    assert!(Row::var("r").is_open());
    assert_eq!(Row::empty(), Row::closed(Vec::new()));
}

#[test]
fn expressions_render_as_applications() {
    let sum = Expr::app(
        id(3),
        "iadd",
        vec![Expr::name(id(1), "x"), Expr::int(id(2), 1)],
    );
    let lambda = Expr::lambda(
        id(5),
        vec![LambdaParameter::new(id(4), "x")],
        Qualifier::Def,
        sum,
    );
    assert_eq!(lambda.to_string(), "(x) => iadd(x, 1)");

    let binding = OpDef {
        id: id(7),
        name: "y".into(),
        qualifier: Qualifier::Val,
        type_annotation: None,
        expr: Expr::str(id(6), "a"),
        doc: None,
    };
    let scoped = Expr::let_in(id(9), binding, Expr::bool(id(8), true));
    assert_eq!(scoped.to_string(), "{ val y = \"a\"; true }");
}

#[test]
fn types_render_in_surface_syntax() {
    let int = || Type::new(id(1), TypeKind::Int);
    let oper = Type::new(
        id(2),
        TypeKind::Oper {
            args: vec![int(), Type::new(id(3), TypeKind::Var("a".into()))],
            res: Box::new(Type::new(id(4), TypeKind::Bool)),
        },
    );
    assert_eq!(oper.to_string(), "(int, a) => bool");

    let record = Type::new(
        id(5),
        TypeKind::Record(Row {
            fields: vec![RowField::new("f", int())],
            tail: RowTail::Var("r".into()),
        }),
    );
    assert_eq!(record.to_string(), "{ f: int | r }");

    let sum = Type::new(
        id(6),
        TypeKind::Sum(Row::closed(vec![
            RowField::new("A", int()),
            RowField::new("B", Type::unit(id(7))),
        ])),
    );
    assert_eq!(sum.to_string(), "A(int) | B({})");

    let tuple = Type::new(
        id(8),
        TypeKind::Tuple(Row::closed(vec![
            RowField::new("0", int()),
            RowField::new("1", Type::new(id(9), TypeKind::Str)),
        ])),
    );
    assert_eq!(tuple.to_string(), "(int, str)");
}

#[cfg(feature = "serde")]
#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn modules_survive_a_serde_round_trip() {
    use crate::{Loc, Position, Registry};

    let mut registry = Registry::new();
    let loc = Loc::new("m.qnt", Position::new(0, 0, 0), Position::new(0, 9, 9));
    let param = LambdaParameter::new(registry.next(&loc), "x");
    let body = Expr::app(
        registry.next(&loc),
        "iadd",
        vec![Expr::name(registry.next(&loc), "x"), Expr::int(registry.next(&loc), 1)],
    );
    let row = Row {
        fields: vec![RowField::new("n", Type::new(registry.next(&loc), TypeKind::Int))],
        tail: RowTail::Var("r".into()),
    };
    let module = Module {
        id: registry.next(&loc),
        name: "M".into(),
        declarations: vec![
            Declaration::Def(OpDef {
                id: registry.next(&loc),
                name: "inc".into(),
                qualifier: Qualifier::PureDef,
                type_annotation: None,
                expr: Expr::lambda(registry.next(&loc), vec![param], Qualifier::PureDef, body),
                doc: Some("Adds one.".into()),
            }),
            Declaration::TypeDef(TypeDef {
                id: registry.next(&loc),
                name: "R".into(),
                ty: Some(Type::new(registry.next(&loc), TypeKind::Record(row))),
                doc: None,
            }),
        ],
        doc: None,
    };
    let source_map = registry.into_source_map();

    let bytes = bincode::serialize(&(&module, &source_map)).unwrap();
    let (decoded, decoded_map): (Module, crate::SourceMap) =
        bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, module);
    assert_eq!(decoded_map, source_map);
}
