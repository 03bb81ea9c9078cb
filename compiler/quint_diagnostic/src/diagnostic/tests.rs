use pretty_assertions::assert_eq;
use quint_ir::{Loc, Position, Registry};

use super::*;

#[test]
fn builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::QNT012, QuintId::new(4))
        .with_message("two spreads")
        .with_note("first one wins");

    assert_eq!(diag.code, ErrorCode::QNT012);
    assert_eq!(diag.message, "two spreads");
    assert_eq!(diag.node, QuintId::new(4));
    assert_eq!(diag.notes, vec!["first one wins".to_string()]);
    assert!(diag.is_error());
}

#[test]
fn message_defaults_to_description() {
    let diag = Diagnostic::warning(ErrorCode::QNT901, QuintId::new(1));
    assert_eq!(diag.message, ErrorCode::QNT901.description());
    assert!(!diag.is_error());
}

#[test]
fn lowercase_type_name_mentions_the_name() {
    let diag = lowercase_type_name(QuintId::new(9), "myType");
    assert_eq!(diag.code, ErrorCode::QNT007);
    assert!(diag.message.contains("`myType`"));
}

#[test]
fn leak_summary_lists_categories() {
    let diag = leaked_stack_elements(QuintId::new(2), &[("expressions", 2), ("types", 1)]);
    assert_eq!(diag.severity, Severity::Warning);
    assert!(diag.message.ends_with("2 expressions, 1 types"));
}

#[test]
fn display_format() {
    let diag = multiple_record_spreads(QuintId::new(12), 2);
    let output = diag.to_string();
    assert!(output.starts_with("error [QNT012]: record literal has 2 spreads"));
    assert!(output.contains("--> node 12"));
    assert!(output.contains("= note: only the first spread"));
}

#[test]
fn render_resolves_location() {
    let mut registry = Registry::new();
    let id = registry.next(&Loc::new(
        "spec.qnt",
        Position::new(2, 4, 30),
        Position::new(2, 20, 46),
    ));
    let rendered = lowercase_type_name(id, "t").render(registry.source_map());
    assert!(rendered.contains("--> spec.qnt:3:5-3:21"));

    let unknown = lowercase_type_name(QuintId::new(999), "t").render(registry.source_map());
    assert!(unknown.contains("--> node 999"));
}
