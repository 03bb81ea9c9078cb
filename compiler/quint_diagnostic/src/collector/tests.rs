use quint_ir::QuintId;

use super::*;
use crate::{leaked_stack_elements, lowercase_type_name, multiple_record_spreads};

#[test]
fn counts_errors_but_keeps_warnings() {
    let mut collector = DiagnosticCollector::new();
    assert!(collector.is_empty());

    collector.push(lowercase_type_name(QuintId::new(1), "t"));
    collector.push(leaked_stack_elements(QuintId::new(2), &[("types", 1)]));
    collector.push(multiple_record_spreads(QuintId::new(3), 3));

    assert_eq!(collector.len(), 3);
    assert_eq!(collector.error_count(), 2);
    assert!(collector.has_errors());
}

#[test]
fn preserves_emission_order() {
    let mut collector = DiagnosticCollector::new();
    for raw in [5, 2, 9] {
        collector.push(lowercase_type_name(QuintId::new(raw), "t"));
    }
    let nodes: Vec<_> = collector.iter().map(|d| d.node.raw()).collect();
    assert_eq!(nodes, vec![5, 2, 9]);
    assert_eq!(collector.into_vec().len(), 3);
}
