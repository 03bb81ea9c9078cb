use super::*;
use crate::Position;

fn loc_at(line: u32) -> Loc {
    Loc::new("test.qnt", Position::new(line, 0, line * 10), Position::new(line, 5, line * 10 + 5))
}

#[test]
fn ids_are_strictly_increasing() {
    let mut registry = Registry::new();
    let ids: Vec<_> = (0..5).map(|line| registry.next(&loc_at(line))).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ids[0].raw(), Registry::FIRST_ID);
}

#[test]
fn every_id_is_mapped_to_its_location() {
    let mut registry = Registry::new();
    let a = registry.next(&loc_at(1));
    let b = registry.next(&loc_at(2));

    let map = registry.source_map();
    assert_eq!(map.get(a), Some(&loc_at(1)));
    assert_eq!(map.get(b), Some(&loc_at(2)));
    assert!(!map.contains(QuintId::new(b.raw() + 1)));
    assert_eq!(registry.issued(), 2);
}

#[test]
fn starting_offset_is_honoured() {
    let mut registry = Registry::starting_at(100);
    assert_eq!(registry.next(&loc_at(0)), QuintId::new(100));
    assert_eq!(registry.next(&loc_at(1)), QuintId::new(101));
}

#[test]
fn numbering_wraps_at_the_top_of_the_range() {
    let mut registry = Registry::starting_at(u64::MAX - 1);
    let ids: Vec<u64> = (0..3).map(|line| registry.next(&loc_at(line)).raw()).collect();
    assert_eq!(ids, vec![u64::MAX - 1, u64::MAX, 0]);
    assert_eq!(registry.issued(), 3);
    assert_eq!(registry.source_map().get(QuintId::new(0)), Some(&loc_at(2)));
}

#[test]
fn registries_are_independent() {
    let mut first = Registry::new();
    let mut second = Registry::new();
    let a = first.next(&loc_at(0));
    let b = second.next(&loc_at(3));
    assert_eq!(a, b);
    assert_eq!(first.source_map().get(a), Some(&loc_at(0)));
    assert_eq!(second.source_map().get(b), Some(&loc_at(3)));
}

#[test]
fn entries_are_sorted_by_id() {
    let mut registry = Registry::new();
    for line in 0..20 {
        registry.next(&loc_at(line));
    }
    let map = registry.into_source_map();
    let ids: Vec<_> = map.entries().into_iter().map(|(id, _)| id.raw()).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}
