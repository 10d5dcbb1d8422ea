use super::*;
use crate::records::testing::flight;

#[test]
fn universes_are_sorted_and_unique() {
    let store = RecordStore::new(vec![
        flight(1, "UA", "ORD", "ATL", 0, 5.0),
        flight(2, "AA", "ATL", "DFW", 1, 5.0),
        flight(3, "UA", "DEN", "ORD", 2, 5.0),
    ])
    .unwrap();
    assert_eq!(store.carriers(), vec!["AA", "UA"]);
    assert_eq!(store.airports(), vec!["ATL", "DEN", "DFW", "ORD"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn rejects_duplicate_ids() {
    let err = RecordStore::new(vec![
        flight(1, "AA", "ATL", "DFW", 0, 5.0),
        flight(1, "DL", "LAX", "ORD", 0, 5.0),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate record id 1"));
}

#[test]
fn rejects_invalid_record() {
    assert!(RecordStore::new(vec![flight(1, "AA", "ATL", "ATL", 0, 5.0)]).is_err());
}

#[test]
fn json_roundtrip_preserves_order() {
    let store = RecordStore::new(vec![
        flight(7, "AA", "ATL", "DFW", 3, 12.0),
        flight(3, "DL", "LAX", "ORD", 4, 40.0),
    ])
    .unwrap();
    let s = store.to_json_string().unwrap();
    let back = RecordStore::from_json_str(&s).unwrap();
    let ids: Vec<u64> = back.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![7, 3]);
}

#[test]
fn empty_store_is_valid() {
    let store = RecordStore::default();
    assert!(store.is_empty());
    assert!(store.carriers().is_empty());
}
