//! End-to-end tests for the term-encoding and ordered-lookup substrate.
//!
//! These tests exercise the path the trie itself drives: UTF-8 terms become
//! folded rune keys, a sibling array is kept sorted and duplicate-free
//! through the locator family, and lookups go through the same comparator
//! the array was ordered by.

use std::cmp::Ordering;

use tamarix_trie_index::{
    FieldDescriptor, FieldTypes, RuneBuffer, ValueKind, locate_eq, locate_ge, locate_le,
};

type Key = RuneBuffer;

fn key(term: &str) -> Key {
    RuneBuffer::from_str(term, true)
}

/// Inserts `term` into a sorted, duplicate-free key array, the way the trie
/// maintains a node's children. Returns false when the key was already
/// present.
fn insert_key(keys: &mut Vec<Key>, term: &str) -> bool {
    let new_key = key(term);
    if keys.is_empty() {
        keys.push(new_key);
        return true;
    }
    let sign = |e: &Key| new_key.compare(e);
    if locate_eq(keys, sign).is_some() {
        return false;
    }
    let position = locate_ge(keys, sign);
    keys.insert(position, new_key);
    true
}

fn find_key(keys: &[Key], term: &str) -> Option<usize> {
    if keys.is_empty() {
        return None;
    }
    let probe = key(term);
    locate_eq(keys, |e| probe.compare(e))
}

#[test]
fn test_sibling_array_construction_and_lookup() {
    let terms = [
        "zebra", "apple", "Mango", "pear", "apricot", "banana", "fig", "cherry",
    ];
    let mut keys = Vec::new();
    for term in terms {
        assert!(insert_key(&mut keys, term), "first insert of {term}");
    }
    assert_eq!(keys.len(), terms.len());

    // The array is strictly ascending with no duplicates.
    for pair in keys.windows(2) {
        assert_eq!(pair[0].compare(&pair[1]), Ordering::Less);
    }

    // Every term is found regardless of query case or accents.
    assert!(find_key(&keys, "mango").is_some());
    assert!(find_key(&keys, "MANGO").is_some());
    assert!(find_key(&keys, "mängo").is_some());
    assert!(find_key(&keys, "papaya").is_none());

    // Re-inserting a case variant is a duplicate.
    assert!(!insert_key(&mut keys, "APPLE"));
    assert_eq!(keys.len(), terms.len());
}

#[test]
fn test_randomized_sibling_array_stays_sorted() {
    let mut rng = fastrand::Rng::with_seed(0x7A11);
    let mut keys = Vec::new();
    let mut inserted = std::collections::BTreeSet::new();
    for _ in 0..300 {
        let len = rng.usize(1..8);
        let term: String = (0..len).map(|_| char::from(rng.u8(b'a'..=b'f'))).collect();
        let fresh = insert_key(&mut keys, &term);
        assert_eq!(fresh, inserted.insert(term.clone()), "insert of {term}");
        assert!(find_key(&keys, &term).is_some());
    }
    assert_eq!(keys.len(), inserted.len());
    let stored: Vec<String> = keys.iter().map(|k| k.to_string_lossy()).collect();
    let expected: Vec<String> = inserted.into_iter().collect();
    assert_eq!(stored, expected);
}

#[test]
fn test_locator_boundaries_around_present_key() {
    let mut keys = Vec::new();
    for term in ["alpha", "delta", "omega"] {
        insert_key(&mut keys, term);
    }
    let probe = key("delta");
    let sign = |e: &Key| probe.compare(e);

    assert_eq!(locate_eq(&keys, sign), Some(1));
    // The ge/le searches step past an exact match instead of returning it.
    assert_eq!(locate_ge(&keys, sign), 2);
    assert_eq!(locate_le(&keys, sign), Some(0));

    let below = key("aardvark");
    assert_eq!(locate_ge(&keys, |e| below.compare(e)), 0);
    assert_eq!(locate_le(&keys, |e| below.compare(e)), None);

    let above = key("zulu");
    assert_eq!(locate_ge(&keys, |e| above.compare(e)), keys.len());
    assert_eq!(locate_le(&keys, |e| above.compare(e)), Some(keys.len() - 1));
}

#[test]
fn test_locators_over_sorted_numeric_values() {
    // The same locators maintain sorted per-field value arrays, e.g. for
    // numeric fields feeding sort-by-value storage.
    let values = [1.5f64, 2.25, 8.0, 32.5];
    let target = 8.0f64;
    let sign = |e: &f64| target.partial_cmp(e).expect("comparable values");
    assert_eq!(locate_eq(&values, sign), Some(2));
    assert_eq!(locate_ge(&values, sign), 3);

    let absent = 3.0f64;
    assert_eq!(locate_ge(&values, |e| absent.partial_cmp(e).unwrap()), 2);
    assert_eq!(locate_le(&values, |e| absent.partial_cmp(e).unwrap()), Some(1));
}

#[test]
fn test_schema_selects_orderable_fields() {
    let mut title = FieldDescriptor::new(0, "title");
    title.initialize(FieldTypes::FULLTEXT);
    title.set_sortable(0);

    let mut price = FieldDescriptor::new(1, "price");
    price.initialize(FieldTypes::NUMERIC);
    price.set_sortable(1);

    let mut location = FieldDescriptor::new(2, "location");
    location.initialize(FieldTypes::GEO);

    let fields = [title, price, location];
    let orderable: Vec<&FieldDescriptor> = fields
        .iter()
        .filter(|f| f.is_sortable() && f.value_kind() != ValueKind::NotOrderable)
        .collect();
    assert_eq!(orderable.len(), 2);
    assert_eq!(orderable[0].value_kind(), ValueKind::String);
    assert_eq!(orderable[1].value_kind(), ValueKind::Number);

    // Geo fields never participate, sortable or not.
    assert_eq!(fields[2].value_kind(), ValueKind::NotOrderable);
}

#[test]
fn test_long_term_keys_cross_storage_modes() {
    // Term keys crossing the inline threshold still order and match
    // correctly next to short inline keys.
    let long_low = "a".repeat(200);
    let long_high = "b".repeat(200);
    let mut keys = Vec::new();
    for term in [long_high.as_str(), "m", long_low.as_str(), "z"] {
        insert_key(&mut keys, term);
    }
    let stored: Vec<String> = keys.iter().map(|k| k.to_string_lossy()).collect();
    assert_eq!(
        stored,
        [long_low.clone(), long_high, "m".to_string(), "z".to_string()]
    );
    assert!(find_key(&keys, &long_low.to_uppercase()).is_some());
}
