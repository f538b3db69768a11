use std::collections::{BTreeMap, HashMap};

use shapediff::Introspect;
use shapediff_diff::diff;
use shapediff_testhelpers::test;

fn map<const N: usize>(entries: [(&'static str, i32); N]) -> HashMap<&'static str, i32> {
    entries.into_iter().collect()
}

#[test]
fn equal_maps_have_no_difference() {
    assert!(diff(&map([("a", 1), ("b", 2)]), &map([("b", 2), ("a", 1)])).is_empty());
}

#[test]
fn value_key_set_differences_are_partitioned() {
    let messages = diff(&map([("a", 1), ("b", 2)]), &map([("a", 5), ("c", 3)]));
    assert_eq!(
        messages,
        [
            "Key a:\n|\tExpected: 1\n|\tReceived: 5\n",
            "Missing key pairs:\n|\tb: 2\n",
            "Extra key pairs:\n|\tc: 3\n",
        ]
    );
}

#[test]
fn key_pairs_are_sorted() {
    let messages = diff(
        &map([("k", 0), ("z", 26), ("m", 13)]),
        &map([("k", 0), ("y", 25), ("b", 2)]),
    );
    assert_eq!(
        messages,
        [
            "Missing key pairs:\n|\tm: 13\n|\tz: 26\n",
            "Extra key pairs:\n|\tb: 2\n|\ty: 25\n",
        ]
    );
}

#[test]
fn value_differences_are_sorted_by_key() {
    let messages = diff(
        &map([("zulu", 1), ("alpha", 1), ("mike", 1)]),
        &map([("zulu", 2), ("alpha", 2), ("mike", 1)]),
    );
    assert_eq!(
        messages,
        [
            "Key alpha:\n|\tExpected: 1\n|\tReceived: 2\n",
            "Key zulu:\n|\tExpected: 1\n|\tReceived: 2\n",
        ]
    );
}

#[test]
fn different_sizes_are_a_count_mismatch() {
    let messages = diff(&map([("a", 1)]), &map([("a", 1), ("b", 2)]));
    assert_eq!(
        messages,
        [concat!(
            "Different count:\n",
            "|\tReceived: (2) {\"a\": 1, \"b\": 2}\n",
            "|\tExpected: (1) {\"a\": 1}\n",
        )]
    );
}

#[test]
fn values_recurse() {
    #[derive(Introspect)]
    struct Limits {
        soft: u32,
        hard: u32,
    }

    let mut expected = BTreeMap::new();
    expected.insert(1u16, Limits { soft: 10, hard: 20 });
    let mut received = BTreeMap::new();
    received.insert(1u16, Limits { soft: 10, hard: 30 });

    assert_eq!(
        diff(&expected, &received),
        ["Key 1:\n|\thard:\n|\t|\tExpected: 20\n|\t|\tReceived: 30\n"]
    );
}

#[test]
fn hash_and_btree_maps_agree() {
    let hashed = (map([("a", 1), ("b", 2)]), map([("a", 2), ("c", 2)]));
    let ordered: (BTreeMap<_, _>, BTreeMap<_, _>) = (
        hashed.0.clone().into_iter().collect(),
        hashed.1.clone().into_iter().collect(),
    );
    assert_eq!(diff(&hashed.0, &hashed.1), diff(&ordered.0, &ordered.1));
}
