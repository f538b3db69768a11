use std::collections::VecDeque;

use shapediff::Introspect;
use shapediff_diff::{DiffOptions, diff, diff_with};
use shapediff_testhelpers::test;

#[test]
fn equal_sequences_have_no_difference() {
    assert!(diff(&vec![1, 2, 3], &vec![1, 2, 3]).is_empty());
    assert!(diff(&Vec::<u8>::new(), &Vec::new()).is_empty());
}

#[test]
fn element_difference_names_the_index() {
    assert_eq!(
        diff(&vec![1, 2, 3], &vec![1, 5, 3]),
        ["Collection[1]:\n|\tExpected: 2\n|\tReceived: 5\n"]
    );
}

#[test]
fn several_elements_are_reported_in_label_order() {
    let messages = diff(&vec!["a", "b", "c"], &vec!["x", "b", "y"]);
    assert_eq!(
        messages,
        [
            "Collection[0]:\n|\tExpected: a\n|\tReceived: x\n",
            "Collection[2]:\n|\tExpected: c\n|\tReceived: y\n",
        ]
    );
}

#[test]
fn different_lengths_are_a_single_count_block() {
    let messages = diff(&vec![1, 2, 3], &vec![9, 2]);
    assert_eq!(
        messages,
        ["Different count:\n|\tReceived: (2) [9, 2]\n|\tExpected: (3) [1, 2, 3]\n"]
    );
}

#[test]
fn count_block_can_omit_values() {
    let options = DiffOptions::new().skip_value_on_count_mismatch(true);
    let messages = diff_with(&vec![1, 2, 3], &vec![1], &options);
    assert_eq!(
        messages,
        ["Different count:\n|\tReceived: (1)\n|\tExpected: (3)\n"]
    );
}

#[test]
fn empty_and_non_empty_are_a_count_mismatch() {
    assert_eq!(
        diff(&Vec::<u8>::new(), &vec![7]),
        ["Different count:\n|\tReceived: (1) [7]\n|\tExpected: (0) []\n"]
    );
}

#[test]
fn arrays_slices_and_deques_behave_like_vectors() {
    assert_eq!(
        diff(&[1, 2], &[1, 3]),
        ["Collection[1]:\n|\tExpected: 2\n|\tReceived: 3\n"]
    );

    let expected: &[i32] = &[1, 2];
    let received: &[i32] = &[1, 2, 3];
    assert_eq!(diff(expected, received).len(), 1);
    assert!(diff(expected, received)[0].starts_with("Different count:\n"));

    let a: VecDeque<u8> = [1, 2].into_iter().collect();
    let b: VecDeque<u8> = [1, 4].into_iter().collect();
    assert_eq!(diff(&a, &b), ["Collection[1]:\n|\tExpected: 2\n|\tReceived: 4\n"]);
}

#[test]
fn records_inside_sequences_recurse() {
    #[derive(Introspect)]
    struct Item {
        sku: &'static str,
        quantity: u32,
    }

    let expected = vec![
        Item {
            sku: "A-1",
            quantity: 1,
        },
        Item {
            sku: "B-2",
            quantity: 2,
        },
    ];
    let received = vec![
        Item {
            sku: "A-1",
            quantity: 1,
        },
        Item {
            sku: "B-2",
            quantity: 3,
        },
    ];
    assert_eq!(
        diff(&expected, &received),
        ["Collection[1]:\n|\tquantity:\n|\t|\tExpected: 2\n|\t|\tReceived: 3\n"]
    );
}

#[test]
fn nested_count_mismatch_is_reported_in_place() {
    #[derive(Introspect)]
    struct Playlist {
        tracks: Vec<u32>,
    }

    let messages = diff(
        &Playlist {
            tracks: vec![1, 2],
        },
        &Playlist { tracks: vec![1] },
    );
    assert_eq!(
        messages,
        ["tracks:\n|\tDifferent count:\n|\t|\tReceived: (1) [1]\n|\t|\tExpected: (2) [1, 2]\n"]
    );
}
