use std::collections::{BTreeMap, BTreeSet};

use shapediff::Introspect;
use shapediff_diff::{
    DiffOptions, IndentationStyle, IntrospectDiff, Labels, diff_tree, diff_with, render,
};
use shapediff_testhelpers::test;

#[derive(Introspect)]
struct Quota {
    used: u32,
    limit: u32,
}

#[test]
fn tab_indentation() {
    let options = DiffOptions::new().indentation(IndentationStyle::Tab);
    assert_eq!(
        diff_with(
            &Quota { used: 1, limit: 5 },
            &Quota { used: 2, limit: 5 },
            &options
        ),
        ["used:\n\tExpected: 1\n\tReceived: 2\n"]
    );
}

#[test]
fn state_comparison_labels_for_maps() {
    let before: BTreeMap<&str, u8> = [("cpu", 2), ("disk", 10)].into_iter().collect();
    let after: BTreeMap<&str, u8> = [("cpu", 4), ("gpu", 1)].into_iter().collect();
    let options = DiffOptions::new().labels(Labels::state_comparison());
    assert_eq!(
        before.diff_with(&after, &options),
        [
            "Key cpu:\n|\tPrevious: 2\n|\tCurrent: 4\n",
            "Removed key pairs:\n|\tdisk: 10\n",
            "Added key pairs:\n|\tgpu: 1\n",
        ]
    );
}

#[test]
fn state_comparison_labels_for_sets() {
    let before: BTreeSet<u8> = [1, 2, 3].into_iter().collect();
    let after: BTreeSet<u8> = [1, 2, 4].into_iter().collect();
    let options = DiffOptions::new().labels(Labels::state_comparison());
    assert_eq!(
        diff_with(&before, &after, &options),
        ["Added: 4\nRemoved: 3\n"]
    );
}

#[test]
fn custom_labels_apply_to_count_blocks() {
    let options = DiffOptions::new()
        .labels(Labels::new("Want", "Got", "Lacking", "Surplus"))
        .skip_value_on_count_mismatch(true);
    assert_eq!(
        diff_with(&vec!['a'], &vec!['a', 'b'], &options),
        ["Different count:\n|\tGot: (2)\n|\tWant: (1)\n"]
    );
}

#[test]
fn rendering_a_tree_matches_diff_with() {
    let options = DiffOptions::new().indentation(IndentationStyle::Tab);
    let expected = vec![Quota { used: 0, limit: 1 }, Quota { used: 3, limit: 4 }];
    let received = vec![Quota { used: 0, limit: 2 }, Quota { used: 3, limit: 5 }];

    let tree = diff_tree(&expected, &received, &options);
    assert_eq!(tree.len(), 2);
    assert!(tree.iter().all(|line| line.can_be_ordered() && line.has_children()));
    assert_eq!(render(&tree, &options), diff_with(&expected, &received, &options));
}
