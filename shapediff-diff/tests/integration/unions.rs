use shapediff::Introspect;
use shapediff_diff::diff;
use shapediff_testhelpers::test;

#[derive(Introspect)]
enum Figure {
    Circle { radius: u32 },
    Rect(u32, u32),
    Empty,
    #[introspect(rename = "poly")]
    Polygon(Vec<(i32, i32)>),
}

#[test]
fn different_cases_show_only_their_labels() {
    assert_eq!(
        diff(&Figure::Circle { radius: 1 }, &Figure::Rect(1, 2)),
        ["Expected: Circle\nReceived: Rect\n"]
    );
    assert_eq!(
        diff(&Figure::Empty, &Figure::Rect(3, 4)),
        ["Expected: Empty\nReceived: Rect\n"]
    );
    assert_eq!(
        diff(&Figure::Polygon(vec![]), &Figure::Empty),
        ["Expected: poly\nReceived: Empty\n"]
    );
}

#[test]
fn same_case_recurses_into_positional_payload() {
    assert_eq!(
        diff(&Figure::Rect(1, 2), &Figure::Rect(1, 3)),
        [".1:\n|\tExpected: 2\n|\tReceived: 3\n"]
    );
}

#[test]
fn same_case_recurses_into_named_payload() {
    assert_eq!(
        diff(&Figure::Circle { radius: 1 }, &Figure::Circle { radius: 2 }),
        ["radius:\n|\tExpected: 1\n|\tReceived: 2\n"]
    );
}

#[test]
fn same_case_without_difference() {
    assert!(diff(&Figure::Empty, &Figure::Empty).is_empty());
    assert!(diff(&Figure::Rect(1, 1), &Figure::Rect(1, 1)).is_empty());
}

#[test]
fn payload_collections_nest_under_their_slot() {
    assert_eq!(
        diff(
            &Figure::Polygon(vec![(0, 0), (1, 1)]),
            &Figure::Polygon(vec![(0, 0), (1, 2)])
        ),
        [".0:\n|\tCollection[1]:\n|\t|\t.1:\n|\t|\t|\tExpected: 1\n|\t|\t|\tReceived: 2\n"]
    );
}

#[test]
fn results_are_unions() {
    let ok: Result<u8, &str> = Ok(1);
    let err: Result<u8, &str> = Err("boom");
    assert_eq!(diff(&ok, &err), ["Expected: Ok\nReceived: Err\n"]);
    assert_eq!(
        diff(&err, &Err("bang")),
        [".0:\n|\tExpected: boom\n|\tReceived: bang\n"]
    );
}

#[test]
fn unions_inside_sequences() {
    let messages = diff(
        &vec![Figure::Empty, Figure::Rect(1, 1)],
        &vec![Figure::Empty, Figure::Circle { radius: 1 }],
    );
    assert_eq!(
        messages,
        ["Collection[1]:\n|\tExpected: Rect\n|\tReceived: Circle\n"]
    );
}
