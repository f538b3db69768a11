use shapediff::Introspect;
use shapediff_diff::diff;
use shapediff_testhelpers::test;

#[derive(Introspect)]
struct Profile {
    name: &'static str,
    age: u8,
}

#[derive(Introspect)]
struct User {
    nickname: Option<String>,
}

#[test]
fn present_values_are_compared_transparently() {
    let x = Profile {
        name: "ada",
        age: 36,
    };
    let y = Profile {
        name: "ada",
        age: 37,
    };
    assert_eq!(diff(&Some(&x), &Some(&y)), diff(&x, &y));
    assert_eq!(diff(&Some(2), &Some(3)), diff(&2, &3));
}

#[test]
fn presence_mismatch() {
    assert_eq!(
        diff(&Some(1), &None),
        ["Expected: Some(1)\nReceived: None\n"]
    );
    assert_eq!(
        diff(&None, &Some("x")),
        ["Expected: None\nReceived: Some(\"x\")\n"]
    );
}

#[test]
fn absent_values_are_equal() {
    assert!(diff(&None::<u8>, &None).is_empty());
}

#[test]
fn optional_fields_do_not_add_a_level() {
    let a = User {
        nickname: Some("ace".into()),
    };
    let b = User {
        nickname: Some("bee".into()),
    };
    assert_eq!(
        diff(&a, &b),
        ["nickname:\n|\tExpected: ace\n|\tReceived: bee\n"]
    );
}

#[test]
fn nested_options() {
    assert_eq!(diff(&Some(Some(1)), &Some(Some(2))), diff(&1, &2));
    assert_eq!(
        diff(&Some(Some(1)), &Some(None)),
        ["Expected: Some(1)\nReceived: None\n"]
    );
}
