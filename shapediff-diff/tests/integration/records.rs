use shapediff::Introspect;
use shapediff_diff::diff;
use shapediff_testhelpers::test;

#[derive(Introspect)]
struct Account {
    owner: String,
    balance: i64,
}

#[derive(Introspect)]
struct Address {
    city: String,
    zip: u32,
}

#[derive(Introspect)]
struct Customer {
    name: String,
    address: Address,
}

#[derive(Introspect)]
struct Order {
    customer: Customer,
    total: u64,
}

fn order(city: &str, total: u64) -> Order {
    Order {
        customer: Customer {
            name: "ada".into(),
            address: Address {
                city: city.into(),
                zip: 75001,
            },
        },
        total,
    }
}

#[test]
fn identical_records_have_no_difference() {
    let a = Account {
        owner: "ada".into(),
        balance: 10,
    };
    let b = Account {
        owner: "ada".into(),
        balance: 10,
    };
    assert!(diff(&a, &b).is_empty());
}

#[test]
fn single_field_difference_names_the_field() {
    let a = Account {
        owner: "ada".into(),
        balance: 10,
    };
    let b = Account {
        owner: "ada".into(),
        balance: 12,
    };
    assert_eq!(diff(&a, &b), ["balance:\n|\tExpected: 10\n|\tReceived: 12\n"]);
}

#[test]
fn text_leaves_are_unquoted() {
    let a = Account {
        owner: "ada".into(),
        balance: 1,
    };
    let b = Account {
        owner: "grace".into(),
        balance: 1,
    };
    assert_eq!(diff(&a, &b), ["owner:\n|\tExpected: ada\n|\tReceived: grace\n"]);
}

#[test]
fn nested_differences_get_one_message_per_top_level_field() {
    let messages = diff(&order("Paris", 10), &order("Lyon", 11));
    assert_eq!(
        messages,
        [
            "customer:\n|\taddress:\n|\t|\tcity:\n|\t|\t|\tExpected: Paris\n|\t|\t|\tReceived: Lyon\n",
            "total:\n|\tExpected: 10\n|\tReceived: 11\n",
        ]
    );
}

#[test]
fn fields_are_sorted_by_label() {
    #[derive(Introspect)]
    struct Flags {
        zeta: bool,
        alpha: bool,
    }

    let messages = diff(
        &Flags {
            zeta: true,
            alpha: true,
        },
        &Flags {
            zeta: false,
            alpha: false,
        },
    );
    assert_eq!(
        messages,
        [
            "alpha:\n|\tExpected: true\n|\tReceived: false\n",
            "zeta:\n|\tExpected: true\n|\tReceived: false\n",
        ]
    );
}

#[test]
fn tuple_struct_fields_are_positional() {
    #[derive(Introspect)]
    struct Rgb(u8, u8, u8);

    assert_eq!(
        diff(&Rgb(1, 2, 3), &Rgb(1, 2, 4)),
        [".2:\n|\tExpected: 3\n|\tReceived: 4\n"]
    );
}

#[test]
fn anonymous_tuples_are_positional() {
    assert_eq!(
        diff(&(1, "a"), &(1, "b")),
        [".1:\n|\tExpected: a\n|\tReceived: b\n"]
    );
}

#[test]
fn skipped_fields_are_ignored() {
    #[derive(Introspect)]
    struct Cached {
        key: u32,
        #[introspect(skip)]
        #[allow(dead_code)]
        hits: u64,
    }

    assert!(diff(&Cached { key: 1, hits: 10 }, &Cached { key: 1, hits: 99 }).is_empty());
}

#[test]
fn renamed_fields_use_their_new_label() {
    #[derive(Introspect)]
    struct Request {
        #[introspect(rename = "user-agent")]
        user_agent: &'static str,
    }

    assert_eq!(
        diff(
            &Request { user_agent: "curl" },
            &Request { user_agent: "wget" }
        ),
        ["user-agent:\n|\tExpected: curl\n|\tReceived: wget\n"]
    );
}

#[test]
fn unit_structs_never_differ() {
    #[derive(Introspect)]
    struct Marker;

    assert!(diff(&Marker, &Marker).is_empty());
}
