use std::collections::{BTreeMap, BTreeSet};

use indoc::indoc;
use insta::assert_snapshot;
use shapediff::Introspect;
use shapediff_diff::{DiffOptions, Labels, diff, diff_with};
use shapediff_testhelpers::test;

#[derive(Introspect)]
struct Image {
    repository: &'static str,
    tag: &'static str,
}

#[derive(Introspect)]
enum Strategy {
    #[allow(dead_code)]
    Recreate,
    RollingUpdate { max_surge: u8, max_unavailable: u8 },
}

#[derive(Introspect)]
struct Deployment {
    name: &'static str,
    replicas: u8,
    image: Image,
    env: BTreeMap<&'static str, &'static str>,
    ports: Vec<u16>,
    labels: BTreeSet<&'static str>,
    strategy: Strategy,
    timeout: Option<u32>,
}

fn current() -> Deployment {
    Deployment {
        name: "api",
        replicas: 3,
        image: Image {
            repository: "registry/api",
            tag: "1.4.0",
        },
        env: [("LOG", "info"), ("PORT", "8080")].into_iter().collect(),
        ports: vec![80, 443],
        labels: ["prod", "web"].into_iter().collect(),
        strategy: Strategy::RollingUpdate {
            max_surge: 1,
            max_unavailable: 0,
        },
        timeout: Some(30),
    }
}

fn next() -> Deployment {
    Deployment {
        name: "api",
        replicas: 5,
        image: Image {
            repository: "registry/api",
            tag: "1.5.0",
        },
        env: [("LOG", "debug"), ("REGION", "eu")].into_iter().collect(),
        ports: vec![80, 443, 8443],
        labels: ["prod", "canary"].into_iter().collect(),
        strategy: Strategy::RollingUpdate {
            max_surge: 2,
            max_unavailable: 0,
        },
        timeout: None,
    }
}

#[test]
fn deployment_report() {
    let messages = diff(&current(), &next());
    assert_eq!(messages.len(), 7);
    assert_snapshot!(messages.concat(), @r"
    env:
    |	Key LOG:
    |	|	Expected: info
    |	|	Received: debug
    |	Missing key pairs:
    |	|	PORT: 8080
    |	Extra key pairs:
    |	|	REGION: eu
    image:
    |	tag:
    |	|	Expected: 1.4.0
    |	|	Received: 1.5.0
    labels:
    |	Extra: canary
    |	Missing: web
    ports:
    |	Different count:
    |	|	Received: (3) [80, 443, 8443]
    |	|	Expected: (2) [80, 443]
    replicas:
    |	Expected: 3
    |	Received: 5
    strategy:
    |	max_surge:
    |	|	Expected: 1
    |	|	Received: 2
    timeout:
    |	Expected: Some(30)
    |	Received: None
    ");
}

#[test]
fn state_comparison_report() {
    let options = DiffOptions::new()
        .labels(Labels::state_comparison())
        .skip_value_on_count_mismatch(true);
    let messages = diff_with(&current(), &next(), &options);
    assert_eq!(
        messages[0],
        indoc! {"
            env:
            |\tKey LOG:
            |\t|\tPrevious: info
            |\t|\tCurrent: debug
            |\tRemoved key pairs:
            |\t|\tPORT: 8080
            |\tAdded key pairs:
            |\t|\tREGION: eu
        "}
    );
    assert_eq!(
        messages[3],
        indoc! {"
            ports:
            |\tDifferent count:
            |\t|\tCurrent: (3)
            |\t|\tPrevious: (2)
        "}
    );
}

#[test]
fn identical_deployments() {
    assert!(diff(&current(), &current()).is_empty());
}
