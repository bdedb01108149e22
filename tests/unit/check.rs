//! Tests for the returning entry points.

use super::common::Simulated;
use std::cell::RefCell;
use inv::{check, holds, succeeds, Checker, Failure, Invariant, InvariantError, Predicate};

fn single_failure(predicate: Predicate<'static>) -> InvariantError {
    Checker::new()
        .invariants("expected failure")
        .invariant("subject", predicate)
        .check()
        .unwrap_err()
}

#[test]
fn test_check_all_shapes_hold() {
    let nil_err: Option<Simulated> = None;

    let result = check!("valid",
        "err function" => succeeds(|| Ok::<(), Simulated>(())),
        "err value" => nil_err,
        "bool function" => holds(|| true),
        "bool value" => true,
        "nil value" => (),
    );
    assert!(result.is_ok());
}

#[test]
fn test_check_each_shape_fails() {
    let cases: Vec<(&str, Predicate<'static>)> = vec![
        ("err function", succeeds(|| Err::<(), _>(Simulated("simulated")))),
        ("err value", Err::<(), _>(Simulated("simulated")).into()),
        ("bool function", holds(|| false)),
        ("bool value", false.into()),
    ];

    for (id, predicate) in cases {
        let err = single_failure(predicate);
        assert_eq!(err.len(), 1, "{id}");
    }
}

#[test]
fn test_check_fail_mixed() {
    let err = check!("trigger values",
        "err value" => Err::<(), _>(Simulated("simulated")),
        "failing check" => holds(|| false),
        "passing check" => true,
        "nil value" => (),
    )
    .unwrap_err();

    assert_eq!(err.len(), 2);
    assert!(err.failures()[0]
        .to_string()
        .ends_with("invariant mismatch: trigger values: err value: simulated"));
    assert!(err.failures()[1]
        .to_string()
        .ends_with("invariant mismatch: trigger values: failing check"));
}

#[test]
fn test_non_empty_scenario() {
    let err = check!("io", "non-empty" => false).unwrap_err();
    assert_eq!(err.len(), 1);
    assert!(err.to_string().ends_with("invariant mismatch: io: non-empty"));
}

#[test]
fn test_multi_scenario() {
    let err = check!("multi",
        "a" => false,
        "b" => true,
        "c" => holds(|| false),
    )
    .unwrap_err();

    let names: Vec<_> = err.iter().map(Failure::invariant).collect();
    assert_eq!(names, ["a", "c"]);
}

#[test]
fn test_single_failure_message_is_exact() {
    let err = check!("io", "non-empty" => false).unwrap_err();
    assert_eq!(err.to_string(), err.failures()[0].to_string());
    assert!(!err.to_string().contains('\n'));
}

#[test]
fn test_multi_failure_message_is_joined() {
    let err = check!("g", "a" => false, "b" => false, "c" => false).unwrap_err();
    let lines: Vec<String> = err.iter().map(ToString::to_string).collect();
    assert_eq!(err.to_string(), lines.join("\n"));
    assert!(!err.to_string().ends_with('\n'));
}

#[test]
fn test_message_starts_with_caller() {
    let (line, result) = (line!(), check!("io", "non-empty" => false));
    let err = result.unwrap_err();
    let expected = format!("{}:{}: invariant mismatch: io: non-empty", file!(), line);
    assert_eq!(err.to_string(), expected);
}

#[test]
fn test_debug_tier_title() {
    let checker = Checker::new();
    let err = check!(on &checker, "g", "_ guarded" => false).unwrap_err();
    let failure = &err.failures()[0];

    assert!(failure.is_debug());
    assert_eq!(failure.invariant(), "guarded");
    assert!(failure
        .to_string()
        .ends_with("(debug) invariant mismatch: g: guarded"));
}

#[test]
fn test_evaluation_continues_after_failure() {
    let checker = Checker::new();
    let seen = RefCell::new(Vec::new());
    let _ = checker
        .invariants("g")
        .holds("first", || {
            seen.borrow_mut().push(1);
            false
        })
        .holds("second", || {
            seen.borrow_mut().push(2);
            false
        })
        .holds("third", || {
            seen.borrow_mut().push(3);
            true
        })
        .check();
    assert_eq!(seen.into_inner(), [1, 2, 3]);
}

#[test]
fn test_check_function_with_invariant_list() {
    let checker = Checker::new();
    let list = vec![
        Invariant::new("a", true),
        Invariant::new(String::from("b"), holds(|| "b".is_empty())),
    ];
    let err = checker.check("functions", list).unwrap_err();
    assert_eq!(err.failures()[0].invariant(), "b");

    assert!(inv::check("tuples", [("x", true), ("y", true)]).is_ok());
}

#[test]
fn test_anyhow_errors_convert() {
    let err = check!("anyhow",
        "value" => Err::<(), _>(anyhow::anyhow!("from anyhow")),
        "closure" => succeeds(|| -> anyhow::Result<u8> { anyhow::bail!("bailed") }),
    )
    .unwrap_err();

    assert!(err.failures()[0].to_string().ends_with("value: from anyhow"));
    assert!(err.failures()[1].to_string().ends_with("closure: bailed"));
}

#[test]
fn test_reports_serialize() {
    let err = check!("io", "has-cause" => Err::<(), _>(Simulated("boom"))).unwrap_err();
    let json = serde_json::to_value(err.reports()).unwrap();

    assert_eq!(json[0]["group"], "io");
    assert_eq!(json[0]["invariant"], "has-cause");
    assert_eq!(json[0]["cause"], "boom");
    assert_eq!(json[0]["debug"], false);
    assert!(json[0]["caller"].as_str().unwrap().starts_with(file!()));
}
