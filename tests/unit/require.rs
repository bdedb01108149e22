//! Tests for the panicking entry points.

use super::common::{invariant_panic, Simulated};
use inv::{holds, require, succeeds, Checker, Predicate};

#[test]
fn test_require_all_hold() {
    let nil_err: Option<Simulated> = None;

    require!("valid",
        "err function" => succeeds(|| Ok::<(), Simulated>(())),
        "err value" => nil_err,
        "bool function" => holds(|| true),
        "bool value" => true,
        "nil value" => (),
    );
    require("valid", [("a", true)]);
}

fn failing(id: &str) -> Predicate<'static> {
    match id {
        "err function" => succeeds(|| Err::<(), _>(Simulated("simulated"))),
        "err value" => Err::<(), _>(Simulated("simulated")).into(),
        "bool function" => holds(|| false),
        _ => false.into(),
    }
}

#[test]
fn test_require_panics_for_each_shape() {
    for id in ["err function", "err value", "bool function", "bool value"] {
        let err = invariant_panic(|| {
            Checker::new()
                .invariants("expected failure")
                .invariant(id, failing(id))
                .require();
        });
        assert_eq!(err.failures()[0].invariant(), id);
    }
}

#[test]
fn test_require_payload_keeps_every_failure() {
    let checker = Checker::new();
    let err = invariant_panic(|| {
        require!(on &checker, "multi",
            "a" => false,
            "b" => true,
            "c" => holds(|| false),
        );
    });

    assert_eq!(err.len(), 2);
    assert_eq!(err.failures()[1].invariant(), "c");
}

#[test]
fn test_require_caller_is_call_site() {
    let checker = Checker::new();
    let mut line = 0;
    let err = invariant_panic(|| {
        line = line!(); checker.require("g", [("x", false)]);
    });
    assert_eq!(err.failures()[0].caller().line(), line);
}
