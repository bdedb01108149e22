//! Tests for flat, untyped argument lists.

use super::common::{invariant_panic, Simulated};
use inv::{args, check_args, holds, require_args, succeeds, BoxError, CheckError, Checker};

#[test]
fn test_multi_scenario() {
    let err = check_args("multi", args!["a", false, "b", true, "c", holds(|| false)]).unwrap_err();

    let violation = err.violation().unwrap();
    assert_eq!(violation.len(), 2);
    assert_eq!(violation.failures()[0].invariant(), "a");
    assert_eq!(violation.failures()[1].invariant(), "c");
}

#[test]
fn test_odd_lengths_are_structural() {
    let checker = Checker::new();
    for list in [args!["a"], args!["a", true, "b"], args!["a", false, "b", false, "c"]] {
        let len = list.len();
        let err = checker.check_args("g", list).unwrap_err();
        assert!(err.is_structural());
        assert!(matches!(err, CheckError::Unpaired { len: l } if l == len));
    }
}

#[test]
fn test_empty_list_holds() {
    assert!(Checker::new().check_args("g", args![]).is_ok());
}

#[test]
fn test_error_value_cause_is_reachable() {
    let cause: BoxError = Box::new(Simulated("boom"));
    let err = Checker::new()
        .check_args("io", args!["has-cause", cause])
        .unwrap_err();

    let violation = err.violation().unwrap();
    assert!(err.to_string().ends_with("invariant mismatch: io: has-cause: boom"));
    assert_eq!(violation.find_cause::<Simulated>(), Some(&Simulated("boom")));
}

#[test]
fn test_require_args_payload() {
    let checker = Checker::new();
    let err = invariant_panic(|| {
        checker.require_args("g", args!["a", succeeds(|| Err::<(), _>(Simulated("x")))]);
    });
    assert_eq!(err.len(), 1);

    require_args("g", args!["a", true]);
}

#[test]
fn test_debug_marker_in_owned_name() {
    let checker = Checker::new();
    let name = format!("_ {}", "dynamic");
    let err = checker.check_args("g", args![name, false]).unwrap_err();
    assert!(err.violation().unwrap().failures()[0].is_debug());

    checker.disable_debug_tier();
    let name = format!("_ {}", "dynamic");
    assert!(checker.check_args("g", args![name, false]).is_ok());
}

#[test]
#[should_panic(expected = "invalid value type for invariant: closure")]
fn test_bare_closure_is_rejected() {
    let _ = Checker::new().check_args("g", args!["closure", || true]);
}
