//! Shared test utilities and fixtures.

#![allow(dead_code)]

use inv::InvariantError;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

// ============================================================================
// ERRORS
// ============================================================================

/// A concrete error type so tests can check identity through the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulated(pub &'static str);

impl fmt::Display for Simulated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Simulated {}

// ============================================================================
// PANICS
// ============================================================================

/// Run `f`, expecting it to panic with an [`InvariantError`] payload.
pub fn invariant_panic(f: impl FnOnce()) -> InvariantError {
    let payload = catch_unwind(AssertUnwindSafe(f)).expect_err("expected a panic");
    match payload.downcast::<InvariantError>() {
        Ok(err) => *err,
        Err(_) => panic!("panic payload was not an InvariantError"),
    }
}

/// Run `f` and report whether it panicked.
pub fn panics(f: impl FnOnce()) -> bool {
    catch_unwind(AssertUnwindSafe(f)).is_err()
}
