// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The evaluation loop.
//!
//! One pass, in order, over every invariant of a call:
//!
//! 1. Capture the caller once (all entry points are `#[track_caller]`).
//! 2. Read the debug-tier switch once.
//! 3. Skip debug-tier invariants if the switch is off. Skipped predicates are
//!    never run.
//! 4. Evaluate everything else, even after a failure, so a single call reports
//!    every violation.
//! 5. No failures → `Ok(())`. Otherwise one [`InvariantError`] listing them in
//!    order.

use std::borrow::Cow;
use std::sync::OnceLock;

use crate::caller::Caller;
use crate::error::{BoxError, InvariantError};
use crate::failure::Failure;
use crate::mode::DebugTier;
use crate::predicate::{holds, succeeds, Invariant, Predicate, Verdict};

/// An evaluation context: owns the debug-tier switch its checks consult.
///
/// Most code uses the process-wide checker through the free functions and
/// macros. Construct a `Checker` to thread the switch explicitly, e.g. one per
/// subsystem or per test.
#[derive(Debug, Default)]
pub struct Checker {
    debug_tier: DebugTier,
}

impl Checker {
    /// A checker with the debug tier enabled.
    pub const fn new() -> Self {
        Self {
            debug_tier: DebugTier::new(),
        }
    }

    /// A checker whose debug tier starts as configured by
    /// [`INV_DEBUG_TIER`](crate::DEBUG_TIER_ENV).
    pub fn from_env() -> Self {
        Self {
            debug_tier: DebugTier::from_env(),
        }
    }

    pub fn debug_tier(&self) -> &DebugTier {
        &self.debug_tier
    }

    pub fn debug_tier_enabled(&self) -> bool {
        self.debug_tier.is_enabled()
    }

    /// Stop evaluating debug-tier invariants on this checker. Irreversible.
    pub fn disable_debug_tier(&self) -> bool {
        self.debug_tier.disable()
    }

    /// Start a builder bound to this checker.
    pub fn invariants<'a>(&'a self, group: impl Into<Cow<'a, str>>) -> Invariants<'a> {
        Invariants {
            checker: self,
            group: group.into(),
            invariants: Vec::new(),
        }
    }

    /// Check a group of invariants.
    ///
    /// ```
    /// use inv::{Checker, Invariant};
    ///
    /// let checker = Checker::new();
    /// let err = checker
    ///     .check("io", [Invariant::new("non-empty", false), Invariant::new("open", true)])
    ///     .unwrap_err();
    /// assert!(err.to_string().ends_with("invariant mismatch: io: non-empty"));
    /// ```
    #[track_caller]
    pub fn check<'a, I>(&self, group: &str, invariants: I) -> Result<(), InvariantError>
    where
        I: IntoIterator,
        I::Item: Into<Invariant<'a>>,
    {
        let caller = Caller::capture();
        self.evaluate(group, caller, invariants)
    }

    /// Conversion happens inside the loop so an empty-name panic from
    /// `Into<Invariant>` still points at the caller.
    #[track_caller]
    pub(crate) fn evaluate<'a, I>(
        &self,
        group: &str,
        caller: Caller,
        invariants: I,
    ) -> Result<(), InvariantError>
    where
        I: IntoIterator,
        I::Item: Into<Invariant<'a>>,
    {
        let debug_enabled = self.debug_tier.is_enabled();
        let mut failures = Vec::new();

        for item in invariants {
            let Invariant { name, predicate } = item.into();
            if name.is_debug() && !debug_enabled {
                tracing::trace!(group, invariant = name.as_str(), "skipped debug-tier invariant");
                continue;
            }

            if let Verdict::Fail(cause) = predicate.evaluate() {
                failures.push(Failure::from_parts(group.to_owned(), name, caller, cause));
            }
        }

        match InvariantError::from_failures(failures) {
            None => Ok(()),
            Some(err) => {
                tracing::debug!(group, failures = err.len(), %caller, "invariant check failed");
                Err(err)
            }
        }
    }
}

/// The process-wide checker.
///
/// Initialized on first use from [`INV_DEBUG_TIER`](crate::DEBUG_TIER_ENV).
pub fn checker() -> &'static Checker {
    static GLOBAL: OnceLock<Checker> = OnceLock::new();
    GLOBAL.get_or_init(Checker::from_env)
}

/// Check a group of invariants on the process-wide checker.
#[track_caller]
pub fn check<'a, I>(group: &str, invariants: I) -> Result<(), InvariantError>
where
    I: IntoIterator,
    I::Item: Into<Invariant<'a>>,
{
    checker().check(group, invariants)
}

/// Stop evaluating debug-tier invariants for the rest of the process.
///
/// Returns `true` if this call flipped the switch.
pub fn disable_debug_tier() -> bool {
    checker().disable_debug_tier()
}

pub fn debug_tier_enabled() -> bool {
    checker().debug_tier_enabled()
}

/// Builder for a group of invariants of mixed predicate shapes.
///
/// ```
/// use inv::Invariants;
///
/// let path = "";
/// let err = Invariants::new("multi")
///     .invariant("a", !path.is_empty())
///     .invariant("b", true)
///     .holds("c", || path.starts_with('/'))
///     .check()
///     .unwrap_err();
/// assert_eq!(err.len(), 2);
/// ```
#[must_use = "invariants are only evaluated by check, require or debug_require"]
#[derive(Debug)]
pub struct Invariants<'a> {
    pub(crate) checker: &'a Checker,
    pub(crate) group: Cow<'a, str>,
    pub(crate) invariants: Vec<Invariant<'a>>,
}

impl<'a> Invariants<'a> {
    /// A builder on the process-wide checker.
    pub fn new(group: impl Into<Cow<'a, str>>) -> Self {
        checker().invariants(group)
    }

    /// Add an invariant with any predicate shape.
    #[track_caller]
    pub fn invariant(
        mut self,
        name: impl Into<Cow<'a, str>>,
        predicate: impl Into<Predicate<'a>>,
    ) -> Self {
        self.invariants.push(Invariant::new(name, predicate));
        self
    }

    /// Add an invariant checked by calling `f` during evaluation.
    #[track_caller]
    pub fn holds<F>(self, name: impl Into<Cow<'a, str>>, f: F) -> Self
    where
        F: FnOnce() -> bool + 'a,
    {
        self.invariant(name, holds(f))
    }

    /// Add an invariant that holds when `f` returns `Ok`; the error is the cause.
    #[track_caller]
    pub fn succeeds<F, T, E>(self, name: impl Into<Cow<'a, str>>, f: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + 'a,
        T: 'a,
        E: Into<BoxError> + 'a,
    {
        self.invariant(name, succeeds(f))
    }

    pub fn push(&mut self, invariant: Invariant<'a>) {
        self.invariants.push(invariant);
    }

    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }

    /// Evaluate every invariant.
    #[track_caller]
    pub fn check(self) -> Result<(), InvariantError> {
        let caller = Caller::capture();
        self.checker.evaluate(&self.group, caller, self.invariants)
    }
}

impl<'a> Extend<Invariant<'a>> for Invariants<'a> {
    fn extend<I: IntoIterator<Item = Invariant<'a>>>(&mut self, iter: I) {
        self.invariants.extend(iter);
    }
}
