// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes an invariant's condition can take.
//!
//! | Shape                                    | Holds when            | Cause         |
//! |------------------------------------------|-----------------------|---------------|
//! | [`Predicate::Absent`] (`()`, `Ok`, `None`)| always                | -             |
//! | [`Predicate::Bool`]                      | `true`                | -             |
//! | [`Predicate::Error`] (`Err`, `Some(e)`)  | never                 | the error     |
//! | [`Predicate::Holds`] ([`holds`])         | closure returns `true`| -             |
//! | [`Predicate::Succeeds`] ([`succeeds`])   | closure returns `Ok`  | the `Err`     |
//!
//! Closures are run at most once, during evaluation, and not at all when their
//! invariant is filtered out.

use std::borrow::Cow;
use std::fmt;

use crate::error::BoxError;
use crate::name::InvariantName;

/// The condition half of an invariant.
pub enum Predicate<'a> {
    /// Nothing to check.
    Absent,
    Bool(bool),
    /// An error value; its presence is the failure.
    Error(BoxError),
    /// Deferred boolean check.
    Holds(Box<dyn FnOnce() -> bool + 'a>),
    /// Deferred fallible check.
    Succeeds(Box<dyn FnOnce() -> Result<(), BoxError> + 'a>),
}

/// Result of evaluating one predicate.
pub(crate) enum Verdict {
    Pass,
    Fail(Option<BoxError>),
}

impl<'a> Predicate<'a> {
    pub(crate) fn evaluate(self) -> Verdict {
        match self {
            Predicate::Absent => Verdict::Pass,
            Predicate::Bool(true) => Verdict::Pass,
            Predicate::Bool(false) => Verdict::Fail(None),
            Predicate::Error(cause) => Verdict::Fail(Some(cause)),
            Predicate::Holds(f) => {
                if f() {
                    Verdict::Pass
                } else {
                    Verdict::Fail(None)
                }
            }
            Predicate::Succeeds(f) => match f() {
                Ok(()) => Verdict::Pass,
                Err(cause) => Verdict::Fail(Some(cause)),
            },
        }
    }
}

/// Defer a boolean check until evaluation.
pub fn holds<'a, F>(f: F) -> Predicate<'a>
where
    F: FnOnce() -> bool + 'a,
{
    Predicate::Holds(Box::new(f))
}

/// Defer a fallible check until evaluation. The error becomes the cause.
pub fn succeeds<'a, F, T, E>(f: F) -> Predicate<'a>
where
    F: FnOnce() -> Result<T, E> + 'a,
    T: 'a,
    E: Into<BoxError> + 'a,
{
    Predicate::Succeeds(Box::new(move || f().map(drop).map_err(Into::into)))
}

impl fmt::Debug for Predicate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Absent => f.write_str("Absent"),
            Predicate::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Predicate::Error(e) => f.debug_tuple("Error").field(e).finish(),
            Predicate::Holds(_) => f.write_str("Holds(..)"),
            Predicate::Succeeds(_) => f.write_str("Succeeds(..)"),
        }
    }
}

impl From<()> for Predicate<'_> {
    fn from((): ()) -> Self {
        Predicate::Absent
    }
}

impl From<bool> for Predicate<'_> {
    fn from(value: bool) -> Self {
        Predicate::Bool(value)
    }
}

impl<T, E: Into<BoxError>> From<Result<T, E>> for Predicate<'_> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(_) => Predicate::Absent,
            Err(e) => Predicate::Error(e.into()),
        }
    }
}

/// `None` is an absent error, `Some(e)` a present one.
impl<E: Into<BoxError>> From<Option<E>> for Predicate<'_> {
    fn from(value: Option<E>) -> Self {
        match value {
            None => Predicate::Absent,
            Some(e) => Predicate::Error(e.into()),
        }
    }
}

/// A named predicate.
#[derive(Debug)]
pub struct Invariant<'a> {
    pub(crate) name: InvariantName<'a>,
    pub(crate) predicate: Predicate<'a>,
}

impl<'a> Invariant<'a> {
    /// # Panics
    /// Panics if `name` is empty once the debug marker is stripped. An empty
    /// name is a programming error, not a failed invariant.
    #[track_caller]
    pub fn new(name: impl Into<Cow<'a, str>>, predicate: impl Into<Predicate<'a>>) -> Self {
        let name = match InvariantName::parse(name) {
            Ok(name) => name,
            Err(err) => panic!("{}", err),
        };
        Self {
            name,
            predicate: predicate.into(),
        }
    }

    pub fn name(&self) -> &InvariantName<'a> {
        &self.name
    }

    pub fn predicate(&self) -> &Predicate<'a> {
        &self.predicate
    }
}

impl<'a, P: Into<Predicate<'a>>> From<(&'a str, P)> for Invariant<'a> {
    #[track_caller]
    fn from((name, predicate): (&'a str, P)) -> Self {
        Invariant::new(name, predicate)
    }
}
