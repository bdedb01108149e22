// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flat, untyped argument lists: `name, predicate, name, predicate, ...`.
//!
//! Useful when invariants are assembled at runtime (from tables, plugins,
//! scripting bridges) and their shapes are not known statically. Build the list
//! with [`args!`](crate::args).
//!
//! The whole list is validated before any predicate runs:
//!
//! - odd length → [`CheckError::Unpaired`]
//! - empty name → [`CheckError::EmptyName`]
//! - a name that is not `&'static str` or `String` → panic
//! - a predicate of an unsupported type → panic
//!
//! Accepted predicate types: [`Predicate<'static>`](Predicate) (so
//! [`holds`](crate::holds) and [`succeeds`](crate::succeeds) work), `()`,
//! `bool`, [`BoxError`], `Option<BoxError>`, `Result<(), BoxError>`,
//! `Box<dyn FnOnce() -> bool>` and `Box<dyn FnOnce() -> Result<(), BoxError>>`.
//! A bare closure is not accepted; wrap it with `holds`/`succeeds`.

use std::any::Any;
use std::borrow::Cow;

use crate::caller::Caller;
use crate::engine::{checker, Checker};
use crate::error::{BoxError, CheckError};
use crate::name::InvariantName;
use crate::predicate::{Invariant, Predicate};
use crate::require::abort;

/// One element of a flat argument list.
pub type Arg = Box<dyn Any>;

const ACCEPTED: &str = "Predicate, (), bool, BoxError, Option<BoxError>, \
    Result<(), BoxError>, Box<dyn FnOnce() -> bool>, \
    Box<dyn FnOnce() -> Result<(), BoxError>>";

fn take<T: 'static>(value: Arg) -> Result<T, Arg> {
    value.downcast::<T>().map(|boxed| *boxed)
}

#[track_caller]
fn name_at(position: usize, value: Arg) -> Cow<'static, str> {
    let value = match take::<&'static str>(value) {
        Ok(name) => return Cow::Borrowed(name),
        Err(value) => value,
    };
    match take::<String>(value) {
        Ok(name) => Cow::Owned(name),
        Err(_) => panic!("invariant name must be a string (argument {})", position),
    }
}

#[track_caller]
fn predicate_for(name: &InvariantName<'_>, value: Arg) -> Predicate<'static> {
    let value = match take::<Predicate<'static>>(value) {
        Ok(predicate) => return predicate,
        Err(value) => value,
    };
    let value = match take::<()>(value) {
        Ok(()) => return Predicate::Absent,
        Err(value) => value,
    };
    let value = match take::<bool>(value) {
        Ok(b) => return Predicate::Bool(b),
        Err(value) => value,
    };
    let value = match take::<BoxError>(value) {
        Ok(err) => return Predicate::Error(err),
        Err(value) => value,
    };
    let value = match take::<Option<BoxError>>(value) {
        Ok(err) => return err.into(),
        Err(value) => value,
    };
    let value = match take::<Result<(), BoxError>>(value) {
        Ok(result) => return result.into(),
        Err(value) => value,
    };
    let value = match take::<Box<dyn FnOnce() -> bool>>(value) {
        Ok(f) => return Predicate::Holds(f),
        Err(value) => value,
    };
    match take::<Box<dyn FnOnce() -> Result<(), BoxError>>>(value) {
        Ok(f) => Predicate::Succeeds(f),
        Err(_) => panic!(
            "invalid value type for invariant: {}: expected one of {}",
            name, ACCEPTED
        ),
    }
}

#[track_caller]
fn parse(args: Vec<Arg>) -> Result<Vec<Invariant<'static>>, CheckError> {
    if args.len() % 2 != 0 {
        return Err(CheckError::Unpaired { len: args.len() });
    }

    let mut invariants = Vec::with_capacity(args.len() / 2);
    let mut args = args.into_iter().enumerate();
    while let (Some((position, name)), Some((_, value))) = (args.next(), args.next()) {
        let name = InvariantName::parse(name_at(position, name))
            .map_err(|_| CheckError::EmptyName { position })?;
        let predicate = predicate_for(&name, value);
        invariants.push(Invariant { name, predicate });
    }
    Ok(invariants)
}

impl Checker {
    /// Check a flat `name, predicate, ...` list.
    ///
    /// ```
    /// use inv::{args, holds, CheckError, Checker};
    ///
    /// let checker = Checker::new();
    /// let err = checker
    ///     .check_args("multi", args!["a", false, "b", true, "c", holds(|| false)])
    ///     .unwrap_err();
    /// assert_eq!(err.violation().unwrap().len(), 2);
    ///
    /// let err = checker.check_args("multi", args!["a", false, "b"]).unwrap_err();
    /// assert!(matches!(err, CheckError::Unpaired { len: 3 }));
    /// ```
    #[track_caller]
    pub fn check_args(&self, group: &str, args: Vec<Arg>) -> Result<(), CheckError> {
        let caller = Caller::capture();
        let invariants = parse(args)?;
        Ok(self.evaluate(group, caller, invariants)?)
    }

    /// [`Checker::check_args`], panicking on failure.
    ///
    /// Structural errors panic with their message; invariant failures panic
    /// with the [`InvariantError`](crate::InvariantError) as payload.
    #[track_caller]
    pub fn require_args(&self, group: &str, args: Vec<Arg>) {
        match self.check_args(group, args) {
            Ok(()) => {}
            Err(CheckError::Violated(err)) => abort(err),
            Err(err) => panic!("{}", err),
        }
    }
}

/// Check a flat argument list on the process-wide checker.
#[track_caller]
pub fn check_args(group: &str, args: Vec<Arg>) -> Result<(), CheckError> {
    checker().check_args(group, args)
}

/// [`check_args`], panicking on failure.
#[track_caller]
pub fn require_args(group: &str, args: Vec<Arg>) {
    checker().require_args(group, args);
}
