// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One failed invariant.

use std::error::Error;
use std::fmt;

use crate::caller::Caller;
use crate::error::BoxError;
use crate::name::{EmptyName, InvariantName};
use crate::report::FailureReport;

const TITLE: &str = "invariant mismatch";
const DEBUG_TITLE: &str = "(debug) invariant mismatch";

/// A single invariant that did not hold.
///
/// Formats as `<caller>: <title>: <group>: <invariant>[: <cause>]`, where the
/// title is `invariant mismatch`, or `(debug) invariant mismatch` for
/// debug-tier invariants. [`Error::source`] returns the cause.
#[derive(Debug)]
pub struct Failure {
    invariant: String,
    group: String,
    caller: Caller,
    cause: Option<BoxError>,
    debug: bool,
}

impl Failure {
    /// Build a failure record by hand.
    ///
    /// The name goes through the same rules as names passed to the checker: a
    /// leading `"_ "` marks the failure as debug-tier and is stripped.
    pub fn new(group: impl Into<String>, name: &str, caller: Caller) -> Result<Self, EmptyName> {
        Ok(Self::from_parts(
            group.into(),
            InvariantName::parse(name)?,
            caller,
            None,
        ))
    }

    pub(crate) fn from_parts(
        group: String,
        name: InvariantName<'_>,
        caller: Caller,
        cause: Option<BoxError>,
    ) -> Self {
        Self {
            invariant: name.as_str().to_owned(),
            debug: name.is_debug(),
            group,
            caller,
            cause,
        }
    }

    /// Attach an underlying error.
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Name of the invariant, debug marker stripped.
    pub fn invariant(&self) -> &str {
        &self.invariant
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn caller(&self) -> Caller {
        self.caller
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Serializable view of this failure.
    pub fn report(&self) -> FailureReport<'_> {
        FailureReport {
            group: &self.group,
            invariant: &self.invariant,
            caller: self.caller.to_string(),
            cause: self.cause.as_ref().map(ToString::to_string),
            debug: self.debug,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.debug { DEBUG_TITLE } else { TITLE };
        write!(
            f,
            "{}: {}: {}: {}",
            self.caller, title, self.group, self.invariant
        )?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
