// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The aggregate error returned by a failed check, and structural errors.
//!
//! Two tiers, never mixed:
//!
//! - [`InvariantError`]: domain failures. One per call, holding every invariant
//!   that did not hold, in the order the invariants were given.
//! - [`CheckError::Unpaired`] / [`CheckError::EmptyName`]: the argument list
//!   itself is malformed. Nothing was evaluated.

use std::error::Error;
use std::fmt;
use std::slice;

use crate::failure::Failure;
use crate::report::FailureReport;

/// Boxed error used for invariant causes.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Every failed invariant from one check.
///
/// # Invariants
/// - never empty; a check with no failures returns `Ok(())`
/// - failures are in evaluation order
///
/// # Causes
///
/// [`Error::source`] is the cause of the first failure that has one, so error
/// reporters never print a failure twice. Since a source chain is linear, use
/// [`InvariantError::causes`] or [`InvariantError::find_cause`] to reach the
/// causes of the other failures.
#[derive(Debug)]
pub struct InvariantError {
    failures: Vec<Failure>,
}

impl InvariantError {
    /// Returns `None` for an empty list.
    pub fn from_failures(failures: Vec<Failure>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self { failures })
        }
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }

    pub fn iter(&self) -> slice::Iter<'_, Failure> {
        self.failures.iter()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Causes of all failures that have one, in order.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn Error + Send + Sync + 'static)> {
        self.failures.iter().filter_map(Failure::cause)
    }

    /// Search the full source chain of every failure for an error of type `E`.
    pub fn find_cause<E: Error + 'static>(&self) -> Option<&E> {
        self.causes().find_map(|cause| {
            let mut current = Some(cause as &(dyn Error + 'static));
            while let Some(err) = current {
                if let Some(found) = err.downcast_ref::<E>() {
                    return Some(found);
                }
                current = err.source();
            }
            None
        })
    }

    /// Serializable views of all failures, in order.
    pub fn reports(&self) -> Vec<FailureReport<'_>> {
        self.failures.iter().map(Failure::report).collect()
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl Error for InvariantError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.failures
            .iter()
            .find_map(Failure::cause)
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

impl<'a> IntoIterator for &'a InvariantError {
    type Item = &'a Failure;
    type IntoIter = slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl IntoIterator for InvariantError {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

/// Error from checking a flat, untyped argument list.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The list had an odd number of entries.
    #[error("invariants must be passed as pairs (got {len} arguments)")]
    Unpaired { len: usize },
    /// The name at this argument position is empty once the debug marker is removed.
    #[error("invariant name must not be empty (argument {position})")]
    EmptyName { position: usize },
    /// The list was well-formed and at least one invariant failed.
    #[error(transparent)]
    Violated(#[from] InvariantError),
}

impl CheckError {
    /// The aggregate, if this is a domain failure rather than a structural one.
    pub fn violation(&self) -> Option<&InvariantError> {
        match self {
            CheckError::Violated(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_structural(&self) -> bool {
        !matches!(self, CheckError::Violated(_))
    }
}
