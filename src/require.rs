// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Entry points that panic instead of returning the error.
//!
//! The panic payload is the [`InvariantError`] itself (via
//! [`std::panic::panic_any`]), so a `catch_unwind` boundary can downcast it
//! and inspect every failure. The default panic hook only prints string
//! payloads, so the message is written to stderr before unwinding.
//!
//! # Debug builds
//!
//! `debug_require` has two implementations, picked by the `debug` cargo
//! feature:
//!
//! | feature `debug` | `debug_require`                                  |
//! |-----------------|--------------------------------------------------|
//! | on              | same as `require`                                |
//! | off (default)   | no-op; invariants are dropped without evaluation |
//!
//! This is independent of the runtime debug-tier switch: the feature decides
//! whether `debug_require` runs at all, the switch decides which invariants a
//! running check skips.

use crate::engine::{checker, Checker, Invariants};
use crate::error::InvariantError;
use crate::predicate::Invariant;

/// Whether this build was compiled with the `debug` feature.
pub const DEBUG_BUILD: bool = cfg!(feature = "debug");

#[track_caller]
pub(crate) fn abort(err: InvariantError) -> ! {
    tracing::error!(failures = err.len(), "{}", err);
    eprintln!("{}", err);
    std::panic::panic_any(err)
}

impl Checker {
    /// Check a group of invariants and panic with the [`InvariantError`] if
    /// any fail.
    #[track_caller]
    pub fn require<'a, I>(&self, group: &str, invariants: I)
    where
        I: IntoIterator,
        I::Item: Into<Invariant<'a>>,
    {
        if let Err(err) = self.check(group, invariants) {
            abort(err);
        }
    }

    /// [`Checker::require`] in `debug` builds, a no-op otherwise.
    #[cfg(feature = "debug")]
    #[track_caller]
    pub fn debug_require<'a, I>(&self, group: &str, invariants: I)
    where
        I: IntoIterator,
        I::Item: Into<Invariant<'a>>,
    {
        self.require(group, invariants);
    }

    /// [`Checker::require`] in `debug` builds, a no-op otherwise.
    #[cfg(not(feature = "debug"))]
    #[inline(always)]
    pub fn debug_require<'a, I>(&self, _group: &str, _invariants: I)
    where
        I: IntoIterator,
        I::Item: Into<Invariant<'a>>,
    {
    }
}

impl Invariants<'_> {
    /// Evaluate every invariant and panic if any fail.
    #[track_caller]
    pub fn require(self) {
        if let Err(err) = self.check() {
            abort(err);
        }
    }

    /// [`Invariants::require`] in `debug` builds, a no-op otherwise.
    #[cfg(feature = "debug")]
    #[track_caller]
    pub fn debug_require(self) {
        self.require();
    }

    /// [`Invariants::require`] in `debug` builds, a no-op otherwise.
    #[cfg(not(feature = "debug"))]
    #[inline(always)]
    pub fn debug_require(self) {}
}

/// Check a group of invariants on the process-wide checker and panic if any
/// fail.
#[track_caller]
pub fn require<'a, I>(group: &str, invariants: I)
where
    I: IntoIterator,
    I::Item: Into<Invariant<'a>>,
{
    checker().require(group, invariants);
}

/// [`require`] in `debug` builds, a no-op otherwise.
#[track_caller]
#[inline(always)]
pub fn debug_require<'a, I>(group: &str, invariants: I)
where
    I: IntoIterator,
    I::Item: Into<Invariant<'a>>,
{
    checker().debug_require(group, invariants);
}
