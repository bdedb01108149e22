// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant names and the debug-tier marker.
//!
//! A name starting with `"_ "` (underscore, space) marks a debug-tier
//! invariant. The marker is parsed once, at construction, and never shows up
//! in a message afterwards.

use std::borrow::Cow;
use std::fmt;

/// Prefix that turns an invariant into a debug-tier invariant.
pub const DEBUG_MARKER: &str = "_ ";

/// Returned by [`InvariantName::parse`] when nothing is left after the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invariant name must not be empty")]
pub struct EmptyName;

/// A validated invariant name.
///
/// # Invariants (enforced at construction)
/// - the display name is non-empty
/// - the display name never starts with the debug marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantName<'a> {
    name: Cow<'a, str>,
    debug: bool,
}

impl<'a> InvariantName<'a> {
    /// Parse a raw name, stripping the debug marker if present.
    pub fn parse(raw: impl Into<Cow<'a, str>>) -> Result<Self, EmptyName> {
        let raw = raw.into();
        let (name, debug) = match raw {
            Cow::Borrowed(s) => match s.strip_prefix(DEBUG_MARKER) {
                Some(rest) => (Cow::Borrowed(rest), true),
                None => (Cow::Borrowed(s), false),
            },
            Cow::Owned(s) => match s.strip_prefix(DEBUG_MARKER) {
                Some(rest) => (Cow::Owned(rest.to_owned()), true),
                None => (Cow::Owned(s), false),
            },
        };

        if name.is_empty() {
            return Err(EmptyName);
        }

        Ok(Self { name, debug })
    }

    /// The name with the marker stripped.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Whether the raw name carried the debug marker.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn into_owned(self) -> InvariantName<'static> {
        InvariantName {
            name: Cow::Owned(self.name.into_owned()),
            debug: self.debug,
        }
    }
}

impl fmt::Display for InvariantName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
