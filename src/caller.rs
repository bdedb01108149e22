// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Call-site attribution for failed invariants.
//!
//! Every public entry point is `#[track_caller]`, so the location captured here
//! is the line in *your* code that asked for the check, not a line inside this
//! crate. The location is captured once per call and shared by every failure
//! that call produces.

use std::fmt;
use std::panic::Location;

/// Where an invariant check was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Caller {
    /// A real source location.
    Known(&'static Location<'static>),
    /// No location is available. Displays as `<unknown>:0`.
    #[default]
    Unknown,
}

impl Caller {
    /// Capture the location of the outermost `#[track_caller]` frame.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Caller::Known(Location::caller())
    }

    pub fn file(&self) -> &'static str {
        match self {
            Caller::Known(location) => location.file(),
            Caller::Unknown => "<unknown>",
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            Caller::Known(location) => location.line(),
            Caller::Unknown => 0,
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file(), self.line())
    }
}
