// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch invariant checks with aggregated failures.
//!
//! Assert a group of named conditions in one call and get back either `Ok(())`
//! or a single [`InvariantError`] listing *every* condition that did not hold,
//! each attributed to the line that asked for the check.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ predicate.rs │────▶│  engine.rs   │────▶│    error.rs      │
//! │  (Predicate, │     │  (Checker,   │     │ (InvariantError, │
//! │   Invariant) │     │  Invariants) │     │   CheckError)    │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!        ▲                │       │                  │
//!        │                ▼       ▼                  ▼
//! ┌──────────────┐  ┌──────────┐ ┌────────────┐ ┌────────────┐
//! │  dynamic.rs  │  │ mode.rs  │ │ require.rs │ │ failure.rs │
//! │ (flat lists) │  │(DebugTier│ │  (panics)  │ │ (Failure)  │
//! └──────────────┘  └──────────┘ └────────────┘ └────────────┘
//! ```
//!
//! # Entry points
//!
//! | Returns the error       | Panics with the error     | `debug` feature only        |
//! |-------------------------|---------------------------|-----------------------------|
//! | [`check!`] / [`check`]  | [`require!`] / [`require`]| [`debug_require!`] / [`debug_require`] |
//! | [`check_args`]          | [`require_args`]          |                             |
//!
//! # Message format
//!
//! ```text
//! <file>:<line>: invariant mismatch: <group>: <invariant>[: <cause>]
//! <file>:<line>: (debug) invariant mismatch: <group>: <invariant>[: <cause>]
//! ```
//!
//! One line per failure, in the order the invariants were given.
//!
//! # Debug tier
//!
//! Names starting with `"_ "` are debug-tier invariants. They are evaluated
//! until [`disable_debug_tier`] is called (or the process starts with
//! `INV_DEBUG_TIER=off`), and skipped without evaluation afterwards.
//!
//! # Usage
//!
//! ```
//! use inv::{check, succeeds};
//!
//! fn parse_port(s: &str) -> Result<u16, std::num::ParseIntError> {
//!     s.parse()
//! }
//!
//! let host = "";
//! let err = check!("config",
//!     "host set" => !host.is_empty(),
//!     "port parses" => succeeds(|| parse_port("80x")),
//!     "_ expensive cross-check" => true,
//! )
//! .unwrap_err();
//!
//! assert_eq!(err.len(), 2);
//! assert!(err.failures()[1].to_string().contains("config: port parses: invalid digit"));
//! ```

// Module declarations
mod caller;
mod dynamic;
mod engine;
mod error;
mod failure;
mod macros;
mod mode;
mod name;
mod predicate;
mod report;
mod require;

// Re-exports for public API
pub use caller::Caller;
pub use dynamic::{check_args, require_args, Arg};
pub use engine::{check, checker, debug_tier_enabled, disable_debug_tier, Checker, Invariants};
pub use error::{BoxError, CheckError, InvariantError};
pub use failure::Failure;
pub use mode::{DebugTier, DEBUG_TIER_ENV};
pub use name::{EmptyName, InvariantName, DEBUG_MARKER};
pub use predicate::{holds, succeeds, Invariant, Predicate};
pub use report::FailureReport;
pub use require::{debug_require, require, DEBUG_BUILD};
