// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serializable failure views for structured logs.

use serde::Serialize;

/// Borrowed, serializable view of a [`Failure`](crate::Failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport<'a> {
    pub group: &'a str,
    pub invariant: &'a str,
    /// `file:line`, or `<unknown>:0`.
    pub caller: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    pub debug: bool,
}
