// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `name => predicate` syntax for the entry points.
//!
//! ```
//! use inv::{check, holds};
//!
//! let buf: Vec<u8> = Vec::new();
//! let err = check!("io",
//!     "non-empty" => !buf.is_empty(),
//!     "small" => holds(|| buf.len() < 4096),
//! )
//! .unwrap_err();
//! assert!(err.to_string().ends_with("invariant mismatch: io: non-empty"));
//! ```
//!
//! Every macro takes an optional `on <checker>,` prefix to use a specific
//! [`Checker`](crate::Checker) instead of the process-wide one.

#[doc(hidden)]
#[macro_export]
macro_rules! __invariants {
    (on $checker:expr, $group:expr $(, $name:expr => $predicate:expr)* $(,)?) => {
        $crate::Checker::invariants($checker, $group)
            $(.invariant($name, $predicate))*
    };
    ($group:expr $(, $name:expr => $predicate:expr)* $(,)?) => {
        $crate::Invariants::new($group)
            $(.invariant($name, $predicate))*
    };
}

/// Check invariants and return `Result<(), InvariantError>`.
#[macro_export]
macro_rules! check {
    ($($tokens:tt)+) => {
        $crate::__invariants!($($tokens)+).check()
    };
}

/// Check invariants and panic with the `InvariantError` if any fail.
#[macro_export]
macro_rules! require {
    ($($tokens:tt)+) => {
        $crate::__invariants!($($tokens)+).require()
    };
}

/// [`require!`] in builds with the `debug` feature.
///
/// Without the feature neither the predicates nor the expressions producing
/// them are evaluated.
#[macro_export]
macro_rules! debug_require {
    ($($tokens:tt)+) => {
        if $crate::DEBUG_BUILD {
            $crate::__invariants!($($tokens)+).debug_require()
        }
    };
}

/// Build a flat argument list for [`check_args`](crate::check_args).
///
/// ```
/// let list = inv::args!["a", true, "b", inv::holds(|| true)];
/// assert_eq!(list.len(), 4);
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        ::std::vec![$(::std::boxed::Box::new($value) as ::std::boxed::Box<dyn ::std::any::Any>),*]
    };
}
