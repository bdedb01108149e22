// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The debug-tier switch.
//!
//! Debug-tier invariants (names starting with `"_ "`) are evaluated while the
//! switch is on. Turning it off is permanent: there is no way back on. Every
//! check reads the switch once, at the start of the call, so a check racing a
//! `disable` sees either the old or the new value for all of its invariants.

use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable read by [`DebugTier::from_env`].
pub const DEBUG_TIER_ENV: &str = "INV_DEBUG_TIER";

/// Values of [`DEBUG_TIER_ENV`] that start with the debug tier off.
const OFF_VALUES: [&str; 5] = ["0", "off", "false", "no", "disabled"];

/// One-way switch for debug-tier invariants. Starts enabled.
#[derive(Debug)]
pub struct DebugTier {
    enabled: AtomicBool,
}

impl DebugTier {
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
        }
    }

    /// Start state from a configuration value; see [`DEBUG_TIER_ENV`].
    pub fn from_setting(value: Option<&str>) -> Self {
        let off = value
            .map(str::trim)
            .is_some_and(|v| OFF_VALUES.iter().any(|candidate| v.eq_ignore_ascii_case(candidate)));
        Self {
            enabled: AtomicBool::new(!off),
        }
    }

    /// Start state from [`DEBUG_TIER_ENV`].
    pub fn from_env() -> Self {
        let value = std::env::var(DEBUG_TIER_ENV).ok();
        let tier = Self::from_setting(value.as_deref());
        if !tier.is_enabled() {
            tracing::debug!(source = "env", "debug-tier invariants disabled");
        }
        tier
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Turn debug-tier evaluation off for good.
    ///
    /// Returns `true` if this call flipped the switch, `false` if it was
    /// already off.
    pub fn disable(&self) -> bool {
        let flipped = self.enabled.swap(false, Ordering::AcqRel);
        if flipped {
            tracing::debug!(source = "call", "debug-tier invariants disabled");
        }
        flipped
    }
}

impl Default for DebugTier {
    fn default() -> Self {
        Self::new()
    }
}
