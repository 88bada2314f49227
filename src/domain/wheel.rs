// SPDX-License-Identifier: MPL-2.0
//! Wheel newtypes.
//!
//! Type-safe wrappers for the configurable wheel values, always within the
//! bounds declared in [`crate::config::defaults`].

use crate::config::{
    DEFAULT_HIGHLIGHT_BORDER_WIDTH, DEFAULT_ITEM_HEIGHT, DEFAULT_SETTLE_DELAY_MS,
    DEFAULT_WHEEL_IDLE_MS, MAX_HIGHLIGHT_BORDER_WIDTH, MAX_ITEM_HEIGHT, MAX_SETTLE_DELAY_MS,
    MAX_WHEEL_IDLE_MS, MIN_HIGHLIGHT_BORDER_WIDTH, MIN_ITEM_HEIGHT, MIN_SETTLE_DELAY_MS,
    MIN_WHEEL_IDLE_MS,
};
use std::time::Duration;

// =============================================================================
// ItemHeight
// =============================================================================

/// Height of one wheel row in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemHeight(f32);

impl ItemHeight {
    /// Creates an item height, clamping to the valid range. Non-finite values
    /// fall back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_ITEM_HEIGHT, MAX_ITEM_HEIGHT))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ItemHeight {
    fn default() -> Self {
        Self(DEFAULT_ITEM_HEIGHT)
    }
}

// =============================================================================
// BorderWidth
// =============================================================================

/// Width of the highlight band borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderWidth(f32);

impl BorderWidth {
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_HIGHLIGHT_BORDER_WIDTH, MAX_HIGHLIGHT_BORDER_WIDTH))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for BorderWidth {
    fn default() -> Self {
        Self(DEFAULT_HIGHLIGHT_BORDER_WIDTH)
    }
}

// =============================================================================
// SettleDelay
// =============================================================================

/// Quiet period between the end of a drag and the settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleDelay(u64);

impl SettleDelay {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_SETTLE_DELAY_MS, MAX_SETTLE_DELAY_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SettleDelay {
    fn default() -> Self {
        Self(DEFAULT_SETTLE_DELAY_MS)
    }
}

// =============================================================================
// WheelIdle
// =============================================================================

/// Quiet period after the last wheel/trackpad step that ends momentum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelIdle(u64);

impl WheelIdle {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_WHEEL_IDLE_MS, MAX_WHEEL_IDLE_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for WheelIdle {
    fn default() -> Self {
        Self(DEFAULT_WHEEL_IDLE_MS)
    }
}
