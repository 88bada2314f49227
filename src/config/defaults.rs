// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Wheel**: Item and viewport geometry of the scroll pickers
//! - **Highlight**: Selection band appearance
//! - **Timing**: Settle debounce and wheel idle detection
//! - **Calendar**: Year range offered by the year wheel
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Wheel Geometry Defaults
// ==========================================================================

/// Item height used by a bare scroll picker when nothing else is provided.
pub const WIDGET_DEFAULT_ITEM_HEIGHT: f32 = 30.0;

/// Number of item rows that fit in the viewport when no height is given.
pub const DEFAULT_VISIBLE_ROWS: f32 = 5.0;

/// Item height of the date wheels.
pub const DEFAULT_ITEM_HEIGHT: f32 = 20.0;

/// Minimum allowed item height.
pub const MIN_ITEM_HEIGHT: f32 = 10.0;

/// Maximum allowed item height.
pub const MAX_ITEM_HEIGHT: f32 = 120.0;

/// Viewport height of the date wheels.
pub const DEFAULT_WRAPPER_HEIGHT: f32 = 200.0;

/// Width of the wheel highlight band.
pub const HIGHLIGHT_BAND_WIDTH: f32 = 75.0;

// ==========================================================================
// Highlight Defaults
// ==========================================================================

/// Default highlight band color (hex).
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#333333";

/// Default highlight border width.
pub const DEFAULT_HIGHLIGHT_BORDER_WIDTH: f32 = 1.0;

/// Thinnest border the highlight band can be drawn with.
pub const MIN_HIGHLIGHT_BORDER_WIDTH: f32 = 0.5;

/// Thickest border the highlight band can be drawn with.
pub const MAX_HIGHLIGHT_BORDER_WIDTH: f32 = 8.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Quiet period after a drag ends before the wheel settles (milliseconds).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 50;

/// Minimum settle delay (milliseconds).
pub const MIN_SETTLE_DELAY_MS: u64 = 10;

/// Maximum settle delay (milliseconds).
pub const MAX_SETTLE_DELAY_MS: u64 = 1000;

/// Quiet period after the last wheel/trackpad scroll step that counts as the
/// end of momentum scrolling (milliseconds).
pub const DEFAULT_WHEEL_IDLE_MS: u64 = 120;

/// Minimum wheel idle period (milliseconds).
pub const MIN_WHEEL_IDLE_MS: u64 = 30;

/// Maximum wheel idle period (milliseconds).
pub const MAX_WHEEL_IDLE_MS: u64 = 2000;

// ==========================================================================
// Calendar Defaults
// ==========================================================================

/// First year offered by the year wheel.
pub const DEFAULT_FIRST_YEAR: i32 = 1950;

/// Last year offered by the year wheel.
pub const DEFAULT_LAST_YEAR: i32 = 2050;

/// Smallest year accepted from the configuration.
pub const MIN_YEAR: i32 = 1;

/// Largest year accepted from the configuration.
pub const MAX_YEAR: i32 = 9999;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;
