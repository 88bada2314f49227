// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`scroll_picker`] - Generic snapping wheel over a list of values
//! - [`date_picker`] - Date field with a day/month/year wheel dialog
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable interaction state (drag, debounce timers)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod date_picker;
pub mod design_tokens;
pub mod scroll_picker;
pub mod state;
pub mod styles;
pub mod theming;
