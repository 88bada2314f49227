// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state shared by the widgets, kept apart from the widgets
//! themselves so it can be tested without a renderer.

pub mod debounce;
pub mod drag;

pub use debounce::Debounce;
pub use drag::DragState;
