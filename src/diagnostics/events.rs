// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types recorded while the picker is used.

use crate::domain::DateField;
use std::fmt;
use std::time::Instant;

/// A recorded event with the moment it happened.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic timestamp.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// What happened.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    // ==========================================================================
    // Dialog
    // ==========================================================================
    DialogOpened,
    /// The dialog closed and committed `value`.
    DialogConfirmed { value: String },

    // ==========================================================================
    // Wheels
    // ==========================================================================
    /// A wheel settled on a different item.
    ValueChanged {
        field: DateField,
        value: String,
        index: usize,
    },
    /// A wheel was animated back onto an item boundary.
    Snapped { field: DateField, offset: f32 },
    /// The day wheel was rebuilt for a new month length.
    DayListResized { count: u32 },
    /// The selected day no longer fitted and was lowered.
    DayClamped { day: u32 },

    // ==========================================================================
    // Application
    // ==========================================================================
    /// Non-fatal problem, stored as its i18n key.
    Warning { key: String },
}

impl fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DialogOpened => write!(f, "dialog opened"),
            Self::DialogConfirmed { value } => write!(f, "dialog confirmed: {value}"),
            Self::ValueChanged {
                field,
                value,
                index,
            } => write!(f, "{field} wheel changed to {value} (index {index})"),
            Self::Snapped { field, offset } => {
                write!(f, "{field} wheel snapped to offset {offset:.1}")
            }
            Self::DayListResized { count } => write!(f, "day wheel resized to {count} days"),
            Self::DayClamped { day } => write!(f, "day clamped to {day}"),
            Self::Warning { key } => write!(f, "warning: {key}"),
        }
    }
}
