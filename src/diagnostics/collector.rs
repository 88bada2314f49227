// SPDX-License-Identifier: MPL-2.0
//! Central event collector owned by the application.

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{DiagnosticEvent, DiagnosticEventKind};

/// Keeps the latest diagnostic events in memory and optionally echoes them
/// to stderr (`--verbose`).
#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    verbose: bool,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity, verbose: bool) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            verbose,
        }
    }

    pub fn log(&mut self, kind: DiagnosticEventKind) {
        if self.verbose {
            eprintln!("[dob-picker] {}", kind);
        }
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    pub fn log_warning(&mut self, key: impl Into<String>) {
        self.log(DiagnosticEventKind::Warning { key: key.into() });
    }

    /// Whether events are also shown to the user (`--verbose`).
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// The `count` most recent event kinds, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &DiagnosticEventKind> {
        self.buffer.iter().rev().take(count).map(|event| &event.kind)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default(), false)
    }
}
