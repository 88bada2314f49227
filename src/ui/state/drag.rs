// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag scrolling of a wheel with the pointer, the desktop
//! counterpart of a touch drag.

/// Manages grab-and-drag state along the vertical axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Cursor y where the drag started
    pub start_y: Option<f32>,

    /// Scroll offset when the drag started
    pub start_offset: Option<f32>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, cursor_y: f32, offset: f32) {
        self.is_dragging = true;
        self.start_y = Some(cursor_y);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_y = None;
        self.start_offset = None;
    }

    /// Offset that follows the cursor, kept within `0..=max_offset`.
    ///
    /// Moving the cursor down pulls the content down, i.e. lowers the offset.
    #[must_use]
    pub fn calculate_offset(&self, cursor_y: f32, max_offset: f32) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }

        let start_y = self.start_y?;
        let start_offset = self.start_offset?;
        let delta = cursor_y - start_y;

        Some((start_offset - delta).clamp(0.0, max_offset.max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.start_y.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn start_and_stop_drag() {
        let mut state = DragState::default();
        state.start(50.0, 10.0);
        assert!(state.is_dragging);
        assert_eq!(state.start_y, Some(50.0));
        assert_eq!(state.start_offset, Some(10.0));

        state.stop();
        assert_eq!(state, DragState::default());
    }

    #[test]
    fn calculate_offset_returns_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.calculate_offset(100.0, 500.0).is_none());
    }

    #[test]
    fn dragging_up_scrolls_forward() {
        let mut state = DragState::default();
        state.start(150.0, 30.0);

        // Cursor moved up by 20 pixels
        assert_eq!(state.calculate_offset(130.0, 500.0), Some(50.0));
    }

    #[test]
    fn offset_is_clamped_to_content() {
        let mut state = DragState::default();
        state.start(100.0, 30.0);

        assert_eq!(state.calculate_offset(300.0, 500.0), Some(0.0));
        assert_eq!(state.calculate_offset(-1000.0, 500.0), Some(500.0));
    }
}
