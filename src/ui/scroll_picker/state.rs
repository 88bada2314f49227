// SPDX-License-Identifier: MPL-2.0
//! Scroll and selection state of a single wheel.
//!
//! This is the renderer-free core of the [`ScrollPicker`](super::ScrollPicker):
//! it tracks the offset, the drag/momentum phases and the value currently
//! centred, and decides when settling snaps or changes the selection. Timers
//! and widget operations are the component's business.

use super::metrics::Metrics;
use super::PickerItem;

/// Offsets closer than this are considered equal.
const OFFSET_EPSILON: f32 = 0.5;

fn same_offset(a: f32, b: f32) -> bool {
    (a - b).abs() < OFFSET_EPSILON
}

/// The item a wheel landed on.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    pub value: T,
    pub index: usize,
}

/// Outcome of a settle.
#[derive(Debug, Clone, PartialEq)]
pub struct Settle<T> {
    /// Offset the wheel must be moved to, when it stopped between items.
    pub snap_to: Option<f32>,
    /// New selection, when the centred item differs from the previous one.
    pub changed: Option<Selection<T>>,
}

impl<T> Settle<T> {
    fn none() -> Self {
        Self {
            snap_to: None,
            changed: None,
        }
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.snap_to.is_none() && self.changed.is_none()
    }
}

/// How a scroll notification was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKind {
    /// Produced by an active drag.
    Drag,
    /// Echo of an offset the wheel set itself.
    Programmatic,
    /// Free scrolling (wheel, trackpad, fling). `began` is set on the first
    /// notification of a burst.
    Momentum { began: bool },
}

#[derive(Debug, Clone)]
pub struct WheelState<T> {
    items: Vec<T>,
    metrics: Metrics,
    selected: Option<T>,
    offset: f32,
    dragging: bool,
    momentum: bool,
    /// Target of a scroll the wheel issued itself and has not seen echoed yet.
    programmatic: Option<f32>,
    mounted: bool,
}

impl<T: PickerItem> WheelState<T> {
    #[must_use]
    pub fn new(items: Vec<T>, metrics: Metrics, selected: Option<T>) -> Self {
        Self {
            items,
            metrics,
            selected,
            offset: 0.0,
            dragging: false,
            momentum: false,
            programmatic: None,
            mounted: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Position of the selected value in the current list.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        self.items.iter().position(|item| item == selected)
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.metrics.max_offset(self.items.len())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_momentum(&self) -> bool {
        self.momentum
    }

    pub fn has_programmatic_scroll(&self) -> bool {
        self.programmatic.is_some()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Marks the wheel as laid out and returns the offset that centres the
    /// selected value (0 when the value is not in the list).
    pub fn mount(&mut self) -> f32 {
        self.mounted = true;
        self.dragging = false;
        self.momentum = false;
        let target = self
            .selected_index()
            .map_or(0.0, |index| self.metrics.offset_of(index));
        self.jump_to(target);
        target
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.dragging = false;
        self.momentum = false;
        self.programmatic = None;
    }

    /// Replaces the items, keeping the selected value.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn select(&mut self, value: Option<T>) {
        self.selected = value;
    }

    /// Selects `items[index]` and returns the offset to scroll to. Never
    /// reports a change.
    pub fn scroll_to_index(&mut self, index: usize) -> Option<f32> {
        let value = self.items.get(index)?.clone();
        self.selected = Some(value);
        let target = self.metrics.offset_of(index);
        self.jump_to(target);
        Some(target)
    }

    fn jump_to(&mut self, target: f32) {
        self.programmatic = (!same_offset(self.offset, target)).then_some(target);
        self.offset = target;
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    pub fn drag_began(&mut self) {
        self.dragging = true;
        self.momentum = false;
        self.programmatic = None;
    }

    pub fn drag_moved(&mut self, offset: f32) {
        if self.dragging {
            self.offset = offset;
        }
    }

    pub fn drag_ended(&mut self, offset: f32) {
        self.dragging = false;
        self.offset = offset;
    }

    pub fn momentum_began(&mut self) {
        self.momentum = true;
    }

    /// Ends momentum scrolling. Returns `None` while a drag is active and for
    /// the echo of a programmatic scroll (whose marker is consumed).
    pub fn momentum_ended(&mut self, offset: f32) -> Option<Settle<T>> {
        self.momentum = false;
        self.offset = offset;
        if self.dragging {
            return None;
        }
        if self.consume_programmatic(offset) {
            return None;
        }
        Some(self.settle(offset))
    }

    /// Interprets a scroll notification from the widget.
    pub fn scrolled(&mut self, offset: f32) -> ScrollKind {
        if self.dragging {
            self.offset = offset;
            return ScrollKind::Drag;
        }
        if self.consume_programmatic(offset) {
            self.offset = offset;
            return ScrollKind::Programmatic;
        }
        // Any other notification means the marker will never be echoed.
        self.programmatic = None;
        self.offset = offset;
        let began = !self.momentum;
        self.momentum_began();
        ScrollKind::Momentum { began }
    }

    fn consume_programmatic(&mut self, offset: f32) -> bool {
        match self.programmatic {
            Some(target) if same_offset(target, offset) => {
                self.programmatic = None;
                true
            }
            _ => false,
        }
    }

    /// Settles after the drag debounce elapsed, unless something else took
    /// over the wheel meanwhile.
    pub fn settle_elapsed(&mut self) -> Option<Settle<T>> {
        if !self.mounted || self.dragging || self.momentum {
            return None;
        }
        Some(self.settle(self.offset))
    }

    // =========================================================================
    // Settling
    // =========================================================================

    /// Snaps to the nearest item and selects it.
    pub fn settle(&mut self, offset: f32) -> Settle<T> {
        self.offset = offset;
        let Some(index) = self.metrics.nearest_index(offset, self.items.len()) else {
            return Settle::none();
        };

        let target = self.metrics.offset_of(index);
        let snap_to = if same_offset(target, offset) {
            None
        } else {
            self.jump_to(target);
            Some(target)
        };

        let changed = if self.selected_index() == Some(index) {
            None
        } else {
            let value = self.items[index].clone();
            self.selected = Some(value.clone());
            Some(Selection { value, index })
        };

        Settle { snap_to, changed }
    }
}
