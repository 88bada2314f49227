// SPDX-License-Identifier: MPL-2.0
//! Wheel geometry.
//!
//! The scrollable content is `spacer | item * n | spacer`, with spacers of
//! half the free viewport height. Item `i` is therefore centred exactly when
//! the scroll offset equals `i * item_height`.

use crate::config::DEFAULT_VISIBLE_ROWS;
use crate::domain::wheel::ItemHeight;

/// Returns `true` when `value` is a complete, non-NaN number.
///
/// Empty and whitespace-only strings are rejected. Unlike JavaScript's
/// `Number()` coercion, radix-prefixed literals (`0x1A`, `0b101`, `0o17`)
/// are rejected as well: only decimal notation counts.
///
/// ```
/// use dob_picker::ui::scroll_picker::is_numeric;
///
/// assert!(is_numeric("180"));
/// assert!(is_numeric(" 12.5 "));
/// assert!(!is_numeric("180px"));
/// assert!(!is_numeric("   "));
/// assert!(!is_numeric("0x1A"));
/// ```
#[must_use]
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    trimmed
        .parse::<f64>()
        .map(|number| !number.is_nan())
        .unwrap_or(false)
}

/// Viewport height of a wheel: an explicit positive height wins, then a
/// positive numeric style height, then five rows.
#[must_use]
pub fn resolve_wrapper_height(
    explicit: Option<f32>,
    style_height: Option<&str>,
    item_height: ItemHeight,
) -> f32 {
    let usable = |height: f32| height.is_finite() && height > 0.0;

    if let Some(height) = explicit.filter(|h| usable(*h)) {
        return height;
    }

    let from_style = style_height
        .filter(|raw| is_numeric(raw))
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .filter(|h| usable(*h));
    if let Some(height) = from_style {
        return height;
    }

    item_height.value() * DEFAULT_VISIBLE_ROWS
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    item_height: ItemHeight,
    wrapper_height: f32,
}

impl Metrics {
    #[must_use]
    pub fn new(item_height: ItemHeight, wrapper_height: f32) -> Self {
        Self {
            item_height,
            wrapper_height: wrapper_height.max(0.0),
        }
    }

    #[must_use]
    pub fn item_height(&self) -> f32 {
        self.item_height.value()
    }

    #[must_use]
    pub fn wrapper_height(&self) -> f32 {
        self.wrapper_height
    }

    /// Height of each blank spacer above and below the items.
    #[must_use]
    pub fn spacer_height(&self) -> f32 {
        ((self.wrapper_height - self.item_height()) / 2.0).max(0.0)
    }

    /// Offset at which item `index` sits in the centre.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f32 {
        index as f32 * self.item_height()
    }

    /// Nearest item to `offset`, clamped into a list of `len` items.
    #[must_use]
    pub fn nearest_index(&self, offset: f32, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let raw = (offset / self.item_height()).round();
        if raw.is_nan() || raw <= 0.0 {
            return Some(0);
        }
        Some((raw as usize).min(len - 1))
    }

    /// Largest scroll offset for a list of `len` items.
    #[must_use]
    pub fn max_offset(&self, len: usize) -> f32 {
        let content = 2.0 * self.spacer_height() + len as f32 * self.item_height();
        (content - self.wrapper_height).max(0.0)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        let item_height = ItemHeight::default();
        Self::new(item_height, resolve_wrapper_height(None, None, item_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings() {
        assert!(is_numeric("0"));
        assert!(is_numeric("-3"));
        assert!(is_numeric("1e3"));
        assert!(is_numeric("\t42\n"));
    }

    #[test]
    fn non_numeric_strings() {
        assert!(!is_numeric(""));
        assert!(!is_numeric(" "));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("12abc"));
        assert!(!is_numeric("NaN"));
    }

    #[test]
    fn radix_prefixed_literals_are_not_numeric() {
        for literal in ["0x1A", "0X1a", "0b101", "0o17", " 0x10 "] {
            assert!(!is_numeric(literal), "{literal:?}");
        }
        assert_eq!(
            resolve_wrapper_height(None, Some("0x1A"), ItemHeight::new(20.0)),
            20.0 * DEFAULT_VISIBLE_ROWS
        );
    }

    #[test]
    fn explicit_wrapper_height_wins() {
        let height = resolve_wrapper_height(Some(150.0), Some("300"), ItemHeight::new(20.0));
        assert_eq!(height, 150.0);
    }

    #[test]
    fn numeric_style_height_is_used_next() {
        let height = resolve_wrapper_height(None, Some("300"), ItemHeight::new(20.0));
        assert_eq!(height, 300.0);
    }

    #[test]
    fn invalid_heights_fall_back_to_five_rows() {
        let item = ItemHeight::new(30.0);
        assert_eq!(resolve_wrapper_height(None, Some("tall"), item), 150.0);
        assert_eq!(resolve_wrapper_height(Some(0.0), Some("-5"), item), 150.0);
        assert_eq!(resolve_wrapper_height(None, None, item), 150.0);
    }

    #[test]
    fn spacers_centre_the_first_item() {
        let metrics = Metrics::new(ItemHeight::new(20.0), 200.0);
        assert_eq!(metrics.spacer_height(), 90.0);
        // With offset 0 the first item spans 90..110, the middle of 200.
        assert_eq!(metrics.offset_of(0), 0.0);
        assert_eq!(metrics.offset_of(3), 60.0);
    }

    #[test]
    fn nearest_index_rounds_and_clamps() {
        let metrics = Metrics::new(ItemHeight::new(20.0), 200.0);
        assert_eq!(metrics.nearest_index(0.0, 5), Some(0));
        assert_eq!(metrics.nearest_index(29.0, 5), Some(1));
        assert_eq!(metrics.nearest_index(31.0, 5), Some(2));
        assert_eq!(metrics.nearest_index(-12.0, 5), Some(0));
        assert_eq!(metrics.nearest_index(10_000.0, 5), Some(4));
        assert_eq!(metrics.nearest_index(40.0, 0), None);
    }

    #[test]
    fn max_offset_reaches_the_last_item() {
        let metrics = Metrics::new(ItemHeight::new(20.0), 200.0);
        assert_eq!(metrics.max_offset(31), metrics.offset_of(30));
        assert_eq!(metrics.max_offset(0), 0.0);
    }
}
