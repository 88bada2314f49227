// SPDX-License-Identifier: MPL-2.0
//! Wheel-style scroll picker.
//!
//! A vertical list whose centred row is the selection. After a drag or a
//! free scroll ends, the wheel snaps to the nearest row and reports it as
//! [`Event::ValueChanged`]. Rows are rendered as text by default, or through
//! a caller-supplied renderer.
//!
//! The component follows the usual `Message` / `Event` / `update` / `view`
//! shape: the parent stores a [`ScrollPicker`], forwards its messages and
//! reacts to the returned events.

mod metrics;
mod state;

pub use metrics::{is_numeric, resolve_wrapper_height, Metrics};
pub use state::{ScrollKind, Selection, Settle, WheelState};

use crate::config::{DEFAULT_HIGHLIGHT_COLOR, HIGHLIGHT_BAND_WIDTH, WIDGET_DEFAULT_ITEM_HEIGHT};
use crate::domain::wheel::{BorderWidth, ItemHeight, SettleDelay, WheelIdle};
use crate::ui::design_tokens::typography;
use crate::ui::state::{Debounce, DragState};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::{Font, Weight};
use iced::mouse;
use iced::widget::scrollable::{AbsoluteOffset, Direction, Scrollbar, Viewport};
use iced::widget::{mouse_area, operation, Column, Container, Id, Scrollable, Space, Stack, Text};
use iced::{Color, Element, Length, Point, Task};
use std::fmt;

/// Values a wheel can hold: compared by equality, shown through `Display`.
pub trait PickerItem: Clone + PartialEq + fmt::Display {}

impl<T: Clone + PartialEq + fmt::Display> PickerItem for T {}

/// Highlight band and background appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelStyle {
    pub highlight_color: Color,
    pub border_width: BorderWidth,
    /// `None` uses the theme's secondary surface.
    pub background: Option<Color>,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            highlight_color: parse_color(DEFAULT_HIGHLIGHT_COLOR).unwrap_or(Color::BLACK),
            border_width: BorderWidth::default(),
            background: None,
        }
    }
}

/// Parses a `#rrggbb` / `#rrggbbaa` color.
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(hex.get(at..at + 2)?, 16).ok();

    match hex.len() {
        6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            f32::from(channel(6)?) / 255.0,
        )),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Emitted once the wheel is laid out.
    Mounted,
    Scrolled(f32),
    Pressed,
    Released,
    CursorMoved(Point),
    CursorLeft,
    SettleElapsed(u64),
    WheelIdle(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event<T> {
    None,
    /// A different row was settled on.
    ValueChanged { value: T, index: usize },
    /// The wheel was moved back onto the current row.
    Snapped { offset: f32 },
}

#[derive(Debug)]
pub struct ScrollPicker<T> {
    id: Id,
    state: WheelState<T>,
    settle: Debounce,
    wheel_idle: Debounce,
    drag: DragState,
    cursor_y: f32,
    style: WheelStyle,
    settle_delay: SettleDelay,
    wheel_idle_delay: WheelIdle,
}

impl<T: PickerItem> ScrollPicker<T> {
    /// Creates a wheel with 30px rows and a five-row viewport.
    pub fn new(id: &'static str, items: Vec<T>, selected: Option<T>) -> Self {
        let item_height = ItemHeight::new(WIDGET_DEFAULT_ITEM_HEIGHT);
        let metrics = Metrics::new(
            item_height,
            resolve_wrapper_height(None, None, item_height),
        );
        Self {
            id: Id::new(id),
            state: WheelState::new(items, metrics, selected),
            settle: Debounce::default(),
            wheel_idle: Debounce::default(),
            drag: DragState::default(),
            cursor_y: 0.0,
            style: WheelStyle::default(),
            settle_delay: SettleDelay::default(),
            wheel_idle_delay: WheelIdle::default(),
        }
    }

    #[must_use]
    pub fn metrics(mut self, metrics: Metrics) -> Self {
        let selected = self.state.selected().cloned();
        self.state = WheelState::new(self.state.items().to_vec(), metrics, selected);
        self
    }

    #[must_use]
    pub fn style(mut self, style: WheelStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn settle_delay(mut self, delay: SettleDelay) -> Self {
        self.settle_delay = delay;
        self
    }

    #[must_use]
    pub fn wheel_idle(mut self, idle: WheelIdle) -> Self {
        self.wheel_idle_delay = idle;
        self
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn selected(&self) -> Option<&T> {
        self.state.selected()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index()
    }

    pub fn items(&self) -> &[T] {
        self.state.items()
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_mounted()
    }

    /// Read access to the underlying scroll state.
    pub fn wheel(&self) -> &WheelState<T> {
        &self.state
    }

    /// Schedules the initial scroll. Call when the wheel becomes visible.
    pub fn mount(&mut self) -> Task<Message> {
        Task::done(Message::Mounted)
    }

    /// Stops all timers; pending firings become no-ops.
    pub fn unmount(&mut self) {
        self.settle.cancel();
        self.wheel_idle.cancel();
        self.drag.stop();
        self.state.unmount();
    }

    /// Replaces the rows, keeping the selected value.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.state.set_items(items);
    }

    /// Sets the selected value without scrolling; the wheel centres it on
    /// the next mount.
    pub fn select(&mut self, value: Option<T>) {
        self.state.select(value);
    }

    /// Selects `items[index]` and scrolls to it without emitting
    /// [`Event::ValueChanged`].
    pub fn scroll_to_index(&mut self, index: usize) -> Task<Message> {
        match self.state.scroll_to_index(index) {
            Some(offset) if self.state.is_mounted() => self.scroll_task(offset),
            _ => Task::none(),
        }
    }

    pub fn update(&mut self, message: Message) -> (Event<T>, Task<Message>) {
        match message {
            Message::Mounted => {
                let offset = self.state.mount();
                (Event::None, self.scroll_task(offset))
            }
            Message::Pressed => {
                if self.state.is_mounted() {
                    self.drag.start(self.cursor_y, self.state.offset());
                    self.state.drag_began();
                    self.settle.cancel();
                    self.wheel_idle.cancel();
                }
                (Event::None, Task::none())
            }
            Message::CursorMoved(position) => {
                self.cursor_y = position.y;
                match self
                    .drag
                    .calculate_offset(position.y, self.state.max_offset())
                {
                    Some(offset) => {
                        self.state.drag_moved(offset);
                        (Event::None, self.scroll_task(offset))
                    }
                    None => (Event::None, Task::none()),
                }
            }
            Message::Released | Message::CursorLeft => self.end_drag(),
            Message::Scrolled(offset) => match self.state.scrolled(offset) {
                ScrollKind::Momentum { .. } => {
                    self.settle.cancel();
                    let task = self
                        .wheel_idle
                        .arm(self.wheel_idle_delay.as_duration(), Message::WheelIdle);
                    (Event::None, task)
                }
                ScrollKind::Drag | ScrollKind::Programmatic => (Event::None, Task::none()),
            },
            Message::WheelIdle(generation) => {
                if !self.wheel_idle.fire(generation) {
                    return (Event::None, Task::none());
                }
                let offset = self.state.offset();
                match self.state.momentum_ended(offset) {
                    Some(settle) => self.apply(settle),
                    None => (Event::None, Task::none()),
                }
            }
            Message::SettleElapsed(generation) => {
                if !self.settle.fire(generation) {
                    return (Event::None, Task::none());
                }
                match self.state.settle_elapsed() {
                    Some(settle) => self.apply(settle),
                    None => (Event::None, Task::none()),
                }
            }
        }
    }

    fn end_drag(&mut self) -> (Event<T>, Task<Message>) {
        if !self.drag.is_dragging {
            return (Event::None, Task::none());
        }
        self.drag.stop();
        self.state.drag_ended(self.state.offset());
        let task = self
            .settle
            .arm(self.settle_delay.as_duration(), Message::SettleElapsed);
        (Event::None, task)
    }

    fn apply(&mut self, settle: Settle<T>) -> (Event<T>, Task<Message>) {
        let task = match settle.snap_to {
            Some(offset) => self.scroll_task(offset),
            None => Task::none(),
        };
        let event = match (settle.changed, settle.snap_to) {
            (Some(Selection { value, index }), _) => Event::ValueChanged { value, index },
            (None, Some(offset)) => Event::Snapped { offset },
            (None, None) => Event::None,
        };
        (event, task)
    }

    fn scroll_task(&self, offset: f32) -> Task<Message> {
        operation::scroll_to(self.id.clone(), AbsoluteOffset { x: 0.0, y: offset })
    }

    /// Renders the wheel. `renderer` draws one row; its flag is `true` for
    /// the selected row.
    pub fn view<'a>(
        &'a self,
        renderer: Option<&dyn Fn(&T, bool) -> Element<'a, Message>>,
    ) -> Element<'a, Message> {
        let metrics = self.state.metrics();
        let item_height = metrics.item_height();
        let wrapper_height = metrics.wrapper_height();
        let spacer = metrics.spacer_height();
        let selected = self.state.selected_index();

        let mut rows = Column::new()
            .width(Length::Fill)
            .push(Space::new().height(spacer));
        for (index, item) in self.state.items().iter().enumerate() {
            let active = selected == Some(index);
            let content = match renderer {
                Some(render) => render(item, active),
                None => default_row(item, active),
            };
            rows = rows.push(
                Container::new(content)
                    .width(Length::Fill)
                    .height(item_height)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            );
        }
        rows = rows.push(Space::new().height(spacer));

        let scrollable = Scrollable::new(rows)
            .id(self.id.clone())
            .width(Length::Fill)
            .height(wrapper_height)
            .direction(Direction::Vertical(Scrollbar::hidden()))
            .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y));

        let interaction = if self.drag.is_dragging {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        };

        let wheel = mouse_area(scrollable)
            .on_press(Message::Pressed)
            .on_release(Message::Released)
            .on_move(Message::CursorMoved)
            .on_exit(Message::CursorLeft)
            .interaction(interaction);

        let layers = Stack::new()
            .width(Length::Fill)
            .height(wrapper_height)
            .push(self.highlight_band())
            .push(wheel);

        Container::new(layers)
            .width(Length::Fill)
            .height(wrapper_height)
            .style(styles::container::wheel_background(self.style.background))
            .into()
    }

    /// Two lines framing the centre row.
    fn highlight_band<'a>(&self) -> Element<'a, Message> {
        let metrics = self.state.metrics();
        let border_width = self.style.border_width.value();
        let inner = (metrics.item_height() - 2.0 * border_width).max(0.0);
        let line = || {
            Container::new(Space::new())
                .width(Length::Fill)
                .height(border_width)
                .style(styles::container::highlight_line(self.style.highlight_color))
        };

        let band = Column::new()
            .width(HIGHLIGHT_BAND_WIDTH)
            .push(line())
            .push(Space::new().height(inner))
            .push(line());

        Container::new(band)
            .width(Length::Fill)
            .height(metrics.wrapper_height())
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}

fn default_row<'a, T: PickerItem>(item: &T, active: bool) -> Element<'a, Message> {
    let font = if active {
        Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        }
    } else {
        Font::DEFAULT
    };
    Text::new(item.to_string())
        .size(typography::BODY)
        .font(font)
        .style(styles::text::wheel_item(active))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_wheel(selected: u32) -> ScrollPicker<u32> {
        ScrollPicker::new("test-wheel", (1..=31).collect(), Some(selected))
            .metrics(Metrics::new(ItemHeight::new(20.0), 200.0))
    }

    fn drag(picker: &mut ScrollPicker<u32>, from_y: f32, to_y: f32) {
        let _ = picker.update(Message::CursorMoved(Point::new(10.0, from_y)));
        let _ = picker.update(Message::Pressed);
        let _ = picker.update(Message::CursorMoved(Point::new(10.0, to_y)));
        let _ = picker.update(Message::Released);
    }

    #[test]
    fn mount_centres_the_selected_row() {
        let mut picker = day_wheel(10);
        let _ = picker.update(Message::Mounted);
        assert!(picker.is_mounted());
        assert_eq!(picker.wheel().offset(), 180.0);
    }

    #[test]
    fn drag_then_settle_reports_the_new_value() {
        let mut picker = day_wheel(1);
        let _ = picker.update(Message::Mounted);

        drag(&mut picker, 100.0, 53.0);
        assert_eq!(picker.wheel().offset(), 47.0);

        let generation = picker.settle.generation();
        let (event, _) = picker.update(Message::SettleElapsed(generation));

        assert_eq!(event, Event::ValueChanged { value: 3, index: 2 });
        assert_eq!(picker.selected(), Some(&3));
        assert_eq!(picker.wheel().offset(), 40.0);
    }

    #[test]
    fn small_drag_snaps_back_without_change() {
        let mut picker = day_wheel(1);
        let _ = picker.update(Message::Mounted);

        drag(&mut picker, 100.0, 95.0);
        let generation = picker.settle.generation();
        let (event, _) = picker.update(Message::SettleElapsed(generation));

        assert_eq!(event, Event::Snapped { offset: 0.0 });
        assert_eq!(picker.selected(), Some(&1));
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut picker = day_wheel(1);
        let _ = picker.update(Message::Mounted);

        drag(&mut picker, 100.0, 53.0);
        let stale = picker.settle.generation();
        drag(&mut picker, 100.0, 60.0);

        let (event, _) = picker.update(Message::SettleElapsed(stale));
        assert_eq!(event, Event::None);
        assert_eq!(picker.selected(), Some(&1));
    }

    #[test]
    fn unmount_turns_pending_settle_into_no_op() {
        let mut picker = day_wheel(1);
        let _ = picker.update(Message::Mounted);
        drag(&mut picker, 100.0, 53.0);
        let generation = picker.settle.generation();

        picker.unmount();

        let (event, _) = picker.update(Message::SettleElapsed(generation));
        assert_eq!(event, Event::None);
        assert!(!picker.is_mounted());
    }

    #[test]
    fn wheel_scrolling_settles_when_idle() {
        let mut picker = day_wheel(1);
        let _ = picker.update(Message::Mounted);

        let _ = picker.update(Message::Scrolled(30.0));
        let _ = picker.update(Message::Scrolled(62.0));
        let generation = picker.wheel_idle.generation();

        let (event, _) = picker.update(Message::WheelIdle(generation));
        assert_eq!(event, Event::ValueChanged { value: 4, index: 3 });
    }

    #[test]
    fn momentum_cancels_a_pending_drag_settle() {
        let mut picker = day_wheel(1);
        let _ = picker.update(Message::Mounted);
        drag(&mut picker, 100.0, 53.0);
        let generation = picker.settle.generation();

        let _ = picker.update(Message::Scrolled(90.0));

        let (event, _) = picker.update(Message::SettleElapsed(generation));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn scroll_to_index_is_silent() {
        let mut picker = day_wheel(1);
        let _ = picker.update(Message::Mounted);

        let _ = picker.scroll_to_index(29);
        assert_eq!(picker.selected(), Some(&30));

        // Echo of the programmatic scroll
        let (event, _) = picker.update(Message::Scrolled(580.0));
        assert_eq!(event, Event::None);
        assert!(!picker.wheel_idle.is_pending());
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut picker = day_wheel(1);
        let _ = picker.update(Message::Mounted);
        let _ = picker.update(Message::Released);
        assert!(!picker.settle.is_pending());
    }

    #[test]
    fn default_style_uses_configured_highlight() {
        let style = WheelStyle::default();
        assert_eq!(
            style.highlight_color,
            Color::from_rgb8(0x33, 0x33, 0x33)
        );
    }

    #[test]
    fn parse_color_rejects_garbage() {
        assert!(parse_color("#ff0000").is_some());
        assert!(parse_color("not a color").is_none());
        assert!(parse_color("#fff").is_none());
        assert!(parse_color("ff0000").is_none());
        assert!(parse_color("#gg0000").is_none());
        assert!(parse_color("#+f0000").is_none());
    }

    #[test]
    fn parse_color_reads_rgb_and_rgba_hex() {
        assert_eq!(parse_color(" #333333 "), Some(Color::from_rgb8(0x33, 0x33, 0x33)));

        let translucent = parse_color("#ff000080").expect("rgba hex");
        assert_eq!(translucent, Color::from_rgba8(0xff, 0, 0, 128.0 / 255.0));
        assert!(translucent.a < 1.0);
    }
}
