// SPDX-License-Identifier: MPL-2.0
//! Date-of-birth picker: a field that opens a modal dialog with day, month
//! and year wheels.
//!
//! The dialog has two phases. Opening it never changes the selection.
//! Every way of closing it commits the composed `day/month/year` value to
//! the field.

mod view;

pub use view::{view, ViewContext};

use crate::config::{Config, DEFAULT_ITEM_HEIGHT, DEFAULT_WRAPPER_HEIGHT};
use crate::domain::calendar::{day_series, month_series};
use crate::domain::wheel::{BorderWidth, ItemHeight, SettleDelay, WheelIdle};
use crate::domain::{DateField, DateSelection, DayAdjustment, ReferenceDate, YearRange};
use crate::ui::scroll_picker::{
    self, parse_color, resolve_wrapper_height, Metrics, PickerItem, ScrollPicker, WheelStyle,
};
use iced::Task;

/// Wheel appearance and timing shared by the three wheels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSettings {
    pub metrics: Metrics,
    pub style: WheelStyle,
    pub settle_delay: SettleDelay,
    pub wheel_idle: WheelIdle,
    pub year_range: YearRange,
}

impl WheelSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let picker = &config.picker;
        let item_height = ItemHeight::new(picker.item_height.unwrap_or(DEFAULT_ITEM_HEIGHT));

        // A style height only applies when no explicit height is configured.
        let explicit = picker
            .wrapper_height
            .or_else(|| picker.style_height.is_none().then_some(DEFAULT_WRAPPER_HEIGHT));
        let wrapper_height =
            resolve_wrapper_height(explicit, picker.style_height.as_deref(), item_height);

        let defaults = WheelStyle::default();
        let style = WheelStyle {
            highlight_color: picker
                .highlight_color
                .as_deref()
                .and_then(parse_color)
                .unwrap_or(defaults.highlight_color),
            border_width: picker
                .highlight_border_width
                .map_or(defaults.border_width, BorderWidth::new),
            background: None,
        };

        let calendar = &config.calendar;
        let fallback = YearRange::default();
        let year_range = YearRange::new(
            calendar.first_year.unwrap_or(fallback.first()),
            calendar.last_year.unwrap_or(fallback.last()),
        );

        Self {
            metrics: Metrics::new(item_height, wrapper_height),
            style,
            settle_delay: picker
                .settle_delay_ms
                .map_or_else(SettleDelay::default, SettleDelay::new),
            wheel_idle: picker
                .wheel_idle_ms
                .map_or_else(WheelIdle::default, WheelIdle::new),
            year_range,
        }
    }
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Open,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The field was tapped: opens a closed dialog, confirms an open one.
    Toggle,
    /// Close button or platform dismiss. Confirms when open.
    Dismiss,
    Wheel(DateField, scroll_picker::Message),
}

/// How the day wheel was adjusted after a month or year change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayListUpdate {
    pub count: u32,
    /// The list length changed.
    pub resized: bool,
    pub clamped_to: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Opened,
    Confirmed {
        value: String,
    },
    Changed {
        field: DateField,
        value: String,
        index: usize,
        days: Option<DayListUpdate>,
    },
    Snapped {
        field: DateField,
        offset: f32,
    },
}

#[derive(Debug)]
pub struct State {
    reference: ReferenceDate,
    selection: DateSelection,
    value: Option<String>,
    phase: Phase,
    day: ScrollPicker<u32>,
    month: ScrollPicker<u32>,
    year: ScrollPicker<i32>,
}

impl State {
    #[must_use]
    pub fn new(reference: ReferenceDate, settings: &WheelSettings) -> Self {
        let selection = DateSelection::default();
        let day = configure(
            ScrollPicker::new(
                DateField::Day.scrollable_id(),
                day_series(selection.day_count(&reference)),
                Some(selection.effective_day(&reference)),
            ),
            settings,
        );
        let month = configure(
            ScrollPicker::new(
                DateField::Month.scrollable_id(),
                month_series(),
                Some(selection.effective_month(&reference)),
            ),
            settings,
        );
        let year = configure(
            ScrollPicker::new(
                DateField::Year.scrollable_id(),
                settings.year_range.series(),
                Some(selection.effective_year(&reference)),
            ),
            settings,
        );

        Self {
            reference,
            selection,
            value: None,
            phase: Phase::Closed,
            day,
            month,
            year,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The committed value, `None` until the dialog was closed once.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    pub fn reference(&self) -> ReferenceDate {
        self.reference
    }

    pub fn day_wheel(&self) -> &ScrollPicker<u32> {
        &self.day
    }

    pub fn month_wheel(&self) -> &ScrollPicker<u32> {
        &self.month
    }

    pub fn year_wheel(&self) -> &ScrollPicker<i32> {
        &self.year
    }

    // =========================================================================
    // Update
    // =========================================================================

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Toggle => match self.phase {
                Phase::Closed => self.open(),
                Phase::Open => self.confirm(),
            },
            Message::Dismiss => match self.phase {
                Phase::Open => self.confirm(),
                Phase::Closed => (Event::None, Task::none()),
            },
            Message::Wheel(field, message) => self.update_wheel(field, message),
        }
    }

    fn open(&mut self) -> (Event, Task<Message>) {
        self.phase = Phase::Open;

        // Re-centre every wheel on the effective date.
        let reference = self.reference;
        self.day
            .set_items(day_series(self.selection.day_count(&reference)));
        self.day
            .select(Some(self.selection.effective_day(&reference)));
        self.month
            .select(Some(self.selection.effective_month(&reference)));
        self.year
            .select(Some(self.selection.effective_year(&reference)));

        let task = Task::batch([
            wheel_task(DateField::Day, self.day.mount()),
            wheel_task(DateField::Month, self.month.mount()),
            wheel_task(DateField::Year, self.year.mount()),
        ]);
        (Event::Opened, task)
    }

    fn confirm(&mut self) -> (Event, Task<Message>) {
        let value = self.selection.format(&self.reference);
        self.value = Some(value.clone());
        self.phase = Phase::Closed;
        self.day.unmount();
        self.month.unmount();
        self.year.unmount();
        (Event::Confirmed { value }, Task::none())
    }

    fn update_wheel(
        &mut self,
        field: DateField,
        message: scroll_picker::Message,
    ) -> (Event, Task<Message>) {
        match field {
            DateField::Day => {
                let (event, task) = self.day.update(message);
                let event = match event {
                    scroll_picker::Event::ValueChanged { value, index } => {
                        self.selection.set_day(value);
                        changed(field, value, index, None)
                    }
                    other => passthrough(field, other),
                };
                (event, wheel_task(field, task))
            }
            DateField::Month => {
                let (event, task) = self.month.update(message);
                match event {
                    scroll_picker::Event::ValueChanged { value, index } => {
                        let adjustment = self.selection.set_month(value, &self.reference);
                        let (days, days_task) = self.refresh_days(adjustment);
                        (
                            changed(field, value, index, Some(days)),
                            Task::batch([wheel_task(field, task), days_task]),
                        )
                    }
                    other => (passthrough(field, other), wheel_task(field, task)),
                }
            }
            DateField::Year => {
                let (event, task) = self.year.update(message);
                match event {
                    scroll_picker::Event::ValueChanged { value, index } => {
                        let adjustment = self.selection.set_year(value, &self.reference);
                        let (days, days_task) = self.refresh_days(adjustment);
                        (
                            changed(field, value, index, Some(days)),
                            Task::batch([wheel_task(field, task), days_task]),
                        )
                    }
                    other => (passthrough(field, other), wheel_task(field, task)),
                }
            }
        }
    }

    /// Rebuilds the day list for the new month length and moves the day
    /// wheel onto a clamped day.
    fn refresh_days(&mut self, adjustment: DayAdjustment) -> (DayListUpdate, Task<Message>) {
        let previous = self.day.items().len();
        let resized = previous != adjustment.day_count as usize;
        if resized {
            self.day.set_items(day_series(adjustment.day_count));
        }

        let task = match adjustment.clamped_to {
            Some(day) => wheel_task(
                DateField::Day,
                self.day.scroll_to_index(day.saturating_sub(1) as usize),
            ),
            None => Task::none(),
        };

        let update = DayListUpdate {
            count: adjustment.day_count,
            resized,
            clamped_to: adjustment.clamped_to,
        };
        (update, task)
    }
}

fn configure<T: PickerItem>(picker: ScrollPicker<T>, settings: &WheelSettings) -> ScrollPicker<T> {
    picker
        .metrics(settings.metrics)
        .style(settings.style)
        .settle_delay(settings.settle_delay)
        .wheel_idle(settings.wheel_idle)
}

fn wheel_task(field: DateField, task: Task<scroll_picker::Message>) -> Task<Message> {
    task.map(move |message| Message::Wheel(field, message))
}

fn changed<T: PickerItem>(
    field: DateField,
    value: T,
    index: usize,
    days: Option<DayListUpdate>,
) -> Event {
    Event::Changed {
        field,
        value: value.to_string(),
        index,
        days,
    }
}

fn passthrough<T>(field: DateField, event: scroll_picker::Event<T>) -> Event {
    match event {
        scroll_picker::Event::Snapped { offset } => Event::Snapped { field, offset },
        scroll_picker::Event::ValueChanged { .. } | scroll_picker::Event::None => Event::None,
    }
}
