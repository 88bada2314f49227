// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the date picker, the localization bundle and the
//! diagnostics collector. Picker events are turned into diagnostic records
//! here so the component itself stays free of logging concerns.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::ReferenceDate;
use crate::i18n::fluent::I18n;
use crate::ui::date_picker::{self, WheelSettings};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Diagnostic events listed in the window with `--verbose`.
const EVENT_LOG_LINES: usize = 6;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    date_picker: date_picker::State,
    diagnostics: DiagnosticsCollector,
    /// i18n key of a startup warning still shown to the user.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("dialog_open", &self.date_picker.is_open())
            .field("value", &self.date_picker.value())
            .finish()
    }
}

/// Builds the window settings. The default size mimics a phone held upright.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::DIALOG_WIDTH + 2.0 * spacing::MD,
            sizing::WINDOW_HEIGHT / 2.0,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, warning) = config::load();
        (Self::with_config(flags, &config, warning), Task::none())
    }

    fn with_config(flags: Flags, config: &Config, warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, flags.i18n_dir, config);
        let reference = flags.today.unwrap_or_else(ReferenceDate::today);
        let settings = WheelSettings::from_config(config);

        let mut diagnostics = DiagnosticsCollector::new(BufferCapacity::default(), flags.verbose);
        if let Some(key) = &warning {
            diagnostics.log_warning(key.clone());
        }

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            date_picker: date_picker::State::new(reference, &settings),
            diagnostics,
            warning,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.date_picker.is_open())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DatePicker(message) => {
                let (event, task) = self.date_picker.update(message);
                self.record(event);
                task.map(Message::DatePicker)
            }
            Message::DismissWarning => {
                self.warning = None;
                Task::none()
            }
        }
    }

    fn record(&mut self, event: date_picker::Event) {
        match event {
            date_picker::Event::None => {}
            date_picker::Event::Opened => self.diagnostics.log(DiagnosticEventKind::DialogOpened),
            date_picker::Event::Confirmed { value } => self
                .diagnostics
                .log(DiagnosticEventKind::DialogConfirmed { value }),
            date_picker::Event::Changed {
                field,
                value,
                index,
                days,
            } => {
                self.diagnostics.log(DiagnosticEventKind::ValueChanged {
                    field,
                    value,
                    index,
                });
                if let Some(days) = days {
                    if days.resized {
                        self.diagnostics
                            .log(DiagnosticEventKind::DayListResized { count: days.count });
                    }
                    if let Some(day) = days.clamped_to {
                        self.diagnostics.log(DiagnosticEventKind::DayClamped { day });
                    }
                }
            }
            date_picker::Event::Snapped { field, offset } => self
                .diagnostics
                .log(DiagnosticEventKind::Snapped { field, offset }),
        }
    }

    /// Latest diagnostic events, newest first. Empty unless `--verbose`.
    fn event_log(&self) -> Vec<String> {
        if !self.diagnostics.is_verbose() {
            return Vec::new();
        }
        self.diagnostics
            .recent(EVENT_LOG_LINES)
            .map(ToString::to_string)
            .collect()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            date_picker: &self.date_picker,
            warning: self.warning.as_deref(),
            event_log: self.event_log(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateField;
    use crate::ui::scroll_picker;

    fn test_app(today: &str) -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            today: Some(ReferenceDate::parse(today).expect("valid date")),
            ..Flags::default()
        };
        App::with_config(flags, &Config::default(), None)
    }

    fn picker(message: date_picker::Message) -> Message {
        Message::DatePicker(message)
    }

    fn wheel(field: DateField, message: scroll_picker::Message) -> Message {
        picker(date_picker::Message::Wheel(field, message))
    }

    #[test]
    fn title_is_localized() {
        let app = test_app("2023-07-04");
        assert_eq!(app.title(), "Date of birth");
    }

    #[test]
    fn startup_warning_is_recorded_and_dismissable() {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        };
        let mut app = App::with_config(
            flags,
            &Config::default(),
            Some("notification-config-load-error".to_string()),
        );
        assert_eq!(
            app.diagnostics.recent(1).next(),
            Some(&DiagnosticEventKind::Warning {
                key: "notification-config-load-error".to_string()
            })
        );

        let _ = app.update(Message::DismissWarning);
        assert!(app.warning.is_none());
    }

    #[test]
    fn open_and_close_are_logged() {
        let mut app = test_app("2023-07-04");

        let _ = app.update(picker(date_picker::Message::Toggle));
        assert_eq!(
            app.diagnostics.recent(1).next(),
            Some(&DiagnosticEventKind::DialogOpened)
        );

        let _ = app.update(picker(date_picker::Message::Dismiss));
        assert_eq!(
            app.diagnostics.recent(1).next(),
            Some(&DiagnosticEventKind::DialogConfirmed {
                value: "4/7/2023".to_string()
            })
        );
        assert_eq!(app.date_picker.value(), Some("4/7/2023"));
    }

    #[test]
    fn month_change_logs_resize_and_clamp() {
        let mut app = test_app("2023-01-31");
        let _ = app.update(picker(date_picker::Message::Toggle));
        let _ = app.update(wheel(DateField::Month, scroll_picker::Message::Mounted));

        // Drag the month wheel three rows down: January -> April.
        let item = app.date_picker.month_wheel().wheel().metrics().item_height();
        let _ = app.update(wheel(
            DateField::Month,
            scroll_picker::Message::CursorMoved(iced::Point::new(10.0, 100.0)),
        ));
        let _ = app.update(wheel(DateField::Month, scroll_picker::Message::Pressed));
        let _ = app.update(wheel(
            DateField::Month,
            scroll_picker::Message::CursorMoved(iced::Point::new(10.0, 100.0 - 3.0 * item)),
        ));
        let _ = app.update(wheel(DateField::Month, scroll_picker::Message::Released));
        let _ = app.update(wheel(
            DateField::Month,
            scroll_picker::Message::SettleElapsed(1),
        ));

        let kinds: Vec<_> = app.diagnostics.recent(usize::MAX).collect();
        assert!(kinds.contains(&&DiagnosticEventKind::ValueChanged {
            field: DateField::Month,
            value: "4".to_string(),
            index: 3,
        }));
        assert!(kinds.contains(&&DiagnosticEventKind::DayListResized { count: 30 }));
        assert!(kinds.contains(&&DiagnosticEventKind::DayClamped { day: 30 }));
    }

    #[test]
    fn event_log_is_hidden_without_verbose() {
        let mut app = test_app("2023-07-04");
        let _ = app.update(picker(date_picker::Message::Toggle));
        assert!(app.event_log().is_empty());
    }

    #[test]
    fn verbose_event_log_lists_newest_first_and_is_bounded() {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            today: Some(ReferenceDate::parse("2023-07-04").expect("valid date")),
            verbose: true,
            ..Flags::default()
        };
        let mut app = App::with_config(flags, &Config::default(), None);

        for _ in 0..EVENT_LOG_LINES {
            let _ = app.update(picker(date_picker::Message::Toggle));
            let _ = app.update(picker(date_picker::Message::Dismiss));
        }

        let log = app.event_log();
        assert_eq!(log.len(), EVENT_LOG_LINES);
        assert_eq!(log[0], "dialog confirmed: 4/7/2023");
        assert_eq!(log[1], "dialog opened");
    }
}
