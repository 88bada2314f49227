// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only keyboard dismissal needs a global listener; wheel gestures arrive
//! through the widgets themselves.

use super::Message;
use crate::ui::date_picker;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Listens for Escape while the dialog is open.
pub fn create_event_subscription(dialog_open: bool) -> Subscription<Message> {
    if dialog_open {
        event::listen_with(|event, _status, _window_id| dismiss_on_escape(&event))
    } else {
        Subscription::none()
    }
}

fn dismiss_on_escape(event: &event::Event) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::DatePicker(date_picker::Message::Dismiss)),
        _ => None,
    }
}
