// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::date_picker::{self, ViewContext as DatePickerViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub date_picker: &'a date_picker::State,
    /// i18n key of the pending startup warning.
    pub warning: Option<&'a str>,
    /// Recent diagnostic events, newest first; empty hides the panel.
    pub event_log: Vec<String>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let picker = date_picker::view(ctx.date_picker, DatePickerViewContext { i18n: ctx.i18n })
        .map(Message::DatePicker);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.warning {
        column = column.push(warning_banner(ctx.i18n, key));
    }

    column = column.push(picker);
    if !ctx.event_log.is_empty() {
        column = column.push(event_log(ctx.i18n, ctx.event_log));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn event_log<'a>(i18n: &'a I18n, lines: Vec<String>) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("event-log-title"))
        .size(typography::CAPTION)
        .style(styles::text::secondary);

    let entries = lines.into_iter().fold(
        Column::new().spacing(spacing::XXS).push(heading),
        |column, line| column.push(Text::new(line).size(typography::CAPTION)),
    );

    Container::new(entries)
        .width(Length::Fill)
        .padding(spacing::XS)
        .into()
}

fn warning_banner<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    let dismiss = button(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
        .style(styles::button::primary)
        .on_press(Message::DismissWarning);

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(dismiss);

    Container::new(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::warning),
    )
    .padding(spacing::XS)
    .into()
}
