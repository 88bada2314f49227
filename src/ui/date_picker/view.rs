// SPDX-License-Identifier: MPL-2.0
//! Rendering of the date field and its modal dialog.

use super::{Message, State};
use crate::domain::DateField;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::scroll_picker;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::{Font, Weight};
use iced::widget::{button, opaque, Button, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Renders the field, plus the dialog on top of it while open.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let field = Container::new(date_field(state, ctx.i18n))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    if !state.is_open() {
        return field.into();
    }

    let backdrop = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    let dialog = Container::new(opaque(dialog(state, ctx.i18n)))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(field)
        .push(opaque(backdrop))
        .push(dialog)
        .into()
}

fn date_field<'a>(state: &'a State, i18n: &'a I18n) -> Button<'a, Message> {
    let value: Element<'a, Message> = match state.value() {
        Some(value) => Text::new(value).size(typography::BODY_LG).into(),
        None => Text::new(i18n.tr("date-field-placeholder"))
            .size(typography::BODY_LG)
            .style(styles::text::placeholder)
            .into(),
    };

    let hint = Text::new(i18n.tr("date-field-open-hint"))
        .size(typography::CAPTION)
        .style(styles::text::secondary);

    let content = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::XS)
        .push(value)
        .push(Space::new().width(Length::Fill))
        .push(hint);

    button(content)
        .width(sizing::FIELD_WIDTH)
        .height(sizing::INPUT_HEIGHT)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::date_field(state.is_open()))
        .on_press(Message::Toggle)
}

fn dialog<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("dialog-title"))
        .size(typography::TITLE_MD)
        .font(BOLD);

    let month_row = move |month: &u32, active: bool| -> Element<'a, scroll_picker::Message> {
        let name = i18n.tr(&format!("month-short-{month}"));
        Text::new(format!("{month} {name}"))
            .size(typography::BODY)
            .font(if active { BOLD } else { Font::DEFAULT })
            .style(styles::text::wheel_item(active))
            .into()
    };

    let wheels = Row::new()
        .spacing(spacing::XS)
        .push(wheel_column(
            i18n,
            DateField::Day,
            state.day_wheel().view(None),
        ))
        .push(wheel_column(
            i18n,
            DateField::Month,
            state.month_wheel().view(Some(&month_row)),
        ))
        .push(wheel_column(
            i18n,
            DateField::Year,
            state.year_wheel().view(None),
        ));

    let close = button(
        Container::new(Text::new(i18n.tr("dialog-close-button")).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(sizing::BUTTON_HEIGHT)
    .style(styles::button::primary)
    .on_press(Message::Dismiss);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(wheels)
        .push(close);

    Container::new(content)
        .width(sizing::DIALOG_WIDTH)
        .padding(spacing::MD)
        .style(styles::container::dialog)
        .into()
}

fn wheel_column<'a>(
    i18n: &'a I18n,
    field: DateField,
    wheel: Element<'a, scroll_picker::Message>,
) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr(field.label_key()))
        .size(typography::CAPTION)
        .style(styles::text::secondary);

    Column::new()
        .width(sizing::WHEEL_COLUMN_WIDTH)
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(wheel.map(move |message| Message::Wheel(field, message)))
        .into()
}
