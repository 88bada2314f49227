// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::opacity;
use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::{Color, Theme};

/// Wheel item text: full contrast for the centred item, faded otherwise.
pub fn wheel_item(active: bool) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let base = ColorScheme::for_theme(theme).text_primary;
        let color = if active {
            base
        } else {
            Color {
                a: opacity::INACTIVE_ITEM,
                ..base
            }
        };
        text::Style { color: Some(color) }
    }
}

/// Secondary text (wheel headings, hints).
pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

/// Placeholder shown in the empty date field.
pub fn placeholder(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_placeholder),
    }
}
