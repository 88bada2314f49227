// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style of the tappable date field. `open` draws the focused border while
/// the dialog is showing.
pub fn date_field(open: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let focused = open || matches!(status, button::Status::Hovered | button::Status::Pressed);

        let (border_color, border_width) = if focused {
            (colors.brand_primary, border::WIDTH_MD)
        } else {
            (colors.text_placeholder, border::WIDTH_SM)
        };

        button::Style {
            background: Some(Background::Color(colors.surface_primary)),
            text_color: colors.text_primary,
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn date_field_highlights_while_open() {
        let closed = date_field(false)(&Theme::Light, button::Status::Active);
        let open = date_field(true)(&Theme::Light, button::Status::Active);

        assert_eq!(closed.border.width, border::WIDTH_SM);
        assert_eq!(open.border.width, border::WIDTH_MD);
        assert_eq!(open.border.color, ColorScheme::light().brand_primary);
    }

    #[test]
    fn date_field_follows_theme_surface() {
        let dark = date_field(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            dark.background,
            Some(Background::Color(ColorScheme::dark().surface_primary))
        );
    }
}
