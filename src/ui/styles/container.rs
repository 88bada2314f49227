// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed layer covering the screen behind the dialog.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).backdrop)),
        ..Default::default()
    }
}

/// Surface of the modal dialog.
pub fn dialog(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Wheel background. Without an explicit color the theme's secondary surface
/// is used.
pub fn wheel_background(color: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(
            color.unwrap_or_else(|| ColorScheme::for_theme(theme).surface_secondary),
        )),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One of the two lines framing the selected row.
pub fn highlight_line(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Inline warning banner.
pub fn warning(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.warning,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_line_uses_given_color() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let style = highlight_line(red)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(red)));
    }

    #[test]
    fn wheel_background_defaults_to_theme_surface() {
        let style = wheel_background(None)(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::dark().surface_secondary))
        );
    }

    #[test]
    fn backdrop_is_translucent() {
        match backdrop(&Theme::Light).background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("unexpected backdrop background: {other:?}"),
        }
    }
}
