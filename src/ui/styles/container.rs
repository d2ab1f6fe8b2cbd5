// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface framing one photo in the grid.
///
/// Derived from the active theme so tiles stay readable in light and dark
/// modes without hard-coded colors.
pub fn tile(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Neutral block shown in place of a thumbnail that is loading or failed.
pub fn placeholder(theme: &Theme) -> container::Style {
    let text = theme.palette().text;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PLACEHOLDER,
            ..text
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(palette::GRAY_400),
        ..Default::default()
    }
}

/// Bubble behind tooltip text, inverted against the theme for contrast.
pub fn tooltip(theme: &Theme) -> container::Style {
    let bg = theme.palette().background;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;
    let (background, text) = if is_dark {
        (palette::GRAY_200, palette::BLACK)
    } else {
        (palette::GRAY_400, palette::WHITE)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_follows_theme_background() {
        let light = tile(&Theme::Light);
        let dark = tile(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn placeholder_is_translucent() {
        let style = placeholder(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < opacity::OPAQUE),
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn tooltip_inverts_theme() {
        assert_eq!(tooltip(&Theme::Dark).text_color, Some(palette::BLACK));
        assert_eq!(tooltip(&Theme::Light).text_color, Some(palette::WHITE));
    }
}
