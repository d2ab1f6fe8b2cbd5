// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(background: Color, edge: Color, corner: f32, elevation: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: corner.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Main call to action (search, download).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            palette::PRIMARY_600,
            radius::SM,
            shadow::NONE,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            palette::PRIMARY_500,
            radius::SM,
            shadow::MD,
        ),
        button::Status::Disabled => disabled(),
    }
}

/// Round floating action button anchored over the grid.
pub fn floating(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled(
            palette::PRIMARY_500,
            palette::PRIMARY_600,
            radius::FULL,
            shadow::MD,
        ),
        button::Status::Hovered | button::Status::Pressed => filled(
            palette::PRIMARY_600,
            palette::PRIMARY_600,
            radius::FULL,
            shadow::LG,
        ),
        button::Status::Disabled => button::Style {
            border: Border {
                radius: radius::FULL.into(),
                ..disabled().border
            },
            ..disabled()
        },
    }
}

/// Grayed out, non-interactive.
fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_200
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
