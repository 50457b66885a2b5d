//! # UI Styling Module
//!
//! Colors and widget styles for the channel grid and side panels.

use crate::thresholds::CellCategory;
use iced::widget::{button, container};
use iced::{Background, Border, Color};

pub const BRAND_BLUE: Color = Color::from_rgb(0.0, 0.322, 0.608);
pub const CONNECTED_GREEN: Color = Color::from_rgb(0.0, 0.5, 0.0);
pub const AUTO_BALANCE_GREEN: Color = Color::from_rgb(0.298, 0.686, 0.314);
pub const FORCE_BALANCE_RED: Color = Color::from_rgb(0.957, 0.263, 0.212);

const LIGHT_BLUE: Color = Color::from_rgb(0.678, 0.847, 0.902);
const LIGHT_GREEN: Color = Color::from_rgb(0.565, 0.933, 0.565);
const YELLOW: Color = Color::from_rgb(1.0, 1.0, 0.0);
const RED: Color = Color::from_rgb(1.0, 0.0, 0.0);

/// Background and text color for a cell category
pub fn cell_colors(category: CellCategory) -> (Color, Color) {
    match category {
        CellCategory::CriticalRed => (RED, Color::WHITE),
        CellCategory::WarningYellow => (YELLOW, Color::BLACK),
        CellCategory::LowBlue => (LIGHT_BLUE, Color::BLACK),
        CellCategory::HighGreen => (LIGHT_GREEN, Color::BLACK),
        CellCategory::NormalWhite => (Color::WHITE, Color::BLACK),
    }
}

/// Grooved cell box colored by category
pub fn cell_style(category: CellCategory) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme: &iced::Theme| {
        let (background, text_color) = cell_colors(category);
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: Border {
                color: Color::from_rgb(0.6, 0.6, 0.6),
                width: 1.0,
                radius: 2.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Large colored button for the balancing controls
pub fn balance_button_style(base: Color) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme: &iced::Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => lighten(base, 0.1),
            button::Status::Pressed => lighten(base, -0.1),
            // Buttons are not wired up, so they usually render as disabled
            button::Status::Active | button::Status::Disabled => base,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: Border {
                color: lighten(base, -0.15),
                width: 3.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
}

fn lighten(color: Color, amount: f32) -> Color {
    Color::from_rgb(
        (color.r + amount).clamp(0.0, 1.0),
        (color.g + amount).clamp(0.0, 1.0),
        (color.b + amount).clamp(0.0, 1.0),
    )
}
