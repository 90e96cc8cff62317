//! Palette and per-category styling.

use ratatui::style::{Color, Modifier, Style};

use crate::model::Category;

pub const CYAN: Color = Color::Rgb(0, 243, 255);
pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
pub const LIME: Color = Color::Rgb(207, 255, 4);
pub const AMBER: Color = Color::Rgb(255, 189, 0);

/// How a category is drawn in the list, on the map, and in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub color: Color,
    pub label: &'static str,
}

impl CategoryStyle {
    pub fn of(category: Category) -> Self {
        match category {
            Category::Service => Self {
                color: CYAN,
                label: "SERVICE",
            },
            Category::Physical => Self {
                color: MAGENTA,
                label: "PHYSICAL",
            },
            Category::Technical => Self {
                color: LIME,
                label: "TECHNICAL",
            },
            Category::Creative => Self {
                color: AMBER,
                label: "CREATIVE",
            },
        }
    }

    pub fn style(self) -> Style {
        Style::default().fg(self.color)
    }
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn normal() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn highlight() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn accent() -> Style {
    Style::default().fg(CYAN).add_modifier(Modifier::BOLD)
}
