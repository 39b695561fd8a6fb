//! Styling utilities and color schemes
//!
//! This module contains icon glyphs, color helpers and style constants used throughout the UI.

use crate::sidebar::Icon;
use ratatui::style::Color;

/// Glyph for a symbolic sidebar icon
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Indentation => "↳",
        Icon::Key => "⚿",
        Icon::Globe => "◍",
        Icon::Info => "ⓘ",
        Icon::Ellipsis => "⋯",
    }
}

/// Get the color for an HTTP method
pub fn get_method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Blue,
        "PUT" => Color::Yellow,
        "DELETE" => Color::Red,
        "PATCH" => Color::Cyan,
        _ => Color::White,
    }
}

pub fn expand_marker(expanded: bool) -> &'static str {
    if expanded {
        "▼"
    } else {
        "▶"
    }
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

pub fn section_title() -> Color {
    Color::Cyan
}

pub fn tooltip_fg() -> Color {
    Color::DarkGray
}

pub fn modal_bg() -> Color {
    Color::Rgb(30, 30, 30)
}
