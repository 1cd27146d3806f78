//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

pub const TITLE_COLOR: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const INDEX_COLOR: Color = Color::DarkGray;
pub const ROW_ALT_BG: Color = Color::Indexed(235);
pub const BAR_EMPTY: Color = Color::DarkGray;
pub const STATUS_BAR_BG: Color = Color::Indexed(236);
pub const STATUS_KEY_COLOR: Color = Color::Cyan;
pub const FLASH_SUCCESS: Color = Color::Green;
pub const FLASH_ERROR: Color = Color::Red;
pub const SELECTOR_ACTIVE: Color = Color::Yellow;

pub const HEADER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
pub const ROW_SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Returns the appropriate color for a score based on its share of the
/// leading score (traffic light pattern: leaders red-hot, trailers green)
pub fn score_color(score: i64, max_score: i64) -> Color {
    let percentage = if max_score > 0 {
        (score as f64 / max_score as f64) * 100.0
    } else {
        0.0
    };

    if percentage >= 70.0 {
        Color::Red
    } else if percentage >= 40.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}
