use crate::replay::Paint;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub obstacle: Color,
    pub start_marker: Color, // Cyan accent on the '@'
    pub in_range: Color,     // Path within threshold
    pub over_threshold: Color,
    pub collision_fg: Color,
    pub collision_bg: Color,
    pub cursor: Color,
}

impl Theme {
    /// Background for an overlay paint
    pub fn paint_bg(&self, paint: Paint) -> Color {
        match paint {
            Paint::InRange => self.in_range,
            Paint::OverThreshold => self.over_threshold,
            Paint::Error => self.collision_bg,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border while drawing
    border_normal: Color::Rgb(108, 112, 134),  // Grey border when frozen
    status_bg: Color::Rgb(50, 50, 70),
    obstacle: Color::Rgb(186, 194, 222),
    start_marker: Color::Cyan,
    in_range: Color::Cyan,
    over_threshold: Color::Yellow,
    collision_fg: Color::White,
    collision_bg: Color::Red,
    cursor: Color::Red,
};
