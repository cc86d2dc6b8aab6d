pub mod current_palette;
pub mod history_grid;
pub mod mood_input;
pub mod root;
pub mod status;

use crate::palette::color::Rgba;
use ratatui::style::Color;

/// Terminal color for a palette entry, if it parses.
pub fn swatch_color(color: &str) -> Option<Color> {
    Rgba::parse(color).map(|c| Color::Rgb(c.r, c.g, c.b))
}

/// Black or white, whichever reads better on `color`.
pub fn label_color(color: &str) -> Color {
    match Rgba::parse(color) {
        Some(c) if c.is_light() => Color::Rgb(17, 24, 39),
        _ => Color::Rgb(255, 255, 255),
    }
}

pub fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    let char_count: usize = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}
