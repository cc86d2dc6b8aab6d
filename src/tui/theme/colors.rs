//! UI colors for the two display modes

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub border_focused: Color,
    pub success: Color,
    pub error: Color,
}

impl ThemeColors {
    pub const LIGHT: Self = Self {
        bg_primary: Color::Rgb(250, 245, 255),   // #faf5ff purple-50
        bg_secondary: Color::Rgb(243, 244, 246), // #f3f4f6 gray-100
        fg_primary: Color::Rgb(31, 41, 55),      // #1f2937 gray-800
        fg_secondary: Color::Rgb(107, 114, 128), // #6b7280 gray-500
        accent: Color::Rgb(147, 51, 234),        // #9333ea purple-600
        accent_alt: Color::Rgb(219, 39, 119),    // #db2777 pink-600
        border: Color::Rgb(209, 213, 219),       // #d1d5db gray-300
        border_focused: Color::Rgb(168, 85, 247), // #a855f7 purple-500
        success: Color::Rgb(22, 163, 74),        // #16a34a
        error: Color::Rgb(220, 38, 38),          // #dc2626
    };

    pub const DARK: Self = Self {
        bg_primary: Color::Rgb(17, 24, 39),      // #111827 gray-900
        bg_secondary: Color::Rgb(31, 41, 55),    // #1f2937 gray-800
        fg_primary: Color::Rgb(229, 231, 235),   // #e5e7eb gray-200
        fg_secondary: Color::Rgb(156, 163, 175), // #9ca3af gray-400
        accent: Color::Rgb(192, 132, 252),       // #c084fc purple-400
        accent_alt: Color::Rgb(244, 114, 182),   // #f472b6 pink-400
        border: Color::Rgb(55, 65, 81),          // #374151 gray-700
        border_focused: Color::Rgb(192, 132, 252),
        success: Color::Rgb(74, 222, 128),       // #4ade80
        error: Color::Rgb(248, 113, 113),        // #f87171
    };
}
