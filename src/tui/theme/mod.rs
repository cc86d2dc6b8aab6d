//! Theme configuration - light and dark

pub mod borders;
pub mod colors;
pub mod icons;

use crate::storage::DisplayMode;
pub use borders::BorderStyle;
pub use colors::ThemeColors;
pub use icons::{Icons, LoadingSpinner};

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ThemeColors,
    pub icons: Icons,
}

impl Theme {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            colors: match mode {
                DisplayMode::Light => ThemeColors::LIGHT,
                DisplayMode::Dark => ThemeColors::DARK,
            },
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self, focused: bool) -> ratatui::symbols::border::Set<'static> {
        BorderStyle::to_border_set(focused)
    }

    pub fn border_color(&self, focused: bool) -> ratatui::style::Color {
        if focused {
            self.colors.border_focused
        } else {
            self.colors.border
        }
    }
}

pub fn get_theme(mode: DisplayMode) -> Theme {
    Theme::new(mode)
}
