//! Border styles

use ratatui::symbols::border;

/// Rounded borders everywhere; focused panels get the thick set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderStyle;

impl BorderStyle {
    pub fn to_border_set(focused: bool) -> border::Set<'static> {
        if focused { border::THICK } else { border::ROUNDED }
    }
}
