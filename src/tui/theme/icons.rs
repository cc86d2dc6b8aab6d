//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    pub palette: &'static str,
    pub sparkles: &'static str,
    pub copy: &'static str,
    pub download: &'static str,
    pub moon: &'static str,
    pub sun: &'static str,
    pub history: &'static str,

    // Suggestions
    pub heart: &'static str,
    pub zap: &'static str,
    pub coffee: &'static str,
    pub waves: &'static str,

    pub success: &'static str,
    pub error: &'static str,
    pub selected: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            palette: "\u{f53f}",   // nf-fa-palette
            sparkles: "\u{f005}",  // nf-fa-star
            copy: "\u{f0c5}",      // nf-fa-copy
            download: "\u{f019}",  // nf-fa-download
            moon: "\u{f186}",      // nf-fa-moon_o
            sun: "\u{f185}",       // nf-fa-sun_o
            history: "\u{f1da}",   // nf-fa-history

            heart: "\u{f004}",     // nf-fa-heart
            zap: "\u{f0e7}",       // nf-fa-bolt
            coffee: "\u{f0f4}",    // nf-fa-coffee
            waves: "\u{f773}",     // nf-fa-water

            success: "\u{f00c}",   // nf-fa-check
            error: "\u{f00d}",     // nf-fa-times
            selected: "\u{f054}",  // nf-fa-chevron_right
        }
    }

    /// Icon shown next to each mood suggestion, in suggestion order.
    pub fn suggestions(&self) -> [&'static str; 4] {
        [self.heart, self.zap, self.coffee, self.waves]
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        Self::BRAILLE[tick as usize % Self::BRAILLE.len()]
    }
}
