//! Root layout widget - orchestrates main layout structure

use crate::app::state::Session;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{current_palette, history_grid, mood_input, status};

/// Main layout structure:
/// ┌─────────────────────────────────────────────┐
/// │ Mood Palette                       ☾ dark   │
/// │ ╭ Describe your mood ───────────────────╮   │
/// │ ╰───────────────────────────────────────╯   │
/// │ Try: F1 romantic sunset  F2 ...             │
/// │ ╭ "current mood" ───────────────────────╮   │
/// │ │ ████████ ████████ ████████ ████████   │   │
/// │ ╰───────────────────────────────────────╯   │
/// │ ╭ Recent Palettes ──────────────────────╮   │
/// │ ╰───────────────────────────────────────╯   │
/// │ status / toast                              │
/// └─────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, session: &Session) {
    let theme = get_theme(session.display_mode);
    let root = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.colors.bg_primary)),
        root,
    );

    let palette_height = if session.current.is_some() { 8 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Header
            Constraint::Length(3),              // Mood input
            Constraint::Length(1),              // Suggestions
            Constraint::Length(palette_height), // Current palette
            Constraint::Min(4),                 // History grid
            Constraint::Length(1),              // Status bar
        ])
        .split(root);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(rows[0]);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} Mood Palette ", theme.icons.palette),
            Style::default()
                .fg(theme.colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Transform your emotions into colors",
            Style::default().fg(theme.colors.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), header[0]);

    let mode_icon = if session.display_mode.is_dark() {
        theme.icons.sun
    } else {
        theme.icons.moon
    };
    let mode = Paragraph::new(Line::from(Span::styled(
        format!("{} {} (^T) ", mode_icon, session.display_mode.label()),
        Style::default().fg(theme.colors.fg_secondary),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(mode, header[1]);

    mood_input::render(frame, session, &theme, rows[1]);
    mood_input::render_suggestions(frame, &theme, rows[2]);
    if let Some(palette) = &session.current {
        current_palette::render(frame, session, palette, &theme, rows[3]);
    }
    history_grid::render(frame, session, &theme, rows[4]);
    status::render(frame, session, &theme, rows[5]);
}
