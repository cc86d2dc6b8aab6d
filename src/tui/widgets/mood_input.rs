//! Mood text input and suggestion shortcuts

use crate::app::state::{Focus, Session, MOOD_SUGGESTIONS};
use crate::tui::theme::{LoadingSpinner, Theme};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "peaceful sunset, energetic morning, cozy winter evening...";

pub fn render(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let focused = session.focus == Focus::Input;

    let action = if session.is_generating() {
        format!(" {} Generating... ", LoadingSpinner::frame(session.tick))
    } else {
        format!(" {} Enter to generate ", theme.icons.sparkles)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set(focused))
        .border_style(Style::default().fg(theme.border_color(focused)))
        .title(" Describe your mood ")
        .title_style(Style::default().fg(theme.colors.accent))
        .title_bottom(Line::from(action).right_aligned());

    let content = if session.mood_input.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme.colors.fg_secondary),
        ))
    } else {
        Line::from(Span::styled(
            session.mood_input.as_str(),
            Style::default().fg(theme.colors.fg_primary),
        ))
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused {
        let x = inner.x + (session.mood_input.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

pub fn render_suggestions(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::styled(
        " Try: ",
        Style::default().fg(theme.colors.fg_secondary),
    )];

    for (i, (text, icon)) in MOOD_SUGGESTIONS
        .iter()
        .zip(theme.icons.suggestions())
        .enumerate()
    {
        spans.push(Span::styled(
            format!("F{} ", i + 1),
            Style::default()
                .fg(theme.colors.accent_alt)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{icon} {text}  "),
            Style::default().fg(theme.colors.fg_primary),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
