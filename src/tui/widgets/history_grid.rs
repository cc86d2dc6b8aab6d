//! Grid of recent palettes

use crate::app::state::{Focus, Session, HISTORY_COLUMNS};
use crate::palette::Palette;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{swatch_color, truncate_str};

const CARD_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let focused = session.focus == Focus::History;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set(focused))
        .border_style(Style::default().fg(theme.border_color(focused)))
        .title(format!(" {} Recent Palettes ", theme.icons.history))
        .title_style(Style::default().fg(theme.colors.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if session.history.is_empty() {
        let empty = Paragraph::new(Line::from(
            "No palettes yet. Describe a mood and press Enter.",
        ))
        .style(Style::default().fg(theme.colors.fg_secondary));
        frame.render_widget(empty, inner);
        return;
    }

    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = session.history_selected / HISTORY_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(inner);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, HISTORY_COLUMNS as u32); HISTORY_COLUMNS])
            .split(*row_area);
        for (c, cell) in cols.iter().enumerate() {
            let index = (first_row + r) * HISTORY_COLUMNS + c;
            if let Some(palette) = session.history.get(index) {
                let selected = focused && index == session.history_selected;
                render_card(frame, palette, selected, theme, *cell);
            }
        }
    }
}

fn render_card(frame: &mut Frame, palette: &Palette, selected: bool, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set(selected))
        .border_style(Style::default().fg(theme.border_color(selected)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let n = palette.colors.len().max(1);
    let mut strip = Vec::with_capacity(n);
    for (i, color) in palette.colors.iter().enumerate() {
        let cell = width * (i + 1) / n - width * i / n;
        let bg = swatch_color(color).unwrap_or(theme.colors.bg_secondary);
        strip.push(Span::styled(" ".repeat(cell), Style::default().bg(bg)));
    }

    let marker = if selected { theme.icons.selected } else { " " };
    let date = palette.created_date();
    let mood_width = width.saturating_sub(date.chars().count() + 5);
    let caption = Line::from(vec![
        Span::styled(
            format!("{marker} \"{}\" ", truncate_str(&palette.mood, mood_width)),
            Style::default()
                .fg(theme.colors.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(date, Style::default().fg(theme.colors.fg_secondary)),
    ]);

    frame.render_widget(Paragraph::new(vec![Line::from(strip), caption]), inner);
}
