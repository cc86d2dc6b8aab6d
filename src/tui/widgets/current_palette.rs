//! The current palette as a row of color swatches

use crate::app::state::{Focus, Session};
use crate::palette::Palette;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{label_color, swatch_color};

pub fn render(frame: &mut Frame, session: &Session, palette: &Palette, theme: &Theme, area: Rect) {
    let focused = session.focus == Focus::Swatches;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set(focused))
        .border_style(Style::default().fg(theme.border_color(focused)))
        .title(Line::from(vec![
            Span::styled(
                format!(" \"{}\" ", palette.mood),
                Style::default()
                    .fg(theme.colors.fg_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("Generated {} ", palette.created_label()),
                Style::default().fg(theme.colors.fg_secondary),
            ),
        ]))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} c copy  {} e export ", theme.icons.copy, theme.icons.download),
                Style::default().fg(theme.colors.fg_secondary),
            ))
            .right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if palette.colors.is_empty() {
        frame.render_widget(
            Paragraph::new("No colors returned").style(Style::default().fg(theme.colors.fg_secondary)),
            inner,
        );
        return;
    }

    let n = palette.colors.len() as u32;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(inner);

    for (i, (color, cell)) in palette.colors.iter().zip(cols.iter()).enumerate() {
        let selected = focused && i == session.swatch_selected;
        let bg = swatch_color(color).unwrap_or(theme.colors.bg_secondary);
        let fg = label_color(color);

        let mut label_style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);
        if selected {
            label_style = label_style.add_modifier(Modifier::REVERSED);
        }

        let mut lines = vec![Line::default(); cell.height.saturating_sub(1) as usize];
        let marker = if selected { theme.icons.copy } else { " " };
        lines.push(Line::from(Span::styled(format!(" {marker} {color} "), label_style)));

        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(bg)),
            *cell,
        );
    }
}
