//! Bottom status line: the active toast, or key hints

use crate::app::state::{Focus, Session, ToastKind};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let line = match &session.toast {
        Some(toast) => {
            let (icon, color) = match toast.kind {
                ToastKind::Success => (theme.icons.success, theme.colors.success),
                ToastKind::Error => (theme.icons.error, theme.colors.error),
            };
            Line::from(vec![
                Span::styled(
                    format!(" {icon} {} ", toast.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(toast.message.as_str(), Style::default().fg(theme.colors.fg_primary)),
            ])
        }
        None => Line::from(Span::styled(
            hints(session.focus),
            Style::default().fg(theme.colors.fg_secondary),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Input => " Enter generate  ^U clear  F1-F4 suggest  Tab focus  ^E export  ^T theme  Esc leave  ^C quit",
        Focus::Swatches => " ←/→ select  c copy  e export  Tab focus  t theme  q quit",
        Focus::History => " arrows move  Enter open  e export  Tab focus  t theme  q quit",
    }
}
