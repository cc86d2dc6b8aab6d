use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{Focus, Session};
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use tokio::sync::mpsc;

/// Read terminal events on a blocking thread. Poll timeouts become ticks so
/// spinners and toast expiry keep moving.
pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if !event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                if tx.blocking_send(Event::Tick).is_err() {
                    break;
                }
                continue;
            }
            let ev = match event::read() {
                Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                _ => continue,
            };
            if tx.blocking_send(Event::Input(ev)).is_err() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &Session, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::HistoryMove { dx: 0, dy: -1 }),
            MouseEventKind::ScrollDown => Some(Action::HistoryMove { dx: 0, dy: 1 }),
            _ => None,
        },
        InputEvent::Key(k) => handle_global(k).or_else(|| match state.focus {
            Focus::Input => handle_input(k),
            Focus::Swatches => handle_swatches(k),
            Focus::History => handle_history(k),
        }),
    }
}

fn ctrl(k: &KeyEvent) -> bool {
    k.modifiers.contains(KeyModifiers::CONTROL)
}

/// Keys that work regardless of focus.
fn handle_global(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('c') if ctrl(&k) => Some(Action::Quit),
        KeyCode::Char('t') if ctrl(&k) => Some(Action::ToggleDisplayMode),
        KeyCode::Char('e') if ctrl(&k) => Some(Action::ExportCurrent),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::F(n @ 1..=4) => Some(Action::ApplySuggestion(n as usize - 1)),
        _ => None,
    }
}

fn handle_input(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::FocusNext),
        KeyCode::Enter => Some(Action::Generate),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Down => Some(Action::FocusNext),
        KeyCode::Char('u') if ctrl(&k) => Some(Action::ClearInput),
        KeyCode::Char(_) if ctrl(&k) => None,
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_swatches(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SwatchLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SwatchRight),
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::CopySelected),
        KeyCode::Char('e') => Some(Action::ExportCurrent),
        KeyCode::Char('t') => Some(Action::ToggleDisplayMode),
        KeyCode::Up | KeyCode::Char('i') | KeyCode::Char('/') => Some(Action::FocusPrev),
        KeyCode::Down => Some(Action::FocusNext),
        _ => None,
    }
}

fn handle_history(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::HistoryMove { dx: -1, dy: 0 }),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::HistoryMove { dx: 1, dy: 0 }),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::HistoryMove { dx: 0, dy: -1 }),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::HistoryMove { dx: 0, dy: 1 }),
        KeyCode::Enter => Some(Action::SelectHistory),
        KeyCode::Char('e') => Some(Action::ExportCurrent),
        KeyCode::Char('t') => Some(Action::ToggleDisplayMode),
        KeyCode::Char('i') | KeyCode::Char('/') => Some(Action::FocusNext),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl_key(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn session(focus: Focus) -> Session {
        let mut s = Session::default();
        s.focus = focus;
        s
    }

    #[test]
    fn test_typing_in_input() {
        let s = session(Focus::Input);
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('q'))), Some(Action::InputChar('q')));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Enter)), Some(Action::Generate));
        assert_eq!(map_input_to_action(&s, ctrl_key('u')), Some(Action::ClearInput));
        assert_eq!(map_input_to_action(&s, ctrl_key('x')), None);
        assert_eq!(map_input_to_action(&s, key(KeyCode::Esc)), Some(Action::FocusNext));
    }

    #[test]
    fn test_global_keys_in_every_focus() {
        for focus in [Focus::Input, Focus::Swatches, Focus::History] {
            let s = session(focus);
            assert_eq!(map_input_to_action(&s, ctrl_key('t')), Some(Action::ToggleDisplayMode));
            assert_eq!(map_input_to_action(&s, ctrl_key('c')), Some(Action::Quit));
            assert_eq!(map_input_to_action(&s, key(KeyCode::F(3))), Some(Action::ApplySuggestion(2)));
            assert_eq!(map_input_to_action(&s, key(KeyCode::Tab)), Some(Action::FocusNext));
        }
    }

    #[test]
    fn test_focus_specific_keys() {
        let s = session(Focus::Swatches);
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('c'))), Some(Action::CopySelected));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('q'))), Some(Action::Quit));

        let s = session(Focus::History);
        assert_eq!(
            map_input_to_action(&s, key(KeyCode::Char('j'))),
            Some(Action::HistoryMove { dx: 0, dy: 1 })
        );
        assert_eq!(map_input_to_action(&s, key(KeyCode::Enter)), Some(Action::SelectHistory));
    }
}
