use crate::palette::{History, Palette};
use crate::service::{GenerationError, ValidationError, validate_mood};
use crate::storage::DisplayMode;
use std::time::{Duration, Instant};

/// Quick-fill moods offered under the input.
pub const MOOD_SUGGESTIONS: [&str; 4] = [
    "romantic sunset",
    "energetic morning",
    "cozy winter evening",
    "peaceful ocean breeze",
];

/// Columns in the history grid.
pub const HISTORY_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Swatches,
    History,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Swatches,
            Focus::Swatches => Focus::History,
            Focus::History => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::History,
            Focus::Swatches => Focus::Input,
            Focus::History => Focus::Swatches,
        }
    }
}

/// Identifies one generation request so late responses can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Generating {
        request: RequestId,
    },
}

/// What the runtime must do to start a generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub request: RequestId,
    pub mood: String,
    /// Request this one replaces, if any was still pending.
    pub superseded: Option<RequestId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// New palette is current and at the head of the history.
    Applied,
    Failed,
    /// Response for a request that is no longer the latest; ignored.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: ToastKind::Success,
            created_at: Instant::now(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: ToastKind::Error,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// All UI state, changed only through the transition methods below.
#[derive(Debug, Default)]
pub struct Session {
    pub should_quit: bool,
    pub tick: u64,

    pub focus: Focus,
    pub mood_input: String,

    pub current: Option<Palette>,
    pub history: History,
    pub display_mode: DisplayMode,
    pub phase: Phase,
    last_request: u64,

    pub swatch_selected: usize,
    pub history_selected: usize,

    pub toast: Option<Toast>,
}

impl Session {
    pub fn new(history: History, display_mode: DisplayMode) -> Self {
        Self {
            history,
            display_mode,
            ..Default::default()
        }
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.phase, Phase::Generating { .. })
    }

    /// Validate the input and move to `Generating`.
    ///
    /// A blank mood leaves the phase untouched and raises an error toast.
    pub fn begin_generation(&mut self) -> Result<Ticket, ValidationError> {
        let mood = match validate_mood(&self.mood_input) {
            Ok(m) => m.to_string(),
            Err(e) => {
                self.toast = Some(Toast::error(
                    "Please enter a mood",
                    "Describe your mood to generate a palette",
                ));
                return Err(e);
            }
        };

        let superseded = match self.phase {
            Phase::Generating { request } => Some(request),
            Phase::Idle => None,
        };
        self.last_request += 1;
        let request = RequestId(self.last_request);
        self.phase = Phase::Generating { request };

        Ok(Ticket {
            request,
            mood,
            superseded,
        })
    }

    pub fn complete_generation(
        &mut self,
        request: RequestId,
        result: Result<Palette, GenerationError>,
    ) -> Completion {
        if self.phase != (Phase::Generating { request }) {
            return Completion::Stale;
        }
        self.phase = Phase::Idle;

        match result {
            Ok(palette) => {
                self.history = std::mem::take(&mut self.history).append(palette.clone());
                self.current = Some(palette);
                self.swatch_selected = 0;
                self.history_selected = 0;
                self.toast = Some(Toast::success(
                    "Palette generated!",
                    "Your mood has been turned into colors",
                ));
                Completion::Applied
            }
            Err(_) => {
                self.toast = Some(Toast::error(
                    "Generation failed",
                    "Unable to connect to the palette service. Please try again.",
                ));
                Completion::Failed
            }
        }
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        self.display_mode
    }

    /// Make a history entry current. The history itself is not changed.
    pub fn select_history(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(p) => {
                self.current = Some(p.clone());
                self.history_selected = index;
                self.swatch_selected = 0;
                true
            }
            None => false,
        }
    }

    pub fn apply_suggestion(&mut self, index: usize) {
        if let Some(s) = MOOD_SUGGESTIONS.get(index) {
            self.mood_input = s.to_string();
            self.focus = Focus::Input;
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.mood_input.push(c);
    }

    pub fn backspace(&mut self) {
        self.mood_input.pop();
    }

    pub fn clear_input(&mut self) {
        self.mood_input.clear();
    }

    pub fn selected_color(&self) -> Option<&str> {
        self.current
            .as_ref()?
            .colors
            .get(self.swatch_selected)
            .map(String::as_str)
    }

    pub fn swatch_left(&mut self) {
        self.swatch_selected = self.swatch_selected.saturating_sub(1);
    }

    pub fn swatch_right(&mut self) {
        let n = self.current.as_ref().map_or(0, |p| p.colors.len());
        if n > 0 {
            self.swatch_selected = (self.swatch_selected + 1).min(n - 1);
        }
    }

    /// Move the history cursor by whole rows/columns, clamped to the grid.
    pub fn history_move(&mut self, dx: isize, dy: isize) {
        let len = self.history.len();
        if len == 0 {
            return;
        }
        let cols = HISTORY_COLUMNS as isize;
        let cur = self.history_selected as isize;
        let mut next = cur + dy * cols;
        let col = cur % cols + dx;
        if (0..cols).contains(&col) {
            next += dx;
        }
        if (0..len as isize).contains(&next) {
            self.history_selected = next as usize;
        }
    }

    pub fn expire_toast(&mut self, ttl: Duration) {
        if let Some(toast) = &self.toast
            && toast.is_expired(ttl)
        {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_palette(mood: &str) -> Palette {
        Palette::new(mood, vec!["#111111".into(), "#222222".into(), "#333333".into(), "#444444".into()])
    }

    fn gen_err() -> GenerationError {
        GenerationError {
            detail: "connection refused".into(),
        }
    }

    #[test]
    fn test_blank_input_stays_idle() {
        let mut s = Session::default();
        s.mood_input = "   ".into();
        assert_eq!(s.begin_generation(), Err(ValidationError));
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.toast.as_ref().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_success_path() {
        let mut s = Session::default();
        s.mood_input = " peaceful sunset ".into();
        let ticket = s.begin_generation().unwrap();
        assert_eq!(ticket.mood, "peaceful sunset");
        assert_eq!(ticket.superseded, None);
        assert!(s.is_generating());

        let p = make_palette("peaceful sunset");
        assert_eq!(s.complete_generation(ticket.request, Ok(p.clone())), Completion::Applied);
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.current.as_ref(), Some(&p));
        assert_eq!(s.history.latest(), Some(&p));
        assert_eq!(s.toast.as_ref().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn test_failure_path_keeps_state() {
        let prev = make_palette("old");
        let mut s = Session::new(History::new().append(prev.clone()), DisplayMode::Light);
        s.current = Some(prev.clone());
        s.mood_input = "stormy".into();

        let ticket = s.begin_generation().unwrap();
        assert_eq!(s.complete_generation(ticket.request, Err(gen_err())), Completion::Failed);
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.current, Some(prev));
        assert_eq!(s.history.len(), 1);
        assert_eq!(s.toast.as_ref().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut s = Session::default();
        s.mood_input = "first".into();
        let first = s.begin_generation().unwrap();
        s.mood_input = "second".into();
        let second = s.begin_generation().unwrap();
        assert_eq!(second.superseded, Some(first.request));

        let fresh = make_palette("second");
        assert_eq!(s.complete_generation(second.request, Ok(fresh.clone())), Completion::Applied);
        assert_eq!(
            s.complete_generation(first.request, Ok(make_palette("first"))),
            Completion::Stale
        );
        assert_eq!(s.current, Some(fresh));
        assert_eq!(s.history.len(), 1);
    }

    #[test]
    fn test_completion_while_idle_is_stale() {
        let mut s = Session::default();
        assert_eq!(
            s.complete_generation(RequestId(1), Ok(make_palette("x"))),
            Completion::Stale
        );
        assert!(s.history.is_empty());
    }

    #[test]
    fn test_history_is_bounded_through_session() {
        let mut s = Session::default();
        for i in 0..15 {
            s.mood_input = format!("mood {i}");
            let t = s.begin_generation().unwrap();
            s.complete_generation(t.request, Ok(make_palette(&t.mood)));
        }
        assert_eq!(s.history.len(), 12);
        assert_eq!(s.history.latest().unwrap().mood, "mood 14");
        assert_eq!(s.history.get(11).unwrap().mood, "mood 3");
    }

    #[test]
    fn test_select_history_does_not_mutate() {
        let h = History::new().append(make_palette("a")).append(make_palette("b"));
        let mut s = Session::new(h.clone(), DisplayMode::Dark);
        assert!(s.select_history(1));
        assert_eq!(s.current.as_ref().unwrap().mood, "a");
        assert_eq!(s.history, h);
        assert!(!s.select_history(5));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut s = Session::new(History::new(), DisplayMode::Light);
        assert_eq!(s.toggle_display_mode(), DisplayMode::Dark);
        assert_eq!(s.toggle_display_mode(), DisplayMode::Light);
    }

    #[test]
    fn test_toggle_during_generation() {
        let mut s = Session::default();
        s.mood_input = "calm".into();
        let t = s.begin_generation().unwrap();
        s.toggle_display_mode();
        s.input_char('!');
        assert!(s.is_generating());
        assert_eq!(s.complete_generation(t.request, Ok(make_palette("calm"))), Completion::Applied);
        assert_eq!(s.display_mode, DisplayMode::Dark);
    }

    #[test]
    fn test_suggestion_and_editing() {
        let mut s = Session::default();
        s.focus = Focus::History;
        s.apply_suggestion(2);
        assert_eq!(s.mood_input, "cozy winter evening");
        assert_eq!(s.focus, Focus::Input);
        s.backspace();
        assert_eq!(s.mood_input, "cozy winter evenin");
        s.clear_input();
        assert!(s.mood_input.is_empty());
        s.apply_suggestion(9);
        assert!(s.mood_input.is_empty());
    }

    #[test]
    fn test_swatch_selection() {
        let mut s = Session::default();
        s.swatch_right();
        assert_eq!(s.selected_color(), None);
        s.current = Some(make_palette("x"));
        s.swatch_right();
        s.swatch_right();
        s.swatch_right();
        s.swatch_right();
        assert_eq!(s.selected_color(), Some("#444444"));
        s.swatch_left();
        assert_eq!(s.selected_color(), Some("#333333"));
    }

    #[test]
    fn test_history_grid_movement() {
        let mut h = History::new();
        for i in 0..5 {
            h = h.append(make_palette(&i.to_string()));
        }
        let mut s = Session::new(h, DisplayMode::Light);
        s.history_move(1, 0);
        assert_eq!(s.history_selected, 1);
        s.history_move(0, 1);
        assert_eq!(s.history_selected, 4);
        s.history_move(1, 0);
        assert_eq!(s.history_selected, 4);
        s.history_move(0, 1);
        assert_eq!(s.history_selected, 4);
        s.history_move(-1, -1);
        assert_eq!(s.history_selected, 0);
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Input.next().next().next(), Focus::Input);
        assert_eq!(Focus::Input.prev(), Focus::History);
    }
}
