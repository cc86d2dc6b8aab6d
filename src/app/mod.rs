pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard::{self, ClipboardSink, SystemClipboard};
use crate::config::Config;
use crate::export;
use crate::input;
use crate::service::{GenerateError, GenerationError, PaletteClient};
use crate::storage::Storage;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, NetworkEvent};
use state::{Completion, Focus, RequestId, Session, Toast};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct App {
    cfg: Config,
    session: Session,
    storage: Storage,
    client: PaletteClient,
    clipboard: Box<dyn ClipboardSink>,
    pending: Option<(RequestId, JoinHandle<()>)>,
}

impl App {
    pub fn new(cfg: Config) -> anyhow::Result<Self> {
        let storage = Storage::open(&cfg.db_path())?;
        let client = PaletteClient::new(cfg.service.endpoint.clone(), cfg.timeout())?;

        let history = storage.load_history()?;
        let display_mode = storage.load_display_mode()?;
        tracing::info!(palettes = history.len(), mode = display_mode.label(), "session restored");

        Ok(Self {
            cfg,
            session: Session::new(history, display_mode),
            storage,
            client,
            clipboard: Box::new(SystemClipboard::default()),
            pending: None,
        })
    }

    fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.cfg.ui.toast_secs)
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);

        let toast_ttl = self.toast_ttl();
        tui::draw(terminal, &mut self.session, toast_ttl)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.session, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Network(ne) => self.handle_network(ne),
                Event::Tick => {
                    self.session.tick = self.session.tick.wrapping_add(1);
                }
            }

            if self.session.should_quit {
                break;
            }

            let toast_ttl = self.toast_ttl();
            tui::draw(terminal, &mut self.session, toast_ttl)?;
        }

        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        let s = &mut self.session;
        match action {
            Action::Quit => s.should_quit = true,
            Action::FocusNext => s.focus = s.focus.next(),
            Action::FocusPrev => s.focus = s.focus.prev(),
            Action::InputChar(c) => s.input_char(c),
            Action::Backspace => s.backspace(),
            Action::ClearInput => s.clear_input(),
            Action::ApplySuggestion(i) => s.apply_suggestion(i),
            Action::Generate => self.spawn_generate(tx),
            Action::ToggleDisplayMode => self.toggle_display_mode(),
            Action::ExportCurrent => self.export_current(),
            Action::CopySelected => self.copy_selected(),
            Action::SwatchLeft => s.swatch_left(),
            Action::SwatchRight => s.swatch_right(),
            Action::HistoryMove { dx, dy } => {
                s.focus = Focus::History;
                s.history_move(dx, dy);
            }
            Action::SelectHistory => {
                let i = s.history_selected;
                s.select_history(i);
            }
            Action::Resize => {}
        }
    }

    fn spawn_generate(&mut self, tx: &mpsc::Sender<Event>) {
        let Ok(ticket) = self.session.begin_generation() else {
            return;
        };

        if let Some(old) = ticket.superseded
            && let Some((_, handle)) = self.pending.take_if(|(id, _)| *id == old)
        {
            tracing::info!(request = old.0, "superseding pending generation");
            handle.abort();
        }

        let client = self.client.clone();
        let tx = tx.clone();
        let request = ticket.request;
        let handle = tokio::spawn(async move {
            let result = client.generate(&ticket.mood).await.map_err(|e| match e {
                GenerateError::Generation(g) => g,
                GenerateError::Validation(v) => GenerationError {
                    detail: v.to_string(),
                },
            });
            let _ = tx
                .send(Event::Network(NetworkEvent::PaletteGenerated { request, result }))
                .await;
        });
        self.pending = Some((request, handle));
    }

    fn handle_network(&mut self, ev: NetworkEvent) {
        match ev {
            NetworkEvent::PaletteGenerated { request, result } => {
                if self.pending.as_ref().is_some_and(|(id, _)| *id == request) {
                    self.pending = None;
                }
                match self.session.complete_generation(request, result) {
                    Completion::Applied => {
                        if let Err(e) = self.storage.save_history(&self.session.history) {
                            tracing::error!("save history: {e:#}");
                            self.session.toast =
                                Some(Toast::error("Could not save history", format!("{e:#}")));
                        }
                    }
                    Completion::Failed => {}
                    Completion::Stale => {
                        tracing::debug!(request = request.0, "dropping stale generation result");
                    }
                }
            }
        }
    }

    fn toggle_display_mode(&mut self) {
        let mode = self.session.toggle_display_mode();
        if let Err(e) = self.storage.save_display_mode(mode) {
            tracing::error!("save display mode: {e:#}");
            self.session.toast = Some(Toast::error("Could not save theme", format!("{e:#}")));
        }
    }

    fn export_current(&mut self) {
        let Some(palette) = &self.session.current else {
            return;
        };
        self.session.toast = Some(match export::save(palette, &self.cfg.paths.export_dir) {
            Ok(path) => Toast::success("Palette exported!", format!("Saved to {}", path.display())),
            Err(e) => {
                tracing::error!("export palette: {e:#}");
                Toast::error("Export failed", format!("{e:#}"))
            }
        });
    }

    fn copy_selected(&mut self) {
        let Some(color) = self.session.selected_color().map(str::to_string) else {
            return;
        };
        self.session.toast = Some(match clipboard::copy(self.clipboard.as_mut(), &color) {
            Ok(()) => Toast::success("Color copied!", format!("{color} has been copied to your clipboard")),
            Err(_) => Toast::error("Copy failed", "Unable to copy color to clipboard"),
        });
    }
}
