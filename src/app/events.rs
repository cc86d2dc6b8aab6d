use crate::app::state::RequestId;
use crate::palette::Palette;
use crate::service::GenerationError;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Network(NetworkEvent),
    Tick,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum NetworkEvent {
    PaletteGenerated {
        request: RequestId,
        result: Result<Palette, GenerationError>,
    },
}
