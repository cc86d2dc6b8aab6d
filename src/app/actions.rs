#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    InputChar(char),
    Backspace,
    ClearInput,
    ApplySuggestion(usize),
    Generate,

    ToggleDisplayMode,
    ExportCurrent,
    CopySelected,

    SwatchLeft,
    SwatchRight,
    HistoryMove { dx: isize, dy: isize },
    SelectHistory,

    Resize,
}
