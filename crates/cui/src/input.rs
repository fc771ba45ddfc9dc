use arcanum_core::SpreadMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleSelect,
    OpenDetail,
    Close,
    SetMode(SpreadMode),
    CycleMode,
    Shuffle,
    RandomPick,
    ToggleNames,
    ToggleTheme,
    EditContext,
    Generate,
    Copy,
    ScrollPromptUp,
    ScrollPromptDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Primary { column: u16, row: u16 },
    Secondary { column: u16, row: u16 },
    WheelUp { column: u16, row: u16 },
    WheelDown { column: u16, row: u16 },
}

pub fn map_key(key: KeyEvent) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => InputAction::Quit,
            _ => InputAction::None,
        };
    }
    match key.code {
        KeyCode::Esc => InputAction::Close,
        KeyCode::Up | KeyCode::Char('k') => InputAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => InputAction::MoveDown,
        KeyCode::Left | KeyCode::Char('h') => InputAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => InputAction::MoveRight,
        KeyCode::Enter | KeyCode::Char('i') => InputAction::OpenDetail,
        KeyCode::PageUp => InputAction::ScrollPromptUp,
        KeyCode::PageDown => InputAction::ScrollPromptDown,
        KeyCode::Char(' ') => InputAction::ToggleSelect,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char('x') => InputAction::Close,
        KeyCode::Char('1') => InputAction::SetMode(SpreadMode::Single),
        KeyCode::Char('2') => InputAction::SetMode(SpreadMode::ThreeCard),
        KeyCode::Char('3') => InputAction::SetMode(SpreadMode::CelticCross),
        KeyCode::Char('4') => InputAction::SetMode(SpreadMode::Astrological),
        KeyCode::Char('m') => InputAction::CycleMode,
        KeyCode::Char('s') => InputAction::Shuffle,
        KeyCode::Char('r') => InputAction::RandomPick,
        KeyCode::Char('n') => InputAction::ToggleNames,
        KeyCode::Char('t') => InputAction::ToggleTheme,
        KeyCode::Char('c') | KeyCode::Char('e') => InputAction::EditContext,
        KeyCode::Char('g') => InputAction::Generate,
        KeyCode::Char('y') => InputAction::Copy,
        _ => InputAction::None,
    }
}

pub fn map_mouse(mouse: MouseEvent) -> Option<PointerAction> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Primary { column, row }),
        MouseEventKind::Down(MouseButton::Right) => Some(PointerAction::Secondary { column, row }),
        MouseEventKind::ScrollUp => Some(PointerAction::WheelUp { column, row }),
        MouseEventKind::ScrollDown => Some(PointerAction::WheelDown { column, row }),
        _ => None,
    }
}

pub fn next_mode(mode: SpreadMode) -> SpreadMode {
    let idx = SpreadMode::ALL
        .iter()
        .position(|candidate| *candidate == mode)
        .unwrap_or(0);
    SpreadMode::ALL[(idx + 1) % SpreadMode::ALL.len()]
}
