use crate::app::{App, Move};
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    if app.show_help && !matches!(action, InputAction::Quit | InputAction::None) {
        app.show_help = false;
        return;
    }
    if app.session.detail().is_some() {
        match action {
            InputAction::Quit => app.should_quit = true,
            InputAction::Close | InputAction::OpenDetail => app.close_overlay(),
            _ => {}
        }
        return;
    }
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = true,
        InputAction::MoveUp => app.move_cursor(Move::Up),
        InputAction::MoveDown => app.move_cursor(Move::Down),
        InputAction::MoveLeft => app.move_cursor(Move::Left),
        InputAction::MoveRight => app.move_cursor(Move::Right),
        InputAction::ToggleSelect => app.toggle_cursor(),
        InputAction::OpenDetail => app.open_detail_at(app.cursor),
        InputAction::Close => app.close_overlay(),
        InputAction::SetMode(mode) => app.set_mode(mode),
        InputAction::CycleMode => app.cycle_mode(),
        InputAction::Shuffle => app.shuffle(),
        InputAction::RandomPick => app.random_pick(),
        InputAction::ToggleNames => app.toggle_names(),
        InputAction::ToggleTheme => app.toggle_theme(),
        InputAction::EditContext => app.begin_context_edit(),
        InputAction::Generate => app.generate_prompt(),
        InputAction::Copy => app.copy_prompt(),
        InputAction::ScrollPromptUp => app.scroll_prompt(true),
        InputAction::ScrollPromptDown => app.scroll_prompt(false),
    }
}
