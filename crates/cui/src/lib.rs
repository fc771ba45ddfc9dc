mod actions;
mod app;
mod clipboard;
mod input;
mod layout;
mod theme;
mod view;

use anyhow::{Context, Result};
use app::App;
use arcanum_core::SessionConfig;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

pub use clipboard::copy_to_clipboard;

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub session: SessionConfig,
    pub catalog_path: Option<PathBuf>,
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let catalog = arcanum_data::resolve_catalog(options.catalog_path.as_deref())
        .context("load card catalog")?;
    let mut app = App::new(catalog, &options.session);

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let mut stdout = stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    stdout
        .execute(EnableMouseCapture)
        .context("enable mouse capture")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let run_result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    tracing::info!(
        selected = app.session.selection().len(),
        "reading session closed"
    );
    run_result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Short enough that staggered picks land close to their due time.
    let tick_rate = Duration::from_millis(50);
    while !app.should_quit {
        terminal.draw(|frame| {
            app.viewport = frame.area();
            view::draw(frame, app);
        })?;
        if event::poll(tick_rate)? {
            match event::read()? {
                CEvent::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if app.handle_context_key(key) {
                        continue;
                    }
                    actions::dispatch(app, input::map_key(key));
                }
                CEvent::Mouse(mouse) => {
                    if let Some(pointer) = input::map_mouse(mouse) {
                        app.handle_pointer(pointer);
                    }
                }
                _ => {}
            }
        }
        app.on_tick();
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "arcanum requires an interactive TTY; use --print for a non-interactive reading"
    );
}
