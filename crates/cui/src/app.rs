use crate::clipboard::copy_to_clipboard;
use crate::input::{next_mode, PointerAction};
use crate::layout::{
    detail_close_rect, detail_rect, panes, toolbar_hits, GridGeometry, ToolbarButton,
};
use arcanum_core::{
    reading_kind, Catalog, Dismiss, Event, EventBus, ReadingSession, SessionCommand,
    SessionConfig, SessionError, SpreadMode, Theme,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_EVENT_LOG: usize = 200;
const DOUBLE_CLICK: Duration = Duration::from_millis(400);
const PROMPT_SCROLL_STEP: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Grid,
    Context,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

pub struct App {
    pub session: ReadingSession,
    pub events: EventBus,
    pub cursor: usize,
    pub grid_scroll: usize,
    pub prompt_scroll: u16,
    pub input_mode: InputMode,
    pub context_input: String,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub status_is_error: bool,
    pub show_help: bool,
    pub should_quit: bool,
    /// Terminal area of the last frame; pointer hit-testing uses it.
    pub viewport: Rect,
    last_click: Option<(usize, Instant)>,
    started: Instant,
}

impl App {
    pub fn new(catalog: Catalog, config: &SessionConfig) -> Self {
        let session = ReadingSession::new(catalog, config);
        let mut app = Self {
            session,
            events: EventBus::default(),
            cursor: 0,
            grid_scroll: 0,
            prompt_scroll: 0,
            input_mode: InputMode::Grid,
            context_input: String::new(),
            event_log: VecDeque::new(),
            status_line: "listo".to_string(),
            status_is_error: false,
            show_help: false,
            should_quit: false,
            viewport: Rect::default(),
            last_click: None,
            started: Instant::now(),
        };
        let seed = app.session.seed();
        app.push_event_line(format!(
            "Sesión iniciada (semilla {seed}) - {}",
            reading_kind(app.session.mode().limit())
        ));
        app
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Fires staggered picks that came due since the last frame.
    pub fn on_tick(&mut self) {
        let now = self.now_ms();
        let rejected = self.session.advance(now, &mut self.events);
        if let Some(err) = rejected.into_iter().last() {
            self.push_error(&err);
        }
        self.flush_events();
    }

    pub fn apply(&mut self, command: SessionCommand) -> bool {
        self.on_tick();
        let result = self.session.apply(command, &mut self.events);
        self.flush_events();
        match result {
            Ok(()) => true,
            Err(err) => {
                self.push_error(&err);
                false
            }
        }
    }

    pub fn set_mode(&mut self, mode: SpreadMode) {
        if self.apply(SessionCommand::SetMode(mode)) {
            self.push_status(format!(
                "Tirada de {} - {}",
                reading_kind(mode.limit()),
                self.session.status_label()
            ));
        }
    }

    pub fn cycle_mode(&mut self) {
        self.set_mode(next_mode(self.session.mode()));
    }

    pub fn shuffle(&mut self) {
        if self.apply(SessionCommand::Shuffle) {
            self.push_status("Mazo mezclado");
        }
    }

    pub fn random_pick(&mut self) {
        if self.apply(SessionCommand::RandomPick) {
            self.push_status(format!(
                "Eligiendo {} cartas al azar...",
                self.session.mode().limit()
            ));
        }
    }

    pub fn toggle_cursor(&mut self) {
        self.toggle_slot(self.cursor);
    }

    pub fn toggle_slot(&mut self, slot: usize) {
        self.cursor = slot;
        if self.apply(SessionCommand::ToggleSlot(slot)) {
            self.push_status(self.session.status_label());
        }
    }

    pub fn open_detail_at(&mut self, slot: usize) {
        self.cursor = slot;
        self.apply(SessionCommand::OpenDetail(slot));
    }

    pub fn close_detail(&mut self, how: Dismiss) {
        self.apply(SessionCommand::CloseDetail(how));
    }

    pub fn toggle_names(&mut self) {
        self.apply(SessionCommand::ToggleNames);
    }

    pub fn toggle_theme(&mut self) {
        self.apply(SessionCommand::ToggleTheme);
    }

    pub fn generate_prompt(&mut self) {
        if self.apply(SessionCommand::GeneratePrompt) {
            self.prompt_scroll = 0;
            self.push_status("Prompt generado. Pulsa y para copiarlo.");
        }
    }

    pub fn copy_prompt(&mut self) {
        let Some(prompt) = self.session.prompt() else {
            self.push_failure("Genera el prompt antes de copiarlo.");
            return;
        };
        match copy_to_clipboard(prompt) {
            Ok(()) => self.push_status("Prompt copiado al portapapeles"),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                self.push_failure(format!("No se pudo copiar: {err:#}"));
            }
        }
    }

    pub fn close_overlay(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else if self.session.detail().is_some() {
            self.close_detail(Dismiss::CloseButton);
        }
    }

    pub fn scroll_prompt(&mut self, up: bool) {
        self.prompt_scroll = if up {
            self.prompt_scroll.saturating_sub(PROMPT_SCROLL_STEP)
        } else {
            let lines = self
                .session
                .prompt()
                .map(|prompt| prompt.lines().count())
                .unwrap_or(0);
            let max = u16::try_from(lines).unwrap_or(u16::MAX);
            self.prompt_scroll
                .saturating_add(PROMPT_SCROLL_STEP)
                .min(max)
        };
    }

    pub fn grid_geometry(&self) -> GridGeometry {
        GridGeometry::new(
            panes(self.viewport).grid,
            self.session.deck().len(),
            self.grid_scroll,
        )
    }

    pub fn move_cursor(&mut self, step: Move) {
        let geometry = self.grid_geometry();
        let total = geometry.total;
        if total == 0 {
            return;
        }
        let cols = geometry.cols;
        self.cursor = match step {
            Move::Up if self.cursor >= cols => self.cursor - cols,
            Move::Down if self.cursor + cols < total => self.cursor + cols,
            Move::Left if self.cursor > 0 => self.cursor - 1,
            Move::Right if self.cursor + 1 < total => self.cursor + 1,
            _ => self.cursor,
        };
        self.grid_scroll = geometry.scroll_for(self.cursor);
    }

    pub fn begin_context_edit(&mut self) {
        self.context_input = self.session.context().to_string();
        self.input_mode = InputMode::Context;
        self.push_status("Escribe el contexto. Enter guarda, Esc cancela.");
    }

    fn commit_context(&mut self) {
        let text = std::mem::take(&mut self.context_input);
        self.input_mode = InputMode::Grid;
        self.apply(SessionCommand::SetContext(text));
        self.push_status("Contexto guardado");
    }

    /// Consumes keys while the context field is focused.
    pub fn handle_context_key(&mut self, key: KeyEvent) -> bool {
        if self.input_mode != InputMode::Context {
            return false;
        }
        match key.code {
            KeyCode::Enter => self.commit_context(),
            KeyCode::Esc => {
                self.context_input.clear();
                self.input_mode = InputMode::Grid;
                self.push_status("Edición cancelada");
            }
            KeyCode::Backspace => {
                self.context_input.pop();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.context_input.clear();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.context_input.push(ch);
            }
            _ => {}
        }
        true
    }

    pub fn handle_pointer(&mut self, pointer: PointerAction) {
        if self.input_mode == InputMode::Context {
            let PointerAction::Primary { column, row } = pointer else {
                return;
            };
            if panes(self.viewport)
                .context
                .contains(Position::new(column, row))
            {
                return;
            }
            // Clicking elsewhere saves the text and still acts on the target.
            self.commit_context();
        }
        if self.show_help {
            if let PointerAction::Primary { .. } = pointer {
                self.show_help = false;
            }
            return;
        }
        if self.session.detail().is_some() {
            if let PointerAction::Primary { column, row } = pointer {
                self.click_detail(column, row);
            }
            return;
        }
        let layout = panes(self.viewport);
        match pointer {
            PointerAction::Primary { column, row } => {
                let position = Position::new(column, row);
                if let Some(button) = self.toolbar_button_at(position) {
                    self.press(button);
                } else if let Some(slot) = self.grid_geometry().hit(column, row) {
                    self.click_tile(slot);
                } else if layout.context.contains(position) {
                    self.begin_context_edit();
                }
            }
            PointerAction::Secondary { column, row } => {
                if let Some(slot) = self.grid_geometry().hit(column, row) {
                    self.open_detail_at(slot);
                }
            }
            PointerAction::WheelUp { column, row } | PointerAction::WheelDown { column, row } => {
                let up = matches!(pointer, PointerAction::WheelUp { .. });
                let position = Position::new(column, row);
                if layout.prompt.contains(position) {
                    self.scroll_prompt(up);
                } else if layout.grid.contains(position) {
                    let geometry = self.grid_geometry();
                    self.grid_scroll = if up {
                        geometry.scroll_row.saturating_sub(1)
                    } else {
                        (geometry.scroll_row + 1).min(geometry.max_scroll())
                    };
                }
            }
        }
    }

    pub fn press(&mut self, button: ToolbarButton) {
        match button {
            ToolbarButton::Mode(mode) => self.set_mode(mode),
            ToolbarButton::Shuffle => self.shuffle(),
            ToolbarButton::Random => self.random_pick(),
            ToolbarButton::Names => self.toggle_names(),
            ToolbarButton::Theme => self.toggle_theme(),
            ToolbarButton::Generate => self.generate_prompt(),
            ToolbarButton::Copy => self.copy_prompt(),
        }
    }

    fn toolbar_button_at(&self, position: Position) -> Option<ToolbarButton> {
        toolbar_hits(
            panes(self.viewport).toolbar,
            self.session.theme(),
            self.session.show_names(),
        )
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(button, _)| button)
    }

    /// A click always toggles; a second click on the same tile within the
    /// double-click window also opens its detail.
    fn click_tile(&mut self, slot: usize) {
        let now = Instant::now();
        let double = matches!(
            self.last_click,
            Some((previous, at)) if previous == slot && now.duration_since(at) <= DOUBLE_CLICK
        );
        self.toggle_slot(slot);
        if double {
            self.last_click = None;
            self.open_detail_at(slot);
        } else {
            self.last_click = Some((slot, now));
        }
    }

    fn click_detail(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);
        let popup = detail_rect(self.viewport);
        if detail_close_rect(popup).contains(position) {
            self.close_detail(Dismiss::CloseButton);
        } else if !popup.contains(position) {
            self.close_detail(Dismiss::Backdrop);
        }
    }

    pub fn theme(&self) -> Theme {
        self.session.theme()
    }

    pub fn push_status(&mut self, value: impl Into<String>) {
        self.status_line = value.into();
        self.status_is_error = false;
    }

    pub fn push_failure(&mut self, value: impl Into<String>) {
        self.status_line = value.into();
        self.status_is_error = true;
    }

    pub fn push_error(&mut self, err: &SessionError) {
        self.push_failure(err.to_string());
    }

    fn flush_events(&mut self) {
        let drained: Vec<_> = self.events.drain().collect();
        for event in drained {
            if let Some(line) = self.format_event(&event) {
                self.push_event_line(line);
            }
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }

    fn card_name(&self, card_id: u32) -> String {
        self.session
            .catalog()
            .get(card_id)
            .map(|card| card.name_es.clone())
            .unwrap_or_else(|| format!("#{card_id}"))
    }

    fn format_event(&self, event: &Event) -> Option<String> {
        let line = match event {
            Event::DeckShuffled { cards, reversed } => {
                format!("Mazo mezclado: {cards} cartas, {reversed} invertidas")
            }
            Event::ModeChanged { limit, .. } => format!("Tirada: {}", reading_kind(*limit)),
            Event::CardSelected {
                card_id,
                orientation,
                count,
                limit,
                ..
            } => format!(
                "Seleccionada: {} ({}) {count}/{limit}",
                self.card_name(*card_id),
                orientation.label()
            ),
            Event::CardDeselected {
                card_id,
                count,
                limit,
                ..
            } => format!(
                "Deseleccionada: {} {count}/{limit}",
                self.card_name(*card_id)
            ),
            Event::SelectionCleared { dropped } if *dropped > 0 => {
                format!("Selección reiniciada ({dropped} cartas)")
            }
            Event::SelectionCleared { .. } => return None,
            Event::RandomPickScheduled { picks, stagger_ms } => {
                format!("Selección al azar: {picks} cartas, una cada {stagger_ms} ms")
            }
            Event::PickSkipped { slot } => {
                format!("Selección al azar omitida en la posición {}", slot + 1)
            }
            Event::PromptGenerated { cards, chars } => {
                format!("Prompt generado: {cards} cartas, {chars} caracteres")
            }
            Event::DetailOpened { card_id } => format!("Detalle: {}", self.card_name(*card_id)),
            Event::DetailClosed => return None,
            Event::NamesToggled { visible } => {
                if *visible {
                    "Nombres visibles".to_string()
                } else {
                    "Nombres ocultos".to_string()
                }
            }
            Event::ThemeToggled { theme } => match theme {
                Theme::Dark => "Tema oscuro".to_string(),
                Theme::Light => "Tema claro".to_string(),
            },
            Event::ContextUpdated { chars } => format!("Contexto actualizado ({chars} caracteres)"),
        };
        Some(line)
    }
}
