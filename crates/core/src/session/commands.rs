use super::{ReadingSession, SessionError};
use crate::{Dismiss, EventBus, SpreadMode};

/// Every user action a front end can forward to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetMode(SpreadMode),
    Shuffle,
    RandomPick,
    ToggleSlot(usize),
    OpenDetail(usize),
    CloseDetail(Dismiss),
    ToggleNames,
    ToggleTheme,
    SetContext(String),
    GeneratePrompt,
}

impl SessionCommand {
    pub fn name(&self) -> &'static str {
        match self {
            SessionCommand::SetMode(_) => "set_mode",
            SessionCommand::Shuffle => "shuffle",
            SessionCommand::RandomPick => "random_pick",
            SessionCommand::ToggleSlot(_) => "toggle_slot",
            SessionCommand::OpenDetail(_) => "open_detail",
            SessionCommand::CloseDetail(_) => "close_detail",
            SessionCommand::ToggleNames => "toggle_names",
            SessionCommand::ToggleTheme => "toggle_theme",
            SessionCommand::SetContext(_) => "set_context",
            SessionCommand::GeneratePrompt => "generate_prompt",
        }
    }
}

impl ReadingSession {
    /// Runs one command to completion. Failures leave the session unchanged.
    pub fn apply(
        &mut self,
        command: SessionCommand,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        tracing::debug!(command = command.name(), "apply");
        match command {
            SessionCommand::SetMode(mode) => self.set_mode(mode, events),
            SessionCommand::Shuffle => self.shuffle(events),
            SessionCommand::RandomPick => {
                self.random_pick(events);
            }
            SessionCommand::ToggleSlot(slot) => {
                self.toggle_slot(slot, events)?;
            }
            SessionCommand::OpenDetail(slot) => {
                self.open_detail(slot, events)?;
            }
            SessionCommand::CloseDetail(how) => self.close_detail(how, events),
            SessionCommand::ToggleNames => {
                self.toggle_names(events);
            }
            SessionCommand::ToggleTheme => {
                self.toggle_theme(events);
            }
            SessionCommand::SetContext(text) => self.set_context(text, events),
            SessionCommand::GeneratePrompt => {
                self.generate_prompt(events)?;
            }
        }
        Ok(())
    }
}
