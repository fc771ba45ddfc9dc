use crate::{
    build_prompt, build_tiles, Card, CardDetail, Catalog, Deck, DeckSlot, Dismiss, Event,
    EventBus, PromptError, RngState, Selection, SelectionEntry, SelectionError, SessionConfig,
    SpreadMode, Theme, Tile, Toggle,
};
use thiserror::Error;

mod commands;
mod picks;

pub use commands::SessionCommand;
pub use picks::{PendingPick, PickQueue};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("no hay carta en la posición {0}")]
    InvalidSlot(usize),
}

/// The whole mutable state of one reading. Owned by a single front end and
/// mutated only through its methods.
#[derive(Debug)]
pub struct ReadingSession {
    catalog: Catalog,
    rng: RngState,
    mode: SpreadMode,
    deck: Deck,
    selection: Selection,
    show_names: bool,
    theme: Theme,
    context: String,
    prompt: Option<String>,
    detail: Option<CardDetail>,
    picks: PickQueue,
    clock_ms: u64,
}

impl ReadingSession {
    pub fn new(catalog: Catalog, config: &SessionConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let deck = Deck::shuffled(&catalog, &mut rng);
        tracing::info!(
            seed = rng.seed(),
            mode = config.mode.limit(),
            cards = deck.len(),
            "reading session started"
        );
        Self {
            catalog,
            rng,
            mode: config.mode,
            deck,
            selection: Selection::new(config.mode.limit()),
            show_names: config.show_names,
            theme: config.theme,
            context: String::new(),
            prompt: None,
            detail: None,
            picks: PickQueue::new(config.pick_stagger_ms),
            clock_ms: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> SpreadMode {
        self.mode
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        self.selection.entries()
    }

    pub fn show_names(&self) -> bool {
        self.show_names
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn detail(&self) -> Option<&CardDetail> {
        self.detail.as_ref()
    }

    pub fn pending_picks(&self) -> usize {
        self.picks.len()
    }

    pub fn status_label(&self) -> String {
        self.selection.status_label()
    }

    pub fn tiles(&self) -> Vec<Tile<'_>> {
        build_tiles(&self.deck.slots, &self.selection, self.show_names)
    }

    pub fn set_mode(&mut self, mode: SpreadMode, events: &mut EventBus) {
        self.mode = mode;
        self.clear_selection(events);
        self.selection.reset(mode.limit());
        events.push(Event::ModeChanged {
            mode,
            limit: mode.limit(),
        });
    }

    /// Replaces the layout with a fresh permutation and new orientations.
    pub fn shuffle(&mut self, events: &mut EventBus) {
        self.deck.reshuffle(&self.catalog, &mut self.rng);
        self.clear_selection(events);
        let reversed = self
            .deck
            .slots
            .iter()
            .filter(|slot| slot.orientation.is_reversed())
            .count();
        tracing::info!(reversed, "deck reshuffled");
        events.push(Event::DeckShuffled {
            cards: self.deck.len(),
            reversed,
        });
    }

    pub fn clear_selection(&mut self, events: &mut EventBus) {
        let dropped = self.selection.len();
        self.selection.clear();
        events.push(Event::SelectionCleared { dropped });
    }

    pub fn toggle_slot(
        &mut self,
        slot: usize,
        events: &mut EventBus,
    ) -> Result<Toggle, SessionError> {
        let deck_slot = self.slot_checked(slot)?.clone();
        match self.selection.toggle(slot, &deck_slot) {
            Ok(Toggle::Selected) => {
                events.push(self.selected_event(slot, &deck_slot));
                Ok(Toggle::Selected)
            }
            Ok(Toggle::Deselected) => {
                events.push(Event::CardDeselected {
                    slot,
                    card_id: deck_slot.card.id,
                    count: self.selection.len(),
                    limit: self.selection.limit(),
                });
                Ok(Toggle::Deselected)
            }
            Err(err) => {
                tracing::warn!(slot, %err, "selection rejected");
                Err(err.into())
            }
        }
    }

    /// Selects an unselected slot; never deselects.
    pub fn select_slot(&mut self, slot: usize, events: &mut EventBus) -> Result<(), SessionError> {
        let deck_slot = self.slot_checked(slot)?.clone();
        self.selection.select(slot, &deck_slot).inspect_err(|err| {
            tracing::warn!(slot, %err, "selection rejected");
        })?;
        events.push(self.selected_event(slot, &deck_slot));
        Ok(())
    }

    /// Clears the selection and queues `limit` distinct slots, one every
    /// stagger interval starting now.
    pub fn random_pick(&mut self, events: &mut EventBus) -> usize {
        self.clear_selection(events);
        let slots = self
            .rng
            .sample_indices(self.deck.len(), self.selection.limit());
        let picks = slots.len();
        self.picks.schedule(self.clock_ms, slots);
        events.push(Event::RandomPickScheduled {
            picks,
            stagger_ms: self.picks.stagger_ms(),
        });
        picks
    }

    /// Advances the session clock and fires every pick that is due. Rejected
    /// picks are returned so the caller can surface them.
    pub fn advance(&mut self, now_ms: u64, events: &mut EventBus) -> Vec<SessionError> {
        self.clock_ms = self.clock_ms.max(now_ms);
        let due = self.picks.take_due(self.clock_ms);
        self.fire_picks(due, events)
    }

    /// Fires every queued pick immediately, ignoring the stagger.
    pub fn flush_picks(&mut self, events: &mut EventBus) -> Vec<SessionError> {
        let due = self.picks.take_all();
        self.fire_picks(due, events)
    }

    /// Random pick without the staggered reveal.
    pub fn random_pick_now(&mut self, events: &mut EventBus) -> Vec<SessionError> {
        self.random_pick(events);
        self.flush_picks(events)
    }

    pub fn open_detail(
        &mut self,
        slot: usize,
        events: &mut EventBus,
    ) -> Result<&CardDetail, SessionError> {
        let card = &self.slot_checked(slot)?.card;
        let detail = CardDetail::from_card(card);
        events.push(Event::DetailOpened {
            card_id: detail.card_id,
        });
        Ok(self.detail.insert(detail))
    }

    pub fn close_detail(&mut self, how: Dismiss, events: &mut EventBus) {
        if self.detail.take().is_some() {
            tracing::debug!(?how, "detail dismissed");
            events.push(Event::DetailClosed);
        }
    }

    pub fn toggle_names(&mut self, events: &mut EventBus) -> bool {
        self.show_names = !self.show_names;
        events.push(Event::NamesToggled {
            visible: self.show_names,
        });
        self.show_names
    }

    pub fn toggle_theme(&mut self, events: &mut EventBus) -> Theme {
        self.theme = self.theme.toggled();
        events.push(Event::ThemeToggled { theme: self.theme });
        self.theme
    }

    pub fn set_context(&mut self, context: impl Into<String>, events: &mut EventBus) {
        self.context = context.into();
        events.push(Event::ContextUpdated {
            chars: self.context.chars().count(),
        });
    }

    /// Builds the prompt from the current selection. On failure the previous
    /// prompt is left untouched.
    pub fn generate_prompt(&mut self, events: &mut EventBus) -> Result<&str, SessionError> {
        let prompt = build_prompt(self.selection.entries(), self.mode, &self.context)
            .inspect_err(|err| tracing::warn!(%err, "prompt not generated"))?;
        events.push(Event::PromptGenerated {
            cards: self.selection.len(),
            chars: prompt.chars().count(),
        });
        Ok(self.prompt.insert(prompt).as_str())
    }

    pub fn card_at(&self, slot: usize) -> Option<&Card> {
        self.deck.slot(slot).map(|deck_slot| &deck_slot.card)
    }

    fn slot_checked(&self, slot: usize) -> Result<&DeckSlot, SessionError> {
        self.deck.slot(slot).ok_or(SessionError::InvalidSlot(slot))
    }

    fn selected_event(&self, slot: usize, deck_slot: &DeckSlot) -> Event {
        Event::CardSelected {
            slot,
            card_id: deck_slot.card.id,
            orientation: deck_slot.orientation,
            count: self.selection.len(),
            limit: self.selection.limit(),
        }
    }

    fn fire_picks(&mut self, due: Vec<PendingPick>, events: &mut EventBus) -> Vec<SessionError> {
        let mut rejected = Vec::new();
        for pick in due {
            if self.selection.contains_slot(pick.slot) {
                events.push(Event::PickSkipped { slot: pick.slot });
                continue;
            }
            if let Err(err) = self.select_slot(pick.slot, events) {
                events.push(Event::PickSkipped { slot: pick.slot });
                rejected.push(err);
            }
        }
        rejected
    }
}
