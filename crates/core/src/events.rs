use crate::{Orientation, SpreadMode, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    DeckShuffled {
        cards: usize,
        reversed: usize,
    },
    ModeChanged {
        mode: SpreadMode,
        limit: usize,
    },
    CardSelected {
        slot: usize,
        card_id: u32,
        orientation: Orientation,
        count: usize,
        limit: usize,
    },
    CardDeselected {
        slot: usize,
        card_id: u32,
        count: usize,
        limit: usize,
    },
    SelectionCleared {
        dropped: usize,
    },
    RandomPickScheduled {
        picks: usize,
        stagger_ms: u64,
    },
    PickSkipped {
        slot: usize,
    },
    PromptGenerated {
        cards: usize,
        chars: usize,
    },
    DetailOpened {
        card_id: u32,
    },
    DetailClosed,
    NamesToggled {
        visible: bool,
    },
    ThemeToggled {
        theme: Theme,
    },
    ContextUpdated {
        chars: usize,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        tracing::debug!(?event, "session event");
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
