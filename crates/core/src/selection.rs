use crate::{Card, DeckSlot, Orientation};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    pub slot: usize,
    pub card: Card,
    pub orientation: Orientation,
    /// Pick sequence number; strictly increasing within a session.
    pub order: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Máximo {limit} cartas permitidas en este modo.")]
    LimitReached { limit: usize },
    #[error("la carta {0} ya está seleccionada")]
    AlreadySelected(u32),
}

/// Ordered picks bounded by the current spread's limit.
#[derive(Debug, Clone)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
    limit: usize,
    next_order: u64,
}

impl Selection {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::with_capacity(limit),
            limit,
            next_order: 0,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Changing the limit always starts over.
    pub fn reset(&mut self, limit: usize) {
        self.limit = limit;
        self.entries.clear();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn contains(&self, card_id: u32) -> bool {
        self.entries.iter().any(|entry| entry.card.id == card_id)
    }

    pub fn contains_slot(&self, slot: usize) -> bool {
        self.entries.iter().any(|entry| entry.slot == slot)
    }

    /// Zero-based reading position of a card, if selected.
    pub fn position_of(&self, card_id: u32) -> Option<usize> {
        self.entries.iter().position(|entry| entry.card.id == card_id)
    }

    pub fn select(&mut self, slot: usize, deck_slot: &DeckSlot) -> Result<(), SelectionError> {
        if self.contains(deck_slot.card.id) {
            return Err(SelectionError::AlreadySelected(deck_slot.card.id));
        }
        if self.is_full() {
            return Err(SelectionError::LimitReached { limit: self.limit });
        }
        self.entries.push(SelectionEntry {
            slot,
            card: deck_slot.card.clone(),
            orientation: deck_slot.orientation,
            order: self.next_order,
        });
        self.next_order += 1;
        Ok(())
    }

    pub fn deselect(&mut self, card_id: u32) -> Option<SelectionEntry> {
        let idx = self.position_of(card_id)?;
        Some(self.entries.remove(idx))
    }

    pub fn toggle(&mut self, slot: usize, deck_slot: &DeckSlot) -> Result<Toggle, SelectionError> {
        if self.deselect(deck_slot.card.id).is_some() {
            return Ok(Toggle::Deselected);
        }
        self.select(slot, deck_slot)?;
        Ok(Toggle::Selected)
    }

    pub fn count_label(&self) -> String {
        format!("{} / {}", self.entries.len(), self.limit)
    }

    pub fn status_label(&self) -> String {
        format!("Seleccionadas: {}", self.count_label())
    }
}
