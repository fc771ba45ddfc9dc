use crate::{Card, Catalog, Orientation, RngState};

/// One position in the current layout. Orientation belongs to the slot, so a
/// reshuffle re-rolls it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSlot {
    pub card: Card,
    pub orientation: Orientation,
}

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub slots: Vec<DeckSlot>,
}

impl Deck {
    /// Catalog order, every card upright.
    pub fn ordered(catalog: &Catalog) -> Self {
        let slots = catalog
            .cards()
            .iter()
            .cloned()
            .map(|card| DeckSlot {
                card,
                orientation: Orientation::Upright,
            })
            .collect();
        Self { slots }
    }

    /// A fresh permutation of a copy of the full catalog, with an independent
    /// coin flip per slot for orientation.
    pub fn shuffled(catalog: &Catalog, rng: &mut RngState) -> Self {
        let mut cards = catalog.cards().to_vec();
        rng.shuffle(&mut cards);
        let slots = cards
            .into_iter()
            .map(|card| DeckSlot {
                card,
                orientation: Orientation::from_reversed(rng.flip()),
            })
            .collect();
        Self { slots }
    }

    pub fn reshuffle(&mut self, catalog: &Catalog, rng: &mut RngState) {
        *self = Self::shuffled(catalog, rng);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<&DeckSlot> {
        self.slots.get(index)
    }

    pub fn position_of(&self, card_id: u32) -> Option<usize> {
        self.slots.iter().position(|slot| slot.card.id == card_id)
    }

    pub fn card_ids(&self) -> Vec<u32> {
        self.slots.iter().map(|slot| slot.card.id).collect()
    }
}
