use crate::{Arcana, Card, Suit};
use std::collections::HashSet;
use thiserror::Error;

pub const DECK_SIZE: usize = 78;
pub const MAJOR_COUNT: usize = 22;
pub const CARDS_PER_SUIT: usize = 14;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("expected {DECK_SIZE} cards, found {0}")]
    WrongSize(usize),
    #[error("duplicate card id {0}")]
    DuplicateId(u32),
    #[error("expected {MAJOR_COUNT} major arcana, found {0}")]
    MajorCount(usize),
    #[error("major arcana {0} must not carry a suit")]
    MajorWithSuit(u32),
    #[error("minor arcana {0} is missing its suit")]
    MinorWithoutSuit(u32),
    #[error("suit {suit:?} has {count} cards, expected {CARDS_PER_SUIT}")]
    SuitCount { suit: Suit, count: usize },
}

/// The fixed card collection. Validated once, never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    pub fn new(cards: Vec<Card>) -> Result<Self, CatalogError> {
        validate(&cards)?;
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|card| {
            card.name_es.eq_ignore_ascii_case(name) || card.name_en.eq_ignore_ascii_case(name)
        })
    }
}

fn validate(cards: &[Card]) -> Result<(), CatalogError> {
    if cards.len() != DECK_SIZE {
        return Err(CatalogError::WrongSize(cards.len()));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        match (card.arcana, card.suit) {
            (Arcana::Major, Some(_)) => return Err(CatalogError::MajorWithSuit(card.id)),
            (Arcana::Minor, None) => return Err(CatalogError::MinorWithoutSuit(card.id)),
            _ => {}
        }
    }
    let majors = cards.iter().filter(|card| card.is_major()).count();
    if majors != MAJOR_COUNT {
        return Err(CatalogError::MajorCount(majors));
    }
    for suit in Suit::ALL {
        let count = cards.iter().filter(|card| card.suit == Some(suit)).count();
        if count != CARDS_PER_SUIT {
            return Err(CatalogError::SuitCount { suit, count });
        }
    }
    Ok(())
}
