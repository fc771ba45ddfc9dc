use serde::{Deserialize, Serialize};

pub use arcanum_core::{Arcana, Card, Catalog, CatalogError, SessionConfig, Suit, Theme};

/// Catalog files are either a bare array of cards or an object wrapping one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogFile {
    Cards(Vec<Card>),
    Wrapped { cards: Vec<Card> },
}

impl CatalogFile {
    pub fn into_cards(self) -> Vec<Card> {
        match self {
            CatalogFile::Cards(cards) => cards,
            CatalogFile::Wrapped { cards } => cards,
        }
    }
}
