use crate::Card;

/// How the detail overlay was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    CloseButton,
    Backdrop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetail {
    pub card_id: u32,
    pub title: String,
    pub classification: String,
    pub keywords_up: String,
    pub keywords_rev: String,
    pub img: String,
}

impl CardDetail {
    pub fn from_card(card: &Card) -> Self {
        Self {
            card_id: card.id,
            title: card.full_name(),
            classification: card.classification(),
            keywords_up: card.keywords_up.clone(),
            keywords_rev: card.keywords_rev.clone(),
            img: card.img.clone(),
        }
    }
}
