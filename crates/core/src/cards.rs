use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    #[serde(rename = "bastos")]
    Wands,
    #[serde(rename = "copas")]
    Cups,
    #[serde(rename = "espadas")]
    Swords,
    #[serde(rename = "oros")]
    Pentacles,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// Lower-case name as it appears in the catalog.
    pub fn key(self) -> &'static str {
        match self {
            Suit::Wands => "bastos",
            Suit::Cups => "copas",
            Suit::Swords => "espadas",
            Suit::Pentacles => "oros",
        }
    }

    pub fn display_name(self) -> String {
        capitalize(self.key())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, Orientation::Reversed)
    }

    /// Label used in the generated prompt.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Upright => "Normal",
            Orientation::Reversed => "Reversa",
        }
    }

    /// Short marker drawn on a face-up tile.
    pub fn marker(self) -> &'static str {
        match self {
            Orientation::Upright => "UP",
            Orientation::Reversed => "REV",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: u32,
    pub name_es: String,
    pub name_en: String,
    pub img: String,
    #[serde(rename = "type")]
    pub arcana: Arcana,
    #[serde(default)]
    pub suit: Option<Suit>,
    pub keywords_up: String,
    pub keywords_rev: String,
}

impl Card {
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }

    /// Both name variants, local first.
    pub fn full_name(&self) -> String {
        format!("{} / {}", self.name_es, self.name_en)
    }

    pub fn classification(&self) -> String {
        match (self.arcana, self.suit) {
            (Arcana::Major, _) => "Arcano Mayor".to_string(),
            (Arcana::Minor, Some(suit)) => format!("Arcano Menor - {}", suit.display_name()),
            (Arcana::Minor, None) => "Arcano Menor".to_string(),
        }
    }
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(arcana: Arcana, suit: Option<Suit>) -> Card {
        Card {
            id: 0,
            name_es: "Dos de Copas".to_string(),
            name_en: "Two of Cups".to_string(),
            img: "img/cups02.jpg".to_string(),
            arcana,
            suit,
            keywords_up: "unión".to_string(),
            keywords_rev: "ruptura".to_string(),
        }
    }

    #[test]
    fn classification_capitalizes_suit() {
        assert_eq!(
            sample(Arcana::Minor, Some(Suit::Cups)).classification(),
            "Arcano Menor - Copas"
        );
        assert_eq!(sample(Arcana::Major, None).classification(), "Arcano Mayor");
    }

    #[test]
    fn capitalize_handles_empty_and_accents() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("espadas"), "Espadas");
        assert_eq!(capitalize("él"), "Él");
    }

    #[test]
    fn orientation_labels() {
        assert_eq!(Orientation::Upright.label(), "Normal");
        assert_eq!(Orientation::Reversed.label(), "Reversa");
        assert_eq!(Orientation::Reversed.marker(), "REV");
        assert_eq!(Orientation::from_reversed(false), Orientation::Upright);
    }

    #[test]
    fn card_parses_catalog_record() {
        let raw = r#"{
            "id": 36,
            "name_es": "Seis de Copas",
            "name_en": "Six of Cups",
            "img": "img/cups06.jpg",
            "type": "minor",
            "suit": "copas",
            "keywords_up": "nostalgia",
            "keywords_rev": "estancamiento"
        }"#;
        let card: Card = serde_json::from_str(raw).expect("parse");
        assert_eq!(card.arcana, Arcana::Minor);
        assert_eq!(card.suit, Some(Suit::Cups));
        assert_eq!(card.full_name(), "Seis de Copas / Six of Cups");
    }
}
