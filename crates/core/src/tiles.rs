use crate::{DeckSlot, Selection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileFace<'a> {
    Down,
    Up {
        marker: &'static str,
        img: &'a str,
        reversed: bool,
    },
}

/// Render model for one grid cell, rebuilt from the session on every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile<'a> {
    pub slot: usize,
    pub card_id: u32,
    pub selected: bool,
    /// Zero-based place in the reading when selected.
    pub reading_index: Option<usize>,
    /// Name label under the tile; `None` while names are hidden.
    pub caption: Option<&'a str>,
    pub face: TileFace<'a>,
}

pub fn build_tiles<'a>(
    slots: &'a [DeckSlot],
    selection: &Selection,
    show_names: bool,
) -> Vec<Tile<'a>> {
    slots
        .iter()
        .enumerate()
        .map(|(slot, deck_slot)| {
            let reading_index = selection.position_of(deck_slot.card.id);
            let face = if reading_index.is_some() {
                TileFace::Up {
                    marker: deck_slot.orientation.marker(),
                    img: deck_slot.card.img.as_str(),
                    reversed: deck_slot.orientation.is_reversed(),
                }
            } else {
                TileFace::Down
            };
            Tile {
                slot,
                card_id: deck_slot.card.id,
                selected: reading_index.is_some(),
                reading_index,
                caption: show_names.then_some(deck_slot.card.name_es.as_str()),
                face,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;
    use crate::Deck;

    #[test]
    fn unselected_tiles_are_face_down() {
        let deck = Deck::ordered(&sample_catalog());
        let selection = Selection::new(3);
        let tiles = build_tiles(&deck.slots, &selection, true);
        assert_eq!(tiles.len(), 78);
        assert!(tiles.iter().all(|tile| tile.face == TileFace::Down));
    }

    #[test]
    fn selected_tile_reveals_face_and_names_follow_toggle() {
        let deck = Deck::ordered(&sample_catalog());
        let mut selection = Selection::new(3);
        selection.select(16, &deck.slots[16]).expect("select");

        let shown = build_tiles(&deck.slots, &selection, true);
        match &shown[16].face {
            TileFace::Up { marker, .. } => assert_eq!(*marker, "UP"),
            TileFace::Down => panic!("expected face up"),
        }
        assert_eq!(shown[16].caption, Some("La Torre"));
        assert_eq!(shown[16].reading_index, Some(0));

        let hidden = build_tiles(&deck.slots, &selection, false);
        assert!(matches!(hidden[16].face, TileFace::Up { .. }));
        assert!(hidden.iter().all(|tile| tile.caption.is_none()));
    }
}
