use arcanum_core::{
    Event, EventBus, Orientation, ReadingSession, SessionCommand, SessionConfig, SpreadMode,
    TileFace, Toggle, NO_CONTEXT,
};
use arcanum_data::{builtin_catalog, load_catalog, load_session_config};
use std::collections::HashSet;
use std::io::Write;

fn new_session(mode: SpreadMode, seed: u64) -> ReadingSession {
    let catalog = builtin_catalog().expect("catalog");
    let config = SessionConfig {
        seed: Some(seed),
        mode,
        ..SessionConfig::default()
    };
    ReadingSession::new(catalog, &config)
}

fn slot_of(session: &ReadingSession, name: &str) -> usize {
    let id = session
        .catalog()
        .find_by_name(name)
        .unwrap_or_else(|| panic!("missing card {name}"))
        .id;
    session.deck().position_of(id).expect("in deck")
}

/// Finds a seed whose layout gives the three cards the wanted orientations.
fn session_with_orientations(wanted: &[(&str, Orientation)]) -> ReadingSession {
    for seed in 0..10_000u64 {
        let session = new_session(SpreadMode::ThreeCard, seed);
        let matches = wanted.iter().all(|(name, orientation)| {
            let slot = slot_of(&session, name);
            session.deck().slots[slot].orientation == *orientation
        });
        if matches {
            return session;
        }
    }
    panic!("no seed produced the wanted orientations");
}

#[test]
fn three_card_prompt_matches_layout() {
    let wanted = [
        ("El Loco", Orientation::Upright),
        ("La Torre", Orientation::Reversed),
        ("El Sol", Orientation::Upright),
    ];
    let mut session = session_with_orientations(&wanted);
    let mut events = EventBus::default();
    for (name, _) in wanted {
        let slot = slot_of(&session, name);
        assert_eq!(session.toggle_slot(slot, &mut events), Ok(Toggle::Selected));
    }
    let prompt = session.generate_prompt(&mut events).expect("prompt");
    let lines: Vec<&str> = prompt.lines().collect();
    assert!(lines.contains(&"Tipo de lectura: 3 cartas (presente pasado y futuro)"));
    assert!(lines.contains(&format!("Contexto de la consulta: {NO_CONTEXT}").as_str()));
    assert!(lines.contains(&"1. El Loco (Normal) - Pasado"));
    assert!(lines.contains(&"2. La Torre (Reversa) - Presente"));
    assert!(lines.contains(&"3. El Sol (Normal) - Futuro"));
}

#[test]
fn names_toggle_hides_every_caption_and_restores() {
    let mut session = new_session(SpreadMode::CelticCross, 3);
    let mut events = EventBus::default();
    session.toggle_slot(0, &mut events).expect("select");
    let before: Vec<Option<String>> = session
        .tiles()
        .iter()
        .map(|tile| tile.caption.map(str::to_string))
        .collect();
    assert!(before.iter().all(Option::is_some));

    session
        .apply(SessionCommand::ToggleNames, &mut events)
        .expect("hide");
    assert!(session.tiles().iter().all(|tile| tile.caption.is_none()));

    session
        .apply(SessionCommand::ToggleNames, &mut events)
        .expect("show");
    let after: Vec<Option<String>> = session
        .tiles()
        .iter()
        .map(|tile| tile.caption.map(str::to_string))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn selected_tiles_flip_and_deselect_hides_again() {
    let mut session = new_session(SpreadMode::ThreeCard, 8);
    let mut events = EventBus::default();
    session.toggle_slot(10, &mut events).expect("select");
    assert!(matches!(session.tiles()[10].face, TileFace::Up { .. }));
    session.toggle_slot(10, &mut events).expect("deselect");
    assert_eq!(session.tiles()[10].face, TileFace::Down);
}

#[test]
fn deselect_removes_only_matching_entry() {
    let mut session = new_session(SpreadMode::Astrological, 21);
    let mut events = EventBus::default();
    for slot in [3, 40, 12, 77, 0] {
        session.toggle_slot(slot, &mut events).expect("select");
    }
    let removed_id = session.deck().slots[12].card.id;
    session.toggle_slot(12, &mut events).expect("deselect");
    let slots: Vec<usize> = session.entries().iter().map(|entry| entry.slot).collect();
    assert_eq!(slots, vec![3, 40, 77, 0]);
    assert!(!session.selection().contains(removed_id));
}

#[test]
fn random_pick_selects_exactly_limit_distinct_cards() {
    for mode in SpreadMode::ALL {
        let mut session = new_session(mode, 99);
        let mut events = EventBus::default();
        for _ in 0..3 {
            session.apply(SessionCommand::RandomPick, &mut events).expect("pick");
        }
        let rejected = session.advance(60_000, &mut events);
        let ids: HashSet<u32> = session.entries().iter().map(|e| e.card.id).collect();
        assert_eq!(ids.len(), mode.limit(), "{mode:?}");
        assert_eq!(session.selection().len(), mode.limit(), "{mode:?}");
        assert!(rejected.len() <= 2 * mode.limit());
    }
}

#[test]
fn limit_rejection_emits_no_selection_event() {
    let mut session = new_session(SpreadMode::Single, 1);
    let mut events = EventBus::default();
    session.toggle_slot(0, &mut events).expect("select");
    let _ = events.drain().count();
    let err = session.toggle_slot(1, &mut events).unwrap_err();
    assert_eq!(err.to_string(), "Máximo 1 cartas permitidas en este modo.");
    assert!(events.is_empty());
}

#[test]
fn shuffle_reports_event_and_clears() {
    let mut session = new_session(SpreadMode::ThreeCard, 4);
    let mut events = EventBus::default();
    session.toggle_slot(1, &mut events).expect("select");
    session.apply(SessionCommand::Shuffle, &mut events).expect("shuffle");
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::DeckShuffled { cards: 78, .. })));
    assert!(session.selection().is_empty());
}

#[test]
fn catalog_and_config_load_from_disk() {
    let cards = builtin_catalog().expect("catalog").cards().to_vec();
    let mut catalog_file = tempfile::NamedTempFile::new().expect("tmp");
    catalog_file
        .write_all(serde_json::to_string(&cards).expect("encode").as_bytes())
        .expect("write");
    let catalog = load_catalog(catalog_file.path()).expect("load catalog");
    assert_eq!(catalog.len(), 78);

    let mut config_file = tempfile::NamedTempFile::new().expect("tmp");
    config_file
        .write_all(br#"{"seed": 7, "mode": 13, "show_names": false}"#)
        .expect("write");
    let config = load_session_config(config_file.path()).expect("load config");
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.mode, SpreadMode::Astrological);
    assert!(!config.show_names);
}

#[test]
fn missing_config_reports_path() {
    let err = load_session_config(std::path::Path::new("/nonexistent/arcanum.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/arcanum.json"));
}

#[test]
fn oversized_stagger_from_config_still_picks() {
    let mut config_file = tempfile::NamedTempFile::new().expect("tmp");
    config_file
        .write_all(br#"{"seed": 1, "mode": 13, "pick_stagger_ms": 9223372036854775807}"#)
        .expect("write");
    let config = load_session_config(config_file.path()).expect("load config");
    let mut session = ReadingSession::new(builtin_catalog().expect("catalog"), &config);
    let mut events = EventBus::default();

    assert_eq!(session.random_pick(&mut events), 13);
    assert!(session.advance(0, &mut events).is_empty());
    assert_eq!(session.selection().len(), 1);
    assert_eq!(session.pending_picks(), 12);

    assert!(session.flush_picks(&mut events).is_empty());
    assert_eq!(session.selection().len(), 13);
}
