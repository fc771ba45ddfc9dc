use crate::schema::{Catalog, CatalogFile, SessionConfig};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../assets/cards.json");

pub const CATALOG_ENV: &str = "ARCANUM_CATALOG";
pub const CONFIG_ENV: &str = "ARCANUM_CONFIG";

/// The embedded 78-card deck.
pub fn builtin_catalog() -> anyhow::Result<Catalog> {
    parse_catalog(BUILTIN_CATALOG).context("parse builtin catalog")
}

pub fn parse_catalog(raw: &str) -> anyhow::Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(raw)?;
    let catalog = Catalog::new(file.into_cards())?;
    Ok(catalog)
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let file: CatalogFile = load_json(path)?;
    let catalog =
        Catalog::new(file.into_cards()).with_context(|| format!("validate {}", path.display()))?;
    tracing::info!(path = %path.display(), cards = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Explicit path first, then `ARCANUM_CATALOG`, then the embedded deck.
pub fn resolve_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    if let Some(path) = path {
        return load_catalog(path);
    }
    match std::env::var_os(CATALOG_ENV) {
        Some(value) if !value.is_empty() => load_catalog(Path::new(&value)),
        _ => builtin_catalog(),
    }
}

pub fn load_session_config(path: &Path) -> anyhow::Result<SessionConfig> {
    load_json(path)
}

/// Explicit path first, then `ARCANUM_CONFIG`, then defaults.
pub fn resolve_session_config(path: Option<&Path>) -> anyhow::Result<SessionConfig> {
    if let Some(path) = path {
        return load_session_config(path);
    }
    match std::env::var_os(CONFIG_ENV) {
        Some(value) if !value.is_empty() => load_session_config(Path::new(&value)),
        _ => Ok(SessionConfig::default()),
    }
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcanum_core::{Arcana, Suit, CARDS_PER_SUIT, DECK_SIZE, MAJOR_COUNT};
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_is_complete() {
        let catalog = builtin_catalog().expect("catalog");
        assert_eq!(catalog.len(), DECK_SIZE);
        let ids: HashSet<u32> = catalog.cards().iter().map(|card| card.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
        let majors = catalog
            .cards()
            .iter()
            .filter(|card| card.arcana == Arcana::Major)
            .count();
        assert_eq!(majors, MAJOR_COUNT);
        for suit in Suit::ALL {
            let count = catalog
                .cards()
                .iter()
                .filter(|card| card.suit == Some(suit))
                .count();
            assert_eq!(count, CARDS_PER_SUIT, "{suit:?}");
        }
    }

    #[test]
    fn builtin_catalog_has_both_names_and_keywords() {
        let catalog = builtin_catalog().expect("catalog");
        for card in catalog.cards() {
            assert!(!card.name_es.is_empty(), "{}", card.id);
            assert!(!card.name_en.is_empty(), "{}", card.id);
            assert!(!card.img.is_empty(), "{}", card.id);
            assert!(!card.keywords_up.is_empty(), "{}", card.id);
            assert!(!card.keywords_rev.is_empty(), "{}", card.id);
        }
    }

    #[test]
    fn wrapped_catalog_is_accepted() {
        let cards = builtin_catalog().expect("catalog").cards().to_vec();
        let raw = serde_json::json!({ "cards": cards }).to_string();
        assert_eq!(parse_catalog(&raw).expect("wrapped").len(), DECK_SIZE);
    }

    #[test]
    fn truncated_catalog_is_rejected() {
        let mut cards = builtin_catalog().expect("catalog").cards().to_vec();
        cards.truncate(10);
        let raw = serde_json::to_string(&cards).expect("encode");
        let err = parse_catalog(&raw).unwrap_err();
        assert!(err.to_string().contains("expected 78 cards"), "{err}");
    }
}
