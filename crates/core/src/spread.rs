use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "usize", into = "usize")]
pub enum SpreadMode {
    Single,
    ThreeCard,
    #[default]
    CelticCross,
    Astrological,
}

#[derive(Debug, Clone, Copy)]
pub struct SpreadDef {
    pub mode: SpreadMode,
    pub size: usize,
    pub description: &'static str,
    pub positions: &'static [&'static str],
}

pub static SPREADS: [SpreadDef; 4] = [
    SpreadDef {
        mode: SpreadMode::Single,
        size: 1,
        description: "lectura del día",
        positions: &["Carta del día / Situación actual"],
    },
    SpreadDef {
        mode: SpreadMode::ThreeCard,
        size: 3,
        description: "presente pasado y futuro",
        positions: &["Pasado", "Presente", "Futuro"],
    },
    SpreadDef {
        mode: SpreadMode::CelticCross,
        size: 10,
        description: "cruz celta",
        positions: &[
            "1. Situación presente",
            "2. El Desafío (cruzada)",
            "3. El Pasado / Base",
            "4. El Pasado Reciente",
            "5. El Mejor Resultado Posible / Metas",
            "6. El Futuro Inmediato",
            "7. Factores Internos / Actitud del consultante",
            "8. Factores Externos / Influencias ambientales",
            "9. Esperanzas y Temores",
            "10. Resultado Final",
        ],
    },
    SpreadDef {
        mode: SpreadMode::Astrological,
        size: 13,
        description: "rueda astrológica",
        positions: &[
            "1. Casa 1 (Identidad / Personalidad)",
            "2. Casa 2 (Recursos / Valores)",
            "3. Casa 3 (Comunicación / Entorno cercano)",
            "4. Casa 4 (Hogar / Raíces)",
            "5. Casa 5 (Creatividad / Placer)",
            "6. Casa 6 (Salud / Trabajo diario)",
            "7. Casa 7 (Relaciones / Asociaciones)",
            "8. Casa 8 (Transformación / Bienes compartidos)",
            "9. Casa 9 (Filosofía / Viajes / Expansión)",
            "10. Casa 10 (Carrera / Proyección social)",
            "11. Casa 11 (Amigos / Proyectos grupales)",
            "12. Casa 12 (Inconsciente / Karma)",
            "13. Centro (Tema Central / Síntesis)",
        ],
    },
];

impl SpreadMode {
    pub const ALL: [SpreadMode; 4] = [
        SpreadMode::Single,
        SpreadMode::ThreeCard,
        SpreadMode::CelticCross,
        SpreadMode::Astrological,
    ];

    pub fn from_size(size: usize) -> Option<Self> {
        SPREADS
            .iter()
            .find(|def| def.size == size)
            .map(|def| def.mode)
    }

    pub fn def(self) -> &'static SpreadDef {
        &SPREADS[self as usize]
    }

    /// Maximum number of selected cards.
    pub fn limit(self) -> usize {
        self.def().size
    }

    pub fn description(self) -> &'static str {
        self.def().description
    }

    pub fn positions(self) -> &'static [&'static str] {
        self.def().positions
    }

    /// Position label for a zero-based reading index.
    pub fn position_label(self, index: usize) -> String {
        match self.positions().get(index) {
            Some(label) => (*label).to_string(),
            None => format!("Posición {}", index + 1),
        }
    }
}

impl TryFrom<usize> for SpreadMode {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        SpreadMode::from_size(value)
            .ok_or_else(|| format!("unsupported spread size {value} (expected 1, 3, 10 or 13)"))
    }
}

impl From<SpreadMode> for usize {
    fn from(value: SpreadMode) -> Self {
        value.limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_mode() {
        for mode in SpreadMode::ALL {
            assert_eq!(mode.def().mode, mode);
        }
    }

    #[test]
    fn positions_cover_every_limit() {
        for def in &SPREADS {
            assert!(def.positions.len() >= def.size, "{:?}", def.mode);
        }
    }

    #[test]
    fn from_size_roundtrips_known_sizes() {
        assert_eq!(SpreadMode::from_size(1), Some(SpreadMode::Single));
        assert_eq!(SpreadMode::from_size(13), Some(SpreadMode::Astrological));
        assert_eq!(SpreadMode::from_size(7), None);
        assert_eq!(SpreadMode::default().limit(), 10);
    }

    #[test]
    fn position_label_falls_back_past_table() {
        assert_eq!(SpreadMode::ThreeCard.position_label(1), "Presente");
        assert_eq!(SpreadMode::ThreeCard.position_label(3), "Posición 4");
    }

    #[test]
    fn serde_uses_numeric_size() {
        let mode: SpreadMode = serde_json::from_str("3").expect("parse");
        assert_eq!(mode, SpreadMode::ThreeCard);
        assert_eq!(serde_json::to_string(&SpreadMode::Astrological).unwrap(), "13");
        assert!(serde_json::from_str::<SpreadMode>("4").is_err());
    }
}
