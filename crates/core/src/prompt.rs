//! Text assembly for the reading prompt.

use crate::{SelectionEntry, SpreadMode};
use thiserror::Error;

pub const PROMPT_TITLE: &str = "CONSULTA DE TAROT";
pub const NO_CONTEXT: &str = "Sin contexto específico.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("Por favor selecciona al menos una carta.")]
    EmptySelection,
}

/// Interpretation framework appended to every prompt, regardless of spread.
pub const READING_FRAMEWORK: &str = "\
Eres un tarotista increíblemente experto en interpretación simbólica y hermetismo.
Tu estilo combina precisión técnica con sensibilidad intuitiva usando lenguaje claro.
Realiza una lectura de tarot detallada con las cartas seleccionadas dadas\x20
anteriormente respetando el orden y posición:
1. ANÁLISIS INDIVIDUAL DE CADA CARTA:
    - Describe el significado tradicional de cada carta
    - Interpreta su posición y orientación en este contexto específico
    - Menciona qué aspectos de la vida representa cada carta
2. CONEXIONES Y SINERGIA VISUAL:
    - Analiza cómo se relacionan los símbolos visuales entre las cartas (colores, posturas, miradas)
    - Identifica patrones gráficos comunes, contradicciones o refuerzos temáticos
    - Construye una narrativa visual cohesiva entre las imágenes
3. INTERPRETACIÓN PROFUNDA Y MENSAJES OCULTOS:
    - Extrae el mensaje principal del conjunto
    - Revela lecciones, advertencias u oportunidades no evidentes
    - Contextualiza la lectura en términos de pasado, presente y futuro
4. CONSEJOS PRÁCTICOS Y CAMINO A SEGUIR:
    - Proporciona orientación específica y accionable
    - Sugiere áreas de enfoque o cambios recomendados
    - Ofrece perspectivas para superar obstáculos identificados
5. CONCLUSIÓN Y MANTRA DE PODER:
    - Resume la esencia de la lectura en una frase integradora
    - Crea un MANTRA o AFIRMACIÓN personalizada (en primera persona) que sintetice la energía de la tirada para el consultante
    - Termina con una reflexión empoderadora
TONO Y ESTILO:
    - Sé empático pero objetivo
    - Mantén un equilibrio entre realismo y esperanza
    - De acuerdo a la tirada, trata de dar énfasis en si es negativa o\x20
    positiva para la pregunta realizada.
    - Usa un lenguaje claro, directo y respetuoso
    - Enfócate en el crecimiento y la comprensión,
    sólo si es muy evidente, da predicciones absolutas
    - Reconoce tanto las fortalezas como los desafíos";

/// `"3 cartas (presente pasado y futuro)"`; sizes without a spread show the
/// count alone.
pub fn reading_kind(size: usize) -> String {
    match SpreadMode::from_size(size).map(SpreadMode::description) {
        Some(description) => format!("{size} cartas ({description})"),
        None => format!("{size} cartas"),
    }
}

pub fn context_line(context: &str) -> &str {
    if context.trim().is_empty() {
        NO_CONTEXT
    } else {
        context
    }
}

pub fn card_line(index: usize, entry: &SelectionEntry, mode: SpreadMode) -> String {
    format!(
        "{}. {} ({}) - {}",
        index + 1,
        entry.card.name_es,
        entry.orientation.label(),
        mode.position_label(index)
    )
}

pub fn build_prompt(
    entries: &[SelectionEntry],
    mode: SpreadMode,
    context: &str,
) -> Result<String, PromptError> {
    if entries.is_empty() {
        return Err(PromptError::EmptySelection);
    }
    let mut prompt = String::with_capacity(READING_FRAMEWORK.len() + 96 * entries.len() + 256);
    prompt.push_str(PROMPT_TITLE);
    prompt.push_str("\n\n");
    prompt.push_str(&format!("Tipo de lectura: {}\n", reading_kind(mode.limit())));
    prompt.push_str(&format!(
        "Contexto de la consulta: {}\n",
        context_line(context)
    ));
    prompt.push_str("\nCartas seleccionadas en el orden de la lectura:\n");
    for (idx, entry) in entries.iter().enumerate() {
        prompt.push_str(&card_line(idx, entry, mode));
        prompt.push('\n');
    }
    prompt.push_str("\n\n");
    prompt.push_str(READING_FRAMEWORK);
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;
    use crate::{DeckSlot, Orientation, Selection};

    fn entries(picks: &[(u32, Orientation)]) -> Vec<SelectionEntry> {
        let catalog = sample_catalog();
        let mut selection = Selection::new(picks.len());
        for (slot, (id, orientation)) in picks.iter().enumerate() {
            let deck_slot = DeckSlot {
                card: catalog.get(*id).expect("card").clone(),
                orientation: *orientation,
            };
            selection.select(slot, &deck_slot).expect("select");
        }
        selection.entries().to_vec()
    }

    #[test]
    fn three_card_reading_lines() {
        let picks = entries(&[
            (0, Orientation::Upright),
            (16, Orientation::Reversed),
            (19, Orientation::Upright),
        ]);
        let prompt = build_prompt(&picks, SpreadMode::ThreeCard, "   ").expect("prompt");
        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(lines[0], "CONSULTA DE TAROT");
        assert_eq!(
            lines[2],
            "Tipo de lectura: 3 cartas (presente pasado y futuro)"
        );
        assert_eq!(
            lines[3],
            "Contexto de la consulta: Sin contexto específico."
        );
        assert_eq!(lines[5], "Cartas seleccionadas en el orden de la lectura:");
        assert_eq!(lines[6], "1. El Loco (Normal) - Pasado");
        assert_eq!(lines[7], "2. La Torre (Reversa) - Presente");
        assert_eq!(lines[8], "3. El Sol (Normal) - Futuro");
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "");
        assert!(lines[11].starts_with("Eres un tarotista"));
        assert!(prompt.ends_with(READING_FRAMEWORK));
    }

    #[test]
    fn framework_keeps_line_end_spaces() {
        assert!(READING_FRAMEWORK.contains("seleccionadas dadas \nanteriormente"));
        assert!(READING_FRAMEWORK.contains("negativa o \n"));
    }

    #[test]
    fn context_is_kept_verbatim() {
        let picks = entries(&[(1, Orientation::Upright)]);
        let prompt =
            build_prompt(&picks, SpreadMode::Single, "  ¿Cambio de trabajo?").expect("prompt");
        assert!(prompt.contains("Contexto de la consulta:   ¿Cambio de trabajo?\n"));
        assert!(prompt.contains("1. El Mago (Normal) - Carta del día / Situación actual"));
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert_eq!(
            build_prompt(&[], SpreadMode::CelticCross, "x"),
            Err(PromptError::EmptySelection)
        );
    }

    #[test]
    fn extra_entries_get_generic_position() {
        let picks = entries(&[
            (0, Orientation::Upright),
            (1, Orientation::Upright),
            (2, Orientation::Reversed),
            (3, Orientation::Upright),
        ]);
        let prompt = build_prompt(&picks, SpreadMode::ThreeCard, "").expect("prompt");
        assert!(prompt.contains("4. La Emperatriz (Normal) - Posición 4\n"));
    }

    #[test]
    fn reading_kind_without_spread_shows_size_only() {
        assert_eq!(reading_kind(10), "10 cartas (cruz celta)");
        assert_eq!(reading_kind(5), "5 cartas");
    }
}
