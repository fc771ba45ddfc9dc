mod cli;
mod logging;

use anyhow::{Context, Result};
use arcanum_core::{EventBus, ReadingSession, SessionConfig};
use clap::Parser;
use cli::Cli;
use logging::{init_logging, LogConfig, LogSink};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let sink = if cli.print {
        LogSink::Stderr
    } else {
        LogSink::Discard
    };
    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet)
        .with_log_file(cli.log_file.clone())
        .with_fallback(sink);
    if let Err(err) = init_logging(&log_config) {
        eprintln!("arcanum: cannot open log file: {err}");
        return ExitCode::FAILURE;
    }
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "arcanum failed");
            eprintln!("arcanum: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file_config = arcanum_data::resolve_session_config(cli.config.as_deref())
        .context("load session config")?;
    let config = cli.apply_to(file_config);
    if cli.print {
        let prompt = print_reading(&config, cli.catalog.as_deref(), cli.context.as_deref())?;
        println!("{prompt}");
        return Ok(());
    }
    arcanum_cui::run(arcanum_cui::LaunchOptions {
        session: config,
        catalog_path: cli.catalog.clone(),
    })
}

/// Headless reading: draws a full random spread at once and returns its prompt.
fn print_reading(
    config: &SessionConfig,
    catalog_path: Option<&Path>,
    context: Option<&str>,
) -> Result<String> {
    let catalog = arcanum_data::resolve_catalog(catalog_path).context("load card catalog")?;
    let mut session = ReadingSession::new(catalog, config);
    let mut events = EventBus::default();
    if let Some(err) = session.random_pick_now(&mut events).into_iter().next() {
        return Err(err).context("random pick");
    }
    session.set_context(context.unwrap_or_default(), &mut events);
    let prompt = session
        .generate_prompt(&mut events)
        .context("generate prompt")?
        .to_string();
    for event in events.drain() {
        tracing::debug!(?event, "print mode");
    }
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcanum_core::SpreadMode;

    fn config(mode: SpreadMode) -> SessionConfig {
        SessionConfig {
            seed: Some(77),
            mode,
            ..SessionConfig::default()
        }
    }

    #[test]
    fn print_reading_lists_every_position() {
        let prompt = print_reading(&config(SpreadMode::CelticCross), None, Some("Trabajo"))
            .expect("prompt");
        assert!(prompt.starts_with("CONSULTA DE TAROT"));
        assert!(prompt.contains("Tipo de lectura: 10 cartas (cruz celta)"));
        assert!(prompt.contains("Contexto de la consulta: Trabajo"));
        let (_, cards) = prompt
            .split_once("Cartas seleccionadas en el orden de la lectura:\n")
            .expect("card list");
        let (cards, _) = cards.split_once("\n\n").expect("card list end");
        let lines: Vec<&str> = cards.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("1. "));
        assert!(lines[9].starts_with("10. "));
    }

    #[test]
    fn print_reading_is_reproducible_with_a_seed() {
        let first = print_reading(&config(SpreadMode::ThreeCard), None, None).expect("first");
        let second = print_reading(&config(SpreadMode::ThreeCard), None, None).expect("second");
        assert_eq!(first, second);
        assert!(first.contains("Contexto de la consulta: Sin contexto específico."));
    }

    #[test]
    fn missing_catalog_is_reported() {
        let err = print_reading(
            &config(SpreadMode::Single),
            Some(Path::new("/nonexistent/arcanum/cards.json")),
            None,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("load card catalog"));
    }
}
