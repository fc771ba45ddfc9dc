use arcanum_core::{SessionConfig, SpreadMode, Theme};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "arcanum",
    version,
    about = "Tarot reading session in the terminal",
    long_about = "Shuffle a 78-card tarot deck, pick cards for a spread and build a \
                  reading prompt to paste into a language model."
)]
pub struct Cli {
    /// Fixed shuffle seed; a random one is used when omitted.
    #[arg(long, env = "ARCANUM_SEED", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Initial spread size.
    #[arg(long, value_name = "1|3|10|13", value_parser = parse_mode)]
    pub mode: Option<SpreadMode>,

    /// Start with card names hidden.
    #[arg(long = "hide-names")]
    pub hide_names: bool,

    /// Start with the light theme.
    #[arg(long)]
    pub light: bool,

    /// Alternate card catalog JSON (falls back to ARCANUM_CATALOG, then the built-in deck).
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Session preferences JSON (falls back to ARCANUM_CONFIG); flags override it.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pick cards at random and print the prompt instead of opening the terminal UI.
    #[arg(long)]
    pub print: bool,

    /// Consultation context used by --print.
    #[arg(long, value_name = "TEXT", requires = "print")]
    pub context: Option<String>,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to a file. Without it the terminal UI discards logs.
    #[arg(long = "log-file", env = "ARCANUM_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Layers command-line flags over preferences loaded from a config file.
    pub fn apply_to(&self, mut config: SessionConfig) -> SessionConfig {
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.hide_names {
            config.show_names = false;
        }
        if self.light {
            config.theme = Theme::Light;
        }
        config
    }
}

fn parse_mode(value: &str) -> Result<SpreadMode, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    SpreadMode::from_size(size)
        .ok_or_else(|| format!("unsupported spread size {size}; use 1, 3, 10 or 13"))
}
