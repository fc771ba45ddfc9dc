//! Tracing subscriber setup for the `arcanum` binary.
//!
//! The terminal UI owns stdout and stderr while it runs, so logs either go to
//! a file or are dropped. Headless `--print` runs log to stderr.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    Discard,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub log_file: Option<PathBuf>,
    /// Where logs go when no file is configured.
    pub fallback: LogSink,
}

impl LogConfig {
    /// - `-q`: error
    /// - default: warn
    /// - `-v`: info, `-vv`: debug, `-vvv`: trace
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else {
            match verbose {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };
        Self {
            level,
            log_file: None,
            fallback: LogSink::Stderr,
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, sink: LogSink) -> Self {
        self.fallback = sink;
        self
    }
}

/// Installs the global subscriber. Call once, before the session starts.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_with_writer(config.level, SharedFileWriter::new(file), false);
        return Ok(());
    }
    match config.fallback {
        LogSink::Stderr => init_with_writer(config.level, io::stderr, true),
        LogSink::Discard => init_with_writer(config.level, io::sink, false),
    }
    Ok(())
}

fn init_with_writer<W>(level: Level, writer: W, ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);
    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(layer)
        .init();
}

/// `RUST_LOG` wins over the verbosity flags.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("warn,arcanum={level},arcanum_core={level},arcanum_data={level},arcanum_cui={level}")
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<File>>,
}

impl io::Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}
