//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The library only emits events; the binary decides where they go.
//!
//! - `warn`: fallback root word in use
//! - `info`: new games, accepted words
//! - `debug`: every validation verdict, word list loading

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Configuration for logging behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (error, warn, info, debug, trace)
    pub level: Level,
    /// Optional log file path. Logs go to stderr when unset.
    pub log_file: Option<PathBuf>,
    /// Whether to use ANSI colors in output
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            log_file: None,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count
    ///
    /// - 0: warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+ : trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    /// Set the log file path (writes to stderr when None)
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        // Files never want escape codes
        self.with_ansi = path.is_none();
        self.log_file = path;
        self
    }
}

/// Initialize the global tracing subscriber
///
/// Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, Mutex::new(file))
    } else {
        init_logging_with_writer(config, io::stderr)
    }
}

/// Initialize logging with a custom writer
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> anyhow::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "word_scramble={}",
            level.as_str().to_lowercase()
        ))
    })
}
