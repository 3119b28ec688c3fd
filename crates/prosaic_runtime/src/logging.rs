//! Log output for the `prosaic` binary.
//!
//! The library crates only emit `tracing` events. This module installs the
//! subscriber that prints them: one compact `LEVEL message fields` line per
//! event on stderr, without timestamps or module paths.
//!
//! # Usage
//!
//! ```no_run
//! use prosaic_runtime::logging::{self, LogLevel};
//!
//! logging::init_with_level(LogLevel::Debug).ok();
//! tracing::debug!("parsing {}", "main.prose");
//! ```

use prosaic_foundation::{Error, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Every grammar rule attempt.
    Trace,
    /// Pipeline stages.
    Debug,
    /// Informational messages.
    Info,
    /// Unterminated input and other recoverable problems.
    #[default]
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// Picks the level from `-v`/`-q` counts, starting at [`LogLevel::Warn`].
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: u8) -> Self {
        let level = 3i16 - i16::from(verbose) + i16::from(quiet);
        match level {
            i16::MIN..=0 => Self::Trace,
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warn,
            _ => Self::Error,
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Initializes logging at the default level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<()> {
    init_with_level(LogLevel::default())
}

/// Initializes logging at `level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_with_level(level: LogLevel) -> Result<()> {
    let filter = LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .compact()
        .with_filter(filter);

    Registry::default()
        .with(layer)
        .try_init()
        .map_err(|e| Error::internal(format!("failed to install log subscriber: {e}")))
}
