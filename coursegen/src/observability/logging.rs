//! Logging initialization for `coursegen`.
//!
//! Diagnostics go to stderr through `tracing`, in human-readable or JSON
//! form. A valid `COURSEGEN_LOG_LEVEL` directive overrides the `-v` flags.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_LEVEL_ENV: &str = "COURSEGEN_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Maps a `-v` count to a tracing level; saturates at `trace`.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the event filter.
///
/// `env_directive` is the raw value of [`LOG_LEVEL_ENV`]. Blank or
/// unparsable values fall back to the verbosity level.
fn build_filter(env_directive: Option<&str>, verbosity: u8) -> EnvFilter {
    env_directive
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// `Auto` colors only an interactive stderr without `NO_COLOR`.
const fn wants_ansi(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Initializes the global tracing subscriber.
///
/// Uses `try_init()`, so only the first call in a process takes effect.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let env_directive = std::env::var(LOG_LEVEL_ENV).ok();
    let filter = build_filter(env_directive.as_deref(), verbosity);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Human => builder
            .with_ansi(wants_ansi(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            ))
            .try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
