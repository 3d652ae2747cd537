//! Diagnostics for the `hexlink` binary.
//!
//! Boards, prompts and command summaries own stdout. Every `tracing` event,
//! and anything sent through the `log` facade, goes to stderr instead, so a
//! game transcript can be piped without log noise mixed in.

use std::{env, io, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

/// Selects the stderr encoding: `human` (default) or `json`.
pub const LOG_FORMAT_ENV: &str = "HEXLINK_LOG_FORMAT";

/// Filter applied when `RUST_LOG` is unset or unparsable. Turn-by-turn
/// events sit one level below it, at `debug`.
const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Encoding of the lines written to stderr.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Plain text for an interactive terminal.
    #[default]
    Human,
    /// One JSON object per event carrying the enclosing spans, such as
    /// `board.play` or `core.load_edge_list`.
    Json,
}

impl LogFormat {
    /// Reads [`LOG_FORMAT_ENV`], falling back to [`LogFormat::Human`] when it
    /// is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError::InvalidUnicode`] or
    /// [`LoggingError::UnsupportedFormat`] for a value that cannot be used.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }

    /// Builds the stderr layer for this encoding.
    fn stderr_layer<S>(self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
        match self {
            Self::Human => layer.with_target(false).boxed(),
            Self::Json => layer
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .boxed(),
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnsupportedFormat {
                provided: normalised,
            }),
        }
    }
}

/// Reasons diagnostics could not be configured.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The format variable held bytes that are not UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Variable that was read.
        name: &'static str,
        /// Failure reported by [`std::env::var`].
        #[source]
        source: env::VarError,
    },
    /// The format variable named neither `human` nor `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// The value after trimming and lowercasing.
        provided: String,
    },
    /// `tracing_subscriber` refused to become the global default.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Refusal from `try_init`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Routes diagnostics to stderr in the format chosen by
/// [`LOG_FORMAT_ENV`], filtered by `RUST_LOG`.
///
/// Repeated calls are no-ops, and so is losing the race to a subscriber
/// installed by someone else, such as a test harness.
///
/// # Errors
/// Returns [`LoggingError`] when [`LOG_FORMAT_ENV`] is unusable.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    match install(LogFormat::from_env()?) {
        Ok(()) | Err(LoggingError::InstallFailed { .. }) => {
            let _ = INSTALLED.set(());
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn install(format: LogFormat) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // `log` records from dependencies join the same stream when the slot is free.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(format.stderr_layer())
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
