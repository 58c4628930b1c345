//! Injected logging.
//!
//! Call sites log through a [`Logger`] rather than writing to the process
//! output, so handlers can be tested with a recording logger.

use crate::error;

use serde_json::{Map, Value};
use std::{fmt, str};

/// Severity of a logged event.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LogLevel {
    /// Informational event.
    Info,
    /// Something unexpected that did not fail the request.
    Warn,
    /// A failure.
    Error,
}

impl LogLevel {
    /// The lowercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for LogLevel {
    type Err = error::Error;

    fn from_str(level: &str) -> error::Result<Self> {
        match level {
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(error::Error::InvalidLogLevel(level.to_string())),
        }
    }
}

/// A sink for log messages.
pub trait Logger {
    /// Log an informational message.
    fn info(&self, message: &str);

    /// Log a warning.
    fn warn(&self, message: &str);

    /// Log an error.
    fn error(&self, message: &str);

    /// Log a message at the given level.
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => self.info(message),
            LogLevel::Warn => self.warn(message),
            LogLevel::Error => self.error(message),
        }
    }
}

/// Logger forwarding to the `tracing` macros.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Log an event followed by its metadata, pretty printed with the level attached.
///
/// The level is validated before anything is written.
///
/// ```rust
/// use dynamodb_lambda_kit::{error, log};
/// use std::cell::RefCell;
///
/// #[derive(Default)]
/// struct Lines(RefCell<Vec<String>>);
///
/// impl log::Logger for Lines {
///     fn info(&self, message: &str) {
///         self.0.borrow_mut().push(format!("info: {message}"));
///     }
///     fn warn(&self, message: &str) {
///         self.0.borrow_mut().push(format!("warn: {message}"));
///     }
///     fn error(&self, message: &str) {
///         self.0.borrow_mut().push(format!("error: {message}"));
///     }
/// }
///
/// let logger = Lines::default();
/// log::log_event(&logger, "user created", None, "info").unwrap();
/// assert!(logger.0.borrow()[0].starts_with("info: user created\n"));
/// assert!(matches!(
///     log::log_event(&logger, "user created", None, "debug"),
///     Err(error::Error::InvalidLogLevel(_))
/// ));
/// ```
pub fn log_event<L: Logger + ?Sized>(
    logger: &L,
    event: &str,
    metadata: Option<Map<String, Value>>,
    level: &str,
) -> error::Result<()> {
    let level: LogLevel = level.parse()?;
    let mut metadata = metadata.unwrap_or_default();
    metadata.insert(
        "log_level".to_string(),
        Value::String(level.as_str().to_string()),
    );
    let metadata = serde_json::to_string_pretty(&metadata)?;
    logger.log(level, &format!("{event}\n{metadata}"));
    Ok(())
}

/// [`log_event`] for every event, sharing metadata and level.
pub fn log_events<L, I, E>(
    logger: &L,
    events: I,
    metadata: Option<Map<String, Value>>,
    level: &str,
) -> error::Result<()>
where
    L: Logger + ?Sized,
    I: IntoIterator<Item = E>,
    E: AsRef<str>,
{
    level.parse::<LogLevel>()?;
    for event in events {
        log_event(logger, event.as_ref(), metadata.clone(), level)?;
    }
    Ok(())
}
