//! Diagnostics output for wend.
//!
//! The library reports what it does through the [`log`] facade: resolution
//! start and cache statistics, and which bindings sources were loaded.
//! Nothing is printed unless a logger is installed. [`Logger`] is the
//! stderr logger used by the `wend` binary; it can also print messages
//! directly and be installed as the `log` backend.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_VAR: &str = "WEND_LOG_MODE";

/// How much diagnostic output to produce.
///
/// Levels are ordered from least to most verbose.
///
/// # Examples
///
/// ```
/// use wend::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing but the command's own output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including library debug records.
    Verbose,
}

impl LogLevel {
    /// Parse a level name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a message naming the input if it is not `quiet`, `normal`
    /// or `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wend::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter matching this level.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

static QUIET: Logger = Logger::new(LogLevel::Quiet);
static NORMAL: Logger = Logger::new(LogLevel::Normal);
static VERBOSE: Logger = Logger::new(LogLevel::Verbose);

/// A stderr logger filtered by [`LogLevel`].
///
/// # Examples
///
/// ```
/// use wend::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("bindings file has no entries");
/// logger.debug("not printed below Verbose");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Print an error unless quiet.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "error", message);
    }

    /// Print a warning unless quiet.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "warning", message);
    }

    /// Print an informational message when verbose.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "info", message);
    }

    /// Print a debug message when verbose.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "debug", message);
    }

    fn emit(&self, required: LogLevel, tag: &str, message: &str) {
        if self.level >= required {
            eprintln!("{tag}: {message}");
        }
    }

    /// Route `log` records from the library through a logger at this
    /// level.
    ///
    /// Only the first call in a process installs a backend; later calls
    /// return `false`.
    pub fn install(&self) -> bool {
        let backend: &'static Logger = match self.level {
            LogLevel::Quiet => &QUIET,
            LogLevel::Normal => &NORMAL,
            LogLevel::Verbose => &VERBOSE,
        };
        if log::set_logger(backend).is_err() {
            return false;
        }
        log::set_max_level(self.level.filter());
        true
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            let tag = record.level().as_str().to_lowercase();
            eprintln!("{tag}: [{}] {}", record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Build a logger from CLI flags and the `WEND_LOG_MODE` variable.
///
/// `verbose` wins over `quiet`, and either flag wins over the variable.
/// An unrecognized variable value is ignored.
///
/// # Examples
///
/// ```
/// use wend::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }
    let level = env::var(LOG_MODE_VAR)
        .ok()
        .and_then(|mode| LogLevel::parse(&mode).ok())
        .unwrap_or(LogLevel::Normal);
    Logger::new(level)
}
