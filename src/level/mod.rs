use crate::error::{Error, Result};
use log::kv::Key;
use log::{LevelFilter, Record};
use std::fmt;
use std::str::FromStr;


pub const LOGGING_DEBUG: &str = "DEBUG";
pub const LOGGING_INFO: &str = "INFO";
pub const LOGGING_WARN: &str = "WARN";
pub const LOGGING_WARNING: &str = "WARNING";
pub const LOGGING_ERROR: &str = "ERROR";
pub const LOGGING_CRITICAL: &str = "CRITICAL";

/// The canonical level names, in ascending severity.
/// `WARN` is accepted on input but is not part of this list.
pub const LOGGING_LEVELS: [&str; 5] = [
    LOGGING_DEBUG,
    LOGGING_INFO,
    LOGGING_WARNING,
    LOGGING_ERROR,
    LOGGING_CRITICAL,
];

/// A canonical logging level, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    pub fn all() -> [Level; 5] {
        [
            Level::Debug,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Critical,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Level::Debug => LOGGING_DEBUG,
            Level::Info => LOGGING_INFO,
            Level::Warning => LOGGING_WARNING,
            Level::Error => LOGGING_ERROR,
            Level::Critical => LOGGING_CRITICAL,
        }
    }

    /// Numeric severity on the conventional 10..50 scale.
    pub fn severity(&self) -> u32 {
        match self {
            Level::Debug => 10,
            Level::Info => 20,
            Level::Warning => 30,
            Level::Error => 40,
            Level::Critical => 50,
        }
    }

    /// The `log` facade has nothing above `Error`, so `Critical` shares
    /// its filter. Telling the two apart is left to `record_level`.
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            Level::Debug => LevelFilter::Debug,
            Level::Info => LevelFilter::Info,
            Level::Warning => LevelFilter::Warn,
            Level::Error | Level::Critical => LevelFilter::Error,
        }
    }

    pub fn from_log_level(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

/// Key-value marker on error records that were logged as critical.
pub const CRITICAL_MARKER: &str = "loghelper.critical";

/// The level of a `log` record. Error records carrying `CRITICAL_MARKER`
/// are critical.
pub fn record_level(record: &Record) -> Level {
    let level = Level::from_log_level(record.level());
    if level == Level::Error
        && record
            .key_values()
            .get(Key::from_str(CRITICAL_MARKER))
            .is_some()
    {
        Level::Critical
    } else {
        level
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        str_to_logging_level(s)
    }
}

/// Turns a level name into a `Level`. The name is case-insensitive and
/// `WARN` is treated as `WARNING`.
pub fn str_to_logging_level(level: &str) -> Result<Level> {
    let mut level = level.to_uppercase();
    if level == LOGGING_WARN {
        level = LOGGING_WARNING.to_string();
    }
    if !LOGGING_LEVELS.contains(&level.as_str()) {
        return Err(Error::InvalidLevel(level));
    }

    match level.as_str() {
        LOGGING_CRITICAL => Ok(Level::Critical),
        LOGGING_ERROR => Ok(Level::Error),
        LOGGING_WARNING => Ok(Level::Warning),
        LOGGING_INFO => Ok(Level::Info),
        LOGGING_DEBUG => Ok(Level::Debug),
        _ => Err(Error::UnhandledLevel(level)),
    }
}

/// Same as `str_to_logging_level`, returning the numeric severity.
pub fn level_name_to_severity(level: &str) -> Result<u32> {
    str_to_logging_level(level).map(|l| l.severity())
}
