use crate::level::LOGGING_LEVELS;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid logging level ({}): {0}", LOGGING_LEVELS.join("|"))]
    InvalidLevel(String),

    #[error("unhandled logging level: {0}")]
    UnhandledLevel(String),

    #[error("conflicting configuration: {0}")]
    ConflictingConfiguration(&'static str),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid format template: {0}")]
    InvalidFormat(String),

    #[error("failed to open log file {path:?}: {source}")]
    OpenFile { path: PathBuf, source: io::Error },

    #[error("failed to read settings file {path:?}: {source}")]
    ReadSettings { path: PathBuf, source: io::Error },

    #[error("invalid logging settings: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("unable to install logger: {0}")]
    LoggerInstalled(#[from] log::SetLoggerError),
}
