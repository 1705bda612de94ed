//! Helpers for setting up logging: level names, a process-wide
//! configuration on top of `log` and `env_logger`, and reusable `clap`
//! options for the logging level and logger name.

pub mod cli;
pub mod color;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod level;
pub mod logging;
pub mod settings;
pub mod sink;
#[cfg(test)]
mod testing;

pub use cli::{add_logger_name, add_logging_level, LevelOption, NameOption};
pub use dispatch::Logger;
pub use error::{Error, Result};
pub use format::{Format, SIMPLE_FORMAT, TIMESTAMP_FORMAT};
pub use level::{
    level_name_to_severity, record_level, str_to_logging_level, Level, CRITICAL_MARKER, LOGGING_CRITICAL, LOGGING_DEBUG,
    LOGGING_ERROR, LOGGING_INFO, LOGGING_LEVELS, LOGGING_WARN, LOGGING_WARNING,
};
pub use logging::{configuration, init_logging, set_logging_level, InitOptions, LoggingConfiguration};
pub use settings::Settings;
pub use sink::{LogBuffer, SharedWriter, Sink, StreamSink};
