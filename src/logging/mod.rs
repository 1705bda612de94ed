use crate::dispatch;
use crate::dispatch::Logger;
use crate::error::{Error, Result};
use crate::format::{Format, SIMPLE_FORMAT};
use crate::level::{str_to_logging_level, Level, LOGGING_WARNING};
use crate::sink::{Sink, StreamSink};
use env_logger::{Builder, WriteStyle};
use log::LevelFilter;
use std::env::{self, VarError};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;


/// Parameters for `init_logging`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    // Level name used unless the environment variable overrides it.
    pub default_level: String,
    // Environment variable to read a level from, ignored if None or empty.
    pub env_var: Option<String>,
    // Stream to log to. Defaults to stderr. Not allowed with `handlers`.
    pub stream: Option<StreamSink>,
    // File to log to in addition to the stream. Not allowed with `handlers`.
    pub filename: Option<PathBuf>,
    // Explicit destinations, used verbatim.
    pub handlers: Option<Vec<Sink>>,
    pub format: String,
    // Color the level on stdout/stderr.
    pub colored: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            default_level: LOGGING_WARNING.to_string(),
            env_var: None,
            stream: None,
            filename: None,
            handlers: None,
            format: SIMPLE_FORMAT.to_string(),
            colored: false,
        }
    }
}

impl InitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_level(mut self, level: &str) -> Self {
        self.default_level = level.to_string();
        self
    }

    pub fn env_var(mut self, name: &str) -> Self {
        self.env_var = Some(name.to_string());
        self
    }

    pub fn stream<S: Into<StreamSink>>(mut self, stream: S) -> Self {
        self.stream = Some(stream.into());
        self
    }

    pub fn filename<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.filename = Some(path.into());
        self
    }

    pub fn handlers(mut self, handlers: Vec<Sink>) -> Self {
        self.handlers = Some(handlers);
        self
    }

    pub fn format(mut self, format: &str) -> Self {
        self.format = format.to_string();
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }
}

/// The process-wide logging configuration. Each successful call to
/// `init_logging` replaces it as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfiguration {
    level: Level,
    format: Format,
    destinations: Vec<Sink>,
    colored: bool,
}

impl LoggingConfiguration {
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn destinations(&self) -> &[Sink] {
        &self.destinations
    }

    pub fn colored(&self) -> bool {
        self.colored
    }
}

/// Initializes logging.
///
/// Every parameter is validated, and every file sink opened, before the
/// new configuration is applied; on error the previous configuration
/// stays in effect.
pub fn init_logging(options: InitOptions) -> Result<()> {
    let level = resolve_level(&options.default_level, options.env_var.as_deref())?;
    let destinations = resolve_destinations(options.stream, options.filename, options.handlers)?;
    let format = Format::parse(&options.format)?;

    let config = LoggingConfiguration {
        level,
        format,
        destinations,
        colored: options.colored,
    };

    let shared = Arc::new(config.format.clone());
    let mut writers = Vec::with_capacity(config.destinations.len());
    for sink in &config.destinations {
        writers.push(build_writer(sink, &shared, config.colored)?);
    }

    let destinations = config.destinations.len();
    dispatch::install(Arc::new(config), writers)?;
    log::debug!(
        "Logging initialized at {} with {} destination(s)",
        level,
        destinations
    );
    Ok(())
}

/// The active configuration, `None` until `init_logging` has succeeded.
pub fn configuration() -> Option<Arc<LoggingConfiguration>> {
    dispatch::configuration()
}

/// Sets the level of the logger from a level name, see `LOGGING_LEVELS`.
pub fn set_logging_level(logger: &Logger, level: &str) -> Result<()> {
    let level = str_to_logging_level(level)?;
    logger.set_level(level);
    Ok(())
}

fn resolve_level(default_level: &str, env_var: Option<&str>) -> Result<Level> {
    let mut level = str_to_logging_level(default_level)?;

    if let Some(name) = env_var.filter(|name| !name.is_empty()) {
        match env::var(name) {
            Ok(value) => level = str_to_logging_level(&value)?,
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(value)) => {
                return Err(Error::InvalidLevel(value.to_string_lossy().to_uppercase()))
            }
        }
    }

    Ok(level)
}

fn resolve_destinations(
    stream: Option<StreamSink>,
    filename: Option<PathBuf>,
    handlers: Option<Vec<Sink>>,
) -> Result<Vec<Sink>> {
    let handlers = match handlers {
        Some(handlers) => handlers,
        None => {
            let mut sinks = Vec::new();
            if let Some(path) = filename {
                sinks.push(Sink::File(path));
            }
            sinks.push(Sink::Stream(stream.unwrap_or_default()));
            return Ok(sinks);
        }
    };

    if stream.is_some() {
        return Err(Error::ConflictingConfiguration(
            "handlers and stream are mutually exclusive",
        ));
    }
    if filename.is_some() {
        return Err(Error::ConflictingConfiguration(
            "handlers and filename are mutually exclusive",
        ));
    }
    if handlers.is_empty() {
        return Err(Error::Configuration(
            "at least one handler required".to_string(),
        ));
    }
    Ok(handlers)
}

fn build_writer(sink: &Sink, format: &Arc<Format>, colored: bool) -> Result<env_logger::Logger> {
    let target = sink.open()?;
    let format = Arc::clone(format);
    let colored = colored && sink.is_console();
    // Never strips escape codes; Auto keeps them only on a terminal.
    let style = if colored {
        WriteStyle::Auto
    } else {
        WriteStyle::Never
    };

    let logger = Builder::new()
        .target(target)
        .write_style(style)
        .filter_level(LevelFilter::Trace)
        .format(move |buf, record| {
            let line = format.render(record, || buf.timestamp_millis().to_string(), colored);
            writeln!(buf, "{}", line)
        })
        .build();
    Ok(logger)
}
