use crate::error::{Error, Result};
use crate::format::SIMPLE_FORMAT;
use crate::level::LOGGING_WARNING;
use crate::logging::{init_logging, InitOptions};
use crate::sink::StreamSink;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Logging settings as read from the `[logging]` table of a TOML document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_level")]
    pub level: String,
    pub env_var: Option<String>,
    pub filename: Option<PathBuf>,
    pub stream: Option<Stream>,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub colored: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    Stdout,
    Stderr,
}

// Other tables belong to the application and are ignored.
#[derive(Deserialize)]
struct RawSettings {
    logging: Option<Settings>,
}

fn default_level() -> String {
    LOGGING_WARNING.to_string()
}

fn default_format() -> String {
    SIMPLE_FORMAT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: default_level(),
            env_var: None,
            filename: None,
            stream: None,
            format: default_format(),
            colored: false,
        }
    }
}

impl Settings {
    /// Parses a TOML document. A missing `[logging]` table gives the defaults.
    pub fn from_toml(s: &str) -> Result<Self> {
        let raw: RawSettings = toml::from_str(s)?;
        Ok(raw.logging.unwrap_or_default())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).map_err(|source| Error::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&s)
    }

    pub fn into_options(self) -> InitOptions {
        InitOptions {
            default_level: self.level,
            env_var: self.env_var,
            stream: self.stream.map(|s| match s {
                Stream::Stdout => StreamSink::Stdout,
                Stream::Stderr => StreamSink::Stderr,
            }),
            filename: self.filename,
            handlers: None,
            format: self.format,
            colored: self.colored,
        }
    }

    pub fn init(self) -> Result<()> {
        init_logging(self.into_options())
    }
}
