use crate::error::Result;
use crate::level::{record_level, Level, CRITICAL_MARKER};
use crate::logging::LoggingConfiguration;
use lazy_static::lazy_static;
use log::{Log, Metadata, Record};
use std::cmp;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

lazy_static! {
    static ref ACTIVE: RwLock<Option<Arc<Active>>> = RwLock::new(None);
    static ref THRESHOLDS: RwLock<HashMap<String, Level>> = RwLock::new(HashMap::new());
    static ref INSTALLED: Mutex<bool> = Mutex::new(false);
    static ref MAX_LEVEL: Mutex<()> = Mutex::new(());
}

static DISPATCHER: Dispatcher = Dispatcher;

/// The configuration currently in effect, together with one `env_logger`
/// writer per destination.
struct Active {
    config: Arc<LoggingConfiguration>,
    writers: Vec<env_logger::Logger>,
}

/// Installs the dispatcher as the global `log` logger on first use and
/// replaces whatever configuration was active before.
pub(crate) fn install(
    config: Arc<LoggingConfiguration>,
    writers: Vec<env_logger::Logger>,
) -> Result<()> {
    {
        let mut installed = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);
        if !*installed {
            log::set_logger(&DISPATCHER)?;
            *installed = true;
        }
    }

    let previous = {
        let mut active = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
        active.replace(Arc::new(Active { config, writers }))
    };
    if let Some(previous) = previous {
        previous.flush();
    }

    update_max_level();
    Ok(())
}

pub(crate) fn configuration() -> Option<Arc<LoggingConfiguration>> {
    current().map(|a| Arc::clone(&a.config))
}

fn current() -> Option<Arc<Active>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(Arc::clone)
}

fn root_level() -> Option<Level> {
    current().map(|a| a.config.level())
}

// Longest logger name that is the target itself or one of its parents.
fn override_for(target: &str) -> Option<Level> {
    let thresholds = THRESHOLDS.read().unwrap_or_else(PoisonError::into_inner);
    thresholds
        .iter()
        .filter(|(name, _)| is_parent_or_self(name, target))
        .max_by_key(|(name, _)| name.len())
        .map(|(_, level)| *level)
}

fn is_parent_or_self(name: &str, target: &str) -> bool {
    match target.strip_prefix(name) {
        Some("") => true,
        Some(rest) => rest.starts_with("::") || rest.starts_with('.'),
        None => false,
    }
}

fn threshold(target: &str) -> Option<Level> {
    override_for(target).or_else(root_level)
}

// Records are dropped by the facade before reaching the dispatcher unless
// max_level admits the most verbose threshold in use.
fn update_max_level() {
    let _guard = MAX_LEVEL.lock().unwrap_or_else(PoisonError::into_inner);
    let root = match root_level() {
        Some(level) => level.to_level_filter(),
        None => return,
    };
    let thresholds = THRESHOLDS.read().unwrap_or_else(PoisonError::into_inner);
    let max = thresholds
        .values()
        .map(|l| l.to_level_filter())
        .fold(root, cmp::max);
    log::set_max_level(max);
}

struct Dispatcher;

impl Log for Dispatcher {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match threshold(metadata.target()) {
            Some(level) => metadata.level() <= level.to_level_filter(),
            None => false,
        }
    }

    // `enabled` only sees the `log` level; critical and plain error records
    // are told apart here.
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match threshold(record.target()) {
            Some(level) if record_level(record) >= level => {}
            _ => return,
        }
        if let Some(active) = current() {
            for writer in &active.writers {
                writer.log(record);
            }
        }
    }

    fn flush(&self) {
        if let Some(active) = current() {
            active.flush();
        }
    }
}

impl Active {
    fn flush(&self) {
        for writer in &self.writers {
            writer.flush();
        }
    }
}

/// Handle to a named logger. Names are matched against `log` record
/// targets, so a logger named `app` also covers `app::db` and `app.db`
/// unless a more specific logger has its own level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Logger {
    name: String,
}

impl Logger {
    pub fn get(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The level set on this logger, if any.
    pub fn level(&self) -> Option<Level> {
        let thresholds = THRESHOLDS.read().unwrap_or_else(PoisonError::into_inner);
        thresholds.get(&self.name).copied()
    }

    pub fn set_level(&self, level: Level) {
        {
            let mut thresholds = THRESHOLDS.write().unwrap_or_else(PoisonError::into_inner);
            thresholds.insert(self.name.clone(), level);
        }
        update_max_level();
        log::debug!("Logger {:?} set to {}", self.name, level);
    }

    /// Drops this logger's own level so it follows its parents again.
    pub fn reset_level(&self) {
        {
            let mut thresholds = THRESHOLDS.write().unwrap_or_else(PoisonError::into_inner);
            thresholds.remove(&self.name);
        }
        update_max_level();
    }

    /// The level that decides whether this logger's records are written:
    /// its own, a parent's, or the configured minimum. `None` before
    /// logging has been initialized.
    pub fn effective_level(&self) -> Option<Level> {
        threshold(&self.name)
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        match self.effective_level() {
            Some(threshold) => level >= threshold,
            None => false,
        }
    }

    pub fn log(&self, level: log::Level, args: fmt::Arguments) {
        log::log!(target: self.name.as_str(), level, "{}", args);
    }

    pub fn debug(&self, args: fmt::Arguments) {
        self.log(log::Level::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments) {
        self.log(log::Level::Info, args);
    }

    pub fn warning(&self, args: fmt::Arguments) {
        self.log(log::Level::Warn, args);
    }

    pub fn error(&self, args: fmt::Arguments) {
        self.log(log::Level::Error, args);
    }

    /// Logs at `log::Level::Error` with `CRITICAL_MARKER` attached, so the
    /// record passes a `CRITICAL` threshold and prints as `CRITICAL`.
    pub fn critical(&self, args: fmt::Arguments) {
        if log::Level::Error > log::max_level() {
            return;
        }
        let marker = (CRITICAL_MARKER, true);
        log::logger().log(
            &Record::builder()
                .level(log::Level::Error)
                .target(&self.name)
                .key_values(&marker)
                .args(args)
                .build(),
        );
    }
}
