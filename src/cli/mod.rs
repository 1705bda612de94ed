use crate::error::{Error, Result};
use crate::level::{str_to_logging_level, Level, LOGGING_LEVELS, LOGGING_WARN, LOGGING_WARNING};
use clap::{Arg, ArgMatches, Command, PossibleValue};

mod app;
#[cfg(test)]
mod tests;

pub use app::Cli;

pub const LEVEL_HELP: &str = "The logging level to use.";
pub const NAME_HELP: &str = "The custom name to use for the logger.";

/// Flags for the logging level option. At least one of `short` and
/// `long` must be set.
#[derive(Debug, Clone)]
pub struct LevelOption<'help> {
    pub short: Option<char>,
    pub long: Option<&'help str>,
    // Id of the argument in the parsed matches.
    pub dest: &'help str,
    pub help: Option<&'help str>,
}

impl Default for LevelOption<'_> {
    fn default() -> Self {
        Self {
            short: Some('l'),
            long: Some("logging_level"),
            dest: "logging_level",
            help: None,
        }
    }
}

/// Flags for the logger name option. At least one of `short` and
/// `long` must be set.
#[derive(Debug, Clone)]
pub struct NameOption<'help> {
    pub short: Option<char>,
    pub long: Option<&'help str>,
    pub dest: &'help str,
    pub default_name: Option<&'help str>,
    pub help: Option<&'help str>,
}

impl Default for NameOption<'_> {
    fn default() -> Self {
        Self {
            short: Some('N'),
            long: Some("logger_name"),
            dest: "logging_name",
            default_name: None,
            help: None,
        }
    }
}

/// Adds an option for the logging level to the command. The value is
/// one of `LOGGING_LEVELS` and defaults to `WARN`.
pub fn add_logging_level<'help>(cmd: Command<'help>, opt: LevelOption<'help>) -> Result<Command<'help>> {
    let arg = flag_arg(opt.dest, opt.short, opt.long)?
        .takes_value(true)
        .value_name("LEVEL")
        .possible_values(level_values())
        .default_value(LOGGING_WARN)
        .help(opt.help.unwrap_or(LEVEL_HELP));
    Ok(cmd.arg(arg))
}

/// Adds an option for the logger name to the command.
pub fn add_logger_name<'help>(cmd: Command<'help>, opt: NameOption<'help>) -> Result<Command<'help>> {
    let mut arg = flag_arg(opt.dest, opt.short, opt.long)?
        .takes_value(true)
        .value_name("NAME")
        .required(false)
        .help(opt.help.unwrap_or(NAME_HELP));
    if let Some(name) = opt.default_name {
        arg = arg.default_value(name);
    }
    Ok(cmd.arg(arg))
}

/// Reads the level option added by `add_logging_level`.
pub fn logging_level_of(matches: &ArgMatches, dest: &str) -> Result<Option<Level>> {
    matches.value_of(dest).map(str_to_logging_level).transpose()
}

/// Reads the name option added by `add_logger_name`.
pub fn logger_name_of(matches: &ArgMatches, dest: &str) -> Option<String> {
    matches.value_of(dest).map(|s| s.to_string())
}

fn flag_arg<'help>(dest: &'help str, short: Option<char>, long: Option<&'help str>) -> Result<Arg<'help>> {
    let long = long
        .map(|l| l.trim_start_matches('-'))
        .filter(|l| !l.is_empty());
    if short.is_none() && long.is_none() {
        return Err(Error::Configuration(
            "at least one flag form required".to_string(),
        ));
    }

    let mut arg = Arg::new(dest);
    if let Some(c) = short {
        arg = arg.short(c);
    }
    if let Some(l) = long {
        arg = arg.long(l);
    }
    Ok(arg)
}

// WARN is accepted as an alias so the default passes validation.
fn level_values<'help>() -> Vec<PossibleValue<'help>> {
    LOGGING_LEVELS
        .iter()
        .map(|name| {
            let value = PossibleValue::new(*name);
            if *name == LOGGING_WARNING {
                value.alias(LOGGING_WARN)
            } else {
                value
            }
        })
        .collect()
}
