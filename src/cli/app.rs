use super::{add_logger_name, add_logging_level, logger_name_of, LevelOption, NameOption};
use crate::format::TIMESTAMP_FORMAT;
use crate::logging::{init_logging, set_logging_level, InitOptions};
use crate::settings::Settings;
use crate::Logger;
use anyhow::{bail, Result};
use clap::{command, crate_name, Arg};
use std::path::Path;

/// Environment variable that overrides the configured minimum level.
pub const LOG_ENV_VAR: &str = "LOGHELPER_LOG";

#[derive(Default)]
pub struct Cli;

impl Cli {
    pub fn exec(&self) -> Result<()> {
        let cmd = command!()
            .about("Configure logging and write a record at each level.")
            .arg(
                Arg::new("config")
                    .long("config")
                    .short('c')
                    .takes_value(true)
                    .help("TOML file with a [logging] table."),
            )
            .arg(
                Arg::new("log-file")
                    .long("log-file")
                    .short('f')
                    .takes_value(true)
                    .help("Also write records to this file."),
            )
            .arg(
                Arg::new("format")
                    .long("format")
                    .takes_value(true)
                    .help("Output template, e.g. \"{level}:{name}:{message}\"."),
            )
            .arg(
                Arg::new("timestamps")
                    .long("timestamps")
                    .short('t')
                    .conflicts_with("format")
                    .help("Use the timestamped output template."),
            )
            .arg(
                Arg::new("color")
                    .long("color")
                    .help("Color levels written to the terminal."),
            )
            .arg(
                Arg::new("message")
                    .takes_value(true)
                    .multiple_values(true)
                    .help("Messages to log, defaults to \"hello\"."),
            );
        let cmd = add_logging_level(cmd, LevelOption::default())?;
        let cmd = add_logger_name(
            cmd,
            NameOption {
                default_name: Some(crate_name!()),
                ..Default::default()
            },
        )?;
        let matches = cmd.get_matches();

        let mut options = match matches.value_of("config") {
            Some(path) => Settings::load(Path::new(path))?.into_options(),
            None => InitOptions::new(),
        };
        if options.env_var.is_none() {
            options.env_var = Some(LOG_ENV_VAR.to_string());
        }
        if let Some(path) = matches.value_of("log-file") {
            options.filename = Some(path.into());
        }
        if let Some(format) = matches.value_of("format") {
            options.format = format.to_string();
        }
        if matches.is_present("timestamps") {
            options.format = TIMESTAMP_FORMAT.to_string();
        }
        if matches.is_present("color") {
            options.colored = true;
        }
        init_logging(options)?;

        let name = match logger_name_of(&matches, "logging_name") {
            Some(name) if !name.is_empty() => name,
            _ => bail!("empty logger name"),
        };
        let logger = Logger::get(&name);
        if let Some(level) = matches.value_of("logging_level") {
            set_logging_level(&logger, level)?;
        }

        let messages: Vec<&str> = match matches.values_of("message") {
            Some(values) => values.collect(),
            None => vec!["hello"],
        };
        for msg in messages {
            logger.debug(format_args!("{}", msg));
            logger.info(format_args!("{}", msg));
            logger.warning(format_args!("{}", msg));
            logger.error(format_args!("{}", msg));
            logger.critical(format_args!("{}", msg));
        }
        log::logger().flush();

        Ok(())
    }
}
