use super::*;

fn cmd() -> Command<'static> {
    Command::new("app")
}

fn level_cmd(opt: LevelOption<'static>) -> Command<'static> {
    add_logging_level(cmd(), opt).unwrap()
}

#[test]
fn level_defaults_to_warn() {
    let matches = level_cmd(LevelOption::default())
        .try_get_matches_from(vec!["app"])
        .unwrap();
    assert_eq!(matches.value_of("logging_level"), Some("WARN"));
    assert_eq!(
        logging_level_of(&matches, "logging_level").unwrap(),
        Some(Level::Warning)
    );
}

#[test]
fn level_short_and_long() {
    let matches = level_cmd(LevelOption::default())
        .try_get_matches_from(vec!["app", "-l", "DEBUG"])
        .unwrap();
    assert_eq!(
        logging_level_of(&matches, "logging_level").unwrap(),
        Some(Level::Debug)
    );

    let matches = level_cmd(LevelOption::default())
        .try_get_matches_from(vec!["app", "--logging_level", "CRITICAL"])
        .unwrap();
    assert_eq!(
        logging_level_of(&matches, "logging_level").unwrap(),
        Some(Level::Critical)
    );
}

#[test]
fn level_accepts_warn_alias() {
    let matches = level_cmd(LevelOption::default())
        .try_get_matches_from(vec!["app", "-l", "WARN"])
        .unwrap();
    assert_eq!(
        logging_level_of(&matches, "logging_level").unwrap(),
        Some(Level::Warning)
    );
}

#[test]
fn level_rejects_unknown_choice() {
    let res = level_cmd(LevelOption::default()).try_get_matches_from(vec!["app", "-l", "LOUD"]);
    assert!(res.is_err());

    let res = level_cmd(LevelOption::default()).try_get_matches_from(vec!["app", "-l", "debug"]);
    assert!(res.is_err());
}

#[test]
fn level_requires_a_flag() {
    let opt = LevelOption {
        short: None,
        long: None,
        ..Default::default()
    };
    let err = add_logging_level(cmd(), opt).unwrap_err();
    assert!(matches!(err, Error::Configuration(ref s) if s.contains("at least one flag")));

    let opt = LevelOption {
        short: None,
        long: Some("--"),
        ..Default::default()
    };
    assert!(add_logging_level(cmd(), opt).is_err());
}

#[test]
fn level_single_flag_forms() {
    let opt = LevelOption {
        short: None,
        long: Some("--level"),
        dest: "lvl",
        help: None,
    };
    let matches = level_cmd(opt)
        .try_get_matches_from(vec!["app", "--level", "INFO"])
        .unwrap();
    assert_eq!(logging_level_of(&matches, "lvl").unwrap(), Some(Level::Info));

    let opt = LevelOption {
        short: Some('v'),
        long: None,
        ..Default::default()
    };
    let matches = level_cmd(opt)
        .try_get_matches_from(vec!["app", "-v", "ERROR"])
        .unwrap();
    assert_eq!(
        logging_level_of(&matches, "logging_level").unwrap(),
        Some(Level::Error)
    );
}

#[test]
fn level_help_text() {
    let cmd = level_cmd(LevelOption::default());
    let arg = cmd
        .get_arguments()
        .find(|a| a.get_id() == "logging_level")
        .unwrap();
    assert_eq!(arg.get_help(), Some(LEVEL_HELP));
    assert_eq!(arg.get_short(), Some('l'));
    assert_eq!(arg.get_long(), Some("logging_level"));

    let cmd = level_cmd(LevelOption {
        help: Some("How loud."),
        ..Default::default()
    });
    let arg = cmd
        .get_arguments()
        .find(|a| a.get_id() == "logging_level")
        .unwrap();
    assert_eq!(arg.get_help(), Some("How loud."));
}

#[test]
fn name_defaults_to_none() {
    let cmd = add_logger_name(cmd(), NameOption::default()).unwrap();
    let matches = cmd.try_get_matches_from(vec!["app"]).unwrap();
    assert_eq!(logger_name_of(&matches, "logging_name"), None);
}

#[test]
fn name_with_default() {
    let opt = NameOption {
        default_name: Some("app"),
        ..Default::default()
    };
    let cmd = add_logger_name(cmd(), opt).unwrap();
    let matches = cmd.try_get_matches_from(vec!["app"]).unwrap();
    assert_eq!(logger_name_of(&matches, "logging_name"), Some("app".to_string()));
}

#[test]
fn name_given() {
    let cmd = add_logger_name(cmd(), NameOption::default()).unwrap();
    let matches = cmd
        .try_get_matches_from(vec!["app", "-N", "app.worker"])
        .unwrap();
    assert_eq!(
        logger_name_of(&matches, "logging_name"),
        Some("app.worker".to_string())
    );

    let cmd = add_logger_name(Command::new("app"), NameOption::default()).unwrap();
    let matches = cmd
        .try_get_matches_from(vec!["app", "--logger_name", "db"])
        .unwrap();
    assert_eq!(logger_name_of(&matches, "logging_name"), Some("db".to_string()));
}

#[test]
fn name_requires_a_flag() {
    let opt = NameOption {
        short: None,
        long: None,
        ..Default::default()
    };
    let err = add_logger_name(cmd(), opt).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn name_help_text() {
    let cmd = add_logger_name(cmd(), NameOption::default()).unwrap();
    let arg = cmd
        .get_arguments()
        .find(|a| a.get_id() == "logging_name")
        .unwrap();
    assert_eq!(arg.get_help(), Some(NAME_HELP));
}

#[test]
fn both_options_on_one_command() {
    let cmd = add_logging_level(cmd(), LevelOption::default()).unwrap();
    let cmd = add_logger_name(cmd, NameOption::default()).unwrap();
    let matches = cmd
        .try_get_matches_from(vec!["app", "-l", "INFO", "-N", "worker"])
        .unwrap();
    assert_eq!(
        logging_level_of(&matches, "logging_level").unwrap(),
        Some(Level::Info)
    );
    assert_eq!(
        logger_name_of(&matches, "logging_name"),
        Some("worker".to_string())
    );
}
