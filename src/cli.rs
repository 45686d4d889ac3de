use std::path::PathBuf;

use atty::Stream;
use clap::{
    command, crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction,
    ArgMatches, Command,
};
use rust_decimal::Decimal;

use crate::config::EntitiesConfig;
use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, INIT_OUTPUT_HELP, INPUT_ENV, INPUT_HELP, LOCAL_LOGGING_HELP,
    LOG_FILE_DEFAULT, LOG_FILE_HELP, NO_WAIT_HELP, OUTPUT_ENV, OUTPUT_HELP, RATE_HELP,
    VERBOSE_HELP,
};
use crate::currency::parse_amount;
use crate::errors::{generic_error, invalid_rate_error, Result};
use crate::logging::LogLevel;
use crate::utils::{expand_path, find_project_folder};

/// Name of the HTML entity subcommand
pub const ENTITIES_COMMAND: &str = "entities";
/// Name of the currency subcommand
pub const CURRENCY_COMMAND: &str = "currency";
/// Name of the subcommand writing a default configuration
pub const INIT_CONFIG_COMMAND: &str = "init-config";

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a GUI.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Builds the command-line interface
///
/// Global arguments:
/// - `config`: Path to the configuration file
/// - `verbose`: Increase verbosity level
/// - `log_file` / `log_locally`: Where the log file goes
///
/// Subcommands: `entities`, `currency` and `init-config`.
pub fn build_command() -> Command {
    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .global(true)
        .default_value(DEFAULT_CONFIG_PATH);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .global(true)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .global(true)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .global(true)
        .action(ArgAction::SetTrue);

    let entities = Command::new(ENTITIES_COMMAND)
        .about("Escape German umlauts in a file into HTML entities")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .env(INPUT_ENV)
                .help(INPUT_HELP),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .env(OUTPUT_ENV)
                .help(OUTPUT_HELP),
        )
        .arg(
            Arg::new("no_wait")
                .long("no-wait")
                .help(NO_WAIT_HELP)
                .action(ArgAction::SetTrue),
        );

    let currency = Command::new(CURRENCY_COMMAND)
        .about("Convert between Euro and US-Dollar interactively")
        .arg(Arg::new("rate").short('r').long("rate").help(RATE_HELP));

    let init_config = Command::new(INIT_CONFIG_COMMAND)
        .about("Write a configuration file with the default settings")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help(INIT_OUTPUT_HELP)
                .default_value(DEFAULT_CONFIG_PATH),
        );

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg_config)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .subcommand(entities)
        .subcommand(currency)
        .subcommand(init_config)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path
///
/// Unless `--log-locally` is given, the file lives in the platform
/// configuration directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path.as_path().to_str()
            .ok_or_else(|| generic_error(&format!("Failed to convert path to string: {:?}", path)))?;
        Ok(path_str.to_string())
    }
}

/// Gets the configuration file path
pub fn get_config_path(matches: &ArgMatches) -> PathBuf {
    let path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_PATH);
    PathBuf::from(expand_path(path))
}

/// Gets input and output file of the entity converter
///
/// Command-line arguments and environment variables win over the configuration.
pub fn get_entity_paths(matches: &ArgMatches, config: &EntitiesConfig) -> (PathBuf, PathBuf) {
    let pick = |name: &str, configured: &PathBuf| {
        matches
            .get_one::<String>(name)
            .map(|value| PathBuf::from(expand_path(value)))
            .unwrap_or_else(|| configured.clone())
    };
    (pick("input", &config.input), pick("output", &config.output))
}

/// Checks whether the entity converter should wait for Enter before closing
pub fn should_wait(matches: &ArgMatches) -> bool {
    !matches.get_flag("no_wait")
}

/// Gets the default rate given with `--rate`, if any
///
/// # Errors
/// Returns an error if the value is not a number greater than zero
pub fn get_rate_override(matches: &ArgMatches) -> Result<Option<Decimal>> {
    match matches.get_one::<String>("rate") {
        None => Ok(None),
        Some(value) => parse_amount(value)
            .filter(|rate| *rate > Decimal::ZERO)
            .map(Some)
            .ok_or_else(|| invalid_rate_error(value)),
    }
}

/// Gets the output path of the `init-config` subcommand
pub fn get_init_output_path(matches: &ArgMatches) -> PathBuf {
    let path = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_PATH);
    PathBuf::from(expand_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_consistent() {
        build_command().debug_assert();
    }

    #[test]
    fn test_verbosity_counts_flags() {
        let matches = build_command().get_matches_from(["umrechner", "-vv", "currency"]);
        assert_eq!(get_verbosity(&matches), LogLevel::Debug);

        let matches = build_command().get_matches_from(["umrechner", "currency"]);
        assert_eq!(get_verbosity(&matches), LogLevel::Warning);
    }

    #[test]
    fn test_local_log_file() {
        let matches =
            build_command().get_matches_from(["umrechner", "-L", "-l", "run.log", "currency"]);
        assert_eq!(get_log_file(&matches).unwrap(), "run.log");
    }

    #[test]
    fn test_rate_override() {
        let matches = build_command().get_matches_from(["umrechner", "currency", "--rate", "1.2"]);
        let (_, sub_matches) = matches.subcommand().unwrap();
        assert_eq!(
            get_rate_override(sub_matches).unwrap(),
            Some(Decimal::new(12, 1))
        );

        let matches = build_command().get_matches_from(["umrechner", "currency", "-r", "0"]);
        let (_, sub_matches) = matches.subcommand().unwrap();
        assert!(get_rate_override(sub_matches).is_err());

        let matches = build_command().get_matches_from(["umrechner", "currency"]);
        let (_, sub_matches) = matches.subcommand().unwrap();
        assert_eq!(get_rate_override(sub_matches).unwrap(), None);
    }

    #[test]
    fn test_init_output_default() {
        let matches = build_command().get_matches_from(["umrechner", "init-config"]);
        let (name, sub_matches) = matches.subcommand().unwrap();
        assert_eq!(name, INIT_CONFIG_COMMAND);
        assert_eq!(get_init_output_path(sub_matches), PathBuf::from(DEFAULT_CONFIG_PATH));
    }
}
