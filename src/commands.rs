//! Subcommand execution
//!
//! Ties the parsed command line, the configuration and the converters together.

use std::io;

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use log::{debug, info};

use crate::cli::{
    check_for_stdout_stream, get_config_path, get_entity_paths, get_init_output_path,
    get_rate_override, should_wait, CURRENCY_COMMAND, ENTITIES_COMMAND, INIT_CONFIG_COMMAND,
};
use crate::config::{load_or_default, save_config, Config};
use crate::constants::SUCCESS_MESSAGE;
use crate::currency::CurrencySession;
use crate::entities::{convert_file, SubstitutionTable};

/// Runs the subcommand selected on the command line
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or the subcommand fails
pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some((ENTITIES_COMMAND, sub_matches)) => {
            let config = load_or_default(&get_config_path(matches))?;
            run_entities(sub_matches, &config)
        }
        Some((CURRENCY_COMMAND, sub_matches)) => {
            let config = load_or_default(&get_config_path(matches))?;
            run_currency(sub_matches, &config)
        }
        Some((INIT_CONFIG_COMMAND, sub_matches)) => run_init_config(sub_matches),
        Some((name, _)) => Err(anyhow!("Unknown command: {name}")),
        None => Err(anyhow!("No command given")),
    }
}

fn run_entities(matches: &ArgMatches, config: &Config) -> Result<()> {
    let (input, output) = get_entity_paths(matches, &config.entities);
    debug!("Converting {} into {}", input.display(), output.display());

    convert_file(&input, &output, &SubstitutionTable::umlauts())?;
    println!("{SUCCESS_MESSAGE}");

    if should_wait(matches) {
        check_for_stdout_stream();
    }
    Ok(())
}

fn run_currency(matches: &ArgMatches, config: &Config) -> Result<()> {
    let mut settings = config.currency.settings();
    if let Some(rate) = get_rate_override(matches)? {
        settings.default_rate = rate;
    }
    debug!("Default rate {} from {}", settings.default_rate, settings.rate_date);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = CurrencySession::new(stdin.lock(), stdout.lock(), settings);
    session.run()?;
    Ok(())
}

fn run_init_config(matches: &ArgMatches) -> Result<()> {
    let path = get_init_output_path(matches);
    save_config(&Config::default(), &path)?;

    info!("Default configuration written to {}", path.display());
    println!("Die Konfiguration wurde unter {} gespeichert.", path.display());
    Ok(())
}
