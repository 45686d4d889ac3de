use std::process::ExitCode;

use human_panic::setup_panic;
use log::debug;

use umrechner::cli::{get_log_file, get_matches, get_verbosity};
use umrechner::commands::execute;
use umrechner::constants::ERROR_PREFIX;
use umrechner::logging::init_logger;

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    let log_file = match get_log_file(&matches) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Log file unavailable, logging to the console only: {e}");
            String::new()
        }
    };
    if let Err(e) = init_logger(get_verbosity(&matches), &log_file) {
        eprintln!("Failed to initialise logging: {e}");
    }

    match execute(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            println!("{ERROR_PREFIX}{e:#}");
            ExitCode::FAILURE
        }
    }
}
