/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "umrechner";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Write the log into a specific file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Keep the log file in the current directory";

/// Help text for the input file option
pub const INPUT_HELP: &str = "File whose umlauts should be escaped";

/// Help text for the output file option
pub const OUTPUT_HELP: &str = "File the escaped content is written to";

/// Help text for the no-wait flag
pub const NO_WAIT_HELP: &str = "Do not wait for Enter before closing";

/// Help text for the default rate option
pub const RATE_HELP: &str = "Default EUR to USD exchange rate offered at the rate prompt";

/// Help text for the init-config output option
pub const INIT_OUTPUT_HELP: &str = "Where the default configuration file is written";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "umrechner.yaml";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "umrechner.log";

/// Environment variable that overrides the input path
pub const INPUT_ENV: &str = "UMRECHNER_INPUT";

/// Environment variable that overrides the output path
pub const OUTPUT_ENV: &str = "UMRECHNER_OUTPUT";

/// Default input file of the entity converter
pub const DEFAULT_INPUT_PATH: &str = "datei1702_vor.html";

/// Default output file of the entity converter
pub const DEFAULT_OUTPUT_PATH: &str = "datei1702_nach.html";

/// Default EUR to USD rate, as a decimal literal
pub const DEFAULT_RATE: &str = "1.09";

/// Date the default rate was taken from
pub const DEFAULT_RATE_DATE: &str = "22.03.2025";

/// Printed after the entity converter wrote its output
pub const SUCCESS_MESSAGE: &str = "Die Datei wurde erfolgreich konvertiert und gespeichert.";

/// Prefix of every error printed to the user
pub const ERROR_PREFIX: &str = "Fehler: ";

/// Printed when a console answer is rejected
pub const INVALID_INPUT_MESSAGE: &str = "Falsche Eingabe, bitte nochmal!";

/// Prompt for the source currency
pub const DIRECTION_PROMPT: &str = "Eingabe der Ausgangswaehrung (E)uro oder (U)S Dollar ? : ";

/// Prompt for the amount to convert
pub const AMOUNT_PROMPT: &str = "Bitte nenne nun den Betrag welcher umgerechnet werden soll. : ";

/// Prompt asking whether to convert another amount
pub const CONTINUE_PROMPT: &str = "Wollen Sie noch einmal j/n? : ";
