use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the converters
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Exchange rate that is zero, negative or not a number
    InvalidRate { value: String },
    /// Conversion result does not fit into a decimal
    Overflow { amount: String, rate: String },
    /// The console input ended while a prompt was waiting
    InputClosed { prompt: String },
    /// Reading from or writing to the console failed
    Console { source: io::Error },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::InvalidRate { value } => {
                write!(f, "Invalid exchange rate '{value}': must be greater than zero")
            }
            Error::Overflow { amount, rate } => {
                write!(f, "Converting {amount} with rate {rate} overflows")
            }
            Error::InputClosed { prompt } => {
                write!(f, "Input closed while waiting for: {}", prompt.trim_end())
            }
            Error::Console { .. } => {
                write!(f, "Console I/O failed")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            Error::Console { source } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Console { source: err }
    }
}

/// Custom Result type for the converters
///
/// # Examples
/// ```
/// use umrechner::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid rate error
pub fn invalid_rate_error(value: impl fmt::Display) -> Error {
    Error::InvalidRate {
        value: value.to_string(),
    }
}

/// Helper function to create an overflow error for a conversion
pub fn overflow_error(amount: impl fmt::Display, rate: impl fmt::Display) -> Error {
    Error::Overflow {
        amount: amount.to_string(),
        rate: rate.to_string(),
    }
}

/// Helper function to create an input-closed error for a prompt
pub fn input_closed_error(prompt: &str) -> Error {
    Error::InputClosed {
        prompt: prompt.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
