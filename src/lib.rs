pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod currency;
pub mod entities;
pub mod errors;
pub mod logging;
pub mod utils;

pub mod prelude {
    pub use crate::commands::execute;
    pub use crate::config::{load_or_default, Config};
    pub use crate::currency::{ConversionRequest, CurrencySession, CurrencySettings, Direction};
    pub use crate::entities::{convert_file, ConversionReport, SubstitutionTable, TextDocument};
    pub use crate::errors::{
        config_parsing_error, file_operation_error, generic_error, input_closed_error,
        invalid_rate_error, overflow_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{init_logger, LogLevel};
}
