//! Euro / US-Dollar converter
//!
//! This module contains the conversion arithmetic and the interactive
//! console session around it.

mod input;
mod request;
mod session;
mod settings;

pub use input::{parse_amount, parse_continue, parse_rate};
pub use request::{format_two_decimals, ConversionRequest, Currency, Direction};
pub use session::{CurrencySession, Stage, Step};
pub use settings::CurrencySettings;
