//! Session settings

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::constants::{DEFAULT_RATE, DEFAULT_RATE_DATE};

/// Defaults offered by the rate prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySettings {
    /// Rate used when the rate prompt is answered with an empty line
    pub default_rate: Decimal,
    /// Date the default rate was taken from, shown in the prompt
    pub rate_date: String,
}

impl CurrencySettings {
    pub fn new(default_rate: Decimal, rate_date: impl Into<String>) -> Self {
        CurrencySettings {
            default_rate,
            rate_date: rate_date.into(),
        }
    }

    pub fn rate_prompt(&self) -> String {
        format!(
            "Bitte nenne nun den Wechselkurs EUR zu USD. [Leer = default: {} Stand: {}]: ",
            self.default_rate, self.rate_date
        )
    }
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            default_rate: Decimal::from_str(DEFAULT_RATE).unwrap_or(Decimal::ONE),
            rate_date: DEFAULT_RATE_DATE.to_string(),
        }
    }
}
