//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_RATE, DEFAULT_RATE_DATE};
use crate::currency::CurrencySettings;

use super::deserializer::deserialize_path;

/// Configuration for both converters
///
/// Every field has a default, so an empty file or no file at all is valid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    /// Settings of the HTML entity converter
    pub entities: EntitiesConfig,
    /// Settings of the currency converter
    pub currency: CurrencyConfig,
}

/// Files used by the HTML entity converter
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EntitiesConfig {
    /// File to read; a string or a list of path segments
    #[serde(deserialize_with = "deserialize_path")]
    pub input: PathBuf,
    /// File to write; a string or a list of path segments
    #[serde(deserialize_with = "deserialize_path")]
    pub output: PathBuf,
}

impl Default for EntitiesConfig {
    fn default() -> Self {
        EntitiesConfig {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Defaults of the currency converter
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CurrencyConfig {
    /// EUR to USD rate used for an empty answer at the rate prompt
    pub default_rate: Decimal,
    /// Date shown next to the default rate
    pub rate_date: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        CurrencyConfig {
            default_rate: Decimal::from_str(DEFAULT_RATE).unwrap_or(Decimal::ONE),
            rate_date: DEFAULT_RATE_DATE.to_string(),
        }
    }
}

impl CurrencyConfig {
    pub fn settings(&self) -> CurrencySettings {
        CurrencySettings::new(self.default_rate, self.rate_date.clone())
    }
}

impl Config {
    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self) -> Result<()> {
        if self.entities.input.as_os_str().is_empty() {
            return Err(anyhow!(
                "No input file specified for the entity converter. Please set `entities.input`."
            ));
        }

        if self.entities.output.as_os_str().is_empty() {
            return Err(anyhow!(
                "No output file specified for the entity converter. Please set `entities.output`."
            ));
        }

        if self.currency.default_rate <= Decimal::ZERO {
            return Err(anyhow!(
                "Default exchange rate {} is invalid: {}",
                self.currency.default_rate,
                "Please specify a rate greater than zero."
            ));
        }

        Ok(())
    }
}
