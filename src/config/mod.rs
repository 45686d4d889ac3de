//! Configuration module
//!
//! This module contains components for loading, validating and saving configuration.

pub mod deserializer;
pub mod loader;
mod model;

pub use loader::{load_config, load_or_default, save_config};
pub use model::{Config, CurrencyConfig, EntitiesConfig};
