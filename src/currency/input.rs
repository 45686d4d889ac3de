//! Parsing of console answers

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses an amount
///
/// Surrounding whitespace is ignored. Plain (`12.5`) and scientific (`1.25e1`)
/// notation are accepted; an empty answer or digit separators (`1_000`) are not.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parses an exchange rate
///
/// An empty answer selects `default`. Anything else must be a number greater
/// than zero. A line made of spaces is not empty.
pub fn parse_rate(input: &str, default: Decimal) -> Option<Decimal> {
    if input.is_empty() {
        return Some(default);
    }
    parse_amount(input).filter(|rate| *rate > Decimal::ZERO)
}

/// Parses the answer to "once more?", `j` to continue or `n` to stop
pub fn parse_continue(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "j" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
