//! Conversion requests
//!
//! Arithmetic is done with `Decimal` so that two-decimal rounding behaves
//! the way people expect money to round.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::{invalid_rate_error, overflow_error, Result};

/// Currencies the converter knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Euro,
    Dollar,
}

impl Currency {
    /// Unit name used in the result line
    pub fn unit(&self) -> &'static str {
        match self {
            Currency::Euro => "Euro",
            Currency::Dollar => "US-Dollar",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit())
    }
}

/// Which currency the entered amount is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    EuroToDollar,
    DollarToEuro,
}

impl Direction {
    /// Parses the direction token, `e` for Euro or `u` for US-Dollar
    ///
    /// Case-insensitive; surrounding whitespace is not accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "e" => Some(Direction::EuroToDollar),
            "u" => Some(Direction::DollarToEuro),
            _ => None,
        }
    }

    pub fn source(&self) -> Currency {
        match self {
            Direction::EuroToDollar => Currency::Euro,
            Direction::DollarToEuro => Currency::Dollar,
        }
    }

    pub fn target(&self) -> Currency {
        match self {
            Direction::EuroToDollar => Currency::Dollar,
            Direction::DollarToEuro => Currency::Euro,
        }
    }
}

/// One conversion: amount, EUR to USD rate and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest {
    amount: Decimal,
    rate: Decimal,
    direction: Direction,
}

impl ConversionRequest {
    /// Creates a request
    ///
    /// # Errors
    /// Returns an error if `rate` is not strictly positive
    pub fn new(amount: Decimal, rate: Decimal, direction: Direction) -> Result<Self> {
        if rate <= Decimal::ZERO {
            return Err(invalid_rate_error(rate));
        }
        Ok(ConversionRequest {
            amount,
            rate,
            direction,
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Converts the amount into the target currency, unrounded
    ///
    /// Euro to Dollar multiplies by the rate, Dollar to Euro multiplies by
    /// its inverse.
    ///
    /// # Errors
    /// Returns an error if the result does not fit into a `Decimal`
    pub fn convert(&self) -> Result<Decimal> {
        let factor = match self.direction {
            Direction::EuroToDollar => Some(self.rate),
            Direction::DollarToEuro => Decimal::ONE.checked_div(self.rate),
        };

        factor
            .and_then(|factor| self.amount.checked_mul(factor))
            .ok_or_else(|| overflow_error(self.amount, self.rate))
    }

    /// Renders the result line, e.g. `10.00 US-Dollar entsprechen: 9.17 Euro.`
    ///
    /// # Errors
    /// Returns an error if the conversion overflows
    pub fn render(&self) -> Result<String> {
        let converted = self.convert()?;
        Ok(format!(
            "{} {} entsprechen: {} {}.",
            format_two_decimals(self.amount),
            self.direction.source(),
            format_two_decimals(converted),
            self.direction.target()
        ))
    }
}

/// Formats a value with exactly two decimals, rounding half away from zero
pub fn format_two_decimals(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!(Direction::from_token("e"), Some(Direction::EuroToDollar));
        assert_eq!(Direction::from_token("E"), Some(Direction::EuroToDollar));
        assert_eq!(Direction::from_token("u"), Some(Direction::DollarToEuro));
        assert_eq!(Direction::from_token("U"), Some(Direction::DollarToEuro));
        assert_eq!(Direction::from_token("x"), None);
        assert_eq!(Direction::from_token(""), None);
        assert_eq!(Direction::from_token(" e"), None);
        assert_eq!(Direction::from_token("eu"), None);
    }

    #[test]
    fn test_euro_to_dollar() {
        let request = ConversionRequest::new(dec("100"), dec("1.09"), Direction::EuroToDollar).unwrap();
        assert_eq!(request.convert().unwrap(), dec("109.00"));
        assert_eq!(
            request.render().unwrap(),
            "100.00 Euro entsprechen: 109.00 US-Dollar."
        );
    }

    #[test]
    fn test_dollar_to_euro() {
        let request = ConversionRequest::new(dec("10"), dec("1.09"), Direction::DollarToEuro).unwrap();
        assert_eq!(
            request.render().unwrap(),
            "10.00 US-Dollar entsprechen: 9.17 Euro."
        );
    }

    #[test]
    fn test_amount_is_echoed_with_two_decimals() {
        let request =
            ConversionRequest::new(dec("12.3456"), dec("2"), Direction::EuroToDollar).unwrap();
        assert_eq!(
            request.render().unwrap(),
            "12.35 Euro entsprechen: 24.69 US-Dollar."
        );
    }

    #[test]
    fn test_non_positive_rate_is_rejected() {
        assert!(ConversionRequest::new(dec("1"), Decimal::ZERO, Direction::DollarToEuro).is_err());
        assert!(ConversionRequest::new(dec("1"), dec("-1.09"), Direction::EuroToDollar).is_err());
    }

    #[test]
    fn test_negative_amount_is_accepted() {
        let request = ConversionRequest::new(dec("-5"), dec("2"), Direction::EuroToDollar).unwrap();
        assert_eq!(request.render().unwrap(), "-5.00 Euro entsprechen: -10.00 US-Dollar.");
    }

    #[test]
    fn test_overflow_is_an_error() {
        let request = ConversionRequest::new(Decimal::MAX, dec("2"), Direction::EuroToDollar).unwrap();
        assert!(request.convert().is_err());
        assert!(request.render().is_err());
    }

    #[test]
    fn test_format_two_decimals_rounds_half_away_from_zero() {
        assert_eq!(format_two_decimals(dec("0.125")), "0.13");
        assert_eq!(format_two_decimals(dec("0.135")), "0.14");
        assert_eq!(format_two_decimals(dec("-0.125")), "-0.13");
        assert_eq!(format_two_decimals(dec("1.004")), "1.00");
        assert_eq!(format_two_decimals(dec("7")), "7.00");
        assert_eq!(format_two_decimals(dec("1234567.891")), "1234567.89");
    }

    #[test]
    fn test_currency_units() {
        assert_eq!(Direction::EuroToDollar.source().to_string(), "Euro");
        assert_eq!(Direction::EuroToDollar.target().to_string(), "US-Dollar");
        assert_eq!(Direction::DollarToEuro.source(), Currency::Dollar);
        assert_eq!(Direction::DollarToEuro.target(), Currency::Euro);
    }
}
