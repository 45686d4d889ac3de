use proptest::prelude::*;
use rust_decimal::Decimal;

use umrechner::currency::{format_two_decimals, ConversionRequest, Direction};

/// Amounts with cents, 0.00 to 1,000,000.00
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Positive rates with four decimals, 0.0001 to 10000.0000
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting to dollars and back gives the original amount again
    #[test]
    fn prop_euro_dollar_round_trip(amount in amount(), rate in rate()) {
        let dollars = ConversionRequest::new(amount, rate, Direction::EuroToDollar)
            .unwrap()
            .convert()
            .unwrap();
        let euros = ConversionRequest::new(dollars, rate, Direction::DollarToEuro)
            .unwrap()
            .convert()
            .unwrap();

        prop_assert_eq!(format_two_decimals(euros), format_two_decimals(amount));
    }

    /// The result line always shows exactly two decimals on both sides
    #[test]
    fn prop_result_has_two_decimals(amount in amount(), rate in rate()) {
        let line = ConversionRequest::new(amount, rate, Direction::DollarToEuro)
            .unwrap()
            .render()
            .unwrap();

        let (left, right) = line.split_once(" US-Dollar entsprechen: ").unwrap();
        let right = right.strip_suffix(" Euro.").unwrap();
        for number in [left, right] {
            let (_, decimals) = number.split_once('.').unwrap();
            prop_assert_eq!(decimals.len(), 2);
        }
    }
}
