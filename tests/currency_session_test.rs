use std::io::Cursor;

use umrechner::constants::{
    AMOUNT_PROMPT, CONTINUE_PROMPT, DIRECTION_PROMPT, INVALID_INPUT_MESSAGE,
};
use umrechner::currency::{CurrencySession, CurrencySettings};
use umrechner::errors::Error;

// Runs a whole session on scripted input and returns (result, console output)
fn run_session(input: &str, settings: CurrencySettings) -> (Result<usize, Error>, String) {
    let mut session = CurrencySession::new(Cursor::new(input.to_string()), Vec::new(), settings);
    let result = session.run();
    let output = String::from_utf8(session.into_output()).unwrap();
    (result, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_default_rate_is_used_for_empty_answer() {
        let (result, output) = run_session("e\n100\n\nn\n", CurrencySettings::default());

        assert_eq!(result.unwrap(), 1);
        assert!(output.contains("100.00 Euro entsprechen: 109.00 US-Dollar.\n\n"));
    }

    #[test]
    fn test_dollar_to_euro_scenario() {
        let (result, output) = run_session("u\n10\n1.09\nn\n", CurrencySettings::default());

        assert_eq!(result.unwrap(), 1);
        assert!(output.contains("10.00 US-Dollar entsprechen: 9.17 Euro."));
    }

    #[test]
    fn test_invalid_direction_is_reprompted() {
        let (result, output) = run_session("x\nE\n1\n\nn\n", CurrencySettings::default());

        assert_eq!(result.unwrap(), 1);
        assert_eq!(output.matches(DIRECTION_PROMPT).count(), 2);
        assert_eq!(output.matches(INVALID_INPUT_MESSAGE).count(), 1);
        assert!(output.contains("1.00 Euro entsprechen: 1.09 US-Dollar."));
    }

    #[test]
    fn test_empty_amount_is_not_a_default() {
        let (result, output) = run_session("e\n\nabc\n2\n\nn\n", CurrencySettings::default());

        assert_eq!(result.unwrap(), 1);
        assert_eq!(output.matches(AMOUNT_PROMPT).count(), 3);
        assert_eq!(output.matches(INVALID_INPUT_MESSAGE).count(), 2);
        assert!(output.contains("2.00 Euro entsprechen: 2.18 US-Dollar."));
    }

    #[test]
    fn test_invalid_rates_are_reprompted() {
        let (result, output) = run_session("e\n10\n0\n-2\nkurs\n2\nn\n", CurrencySettings::default());

        assert_eq!(result.unwrap(), 1);
        assert_eq!(output.matches(INVALID_INPUT_MESSAGE).count(), 3);
        assert!(output.contains("10.00 Euro entsprechen: 20.00 US-Dollar."));
    }

    #[test]
    fn test_continue_runs_another_cycle() {
        let (result, output) =
            run_session("e\n1\n\nvielleicht\nJ\nu\n2.18\n\nn\n", CurrencySettings::default());

        assert_eq!(result.unwrap(), 2);
        assert_eq!(output.matches(CONTINUE_PROMPT).count(), 3);
        assert!(output.contains("1.00 Euro entsprechen: 1.09 US-Dollar."));
        assert!(output.contains("2.18 US-Dollar entsprechen: 2.00 Euro."));
    }

    #[test]
    fn test_end_of_input_terminates_the_session() {
        let (result, output) = run_session("x\ne\n", CurrencySettings::default());

        match result {
            Err(Error::InputClosed { prompt }) => assert_eq!(prompt, AMOUNT_PROMPT),
            other => panic!("expected InputClosed, got {other:?}"),
        }
        assert_eq!(output.matches(INVALID_INPUT_MESSAGE).count(), 1);
    }

    #[test]
    fn test_end_of_input_at_continue_prompt() {
        let (result, output) = run_session("e\n5\n\n", CurrencySettings::default());

        assert!(matches!(result, Err(Error::InputClosed { .. })));
        assert!(output.contains("5.00 Euro entsprechen: 5.45 US-Dollar."));
    }

    #[test]
    fn test_configured_default_rate() {
        let settings = CurrencySettings::new(Decimal::new(2, 0), "01.01.2026");
        let (result, output) = run_session("e\n3\n\nn\n", settings);

        assert_eq!(result.unwrap(), 1);
        assert!(output.contains("[Leer = default: 2 Stand: 01.01.2026]: "));
        assert!(output.contains("3.00 Euro entsprechen: 6.00 US-Dollar."));
    }

    #[test]
    fn test_windows_line_endings() {
        let (result, output) = run_session("u\r\n10\r\n\r\nn\r\n", CurrencySettings::default());

        assert_eq!(result.unwrap(), 1);
        assert!(output.contains("10.00 US-Dollar entsprechen: 9.17 Euro."));
    }

    #[test]
    fn test_overflow_is_reported_and_session_continues() {
        let (result, output) = run_session(
            "e\n70000000000000000000000000000\n100\nn\n",
            CurrencySettings::default(),
        );

        assert_eq!(result.unwrap(), 0);
        assert!(output.contains("Fehler: "));
        assert!(output.contains(CONTINUE_PROMPT));
    }
}
