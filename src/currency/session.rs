//! Interactive conversion session
//!
//! Every cycle walks through a small state machine:
//! `AwaitingDirection -> AwaitingAmount -> AwaitingRate -> Done`.
//! Invalid answers keep the current state and repeat its prompt. After each
//! cycle the user is asked whether to go again.

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::constants::{
    AMOUNT_PROMPT, CONTINUE_PROMPT, DIRECTION_PROMPT, ERROR_PREFIX, INVALID_INPUT_MESSAGE,
};
use crate::errors::{input_closed_error, Result};

use super::input::{parse_amount, parse_continue, parse_rate};
use super::request::{ConversionRequest, Direction};
use super::settings::CurrencySettings;

/// Where a conversion cycle currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingDirection,
    AwaitingAmount {
        direction: Direction,
    },
    AwaitingRate {
        direction: Direction,
        amount: Decimal,
    },
    Done(ConversionRequest),
}

/// Result of feeding one answer to a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The answer was accepted
    Advanced(Stage),
    /// The answer was rejected, the stage is unchanged
    Rejected(Stage),
}

impl Stage {
    /// The prompt shown while waiting in this stage
    pub fn prompt(&self, settings: &CurrencySettings) -> String {
        match self {
            Stage::AwaitingDirection => DIRECTION_PROMPT.to_string(),
            Stage::AwaitingAmount { .. } => AMOUNT_PROMPT.to_string(),
            Stage::AwaitingRate { .. } => settings.rate_prompt(),
            Stage::Done(_) => String::new(),
        }
    }

    /// Feeds one answer (without line terminator) to the stage
    pub fn step(self, answer: &str, settings: &CurrencySettings) -> Step {
        match self {
            Stage::AwaitingDirection => match Direction::from_token(answer) {
                Some(direction) => Step::Advanced(Stage::AwaitingAmount { direction }),
                None => Step::Rejected(self),
            },
            Stage::AwaitingAmount { direction } => match parse_amount(answer) {
                Some(amount) => Step::Advanced(Stage::AwaitingRate { direction, amount }),
                None => Step::Rejected(self),
            },
            Stage::AwaitingRate { direction, amount } => {
                match parse_rate(answer, settings.default_rate)
                    .and_then(|rate| ConversionRequest::new(amount, rate, direction).ok())
                {
                    Some(request) => Step::Advanced(Stage::Done(request)),
                    None => Step::Rejected(self),
                }
            }
            Stage::Done(_) => Step::Advanced(self),
        }
    }
}

/// Console session reading answers from `input` and writing to `output`
///
/// Any `BufRead`/`Write` pair works, so tests can drive a session with
/// in-memory buffers.
pub struct CurrencySession<R, W> {
    input: R,
    output: W,
    settings: CurrencySettings,
}

impl<R: BufRead, W: Write> CurrencySession<R, W> {
    pub fn new(input: R, output: W, settings: CurrencySettings) -> Self {
        CurrencySession {
            input,
            output,
            settings,
        }
    }

    /// Runs conversion cycles until the user answers `n`
    ///
    /// # Returns
    /// * `Result<usize>` - Number of completed conversions
    ///
    /// # Errors
    /// Returns an error if the input ends or the console fails
    pub fn run(&mut self) -> Result<usize> {
        let mut conversions = 0;

        loop {
            let request = self.run_cycle()?;
            match request.render() {
                Ok(line) => {
                    writeln!(self.output, "{line}\n")?;
                    conversions += 1;
                }
                Err(e) => {
                    warn!("Conversion failed: {e}");
                    writeln!(self.output, "{ERROR_PREFIX}{e}\n")?;
                }
            }

            if !self.ask_continue()? {
                break;
            }
        }

        info!("Session finished after {conversions} conversions");
        Ok(conversions)
    }

    /// Asks for direction, amount and rate until all three are valid
    pub fn run_cycle(&mut self) -> Result<ConversionRequest> {
        let mut stage = Stage::AwaitingDirection;

        loop {
            if let Stage::Done(request) = stage {
                debug!(
                    "Accepted request: {} {:?} at rate {}",
                    request.amount(),
                    request.direction(),
                    request.rate()
                );
                return Ok(request);
            }

            let prompt = stage.prompt(&self.settings);
            stage = match self.ask(&prompt)? {
                Some(answer) => match stage.step(&answer, &self.settings) {
                    Step::Advanced(next) => next,
                    Step::Rejected(same) => {
                        self.reject(&answer)?;
                        same
                    }
                },
                None => {
                    self.reject("<unreadable>")?;
                    stage
                }
            };
        }
    }

    /// Asks whether another conversion should follow
    pub fn ask_continue(&mut self) -> Result<bool> {
        loop {
            match self.ask(CONTINUE_PROMPT)? {
                Some(answer) => match parse_continue(&answer) {
                    Some(decision) => return Ok(decision),
                    None => self.reject(&answer)?,
                },
                None => self.reject("<unreadable>")?,
            }
        }
    }

    /// Consumes the session and hands back the output
    pub fn into_output(self) -> W {
        self.output
    }

    fn reject(&mut self, answer: &str) -> Result<()> {
        debug!("Rejected answer: {answer:?}");
        writeln!(self.output, "{INVALID_INPUT_MESSAGE}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one line
    ///
    /// `Ok(None)` means the line could not be read but the next one may be.
    /// The end of input is an error; otherwise a closed stream would repeat
    /// the prompt forever.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(input_closed_error(prompt)),
            Ok(_) => Ok(Some(strip_line_ending(line))),
            Err(e) if matches!(e.kind(), io::ErrorKind::InvalidData | io::ErrorKind::Interrupted) => {
                warn!("Could not read answer: {e}");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
