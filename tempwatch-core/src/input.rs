//! Date validation and the interactive date range loop.

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    error::{InputError, ValidationError},
    model::DateRange,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of console answers. The terminal implementation lives in the CLI crate.
pub trait Prompter {
    /// Ask a question and return the raw answer.
    fn ask(&mut self, message: &str) -> Result<String, InputError>;

    /// Show a message that needs no answer.
    fn notify(&mut self, message: &str);
}

/// Parse a strict, zero-padded `YYYY-MM-DD` calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate { input: text.to_string() };

    // chrono accepts unpadded fields and signed years, so check the shape first.
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

pub fn is_valid_date(text: &str) -> bool {
    parse_date(text).is_ok()
}

/// Keep asking for a start and end date until both are valid and ordered.
///
/// Only fails when the prompter itself can no longer provide input.
pub fn collect_range(prompter: &mut dyn Prompter) -> Result<DateRange, InputError> {
    loop {
        prompter.notify("\n📅 Please enter the date range for weather data (format: YYYY-MM-DD)");
        let start = prompter.ask("Enter start date:")?;
        let end = prompter.ask("Enter end date  :")?;

        match validate_range(start.trim(), end.trim()) {
            Ok(range) => {
                prompter.notify(&format!(
                    "✅ Selected date range: {} to {}",
                    range.start(),
                    range.end()
                ));
                return Ok(range);
            }
            Err(err) => {
                debug!(%err, "rejected date range input");
                prompter.notify(&format!("❌ {err}"));
            }
        }
    }
}

fn validate_range(start: &str, end: &str) -> Result<DateRange, ValidationError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    DateRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedPrompter {
        answers: VecDeque<String>,
        asked: usize,
        notes: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, _message: &str) -> Result<String, InputError> {
            self.asked += 1;
            self.answers
                .pop_front()
                .ok_or_else(|| InputError::Aborted("script exhausted".into()))
        }

        fn notify(&mut self, message: &str) {
            self.notes.push(message.to_string());
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn accepts_real_calendar_dates() {
        assert!(is_valid_date("2023-03-01"));
        assert!(is_valid_date("2024-02-29"));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(!is_valid_date("2023-02-30"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2023-13-01"));
    }

    #[test]
    fn rejects_malformed_strings() {
        for input in ["2023-3-1", "", "2023/03/01", "23-03-01", "+2023-03-01", "2023-03-01 ", "abcd-ef-gh"] {
            assert!(!is_valid_date(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn parse_error_carries_input() {
        let err = parse_date("2023-3-1").unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate { input: "2023-3-1".into() });
    }

    #[test]
    fn reprompts_after_inverted_range() {
        let mut prompter =
            ScriptedPrompter::new(&["2023-01-10", "2023-01-05", "2023-01-05", "2023-01-10"]);

        let range = collect_range(&mut prompter).expect("second pair is valid");

        assert_eq!(range.start(), date("2023-01-05"));
        assert_eq!(range.end(), date("2023-01-10"));
        assert_eq!(prompter.asked, 4);
        assert!(prompter.notes.iter().any(|n| n.contains("cannot be after")));
    }

    #[test]
    fn reprompts_after_invalid_date() {
        let mut prompter =
            ScriptedPrompter::new(&["2023-02-30", "2023-03-02", " 2023-03-01 ", "2023-03-02"]);

        let range = collect_range(&mut prompter).unwrap();

        assert_eq!(range.start(), date("2023-03-01"));
        assert!(prompter.notes.iter().any(|n| n.contains("invalid date '2023-02-30'")));
    }

    #[test]
    fn aborted_input_is_returned() {
        let mut prompter = ScriptedPrompter::new(&["2023-01-10"]);
        let err = collect_range(&mut prompter).unwrap_err();
        assert!(matches!(err, InputError::Aborted(_)));
    }
}
