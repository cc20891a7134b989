use chrono::NaiveDate;
use thiserror::Error;

/// Problems with user-supplied dates. Recovered locally by asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("start date {start} cannot be after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

/// Failures while retrieving the daily series. Each one ends the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error occurred: {0}")]
    Network(String),

    #[error("API response format unexpected or data unavailable: {0}")]
    DataFormat(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn data_format(message: impl Into<String>) -> Self {
        Self::DataFormat(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Unexpected(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("cannot compute extremes of an empty series")]
    EmptySeries,
}

/// Console input could not be read at all (closed stdin, Ctrl-C, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input aborted: {0}")]
    Aborted(String),
}
