//! Core library for the `tempwatch` CLI.
//!
//! This crate defines:
//! - Date validation and the interactive date range loop
//! - The Open-Meteo daily temperature provider
//! - Extremes and anomaly analysis over a daily series
//! - Configuration handling
//!
//! It is used by `tempwatch-cli`, but can also be reused by other binaries or services.

pub mod analysis;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod provider;

pub use analysis::{DEFAULT_ANOMALY_THRESHOLD, detect_anomalies, find_extremes};
pub use config::Config;
pub use error::{AnalysisError, FetchError, InputError, ValidationError};
pub use input::{Prompter, collect_range, is_valid_date, parse_date};
pub use model::{Anomaly, DailySeries, DateRange, Extremes, Location, Observation};
pub use provider::{DailySource, OpenMeteoProvider};
