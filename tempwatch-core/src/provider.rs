use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

use crate::{
    Config,
    error::FetchError,
    model::{DailySeries, DateRange, Location},
};

pub mod openmeteo;

pub use openmeteo::OpenMeteoProvider;

/// Anything that can produce a daily max/min temperature series for a location.
#[async_trait]
pub trait DailySource: Send + Sync + Debug {
    async fn fetch_daily(
        &self,
        range: &DateRange,
        location: &Location,
    ) -> Result<DailySeries, FetchError>;
}

/// Construct the Open-Meteo provider using the timeout from config.
pub fn provider_from_config(config: &Config) -> Result<OpenMeteoProvider, FetchError> {
    OpenMeteoProvider::new(Duration::from_secs(config.request_timeout_secs))
}
