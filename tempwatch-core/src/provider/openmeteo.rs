use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::{
    error::FetchError,
    model::{DailySeries, DateRange, Location},
};

use super::DailySource;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min";

/// Open-Meteo forecast API. Free to use, no API key.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    base_url: String,
}

impl OpenMeteoProvider {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url: FORECAST_URL.to_string() })
    }

    /// Point the provider at another endpoint (a mirror or a local test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

#[async_trait]
impl DailySource for OpenMeteoProvider {
    async fn fetch_daily(
        &self,
        range: &DateRange,
        location: &Location,
    ) -> Result<DailySeries, FetchError> {
        let params = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            ("start_date", range.start().to_string()),
            ("end_date", range.end().to_string()),
        ];
        debug!(url = %self.base_url, ?params, "requesting daily temperatures");

        let res = self.http.get(&self.base_url).query(&params).send().await?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::network(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(FetchError::network(format!(
                "Open-Meteo request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let series = parse_daily(&body)?;
        info!(days = series.len(), "fetched daily temperatures");
        Ok(series)
    }
}

/// Extract the daily columns from an Open-Meteo JSON body, as-is.
pub fn parse_daily(body: &str) -> Result<DailySeries, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| FetchError::unexpected(format!("response body is not valid JSON: {e}")))?;

    let daily = value
        .get("daily")
        .ok_or_else(|| FetchError::data_format("response has no `daily` object"))?;

    let daily = OmDaily::deserialize(daily)
        .map_err(|e| FetchError::data_format(format!("malformed `daily` object: {e}")))?;

    DailySeries::from_columns(daily.time, daily.temperature_2m_max, daily.temperature_2m_min)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
