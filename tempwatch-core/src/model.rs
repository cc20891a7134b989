use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FetchError, ValidationError};

/// A validated, inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// A named point on the globe the report is generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            name: "Hyderabad".to_string(),
            latitude: 17.3850,
            longitude: 78.4867,
        }
    }
}

/// Daily max/min temperatures (°C), one entry per day, in API order.
///
/// The three columns always have the same length; index `i` refers to the same day
/// in each of them.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    dates: Vec<NaiveDate>,
    max_temps: Vec<f64>,
    min_temps: Vec<f64>,
}

impl DailySeries {
    pub fn from_columns(
        dates: Vec<NaiveDate>,
        max_temps: Vec<f64>,
        min_temps: Vec<f64>,
    ) -> Result<Self, FetchError> {
        if dates.len() != max_temps.len() || dates.len() != min_temps.len() {
            return Err(FetchError::data_format(format!(
                "daily arrays differ in length (time: {}, max: {}, min: {})",
                dates.len(),
                max_temps.len(),
                min_temps.len(),
            )));
        }

        Ok(Self { dates, max_temps, min_temps })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn max_temps(&self) -> &[f64] {
        &self.max_temps
    }

    pub fn min_temps(&self) -> &[f64] {
        &self.min_temps
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// `(date, min, max)` per day.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, f64, f64)> + '_ {
        self.dates
            .iter()
            .zip(&self.min_temps)
            .zip(&self.max_temps)
            .map(|((date, min), max)| (*date, *min, *max))
    }
}

/// A single observation singled out by the extremes scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub temperature_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes {
    pub highest: Observation,
    pub lowest: Observation,
}

/// A day whose max temperature moved by more than the threshold since the previous day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anomaly {
    pub date: NaiveDate,
    pub delta_c: f64,
    pub from_c: f64,
    pub to_c: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn range_rejects_inverted_dates() {
        let err = DateRange::new(day(10), day(5)).unwrap_err();
        assert_eq!(err, ValidationError::StartAfterEnd { start: day(10), end: day(5) });
    }

    #[test]
    fn range_allows_single_day() {
        let range = DateRange::new(day(7), day(7)).expect("same day is a valid range");
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn series_rejects_mismatched_columns() {
        let err = DailySeries::from_columns(vec![day(1), day(2)], vec![20.0], vec![10.0, 11.0])
            .unwrap_err();
        assert!(matches!(err, FetchError::DataFormat(_)));
    }

    #[test]
    fn days_pairs_columns_by_index() {
        let series =
            DailySeries::from_columns(vec![day(1), day(2)], vec![30.0, 31.5], vec![20.0, 21.5])
                .unwrap();

        let days: Vec<_> = series.days().collect();
        assert_eq!(days, vec![(day(1), 20.0, 30.0), (day(2), 21.5, 31.5)]);
        assert_eq!(series.len(), 2);
    }
}
