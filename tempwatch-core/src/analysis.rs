use crate::{
    error::AnalysisError,
    model::{Anomaly, DailySeries, Extremes, Observation},
};

/// Default day-over-day change (°C) above which a max temperature counts as an anomaly.
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 3.0;

/// Highest max temperature and lowest min temperature in the series.
///
/// Ties resolve to the earliest day.
pub fn find_extremes(series: &DailySeries) -> Result<Extremes, AnalysisError> {
    let dates = series.dates();

    let highest = first_best(series.max_temps(), |candidate, best| candidate > best)
        .ok_or(AnalysisError::EmptySeries)?;
    let lowest = first_best(series.min_temps(), |candidate, best| candidate < best)
        .ok_or(AnalysisError::EmptySeries)?;

    Ok(Extremes {
        highest: Observation { date: dates[highest.0], temperature_c: highest.1 },
        lowest: Observation { date: dates[lowest.0], temperature_c: lowest.1 },
    })
}

/// Days whose max temperature changed by strictly more than `threshold` since the day before.
pub fn detect_anomalies(series: &DailySeries, threshold: f64) -> Vec<Anomaly> {
    let dates = series.dates();

    series
        .max_temps()
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let delta = pair[1] - pair[0];
            (delta.abs() > threshold).then(|| Anomaly {
                date: dates[i + 1],
                delta_c: delta,
                from_c: pair[0],
                to_c: pair[1],
            })
        })
        .collect()
}

fn first_best(values: &[f64], better: impl Fn(f64, f64) -> bool) -> Option<(usize, f64)> {
    values.iter().copied().enumerate().fold(None, |best, (i, value)| match best {
        Some((_, current)) if !better(value, current) => best,
        _ => Some((i, value)),
    })
}
