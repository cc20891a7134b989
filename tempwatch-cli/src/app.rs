use std::io::Write;

use anyhow::Result;
use tempwatch_core::{Config, DailySource, Prompter, collect_range};
use tracing::info;

use crate::report;

/// One interactive run: ask for dates, fetch, then print the three reports.
///
/// A fetch failure returns before anything but the banner has been printed.
pub async fn run_report(
    source: &dyn DailySource,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    config: &Config,
) -> Result<()> {
    writeln!(out, "🌤️ === {} Weather Report Generator ===", config.location.name)?;

    let range = collect_range(prompter)?;
    info!(start = %range.start(), end = %range.end(), "date range selected");

    writeln!(out, "\n🌐 Fetching weather data from Open-Meteo API...")?;
    let series = source.fetch_daily(&range, &config.location).await?;
    writeln!(out, "✅ Weather data fetched successfully.")?;

    report::print_report(&series, out)?;
    report::print_extremes(&series, out)?;
    report::print_anomalies(&series, config.anomaly_threshold, out)?;

    writeln!(out, "\n✅ Report generation complete.\n")?;
    Ok(())
}
