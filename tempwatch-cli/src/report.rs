//! Human-readable rendering of a daily series.

use std::io::{self, Write};

use anyhow::Result;
use tempwatch_core::{DailySeries, detect_anomalies, find_extremes};

pub fn print_report(series: &DailySeries, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n📊 === Daily Weather Report ===")?;
    for (date, min, max) in series.days() {
        writeln!(out, "{date}  -->  Min: {min:.1}°C , Max: {max:.1}°C")?;
    }
    Ok(())
}

/// Fails on an empty series, there is nothing to summarise.
pub fn print_extremes(series: &DailySeries, out: &mut dyn Write) -> Result<()> {
    let extremes = find_extremes(series)?;

    writeln!(out, "\n📈 === Temperature Summary ===")?;
    writeln!(
        out,
        "🔺 Highest temperature: {:.1}°C on {}",
        extremes.highest.temperature_c, extremes.highest.date
    )?;
    writeln!(
        out,
        "🔻 Lowest temperature : {:.1}°C on {}",
        extremes.lowest.temperature_c, extremes.lowest.date
    )?;
    Ok(())
}

pub fn print_anomalies(series: &DailySeries, threshold: f64, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n⚠️ === Anomalies Report (Δ > {threshold}°C) ===")?;

    let anomalies = detect_anomalies(series, threshold);
    if anomalies.is_empty() {
        writeln!(out, "✅ No temperature anomalies found during the selected period.")?;
        return Ok(());
    }

    for a in &anomalies {
        writeln!(
            out,
            "🚨 {}: Max temp changed by {:+.1}°C (from {:.1}°C to {:.1}°C)",
            a.date, a.delta_c, a.from_c, a.to_c
        )?;
    }
    Ok(())
}
