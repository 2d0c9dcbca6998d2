//! 7-point trend series derivation.
//!
//! Shapes the upstream forecast feed for the dashboard chart: daily maximum
//! temperatures pass through, hourly AQI is bucketed into 24-hour windows and
//! averaged. When the feed is incomplete, per-day pseudo-random filler keeps
//! the chart populated — the only non-deterministic paths in the crate (see
//! `build_trend`).

use rand::Rng;

use crate::eco_risk::types::TrendSeries;

/// Fixed display labels, irrespective of actual weekday.
pub const TREND_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Number of days in the series.
pub const TREND_DAYS: usize = 7;

/// Hours per bucketing window.
const HOURS_PER_DAY: usize = 24;

/// Filler ranges for missing data, matching the chart's plausible display band.
const TEMP_FILLER_RANGE: (f64, f64) = (20.0, 30.0);
const AQI_FILLER_RANGE: (f64, f64) = (50.0, 100.0);

/// Average the non-null readings in day `i`'s window `[i*24, (i+1)*24)`,
/// rounded to the nearest integer value. `None` when the window has no data.
fn daily_aqi_mean(hourly_aqi: &[Option<f64>], day: usize) -> Option<f64> {
    let start = day * HOURS_PER_DAY;
    let end = ((day + 1) * HOURS_PER_DAY).min(hourly_aqi.len());
    if start >= hourly_aqi.len() {
        return None;
    }

    let readings: Vec<f64> = hourly_aqi[start..end].iter().flatten().copied().collect();
    if readings.is_empty() {
        return None;
    }
    let mean = readings.iter().sum::<f64>() / readings.len() as f64;
    Some(mean.round())
}

/// Build the 7-point trend series.
///
/// - Temperatures: the first 7 supplied daily maxima. If fewer than 7 are
///   supplied (or none), missing days get pseudo-random filler in [20, 30).
/// - AQI: per-day mean of non-null hourly readings in the day's 24-hour
///   window, rounded; a window with no data gets filler in [50, 100).
///
/// The filler branches are intentionally non-deterministic, mirroring the
/// upstream dashboard's behavior when the forecast feed is incomplete. All
/// scoring paths are unaffected; only the displayed chart varies.
pub fn build_trend(daily_max_temps: Option<&[f64]>, hourly_aqi: &[Option<f64>]) -> TrendSeries {
    let mut rng = rand::thread_rng();

    let supplied = daily_max_temps.unwrap_or(&[]);
    let temp_data: Vec<f64> = (0..TREND_DAYS)
        .map(|i| {
            supplied
                .get(i)
                .copied()
                .unwrap_or_else(|| rng.gen_range(TEMP_FILLER_RANGE.0..TEMP_FILLER_RANGE.1))
        })
        .collect();

    let aqi_data: Vec<f64> = (0..TREND_DAYS)
        .map(|i| {
            daily_aqi_mean(hourly_aqi, i)
                .unwrap_or_else(|| rng.gen_range(AQI_FILLER_RANGE.0..AQI_FILLER_RANGE.1))
        })
        .collect();

    TrendSeries {
        labels: TREND_LABELS.iter().map(|l| l.to_string()).collect(),
        temp_data,
        aqi_data,
    }
}
