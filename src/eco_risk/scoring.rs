//! Eco-risk scoring: sub-risk derivation, weighted composite, classification.
//!
//! Each sub-risk is clamped to [0, 100] and the weights sum to 1.0, so the
//! rounded composite is an integer in [0, 100] by construction.

use tracing::debug;

use crate::eco_risk::suggestions::build_suggestions;
use crate::eco_risk::trend::build_trend;
use crate::eco_risk::types::*;

/// Comfort band boundaries; linear penalty of 6 points/°C outside the band.
pub const COMFORT_BAND_C: (f64, f64) = (15.0, 25.0);
const TEMP_PENALTY_PER_DEGREE: f64 = 6.0;

/// Nominal "hazardous" AQI ceiling; readings at or above saturate the sub-risk.
pub const AQI_CEILING: f64 = 300.0;

/// Composite weights: air quality highest, temperature and cover equal.
pub const TEMP_WEIGHT: f64 = 0.3;
pub const AQI_WEIGHT: f64 = 0.4;
pub const GREEN_WEIGHT: f64 = 0.3;

/// Classification thresholds on the composite score.
pub const MODERATE_THRESHOLD: u8 = 30;
pub const CRITICAL_THRESHOLD: u8 = 60;

/// Temperature sub-risk: 0 inside the comfort band, linear penalty outside,
/// saturating at 100 roughly 16.7°C beyond either edge.
pub fn temperature_risk(temperature_c: f64) -> f64 {
    let (low, high) = COMFORT_BAND_C;
    if temperature_c > high {
        ((temperature_c - high) * TEMP_PENALTY_PER_DEGREE).min(100.0)
    } else if temperature_c < low {
        ((low - temperature_c) * TEMP_PENALTY_PER_DEGREE).min(100.0)
    } else {
        0.0
    }
}

/// Air-quality sub-risk: linear in AQI, capped at the hazardous ceiling.
pub fn aqi_risk(aqi: f64) -> f64 {
    (aqi / AQI_CEILING * 100.0).min(100.0)
}

/// Green-cover sub-risk: inverse of cover quality.
pub fn green_cover_risk(cover: GreenCover) -> f64 {
    match cover {
        GreenCover::Low => 100.0,
        GreenCover::Medium => 50.0,
        GreenCover::High => 0.0,
    }
}

/// Weighted, rounded composite in [0, 100].
pub fn risk_score(reading: &EcoRiskReading) -> u8 {
    let composite = temperature_risk(reading.temperature_c) * TEMP_WEIGHT
        + aqi_risk(reading.aqi) * AQI_WEIGHT
        + green_cover_risk(reading.green_cover) * GREEN_WEIGHT;
    composite.round() as u8
}

/// Classify the composite score, evaluated low-to-high.
pub fn classify_risk(score: u8) -> RiskStatus {
    if score < MODERATE_THRESHOLD {
        RiskStatus::Safe
    } else if score < CRITICAL_THRESHOLD {
        RiskStatus::Moderate
    } else {
        RiskStatus::Critical
    }
}

/// Full eco-risk evaluation for one "check area" action.
///
/// `daily_max_temps` and `hourly_aqi` feed only the display trend series;
/// the composite score depends solely on the current reading. Deterministic
/// except for the trend filler branches (see [`build_trend`]).
pub fn evaluate_eco_risk(
    reading: EcoRiskReading,
    daily_max_temps: Option<&[f64]>,
    hourly_aqi: &[Option<f64>],
) -> EcoRiskResult {
    let score = risk_score(&reading);
    let status = classify_risk(score);
    debug!(
        temperature_c = reading.temperature_c,
        aqi = reading.aqi,
        cover = %reading.green_cover,
        score,
        ?status,
        "evaluated eco-risk"
    );

    EcoRiskResult {
        risk_score: score,
        temperature_c: reading.temperature_c,
        aqi: reading.aqi,
        green_cover: reading.green_cover,
        status,
        description: status.description().to_string(),
        suggestions: build_suggestions(&reading),
        trend: build_trend(daily_max_temps, hourly_aqi),
    }
}
