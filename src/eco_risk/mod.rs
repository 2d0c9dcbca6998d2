//! Eco-risk pipeline: current temperature + AQI + green-cover tier →
//! 0–100 composite risk score → status tier → suggestions + trend series.
//!
//! ## Architecture
//! - `types.rs` - `GreenCover`, `RiskStatus`, `IconKey`, reading/result structs
//! - `scoring.rs` - sub-risks, weighted composite, classification
//! - `suggestions.rs` - ordered cumulative suggestion rules
//! - `trend.rs` - 7-point trend series shaping (daily temps + hourly AQI buckets)

pub mod scoring;
pub mod suggestions;
pub mod trend;
pub mod types;

// Re-export public API
pub use scoring::{
    aqi_risk, classify_risk, evaluate_eco_risk, green_cover_risk, risk_score, temperature_risk,
};
pub use suggestions::build_suggestions;
pub use trend::{build_trend, TREND_LABELS};
pub use types::{
    EcoRiskReading, EcoRiskResult, GreenCover, IconKey, RiskStatus, Suggestion, TrendSeries,
    DEFAULT_AQI, DEFAULT_TEMPERATURE_C,
};
