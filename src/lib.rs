//! Eco Zone Scorer
//!
//! Scoring and classification engine for an urban tree-planting aid:
//! - `soil/`: categorical soil/site attributes → suitability score →
//!   green/yellow/red tier with guidance text
//! - `eco_risk/`: temperature + AQI + green-cover → 0–100 composite risk
//!   score → safe/moderate/critical status with suggestions and trend series
//!
//! Both pipelines are pure, synchronous, and referentially transparent (the
//! one documented exception is the trend-series filler for incomplete feeds).
//! Map rendering, geocoding, and weather/AQI retrieval live in the consuming
//! application; this crate only scores already-validated inputs.

pub mod eco_risk;
pub mod error;
pub mod soil;

// Re-export commonly used types
pub use eco_risk::{evaluate_eco_risk, EcoRiskReading, EcoRiskResult, GreenCover, RiskStatus};
pub use error::{Error, Result};
pub use soil::{evaluate_zone, SoilInput, ZoneClassification, ZoneResult};
