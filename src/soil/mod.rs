//! Soil suitability pipeline: categorical site attributes → integer score →
//! three-tier classification → guidance text.
//!
//! ## Architecture
//! - `types.rs` - closed category enums, `SoilInput`, `ZoneResult`
//! - `scoring.rs` - point tables, score bounds, classification, `evaluate_zone`
//! - `guidance.rs` - per-tier impact narrative + recommendation lists
//! - `zones.rs` - bundled sample zone catalog

pub mod guidance;
pub mod scoring;
pub mod types;
pub mod zones;

// Re-export public API
pub use guidance::{future_impact, recommendations};
pub use scoring::{classify_score, evaluate_zone, soil_score, MAX_SCORE, MIN_SCORE};
pub use types::{
    PollutionExposure, PreviousGreenCover, SoilInput, SoilType, SurfaceCover, WaterAvailability,
    ZoneClassification, ZoneResult,
};
pub use zones::{sample_zones, ZoneData, CITY_CENTER, DEFAULT_ZOOM};
