//! Soil suitability scoring and classification.
//!
//! The score is the sum of five independent per-category lookups. The
//! classification is a function of the score alone, never of the raw
//! categories. The lookup tables are exhaustive matches over closed enums,
//! so a missing category entry is a compile error.

use tracing::debug;

use crate::soil::guidance::{future_impact, recommendations};
use crate::soil::types::*;

/// Highest attainable score: mixed + high water + previous cover, no penalties.
pub const MAX_SCORE: i32 = 8; // 3 + 3 + 2 + 0 + 0

/// Lowest attainable score: sandy + low water, cemented + polluted.
pub const MIN_SCORE: i32 = -4; // 1 + 1 + 0 - 3 - 3

/// Classification thresholds, inclusive on the lower bound of each tier.
pub const GREEN_THRESHOLD: i32 = 5;
pub const YELLOW_THRESHOLD: i32 = 2;

pub fn soil_type_points(soil: SoilType) -> i32 {
    match soil {
        SoilType::Mixed => 3,
        SoilType::Clay => 2,
        SoilType::Sandy => 1,
    }
}

pub fn water_points(water: WaterAvailability) -> i32 {
    match water {
        WaterAvailability::High => 3,
        WaterAvailability::Medium => 2,
        WaterAvailability::Low => 1,
    }
}

pub fn green_cover_points(cover: PreviousGreenCover) -> i32 {
    match cover {
        PreviousGreenCover::Yes => 2,
        PreviousGreenCover::No => 0,
    }
}

pub fn pollution_points(pollution: PollutionExposure) -> i32 {
    match pollution {
        PollutionExposure::Low => 0,
        PollutionExposure::High => -3,
    }
}

pub fn surface_points(surface: SurfaceCover) -> i32 {
    match surface {
        SurfaceCover::Open => 0,
        SurfaceCover::Partial => -1,
        SurfaceCover::Cemented => -3,
    }
}

/// Sum the five category lookups. Always within [MIN_SCORE, MAX_SCORE].
pub fn soil_score(input: &SoilInput) -> i32 {
    soil_type_points(input.soil_type)
        + water_points(input.water_availability)
        + green_cover_points(input.previous_green_cover)
        + pollution_points(input.pollution_exposure)
        + surface_points(input.surface_cover)
}

/// Classify a score into a tier, evaluated high-to-low.
pub fn classify_score(score: i32) -> ZoneClassification {
    if score >= GREEN_THRESHOLD {
        ZoneClassification::Green
    } else if score >= YELLOW_THRESHOLD {
        ZoneClassification::Yellow
    } else {
        ZoneClassification::Red
    }
}

/// Score and classify a zone, attaching the tier's guidance text.
///
/// Zone identity (id, name, coordinates) passes through unmodified. The
/// result supersedes any earlier result for the same zone id; the caller
/// replaces, keyed by id.
pub fn evaluate_zone(id: &str, name: &str, lat: f64, lng: f64, input: SoilInput) -> ZoneResult {
    let score = soil_score(&input);
    let classification = classify_score(score);
    debug!(zone = id, score, ?classification, "evaluated zone");

    ZoneResult {
        id: id.to_string(),
        name: name.to_string(),
        lat,
        lng,
        input,
        score,
        max_score: MAX_SCORE,
        classification,
        future_impact: future_impact(classification).to_string(),
        recommendations: recommendations(classification)
            .iter()
            .map(|r| r.to_string())
            .collect(),
    }
}
