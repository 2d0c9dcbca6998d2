//! Category domains and value objects for soil suitability scoring.
//!
//! All category domains are closed enums so a value outside the domain is a
//! construction-time error (`Error::InvalidCategory`), never a silent runtime
//! fallthrough. Serde renames follow the lowercase JSON vocabulary the
//! frontend forms submit (`"sandy"`, `"cemented"`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Dominant soil texture at the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Sandy,
    Clay,
    Mixed,
}

/// How much of the surface is sealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceCover {
    Open,
    Partial,
    Cemented,
}

/// Water access at the site (rainfall, irrigation, water table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterAvailability {
    Low,
    Medium,
    High,
}

/// Exposure to traffic/industrial pollution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollutionExposure {
    Low,
    High,
}

/// Whether the site previously carried vegetation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviousGreenCover {
    Yes,
    No,
}

/// Three-tier planting suitability classification.
/// Green = ready, Yellow = needs improvement, Red = unsuitable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneClassification {
    Green,
    Yellow,
    Red,
}

impl ZoneClassification {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneClassification::Green => "Ready to plant",
            ZoneClassification::Yellow => "Needs improvement",
            ZoneClassification::Red => "Unsuitable",
        }
    }
}

/// The five site attributes a zone is scored on.
///
/// Immutable value object; all fields required, no defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilInput {
    pub soil_type: SoilType,
    pub surface_cover: SurfaceCover,
    pub water_availability: WaterAvailability,
    pub pollution_exposure: PollutionExposure,
    pub previous_green_cover: PreviousGreenCover,
}

/// Scored zone. Recomputed fresh on every evaluation; a later evaluation of
/// the same zone id supersedes this one (caller replaces, keyed by id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResult {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub input: SoilInput,
    pub score: i32,
    pub max_score: i32,
    pub classification: ZoneClassification,
    pub future_impact: String,
    pub recommendations: Vec<String>,
}

macro_rules! category_from_str {
    ($ty:ident, $field:literal, { $($text:literal => $variant:ident),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Error> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    other => Err(Error::InvalidCategory {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let text = match self {
                    $($ty::$variant => $text,)+
                };
                f.write_str(text)
            }
        }
    };
}

category_from_str!(SoilType, "soilType", {
    "sandy" => Sandy,
    "clay" => Clay,
    "mixed" => Mixed,
});

category_from_str!(SurfaceCover, "surfaceCover", {
    "open" => Open,
    "partial" => Partial,
    "cemented" => Cemented,
});

category_from_str!(WaterAvailability, "waterAvailability", {
    "low" => Low,
    "medium" => Medium,
    "high" => High,
});

category_from_str!(PollutionExposure, "pollutionExposure", {
    "low" => Low,
    "high" => High,
});

category_from_str!(PreviousGreenCover, "previousGreenCover", {
    "yes" => Yes,
    "no" => No,
});

category_from_str!(ZoneClassification, "classification", {
    "green" => Green,
    "yellow" => Yellow,
    "red" => Red,
});

impl SoilType {
    pub const ALL: [SoilType; 3] = [SoilType::Sandy, SoilType::Clay, SoilType::Mixed];
}

impl SurfaceCover {
    pub const ALL: [SurfaceCover; 3] = [
        SurfaceCover::Open,
        SurfaceCover::Partial,
        SurfaceCover::Cemented,
    ];
}

impl WaterAvailability {
    pub const ALL: [WaterAvailability; 3] = [
        WaterAvailability::Low,
        WaterAvailability::Medium,
        WaterAvailability::High,
    ];
}

impl PollutionExposure {
    pub const ALL: [PollutionExposure; 2] = [PollutionExposure::Low, PollutionExposure::High];
}

impl PreviousGreenCover {
    pub const ALL: [PreviousGreenCover; 2] = [PreviousGreenCover::Yes, PreviousGreenCover::No];
}
