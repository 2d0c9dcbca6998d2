//! Types for the eco-risk pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Sentinel defaults the fetch collaborator substitutes when the upstream
/// weather/AQI source returns no current reading. The scorer itself never
/// observes "missing" values.
pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;
pub const DEFAULT_AQI: f64 = 50.0;

/// Categorical proxy for local vegetation density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreenCover {
    Low,
    Medium,
    High,
}

impl GreenCover {
    pub const ALL: [GreenCover; 3] = [GreenCover::Low, GreenCover::Medium, GreenCover::High];
}

impl FromStr for GreenCover {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "low" => Ok(GreenCover::Low),
            "medium" => Ok(GreenCover::Medium),
            "high" => Ok(GreenCover::High),
            other => Err(Error::InvalidCategory {
                field: "greenCover",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for GreenCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GreenCover::Low => "low",
            GreenCover::Medium => "medium",
            GreenCover::High => "high",
        })
    }
}

/// Three-tier composite risk status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Safe,
    Moderate,
    Critical,
}

impl RiskStatus {
    /// Fixed narrative attached to the tier.
    pub fn description(&self) -> &'static str {
        match self {
            RiskStatus::Safe => {
                "Your local ecosystem is in excellent health! Maintain current conservation efforts."
            }
            RiskStatus::Moderate => {
                "Some ecological stress detected. Sensitive groups should be cautious of air quality."
            }
            RiskStatus::Critical => {
                "URGENT: High ecological stress. Protective actions recommended immediately."
            }
        }
    }
}

/// Symbolic glyph tag consumed by the presentation layer. The scorer has no
/// rendering responsibility; this is the whole vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKey {
    Shield,
    Car,
    Droplets,
    Sun,
    Flower,
    Trees,
    CheckCircle,
}

/// One actionable suggestion card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub icon: IconKey,
    pub text: String,
}

impl Suggestion {
    pub fn new(icon: IconKey, text: &str) -> Self {
        Suggestion {
            icon,
            text: text.to_string(),
        }
    }
}

/// 7-point display series: one (label, max temperature, mean AQI) per day.
/// Labels are the fixed Mon..Sun sequence irrespective of actual weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub temp_data: Vec<f64>,
    pub aqi_data: Vec<f64>,
}

/// Validated current readings for one evaluation. Constructed by the fetch
/// collaborator after normalizing missing data to the sentinel defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoRiskReading {
    pub temperature_c: f64,
    pub aqi: f64,
    pub green_cover: GreenCover,
}

/// Full eco-risk evaluation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoRiskResult {
    pub risk_score: u8,
    pub temperature_c: f64,
    pub aqi: f64,
    pub green_cover: GreenCover,
    pub status: RiskStatus,
    pub description: String,
    pub suggestions: Vec<Suggestion>,
    pub trend: TrendSeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_cover_parse() {
        assert_eq!("medium".parse::<GreenCover>().unwrap(), GreenCover::Medium);
        let err = "sparse".parse::<GreenCover>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCategory {
                field: "greenCover",
                value: "sparse".to_string(),
            }
        );
    }

    #[test]
    fn test_icon_key_kebab_case() {
        let json = serde_json::to_string(&IconKey::CheckCircle).unwrap();
        assert_eq!(json, "\"check-circle\"");
        assert_eq!(
            serde_json::from_str::<IconKey>("\"droplets\"").unwrap(),
            IconKey::Droplets
        );
    }
}
