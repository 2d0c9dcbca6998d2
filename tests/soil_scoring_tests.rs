// Soil suitability integration tests
//
// Covers the full 108-combination input space plus the tier boundaries and
// the published score bounds.

use eco_zone_scorer::soil::scoring::{classify_score, evaluate_zone, soil_score};
use eco_zone_scorer::soil::types::*;
use eco_zone_scorer::soil::zones::sample_zones;
use eco_zone_scorer::soil::{MAX_SCORE, MIN_SCORE};

fn all_inputs() -> Vec<SoilInput> {
    let mut inputs = Vec::new();
    for soil_type in SoilType::ALL {
        for surface_cover in SurfaceCover::ALL {
            for water_availability in WaterAvailability::ALL {
                for pollution_exposure in PollutionExposure::ALL {
                    for previous_green_cover in PreviousGreenCover::ALL {
                        inputs.push(SoilInput {
                            soil_type,
                            surface_cover,
                            water_availability,
                            pollution_exposure,
                            previous_green_cover,
                        });
                    }
                }
            }
        }
    }
    inputs
}

// =========================================================================
// Section 1: Exhaustive domain coverage
// =========================================================================

#[test]
fn test_all_108_combinations_stay_in_bounds() {
    let inputs = all_inputs();
    assert_eq!(inputs.len(), 108); // 3 × 3 × 3 × 2 × 2

    for input in &inputs {
        let score = soil_score(input);
        assert!(
            (MIN_SCORE..=MAX_SCORE).contains(&score),
            "score {score} out of bounds for {input:?}"
        );
        // Every score lands in exactly one of the three tiers.
        match classify_score(score) {
            ZoneClassification::Green => assert!(score >= 5),
            ZoneClassification::Yellow => assert!((2..5).contains(&score)),
            ZoneClassification::Red => assert!(score < 2),
        }
    }
}

#[test]
fn test_bounds_are_reachable_and_tight() {
    let scores: Vec<i32> = all_inputs().iter().map(soil_score).collect();
    assert_eq!(scores.iter().max(), Some(&MAX_SCORE));
    assert_eq!(scores.iter().min(), Some(&MIN_SCORE));
}

// =========================================================================
// Section 2: Published exact cases
// =========================================================================

#[test]
fn test_best_case_input_scores_eight_green() {
    let input = SoilInput {
        soil_type: SoilType::Mixed,
        surface_cover: SurfaceCover::Open,
        water_availability: WaterAvailability::High,
        pollution_exposure: PollutionExposure::Low,
        previous_green_cover: PreviousGreenCover::Yes,
    };
    // 3 + 0 + 3 + 0 + 2
    assert_eq!(soil_score(&input), 8);
    assert_eq!(classify_score(8), ZoneClassification::Green);
}

#[test]
fn test_worst_case_input_scores_minus_four_red() {
    let input = SoilInput {
        soil_type: SoilType::Sandy,
        surface_cover: SurfaceCover::Cemented,
        water_availability: WaterAvailability::Low,
        pollution_exposure: PollutionExposure::High,
        previous_green_cover: PreviousGreenCover::No,
    };
    // 1 - 3 + 1 - 3 + 0
    assert_eq!(soil_score(&input), -4);
    assert_eq!(classify_score(-4), ZoneClassification::Red);
}

// =========================================================================
// Section 3: Evaluation output contract
// =========================================================================

#[test]
fn test_result_is_recomputed_not_mutated() {
    let input = SoilInput {
        soil_type: SoilType::Clay,
        surface_cover: SurfaceCover::Partial,
        water_availability: WaterAvailability::Medium,
        pollution_exposure: PollutionExposure::Low,
        previous_green_cover: PreviousGreenCover::No,
    };
    let first = evaluate_zone("z5", "Gachibowli IT Park Perimeter", 17.4401, 78.3489, input);
    let second = evaluate_zone("z5", "Gachibowli IT Park Perimeter", 17.4401, 78.3489, input);
    assert_eq!(first, second); // idempotent, no hidden state
    assert_eq!(first.score, 3); // 2 - 1 + 2 + 0 + 0
    assert_eq!(first.classification, ZoneClassification::Yellow);
}

#[test]
fn test_guidance_matches_tier() {
    for input in [
        SoilInput {
            soil_type: SoilType::Mixed,
            surface_cover: SurfaceCover::Open,
            water_availability: WaterAvailability::High,
            pollution_exposure: PollutionExposure::Low,
            previous_green_cover: PreviousGreenCover::Yes,
        },
        SoilInput {
            soil_type: SoilType::Sandy,
            surface_cover: SurfaceCover::Cemented,
            water_availability: WaterAvailability::Low,
            pollution_exposure: PollutionExposure::High,
            previous_green_cover: PreviousGreenCover::No,
        },
    ] {
        let result = evaluate_zone("z", "test", 0.0, 0.0, input);
        assert_eq!(
            result.future_impact,
            eco_zone_scorer::soil::future_impact(result.classification)
        );
        assert_eq!(
            result.recommendations,
            eco_zone_scorer::soil::recommendations(result.classification)
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
        );
        assert!(!result.recommendations.is_empty());
    }
}

#[test]
fn test_result_serializes_camel_case() {
    let (zone, input) = sample_zones().into_iter().next().unwrap();
    let result = evaluate_zone(&zone.id, &zone.name, zone.lat, zone.lng, input);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["maxScore"], 8);
    assert_eq!(json["classification"], "green");
    assert_eq!(json["input"]["soilType"], "mixed");
    assert!(json["futureImpact"].is_string());
}

// =========================================================================
// Section 4: Sample catalog sanity
// =========================================================================

#[test]
fn test_sample_zones_evaluate_cleanly() {
    for (zone, input) in sample_zones() {
        let result = evaluate_zone(&zone.id, &zone.name, zone.lat, zone.lng, input);
        assert_eq!(result.id, zone.id);
        assert!((MIN_SCORE..=MAX_SCORE).contains(&result.score));
    }
}

#[test]
fn test_known_sample_zone_tiers() {
    let results: Vec<ZoneResult> = sample_zones()
        .into_iter()
        .map(|(z, i)| evaluate_zone(&z.id, &z.name, z.lat, z.lng, i))
        .collect();

    // z1 is the lakeside park (best case), z4 the cemented railway zone (worst).
    assert_eq!(results[0].classification, ZoneClassification::Green);
    assert_eq!(results[3].classification, ZoneClassification::Red);
}
