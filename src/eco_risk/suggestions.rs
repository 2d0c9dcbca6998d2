//! Ordered, cumulative suggestion rules.
//!
//! Rules fire independently and append in a fixed priority sequence; a rule
//! that fires appends both of its cards, in order. Ordering is part of the
//! contract (the dashboard renders the list top to bottom), so this must
//! stay a sequence, never a set.

use crate::eco_risk::types::{EcoRiskReading, GreenCover, IconKey, Suggestion};

/// AQI above which outdoor-air suggestions fire ("unhealthy for sensitive
/// groups" boundary on the US AQI scale).
pub const AQI_SUGGESTION_THRESHOLD: f64 = 100.0;

/// Temperature above which heat suggestions fire.
pub const HEAT_SUGGESTION_THRESHOLD_C: f64 = 32.0;

/// Build the suggestion list for a reading.
///
/// Never returns an empty list: when no rule fires, a single stability
/// fallback card is appended instead.
pub fn build_suggestions(reading: &EcoRiskReading) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if reading.aqi > AQI_SUGGESTION_THRESHOLD {
        suggestions.push(Suggestion::new(
            IconKey::Shield,
            "Wear an N95 mask outdoors due to high AQI.",
        ));
        suggestions.push(Suggestion::new(
            IconKey::Car,
            "Minimize vehicle idling and promote carpooling.",
        ));
    }

    if reading.temperature_c > HEAT_SUGGESTION_THRESHOLD_C {
        suggestions.push(Suggestion::new(
            IconKey::Droplets,
            "Stay hydrated and mist local plants to cool surfaces.",
        ));
        suggestions.push(Suggestion::new(
            IconKey::Sun,
            "Use heat-reflective window films or curtains.",
        ));
    }

    if reading.green_cover == GreenCover::Low {
        suggestions.push(Suggestion::new(
            IconKey::Flower,
            "Start a balcony or rooftop garden to combat heat.",
        ));
        suggestions.push(Suggestion::new(
            IconKey::Trees,
            "Support local community reforestation projects.",
        ));
    }

    if suggestions.is_empty() {
        suggestions.push(Suggestion::new(
            IconKey::CheckCircle,
            "Eco-stability is high. Continue monitoring weekly.",
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature_c: f64, aqi: f64, green_cover: GreenCover) -> EcoRiskReading {
        EcoRiskReading {
            temperature_c,
            aqi,
            green_cover,
        }
    }

    #[test]
    fn test_fallback_only_when_nothing_fires() {
        let list = build_suggestions(&reading(20.0, 40.0, GreenCover::High));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].icon, IconKey::CheckCircle);
    }

    #[test]
    fn test_all_rules_fire_in_fixed_order() {
        let list = build_suggestions(&reading(35.0, 150.0, GreenCover::Low));
        let icons: Vec<IconKey> = list.iter().map(|s| s.icon).collect();
        assert_eq!(
            icons,
            vec![
                IconKey::Shield,
                IconKey::Car,
                IconKey::Droplets,
                IconKey::Sun,
                IconKey::Flower,
                IconKey::Trees,
            ]
        );
    }

    #[test]
    fn test_single_rule_no_fallback() {
        let list = build_suggestions(&reading(20.0, 120.0, GreenCover::High));
        let icons: Vec<IconKey> = list.iter().map(|s| s.icon).collect();
        assert_eq!(icons, vec![IconKey::Shield, IconKey::Car]);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // aqi == 100 and temp == 32 do not fire.
        let list = build_suggestions(&reading(32.0, 100.0, GreenCover::Medium));
        assert_eq!(list[0].icon, IconKey::CheckCircle);
    }
}
