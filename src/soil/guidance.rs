//! Per-tier guidance text: impact narrative and recommendation lists.
//!
//! The classification and its explanation are a single atomic contract, so
//! this text is engine data, not UI copy. Lists are ordered; the frontend
//! renders them as-is.

use crate::soil::types::ZoneClassification;

/// Long-horizon impact narrative for a tier.
pub fn future_impact(classification: ZoneClassification) -> &'static str {
    match classification {
        ZoneClassification::Green => {
            "🟢 This soil can support trees and food production for the next 20–30 years. \
             Planting here will create a lasting green legacy for future generations."
        }
        ZoneClassification::Yellow => {
            "🟡 This soil needs improvement but has potential. With composting and water \
             management, it can support future ecological growth within 3–5 years."
        }
        ZoneClassification::Red => {
            "🔴 Planting here will fail and waste resources. This soil requires restoration \
             before it can support any ecological life for future generations."
        }
    }
}

/// Ordered recommendation list for a tier.
pub fn recommendations(classification: ZoneClassification) -> &'static [&'static str] {
    match classification {
        ZoneClassification::Green => &[
            "Plant native trees suited to the local climate",
            "Start urban farming with vegetables and herbs",
            "Establish community gardens for food security",
            "Create biodiversity corridors connecting green zones",
        ],
        ZoneClassification::Yellow => &[
            "Add organic compost to enrich soil nutrients",
            "Improve water access through rainwater harvesting",
            "Plant soil-binding ground cover first",
            "Test soil pH and amend accordingly",
            "Consider raised bed gardening as a starting point",
        ],
        ZoneClassification::Red => &[
            "Remove concrete and impervious surfaces where possible",
            "Implement soil restoration with bio-remediation",
            "Address pollution sources before any planting",
            "Install permeable paving to allow water infiltration",
            "Begin with hardy pioneer species only after restoration",
        ],
    }
}
