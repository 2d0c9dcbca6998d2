//! Bundled sample zone catalog (Hyderabad, India).
//!
//! Seed data for the map view: candidate planting sites with a default
//! `SoilInput` each, so the frontend can render scored markers before any
//! user edits.

use serde::{Deserialize, Serialize};

use crate::soil::types::*;

/// A named candidate planting site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneData {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
}

/// Default map center and zoom for the bundled catalog.
pub const CITY_CENTER: (f64, f64) = (17.4400, 78.4300);
pub const DEFAULT_ZOOM: u8 = 12;

/// The bundled zones with their default inputs, in display order.
pub fn sample_zones() -> Vec<(ZoneData, SoilInput)> {
    fn zone(id: &str, name: &str, lat: f64, lng: f64, description: &str) -> ZoneData {
        ZoneData {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lng,
            description: description.to_string(),
        }
    }

    fn input(
        soil_type: SoilType,
        surface_cover: SurfaceCover,
        water_availability: WaterAvailability,
        pollution_exposure: PollutionExposure,
        previous_green_cover: PreviousGreenCover,
    ) -> SoilInput {
        SoilInput {
            soil_type,
            surface_cover,
            water_availability,
            pollution_exposure,
            previous_green_cover,
        }
    }

    use PollutionExposure as P;
    use PreviousGreenCover as G;
    use SoilType as S;
    use SurfaceCover as C;
    use WaterAvailability as W;

    vec![
        (
            zone("z1", "Hussain Sagar Lake Park", 17.4239, 78.4738, "Open park area near the lake"),
            input(S::Mixed, C::Open, W::High, P::Low, G::Yes),
        ),
        (
            zone("z2", "Jubilee Hills Roadside", 17.4325, 78.4072, "Roadside strip with partial cover"),
            input(S::Clay, C::Partial, W::Medium, P::High, G::No),
        ),
        (
            zone("z3", "Kukatpally Community Ground", 17.4947, 78.3996, "Open community space"),
            input(S::Mixed, C::Open, W::Medium, P::Low, G::Yes),
        ),
        (
            zone("z4", "Secunderabad Railway Area", 17.4399, 78.5010, "Heavily cemented industrial zone"),
            input(S::Sandy, C::Cemented, W::Low, P::High, G::No),
        ),
        (
            zone("z5", "Gachibowli IT Park Perimeter", 17.4401, 78.3489, "Partially covered tech park edges"),
            input(S::Clay, C::Partial, W::Medium, P::Low, G::No),
        ),
        (
            zone("z6", "Osmansagar Reserve Buffer", 17.3815, 78.3098, "Protected buffer zone with green cover"),
            input(S::Mixed, C::Open, W::High, P::Low, G::Yes),
        ),
        (
            zone("z7", "Begumpet Vacant Lot", 17.4445, 78.4675, "Urban vacant lot near commercial area"),
            input(S::Sandy, C::Partial, W::Low, P::High, G::No),
        ),
        (
            zone("z8", "Miyapur Open Fields", 17.4969, 78.3534, "Semi-rural open fields"),
            input(S::Mixed, C::Open, W::Medium, P::Low, G::Yes),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique_and_coords_finite() {
        let zones = sample_zones();
        assert_eq!(zones.len(), 8);

        let ids: HashSet<_> = zones.iter().map(|(z, _)| z.id.as_str()).collect();
        assert_eq!(ids.len(), zones.len());

        for (zone, _) in &zones {
            assert!(zone.lat.is_finite() && zone.lng.is_finite());
        }
    }
}
