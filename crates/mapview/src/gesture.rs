use foundation::geo::LngLat;

use crate::engine::Feature;
use crate::snapshot::{DistrictQuery, GeocodedPoint};

/// Outcome of one click, handed to the sink and discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureResult {
    Location(GeocodedPoint),
    District(DistrictQuery),
}

/// Proximity-mode click: the topmost marker's coordinates when one is hit,
/// the raw click location otherwise. Always produces a location.
pub fn interpret_proximity(marker_hits: &[Feature], click: LngLat) -> GestureResult {
    let coords = marker_hits.first().map_or(click, |f| f.coordinates);
    GestureResult::Location(GeocodedPoint::from_lng_lat(coords))
}

/// District-mode click over independent boundary and marker hit-tests.
///
/// A marker over a boundary wins: clicking a pin inside a district navigates
/// to the pin, not the enclosing district. A boundary alone resolves to its
/// state abbreviation and the district digits of its GEOID. No boundary hit
/// resolves to nothing, marker or not.
pub fn interpret_district(
    boundary_hits: &[Feature],
    marker_hits: &[Feature],
) -> Option<GestureResult> {
    let boundary = boundary_hits.first()?;

    if let Some(marker) = marker_hits.first() {
        return Some(GestureResult::Location(GeocodedPoint::from_lng_lat(
            marker.coordinates,
        )));
    }

    let state = boundary.prop_str("ABR")?;
    let geo_id = boundary.prop_str("GEOID")?;
    let district = geo_id.get(2..4)?;

    Some(GestureResult::District(DistrictQuery {
        state: state.to_string(),
        district: district.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{GestureResult, interpret_district, interpret_proximity};
    use crate::engine::Feature;
    use crate::snapshot::{DistrictQuery, GeocodedPoint};
    use foundation::geo::LngLat;

    fn marker(lng: f64, lat: f64) -> Feature {
        Feature::new(LngLat::new(lng, lat))
    }

    fn boundary(abr: &str, geoid: &str) -> Feature {
        Feature::new(LngLat::new(0.0, 0.0))
            .with_property("ABR", abr)
            .with_property("GEOID", geoid)
    }

    #[test]
    fn proximity_prefers_topmost_marker() {
        let hits = vec![marker(-75.16, 39.95), marker(-80.0, 41.0)];
        let got = interpret_proximity(&hits, LngLat::new(-75.0, 40.0));
        assert_eq!(
            got,
            GestureResult::Location(GeocodedPoint {
                latitude: "39.95".into(),
                longitude: "-75.16".into(),
            })
        );
    }

    #[test]
    fn proximity_falls_back_to_click_location() {
        let got = interpret_proximity(&[], LngLat::new(-75.0, 40.0));
        assert_eq!(
            got,
            GestureResult::Location(GeocodedPoint {
                latitude: "40".into(),
                longitude: "-75".into(),
            })
        );
    }

    #[test]
    fn district_click_resolves_state_and_district_digits() {
        let got = interpret_district(&[boundary("NY", "3609")], &[]);
        assert_eq!(
            got,
            Some(GestureResult::District(DistrictQuery {
                state: "NY".into(),
                district: "09".into(),
            }))
        );
    }

    #[test]
    fn marker_beats_boundary() {
        let got = interpret_district(&[boundary("NY", "3609")], &[marker(-73.9, 40.7)]);
        assert_eq!(
            got,
            Some(GestureResult::Location(GeocodedPoint {
                latitude: "40.7".into(),
                longitude: "-73.9".into(),
            }))
        );
    }

    #[test]
    fn no_boundary_hit_does_nothing_even_with_marker() {
        assert_eq!(interpret_district(&[], &[marker(-73.9, 40.7)]), None);
        assert_eq!(interpret_district(&[], &[]), None);
    }

    #[test]
    fn malformed_boundary_properties_do_nothing() {
        let missing_abr = Feature::new(LngLat::new(0.0, 0.0)).with_property("GEOID", "3609");
        assert_eq!(interpret_district(&[missing_abr], &[]), None);

        let short_geoid = boundary("NY", "36");
        assert_eq!(interpret_district(&[short_geoid], &[]), None);
    }
}
