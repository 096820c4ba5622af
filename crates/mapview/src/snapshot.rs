use std::collections::BTreeMap;

use foundation::geo::LngLat;

/// Which kind of search this map serves. Fixed at controller construction and
/// never mutated afterward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Items within a radius of a geocoded point.
    #[default]
    Proximity,
    /// Items within a congressional district boundary.
    District,
}

/// A geocoded location in the parent container's wire shape: stringly
/// coordinates, as produced by geocoding and stored in selection state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeocodedPoint {
    pub latitude: String,
    pub longitude: String,
}

impl GeocodedPoint {
    pub fn from_lng_lat(p: LngLat) -> Self {
        Self {
            latitude: p.lat.to_string(),
            longitude: p.lng.to_string(),
        }
    }

    /// Lenient parse; anything non-numeric means "no usable location".
    pub fn lng_lat(&self) -> Option<LngLat> {
        let lat: f64 = self.latitude.trim().parse().ok()?;
        let lng: f64 = self.longitude.trim().parse().ok()?;
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        Some(LngLat::new(lng, lat))
    }
}

/// Identity of an item in the visible item set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ItemId(pub i64);

/// The externally-owned selection snapshot supplied on every state change.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub center: Option<GeocodedPoint>,
    /// Search radius in miles.
    pub distance: f64,
    /// Active filter dimensions, e.g. `"state" → ["PA"]`.
    pub filters: BTreeMap<String, Vec<String>>,
    /// 1–2 digit district number; meaningful only with a single-state filter.
    pub district: Option<u32>,
    pub selected_item: Option<ItemId>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            center: None,
            distance: 50.0,
            filters: BTreeMap::new(),
            district: None,
            selected_item: None,
        }
    }
}

impl SelectionState {
    /// The single active state filter value, when the `"state"` dimension
    /// holds exactly one value. Everything else means "no state focus", and
    /// by extension no district filter.
    pub fn single_state_filter(&self) -> Option<&str> {
        match self.filters.get("state").map(Vec::as_slice) {
            Some([value]) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Resolved district triple handed to the highlight routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictSelection {
    pub state: String,
    /// Zero-padded, e.g. `"05"`.
    pub district: String,
    pub geo_id: String,
}

/// Payload of the "search by district" callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictQuery {
    pub state: String,
    pub district: String,
}

/// The parent-container seam: gesture outcomes leave the controller only
/// through these callbacks.
pub trait SelectionSink {
    fn set_location(&mut self, point: GeocodedPoint);
    fn search_by_district(&mut self, query: DistrictQuery);
    fn reset_selections(&mut self);
}
