use foundation::bounds::LngLatBounds;
use foundation::viewport::solve_viewport;
use serde_json::Value;

use crate::engine::{EngineCommand, MapLayer};
use crate::filter::FilterExpr;
use crate::snapshot::{DistrictSelection, GeocodedPoint, ItemId, SelectionState};

/// National overview box: the continental United States.
pub const CONTINENTAL_US: LngLatBounds = LngLatBounds::new([-128.8, 23.6], [-65.4, 50.2]);

/// Hand-tuned radius→zoom map: wider search radius, lower zoom. Preserved
/// verbatim from the production tuning.
pub fn point_focus_zoom(distance_miles: f64) -> f64 {
    9.52 - distance_miles * (4.7 / 450.0)
}

/// Computes the engine commands that bring the map in line with `next`.
///
/// Pure: previous + next snapshot and the canvas size in, commands out. The
/// selection-highlight pass runs on identity change and never short-circuits;
/// the three viewport branches are mutually exclusive, in fixed precedence:
/// state/district focus, then point focus, then the national overview. An
/// explicit state filter wins over a geocoded point because the point may be
/// stale state from an earlier proximity search.
pub fn reconcile(
    prev: Option<&SelectionState>,
    next: &SelectionState,
    canvas_px: [f64; 2],
) -> Vec<EngineCommand> {
    // The canvas shares a layout with the list panel; its available space can
    // change without a snapshot field changing, so every update resizes.
    let mut out = vec![EngineCommand::Resize];

    let prev_selected = prev.and_then(|p| p.selected_item);
    if prev_selected != next.selected_item {
        out.push(EngineCommand::SetFilter {
            layer: MapLayer::SelectedPoint,
            filter: selected_item_filter(next.selected_item),
        });
        out.push(EngineCommand::SetVisibility {
            layer: MapLayer::SelectedPoint,
            visible: true,
        });
    }

    if let Some(state) = next.single_state_filter() {
        let mut key = state.to_ascii_uppercase();
        if let Some(district) = next.district {
            key = catalog::district_bbox_key(state, district);
            if let Some(geo_id) = catalog::geo_id(state, district) {
                let selection = DistrictSelection {
                    state: state.to_string(),
                    district: format!("{district:02}"),
                    geo_id,
                };
                out.extend(highlight_commands(std::slice::from_ref(&selection.geo_id)));
            }
        }
        // Unknown keys leave the viewport alone.
        if let Some(bounds) = catalog::bounding_box(&key) {
            let camera = solve_viewport(&bounds, canvas_px);
            out.push(EngineCommand::FlyTo {
                center: camera.center,
                zoom: camera.zoom,
            });
        }
        return out;
    }

    if let Some(center) = next.center.as_ref().and_then(GeocodedPoint::lng_lat) {
        out.push(EngineCommand::FlyTo {
            center,
            zoom: point_focus_zoom(next.distance),
        });
        out.push(EngineCommand::Resize);
        return out;
    }

    out.push(EngineCommand::FitBounds(CONTINENTAL_US));
    out
}

/// Filter for the selected-point highlight layer: the item's id, or an
/// equality no item can satisfy when the selection is cleared.
pub fn selected_item_filter(selected: Option<ItemId>) -> FilterExpr {
    let value = match selected {
        Some(ItemId(id)) => Value::from(id),
        None => Value::Bool(false),
    };
    FilterExpr::eq("id", value)
}

/// Boundary filter matching any of `geo_ids`, applied to fill and border with
/// visibility forced on.
pub fn highlight_commands(geo_ids: &[String]) -> Vec<EngineCommand> {
    let filter = district_filter(geo_ids);
    let mut out = Vec::with_capacity(4);
    for layer in [MapLayer::DistrictFill, MapLayer::DistrictBorder] {
        out.push(EngineCommand::SetFilter {
            layer,
            filter: filter.clone(),
        });
        out.push(EngineCommand::SetVisibility {
            layer,
            visible: true,
        });
    }
    out
}

/// `any`-combinator over the ids; a lone id keeps the `all` wrapper the
/// boundary layers were authored against.
pub fn district_filter(geo_ids: &[String]) -> FilterExpr {
    match geo_ids {
        [geo_id] => FilterExpr::All(vec![FilterExpr::eq("GEOID", geo_id.as_str())]),
        many => FilterExpr::Any(
            many.iter()
                .map(|id| FilterExpr::eq("GEOID", id.as_str()))
                .collect(),
        ),
    }
}
