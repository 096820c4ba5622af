//! Recording fakes for the engine and sink seams.
//!
//! The controller is designed to run against these without a real renderer:
//! every imperative call is recorded, hit-test results are scripted per
//! layer, and sink callbacks accumulate for inspection.

use std::collections::BTreeMap;

use foundation::bounds::LngLatBounds;
use foundation::geo::LngLat;

use crate::engine::{
    Control, Cursor, EngineCommand, Feature, MapEngine, MapLayer, ScreenPoint,
};
use crate::filter::FilterExpr;
use crate::snapshot::{DistrictQuery, GeocodedPoint, SelectionSink};

/// A [`MapEngine`] that records every call and replays scripted hit-tests.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    /// Every applied command, in order.
    pub commands: Vec<EngineCommand>,
    pub filters: BTreeMap<MapLayer, FilterExpr>,
    pub visible: BTreeMap<MapLayer, bool>,
    pub cursor: Cursor,
    /// Each popup reposition: location and rendered content.
    pub popups: Vec<(LngLat, String)>,
    pub controls: Vec<Control>,
    pub rotation_disabled: bool,
    pub scroll_zoom_disabled: bool,
    pub canvas: [f64; 2],
    hits: BTreeMap<MapLayer, Vec<Feature>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self {
            canvas: [800.0, 600.0],
            ..Self::default()
        }
    }

    /// Scripts what `query_rendered` returns for `layer`, topmost first.
    pub fn script_hits(&mut self, layer: MapLayer, features: Vec<Feature>) {
        self.hits.insert(layer, features);
    }
}

impl MapEngine for RecordingEngine {
    fn resize(&mut self) {
        self.commands.push(EngineCommand::Resize);
    }

    fn fly_to(&mut self, center: LngLat, zoom: f64) {
        self.commands.push(EngineCommand::FlyTo { center, zoom });
    }

    fn fit_bounds(&mut self, bounds: LngLatBounds) {
        self.commands.push(EngineCommand::FitBounds(bounds));
    }

    fn set_filter(&mut self, layer: MapLayer, filter: FilterExpr) {
        self.filters.insert(layer, filter.clone());
        self.commands.push(EngineCommand::SetFilter { layer, filter });
    }

    fn set_visibility(&mut self, layer: MapLayer, visible: bool) {
        self.visible.insert(layer, visible);
        self.commands
            .push(EngineCommand::SetVisibility { layer, visible });
    }

    fn visibility(&self, layer: MapLayer) -> bool {
        self.visible.get(&layer).copied().unwrap_or(false)
    }

    fn canvas_size(&self) -> [f64; 2] {
        self.canvas
    }

    fn query_rendered(&self, _point: ScreenPoint, layer: MapLayer) -> Vec<Feature> {
        self.hits.get(&layer).cloned().unwrap_or_default()
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn show_popup(&mut self, at: LngLat, html: &str) {
        self.popups.push((at, html.to_string()));
    }

    fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }

    fn disable_rotation(&mut self) {
        self.rotation_disabled = true;
    }

    fn disable_scroll_zoom(&mut self) {
        self.scroll_zoom_disabled = true;
    }
}

/// A [`SelectionSink`] that accumulates every callback.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub locations: Vec<GeocodedPoint>,
    pub district_queries: Vec<DistrictQuery>,
    pub resets: usize,
}

impl SelectionSink for RecordingSink {
    fn set_location(&mut self, point: GeocodedPoint) {
        self.locations.push(point);
    }

    fn search_by_district(&mut self, query: DistrictQuery) {
        self.district_queries.push(query);
    }

    fn reset_selections(&mut self) {
        self.resets += 1;
    }
}
