use foundation::geo::LngLat;
use tracing::{debug, trace};

use crate::engine::{Cursor, EngineConfig, MapEngine, MapLayer, ScreenPoint};
use crate::gesture::{GestureResult, interpret_district, interpret_proximity};
use crate::popup::popup_html;
use crate::reconcile::{highlight_commands, reconcile};
use crate::snapshot::{DistrictSelection, SearchMode, SelectionSink, SelectionState};

/// A click as delivered by the engine: the canvas pixel and its geographic
/// location.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClickEvent {
    pub point: ScreenPoint,
    pub lng_lat: LngLat,
}

/// Drives one rendering-engine instance from selection snapshots and routes
/// its gestures back through the [`SelectionSink`].
///
/// Lifecycle: construction initializes the engine (controls, gesture locks,
/// fixed search mode); [`notify_loaded`](Self::notify_loaded) marks the
/// engine ready, reveals the marker layer, and arms hover handling. Updates
/// arriving earlier are applied anyway — the engine is inert but
/// non-crashing before load. The engine is owned exclusively and dropped
/// with the controller.
pub struct MapViewController<E: MapEngine, S: SelectionSink> {
    engine: E,
    sink: S,
    mode: SearchMode,
    ready: bool,
    prev: Option<SelectionState>,
}

impl<E: MapEngine, S: SelectionSink> MapViewController<E, S> {
    pub fn new(mut engine: E, config: &EngineConfig, mode: SearchMode, sink: S) -> Self {
        for control in &config.controls {
            engine.add_control(*control);
        }
        engine.disable_rotation();
        engine.disable_scroll_zoom();
        debug!(?mode, "map view controller initialized");

        Self {
            engine,
            sink,
            mode,
            ready: false,
            prev: None,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The engine reported its style and data loaded.
    pub fn notify_loaded(&mut self) {
        self.ready = true;
        self.engine
            .set_visibility(MapLayer::Points, true);
        debug!("engine loaded; marker layer visible");
    }

    /// Applies a fresh selection snapshot.
    pub fn update(&mut self, snapshot: SelectionState) {
        let canvas = self.engine.canvas_size();
        let commands = reconcile(self.prev.as_ref(), &snapshot, canvas);
        trace!(commands = commands.len(), "reconciled snapshot");
        for command in commands {
            self.engine.apply(command);
        }
        self.prev = Some(snapshot);
    }

    /// Applies the boundary highlight for the given GEOIDs to the fill and
    /// border layers and forces both visible.
    pub fn highlight_district(&mut self, geo_ids: &[String]) {
        for command in highlight_commands(geo_ids) {
            self.engine.apply(command);
        }
    }

    /// `Some` highlights the resolved district; `None` means the district
    /// filter went away, which hides the boundary layers when they are
    /// showing (their filters stay — harmless while invisible).
    pub fn district_select(&mut self, selection: Option<&DistrictSelection>) {
        match selection {
            Some(sel) => {
                debug!(geo_id = %sel.geo_id, "district selected");
                self.highlight_district(std::slice::from_ref(&sel.geo_id));
            }
            None => {
                if self.engine.visibility(MapLayer::DistrictFill) {
                    self.remove_highlights();
                }
            }
        }
    }

    /// Hides both boundary layers without touching their filters. Idempotent.
    pub fn remove_highlights(&mut self) {
        self.engine
            .set_visibility(MapLayer::DistrictFill, false);
        self.engine
            .set_visibility(MapLayer::DistrictBorder, false);
    }

    /// The national-view control was activated.
    pub fn handle_reset(&mut self) {
        self.sink.reset_selections();
        self.remove_highlights();
    }

    /// Interprets one engine click according to the fixed search mode.
    pub fn handle_click(&mut self, click: ClickEvent) {
        let result = match self.mode {
            SearchMode::Proximity => {
                let markers = self.engine.query_rendered(click.point, MapLayer::Points);
                Some(interpret_proximity(&markers, click.lng_lat))
            }
            SearchMode::District => {
                let boundaries = self
                    .engine
                    .query_rendered(click.point, MapLayer::DistrictInteractive);
                let markers = self.engine.query_rendered(click.point, MapLayer::Points);
                interpret_district(&boundaries, &markers)
            }
        };

        match result {
            Some(GestureResult::Location(point)) => {
                debug!(lat = %point.latitude, lng = %point.longitude, "click resolved to location");
                self.sink.set_location(point);
            }
            Some(GestureResult::District(query)) => {
                debug!(state = %query.state, district = %query.district, "click resolved to district");
                self.sink.search_by_district(query);
            }
            None => {}
        }
    }

    /// Pointer movement over the canvas: cursor affordance plus the single
    /// reusable popup. Inactive until the engine has loaded.
    pub fn handle_hover(&mut self, point: ScreenPoint) {
        if !self.ready {
            return;
        }

        let markers = self.engine.query_rendered(point, MapLayer::Points);
        self.engine.set_cursor(if markers.is_empty() {
            Cursor::Default
        } else {
            Cursor::Pointer
        });

        if let Some(feature) = markers.first() {
            let html = popup_html(feature);
            let at = feature.coordinates;
            self.engine.show_popup(at, &html);
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
