use foundation::bounds::LngLatBounds;
use foundation::geo::LngLat;
use serde_json::Value;
use thiserror::Error;

use crate::filter::FilterExpr;

/// Rendering layers the controller manages.
///
/// `DistrictInteractive` is hit-test only; the controller never mutates its
/// filter or visibility.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapLayer {
    Points,
    SelectedPoint,
    DistrictFill,
    DistrictBorder,
    DistrictInteractive,
}

impl MapLayer {
    /// Layer id in the engine's style document.
    pub fn style_id(&self) -> &'static str {
        match self {
            MapLayer::Points => "group-points",
            MapLayer::SelectedPoint => "group-point-selected",
            MapLayer::DistrictFill => "selected-fill",
            MapLayer::DistrictBorder => "selected-border",
            MapLayer::DistrictInteractive => "district_interactive",
        }
    }
}

/// Engine-level controls registered at initialization.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
    Navigation,
    /// The "reset to national view" button; activation routes through
    /// `MapViewController::handle_reset`.
    NationalView,
}

/// Pixel position within the engine canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cursor affordance over the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// A rendered feature returned from hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub coordinates: LngLat,
    pub properties: serde_json::Map<String, Value>,
}

impl Feature {
    pub fn new(coordinates: LngLat) -> Self {
        Self {
            coordinates,
            properties: serde_json::Map::new(),
        }
    }

    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// String property, `None` when absent or not a string.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key)?.as_str()
    }
}

/// Popup chrome settings forwarded to the engine's single popup instance.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PopupOptions {
    pub close_button: bool,
    pub close_on_click: bool,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            close_button: true,
            close_on_click: true,
        }
    }
}

/// Everything an engine implementation needs at construction time. Replaces
/// the global access-token/style singletons of the original embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub style_url: String,
    pub access_token: String,
    pub controls: Vec<Control>,
    pub popup: PopupOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            style_url: String::new(),
            access_token: String::new(),
            controls: vec![Control::Navigation, Control::NationalView],
            popup: PopupOptions::default(),
        }
    }
}

/// Errors from the engine construction boundary. Everything after
/// construction is absent-is-valid and does not error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The host cannot render the engine at all; the embedding shows its
    /// fallback view instead of constructing a controller.
    #[error("rendering engine unsupported in this environment")]
    Unsupported,

    #[error("engine configuration error: {0}")]
    Config(String),
}

/// One reconciliation step applied to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Resize,
    FlyTo { center: LngLat, zoom: f64 },
    FitBounds(LngLatBounds),
    SetFilter { layer: MapLayer, filter: FilterExpr },
    SetVisibility { layer: MapLayer, visible: bool },
}

/// The narrow imperative surface of the rendering engine.
///
/// One live instance per controller; the controller owns it exclusively and
/// drops it on teardown. Before the engine reports loaded it must tolerate
/// every call here as an inert no-op (external contract, not enforced).
pub trait MapEngine {
    fn resize(&mut self);
    fn fly_to(&mut self, center: LngLat, zoom: f64);
    fn fit_bounds(&mut self, bounds: LngLatBounds);
    fn set_filter(&mut self, layer: MapLayer, filter: FilterExpr);
    fn set_visibility(&mut self, layer: MapLayer, visible: bool);
    fn visibility(&self, layer: MapLayer) -> bool;

    /// Current canvas size in pixels, `[width, height]`.
    fn canvas_size(&self) -> [f64; 2];

    /// Rendered features of `layer` at a pixel, topmost first.
    fn query_rendered(&self, point: ScreenPoint, layer: MapLayer) -> Vec<Feature>;

    fn set_cursor(&mut self, cursor: Cursor);

    /// Repositions the engine's single reusable popup and replaces its
    /// content. Implementations must not allocate a popup per call.
    fn show_popup(&mut self, at: LngLat, html: &str);

    fn add_control(&mut self, control: Control);
    fn disable_rotation(&mut self);
    fn disable_scroll_zoom(&mut self);

    fn apply(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Resize => self.resize(),
            EngineCommand::FlyTo { center, zoom } => self.fly_to(center, zoom),
            EngineCommand::FitBounds(bounds) => self.fit_bounds(bounds),
            EngineCommand::SetFilter { layer, filter } => self.set_filter(layer, filter),
            EngineCommand::SetVisibility { layer, visible } => {
                self.set_visibility(layer, visible)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Feature, MapLayer};
    use foundation::geo::LngLat;

    #[test]
    fn style_ids_are_stable() {
        assert_eq!(MapLayer::Points.style_id(), "group-points");
        assert_eq!(MapLayer::SelectedPoint.style_id(), "group-point-selected");
        assert_eq!(MapLayer::DistrictFill.style_id(), "selected-fill");
        assert_eq!(MapLayer::DistrictBorder.style_id(), "selected-border");
        assert_eq!(
            MapLayer::DistrictInteractive.style_id(),
            "district_interactive"
        );
    }

    #[test]
    fn engine_errors_describe_the_construction_boundary() {
        assert_eq!(
            super::EngineError::Unsupported.to_string(),
            "rendering engine unsupported in this environment"
        );
        assert_eq!(
            super::EngineError::Config("missing style url".into()).to_string(),
            "engine configuration error: missing style url"
        );
    }

    #[test]
    fn prop_str_ignores_non_strings() {
        let f = Feature::new(LngLat::new(0.0, 0.0))
            .with_property("title", "Group")
            .with_property("count", 3);
        assert_eq!(f.prop_str("title"), Some("Group"));
        assert_eq!(f.prop_str("count"), None);
        assert_eq!(f.prop_str("missing"), None);
    }
}
