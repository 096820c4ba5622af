use foundation::bounds::LngLatBounds;
use tracing::debug;

use crate::engine::{EngineCommand, MapEngine, MapLayer};

/// The non-contiguous territories shown as always-visible secondary maps
/// beside the primary view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InsetRegion {
    Alaska,
    Hawaii,
}

impl InsetRegion {
    pub fn state(&self) -> &'static str {
        match self {
            InsetRegion::Alaska => "AK",
            InsetRegion::Hawaii => "HI",
        }
    }

    pub fn bounds(&self) -> LngLatBounds {
        match self {
            InsetRegion::Alaska => {
                LngLatBounds::new([-170.15625, 51.727028157047734], [-127.61718749999999, 71.85622888185527])
            }
            InsetRegion::Hawaii => {
                LngLatBounds::new([-161.03759765625, 18.542116654448996], [-154.22607421875, 22.573438264572406])
            }
        }
    }
}

/// A secondary map pinned to one region. Owns its own engine instance and
/// simply re-fits its fixed bounds on every update; all selection handling
/// stays with the primary controller.
pub struct MapInset<E: MapEngine> {
    engine: E,
    region: InsetRegion,
}

impl<E: MapEngine> MapInset<E> {
    pub fn new(engine: E, region: InsetRegion) -> Self {
        debug!(state = region.state(), "map inset initialized");
        Self { engine, region }
    }

    pub fn region(&self) -> InsetRegion {
        self.region
    }

    /// The inset engine reported loaded: reveal the marker layer.
    pub fn notify_loaded(&mut self) {
        self.engine.set_visibility(MapLayer::Points, true);
    }

    /// Any snapshot change: resize and re-fit the fixed region.
    pub fn update(&mut self) {
        self.engine.apply(EngineCommand::Resize);
        self.engine
            .apply(EngineCommand::FitBounds(self.region.bounds()));
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
