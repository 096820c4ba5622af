use crate::bounds::LngLatBounds;
use crate::geo::LngLat;
use crate::mercator;

/// Zoom-0 world size in pixels (one 512px tile, matching the renderer).
const TILE_SIZE: f64 = 512.0;

/// Fitted zoom never goes below this; very large or degenerate boxes land here.
const MIN_FIT_ZOOM: f64 = 2.5;

/// Margin subtracted from a fit above the floor so the box does not touch the edges.
const FIT_MARGIN: f64 = 0.5;

/// Map camera target: center plus fractional zoom.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub center: LngLat,
    pub zoom: f64,
}

/// Fits `bounds` into a viewport of `viewport_px` pixels.
///
/// Zoom is the log2 ratio between the viewport and the box's pixel span at
/// zoom 0, taken over the tighter axis. Fits below 2.5 clamp to 2.5; fits at
/// or above it lose 0.5 as margin. The asymmetry is intentional; keep it.
pub fn solve_viewport(bounds: &LngLatBounds, viewport_px: [f64; 2]) -> Camera {
    let sw = mercator::project(bounds.south_west());
    let ne = mercator::project(bounds.north_east());

    let span = [(ne[0] - sw[0]).abs(), (sw[1] - ne[1]).abs()];
    let center = mercator::unproject([(sw[0] + ne[0]) / 2.0, (sw[1] + ne[1]) / 2.0]);

    let mut zoom = fit_zoom(span, viewport_px);
    if zoom < MIN_FIT_ZOOM {
        zoom = MIN_FIT_ZOOM;
    } else {
        zoom -= FIT_MARGIN;
    }

    Camera { center, zoom }
}

fn fit_zoom(span_world: [f64; 2], viewport_px: [f64; 2]) -> f64 {
    let fit = |span: f64, px: f64| (px / (span * TILE_SIZE)).log2();
    match (span_world[0] > 0.0, span_world[1] > 0.0) {
        (true, true) => fit(span_world[0], viewport_px[0]).min(fit(span_world[1], viewport_px[1])),
        (true, false) => fit(span_world[0], viewport_px[0]),
        (false, true) => fit(span_world[1], viewport_px[1]),
        // A point box carries no scale to fit.
        (false, false) => f64::NEG_INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::{FIT_MARGIN, MIN_FIT_ZOOM, TILE_SIZE, solve_viewport};
    use crate::bounds::LngLatBounds;
    use crate::mercator;

    const CONTINENTAL: LngLatBounds = LngLatBounds::new([-128.8, 23.6], [-65.4, 50.2]);

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn point_box_clamps_to_zoom_floor() {
        let b = LngLatBounds::new([-75.0, 40.0], [-75.0, 40.0]);
        let cam = solve_viewport(&b, [600.0, 400.0]);
        assert_eq!(cam.zoom, MIN_FIT_ZOOM);
        assert_close(cam.center.lng, -75.0, 1e-9);
        assert_close(cam.center.lat, 40.0, 1e-9);
    }

    #[test]
    fn continental_fit_matches_reference_minus_margin() {
        let sw = mercator::project(CONTINENTAL.south_west());
        let ne = mercator::project(CONTINENTAL.north_east());
        let zx = (600.0 / ((ne[0] - sw[0]).abs() * TILE_SIZE)).log2();
        let zy = (400.0 / ((sw[1] - ne[1]).abs() * TILE_SIZE)).log2();
        let reference = zx.min(zy);

        let cam = solve_viewport(&CONTINENTAL, [600.0, 400.0]);
        assert_close(cam.zoom, reference - FIT_MARGIN, 0.1);
    }

    #[test]
    fn center_is_mercator_midpoint() {
        let cam = solve_viewport(&CONTINENTAL, [600.0, 400.0]);
        let mid = mercator::unproject([
            (mercator::project(CONTINENTAL.south_west())[0]
                + mercator::project(CONTINENTAL.north_east())[0])
                / 2.0,
            (mercator::project(CONTINENTAL.south_west())[1]
                + mercator::project(CONTINENTAL.north_east())[1])
                / 2.0,
        ]);
        assert_close(cam.center.lng, mid.lng, 1e-9);
        assert_close(cam.center.lat, mid.lat, 1e-9);
    }

    #[test]
    fn whole_world_clamps_to_zoom_floor() {
        let b = LngLatBounds::new([-180.0, -85.0], [180.0, 85.0]);
        let cam = solve_viewport(&b, [600.0, 400.0]);
        assert_eq!(cam.zoom, MIN_FIT_ZOOM);
    }
}
