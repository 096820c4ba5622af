use crate::geo::LngLat;

/// Web Mercator latitude limit (degrees). Projection is undefined beyond it.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Projects to normalized Web Mercator world coordinates in `[0, 1]²`,
/// x increasing east, y increasing south.
pub fn project(p: LngLat) -> [f64; 2] {
    let lat = p.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = (p.lng + 180.0) / 360.0;
    let sin_lat = lat.to_radians().sin();
    let y = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * std::f64::consts::PI);
    [x, y]
}

/// Inverse of [`project`].
pub fn unproject(world: [f64; 2]) -> LngLat {
    let lng = world[0] * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * world[1]);
    let lat = (0.5 * (n.exp() - (-n).exp())).atan().to_degrees();
    LngLat::new(lng, lat)
}
