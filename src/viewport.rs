//! Viewport fitting for the route map.
//!
//! The host map does the actual fit; [`fit_viewport`] predicts where it will
//! land (Web Mercator, 256px tiles, whole zoom levels) so route framing can be
//! checked without a rendering surface.

use std::f64::consts::PI;

use crate::polyline::Bounds;

/// Padding applied on every side when fitting to a route.
pub const FIT_PADDING_PX: f64 = 50.0;

const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the square Mercator world.
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// Request handed to the host map: fit these bounds with this padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRequest {
    pub bounds: Bounds,
    pub padding: f64,
}

impl FitRequest {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            padding: FIT_PADDING_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// (latitude, longitude)
    pub center: (f64, f64),
    pub zoom: u32,
}

/// World pixel position at zoom 0.
fn project((lat, lng): (f64, f64)) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (lng + 180.0) / 360.0 * TILE_SIZE;
    let y = (1.0 - (PI / 4.0 + lat / 2.0).tan().ln() / PI) / 2.0 * TILE_SIZE;
    (x, y)
}

fn unproject((x, y): (f64, f64)) -> (f64, f64) {
    let lng = x / TILE_SIZE * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * y / TILE_SIZE);
    let lat = n.sinh().atan().to_degrees();
    (lat, lng)
}

/// Highest whole zoom at which `request.bounds` fits inside `size` minus the
/// padding, capped at `max_zoom`, and the centre of the bounds.
pub fn fit_viewport(request: &FitRequest, size: ViewportSize, max_zoom: u32) -> Viewport {
    let (west, north) = project((request.bounds.north, request.bounds.west));
    let (east, south) = project((request.bounds.south, request.bounds.east));
    let center = unproject(((west + east) / 2.0, (north + south) / 2.0));

    let avail_w = size.width - 2.0 * request.padding;
    let avail_h = size.height - 2.0 * request.padding;
    if avail_w <= 0.0 || avail_h <= 0.0 {
        return Viewport { center, zoom: 0 };
    }

    let span_w = east - west;
    let span_h = south - north;
    let scale = match (span_w > 0.0, span_h > 0.0) {
        (false, false) => return Viewport { center, zoom: max_zoom },
        (true, false) => avail_w / span_w,
        (false, true) => avail_h / span_h,
        (true, true) => (avail_w / span_w).min(avail_h / span_h),
    };

    let zoom = scale.log2().floor().clamp(0.0, max_zoom as f64) as u32;
    Viewport { center, zoom }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(south: f64, west: f64, north: f64, east: f64) -> Bounds {
        Bounds {
            south,
            west,
            north,
            east,
        }
    }

    #[test]
    fn test_projection_roundtrip() {
        let point = (39.8283, -98.5795);
        let (lat, lng) = unproject(project(point));
        assert!((lat - point.0).abs() < 1e-9);
        assert!((lng - point.1).abs() < 1e-9);
    }

    #[test]
    fn test_whole_world_fits_at_zoom_zero() {
        let request = FitRequest {
            bounds: bounds(-80.0, -180.0, 80.0, 180.0),
            padding: 0.0,
        };
        let view = fit_viewport(&request, ViewportSize { width: 300.0, height: 300.0 }, 19);
        assert_eq!(view.zoom, 0);
    }

    #[test]
    fn test_fitted_bounds_stay_inside_padded_viewport() {
        let request = FitRequest::new(bounds(32.78, -97.52, 35.47, -96.80));
        let size = ViewportSize { width: 800.0, height: 500.0 };
        let view = fit_viewport(&request, size, 19);

        let scale = 2f64.powi(view.zoom as i32);
        let (x1, y1) = project((request.bounds.north, request.bounds.west));
        let (x2, y2) = project((request.bounds.south, request.bounds.east));
        assert!((x2 - x1) * scale <= size.width - 100.0);
        assert!((y2 - y1) * scale <= size.height - 100.0);
        // one more level would not fit
        assert!((x2 - x1) * scale * 2.0 > size.width - 100.0 || (y2 - y1) * scale * 2.0 > size.height - 100.0);
        assert!(request.bounds.contains(view.center));
    }

    #[test]
    fn test_single_point_uses_max_zoom() {
        let request = FitRequest::new(Bounds::around((41.88, -87.63)));
        let view = fit_viewport(&request, ViewportSize { width: 800.0, height: 500.0 }, 19);
        assert_eq!(view.zoom, 19);
        assert!((view.center.0 - 41.88).abs() < 1e-9);
    }

    #[test]
    fn test_padding_larger_than_container() {
        let request = FitRequest::new(bounds(30.0, -100.0, 40.0, -90.0));
        let view = fit_viewport(&request, ViewportSize { width: 80.0, height: 80.0 }, 19);
        assert_eq!(view.zoom, 0);
    }
}
