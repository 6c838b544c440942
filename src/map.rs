//! Route map driver.
//!
//! [`MapSurface`] is the narrow interface to whatever actually renders tiles
//! and vectors. [`RouteMap`] owns one surface for its whole life: it is
//! configured once on mount, cleared and redrawn on each new route, and
//! destroyed when the map is dropped.

use tracing::{debug, info};

use crate::interaction::{HoverTracker, describe_marker};
use crate::placement::{PlacedMarker, resolve_markers};
use crate::polyline::Polyline;
use crate::summary::group_thousands;
use crate::trip::TripRoute;
use crate::viewport::FitRequest;

/// Shown over the map until a route is drawn.
pub const PLACEHOLDER_TEXT: &str = "Plan a trip to see the route here";

#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    /// (latitude, longitude)
    pub center: (f64, f64),
    pub zoom: u32,
    pub zoom_control: bool,
    pub attribution_control: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: (39.8283, -98.5795),
            zoom: 4,
            zoom_control: false,
            attribution_control: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub max_zoom: u32,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png"
                .to_string(),
            max_zoom: 19,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub round_caps: bool,
}

/// The route is stroked twice: a wide faint glow under a narrow solid line.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStyle {
    pub glow: StrokeStyle,
    pub line: StrokeStyle,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            glow: StrokeStyle {
                color: "#06b6d4",
                weight: 7.0,
                opacity: 0.25,
                round_caps: true,
            },
            line: StrokeStyle {
                color: "#06b6d4",
                weight: 4.0,
                opacity: 0.9,
                round_caps: true,
            },
        }
    }
}

/// Rendering surface driven by [`RouteMap`].
///
/// All coordinates are (latitude, longitude). Drawing calls add to a single
/// layer group that [`clear_layers`](Self::clear_layers) empties; tiles and
/// controls live outside it.
pub trait MapSurface {
    /// Handle to the element the map renders into.
    type Container: ?Sized;

    /// Creates the map bound to `container`, without controls attached.
    fn create(container: &Self::Container, options: &MapOptions) -> Self
    where
        Self: Sized;

    fn add_tile_layer(&mut self, layer: &TileLayer);

    fn add_zoom_control(&mut self, position: ControlPosition);

    fn clear_layers(&mut self);

    fn draw_polyline(&mut self, points: &[(f64, f64)], style: &StrokeStyle);

    fn fit_bounds(&mut self, request: &FitRequest);

    /// Places a marker with its icon, stacking priority and popup.
    fn add_marker(&mut self, marker: &PlacedMarker);

    fn destroy(&mut self);
}

/// What the map currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MapState {
    #[default]
    Empty,
    Drawn {
        path: Polyline,
        markers: Vec<PlacedMarker>,
        fit: FitRequest,
    },
}

#[derive(Debug)]
pub struct RouteMap<S: MapSurface> {
    surface: S,
    style: RouteStyle,
    state: MapState,
    hover: HoverTracker,
}

impl<S: MapSurface> RouteMap<S> {
    /// Creates the surface in `container`, adds the zoom control and tile
    /// background.
    pub fn mount(container: &S::Container, options: &MapOptions, tiles: &TileLayer) -> Self {
        let mut surface = S::create(container, options);
        surface.add_zoom_control(ControlPosition::BottomRight);
        surface.add_tile_layer(tiles);
        info!(zoom = options.zoom, "route map mounted");

        Self {
            surface,
            style: RouteStyle::default(),
            state: MapState::Empty,
            hover: HoverTracker::new(PLACEHOLDER_TEXT),
        }
    }

    pub fn with_style(mut self, style: RouteStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces whatever is drawn with `route`.
    ///
    /// No route, or a route without geometry, leaves the map empty and the
    /// viewport where it was.
    pub fn render(&mut self, route: Option<&TripRoute>) -> &MapState {
        self.surface.clear_layers();

        let path = route
            .map(|route| Polyline::from_lon_lat(&route.geometry))
            .unwrap_or_default();
        let (Some(route), Some(bounds)) = (route, path.bounds()) else {
            self.state = MapState::Empty;
            self.hover = HoverTracker::new(PLACEHOLDER_TEXT);
            return &self.state;
        };

        self.surface.draw_polyline(path.points(), &self.style.glow);
        self.surface.draw_polyline(path.points(), &self.style.line);

        let fit = FitRequest::new(bounds);
        self.surface.fit_bounds(&fit);

        let markers = resolve_markers(route, &path);
        for marker in &markers {
            self.surface.add_marker(marker);
        }

        let length_miles = path.length_miles();
        debug!(
            points = path.len(),
            markers = markers.len(),
            length_miles,
            ?bounds,
            "route drawn"
        );

        self.hover = HoverTracker::new(format!(
            "{} markers • {} mi drawn",
            markers.len(),
            group_thousands(length_miles.round())
        ));
        self.state = MapState::Drawn { path, markers, fit };
        &self.state
    }

    pub fn state(&self) -> &MapState {
        &self.state
    }

    pub fn shows_placeholder(&self) -> bool {
        matches!(self.state, MapState::Empty)
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        match &self.state {
            MapState::Drawn { markers, .. } => markers,
            MapState::Empty => &[],
        }
    }

    pub fn pointer_enter_marker(&mut self, index: usize) {
        if let Some(marker) = self.markers().get(index) {
            let description = describe_marker(marker);
            self.hover.pointer_enter(description);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hover.pointer_leave();
    }

    pub fn hover_text(&self) -> &str {
        self.hover.text()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: MapSurface> Drop for RouteMap<S> {
    fn drop(&mut self) {
        self.surface.destroy();
    }
}
