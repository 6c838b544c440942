//! Stop placement on the projected route.
//!
//! Waypoints (current location, pickup, dropoff) are placed at the exact
//! coordinates the planner returns. Other stops use their own coordinates
//! when present; otherwise their position is *estimated* from elapsed hours,
//! assuming constant speed along the path. The estimate is for display only
//! and can be well off where the truck slows down or waits.

use tracing::debug;

use crate::polyline::{Polyline, to_lat_lng};
use crate::summary::group_thousands;
use crate::trip::{Stop, StopKind, TripRoute, WaypointRole};

pub const ICON_SIZE_PX: u32 = 36;
pub const ICON_ANCHOR_PX: u32 = 18;

/// Everything that can carry a marker on the route map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Current,
    Pickup,
    Dropoff,
    Fuel,
    Rest,
}

impl MarkerKind {
    pub fn color(self) -> &'static str {
        match self {
            MarkerKind::Current => "#8b5cf6",
            MarkerKind::Pickup => "#22c55e",
            MarkerKind::Dropoff => "#ef4444",
            MarkerKind::Fuel => "#f59e0b",
            MarkerKind::Rest => "#6366f1",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            MarkerKind::Current => "🚛",
            MarkerKind::Pickup => "📦",
            MarkerKind::Dropoff => "🏁",
            MarkerKind::Fuel => "⛽",
            MarkerKind::Rest => "🛏️",
        }
    }

    /// Default map label when a stop has no name.
    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::Current => "Current Location",
            MarkerKind::Pickup => "Pickup",
            MarkerKind::Dropoff => "Drop-off",
            MarkerKind::Fuel => "Truck Stop / Fuel",
            MarkerKind::Rest => "Rest Stop / Motel",
        }
    }

    /// Stacking priority; higher draws on top.
    pub fn z_index(self) -> i32 {
        match self {
            MarkerKind::Pickup => 1000,
            MarkerKind::Dropoff => 900,
            MarkerKind::Current => 800,
            MarkerKind::Fuel | MarkerKind::Rest => 500,
        }
    }
}

impl From<WaypointRole> for MarkerKind {
    fn from(role: WaypointRole) -> Self {
        match role {
            WaypointRole::Current => MarkerKind::Current,
            WaypointRole::Pickup => MarkerKind::Pickup,
            WaypointRole::Dropoff => MarkerKind::Dropoff,
        }
    }
}

impl From<StopKind> for MarkerKind {
    fn from(kind: StopKind) -> Self {
        match kind {
            StopKind::Pickup => MarkerKind::Pickup,
            StopKind::Dropoff => MarkerKind::Dropoff,
            StopKind::Fuel => MarkerKind::Fuel,
            StopKind::Rest => MarkerKind::Rest,
        }
    }
}

/// How a marker's position was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementSource {
    Waypoint,
    /// The stop carried its own coordinates.
    Explicit,
    /// Proportional estimate; `index` is into the projected path.
    Estimated { index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub kind: MarkerKind,
    /// (latitude, longitude)
    pub position: (f64, f64),
    pub label: String,
    pub hour: Option<f64>,
    pub mile: Option<f64>,
    pub map_link: Option<String>,
    pub z_index: i32,
    pub source: PlacementSource,
}

impl PlacedMarker {
    fn waypoint(role: WaypointRole, position: (f64, f64)) -> Self {
        let kind = MarkerKind::from(role);
        Self {
            kind,
            position,
            label: kind.label().to_string(),
            hour: None,
            mile: None,
            map_link: None,
            z_index: kind.z_index(),
            source: PlacementSource::Waypoint,
        }
    }

    fn stop(stop: &Stop, position: (f64, f64), source: PlacementSource) -> Self {
        let kind = MarkerKind::from(stop.kind);
        let label = match stop.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => kind.label().to_string(),
        };
        Self {
            kind,
            position,
            label,
            hour: Some(stop.hour),
            mile: stop.mile,
            map_link: stop.map_link.clone(),
            z_index: kind.z_index(),
            source,
        }
    }

    pub fn icon(&self) -> MarkerIcon {
        MarkerIcon {
            color: self.kind.color(),
            glyph: self.kind.glyph(),
            label: self.label.clone(),
        }
    }

    /// Detail popup contents.
    pub fn popup_html(&self) -> String {
        let mut html = format!(
            "<div class=\"map-popup\"><strong>{}</strong>",
            escape_html(&self.label)
        );
        if let Some(hour) = self.hour {
            html.push_str(&format!("<br/>Hour {}", hour));
            if let Some(mile) = self.mile {
                html.push_str(&format!(" • Mile {}", group_thousands(mile)));
            }
        }
        if let Some(link) = &self.map_link {
            html.push_str(&format!(
                "<br/><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View on Google Maps</a>",
                escape_html(link)
            ));
        }
        html.push_str("</div>");
        html
    }
}

/// Custom marker icon: coloured badge, glyph and a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub color: &'static str,
    pub glyph: &'static str,
    pub label: String,
}

impl MarkerIcon {
    pub fn html(&self) -> String {
        format!(
            "<div class=\"stop-marker-inner\" style=\"--stop-color: {color}\">\
             <span class=\"stop-emoji\">{glyph}</span></div>\
             <div class=\"stop-marker-label\" style=\"--stop-color: {color}\">{label}</div>",
            color = self.color,
            glyph = self.glyph,
            label = escape_html(&self.label),
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Index into a path of `point_count` points for a stop at `hour` of a trip
/// lasting `total_span` hours.
///
/// A zero or invalid span is treated as 1 hour, and the fraction is clamped to
/// the path. A non-finite hour lands at the start. Returns `None` only for an
/// empty path.
pub fn estimate_route_index(hour: f64, total_span: f64, point_count: usize) -> Option<usize> {
    if point_count == 0 {
        return None;
    }
    let span = if total_span.is_finite() && total_span > 0.0 {
        total_span
    } else {
        1.0
    };
    let fraction = hour / span;
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let last = point_count - 1;
    Some(((fraction * last as f64).floor() as usize).min(last))
}

/// Resolves every marker for a route: waypoints first, then stops in order.
///
/// Pickup and dropoff stops are skipped when their waypoint already has a
/// marker. Stops that have neither coordinates nor a path to estimate along
/// are dropped.
pub fn resolve_markers(route: &TripRoute, path: &Polyline) -> Vec<PlacedMarker> {
    let mut markers = Vec::with_capacity(WaypointRole::ALL.len() + route.stops.len());

    for role in WaypointRole::ALL {
        if let Some(coord) = route.waypoint(role) {
            markers.push(PlacedMarker::waypoint(role, to_lat_lng(coord)));
        }
    }

    let span = route.hour_span();
    for stop in &route.stops {
        let anchored = stop
            .kind
            .waypoint_role()
            .is_some_and(|role| route.waypoint(role).is_some());
        if anchored {
            continue;
        }

        let placed = match stop.coordinate() {
            Some(position) => Some((position, PlacementSource::Explicit)),
            None => estimate_route_index(stop.hour, span, path.len()).map(|index| {
                (path.points()[index], PlacementSource::Estimated { index })
            }),
        };

        match placed {
            Some((position, source)) => {
                debug!(kind = ?stop.kind, hour = stop.hour, ?source, "placed stop");
                markers.push(PlacedMarker::stop(stop, position, source));
            }
            None => debug!(kind = ?stop.kind, hour = stop.hour, "no position for stop"),
        }
    }

    markers
}
